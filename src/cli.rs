//! Command-line interface definition

use std::path::PathBuf;

use clap::Parser;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// climenu - run hierarchical text menus declared in a document
#[derive(Parser, Debug)]
#[command(name = "climenu")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Both --menu and --actions are required to start a menu session.")]
pub struct Cli {
    /// Menu document (.json, .yaml, .yml or .toml)
    #[arg(short, long, value_name = "PATH")]
    pub menu: Option<PathBuf>,

    /// Actions file mapping action names to shell commands (.toml or .json)
    #[arg(short, long, value_name = "PATH")]
    pub actions: Option<PathBuf>,

    /// Color output mode
    #[arg(long, value_enum)]
    pub color: Option<ColorWhen>,

    /// Do not clear the screen before drawing each menu
    #[arg(long)]
    pub no_clear: bool,

    /// Validate the menu and actions, print a report, and exit
    #[arg(long)]
    pub check: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Both inputs, when given.
    pub fn inputs(&self) -> Option<(&PathBuf, &PathBuf)> {
        Some((self.menu.as_ref()?, self.actions.as_ref()?))
    }
}
