//! climenu CLI
//!
//! Usage: climenu --menu <PATH> --actions <PATH>

use std::io::{self, Write};
use std::path::Path;
use std::rc::Rc;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use is_terminal::IsTerminal;
use tracing_subscriber::EnvFilter;

use climenu::check::check_tree;
use climenu::cli::Cli;
use climenu::engine::{Session, StdinSource};
use climenu::ui::RenderOptions;
use climenu::{builder, ActionFile, Config, Exit, MenuDocument, MenuError};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    install_interrupt_handler();

    match run(&cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            let _ = io::stdout().flush();
            eprintln!("Error: {e:#}");
            std::process::exit(1);
        }
    }
}

fn run(cli: &Cli) -> Result<i32> {
    let Some((menu_path, actions_path)) = cli.inputs() else {
        Cli::command().print_help()?;
        return Ok(0);
    };

    let cwd = std::env::current_dir().ok();
    let config = Config::load_or_default(cwd.as_deref());
    let options = RenderOptions::new(cli.color, cli.no_clear, &config);
    tracing::debug!(?options, "render options");

    let (document, warnings) =
        MenuDocument::load_with_warnings(menu_path).map_err(|e| with_path(e, "menu", menu_path))?;
    for warning in &warnings {
        tracing::warn!(file = %menu_path.display(), "{warning}");
    }

    let (action_file, warnings) = ActionFile::load_with_warnings(actions_path)
        .map_err(|e| with_path(e, "actions file", actions_path))?;
    for warning in &warnings {
        tracing::warn!(file = %actions_path.display(), "{warning}");
    }

    let registry = Rc::new(action_file.into_registry(&config.action_settings()));
    tracing::info!(actions = registry.len(), "loaded actions");

    let root = builder::build(&document, Some(registry))?;

    if cli.check {
        let report = check_tree(&root);
        print!("{}", report.render(options.color, options.unicode));
        return Ok(if report.is_success() { 0 } else { 1 });
    }

    let mut session = Session::new(StdinSource::new()?, io::stdout(), options);
    match session.run(&root)? {
        Exit::Back => tracing::debug!("backed out of root menu"),
        Exit::Quit => tracing::debug!("exit requested"),
    }
    Ok(0)
}

/// Name the file in IO errors; other errors already carry it.
fn with_path(err: MenuError, what: &str, path: &Path) -> anyhow::Error {
    match err {
        MenuError::Io(source) => {
            anyhow::Error::new(source).context(format!("cannot read {what} {}", path.display()))
        }
        other => other.into(),
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env("CLIMENU_LOG")
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .init();
}

/// Reset terminal styling and exit with the conventional SIGINT status.
fn install_interrupt_handler() {
    let result = ctrlc::set_handler(|| {
        let mut stdout = io::stdout();
        let _ = writeln!(stdout, "\x1b[0m");
        let _ = stdout.flush();
        std::process::exit(130);
    });
    if let Err(e) = result {
        tracing::warn!(error = %e, "failed to install Ctrl+C handler");
    }
}
