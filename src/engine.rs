//! Interactive traversal of a menu tree
//!
//! A [`Session`] draws a menu, reads one line, and dispatches on it. Each
//! submenu runs in its own call frame, so backing out of a submenu is a plain
//! return. Exiting from any depth returns [`Exit::Quit`] through every frame.

use std::fs::File;
use std::io::{self, BufRead, Read, Write};

use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};

use crate::error::{MenuError, MenuResult};
use crate::menu::{EntryTarget, MenuNode};
use crate::ui::banner::{BannerRenderer, BoxBanner};
use crate::ui::primitives::text::ColoredText;
use crate::ui::style::styled_title;
use crate::ui::RenderOptions;

pub const PROMPT: &str = "Enter your choice: ";
pub const INVALID_CHOICE: &str = "Invalid choice. Press Enter to try again.";

/// How a session (or a single frame) ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    /// The user chose "B" in this frame
    Back,
    /// The user chose "X" somewhere, or input ran out
    Quit,
}

/// Line-oriented input for a session.
pub trait LineSource {
    /// Next line without its line terminator; `None` at end of input.
    fn next_line(&mut self) -> io::Result<Option<String>>;
}

impl<R: BufRead> LineSource for R {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(strip_line_ending(line)))
    }
}

/// Reads the process stdin without buffering.
///
/// Only the bytes of the current line are consumed; anything queued after
/// it stays in the pipe for shell actions, which inherit the same stdin.
#[derive(Debug)]
pub struct StdinSource {
    stdin: File,
}

impl StdinSource {
    pub fn new() -> io::Result<Self> {
        Ok(Self {
            stdin: stdin_file()?,
        })
    }
}

impl LineSource for StdinSource {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        read_unbuffered_line(&mut self.stdin)
    }
}

/// Read one line from the process stdin without buffering past it.
pub(crate) fn read_stdin_line() -> io::Result<Option<String>> {
    read_unbuffered_line(&mut stdin_file()?)
}

/// A handle to fd 0 that bypasses the std-wide stdin buffer.
#[cfg(unix)]
fn stdin_file() -> io::Result<File> {
    use std::os::fd::AsFd;
    Ok(File::from(io::stdin().as_fd().try_clone_to_owned()?))
}

#[cfg(windows)]
fn stdin_file() -> io::Result<File> {
    use std::os::windows::io::AsHandle;
    Ok(File::from(io::stdin().as_handle().try_clone_to_owned()?))
}

/// Read byte by byte up to and including `\n`.
fn read_unbuffered_line(reader: &mut impl Read) -> io::Result<Option<String>> {
    let mut bytes = Vec::new();
    let mut byte = [0u8; 1];
    loop {
        match reader.read(&mut byte) {
            Ok(0) if bytes.is_empty() => return Ok(None),
            Ok(0) => break,
            Ok(_) => {
                bytes.push(byte[0]);
                if byte[0] == b'\n' {
                    break;
                }
            }
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    let line = String::from_utf8_lossy(&bytes).into_owned();
    Ok(Some(strip_line_ending(line)))
}

fn strip_line_ending(mut line: String) -> String {
    let len = line.trim_end_matches(|c: char| c == '\n' || c == '\r').len();
    line.truncate(len);
    line
}

/// A parsed response to the menu prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Selection {
    Back,
    Exit,
    /// 1-based entry number, already range-checked
    Entry(usize),
    Invalid,
}

impl Selection {
    fn parse(input: &str, entry_count: usize) -> Self {
        let normalized = input.trim().to_uppercase();
        match normalized.as_str() {
            "B" => Selection::Back,
            "X" => Selection::Exit,
            other => match other.parse::<usize>() {
                Ok(n) if (1..=entry_count).contains(&n) => Selection::Entry(n),
                _ => Selection::Invalid,
            },
        }
    }
}

/// Draws menus to `output` and reads selections from `input`.
pub struct Session<S, W> {
    input: S,
    output: W,
    options: RenderOptions,
    banner: Box<dyn BannerRenderer>,
}

impl<S: LineSource, W: Write> Session<S, W> {
    pub fn new(input: S, output: W, options: RenderOptions) -> Self {
        Self {
            input,
            output,
            options,
            banner: Box::new(BoxBanner),
        }
    }

    /// Replace the built-in banner renderer.
    pub fn with_banner_renderer(mut self, renderer: impl BannerRenderer + 'static) -> Self {
        self.banner = Box::new(renderer);
        self
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Run `root` until the user backs out of it or exits.
    ///
    /// Action failures and output errors end the session and are returned
    /// as-is; bad input never does.
    pub fn run(&mut self, root: &MenuNode) -> MenuResult<Exit> {
        let exit = self.run_frame(root, 0)?;
        tracing::debug!(?exit, "menu session finished");
        Ok(exit)
    }

    fn run_frame(&mut self, node: &MenuNode, depth: usize) -> MenuResult<Exit> {
        tracing::debug!(depth, title = %node.title(), "enter menu");

        loop {
            self.render(node)?;

            let Some(line) = self.input.next_line()? else {
                tracing::debug!(depth, "end of input; exiting");
                return Ok(Exit::Quit);
            };

            match Selection::parse(&line, node.entries().len()) {
                Selection::Back => {
                    tracing::debug!(depth, title = %node.title(), "leave menu");
                    return Ok(Exit::Back);
                }
                Selection::Exit => return Ok(Exit::Quit),
                Selection::Entry(number) => {
                    let Some(entry) = node.entry_at(number) else {
                        continue;
                    };
                    match entry.target() {
                        EntryTarget::Submenu(child) => {
                            if self.run_frame(child, depth + 1)? == Exit::Quit {
                                return Ok(Exit::Quit);
                            }
                        }
                        EntryTarget::Action(name) => self.invoke(node, name)?,
                        EntryTarget::Inert => {
                            tracing::trace!(entry = %entry.title(), "inert entry selected");
                        }
                    }
                }
                Selection::Invalid => {
                    tracing::trace!(input = %line, "invalid choice");
                    if !self.acknowledge_invalid()? {
                        return Ok(Exit::Quit);
                    }
                }
            }
        }
    }

    fn invoke(&mut self, node: &MenuNode, name: &str) -> MenuResult<()> {
        let registry = node
            .actions()
            .ok_or_else(|| MenuError::ActionRegistryUnavailable {
                action: name.to_string(),
            })?;
        self.output.flush()?;
        registry.invoke(name)
    }

    /// Show the invalid-choice notice and wait for Enter.
    ///
    /// Returns `false` if input ended instead.
    fn acknowledge_invalid(&mut self) -> MenuResult<bool> {
        let notice = ColoredText::warning(INVALID_CHOICE).render(self.options.color);
        write!(self.output, "\n{notice}")?;
        self.output.flush()?;
        Ok(self.input.next_line()?.is_some())
    }

    fn render(&mut self, node: &MenuNode) -> MenuResult<()> {
        let color = self.options.color;

        if self.options.clear_screen {
            execute!(self.output, Clear(ClearType::All), MoveTo(0, 0))?;
        }

        if let Some(banner) = node.banner() {
            let text = self.banner.render(banner, self.options);
            self.output.write_all(text.as_bytes())?;
        }

        write!(
            self.output,
            "\n{}\n\n",
            styled_title(node.title(), node.style(), color)
        )?;
        for (i, entry) in node.entries().iter().enumerate() {
            writeln!(
                self.output,
                "{}. {}",
                i + 1,
                styled_title(entry.title(), entry.style(), color)
            )?;
        }
        write!(self.output, "\nB. Back\nX. Exit\n\n{PROMPT}")?;
        self.output.flush()?;
        Ok(())
    }
}
