//! 行命令会话：从标准输入读取命令驱动编辑会话
//!
//! 每条命令先作用于内存表面，再把对应事件派发给控制器；宿主服务的完成
//! 消息在命令之间回收。

use std::io::{self, Write};
use std::sync::mpsc::RecvTimeoutError;
use std::time::{Duration, Instant};

use bidipad::kernel::services::ports::EditableSurface;
use bidipad::kernel::services::{KernelMessage, KernelServiceHost};
use bidipad::kernel::{Action, EditorController};
use bidipad::surface::MemorySurface;

pub const HELP: &str = "\
commands:
  type <text>        insert text at the caret (focuses the editor)
  erase [n]          backspace n chars or delete the selection
  select <from> <to> select a char range
  select-all         select everything
  unselect           clear the selection
  focus | blur       move focus into / out of the editor
  toggle             switch between LTR and RTL
  format <name>      bold, italic, underline, align-left, align-center, align-right
  copy               copy the text to the clipboard
  export             save the text as a file
  status [--json]    print the status bar
  show               print what the editor displays
  help | quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Type(String),
    Erase(usize),
    Select { start: usize, end: usize },
    SelectAll,
    Unselect,
    Focus,
    Blur,
    Toggle,
    Format(String),
    Copy,
    Export,
    Status { json: bool },
    Show,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    Empty,
    Unknown(String),
    MissingArgument(&'static str),
    InvalidNumber(String),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::Empty => write!(f, "empty command"),
            ParseError::Unknown(cmd) => write!(f, "unknown command: {} (try `help`)", cmd),
            ParseError::MissingArgument(what) => write!(f, "missing argument: {}", what),
            ParseError::InvalidNumber(value) => write!(f, "not a number: {}", value),
        }
    }
}

impl std::error::Error for ParseError {}

impl ShellCommand {
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        let line = line.trim_end_matches(['\r', '\n']);
        let trimmed = line.trim_start();
        let (name, rest) = match trimmed.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest),
            None => (trimmed, ""),
        };

        let cmd = match name {
            "" => return Err(ParseError::Empty),
            "type" => ShellCommand::Type(rest.to_string()),
            "erase" => {
                let count = match rest.trim() {
                    "" => 1,
                    n => parse_number(n)?,
                };
                ShellCommand::Erase(count)
            }
            "select" => {
                let mut parts = rest.split_whitespace();
                let start = parts.next().ok_or(ParseError::MissingArgument("from"))?;
                let end = parts.next().ok_or(ParseError::MissingArgument("to"))?;
                ShellCommand::Select {
                    start: parse_number(start)?,
                    end: parse_number(end)?,
                }
            }
            "select-all" => ShellCommand::SelectAll,
            "unselect" => ShellCommand::Unselect,
            "focus" => ShellCommand::Focus,
            "blur" => ShellCommand::Blur,
            "toggle" => ShellCommand::Toggle,
            "format" => {
                let name = rest.trim();
                if name.is_empty() {
                    return Err(ParseError::MissingArgument("format name"));
                }
                ShellCommand::Format(name.to_string())
            }
            "copy" => ShellCommand::Copy,
            "export" => ShellCommand::Export,
            "status" => ShellCommand::Status {
                json: rest.trim() == "--json",
            },
            "show" => ShellCommand::Show,
            "help" => ShellCommand::Help,
            "quit" | "exit" => ShellCommand::Quit,
            other => return Err(ParseError::Unknown(other.to_string())),
        };
        Ok(cmd)
    }
}

fn parse_number(value: &str) -> Result<usize, ParseError> {
    value
        .parse()
        .map_err(|_| ParseError::InvalidNumber(value.to_string()))
}

/// One editing session: the controller, its surface and the service host.
pub struct Session {
    controller: EditorController<MemorySurface>,
    host: KernelServiceHost,
    seen_notification: u64,
}

impl Session {
    pub fn new(controller: EditorController<MemorySurface>, host: KernelServiceHost) -> Self {
        Self {
            controller,
            host,
            seen_notification: 0,
        }
    }

    pub fn controller(&self) -> &EditorController<MemorySurface> {
        &self.controller
    }

    /// Runs one command. Returns `false` once the session should end.
    pub fn execute<W: Write>(&mut self, cmd: ShellCommand, out: &mut W) -> io::Result<bool> {
        tracing::debug!(?cmd, "shell command");
        match cmd {
            ShellCommand::Type(text) => {
                self.ensure_focus();
                self.controller.surface_mut().type_text(&text);
                self.dispatch(Action::ContentChanged);
                self.dispatch(Action::SelectionChanged);
            }
            ShellCommand::Erase(count) => {
                self.controller.surface_mut().erase(count);
                self.dispatch(Action::ContentChanged);
                self.dispatch(Action::SelectionChanged);
            }
            ShellCommand::Select { start, end } => {
                self.controller.surface_mut().select(start, end);
                self.dispatch(Action::SelectionChanged);
            }
            ShellCommand::SelectAll => {
                self.controller.surface_mut().select_all();
                self.dispatch(Action::SelectionChanged);
            }
            ShellCommand::Unselect => {
                self.controller.surface_mut().clear_selection();
                self.dispatch(Action::SelectionChanged);
            }
            ShellCommand::Focus => self.ensure_focus(),
            ShellCommand::Blur => {
                self.controller.surface_mut().blur();
                self.dispatch(Action::FocusLost);
            }
            ShellCommand::Toggle => self.dispatch(Action::ToggleDirection),
            ShellCommand::Format(command) => self.dispatch(Action::ApplyFormat {
                command,
                value: None,
            }),
            ShellCommand::Copy => self.dispatch(Action::CopyToClipboard),
            ShellCommand::Export => self.dispatch(Action::ExportAsFile),
            ShellCommand::Status { json } => {
                let status = self.controller.status_bar();
                if json {
                    let line = serde_json::to_string(&status)
                        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
                    writeln!(out, "{}", line)?;
                } else {
                    writeln!(out, "{}", status)?;
                }
            }
            ShellCommand::Show => writeln!(out, "{}", self.controller.surface().rendered())?,
            ShellCommand::Help => writeln!(out, "{}", HELP)?,
            ShellCommand::Quit => return Ok(false),
        }

        self.pump();
        self.flush_notifications(out)?;
        Ok(true)
    }

    /// Waits for outstanding clipboard/download requests, up to `timeout`.
    pub fn finish<W: Write>(&mut self, out: &mut W, timeout: Duration) -> io::Result<()> {
        let deadline = Instant::now() + timeout;
        while self.host.in_flight() > 0 {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match self.host.recv_timeout(remaining) {
                Ok(KernelMessage::Action(action)) => {
                    self.controller.dispatch(action);
                }
                Err(RecvTimeoutError::Timeout) => {
                    tracing::warn!(pending = self.host.in_flight(), "host requests still pending");
                    break;
                }
                Err(RecvTimeoutError::Disconnected) => break,
            }
        }
        self.flush_notifications(out)
    }

    fn ensure_focus(&mut self) {
        if self.controller.surface().has_focus() {
            return;
        }
        self.controller.surface_mut().focus();
        self.dispatch(Action::FocusGained);
    }

    fn dispatch(&mut self, action: Action) {
        let result = self.controller.dispatch(action);
        self.host.run_effects(result.effects);
    }

    fn pump(&mut self) {
        while let Ok(KernelMessage::Action(action)) = self.host.try_recv() {
            self.controller.dispatch(action);
        }
        self.controller.dispatch(Action::Tick {
            now: Instant::now(),
        });
    }

    fn flush_notifications<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        for notification in self.controller.notifications().since(self.seen_notification) {
            writeln!(out, "{}", notification)?;
            self.seen_notification = notification.id;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/unit/shell.rs"]
mod tests;
