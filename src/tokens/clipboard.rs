use std::io::Write as _;
use std::process::{Command, Stdio};

use crate::foundation::error::{StudioError, StudioResult};

/// Destination for copied token references.
pub trait Clipboard {
    /// Replace the clipboard contents with `text`.
    fn write_text(&mut self, text: &str) -> StudioResult<()>;
}

/// Clipboard held in memory.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InMemoryClipboard {
    contents: Option<String>,
}

impl InMemoryClipboard {
    /// Empty clipboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Last written text.
    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl Clipboard for InMemoryClipboard {
    fn write_text(&mut self, text: &str) -> StudioResult<()> {
        self.contents = Some(text.to_owned());
        Ok(())
    }
}

/// Clipboard that always fails, for hosts without one.
#[derive(Clone, Copy, Debug, Default)]
pub struct UnavailableClipboard;

impl Clipboard for UnavailableClipboard {
    fn write_text(&mut self, _text: &str) -> StudioResult<()> {
        Err(StudioError::Io(std::io::Error::new(
            std::io::ErrorKind::Unsupported,
            "clipboard not available",
        )))
    }
}

/// Clipboard backed by a command reading the text on stdin (`pbcopy`, `wl-copy`, `xclip`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandClipboard {
    program: String,
    args: Vec<String>,
}

impl CommandClipboard {
    /// Clipboard writing through `program args...`.
    pub fn new(program: impl Into<String>, args: &[&str]) -> Self {
        Self {
            program: program.into(),
            args: args.iter().map(|a| (*a).to_owned()).collect(),
        }
    }

    /// Candidate commands for this host, most specific first.
    pub fn candidates() -> Vec<CommandClipboard> {
        let mut out = Vec::new();
        if cfg!(target_os = "macos") {
            out.push(Self::new("pbcopy", &[]));
        }
        if std::env::var_os("WAYLAND_DISPLAY").is_some() {
            out.push(Self::new("wl-copy", &[]));
        }
        out.push(Self::new("xclip", &["-selection", "clipboard"]));
        out
    }

    /// First candidate whose program runs from `PATH`.
    pub fn detect() -> Option<CommandClipboard> {
        Self::candidates().into_iter().find(|c| c.is_available())
    }

    fn is_available(&self) -> bool {
        Command::new("which")
            .arg(&self.program)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
    }

    /// Program name.
    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Clipboard for CommandClipboard {
    fn write_text(&mut self, text: &str) -> StudioResult<()> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;
        // Reap the child even when the pipe breaks.
        let written = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(text.as_bytes()),
            None => Ok(()),
        };
        let status = child.wait()?;
        written?;
        if !status.success() {
            return Err(StudioError::Io(std::io::Error::other(format!(
                "{} exited with {status}",
                self.program
            ))));
        }
        Ok(())
    }
}

/// The host clipboard command when one exists, else [`UnavailableClipboard`].
pub fn system_clipboard() -> Box<dyn Clipboard> {
    match CommandClipboard::detect() {
        Some(c) => {
            tracing::debug!(program = c.program(), "using clipboard command");
            Box::new(c)
        }
        None => Box::new(UnavailableClipboard),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tokens/clipboard.rs"]
mod tests;
