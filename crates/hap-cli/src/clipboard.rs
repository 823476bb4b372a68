//! Best-effort clipboard support through the platform's clipboard command.

use std::io::Write;
use std::process::{Command, Stdio};

use tracing::debug;

/// Somewhere to put the derived password besides stdout.
pub trait Clipboard {
    /// Copy `text`. Returns whether it landed on the clipboard.
    fn copy(&mut self, text: &str) -> bool;
}

impl<C: Clipboard + ?Sized> Clipboard for Box<C> {
    fn copy(&mut self, text: &str) -> bool {
        (**self).copy(text)
    }
}

/// Clipboard disabled by flag or config.
pub struct NoClipboard;

impl Clipboard for NoClipboard {
    fn copy(&mut self, _text: &str) -> bool {
        false
    }
}

/// Pipes text into the first clipboard command that works on this system.
pub struct SystemClipboard;

#[cfg(target_os = "macos")]
const CANDIDATES: &[(&str, &[&str])] = &[("pbcopy", &[])];

#[cfg(windows)]
const CANDIDATES: &[(&str, &[&str])] = &[("clip", &[])];

#[cfg(not(any(target_os = "macos", windows)))]
const CANDIDATES: &[(&str, &[&str])] = &[
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
];

impl Clipboard for SystemClipboard {
    fn copy(&mut self, text: &str) -> bool {
        CANDIDATES
            .iter()
            .any(|(program, args)| pipe_to(program, args, text))
    }
}

fn pipe_to(program: &str, args: &[&str], text: &str) -> bool {
    let child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn();
    let mut child = match child {
        Ok(child) => child,
        Err(err) => {
            debug!(program, error = %err, "clipboard command unavailable");
            return false;
        }
    };

    let written = match child.stdin.take() {
        Some(mut stdin) => stdin.write_all(text.as_bytes()).is_ok(),
        None => false,
    };
    match child.wait() {
        Ok(status) if status.success() && written => true,
        Ok(status) => {
            debug!(program, %status, "clipboard command failed");
            false
        }
        Err(err) => {
            debug!(program, error = %err, "clipboard command did not finish");
            false
        }
    }
}
