//! Line input from the user.

use std::io::{self, BufRead, IsTerminal, Write};

use dialoguer::{Input, Password};

/// Source of prompted lines.
pub trait Prompter {
    /// Show `prompt` and read one line. With `echo` off the typed text is
    /// not shown. The returned line may still carry its line terminator.
    fn read_line(&mut self, prompt: &str, echo: bool) -> io::Result<String>;
}

/// How prompted lines are read, given which standard streams are terminals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Full dialoguer prompts on stderr.
    Terminal,
    /// stdin is a terminal but stderr is redirected: plain visible lines,
    /// masked input read straight from the tty with echo off.
    TtyWithoutPromptStream,
    /// stdin is piped: plain lines, nothing to mask.
    Piped,
}

/// Only a terminal stdin needs masking; stderr only decides where prompts render.
pub fn input_mode(stdin_tty: bool, stderr_tty: bool) -> InputMode {
    match (stdin_tty, stderr_tty) {
        (true, true) => InputMode::Terminal,
        (true, false) => InputMode::TtyWithoutPromptStream,
        (false, _) => InputMode::Piped,
    }
}

/// Reads prompted lines from the real terminal or from piped stdin.
pub struct TerminalPrompter {
    mode: InputMode,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self {
            mode: input_mode(io::stdin().is_terminal(), io::stderr().is_terminal()),
        }
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TerminalPrompter {
    fn read_line(&mut self, prompt: &str, echo: bool) -> io::Result<String> {
        match (self.mode, echo) {
            (InputMode::Terminal, true) => Input::<String>::new()
                .with_prompt(prompt)
                .allow_empty(true)
                .interact_text()
                .map_err(io::Error::other),
            (InputMode::Terminal, false) => Password::new()
                .with_prompt(prompt)
                .allow_empty_password(true)
                .interact()
                .map_err(io::Error::other),
            (InputMode::TtyWithoutPromptStream, false) => {
                rpassword::prompt_password(format!("{}: ", prompt))
            }
            (InputMode::TtyWithoutPromptStream, true) | (InputMode::Piped, _) => {
                read_piped_line(prompt)
            }
        }
    }
}

/// Read one line from stdin. End of input counts as an empty line.
fn read_piped_line(prompt: &str) -> io::Result<String> {
    let mut stderr = io::stderr();
    write!(stderr, "{}: ", prompt)?;
    stderr.flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    writeln!(stderr)?;
    Ok(line)
}
