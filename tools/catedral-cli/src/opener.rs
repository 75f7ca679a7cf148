//! URI openers used by the CLI.

use std::io::ErrorKind;
use std::path::Path;
use std::process::{Command, Stdio};

use catedral_commerce::checkout::{ExternalOpener, OpenError};
use tracing::debug;

use crate::config::{OpenerConfig, OpenerMode};
use crate::output::Output;

/// Opens URIs with a platform command such as `xdg-open`.
#[derive(Debug, Clone)]
pub struct SystemOpener {
    program: String,
    args: Vec<String>,
}

impl SystemOpener {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Arguments passed to the program for `uri`.
    ///
    /// `cmd` parses its command line itself, so the URI is escaped for it.
    pub fn command_args(&self, uri: &str) -> Vec<String> {
        let uri = if is_cmd(&self.program) {
            escape_for_cmd(uri)
        } else {
            uri.to_string()
        };
        let mut args = self.args.clone();
        args.push(uri);
        args
    }
}

fn is_cmd(program: &str) -> bool {
    Path::new(program)
        .file_stem()
        .is_some_and(|stem| stem.eq_ignore_ascii_case("cmd"))
}

/// Escape `cmd.exe` metacharacters. A caret follows each `%` so no
/// `%NAME%` pair is expanded as a variable.
fn escape_for_cmd(uri: &str) -> String {
    let mut escaped = String::with_capacity(uri.len() + 8);
    for c in uri.chars() {
        match c {
            '&' | '|' | '<' | '>' | '(' | ')' | '^' => {
                escaped.push('^');
                escaped.push(c);
            }
            '%' => escaped.push_str("%^"),
            _ => escaped.push(c),
        }
    }
    escaped
}

impl ExternalOpener for SystemOpener {
    fn open(&self, uri: &str) -> Result<(), OpenError> {
        debug!(program = %self.program, %uri, "spawning opener");
        let status = Command::new(&self.program)
            .args(self.command_args(uri))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();

        match status {
            Ok(status) if status.success() => Ok(()),
            Ok(status) => Err(OpenError::Failed(format!(
                "{} exited with {}",
                self.program, status
            ))),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(OpenError::Unavailable(self.program.clone()))
            }
            Err(e) => Err(OpenError::Failed(e.to_string())),
        }
    }
}

/// Prints URIs instead of opening them.
///
/// In JSON mode nothing is printed; the link is part of the command's
/// JSON result.
pub struct PrintOpener {
    output: Output,
}

impl PrintOpener {
    pub fn new(output: Output) -> Self {
        Self { output }
    }

    /// Line printed for `uri`, if any.
    fn line(&self, uri: &str) -> Option<String> {
        (!self.output.is_json()).then(|| uri.to_string())
    }
}

impl ExternalOpener for PrintOpener {
    fn open(&self, uri: &str) -> Result<(), OpenError> {
        if let Some(line) = self.line(uri) {
            self.output.kv("link", &line);
        }
        Ok(())
    }
}

/// Pick the opener for a configuration.
pub fn from_config(
    config: &OpenerConfig,
    print_links: bool,
    output: &Output,
) -> Box<dyn ExternalOpener> {
    if print_links || config.mode == OpenerMode::Print {
        return Box::new(PrintOpener::new(output.clone()));
    }
    Box::new(SystemOpener::new(
        config.command.as_str(),
        config.args.clone(),
    ))
}
