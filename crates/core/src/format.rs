//! External pretty-printer for the generated declarations.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use tracing::debug;

use crate::error::FormatError;

/// Default formatter invocation.
pub const DEFAULT_FORMATTER: &[&str] = &["prettier", "--parser", "typescript"];

/// Formats a complete declaration file.
pub trait Formatter {
    /// Return the formatted text, or an error when the source is rejected.
    fn format(&self, source: &str) -> Result<String, FormatError>;
}

/// Returns the text unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct Passthrough;

impl Formatter for Passthrough {
    fn format(&self, source: &str) -> Result<String, FormatError> {
        Ok(source.to_string())
    }
}

/// Runs a program that reads source on stdin and writes the formatted text
/// to stdout.
#[derive(Debug, Clone)]
pub struct CommandFormatter {
    program: String,
    args: Vec<String>,
}

impl CommandFormatter {
    /// `command` is the program followed by its arguments.
    pub fn new<I, S>(command: I) -> Result<Self, FormatError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut parts = command.into_iter().map(Into::into);
        let program = parts
            .next()
            .filter(|p: &String| !p.trim().is_empty())
            .ok_or(FormatError::EmptyCommand)?;
        Ok(Self {
            program,
            args: parts.collect(),
        })
    }

    /// `prettier --parser typescript`.
    pub fn prettier() -> Self {
        Self {
            program: DEFAULT_FORMATTER[0].to_string(),
            args: DEFAULT_FORMATTER[1..].iter().map(|&arg| arg.to_owned()).collect(),
        }
    }

    /// Program name as configured, before `PATH` lookup.
    pub fn program(&self) -> &str {
        &self.program
    }

    fn resolve(&self) -> Result<PathBuf, FormatError> {
        which::which(&self.program).map_err(|source| FormatError::NotFound {
            program: self.program.clone(),
            source,
        })
    }
}

impl Default for CommandFormatter {
    fn default() -> Self {
        Self::prettier()
    }
}

impl Formatter for CommandFormatter {
    fn format(&self, source: &str) -> Result<String, FormatError> {
        let path = self.resolve()?;
        debug!(program = %path.display(), args = ?self.args, "running formatter");

        let spawn_err = |source| FormatError::Spawn {
            path: path.clone(),
            source,
        };
        let mut child = Command::new(&path)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(spawn_err)?;

        // Feed stdin from a second thread so a full stdout pipe cannot stall us.
        let stdin = child.stdin.take();
        let output = std::thread::scope(|scope| {
            let writer = scope.spawn(move || match stdin {
                Some(mut stdin) => stdin.write_all(source.as_bytes()),
                None => Ok(()),
            });
            let output = child.wait_with_output();
            let written = writer
                .join()
                .unwrap_or_else(|_| Err(std::io::Error::other("stdin writer panicked")));
            output.and_then(|output| {
                // A formatter that rejects its input may close stdin early.
                if output.status.success() {
                    written.map(|()| output)
                } else {
                    Ok(output)
                }
            })
        })
        .map_err(spawn_err)?;

        if !output.status.success() {
            return Err(FormatError::Rejected {
                program: self.program.clone(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        String::from_utf8(output.stdout).map_err(|_| FormatError::InvalidOutput {
            program: self.program.clone(),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn passthrough_is_identity() {
        let text = "type A = any;\n";
        assert_eq!(Passthrough.format(text).unwrap(), text);
    }

    #[test]
    fn empty_command_is_rejected() {
        assert!(matches!(
            CommandFormatter::new(Vec::<String>::new()),
            Err(FormatError::EmptyCommand)
        ));
        assert!(matches!(CommandFormatter::new([" "]), Err(FormatError::EmptyCommand)));
    }

    #[test]
    fn default_is_prettier() {
        let formatter = CommandFormatter::default();
        assert_eq!(formatter.program(), "prettier");
        assert_eq!(formatter.args, ["--parser", "typescript"]);
    }

    #[test]
    fn missing_program() {
        let formatter = CommandFormatter::new(["liquid-types-no-such-formatter"]).unwrap();
        let err = formatter.format("").unwrap_err();
        assert!(matches!(err, FormatError::NotFound { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn runs_program_over_stdin() {
        let formatter = CommandFormatter::new(["cat"]).unwrap();
        assert_eq!(formatter.format("export type A = B;\n").unwrap(), "export type A = B;\n");
    }

    #[cfg(unix)]
    #[test]
    fn nonzero_exit_is_fatal() {
        let script = "cat >/dev/null; echo 'SyntaxError: nope' >&2; exit 2";
        let formatter = CommandFormatter::new(["sh", "-c", script]).unwrap();
        match formatter.format("interface {").unwrap_err() {
            FormatError::Rejected { stderr, .. } => assert_eq!(stderr, "SyntaxError: nope"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
