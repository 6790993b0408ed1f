//! Error types for loading, generating and formatting.

use std::path::PathBuf;

/// The documentation could not be parsed.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// Malformed JSON or an unexpected value shape.
    #[error("invalid object documentation at {path}: {source}")]
    Invalid {
        /// JSON path of the offending value, e.g. `[1].properties[0].name`.
        path: String,
        /// Underlying parse error.
        #[source]
        source: serde_json::Error,
    },
}

/// The external formatter failed or rejected the generated text.
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    /// No program was given.
    #[error("formatter command is empty")]
    EmptyCommand,

    /// The program is not on `PATH`.
    #[error("formatter `{program}` not found on PATH")]
    NotFound {
        /// Program as configured.
        program: String,
        /// Lookup failure.
        #[source]
        source: which::Error,
    },

    /// Spawning or talking to the process failed.
    #[error("failed to run formatter {}: {source}", .path.display())]
    Spawn {
        /// Resolved executable.
        path: PathBuf,
        /// I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The program exited unsuccessfully.
    #[error("formatter `{program}` exited with {status}: {stderr}")]
    Rejected {
        /// Program as configured.
        program: String,
        /// Exit status.
        status: std::process::ExitStatus,
        /// Trimmed standard error.
        stderr: String,
    },

    /// Standard output was not UTF-8.
    #[error("formatter `{program}` produced non-UTF-8 output")]
    InvalidOutput {
        /// Program as configured.
        program: String,
    },
}

/// Generation aborted.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// Two declarations map to the same type name.
    #[error("`{name}` declares `{type_name}`, which is already declared")]
    DuplicateName {
        /// Object or template name that collided.
        name: String,
        /// The contested type name.
        type_name: String,
    },

    /// An object name does not form a TypeScript identifier.
    #[error("object `{object}` does not produce a usable type name (got `{type_name}`)")]
    InvalidTypeName {
        /// Object name as documented.
        object: String,
        /// Derived type name.
        type_name: String,
    },

    /// A template name does not form a TypeScript identifier.
    #[error("template `{template}` does not produce a usable context name (got `{type_name}`)")]
    InvalidContextName {
        /// Template name as documented.
        template: String,
        /// Derived context name.
        type_name: String,
    },

    /// Loading the documentation failed.
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// Formatting the output failed.
    #[error(transparent)]
    Format(#[from] FormatError),
}
