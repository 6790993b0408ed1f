#![forbid(unsafe_code)]
#![deny(warnings, unused_must_use, dead_code, missing_debug_implementations)]
#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro
)]

//! TypeScript declarations from Shopify's Liquid object documentation.
//!
//! The pipeline runs one way:
//! - `schema`: `objects.json` entries
//! - `classify` / `resolve`: return-type descriptions to TypeScript types
//! - `assemble`: interfaces and dictionary aliases per object
//! - `contexts`: optional per-template context interfaces
//! - `generate`: the driver, which emits the module and hands it to a
//!   [`Formatter`]

pub mod assemble;
pub mod classify;
pub mod comment;
pub mod contexts;
pub mod error;
pub mod format;
pub mod generate;
pub mod naming;
pub mod resolve;
pub mod schema;
pub mod ts;

pub use error::{FormatError, GenerateError, SchemaError};
pub use format::{CommandFormatter, DEFAULT_FORMATTER, Formatter, Passthrough};
pub use generate::{GenerateOptions, Generated, GenerationStats, Generator, render};
pub use schema::{ObjectEntry, load_objects};
