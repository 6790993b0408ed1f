//! TypeScript declaration IR and emission.
//!
//! - `types`: declaration IR (TsType, TsTypeDef, TsModule, Marker)
//! - `emit`: IR -> code strings (via Emit trait)
//! - `utils`: quoting and identifier helpers

mod emit;
mod types;
pub mod utils;

pub use emit::Emit;
pub use types::{Marker, TsLiteral, TsModule, TsPrimitive, TsProp, TsType, TsTypeDef, TypeDefKind};
