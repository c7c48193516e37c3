pub mod ast;
pub mod config;
pub mod emit;
pub mod error;
pub mod eval;
pub mod export;
pub mod parser;

pub use ast::{Mapping, Value};
pub use config::SigilConfig;
pub use error::{Diagnostic, SigilError};
