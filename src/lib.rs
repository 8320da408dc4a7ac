//! Whitespace word tokenizer backed by a JSON vocabulary file.

pub mod base;
pub mod cli;
pub mod commands;
pub mod error;
pub mod prelude;
pub mod store;
pub mod tokenize;
pub mod vocab;

pub use tokenize::{parse_ids, tokenize};
