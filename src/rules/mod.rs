//! Word validation rules
//!
//! The individual checks, the pipeline that orders them, and the dictionary
//! contract the real-word check relies on.

pub mod checks;
pub mod dictionary;
mod pipeline;

pub use dictionary::{Dictionary, Language, WordListDictionary};
pub use pipeline::validate;
