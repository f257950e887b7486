/// CLI layer: vocabulary, lenient tokenizing, resolution and help text.
pub mod help;
pub mod resolve;
pub mod tokenizer;
pub mod vocabulary;

pub use resolve::{debug_requested, resolve};
pub use vocabulary::Command;
