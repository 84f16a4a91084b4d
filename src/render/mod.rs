//! Hand-off of composed documents to document writers.

mod json;
mod text;
pub mod writer;

pub use json::{to_json, JsonFormat};
pub use text::{to_text_proof, TextProofWriter};
pub use writer::{write_document, DocumentWriter};
