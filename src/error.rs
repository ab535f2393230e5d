use thiserror::Error;

use crate::min_heap::HeapErr;

#[derive(Error, Debug)]
pub enum HuffmanError {
    /// Extraction from an empty priority queue. The tree builder never does
    /// this on its own, so seeing it means the merge loop invariant broke.
    #[error("priority queue underflow: extract_min called on an empty queue")]
    EmptyQueue,

    #[error("invalid input from {source_name}: {message}")]
    InvalidInput { source_name: String, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<HeapErr> for HuffmanError {
    fn from(e: HeapErr) -> Self {
        match e {
            HeapErr::HeapUnderflow => HuffmanError::EmptyQueue,
        }
    }
}

pub type Result<T> = std::result::Result<T, HuffmanError>;
