//! # huffman_table
//!
//! Builds a Huffman prefix code from the symbol frequencies of an input and
//! returns one `(symbol, frequency, code)` record per distinct symbol.
//!
//! ## Quick Start
//!
//! ```rust
//! use huffman_table::{build_tree, count_frequencies, extract_codes};
//!
//! let frequencies = count_frequencies("aabbbcc".chars());
//! let tree = build_tree(&frequencies)?;
//! let codes = extract_codes(tree.as_ref());
//!
//! let rows: Vec<_> = codes.iter().map(|r| (r.symbol, r.code.as_str())).collect();
//! assert_eq!(rows, vec![('a', "10"), ('b', "0"), ('c', "11")]);
//! # Ok::<(), huffman_table::HuffmanError>(())
//! ```

pub mod code_table;
pub mod error;
pub mod frequency;
pub mod hufftree;
pub mod input;
pub mod min_heap;
pub mod render;
pub mod util;

// Re-export main types for convenience
pub use code_table::{extract_codes, huffman_codes, CodeRecord};
pub use error::HuffmanError;
pub use frequency::{count_frequencies, FrequencyTable};
pub use hufftree::{build_tree, HuffNode, HuffmanTree};
