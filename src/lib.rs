//! Frequency-driven Huffman coding over the byte alphabet.
//!
//! The pipeline builds a prefix-free binary code from the byte frequencies
//! of an input, encodes the input into a packed bit sequence and decodes it
//! back losslessly:
//!
//! 1. [`build_frequency_table`] counts byte occurrences.
//! 2. [`build_huffman_tree`] merges the two lowest-frequency nodes of a
//!    min-priority queue until a single root remains.
//! 3. [`build_code_table`] records each symbol's root-to-leaf path, `0` for
//!    a left edge and `1` for a right edge.
//! 4. [`encode`] concatenates the codes of the input bytes.
//! 5. [`decode`] walks the tree guided by the bits and emits a symbol at
//!    every leaf.
//!
//! Tree construction is deterministic: leaves are seeded in ascending byte
//! order and frequency ties are broken by insertion order, so the same input
//! always produces the same codes.
//!
//! A text with a single distinct symbol degenerates to a bare-leaf tree and
//! an empty code: its encoded sequence is zero-length and [`decode`]
//! reproduces the symbol from the frequency recorded in the leaf.

mod bitvec;
mod code;
mod codec;
mod error;
mod frequency;
mod tree;

pub use bitvec::{Bits, BitVec};
pub use code::{build_code_table, CodeTable};
pub use codec::{decode, encode};
pub use error::HuffmanError;
pub use frequency::{build_frequency_table, FrequencyTable};
pub use tree::{build_huffman_tree, Node};
