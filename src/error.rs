use thiserror::Error;

/// Errors produced by the coding pipeline.
///
/// All of them are deterministic consequences of the inputs and are detected
/// at the point of occurrence; none are retryable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HuffmanError {
    /// Tree construction needs at least one symbol.
    #[error("cannot build a tree from an empty frequency table")]
    EmptyTable,

    /// The input contains a byte the code table has no entry for. The table
    /// was built from a different text than the one being encoded.
    #[error("byte {0:#04x} has no code in the table")]
    UnknownSymbol(u8),

    /// The bit sequence ran out in the middle of a code, so it does not
    /// decompose into complete root-to-leaf paths.
    #[error("bit sequence ended mid-code after {consumed} bits")]
    TruncatedInput { consumed: usize },
}
