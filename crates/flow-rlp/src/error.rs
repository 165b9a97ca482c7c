/// Errors that can occur while decoding RLP data or converting values.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum RlpError {
    /// Decode was called on an empty input buffer.
    #[error("cannot decode empty input")]
    EmptyInput,

    /// A length prefix or item body extends past the end of the buffer.
    #[error("unexpected end of data: need {needed} more bytes, {remaining} remaining")]
    UnexpectedEof {
        /// Bytes the current item still requires.
        needed: usize,
        /// Bytes left in the buffer.
        remaining: usize,
    },

    /// A child item overruns the byte range declared by its enclosing list.
    #[error("item overruns its enclosing list boundary")]
    ListOverrun,

    /// The outer item did not consume the entire input.
    #[error("trailing {0} bytes after decoded value")]
    TrailingBytes(usize),

    /// A long-form length prefix declared more than 8 length bytes.
    #[error("length prefix of {0} bytes exceeds the 8-byte limit")]
    LengthTooLarge(usize),

    /// A byte string is too wide to convert to the requested integer type.
    #[error("integer field is {0} bytes, maximum is 8")]
    IntegerOverflow(usize),

    /// An integer conversion was attempted on a list node.
    #[error("expected a byte string, found a list")]
    ExpectedBytes,
}
