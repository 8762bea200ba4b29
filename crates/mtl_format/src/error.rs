//! Error types for MTL parsing and serialization

use thiserror::Error;

/// Errors reported while parsing MTL text or serializing a library.
///
/// Every failure is fatal to the operation that produced it: a parse error
/// aborts the whole parse with no partial library, and a serialization error
/// yields no output text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MtlError {
    /// A token expected to be a number failed to convert.
    #[error("malformed number `{token}` on line {line}")]
    MalformedNumber {
        /// Line number of the offending directive (1-based)
        line: usize,
        /// The token that failed to convert
        token: String,
    },

    /// An `illum` directive referenced a model outside the 0-10 range.
    #[error("illumination model {index} on line {line} is outside 0-10")]
    IlluminationOutOfRange {
        /// Line number of the offending directive (1-based)
        line: usize,
        /// The out-of-range model index
        index: i64,
    },

    /// A directive line ended before all of its required arguments.
    #[error("`{directive}` on line {line} is missing an argument")]
    MissingArgument {
        /// Line number of the offending directive (1-based)
        line: usize,
        /// The directive or flag keyword that lacked an argument
        directive: String,
    },

    /// A material was serialized without a name.
    #[error("material has no name")]
    MissingName,
}
