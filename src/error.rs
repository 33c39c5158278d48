use std::path::PathBuf;

use thiserror::Error;

use crate::sol::schema::WireType;

/// Failures of the numeric layer for a single decimal value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueError {
    /// The value is not a non-negative decimal integer.
    #[error("{0:?} is not a non-negative decimal integer")]
    Parse(String),

    /// The value does not fit in the target width.
    #[error("value has {bits} significant bits, which exceeds the {width}-bit width")]
    Overflow { bits: u64, width: u32 },
}

/// Errors raised while turning job outputs into their packed encoding.
#[derive(Debug, Error)]
pub enum Error {
    /// The outputs file path is missing or does not point to a file.
    #[error("Invalid outputs file argument: {0}")]
    Argument(String),

    #[error("Error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error parsing outputs JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A record field failed to parse or to fit its width.
    #[error("Record {index}, field `{field}`: {source}")]
    Field {
        index: usize,
        field: &'static str,
        #[source]
        source: ValueError,
    },

    /// A record supplied a different number of fields than the schema declares.
    #[error("Record {index} has {actual} fields but the schema declares {expected}")]
    SchemaMismatch {
        index: usize,
        expected: usize,
        actual: usize,
    },

    /// A field's byte length does not match the width of its wire type.
    #[error("Record {index}, field {position}: {wire_type} expects {expected} bytes, got {actual}")]
    Encoding {
        index: usize,
        position: usize,
        wire_type: WireType,
        expected: usize,
        actual: usize,
    },

    #[error("Error decoding payload: {0}")]
    Decode(String),
}

pub type Result<T> = std::result::Result<T, Error>;
