//! Error taxonomy (spec §7): configuration, I/O, frame, block, record and
//! item level, each carrying enough context to reconstruct where in the
//! file the failure happened.

use thiserror::Error;

/// Failure building the category registries / CLI configuration, before
/// any byte of input is read.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown recording format: {0}")]
    UnknownRecordingFormat(String),
    #[error("unknown data format: {0}")]
    UnknownDataFormat(String),
    #[error("category {category} has no edition named {edition:?}")]
    UnsupportedEdition { category: u8, edition: String },
    #[error("category {0} is not registered")]
    UnknownCategory(u8),
}

/// Failure at the level of one recording-frame container.
#[derive(Debug, Error)]
pub enum FrameError {
    #[error("malformed frame at offset {offset}: {reason}")]
    Malformed { offset: u64, reason: String },
    #[error("data block error at file offset {offset}: {source}")]
    Block {
        offset: u64,
        #[source]
        source: BlockError,
    },
}

/// Failure interpreting one ASTERIX data block (category + length +
/// records).
#[derive(Debug, Error)]
pub enum BlockError {
    #[error("category {0} has no registered decoder")]
    UnknownCategory(u8),
    #[error("declared block length {len} is out of range (payload has {available} byte(s))")]
    BadBlockLength { len: usize, available: usize },
    #[error("record error at offset {offset} inside block: {source}")]
    Record {
        offset: usize,
        #[source]
        source: RecordError,
    },
}

/// Failure decoding one ASTERIX record (spec §4.4/§8).
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("field specification exceeds the maximum length for category {category} ({max} octet(s))")]
    FspecTooLong { category: u8, max: usize },
    #[error("field specification runs past the end of the record")]
    Truncated,
    #[error("category {category} FRN {frn} is set but not defined in the active UAP")]
    UndefinedItem { category: u8, frn: u16 },
    #[error("record has an empty field specification (no data item present)")]
    EmptyRecord,
    #[error("category {category}, item {item}: {source}")]
    Item {
        category: u8,
        item: &'static str,
        #[source]
        source: ItemError,
    },
}

/// Failure decoding a single data item (spec §7, item-level).
#[derive(Debug, Error)]
pub enum ItemError {
    #[error("not enough bytes remain: need {needed}, have {available}")]
    Truncated { needed: usize, available: usize },
    #[error("repetition count is zero")]
    InvalidRepetition,
    #[error("extension bit set on what should be the terminal octet")]
    UnexpectedExtension,
    #[error("declared sub-bitmap length {declared} exceeds the {available} byte(s) remaining")]
    SubBitmapOverflow { declared: usize, available: usize },
    #[error("invalid internal length prefix: {0}")]
    InvalidLengthPrefix(String),
    #[error("{0}")]
    Custom(String),
}

impl ItemError {
    pub fn custom(msg: impl Into<String>) -> Self {
        ItemError::Custom(msg.into())
    }
}
