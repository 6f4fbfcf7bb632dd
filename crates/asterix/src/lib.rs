//! Decoder for EUROCONTROL ASTERIX surveillance data recordings.
//!
//! A recording is a sequence of frames (see [`frame`]) each wrapping one
//! or more data blocks (see [`block`]); a data block carries zero or more
//! records of a single ASTERIX category, each a field-specification
//! bitmap followed by the data items it selects (see [`record`],
//! [`fspec`]). Per-category layout is described by a [`uap::Uap`], and
//! the set of categories/editions understood at runtime is assembled by
//! [`categories::registry`].

pub mod block;
pub mod categories;
pub mod config;
pub mod context;
pub mod descriptor;
pub mod error;
pub mod fspec;
pub mod frame;
pub mod modec;
pub mod output;
pub mod primitives;
pub mod record;
pub mod time;
pub mod uap;

pub mod prelude {
    pub use crate::block::DataBlock;
    pub use crate::config::EditionConfig;
    pub use crate::context::DecodingContext;
    pub use crate::error::{BlockError, ConfigError, FrameError, ItemError, RecordError};
    pub use crate::frame::{FrameFormat, RecordingReader};
    pub use crate::output::Record;
    pub use crate::record::decode_record;
}
