//! Data-item descriptors: a tagged variant replacing the original
//! decoder's function-pointer table keyed by length class (spec §4.6,
//! REDESIGN FLAGS "Function-pointer descriptor table -> tagged
//! variants").

use crate::context::DecodingContext;
use crate::error::ItemError;
use crate::output::ItemValue;
use crate::primitives::Cursor;

/// A decoder for the bytes of a single data item, given the bytes the
/// item's length class has already carved out and the ambient per-frame
/// / per-category context.
pub type ItemDecoder = fn(&[u8], &mut DecodingContext) -> Result<ItemValue, ItemError>;

/// A decoder for an `Immediate` item: handed the whole remainder of the
/// record, it frames its own bytes (a nested FX-chained presence bitmap,
/// most commonly) and reports back how many it consumed.
pub type ImmediateDecoder = fn(&[u8], &mut DecodingContext) -> Result<(ItemValue, usize), ItemError>;

/// One entry of a category's UAP: how many bytes (or records, or an
/// internal length rule) belong to the item, and how to decode them.
///
/// `Fixed` requires `size >= 1`. `Variable` has no static size: its
/// bytes form an extension-terminated chain (bit 0 of each octet is the
/// "more octets follow" flag). `Repetitive` reads a one-byte repetition
/// count REP, then `REP * record_size` octets. `Immediate` delegates the
/// framing itself to the decoder (a leading length octet, or its own
/// nested bitmap) because neither a fixed size nor the extension-bit
/// convention describes it.
#[derive(Clone, Copy)]
pub enum DataItemDescriptor {
    Fixed {
        name: &'static str,
        size: usize,
        decode: ItemDecoder,
    },
    Variable {
        name: &'static str,
        decode: ItemDecoder,
    },
    Repetitive {
        name: &'static str,
        record_size: usize,
        decode: ItemDecoder,
    },
    Immediate {
        name: &'static str,
        decode: ImmediateDecoder,
    },
}

impl DataItemDescriptor {
    pub fn name(&self) -> &'static str {
        match self {
            DataItemDescriptor::Fixed { name, .. }
            | DataItemDescriptor::Variable { name, .. }
            | DataItemDescriptor::Repetitive { name, .. }
            | DataItemDescriptor::Immediate { name, .. } => name,
        }
    }

    /// Carve this item's bytes out of `cursor` per its framing rule and
    /// invoke its decoder. Returns the decoded value and the name to tag
    /// it with in the output record.
    pub fn decode(
        &self,
        cursor: &mut Cursor<'_>,
        ctx: &mut DecodingContext,
    ) -> Result<(&'static str, ItemValue), ItemError> {
        match *self {
            DataItemDescriptor::Fixed { name, size, decode } => {
                debug_assert!(size >= 1, "fixed descriptor {name} has size 0");
                let bytes = cursor.take(size)?;
                Ok((name, decode(bytes, ctx)?))
            }
            DataItemDescriptor::Variable { name, decode } => {
                let bytes = cursor.take_extension_chain()?;
                Ok((name, decode(bytes, ctx)?))
            }
            DataItemDescriptor::Repetitive {
                name,
                record_size,
                decode,
            } => {
                let rep = cursor.u8()? as usize;
                if rep == 0 {
                    return Err(ItemError::InvalidRepetition);
                }
                let bytes = cursor.take(rep * record_size)?;
                Ok((name, decode(bytes, ctx)?))
            }
            DataItemDescriptor::Immediate { name, decode } => {
                // The decoder is handed the whole remainder and reports
                // back how many bytes it actually consumed (its own
                // nested presence bitmap, usually), so the shared
                // cursor can be advanced in step.
                let remaining = cursor.peek(cursor.remaining())?;
                let (value, len) = decode(remaining, ctx)?;
                if len == 0 || len > remaining.len() {
                    return Err(ItemError::InvalidLengthPrefix(format!(
                        "immediate decoder for {name} reported length {len} against {} available",
                        remaining.len()
                    )));
                }
                cursor.take(len)?;
                Ok((name, value))
            }
        }
    }
}
