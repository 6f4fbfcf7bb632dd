//! Record decoder: the FSPEC engine (spec §4.4).

use crate::context::DecodingContext;
use crate::error::{ItemError, RecordError};
use crate::fspec::Fspec;
use crate::output::{ItemValue, Record};
use crate::primitives::Cursor;
use crate::uap::{Uap, UapSlot};

/// Decode one record's worth of bytes (everything after the block
/// header, for exactly one record) against `uap`, using `ctx` for
/// ambient/per-record state. Implements spec §4.4 steps 1-5.
pub fn decode_record(
    bytes: &[u8],
    uap: &Uap,
    ctx: &mut DecodingContext<'_>,
) -> Result<Record, RecordError> {
    decode_record_prefix(bytes, uap, ctx).map(|(record, _consumed)| record)
}

/// Like [`decode_record`], but also returns how many leading bytes of
/// `bytes` the record actually consumed. Record boundaries inside a data
/// block are not length-delimited (spec §3 "Data block", §8): the block
/// dispatcher needs this to find where the next record starts.
pub fn decode_record_prefix(
    bytes: &[u8],
    uap: &Uap,
    ctx: &mut DecodingContext<'_>,
) -> Result<(Record, usize), RecordError> {
    ctx.begin_record();
    let mut cursor = Cursor::new(bytes);
    let fspec = Fspec::read(&mut cursor, uap.category, uap.fspec_max)?;

    let mut items: Vec<(&'static str, ItemValue)> = Vec::new();
    let mut any_set = false;

    for (frn, is_set) in fspec.iter_frns() {
        if frn > uap.frn_max() {
            break;
        }
        if !is_set {
            continue;
        }
        any_set = true;
        match uap.slot(frn) {
            None | Some(UapSlot::None) => {
                return Err(RecordError::UndefinedItem {
                    category: uap.category,
                    frn,
                })
            }
            Some(UapSlot::Item(descriptor)) => {
                let (name, value) = descriptor.decode(&mut cursor, ctx).map_err(|source| {
                    RecordError::Item {
                        category: uap.category,
                        item: descriptor.name(),
                        source,
                    }
                })?;
                items.push((name, value));
            }
            Some(UapSlot::Ref) => {
                let value = decode_ref(&mut cursor, uap, ctx).map_err(|source| RecordError::Item {
                    category: uap.category,
                    item: "ref",
                    source,
                })?;
                items.push(("ref", value));
            }
            Some(UapSlot::Spf) => {
                let len = cursor.u8().map_err(|_| RecordError::Truncated)? as usize;
                if len == 0 {
                    return Err(RecordError::Item {
                        category: uap.category,
                        item: "spf",
                        source: ItemError::InvalidLengthPrefix("spf length octet is zero".into()),
                    });
                }
                let bytes = cursor.take(len.saturating_sub(1)).map_err(|source| RecordError::Item {
                    category: uap.category,
                    item: "spf",
                    source,
                })?;
                items.push(("spf", ItemValue::Bytes(bytes.to_vec())));
            }
        }
    }

    if !any_set {
        return Err(RecordError::EmptyRecord);
    }

    ctx.frame.records_emitted += 1;

    let kind = crate::categories::registry::build_record_kind(uap.category, &items, ctx);
    let consumed = cursor.position();

    Ok((
        Record {
            category: uap.category,
            items,
            kind,
        },
        consumed,
    ))
}

/// REF (reserved for reference extension): a length-prefixed payload
/// whose body is itself an FRN-indexed sub-record, decoded recursively
/// against the same category UAP (spec §4.6).
fn decode_ref(
    cursor: &mut Cursor<'_>,
    uap: &Uap,
    ctx: &mut DecodingContext<'_>,
) -> Result<ItemValue, ItemError> {
    let len = cursor.u8()? as usize;
    if len == 0 {
        return Err(ItemError::InvalidLengthPrefix("ref length octet is zero".into()));
    }
    let body = cursor.take(len.saturating_sub(1))?;
    let inner = decode_record(body, uap, ctx).map_err(|e| ItemError::custom(e.to_string()))?;
    Ok(ItemValue::Map(inner.items))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EditionConfig;
    use crate::context::FrameState;
    use crate::descriptor::DataItemDescriptor;

    fn dummy_decoder(bytes: &[u8], _ctx: &mut DecodingContext<'_>) -> Result<ItemValue, ItemError> {
        Ok(ItemValue::Bytes(bytes.to_vec()))
    }

    #[test]
    fn empty_record_is_rejected() {
        let uap = Uap {
            category: 48,
            fspec_max: 3,
            slots: &[UapSlot::Item(DataItemDescriptor::Fixed {
                name: "item_010",
                size: 2,
                decode: dummy_decoder,
            })],
        };
        let editions = EditionConfig::latest();
        let mut frame = FrameState::default();
        let mut ctx = DecodingContext::new(&editions, &mut frame);
        // fspec octet with no bits set (bit positions 1..7 all zero, no extension)
        let err = decode_record(&[0x00], &uap, &mut ctx).unwrap_err();
        assert!(matches!(err, RecordError::EmptyRecord));
    }

    #[test]
    fn undefined_frn_is_rejected() {
        let uap = Uap {
            category: 48,
            fspec_max: 3,
            slots: &[UapSlot::None],
        };
        let editions = EditionConfig::latest();
        let mut frame = FrameState::default();
        let mut ctx = DecodingContext::new(&editions, &mut frame);
        let err = decode_record(&[0x80], &uap, &mut ctx).unwrap_err();
        assert!(matches!(err, RecordError::UndefinedItem { category: 48, frn: 1 }));
    }

    #[test]
    fn single_item_record_decodes() {
        let uap = Uap {
            category: 48,
            fspec_max: 3,
            slots: &[UapSlot::Item(DataItemDescriptor::Fixed {
                name: "item_010",
                size: 2,
                decode: dummy_decoder,
            })],
        };
        let editions = EditionConfig::latest();
        let mut frame = FrameState::default();
        let mut ctx = DecodingContext::new(&editions, &mut frame);
        let record = decode_record(&[0x80, 0xab, 0xcd], &uap, &mut ctx).unwrap();
        assert_eq!(record.items.len(), 1);
        assert_eq!(record.items[0].0, "item_010");
    }
}
