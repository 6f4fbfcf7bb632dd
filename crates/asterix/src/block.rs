//! Data-block dispatcher (spec §4.3, §3 "Data block").
//!
//! A data block is the ASTERIX wire unit that sits inside one frame's
//! payload: a category byte, a big-endian total length, and one or more
//! concatenated records of that category. Record boundaries are not
//! length-delimited; each record's own decoded size is what tells the
//! dispatcher where the next one starts (spec §8, invariant on
//! successive record starts partitioning `[3, LEN)` exactly).

use crate::categories::registry;
use crate::context::DecodingContext;
use crate::error::BlockError;
use crate::output::Record;
use crate::record::decode_record_prefix;

/// One decoded ASTERIX data block: the category it carries and every
/// record successfully pulled out of it, in file order.
#[derive(Debug, Clone)]
pub struct DataBlock {
    pub category: u8,
    pub records: Vec<Record>,
}

/// Interpret `bytes` as a single ASTERIX data block (spec §4.3): byte 0
/// is CAT, bytes 1-2 are LEN (big-endian, including this 3-byte
/// header), bytes 3..LEN are records. Decodes every record in the block
/// against the UAP selected for `category`/the active edition in `ctx`.
pub fn decode_block(bytes: &[u8], ctx: &mut DecodingContext<'_>) -> Result<DataBlock, BlockError> {
    let category = *bytes.first().ok_or(BlockError::BadBlockLength {
        len: 0,
        available: bytes.len(),
    })?;
    let len = bytes
        .get(1..3)
        .map(|b| ((b[0] as usize) << 8) | b[1] as usize)
        .ok_or(BlockError::BadBlockLength {
            len: 0,
            available: bytes.len(),
        })?;
    if len < 3 || len > bytes.len() {
        return Err(BlockError::BadBlockLength {
            len,
            available: bytes.len(),
        });
    }

    let uap = registry::uap_for(category, ctx)?;
    let body = &bytes[3..len];
    let mut records = Vec::new();
    let mut offset = 0usize;
    while offset < body.len() {
        let (record, consumed) =
            decode_record_prefix(&body[offset..], uap, ctx).map_err(|source| BlockError::Record {
                offset,
                source,
            })?;
        records.push(record);
        offset += consumed;
    }

    Ok(DataBlock { category, records })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EditionConfig;
    use crate::context::FrameState;

    #[test]
    fn rejects_length_shorter_than_header() {
        let editions = EditionConfig::latest();
        let mut frame = FrameState::default();
        let mut ctx = DecodingContext::new(&editions, &mut frame);
        let err = decode_block(&[0x22, 0x00, 0x02], &mut ctx).unwrap_err();
        assert!(matches!(err, BlockError::BadBlockLength { len: 2, .. }));
    }

    #[test]
    fn rejects_unknown_category() {
        let editions = EditionConfig::latest();
        let mut frame = FrameState::default();
        let mut ctx = DecodingContext::new(&editions, &mut frame);
        let err = decode_block(&[0xFE, 0x00, 0x04, 0x00], &mut ctx).unwrap_err();
        assert!(matches!(err, BlockError::UnknownCategory(0xFE)));
    }

    #[test]
    fn decodes_single_record_block() {
        // CAT034, north marker: FSPEC(FRN1+FRN2) + i034/010 (sac/sic) +
        // i034/000 (message type 1 = north marker), matching cat034's
        // own unit-test fixture.
        let editions = EditionConfig::latest();
        let mut frame = FrameState::default();
        let mut ctx = DecodingContext::new(&editions, &mut frame);
        let mut bytes = vec![34u8, 0x00, 0x07];
        bytes.extend_from_slice(&[0xC0, 0x12, 0x34, 0x01]);
        let block = decode_block(&bytes, &mut ctx).unwrap();
        assert_eq!(block.category, 34);
        assert_eq!(block.records.len(), 1);
    }
}
