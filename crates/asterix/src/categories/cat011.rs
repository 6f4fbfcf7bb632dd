//! CAT011 "Advanced Surface Movement Guidance and Control System"
//! (A-SMGCS en-route/apron tracker output, spec §3 "10/11/20 ->
//! surface/MLAT/vehicle target"). No `original_source/` file exists for
//! this category either; its item semantics are close enough to
//! CAT010's that the decoders are shared verbatim from
//! [`crate::categories::cat010`] rather than re-derived, the same
//! reuse CAT034 item 060 makes of item 050's subfield layout.

use crate::categories::cat010;
use crate::context::DecodingContext;
use crate::descriptor::DataItemDescriptor;
use crate::error::ItemError;
use crate::output::mlat020::Mlat020;
use crate::output::ItemValue;
use crate::primitives::make_ui16;
use crate::uap::{Uap, UapSlot};

fn item_161(bytes: &[u8], _ctx: &mut DecodingContext<'_>) -> Result<ItemValue, ItemError> {
    // CAT011 track numbers are a full 16 bits wide, unlike CAT010's
    // 12-bit field (matching CAT062's TN16 UAP variant).
    Ok(ItemValue::U64(make_ui16(bytes) as u64))
}

pub static UAP: Uap = Uap {
    category: 11,
    fspec_max: 3,
    slots: &[
        UapSlot::Item(DataItemDescriptor::Fixed { name: "i011_010", size: 2, decode: cat010::item_010 }),
        UapSlot::Item(DataItemDescriptor::Fixed { name: "i011_000", size: 1, decode: cat010::item_000 }),
        UapSlot::Item(DataItemDescriptor::Variable { name: "i011_020", decode: cat010::item_020 }),
        UapSlot::Item(DataItemDescriptor::Fixed { name: "i011_140", size: 3, decode: cat010::item_140 }),
        UapSlot::Item(DataItemDescriptor::Fixed { name: "i011_040", size: 4, decode: cat010::item_040 }),
        UapSlot::Item(DataItemDescriptor::Fixed { name: "i011_042", size: 4, decode: cat010::item_042 }),
        UapSlot::Item(DataItemDescriptor::Fixed { name: "i011_060", size: 2, decode: cat010::item_060 }),
        UapSlot::Item(DataItemDescriptor::Fixed { name: "i011_090", size: 2, decode: cat010::item_091 }),
        UapSlot::Item(DataItemDescriptor::Fixed { name: "i011_161", size: 2, decode: item_161 }),
        UapSlot::Item(DataItemDescriptor::Fixed { name: "i011_245", size: 7, decode: cat010::item_245 }),
        UapSlot::Item(DataItemDescriptor::Fixed { name: "i011_220", size: 3, decode: cat010::item_220 }),
        UapSlot::Ref,
        UapSlot::Spf,
    ],
};

pub fn assemble_cat011(items: &[(&'static str, ItemValue)]) -> Mlat020 {
    cat010::assemble(items, "i011")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EditionConfig;
    use crate::context::FrameState;
    use crate::record::decode_record;

    #[test]
    fn decodes_track_number_at_full_width() {
        // FSPEC octet 1: FRN1 (010) + extension bit. Octet 2: FRN9
        // (161, second octet's bit_idx 1 -> mask 0x40).
        let fspec = 0b1000_0001u8;
        let fspec_ext = 0b0100_0000u8;
        let mut bytes = vec![fspec, fspec_ext];
        bytes.extend_from_slice(&[0x01, 0x02]); // sac/sic
        bytes.extend_from_slice(&[0x12, 0x34]); // track number = 0x1234

        let editions = EditionConfig::latest();
        let mut frame = FrameState::default();
        let mut ctx = DecodingContext::new(&editions, &mut frame);
        let record = decode_record(&bytes, &UAP, &mut ctx).unwrap();
        match record.kind {
            crate::output::RecordKind::Mlat020(m) => {
                assert_eq!(m.track_number, Some(0x1234));
            }
            other => panic!("expected Mlat020, got {other:?}"),
        }
    }
}
