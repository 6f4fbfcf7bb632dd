//! CAT247 "Version Number" output record, grounded on `astx_247.cpp`
//! (`M_MAX_FRN=7`, `M_MAX_FSPEC_LENGTH=1`): data source id (010),
//! service identification (015), time of day (140), version number
//! report (550, repetitive), SPF, REF.

use crate::context::DecodingContext;
use crate::descriptor::DataItemDescriptor;
use crate::error::ItemError;
use crate::output::version247::Version247;
use crate::output::ItemValue;
use crate::primitives::make_ui24;
use crate::time::tod_to_seconds;
use crate::uap::{Uap, UapSlot};

fn item_010(bytes: &[u8], _ctx: &mut DecodingContext<'_>) -> Result<ItemValue, ItemError> {
    Ok(ItemValue::Map(vec![
        ("sac", ItemValue::U64(bytes[0] as u64)),
        ("sic", ItemValue::U64(bytes[1] as u64)),
    ]))
}

fn item_015(bytes: &[u8], _ctx: &mut DecodingContext<'_>) -> Result<ItemValue, ItemError> {
    Ok(ItemValue::U64(bytes[0] as u64))
}

fn item_140(bytes: &[u8], ctx: &mut DecodingContext<'_>) -> Result<ItemValue, ItemError> {
    let wire = make_ui24(bytes);
    let seconds = tod_to_seconds(wire);
    ctx.frame.observe_time_of_day(seconds);
    Ok(ItemValue::F64(seconds))
}

/// Version number report: `REP` triples of `(category, major, minor)`,
/// one octet each (`astx_247.cpp`'s `proc_i247_550`: `rep = buffer[0]`,
/// asserting `length == 1 + 3 * rep`, which this crate's `Repetitive`
/// wrapper already guarantees).
fn item_550(bytes: &[u8], _ctx: &mut DecodingContext<'_>) -> Result<ItemValue, ItemError> {
    let reports: Vec<ItemValue> = bytes
        .chunks_exact(3)
        .map(|triple| {
            ItemValue::Map(vec![
                ("category", ItemValue::U64(triple[0] as u64)),
                ("major", ItemValue::U64(triple[1] as u64)),
                ("minor", ItemValue::U64(triple[2] as u64)),
            ])
        })
        .collect();
    Ok(ItemValue::List(reports))
}

pub static UAP: Uap = Uap {
    category: 247,
    fspec_max: 1,
    slots: &[
        UapSlot::Item(DataItemDescriptor::Fixed { name: "i247_010", size: 2, decode: item_010 }),
        UapSlot::Item(DataItemDescriptor::Fixed { name: "i247_015", size: 1, decode: item_015 }),
        UapSlot::Item(DataItemDescriptor::Fixed { name: "i247_140", size: 3, decode: item_140 }),
        UapSlot::Item(DataItemDescriptor::Repetitive { name: "i247_550", record_size: 3, decode: item_550 }),
        UapSlot::None,
        UapSlot::Spf,
        UapSlot::Ref,
    ],
};

pub fn assemble(items: &[(&'static str, ItemValue)]) -> Version247 {
    let mut out = Version247::default();
    for (name, value) in items {
        match *name {
            "i247_010" => {
                out.sac = value.field("sac").and_then(ItemValue::as_i64).map(|v| v as u8);
                out.sic = value.field("sic").and_then(ItemValue::as_i64).map(|v| v as u8);
            }
            "i247_015" => out.service_identification = value.as_u64().map(|v| v as u8),
            "i247_140" => out.time_of_day_s = value.as_f64(),
            "i247_550" => {
                out.version_reports = value
                    .as_list()
                    .unwrap_or(&[])
                    .iter()
                    .filter_map(|v| {
                        Some((
                            v.field("category")?.as_u64()? as u8,
                            v.field("major")?.as_u64()? as u8,
                            v.field("minor")?.as_u64()? as u8,
                        ))
                    })
                    .collect();
            }
            _ => {}
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EditionConfig;
    use crate::context::FrameState;
    use crate::record::decode_record;

    #[test]
    fn decodes_version_number_reports() {
        // FSPEC: FRN1 (010) + FRN4 (550), no extension.
        let fspec = 0b1001_0000u8;
        let mut bytes = vec![fspec];
        bytes.extend_from_slice(&[0x01, 0x02]); // sac/sic
        bytes.push(2); // REP = 2
        bytes.extend_from_slice(&[48, 1, 23]); // cat048 v1.23
        bytes.extend_from_slice(&[62, 1, 18]); // cat062 v1.18

        let editions = EditionConfig::latest();
        let mut frame = FrameState::default();
        let mut ctx = DecodingContext::new(&editions, &mut frame);
        let record = decode_record(&bytes, &UAP, &mut ctx).unwrap();
        match record.kind {
            crate::output::RecordKind::Version247(v) => {
                assert_eq!(v.version_reports, vec![(48, 1, 23), (62, 1, 18)]);
            }
            other => panic!("expected Version247, got {other:?}"),
        }
    }
}
