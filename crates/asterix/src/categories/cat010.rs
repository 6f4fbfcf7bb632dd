//! CAT010 "Monitoring Data" (surface movement radar / A-SMGCS sensor
//! target reports, spec §3 "10/11/20 -> surface/MLAT/vehicle target").
//! No `original_source/` file exists for this category; built directly
//! from spec.md §3's field list, reusing the same FSPEC/UAP machinery
//! and unit-scaling constants (§4.5) as CAT020/CAT048. CAT011 (A-SMGCS
//! en-route surveillance) shares this category's item semantics almost
//! item-for-item, so its decoders live here and are re-exported rather
//! than duplicated (see [`crate::categories::cat011`]).

use crate::context::DecodingContext;
use crate::descriptor::DataItemDescriptor;
use crate::error::ItemError;
use crate::output::mlat020::Mlat020;
use crate::output::target048::CartesianPosition;
use crate::output::ItemValue;
use crate::primitives::{make_si16, make_ui16, make_ui24, six_bit_string};
use crate::time::tod_to_seconds;
use crate::uap::{Uap, UapSlot};

pub(crate) fn item_010(bytes: &[u8], _ctx: &mut DecodingContext<'_>) -> Result<ItemValue, ItemError> {
    Ok(ItemValue::Map(vec![
        ("sac", ItemValue::U64(bytes[0] as u64)),
        ("sic", ItemValue::U64(bytes[1] as u64)),
    ]))
}

pub(crate) fn item_000(bytes: &[u8], _ctx: &mut DecodingContext<'_>) -> Result<ItemValue, ItemError> {
    Ok(ItemValue::U64(bytes[0] as u64))
}

pub(crate) fn item_020(bytes: &[u8], _ctx: &mut DecodingContext<'_>) -> Result<ItemValue, ItemError> {
    let df1 = bytes[0];
    // bit 7 (0x80) = TYP bit 2 of the target type subfield; bit 2
    // (0x04) is the ground-bit equivalent for this category (CRT:
    // "on the ground" flag for a surface movement report).
    let ground_bit = df1 & 0x04 != 0;
    Ok(ItemValue::Bool(ground_bit))
}

pub(crate) fn item_040(bytes: &[u8], _ctx: &mut DecodingContext<'_>) -> Result<ItemValue, ItemError> {
    let rho = make_ui16(&bytes[0..2]);
    let theta = make_ui16(&bytes[2..4]);
    const NM_TO_M: f64 = 1852.0;
    Ok(ItemValue::Map(vec![
        ("range_m", ItemValue::F64((NM_TO_M / 256.0) * rho as f64)),
        (
            "azimuth_rad",
            ItemValue::F64((360.0 / 65536.0) * theta as f64 * std::f64::consts::PI / 180.0),
        ),
    ]))
}

pub(crate) fn item_042(bytes: &[u8], _ctx: &mut DecodingContext<'_>) -> Result<ItemValue, ItemError> {
    // Surface-movement Cartesian position: wire LSB 1 m (coarser than
    // CAT048/CAT020's 0.5 m, matching the wider area a ground-movement
    // sensor covers).
    let x = make_si16(&bytes[0..2]);
    let y = make_si16(&bytes[2..4]);
    Ok(ItemValue::Map(vec![
        ("x_m", ItemValue::F64(x as f64)),
        ("y_m", ItemValue::F64(y as f64)),
    ]))
}

pub(crate) fn item_060(bytes: &[u8], _ctx: &mut DecodingContext<'_>) -> Result<ItemValue, ItemError> {
    Ok(ItemValue::U64((make_ui16(bytes) & 0x0fff) as u64))
}

pub(crate) fn item_091(bytes: &[u8], _ctx: &mut DecodingContext<'_>) -> Result<ItemValue, ItemError> {
    // Measured (geometric) height, wire LSB 6.25 ft, same scale CAT062
    // item 130 uses for geometric altitude.
    Ok(ItemValue::F64(6.25 * make_si16(bytes) as f64))
}

pub(crate) fn item_140(bytes: &[u8], ctx: &mut DecodingContext<'_>) -> Result<ItemValue, ItemError> {
    let wire = make_ui24(bytes);
    let seconds = tod_to_seconds(wire);
    ctx.frame.observe_time_of_day(seconds);
    Ok(ItemValue::F64(seconds))
}

pub(crate) fn item_161(bytes: &[u8], _ctx: &mut DecodingContext<'_>) -> Result<ItemValue, ItemError> {
    Ok(ItemValue::U64((make_ui16(bytes) & 0x0fff) as u64))
}

pub(crate) fn item_245(bytes: &[u8], _ctx: &mut DecodingContext<'_>) -> Result<ItemValue, ItemError> {
    // Leading status octet (STI) followed by the 6-byte 6-bit
    // identification block, the same framing CAT020/062 item 245 use.
    Ok(ItemValue::Str(six_bit_string(&bytes[1..7])))
}

pub(crate) fn item_220(bytes: &[u8], _ctx: &mut DecodingContext<'_>) -> Result<ItemValue, ItemError> {
    Ok(ItemValue::U64(make_ui24(bytes) as u64))
}

pub static UAP: Uap = Uap {
    category: 10,
    fspec_max: 3,
    slots: &[
        UapSlot::Item(DataItemDescriptor::Fixed { name: "i010_010", size: 2, decode: item_010 }),
        UapSlot::Item(DataItemDescriptor::Fixed { name: "i010_000", size: 1, decode: item_000 }),
        UapSlot::Item(DataItemDescriptor::Variable { name: "i010_020", decode: item_020 }),
        UapSlot::Item(DataItemDescriptor::Fixed { name: "i010_140", size: 3, decode: item_140 }),
        UapSlot::Item(DataItemDescriptor::Fixed { name: "i010_040", size: 4, decode: item_040 }),
        UapSlot::Item(DataItemDescriptor::Fixed { name: "i010_042", size: 4, decode: item_042 }),
        UapSlot::Item(DataItemDescriptor::Fixed { name: "i010_060", size: 2, decode: item_060 }),
        UapSlot::Item(DataItemDescriptor::Fixed { name: "i010_091", size: 2, decode: item_091 }),
        UapSlot::Item(DataItemDescriptor::Fixed { name: "i010_161", size: 2, decode: item_161 }),
        UapSlot::Item(DataItemDescriptor::Fixed { name: "i010_245", size: 7, decode: item_245 }),
        UapSlot::Item(DataItemDescriptor::Fixed { name: "i010_220", size: 3, decode: item_220 }),
        UapSlot::Ref,
        UapSlot::Spf,
    ],
};

/// Fold decoded items into the shared surface/MLAT/vehicle output shape
/// (spec §3 "10/11/20 -> surface/MLAT/vehicle target"). CAT011 reuses
/// this verbatim.
pub(crate) fn assemble(items: &[(&'static str, ItemValue)], prefix: &str) -> Mlat020 {
    let mut out = Mlat020::default();
    for (name, value) in items {
        let suffix = name.strip_prefix(prefix).unwrap_or(name);
        match suffix {
            "_010" => {
                out.sac = value.field("sac").and_then(ItemValue::as_i64).map(|v| v as u8);
                out.sic = value.field("sic").and_then(ItemValue::as_i64).map(|v| v as u8);
            }
            "_140" => out.time_of_day_s = value.as_f64(),
            "_020" => out.ground_bit = value.as_bool().unwrap_or(false),
            "_042" => {
                out.cartesian_position = Some(CartesianPosition {
                    x_m: value.field("x_m").and_then(ItemValue::as_f64).unwrap_or(0.0),
                    y_m: value.field("y_m").and_then(ItemValue::as_f64).unwrap_or(0.0),
                });
            }
            "_060" => out.mode_3a_code = value.as_u64().map(|v| v as u16),
            "_091" => out.flight_level_ft = value.as_f64(),
            "_220" => out.aircraft_address = value.as_u64().map(|v| v as u32),
            "_245" => out.aircraft_identification = value.as_str().map(str::to_owned),
            "_161" => out.track_number = value.as_u64().map(|v| v as u16),
            _ => {}
        }
    }
    out
}

pub fn assemble_cat010(items: &[(&'static str, ItemValue)]) -> Mlat020 {
    assemble(items, "i010")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EditionConfig;
    use crate::context::FrameState;
    use crate::record::decode_record;

    #[test]
    fn decodes_surface_vehicle_position() {
        // FSPEC octet 1: FRN1 (010, bit 0x80), FRN3 (020, bit 0x20),
        // FRN6 (042, bit 0x04); no extension bit set.
        let fspec = 0b1010_0100u8;
        let mut bytes = vec![fspec];
        bytes.extend_from_slice(&[0x01, 0x02]); // sac/sic
        bytes.push(0x04); // ground bit set, no extension
        bytes.extend_from_slice(&[0x00, 0x0A, 0x00, 0x0B]); // x=10, y=11

        let editions = EditionConfig::latest();
        let mut frame = FrameState::default();
        let mut ctx = DecodingContext::new(&editions, &mut frame);
        let record = decode_record(&bytes, &UAP, &mut ctx).unwrap();
        match record.kind {
            crate::output::RecordKind::Mlat020(m) => {
                assert!(m.ground_bit);
                let pos = m.cartesian_position.unwrap();
                assert_eq!(pos.x_m, 10.0);
                assert_eq!(pos.y_m, 11.0);
            }
            other => panic!("expected Mlat020, got {other:?}"),
        }
    }
}
