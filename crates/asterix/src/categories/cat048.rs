//! CAT048 "Monoradar Target Reports" output record. No `original_source/`
//! file exists for this category (spec.md's §3 data-model paragraph
//! describes it directly: "target-report carries optional
//! data-source-identifier... measured polar position... mode-1/2/3A/C
//! codes..."); built from that field list using the same FSPEC/UAP
//! machinery and unit-scaling constants (§4.5) as the grounded
//! categories.

use crate::context::DecodingContext;
use crate::descriptor::DataItemDescriptor;
use crate::error::ItemError;
use crate::modec::mode_c_altitude_ft;
use crate::output::target048::{CartesianPosition, ModeCode, PolarPosition, Target048};
use crate::output::ItemValue;
use crate::primitives::{make_si16, make_ui16, make_ui24, six_bit_string};
use crate::time::tod_to_seconds;
use crate::uap::{Uap, UapSlot};

const NM_TO_M: f64 = 1852.0;

fn item_010(bytes: &[u8], _ctx: &mut DecodingContext<'_>) -> Result<ItemValue, ItemError> {
    Ok(ItemValue::Map(vec![
        ("sac", ItemValue::U64(bytes[0] as u64)),
        ("sic", ItemValue::U64(bytes[1] as u64)),
    ]))
}

fn item_140(bytes: &[u8], ctx: &mut DecodingContext<'_>) -> Result<ItemValue, ItemError> {
    let wire = make_ui24(bytes);
    let seconds = tod_to_seconds(wire);
    ctx.frame.observe_time_of_day(seconds);
    Ok(ItemValue::F64(seconds))
}

fn item_020(bytes: &[u8], _ctx: &mut DecodingContext<'_>) -> Result<ItemValue, ItemError> {
    let df1 = bytes[0];
    let simulated = df1 & 0x10 != 0;
    let ground_bit = df1 & 0x02 != 0;
    let spi = df1 & 0x04 != 0;
    let mut test_target = false;
    if df1 & 0x01 != 0 {
        if let Some(&df2) = bytes.get(1) {
            test_target = df2 & 0x80 != 0;
        }
    }
    Ok(ItemValue::Map(vec![
        ("simulated", ItemValue::Bool(simulated)),
        ("ground_bit", ItemValue::Bool(ground_bit)),
        ("special_position_indication", ItemValue::Bool(spi)),
        ("test_target", ItemValue::Bool(test_target)),
    ]))
}

fn item_040(bytes: &[u8], _ctx: &mut DecodingContext<'_>) -> Result<ItemValue, ItemError> {
    let range_wire = make_ui16(&bytes[0..2]);
    let azimuth_wire = make_ui16(&bytes[2..4]);
    let range_m = (NM_TO_M / 256.0) * range_wire as f64;
    let azimuth_rad = (360.0 / 65536.0) * azimuth_wire as f64 * std::f64::consts::PI / 180.0;
    Ok(ItemValue::Map(vec![
        ("range_m", ItemValue::F64(range_m)),
        ("azimuth_rad", ItemValue::F64(azimuth_rad)),
    ]))
}

fn item_042(bytes: &[u8], _ctx: &mut DecodingContext<'_>) -> Result<ItemValue, ItemError> {
    let x = make_si16(&bytes[0..2]);
    let y = make_si16(&bytes[2..4]);
    Ok(ItemValue::Map(vec![
        ("x_m", ItemValue::F64(0.5 * x as f64)),
        ("y_m", ItemValue::F64(0.5 * y as f64)),
    ]))
}

fn item_070(bytes: &[u8], _ctx: &mut DecodingContext<'_>) -> Result<ItemValue, ItemError> {
    // Mode-3/A: 12 code bits (A4 A2 A1 B4 B2 B1 C4 C2 C1 D4 D2 D1) plus
    // V(invalid)/G(garbled)/L(smoothed) flags in the top bits of the
    // same octet pair (spec §4.5).
    let wire = make_ui16(bytes);
    Ok(ItemValue::Map(vec![
        ("code", ItemValue::U64((wire & 0x0fff) as u64)),
        ("v", ItemValue::Bool(wire & 0x8000 != 0)),
        ("g", ItemValue::Bool(wire & 0x4000 != 0)),
        ("l", ItemValue::Bool(wire & 0x2000 != 0)),
    ]))
}

fn item_090(bytes: &[u8], _ctx: &mut DecodingContext<'_>) -> Result<ItemValue, ItemError> {
    let wire = make_ui16(bytes);
    let v = wire & 0x8000 != 0;
    let g = wire & 0x4000 != 0;
    let gillham = wire & 0x1fff;
    let altitude_ft = mode_c_altitude_ft(gillham);
    Ok(ItemValue::Map(vec![
        ("v", ItemValue::Bool(v)),
        ("g", ItemValue::Bool(g)),
        (
            "altitude_ft",
            match altitude_ft {
                Some(ft) => ItemValue::I64(ft as i64),
                None => ItemValue::Map(vec![]),
            },
        ),
    ]))
}

fn item_110(bytes: &[u8], _ctx: &mut DecodingContext<'_>) -> Result<ItemValue, ItemError> {
    let raw = make_si16(bytes);
    Ok(ItemValue::F64(25.0 * raw as f64))
}

fn item_220(bytes: &[u8], _ctx: &mut DecodingContext<'_>) -> Result<ItemValue, ItemError> {
    Ok(ItemValue::U64(make_ui24(bytes) as u64))
}

fn item_240(bytes: &[u8], _ctx: &mut DecodingContext<'_>) -> Result<ItemValue, ItemError> {
    Ok(ItemValue::Str(six_bit_string(bytes)))
}

fn item_250(bytes: &[u8], _ctx: &mut DecodingContext<'_>) -> Result<ItemValue, ItemError> {
    let registers: Vec<ItemValue> = bytes
        .chunks_exact(8)
        .map(|chunk| ItemValue::Bytes(chunk.to_vec()))
        .collect();
    Ok(ItemValue::List(registers))
}

fn item_161(bytes: &[u8], _ctx: &mut DecodingContext<'_>) -> Result<ItemValue, ItemError> {
    Ok(ItemValue::U64((make_ui16(bytes) & 0x0fff) as u64))
}

pub static UAP: Uap = Uap {
    category: 48,
    fspec_max: 2,
    slots: &[
        UapSlot::Item(DataItemDescriptor::Fixed { name: "i048_010", size: 2, decode: item_010 }),
        UapSlot::Item(DataItemDescriptor::Fixed { name: "i048_140", size: 3, decode: item_140 }),
        UapSlot::Item(DataItemDescriptor::Variable { name: "i048_020", decode: item_020 }),
        UapSlot::Item(DataItemDescriptor::Fixed { name: "i048_040", size: 4, decode: item_040 }),
        UapSlot::Item(DataItemDescriptor::Fixed { name: "i048_042", size: 4, decode: item_042 }),
        UapSlot::Item(DataItemDescriptor::Fixed { name: "i048_070", size: 2, decode: item_070 }),
        UapSlot::Item(DataItemDescriptor::Fixed { name: "i048_090", size: 2, decode: item_090 }),
        UapSlot::Item(DataItemDescriptor::Fixed { name: "i048_110", size: 2, decode: item_110 }),
        UapSlot::Item(DataItemDescriptor::Fixed { name: "i048_220", size: 3, decode: item_220 }),
        UapSlot::Item(DataItemDescriptor::Fixed { name: "i048_240", size: 6, decode: item_240 }),
        UapSlot::Item(DataItemDescriptor::Repetitive { name: "i048_250", record_size: 8, decode: item_250 }),
        UapSlot::Item(DataItemDescriptor::Fixed { name: "i048_161", size: 2, decode: item_161 }),
        UapSlot::Ref,
        UapSlot::Spf,
    ],
};

/// Fold decoded items into the typed record. `ctx` supplies the
/// "inherit last time-of-day" fallback (spec §9 REDESIGN FLAGS): a
/// record lacking its own i048/140 takes the most recently observed ToD
/// for the current frame instead of leaving the field empty.
pub fn assemble(items: &[(&'static str, ItemValue)], ctx: &DecodingContext<'_>) -> Target048 {
    let mut out = Target048::default();
    out.time_of_day_s = ctx.frame.last_time_of_day_s;
    for (name, value) in items {
        match *name {
            "i048_010" => {
                out.sac = value.field("sac").and_then(ItemValue::as_i64).map(|v| v as u8);
                out.sic = value.field("sic").and_then(ItemValue::as_i64).map(|v| v as u8);
            }
            "i048_140" => out.time_of_day_s = value.as_f64(),
            "i048_020" => {
                out.simulated = value.field("simulated").and_then(ItemValue::as_bool).unwrap_or(false);
                out.ground_bit = value.field("ground_bit").and_then(ItemValue::as_bool).unwrap_or(false);
                out.special_position_indication =
                    value.field("special_position_indication").and_then(ItemValue::as_bool).unwrap_or(false);
                out.test_target = value.field("test_target").and_then(ItemValue::as_bool).unwrap_or(false);
            }
            "i048_040" => {
                out.polar_position = Some(PolarPosition {
                    range_m: value.field("range_m").and_then(ItemValue::as_f64).unwrap_or(0.0),
                    azimuth_rad: value.field("azimuth_rad").and_then(ItemValue::as_f64).unwrap_or(0.0),
                });
            }
            "i048_042" => {
                out.cartesian_position = Some(CartesianPosition {
                    x_m: value.field("x_m").and_then(ItemValue::as_f64).unwrap_or(0.0),
                    y_m: value.field("y_m").and_then(ItemValue::as_f64).unwrap_or(0.0),
                });
            }
            "i048_070" => {
                out.mode_3a = Some(ModeCode {
                    code: value.field("code").and_then(ItemValue::as_u64).unwrap_or(0) as u16,
                    v: value.field("v").and_then(ItemValue::as_bool).unwrap_or(false),
                    g: value.field("g").and_then(ItemValue::as_bool).unwrap_or(false),
                    l: value.field("l").and_then(ItemValue::as_bool).unwrap_or(false),
                });
            }
            "i048_090" => {
                out.mode_c_ft = value.field("altitude_ft").and_then(ItemValue::as_i64).map(|v| v as i32);
                out.mode_c_invalid = value.field("v").and_then(ItemValue::as_bool);
                out.mode_c_garbled = value.field("g").and_then(ItemValue::as_bool);
            }
            "i048_110" => out.height_3d_ft = value.as_f64(),
            "i048_220" => out.aircraft_address = value.as_u64().map(|v| v as u32),
            "i048_240" => out.aircraft_identification = value.as_str().map(str::to_owned),
            "i048_250" => {
                out.mode_s_mb_data = value
                    .as_list()
                    .unwrap_or(&[])
                    .iter()
                    .filter_map(|v| match v {
                        ItemValue::Bytes(b) if b.len() == 8 => {
                            let mut arr = [0u8; 8];
                            arr.copy_from_slice(b);
                            Some(arr)
                        }
                        _ => None,
                    })
                    .collect();
            }
            "i048_161" => out.track_number = value.as_u64().map(|v| v as u16),
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
    fn minimal_target_report_decodes_data_source_and_time() {
        // FSPEC: FRN1 (010) + FRN2 (140).
        let fspec = 0b1100_0000u8;
        let mut bytes = vec![fspec];
        bytes.extend_from_slice(&[0x05, 0x06]); // sac=5 sic=6
        bytes.extend_from_slice(&[0x07, 0x08, 0x09]); // tod wire

        let editions = EditionConfig::latest();
        let mut frame = FrameState::default();
        let mut ctx = DecodingContext::new(&editions, &mut frame);
        let record = decode_record(&bytes, &UAP, &mut ctx).unwrap();
        match record.kind {
            crate::output::RecordKind::Target048(t) => {
                assert_eq!(t.sac, Some(5));
                assert_eq!(t.sic, Some(6));
                let wire = make_ui24(&[0x07, 0x08, 0x09]);
                assert_eq!(t.time_of_day_s, Some(tod_to_seconds(wire)));
            }
            other => panic!("expected Target048, got {other:?}"),
        }
    }

    #[test]
    fn inherits_last_time_of_day_when_own_field_absent() {
        let editions = EditionConfig::latest();
        let mut frame = FrameState::default();
        frame.last_time_of_day_s = Some(1234.5);
        let mut ctx = DecodingContext::new(&editions, &mut frame);
        // FSPEC: FRN1 (010) only, no ToD item.
        let bytes = vec![0b1000_0000u8, 0x01, 0x02];
        let record = decode_record(&bytes, &UAP, &mut ctx).unwrap();
        match record.kind {
            crate::output::RecordKind::Target048(t) => {
                assert_eq!(t.time_of_day_s, Some(1234.5));
            }
            other => panic!("expected Target048, got {other:?}"),
        }
    }
}
