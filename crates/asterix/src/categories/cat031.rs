//! CAT031 "General Status Messages of an ASTERIX Sensor Proxy", grounded
//! on `astx_031.cpp` (`M_MAX_FRN=10`, `M_MAX_FSPEC_LENGTH=2`, no REF/SPF
//! in the standard UAP). Items 060 and 080 preserve the source's
//! bit-shifted bias/gain extraction verbatim (spec §9 open question):
//! the sign bit and mantissa are pulled from different nibble
//! boundaries than a literal reading of the reference document would
//! suggest, and both items share the identical layout.

use crate::context::DecodingContext;
use crate::descriptor::DataItemDescriptor;
use crate::error::ItemError;
use crate::output::sensor031::Sensor031;
use crate::output::ItemValue;
use crate::primitives::{make_si16, make_si32, make_ui16, make_ui24};
use crate::time::tod_to_seconds;
use crate::uap::{Uap, UapSlot};

const NM_TO_M: f64 = 1852.0;
const DEG_TO_RAD: f64 = std::f64::consts::PI / 180.0;

fn item_010(bytes: &[u8], _ctx: &mut DecodingContext<'_>) -> Result<ItemValue, ItemError> {
    Ok(ItemValue::Map(vec![
        ("sac", ItemValue::U64(bytes[0] as u64)),
        ("sic", ItemValue::U64(bytes[1] as u64)),
    ]))
}

fn item_015(bytes: &[u8], _ctx: &mut DecodingContext<'_>) -> Result<ItemValue, ItemError> {
    Ok(ItemValue::U64(make_ui16(bytes) as u64))
}

fn item_020(bytes: &[u8], ctx: &mut DecodingContext<'_>) -> Result<ItemValue, ItemError> {
    let wire = make_ui24(bytes);
    let seconds = tod_to_seconds(wire);
    ctx.frame.observe_time_of_day(seconds);
    Ok(ItemValue::F64(seconds))
}

fn item_030(bytes: &[u8], _ctx: &mut DecodingContext<'_>) -> Result<ItemValue, ItemError> {
    Ok(ItemValue::Map(vec![
        ("sac", ItemValue::U64(bytes[0] as u64)),
        ("sic", ItemValue::U64(bytes[1] as u64)),
    ]))
}

fn item_040(bytes: &[u8], _ctx: &mut DecodingContext<'_>) -> Result<ItemValue, ItemError> {
    Ok(ItemValue::U64(((bytes[0] >> 5) & 0x07) as u64))
}

fn item_050(bytes: &[u8], _ctx: &mut DecodingContext<'_>) -> Result<ItemValue, ItemError> {
    let bias = make_si16(bytes);
    Ok(ItemValue::F64(0.001 * bias as f64))
}

/// Combined SSR/PSR range bias/gain (items 060, 080): identical bit
/// layout in both. `df1` bits 0-5 plus `df2`'s top nibble form a signed
/// bias shifted right 4 bits; `df2`'s low nibble (sign-extended from bit
/// 3) plus `df3`/`df4` form a signed 24-bit gain mantissa.
fn range_bias_gain(bytes: &[u8]) -> (f64, f64) {
    let (df1, df2, df3, df4) = (bytes[0], bytes[1], bytes[2], bytes[3]);
    let mut bias = make_si16(&[df1 & 0x3f, df2 & 0xf0]);
    if df1 & 0x40 != 0 {
        bias |= 0xc000u16 as i16;
    }
    bias >>= 4;
    let gain = if df2 & 0x08 != 0 {
        make_si32(&[0xff, df2 | 0xf0, df3, df4])
    } else {
        make_si32(&[0x00, df2 & 0x0f, df3, df4])
    };
    ((NM_TO_M / 128.0) * bias as f64, 0.000_001 * gain as f64)
}

fn item_060(bytes: &[u8], _ctx: &mut DecodingContext<'_>) -> Result<ItemValue, ItemError> {
    let (bias_m, gain) = range_bias_gain(bytes);
    Ok(ItemValue::Map(vec![
        ("bias_m", ItemValue::F64(bias_m)),
        ("gain", ItemValue::F64(gain)),
    ]))
}

fn item_080(bytes: &[u8], _ctx: &mut DecodingContext<'_>) -> Result<ItemValue, ItemError> {
    let (bias_m, gain) = range_bias_gain(bytes);
    Ok(ItemValue::Map(vec![
        ("bias_m", ItemValue::F64(bias_m)),
        ("gain", ItemValue::F64(gain)),
    ]))
}

fn azimuth_bias_rad(bytes: &[u8]) -> f64 {
    let bias = make_si16(bytes);
    (360.0 / 65536.0) * bias as f64 * DEG_TO_RAD
}

fn item_070(bytes: &[u8], _ctx: &mut DecodingContext<'_>) -> Result<ItemValue, ItemError> {
    Ok(ItemValue::F64(azimuth_bias_rad(bytes)))
}

fn item_090(bytes: &[u8], _ctx: &mut DecodingContext<'_>) -> Result<ItemValue, ItemError> {
    Ok(ItemValue::F64(azimuth_bias_rad(bytes)))
}

pub static UAP: Uap = Uap {
    category: 31,
    fspec_max: 2,
    slots: &[
        UapSlot::Item(DataItemDescriptor::Fixed { name: "i031_010", size: 2, decode: item_010 }),
        UapSlot::Item(DataItemDescriptor::Fixed { name: "i031_015", size: 2, decode: item_015 }),
        UapSlot::Item(DataItemDescriptor::Fixed { name: "i031_020", size: 3, decode: item_020 }),
        UapSlot::Item(DataItemDescriptor::Fixed { name: "i031_030", size: 2, decode: item_030 }),
        UapSlot::Item(DataItemDescriptor::Fixed { name: "i031_040", size: 1, decode: item_040 }),
        UapSlot::Item(DataItemDescriptor::Fixed { name: "i031_050", size: 2, decode: item_050 }),
        UapSlot::Item(DataItemDescriptor::Fixed { name: "i031_060", size: 4, decode: item_060 }),
        UapSlot::Item(DataItemDescriptor::Fixed { name: "i031_070", size: 2, decode: item_070 }),
        UapSlot::Item(DataItemDescriptor::Fixed { name: "i031_080", size: 4, decode: item_080 }),
        UapSlot::Item(DataItemDescriptor::Fixed { name: "i031_090", size: 2, decode: item_090 }),
    ],
};

pub fn assemble(items: &[(&'static str, ItemValue)]) -> Sensor031 {
    let mut out = Sensor031::default();
    for (name, value) in items {
        match *name {
            "i031_010" => {
                out.sac = value.field("sac").and_then(ItemValue::as_i64).map(|v| v as u8);
                out.sic = value.field("sic").and_then(ItemValue::as_i64).map(|v| v as u8);
            }
            "i031_015" => out.user_number = value.as_u64().map(|v| v as u16),
            "i031_020" => out.time_of_day_s = value.as_f64(),
            "i031_030" => {
                out.sensor_sac = value.field("sac").and_then(ItemValue::as_i64).map(|v| v as u8);
                out.sensor_sic = value.field("sic").and_then(ItemValue::as_i64).map(|v| v as u8);
            }
            "i031_040" => out.connection_status = value.as_u64().map(|v| v as u8),
            "i031_050" => out.time_stamping_bias_s = value.as_f64(),
            "i031_060" => {
                out.ssr_range_bias_m = value.field("bias_m").and_then(ItemValue::as_f64);
                out.ssr_range_gain = value.field("gain").and_then(ItemValue::as_f64);
            }
            "i031_070" => out.ssr_azimuth_bias_rad = value.as_f64(),
            "i031_080" => {
                out.psr_range_bias_m = value.field("bias_m").and_then(ItemValue::as_f64);
                out.psr_range_gain = value.field("gain").and_then(ItemValue::as_f64);
            }
            "i031_090" => out.psr_azimuth_bias_rad = value.as_f64(),
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
    fn decodes_sensor_identity_and_connection_status() {
        // FSPEC: FRN1 (010) + FRN4 (030) + FRN5 (040).
        let fspec = 0b1001_1000u8;
        let mut bytes = vec![fspec];
        bytes.extend_from_slice(&[0x01, 0x02]); // sac/sic
        bytes.extend_from_slice(&[0x03, 0x04]); // sensor sac/sic
        bytes.push(0x40); // connection_status = 2

        let editions = EditionConfig::latest();
        let mut frame = FrameState::default();
        let mut ctx = DecodingContext::new(&editions, &mut frame);
        let record = decode_record(&bytes, &UAP, &mut ctx).unwrap();
        match record.kind {
            crate::output::RecordKind::Sensor031(s) => {
                assert_eq!(s.sac, Some(1));
                assert_eq!(s.sensor_sac, Some(3));
                assert_eq!(s.connection_status, Some(2));
            }
            other => panic!("expected Sensor031, got {other:?}"),
        }
    }

    #[test]
    fn range_bias_gain_matches_bit_shifted_formula() {
        // df1=0x00, df2=0x10 (gain sign bit clear), df3=df4=0x00:
        // bias = make_si16(0x00, 0x10) >> 4 = 0x0010 >> 4 = 1
        // gain = make_si32(0x00, 0x00, 0x00, 0x00) = 0
        let (bias_m, gain) = range_bias_gain(&[0x00, 0x10, 0x00, 0x00]);
        assert_eq!(bias_m, (NM_TO_M / 128.0) * 1.0);
        assert_eq!(gain, 0.0);
    }
}
