//! CAT021 "ADS-B Reports" output record. No `original_source/` file
//! exists for this category; built directly from the data fields
//! spec.md §3 describes (SAC/SIC, ToD, WGS-84 position, mode-3A/C,
//! identification, aircraft address), reusing the same unit-scaling
//! constants (§4.5) as the grounded categories.

use crate::context::DecodingContext;
use crate::descriptor::DataItemDescriptor;
use crate::error::ItemError;
use crate::output::adsb021::Adsb021;
use crate::output::ItemValue;
use crate::primitives::{make_si16, make_si32, make_ui16, six_bit_string};
use crate::time::tod_to_seconds;
use crate::uap::{Uap, UapSlot};

const DEG_TO_RAD: f64 = std::f64::consts::PI / 180.0;

fn item_010(bytes: &[u8], _ctx: &mut DecodingContext<'_>) -> Result<ItemValue, ItemError> {
    Ok(ItemValue::Map(vec![
        ("sac", ItemValue::U64(bytes[0] as u64)),
        ("sic", ItemValue::U64(bytes[1] as u64)),
    ]))
}

fn item_140(bytes: &[u8], ctx: &mut DecodingContext<'_>) -> Result<ItemValue, ItemError> {
    let wire = crate::primitives::make_ui24(bytes);
    let seconds = tod_to_seconds(wire);
    ctx.frame.observe_time_of_day(seconds);
    Ok(ItemValue::F64(seconds))
}

fn item_080(bytes: &[u8], _ctx: &mut DecodingContext<'_>) -> Result<ItemValue, ItemError> {
    Ok(ItemValue::U64(crate::primitives::make_ui24(bytes) as u64))
}

fn item_130(bytes: &[u8], _ctx: &mut DecodingContext<'_>) -> Result<ItemValue, ItemError> {
    let lat = make_si32(&bytes[0..4]);
    let lon = make_si32(&bytes[4..8]);
    let lsb = 180.0 / 8_388_608.0; // 180 / 2^23 degrees
    Ok(ItemValue::Map(vec![
        ("latitude_rad", ItemValue::F64(lat as f64 * lsb * DEG_TO_RAD)),
        ("longitude_rad", ItemValue::F64(lon as f64 * lsb * DEG_TO_RAD)),
    ]))
}

fn item_145(bytes: &[u8], _ctx: &mut DecodingContext<'_>) -> Result<ItemValue, ItemError> {
    Ok(ItemValue::F64(25.0 * make_si16(bytes) as f64))
}

fn item_110(bytes: &[u8], _ctx: &mut DecodingContext<'_>) -> Result<ItemValue, ItemError> {
    Ok(ItemValue::F64(6.25 * make_si16(bytes) as f64))
}

fn item_170(bytes: &[u8], _ctx: &mut DecodingContext<'_>) -> Result<ItemValue, ItemError> {
    Ok(ItemValue::Str(six_bit_string(bytes)))
}

fn item_160(bytes: &[u8], _ctx: &mut DecodingContext<'_>) -> Result<ItemValue, ItemError> {
    let speed_wire = make_ui16(&bytes[0..2]);
    let track_wire = make_ui16(&bytes[2..4]);
    // LSB 2**-14 NM/s -> knots (1 NM/s == 3600 kt).
    let speed_kt = speed_wire as f64 * (1.0 / 16384.0) * 3600.0;
    let track_rad = (360.0 / 65536.0) * track_wire as f64 * DEG_TO_RAD;
    Ok(ItemValue::Map(vec![
        ("ground_speed_kt", ItemValue::F64(speed_kt)),
        ("true_track_angle_rad", ItemValue::F64(track_rad)),
    ]))
}

fn item_020(bytes: &[u8], _ctx: &mut DecodingContext<'_>) -> Result<ItemValue, ItemError> {
    Ok(ItemValue::U64(bytes[0] as u64))
}

pub static UAP: Uap = Uap {
    category: 21,
    fspec_max: 2,
    slots: &[
        UapSlot::Item(DataItemDescriptor::Fixed { name: "i021_010", size: 2, decode: item_010 }),
        UapSlot::Item(DataItemDescriptor::Fixed { name: "i021_140", size: 3, decode: item_140 }),
        UapSlot::Item(DataItemDescriptor::Fixed { name: "i021_080", size: 3, decode: item_080 }),
        UapSlot::Item(DataItemDescriptor::Fixed { name: "i021_130", size: 8, decode: item_130 }),
        UapSlot::Item(DataItemDescriptor::Fixed { name: "i021_145", size: 2, decode: item_145 }),
        UapSlot::Item(DataItemDescriptor::Fixed { name: "i021_110", size: 2, decode: item_110 }),
        UapSlot::Item(DataItemDescriptor::Fixed { name: "i021_170", size: 6, decode: item_170 }),
        UapSlot::Item(DataItemDescriptor::Fixed { name: "i021_160", size: 4, decode: item_160 }),
        UapSlot::Item(DataItemDescriptor::Fixed { name: "i021_020", size: 1, decode: item_020 }),
        UapSlot::Ref,
        UapSlot::Spf,
    ],
};

pub fn assemble(items: &[(&'static str, ItemValue)]) -> Adsb021 {
    let mut out = Adsb021::default();
    for (name, value) in items {
        match *name {
            "i021_010" => {
                out.sac = value.field("sac").and_then(ItemValue::as_i64).map(|v| v as u8);
                out.sic = value.field("sic").and_then(ItemValue::as_i64).map(|v| v as u8);
            }
            "i021_140" => out.time_of_day_s = value.as_f64(),
            "i021_080" => out.aircraft_address = value.as_u64().map(|v| v as u32),
            "i021_130" => {
                out.latitude_rad = value.field("latitude_rad").and_then(ItemValue::as_f64);
                out.longitude_rad = value.field("longitude_rad").and_then(ItemValue::as_f64);
            }
            "i021_145" => out.flight_level_ft = value.as_f64(),
            "i021_110" => out.geometric_altitude_ft = value.as_f64(),
            "i021_170" => out.aircraft_identification = value.as_str().map(str::to_owned),
            "i021_160" => {
                out.ground_speed_kt = value.field("ground_speed_kt").and_then(ItemValue::as_f64);
                out.true_track_angle_rad = value.field("true_track_angle_rad").and_then(ItemValue::as_f64);
            }
            "i021_020" => out.emitter_category = value.as_u64().map(|v| v as u8),
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
    use hexlit::hex;

    #[test]
    fn decodes_position_and_identification() {
        // FSPEC: FRN1 (010), FRN4 (130), FRN7 (170).
        let fspec = 0b1001_0010u8;
        let mut bytes = vec![fspec];
        bytes.extend_from_slice(&[0x01, 0x02]); // sac/sic
        bytes.extend_from_slice(&[0x00, 0x10, 0x00, 0x00, 0x00, 0x08, 0x00, 0x00]); // lat/lon
        bytes.extend_from_slice(&hex!("0A14F89410C2")); // packed 6-bit identification

        let editions = EditionConfig::latest();
        let mut frame = FrameState::default();
        let mut ctx = DecodingContext::new(&editions, &mut frame);
        let record = decode_record(&bytes, &UAP, &mut ctx).unwrap();
        match record.kind {
            crate::output::RecordKind::Adsb021(a) => {
                assert_eq!(a.sac, Some(1));
                assert_eq!(a.sic, Some(2));
                assert!(a.latitude_rad.is_some());
                assert!(a.aircraft_identification.is_some());
            }
            other => panic!("expected Adsb021, got {other:?}"),
        }
    }
}
