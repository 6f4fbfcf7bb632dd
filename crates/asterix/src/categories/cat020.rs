//! CAT020 "Multilateration Target Reports" output record (surface/MLAT
//! vehicle targets, spec §3 "10/11/20 -> surface/MLAT/vehicle target").
//! No `original_source/` file exists for this category; built directly
//! from spec.md §3's field list, reusing CAT048's unit-scaling
//! constants (§4.5) and its item-245-style packed aircraft
//! identification (a leading status octet followed by a 6-byte 6-bit
//! character block, as CAT062/245 also uses).

use crate::context::DecodingContext;
use crate::descriptor::DataItemDescriptor;
use crate::error::ItemError;
use crate::output::mlat020::Mlat020;
use crate::output::target048::CartesianPosition;
use crate::output::ItemValue;
use crate::primitives::{make_si16, make_ui16, make_ui24, six_bit_string};
use crate::time::tod_to_seconds;
use crate::uap::{Uap, UapSlot};

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
    let ground_bit = bytes[0] & 0x02 != 0;
    Ok(ItemValue::Bool(ground_bit))
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
    Ok(ItemValue::U64((make_ui16(bytes) & 0x0fff) as u64))
}

fn item_090(bytes: &[u8], _ctx: &mut DecodingContext<'_>) -> Result<ItemValue, ItemError> {
    Ok(ItemValue::F64(25.0 * make_si16(bytes) as f64))
}

fn item_220(bytes: &[u8], _ctx: &mut DecodingContext<'_>) -> Result<ItemValue, ItemError> {
    Ok(ItemValue::U64(make_ui24(bytes) as u64))
}

fn item_245(bytes: &[u8], _ctx: &mut DecodingContext<'_>) -> Result<ItemValue, ItemError> {
    // Leading octet carries a status subfield (unused here); the
    // identification itself is the trailing 6-byte 6-bit block.
    Ok(ItemValue::Str(six_bit_string(&bytes[1..7])))
}

fn item_161(bytes: &[u8], _ctx: &mut DecodingContext<'_>) -> Result<ItemValue, ItemError> {
    Ok(ItemValue::U64((make_ui16(bytes) & 0x0fff) as u64))
}

pub static UAP: Uap = Uap {
    category: 20,
    fspec_max: 2,
    slots: &[
        UapSlot::Item(DataItemDescriptor::Fixed { name: "i020_010", size: 2, decode: item_010 }),
        UapSlot::Item(DataItemDescriptor::Fixed { name: "i020_140", size: 3, decode: item_140 }),
        UapSlot::Item(DataItemDescriptor::Variable { name: "i020_020", decode: item_020 }),
        UapSlot::Item(DataItemDescriptor::Fixed { name: "i020_042", size: 4, decode: item_042 }),
        UapSlot::Item(DataItemDescriptor::Fixed { name: "i020_070", size: 2, decode: item_070 }),
        UapSlot::Item(DataItemDescriptor::Fixed { name: "i020_090", size: 2, decode: item_090 }),
        UapSlot::Item(DataItemDescriptor::Fixed { name: "i020_220", size: 3, decode: item_220 }),
        UapSlot::Item(DataItemDescriptor::Fixed { name: "i020_245", size: 7, decode: item_245 }),
        UapSlot::Item(DataItemDescriptor::Fixed { name: "i020_161", size: 2, decode: item_161 }),
        UapSlot::Ref,
        UapSlot::Spf,
    ],
};

pub fn assemble(items: &[(&'static str, ItemValue)]) -> Mlat020 {
    let mut out = Mlat020::default();
    for (name, value) in items {
        match *name {
            "i020_010" => {
                out.sac = value.field("sac").and_then(ItemValue::as_i64).map(|v| v as u8);
                out.sic = value.field("sic").and_then(ItemValue::as_i64).map(|v| v as u8);
            }
            "i020_140" => out.time_of_day_s = value.as_f64(),
            "i020_020" => out.ground_bit = value.as_bool().unwrap_or(false),
            "i020_042" => {
                out.cartesian_position = Some(CartesianPosition {
                    x_m: value.field("x_m").and_then(ItemValue::as_f64).unwrap_or(0.0),
                    y_m: value.field("y_m").and_then(ItemValue::as_f64).unwrap_or(0.0),
                });
            }
            "i020_070" => out.mode_3a_code = value.as_u64().map(|v| v as u16),
            "i020_090" => out.flight_level_ft = value.as_f64(),
            "i020_220" => out.aircraft_address = value.as_u64().map(|v| v as u32),
            "i020_245" => out.aircraft_identification = value.as_str().map(str::to_owned),
            "i020_161" => out.track_number = value.as_u64().map(|v| v as u16),
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
    fn decodes_ground_vehicle_position() {
        // FSPEC: FRN1 (010), FRN3 (020), FRN4 (042).
        let fspec = 0b1010_1000u8;
        let mut bytes = vec![fspec];
        bytes.extend_from_slice(&[0x01, 0x02]); // sac/sic
        bytes.push(0x02); // ground bit set
        bytes.extend_from_slice(&[0x00, 0x0A, 0x00, 0x0B]); // x=10*0.5, y=11*0.5

        let editions = EditionConfig::latest();
        let mut frame = FrameState::default();
        let mut ctx = DecodingContext::new(&editions, &mut frame);
        let record = decode_record(&bytes, &UAP, &mut ctx).unwrap();
        match record.kind {
            crate::output::RecordKind::Mlat020(m) => {
                assert!(m.ground_bit);
                let pos = m.cartesian_position.unwrap();
                assert_eq!(pos.x_m, 5.0);
                assert_eq!(pos.y_m, 5.5);
            }
            other => panic!("expected Mlat020, got {other:?}"),
        }
    }
}
