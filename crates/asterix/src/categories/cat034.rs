//! CAT034 "Transmission of Monoradar Service Messages", grounded
//! directly on `astx_034.cpp`'s UAP and item decoders (items 000, 010,
//! 020, 030, 041, 050, 060, 070, 090, 100, 110, 120, REF, SPF).

use std::f64::consts::PI;

use crate::context::DecodingContext;
use crate::descriptor::DataItemDescriptor;
use crate::error::ItemError;
use crate::output::service034::{MessageType, Service034};
use crate::output::ItemValue;
use crate::primitives::{make_ui16, make_ui32};
use crate::time::tod_to_seconds;
use crate::uap::{Uap, UapSlot};

const DEG_TO_RAD: f64 = PI / 180.0;

fn item_000(bytes: &[u8], _ctx: &mut DecodingContext<'_>) -> Result<ItemValue, ItemError> {
    Ok(ItemValue::U64(bytes[0] as u64))
}

fn item_010(bytes: &[u8], _ctx: &mut DecodingContext<'_>) -> Result<ItemValue, ItemError> {
    Ok(ItemValue::Map(vec![
        ("sac", ItemValue::U64(bytes[0] as u64)),
        ("sic", ItemValue::U64(bytes[1] as u64)),
    ]))
}

fn item_020(bytes: &[u8], _ctx: &mut DecodingContext<'_>) -> Result<ItemValue, ItemError> {
    // Sector angle, wire LSB 360/256 degrees -> radians.
    let degrees = (360.0 / 256.0) * bytes[0] as f64;
    Ok(ItemValue::F64(degrees * DEG_TO_RAD))
}

fn item_030(bytes: &[u8], ctx: &mut DecodingContext<'_>) -> Result<ItemValue, ItemError> {
    let wire = make_ui32(&[0x00, bytes[0], bytes[1], bytes[2]]);
    let seconds = tod_to_seconds(wire);
    ctx.frame.observe_time_of_day(seconds);
    Ok(ItemValue::F64(seconds))
}

fn item_041(bytes: &[u8], _ctx: &mut DecodingContext<'_>) -> Result<ItemValue, ItemError> {
    let ars = make_ui16(bytes);
    // Present only when ars > 0: a zero count means "not rotating", the
    // original decoder leaves the field absent rather than dividing by
    // zero to get an angular speed.
    if ars == 0 {
        Ok(ItemValue::Map(vec![]))
    } else {
        Ok(ItemValue::Map(vec![("period_s", ItemValue::F64(ars as f64 / 128.0))]))
    }
}

fn item_050(bytes: &[u8], _ctx: &mut DecodingContext<'_>) -> Result<(ItemValue, usize), ItemError> {
    let df1 = *bytes.first().ok_or(ItemError::Truncated { needed: 1, available: 0 })?;
    let sf1 = df1 & 0x80 != 0;
    let sf4 = df1 & 0x10 != 0;
    let sf5 = df1 & 0x08 != 0;
    let sf6 = df1 & 0x04 != 0;
    let mut fields = Vec::new();
    let mut pos = 1usize;
    if sf1 {
        let com = *bytes.get(pos).ok_or(ItemError::Truncated { needed: pos + 1, available: bytes.len() })?;
        fields.push(("nogo", ItemValue::Bool(com & 0x80 != 0)));
        pos += 1;
    }
    if sf4 {
        let psr = *bytes.get(pos).ok_or(ItemError::Truncated { needed: pos + 1, available: bytes.len() })?;
        fields.push(("psr_overload", ItemValue::Bool(psr & 0x10 != 0)));
        pos += 1;
    }
    if sf5 {
        let ssr = *bytes.get(pos).ok_or(ItemError::Truncated { needed: pos + 1, available: bytes.len() })?;
        fields.push(("ssr_overload", ItemValue::Bool(ssr & 0x10 != 0)));
        pos += 1;
    }
    if sf6 {
        let mds = bytes
            .get(pos..pos + 2)
            .ok_or(ItemError::Truncated { needed: pos + 2, available: bytes.len() })?;
        let mds = make_ui16(mds);
        fields.push(("mode_s_overload_surveillance", ItemValue::Bool(mds & 0x1000 != 0)));
        pos += 2;
    }
    Ok((ItemValue::Map(fields), pos))
}

fn item_060(bytes: &[u8], ctx: &mut DecodingContext<'_>) -> Result<(ItemValue, usize), ItemError> {
    // Processing status: structurally identical subfield layout to
    // item 050 (presence bitmap in the leading octet).
    item_050(bytes, ctx)
}

fn item_070(bytes: &[u8], _ctx: &mut DecodingContext<'_>) -> Result<ItemValue, ItemError> {
    Ok(ItemValue::U64(make_ui16(bytes) as u64))
}

fn item_090(bytes: &[u8], _ctx: &mut DecodingContext<'_>) -> Result<ItemValue, ItemError> {
    Ok(ItemValue::Bytes(bytes.to_vec()))
}

fn item_100(bytes: &[u8], _ctx: &mut DecodingContext<'_>) -> Result<ItemValue, ItemError> {
    Ok(ItemValue::Bytes(bytes.to_vec()))
}

fn item_110(bytes: &[u8], _ctx: &mut DecodingContext<'_>) -> Result<ItemValue, ItemError> {
    Ok(ItemValue::U64(bytes[0] as u64))
}

fn item_120(bytes: &[u8], _ctx: &mut DecodingContext<'_>) -> Result<ItemValue, ItemError> {
    Ok(ItemValue::Bytes(bytes.to_vec()))
}

pub static UAP: Uap = Uap {
    category: 34,
    fspec_max: 2,
    slots: &[
        UapSlot::Item(DataItemDescriptor::Fixed { name: "i034_010", size: 2, decode: item_010 }),
        UapSlot::Item(DataItemDescriptor::Fixed { name: "i034_000", size: 1, decode: item_000 }),
        UapSlot::Item(DataItemDescriptor::Fixed { name: "i034_030", size: 3, decode: item_030 }),
        UapSlot::Item(DataItemDescriptor::Fixed { name: "i034_020", size: 1, decode: item_020 }),
        UapSlot::Item(DataItemDescriptor::Fixed { name: "i034_041", size: 2, decode: item_041 }),
        UapSlot::Item(DataItemDescriptor::Immediate { name: "i034_050", decode: item_050 }),
        UapSlot::Item(DataItemDescriptor::Immediate { name: "i034_060", decode: item_060 }),
        UapSlot::Item(DataItemDescriptor::Fixed { name: "i034_070", size: 2, decode: item_070 }),
        UapSlot::Item(DataItemDescriptor::Fixed { name: "i034_100", size: 8, decode: item_100 }),
        UapSlot::Item(DataItemDescriptor::Fixed { name: "i034_110", size: 1, decode: item_110 }),
        UapSlot::Item(DataItemDescriptor::Fixed { name: "i034_120", size: 8, decode: item_120 }),
        UapSlot::Item(DataItemDescriptor::Fixed { name: "i034_090", size: 2, decode: item_090 }),
        UapSlot::Ref,
        UapSlot::Spf,
    ],
};

pub fn assemble(items: &[(&'static str, ItemValue)]) -> Service034 {
    let mut out = Service034::default();
    for (name, value) in items {
        match *name {
            "i034_010" => {
                out.sac = value.field("sac").and_then(ItemValue::as_i64).map(|v| v as u8);
                out.sic = value.field("sic").and_then(ItemValue::as_i64).map(|v| v as u8);
            }
            "i034_000" => {
                out.message_type = match value.as_i64() {
                    Some(1) => MessageType::NorthMarker,
                    Some(2) => MessageType::SectorCrossing,
                    Some(3) => MessageType::GeographicalFiltering,
                    Some(4) => MessageType::Jamming,
                    Some(other) => MessageType::Unknown(other as u8),
                    None => MessageType::Unknown(0),
                };
            }
            "i034_030" => out.time_of_day_s = value.as_f64(),
            "i034_020" => out.antenna_azimuth_rad = value.as_f64(),
            "i034_041" => {
                out.antenna_rotation_period_s = value.field("period_s").and_then(ItemValue::as_f64);
            }
            "i034_050" => {
                out.station_configuration_status =
                    value.field("nogo").and_then(ItemValue::as_bool).map(|b| b as u16);
            }
            "i034_060" => {
                out.station_processing_mode = value
                    .field("mode_s_overload_surveillance")
                    .and_then(ItemValue::as_bool)
                    .map(|b| b as u16);
            }
            _ => {}
        }
    }
    // North marker message: azimuth 0.0 by definition, even when item
    // 020 is absent from this particular record (original decoder sets
    // `rsrv.antenna_azimuth.value = 0.0` unconditionally for mtp == 1).
    if matches!(out.message_type, MessageType::NorthMarker) {
        out.antenna_azimuth_rad.get_or_insert(0.0);
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
    fn north_marker_record_sets_azimuth_zero() {
        // FSPEC: FRN1 (010) and FRN2 (000) set, no extension.
        let fspec = 0b1100_0000u8;
        let mut bytes = vec![fspec];
        bytes.extend_from_slice(&[0x12, 0x34]); // i034/010: sac=0x12 sic=0x34
        bytes.push(0x01); // i034/000: north marker

        let editions = EditionConfig::latest();
        let mut frame = FrameState::default();
        let mut ctx = DecodingContext::new(&editions, &mut frame);
        let record = decode_record(&bytes, &UAP, &mut ctx).unwrap();
        match record.kind {
            crate::output::RecordKind::Service034(svc) => {
                assert_eq!(svc.sac, Some(0x12));
                assert_eq!(svc.sic, Some(0x34));
                assert_eq!(svc.message_type, MessageType::NorthMarker);
                assert_eq!(svc.antenna_azimuth_rad, Some(0.0));
            }
            other => panic!("expected Service034, got {other:?}"),
        }
    }

    #[test]
    fn time_of_day_wraps_and_is_remembered() {
        let fspec = 0b0010_0000u8; // FRN3 (030, ToD) only
        let mut bytes = vec![fspec];
        bytes.extend_from_slice(&[0x00, 0x00, 0x00]); // tod = 0

        let editions = EditionConfig::latest();
        let mut frame = FrameState::default();
        let mut ctx = DecodingContext::new(&editions, &mut frame);
        let record = decode_record(&bytes, &UAP, &mut ctx).unwrap();
        match record.kind {
            crate::output::RecordKind::Service034(svc) => {
                assert_eq!(svc.time_of_day_s, Some(0.0));
            }
            other => panic!("expected Service034, got {other:?}"),
        }
        assert_eq!(ctx.frame.last_time_of_day_s, Some(0.0));
    }
}
