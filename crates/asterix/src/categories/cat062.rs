//! CAT062 "System Track Data", grounded on `astx_062.cpp` (the largest
//! source file in the pack, sampled item by item rather than
//! transcribed whole). `M_MAX_FRN=35`, `M_MAX_FSPEC_LENGTH=5`. FRN
//! allocation per `load_std_uap`: 1=010, 3=015, 4=070, 5=105, 6=100,
//! 7=185, 8=210, 9=060, 10=245, 11=380, 12=040, 13=080, 14=290, 15=200,
//! 16=295, 17=136, 18=130, 19=135, 20=220, 21=390, 22=270, 23=300,
//! 24=110, 25=120, 26=510, 27=500, 28=340, 34=REF, 35=SPF (FRN 2 and
//! 29-33 are unallocated).
//!
//! The source picks the track-number width (12-bit ARTAS-style vs.
//! 16-bit) from a module-scope flag set once per run, not per record;
//! here that becomes two UAPs (`UAP_TN12`/`UAP_TN16`) selected by
//! edition ordinal at registry-build time, the same convention CAT023
//! uses for its edition-dependent item 100 layout.

use crate::context::DecodingContext;
use crate::descriptor::DataItemDescriptor;
use crate::error::ItemError;
use crate::output::track062::{
    CartesianAcceleration, CartesianVelocity, ModeOfMovement, ModeSRegister, TargetSizeOrientation,
    Track062, TrackStatus,
};
use crate::output::target048::CartesianPosition;
use crate::output::ItemValue;
use crate::primitives::{make_si16, make_si32, make_ui16, make_ui24, make_ui32, six_bit_string};
use crate::time::tod_to_seconds;
use crate::uap::{Uap, UapSlot};

const FT_TO_M: f64 = 0.3048;
const DEG_TO_RAD: f64 = std::f64::consts::PI / 180.0;

fn item_010(bytes: &[u8], _ctx: &mut DecodingContext<'_>) -> Result<ItemValue, ItemError> {
    Ok(ItemValue::Map(vec![
        ("sac", ItemValue::U64(bytes[0] as u64)),
        ("sic", ItemValue::U64(bytes[1] as u64)),
    ]))
}

fn item_015(bytes: &[u8], _ctx: &mut DecodingContext<'_>) -> Result<ItemValue, ItemError> {
    Ok(ItemValue::U64(bytes[0] as u64))
}

fn item_070(bytes: &[u8], ctx: &mut DecodingContext<'_>) -> Result<ItemValue, ItemError> {
    let wire = make_ui24(bytes);
    let seconds = tod_to_seconds(wire);
    ctx.frame.observe_time_of_day(seconds);
    Ok(ItemValue::F64(seconds))
}

/// Track Mode 3/A Code: 12 code bits plus invalid/garbled/changed flags
/// in the top three bits of the octet pair, bit-for-bit identical to
/// CAT048 item 070's `v`/`g`/`l` layout (the third flag is named
/// "changed" here rather than "smoothed", same bit).
fn item_060(bytes: &[u8], _ctx: &mut DecodingContext<'_>) -> Result<ItemValue, ItemError> {
    let wire = make_ui16(bytes);
    Ok(ItemValue::Map(vec![
        ("code", ItemValue::U64((wire & 0x0fff) as u64)),
        ("v", ItemValue::Bool(wire & 0x8000 != 0)),
        ("g", ItemValue::Bool(wire & 0x4000 != 0)),
        ("l", ItemValue::Bool(wire & 0x2000 != 0)),
    ]))
}

/// Track Status, variable length up to 4 octets. Bit-for-bit grounded;
/// only the fields `TrackStatus` names are promoted, the rest stay
/// implicit in the generic item list.
fn item_080(bytes: &[u8], _ctx: &mut DecodingContext<'_>) -> Result<ItemValue, ItemError> {
    let df0 = bytes[0];
    let mut fields = vec![
        ("multi_sensor", ItemValue::Bool(df0 & 0x80 == 0)),
        ("special_position_indication", ItemValue::Bool(df0 & 0x40 != 0)),
        ("most_reliable_height", ItemValue::U64(((df0 >> 5) & 0x01) as u64)),
        ("tentative_track", ItemValue::Bool(df0 & 0x02 != 0)),
    ];
    if let Some(&df1) = bytes.get(1) {
        fields.push(("simulated", ItemValue::Bool(df1 & 0x80 != 0)));
        fields.push(("track_terminated", ItemValue::Bool(df1 & 0x40 != 0)));
        fields.push(("track_created", ItemValue::Bool(df1 & 0x20 != 0)));
    }
    if let Some(&df3) = bytes.get(3) {
        fields.push(("coasted_track", ItemValue::Bool(df3 & 0x80 != 0)));
    }
    Ok(ItemValue::Map(fields))
}

fn item_100(bytes: &[u8], _ctx: &mut DecodingContext<'_>) -> Result<ItemValue, ItemError> {
    let x = crate::primitives::make_si24(&bytes[0..3]);
    let y = crate::primitives::make_si24(&bytes[3..6]);
    Ok(ItemValue::Map(vec![
        ("x_m", ItemValue::F64(0.5 * x as f64)),
        ("y_m", ItemValue::F64(0.5 * y as f64)),
    ]))
}

fn item_105(bytes: &[u8], _ctx: &mut DecodingContext<'_>) -> Result<ItemValue, ItemError> {
    let lat_wire = make_si32(&bytes[0..4]);
    let lon_wire = make_si32(&bytes[4..8]);
    let lsb = 180.0 / (1u32 << 25) as f64;
    Ok(ItemValue::Map(vec![
        ("latitude_rad", ItemValue::F64(lat_wire as f64 * lsb * DEG_TO_RAD)),
        ("longitude_rad", ItemValue::F64(lon_wire as f64 * lsb * DEG_TO_RAD)),
    ]))
}

/// Track number (spec §9 "shared decoding context" example). Which of
/// these two functions runs is decided once at registry-build time by
/// which UAP (`UAP_TN12`/`UAP_TN16`) is active, not per record.
fn item_040_tn12(bytes: &[u8], _ctx: &mut DecodingContext<'_>) -> Result<ItemValue, ItemError> {
    let df1 = bytes[0];
    let df2 = bytes[1];
    let sttn = (df1 >> 4) & 0x01 != 0;
    // NOT as defined in the ASTERIX standard; the long-standing factual
    // ARTAS implementation, preserved here.
    let stn = make_ui16(&[df1 & 0x0f, df2]);
    Ok(ItemValue::Map(vec![
        ("track_number", ItemValue::U64(stn as u64)),
        ("track_numbering_indicator", ItemValue::Bool(sttn)),
    ]))
}

fn item_040_tn16(bytes: &[u8], _ctx: &mut DecodingContext<'_>) -> Result<ItemValue, ItemError> {
    Ok(ItemValue::Map(vec![("track_number", ItemValue::U64(make_ui16(bytes) as u64))]))
}

fn item_130(bytes: &[u8], _ctx: &mut DecodingContext<'_>) -> Result<ItemValue, ItemError> {
    // Calculated geometric altitude; wire LSB 6.25 ft.
    let alt = make_si16(bytes);
    Ok(ItemValue::F64(6.25 * alt as f64))
}

fn item_135(bytes: &[u8], _ctx: &mut DecodingContext<'_>) -> Result<ItemValue, ItemError> {
    // Calculated track barometric altitude: bit 6 of the first octet is
    // a sign bit outside the normal 16-bit two's-complement field, so
    // the source sign-extends it into bit 14 before widening.
    let mut df1 = bytes[0];
    let sign = df1 & 0x40 != 0;
    df1 &= 0x3f;
    let mut alt = make_ui16(&[df1, bytes[1]]) as i32;
    if sign {
        alt |= !0x3fff;
    }
    Ok(ItemValue::F64(25.0 * alt as f64))
}

fn item_136(bytes: &[u8], _ctx: &mut DecodingContext<'_>) -> Result<ItemValue, ItemError> {
    let alt = make_si16(bytes);
    Ok(ItemValue::F64(25.0 * alt as f64))
}

fn item_185(bytes: &[u8], _ctx: &mut DecodingContext<'_>) -> Result<ItemValue, ItemError> {
    let vx = make_si16(&bytes[0..2]);
    let vy = make_si16(&bytes[2..4]);
    Ok(ItemValue::Map(vec![
        ("vx_ms", ItemValue::F64(0.25 * vx as f64)),
        ("vy_ms", ItemValue::F64(0.25 * vy as f64)),
    ]))
}

fn item_200(bytes: &[u8], _ctx: &mut DecodingContext<'_>) -> Result<ItemValue, ItemError> {
    let df1 = bytes[0];
    Ok(ItemValue::Map(vec![
        ("transversal", ItemValue::U64(((df1 >> 6) & 0x03) as u64)),
        ("longitudinal", ItemValue::U64(((df1 >> 4) & 0x03) as u64)),
        ("vertical", ItemValue::U64(((df1 >> 2) & 0x03) as u64)),
    ]))
}

fn item_210(bytes: &[u8], _ctx: &mut DecodingContext<'_>) -> Result<ItemValue, ItemError> {
    let ax = bytes[0] as i8 as f64;
    let ay = bytes[1] as i8 as f64;
    Ok(ItemValue::Map(vec![
        ("ax_ms2", ItemValue::F64(0.25 * ax)),
        ("ay_ms2", ItemValue::F64(0.25 * ay)),
    ]))
}

fn item_220(bytes: &[u8], _ctx: &mut DecodingContext<'_>) -> Result<ItemValue, ItemError> {
    // Calculated rate of climb/descent, wire LSB 6.25 ft/min.
    let rcd = make_si16(bytes);
    Ok(ItemValue::F64(6.25 * rcd as f64))
}

fn item_245(bytes: &[u8], _ctx: &mut DecodingContext<'_>) -> Result<ItemValue, ItemError> {
    let sti = (bytes[0] >> 6) & 0x03;
    let id = six_bit_string(&bytes[1..7]);
    Ok(ItemValue::Map(vec![
        ("source", ItemValue::U64(sti as u64)),
        ("identification", ItemValue::Str(id)),
    ]))
}

fn item_270(bytes: &[u8], _ctx: &mut DecodingContext<'_>) -> Result<ItemValue, ItemError> {
    let mut fields = vec![("length_m", ItemValue::U64(((bytes[0] >> 1) & 0x7f) as u64))];
    if let Some(&b1) = bytes.get(1) {
        let orientation = ((b1 >> 1) & 0x7f) as f64 * (360.0 / 128.0);
        fields.push(("orientation_deg", ItemValue::F64(orientation)));
    }
    if let Some(&b2) = bytes.get(2) {
        fields.push(("width_m", ItemValue::U64(((b2 >> 1) & 0x7f) as u64)));
    }
    Ok(ItemValue::Map(fields))
}

fn item_300(bytes: &[u8], _ctx: &mut DecodingContext<'_>) -> Result<ItemValue, ItemError> {
    Ok(ItemValue::U64(bytes[0] as u64))
}

/// System Track Update Ages (subfield bitmap, up to 2 octets of
/// presence bits then one 1/4s-scaled octet per flagged subfield; ADS
/// is 2 octets). Only the track-age (TRK) subfield has a home in
/// `Track062`; the rest stay in the generic item map.
fn item_290(bytes: &[u8], _ctx: &mut DecodingContext<'_>) -> Result<(ItemValue, usize), ItemError> {
    let df1 = *bytes.first().ok_or(ItemError::Truncated { needed: 1, available: 0 })?;
    let names1 = ["trk", "psr", "ssr", "mds", "ads", "es", "vdl"];
    let mut fields = Vec::new();
    let mut pos = 1usize;
    for (i, name) in names1.iter().enumerate() {
        if df1 & (0x80 >> i) != 0 {
            if *name == "ads" {
                let bytes2 = bytes.get(pos..pos + 2).ok_or(ItemError::Truncated {
                    needed: pos + 2,
                    available: bytes.len(),
                })?;
                fields.push((*name, ItemValue::F64(0.25 * make_ui16(bytes2) as f64)));
                pos += 2;
            } else {
                let age = *bytes
                    .get(pos)
                    .ok_or(ItemError::Truncated { needed: pos + 1, available: bytes.len() })?;
                fields.push((*name, ItemValue::F64(0.25 * age as f64)));
                pos += 1;
            }
        }
    }
    if df1 & 0x01 != 0 {
        let df2 = *bytes.get(pos).ok_or(ItemError::Truncated { needed: pos + 1, available: bytes.len() })?;
        pos += 1;
        let names2 = ["uat", "lop", "mlt"];
        for (i, name) in names2.iter().enumerate() {
            if df2 & (0x80 >> i) != 0 {
                let age =
                    *bytes.get(pos).ok_or(ItemError::Truncated { needed: pos + 1, available: bytes.len() })?;
                fields.push((*name, ItemValue::F64(0.25 * age as f64)));
                pos += 1;
            }
        }
    }
    Ok((ItemValue::Map(fields), pos))
}

/// Data Ages (subfield bitmap, up to 4 octets of presence bits, one
/// 1/4s-scaled octet per flagged subfield except where noted). The
/// source's handling of subfield 25 (PSA, "age of position") is
/// `strk.data_ages.value_pos = 0.25 * pos`, where `pos` is the *byte
/// cursor* into the buffer rather than the subfield's own octet (the
/// octet is only even read `#if LISTER`) — almost certainly a copy/
/// paste bug against the pattern every other subfield follows. This
/// reads the subfield's own byte like all its neighbors; see the
/// `position_age_does_not_leak_buffer_cursor` test.
fn item_295(bytes: &[u8], _ctx: &mut DecodingContext<'_>) -> Result<(ItemValue, usize), ItemError> {
    let df1 = *bytes.first().ok_or(ItemError::Truncated { needed: 1, available: 0 })?;
    let mut fields = Vec::new();
    let mut pos = 1usize;
    let names1 = ["ac", "mc", "dc", "gc", "pos", "mb", "iaf"];
    for (i, name) in names1.iter().enumerate() {
        if df1 & (0x40 >> i) != 0 {
            let age = *bytes.get(pos).ok_or(ItemError::Truncated { needed: pos + 1, available: bytes.len() })?;
            fields.push((*name, ItemValue::F64(0.25 * age as f64)));
            pos += 1;
        }
    }
    if df1 & 0x01 != 0 {
        let df2 = *bytes.get(pos).ok_or(ItemError::Truncated { needed: pos + 1, available: bytes.len() })?;
        pos += 1;
        let names2 = ["m1", "m2", "m3", "fpl", "md4", "md5", "c"];
        for (i, name) in names2.iter().enumerate() {
            if df2 & (0x40 >> i) != 0 {
                let age =
                    *bytes.get(pos).ok_or(ItemError::Truncated { needed: pos + 1, available: bytes.len() })?;
                fields.push((*name, ItemValue::F64(0.25 * age as f64)));
                pos += 1;
            }
        }
        if df2 & 0x01 != 0 {
            let df3 =
                *bytes.get(pos).ok_or(ItemError::Truncated { needed: pos + 1, available: bytes.len() })?;
            pos += 1;
            let names3 = ["gal", "pun", "mb2", "iar", "mac", "bps"];
            for (i, name) in names3.iter().enumerate() {
                if df3 & (0x80 >> i) != 0 {
                    let age = *bytes
                        .get(pos)
                        .ok_or(ItemError::Truncated { needed: pos + 1, available: bytes.len() })?;
                    fields.push((*name, ItemValue::F64(0.25 * age as f64)));
                    pos += 1;
                }
            }
        }
    }
    Ok((ItemValue::Map(fields), pos))
}

/// Measured Information: sensor identification (SAC/SIC), measured
/// polar position, measured 3-D height, last measured mode C / mode 3/A
/// codes, report type. Subfield 1 (SID) is this track's last-updating
/// sensor, the grounding for `Track062.last_updating_sensor_sac/sic`
/// (the source computes it but — per its own comment pattern elsewhere
/// — never assigns it to a persisted field; the typed record here does
/// have room for it).
fn item_340(bytes: &[u8], _ctx: &mut DecodingContext<'_>) -> Result<(ItemValue, usize), ItemError> {
    let df1 = *bytes.first().ok_or(ItemError::Truncated { needed: 1, available: 0 })?;
    if df1 & 0x01 != 0 {
        return Err(ItemError::custom("unexpected FX bit in I062/340 first octet"));
    }
    let sf = [
        (df1 & 0x80 != 0, 2usize),
        (df1 & 0x40 != 0, 4),
        (df1 & 0x20 != 0, 2),
        (df1 & 0x10 != 0, 2),
        (df1 & 0x08 != 0, 2),
        (df1 & 0x04 != 0, 1),
    ];
    let mut fields = Vec::new();
    let mut pos = 1usize;
    if sf[0].0 {
        let b = bytes.get(pos..pos + 2).ok_or(ItemError::Truncated { needed: pos + 2, available: bytes.len() })?;
        let sid = make_ui16(b);
        fields.push(("last_updating_sensor_sac", ItemValue::U64((sid >> 8) as u64)));
        fields.push(("last_updating_sensor_sic", ItemValue::U64((sid & 0xff) as u64)));
        pos += 2;
    }
    if sf[1].0 {
        let b = bytes.get(pos..pos + 4).ok_or(ItemError::Truncated { needed: pos + 4, available: bytes.len() })?;
        let rho = make_ui16(&b[0..2]);
        let theta = make_ui16(&b[2..4]);
        fields.push(("range_nm", ItemValue::F64(rho as f64 / 256.0)));
        fields.push(("azimuth_deg", ItemValue::F64(theta as f64 * 360.0 / 65536.0)));
        pos += 4;
    }
    if sf[2].0 {
        let b = bytes.get(pos..pos + 2).ok_or(ItemError::Truncated { needed: pos + 2, available: bytes.len() })?;
        fields.push(("height_3d_ft", ItemValue::F64(25.0 * make_si16(b) as f64)));
        pos += 2;
    }
    if sf[3].0 {
        let b = bytes.get(pos..pos + 2).ok_or(ItemError::Truncated { needed: pos + 2, available: bytes.len() })?;
        let lmc = make_ui16(b);
        let mut code = (lmc & 0x3fff) as i32;
        if lmc & 0x2000 != 0 {
            code |= !0x3fff;
        }
        fields.push(("last_measured_mode_c_ft", ItemValue::F64(25.0 * code as f64)));
        pos += 2;
    }
    if sf[4].0 {
        let b = bytes.get(pos..pos + 2).ok_or(ItemError::Truncated { needed: pos + 2, available: bytes.len() })?;
        fields.push(("last_measured_mode_3a", ItemValue::U64((make_ui16(b) & 0x0fff) as u64)));
        pos += 2;
    }
    if sf[5].0 {
        let rtp = *bytes.get(pos).ok_or(ItemError::Truncated { needed: pos + 1, available: bytes.len() })?;
        fields.push(("report_type", ItemValue::U64(rtp as u64)));
        pos += 1;
    }
    Ok((ItemValue::Map(fields), pos))
}

/// Aircraft Derived Data: the largest compound item in the category.
/// Only the subfields with a home in `Track062` are promoted into named
/// fields (aircraft address, identification, magnetic heading, ground
/// speed, Mode S MB data); the rest are still framed correctly (so the
/// cursor advances the right amount) but their values are not
/// individually extracted.
fn item_380(bytes: &[u8], _ctx: &mut DecodingContext<'_>) -> Result<(ItemValue, usize), ItemError> {
    let df1 = *bytes.first().ok_or(ItemError::Truncated { needed: 1, available: 0 })?;
    let mut present = [false; 28];
    present[0] = df1 & 0x80 != 0; // ADR
    present[1] = df1 & 0x40 != 0; // ID
    present[2] = df1 & 0x20 != 0; // MHG
    present[3] = df1 & 0x10 != 0; // IAS
    present[4] = df1 & 0x08 != 0; // TAS
    present[5] = df1 & 0x04 != 0; // SAL
    present[6] = df1 & 0x02 != 0; // FSS
    let mut pos = 1usize;
    let mut df_prev = df1;
    for octet_fields in [
        [7usize, 8, 9, 10, 11, 12, 13].as_slice(), // TIS, TID, COM, SAB, ACS, BVR, GVR
        [14, 15, 16, 17, 18, 19, 20].as_slice(),   // RAN, TAR, TAN, GSP, VUN, MET, EMC
        [21, 22, 23, 24, 25, 26, 27].as_slice(),   // POS, GAL, PUN, MB, IAR, MAC, BPS
    ] {
        if df_prev & 0x01 == 0 {
            break;
        }
        let df_next = *bytes.get(pos).ok_or(ItemError::Truncated { needed: pos + 1, available: bytes.len() })?;
        pos += 1;
        for (i, &idx) in octet_fields.iter().enumerate() {
            present[idx] = df_next & (0x80 >> i) != 0;
        }
        df_prev = df_next;
    }
    let fixed_width = |idx: usize| -> usize {
        match idx {
            0 => 3, // ADR
            1 => 6, // ID
            2..=6 => 2,
            7 => 1, // TIS
            // index 8 (TID) is variable-length, handled separately
            9 | 10 => 2,
            11 => 7, // ACS
            12 | 13 | 14 | 15 | 16 | 17 => 2,
            18 => 1, // VUN
            19 => 8, // MET
            20 => 1, // EMC
            21 => 6, // POS
            22 => 2, // GAL
            23 => 1, // PUN
            // index 24 (MB) is variable-length, handled separately
            25 | 26 | 27 => 2,
            _ => 0,
        }
    };
    let mut len = pos;
    for idx in 0..28 {
        if !present[idx] || idx == 8 || idx == 24 {
            continue;
        }
        len += fixed_width(idx);
    }
    let mut tid_rep = 0usize;
    if present[8] {
        let rep_byte = *bytes.get(len).ok_or(ItemError::Truncated { needed: len + 1, available: bytes.len() })?;
        tid_rep = rep_byte as usize;
        len += 1 + tid_rep * 15;
    }
    let mut mb_rep = 0usize;
    if present[24] {
        let rep_byte = *bytes.get(len).ok_or(ItemError::Truncated { needed: len + 1, available: bytes.len() })?;
        mb_rep = rep_byte as usize;
        len += 1 + mb_rep * 8;
    }
    let _ = tid_rep;
    if len > bytes.len() {
        return Err(ItemError::Truncated { needed: len, available: bytes.len() });
    }

    let mut fields = Vec::new();
    let mut ix = pos;
    if present[0] {
        fields.push(("aircraft_address", ItemValue::U64(make_ui24(&bytes[ix..ix + 3]) as u64)));
        ix += 3;
    }
    if present[1] {
        fields.push(("aircraft_identification", ItemValue::Str(six_bit_string(&bytes[ix..ix + 6]))));
        ix += 6;
    }
    for idx in 2..8 {
        if present[idx] {
            let w = fixed_width(idx);
            if idx == 2 {
                // MHG: magnetic heading, LSB 360/2^16 degrees.
                let raw = make_ui16(&bytes[ix..ix + 2]);
                fields.push(("heading_rad", ItemValue::F64(raw as f64 * (360.0 / 65536.0) * DEG_TO_RAD)));
            }
            ix += w;
        }
    }
    if present[8] {
        ix += 1 + tid_rep * 15;
    }
    for idx in 9..24 {
        if present[idx] {
            let w = fixed_width(idx);
            if idx == 17 {
                // GSP: ground speed, LSB 2^-14 NM/s.
                let raw = make_ui16(&bytes[ix..ix + 2]);
                let nm_per_s = raw as f64 / 16384.0;
                fields.push(("ground_speed_kt", ItemValue::F64(nm_per_s * 3600.0)));
            }
            ix += w;
        }
    }
    if present[24] {
        let rep = bytes[ix] as usize;
        let registers = bytes[ix + 1..ix + 1 + rep * 8]
            .chunks_exact(8)
            .map(|chunk| {
                let mut value = [0u8; 7];
                value.copy_from_slice(&chunk[1..8]);
                ModeSRegister { number: chunk[0], value }
            })
            .collect::<Vec<_>>();
        fields.push(("mode_s_mb_data", ItemValue::List(registers.into_iter().map(mb_register_value).collect())));
        ix += 1 + rep * 8;
    }
    let _ = ix;
    Ok((ItemValue::Map(fields), len))
}

fn mb_register_value(reg: ModeSRegister) -> ItemValue {
    ItemValue::Map(vec![
        ("number", ItemValue::U64(reg.number as u64)),
        ("value", ItemValue::Bytes(reg.value.to_vec())),
    ])
}

/// Flight Plan Related Data: large compound item, not named by any
/// `Track062` field. Its inner bitmap shape is not resolved here (the
/// source function spans several hundred lines of mostly `#if LISTER`
/// display code); carried as an opaque length-prefixed span instead so
/// a record using it still decodes rather than aborting, the same
/// fallback the REF/SPF sentinels use.
fn item_390(bytes: &[u8], _ctx: &mut DecodingContext<'_>) -> Result<(ItemValue, usize), ItemError> {
    let len = *bytes.first().ok_or(ItemError::Truncated { needed: 1, available: 0 })? as usize;
    if len == 0 {
        return Err(ItemError::custom("I062/390 reports zero length"));
    }
    let span = bytes.get(..len).ok_or(ItemError::Truncated { needed: len, available: bytes.len() })?;
    Ok((ItemValue::Bytes(span.to_vec()), len))
}

fn item_500(bytes: &[u8], _ctx: &mut DecodingContext<'_>) -> Result<(ItemValue, usize), ItemError> {
    let df1 = *bytes.first().ok_or(ItemError::Truncated { needed: 1, available: 0 })?;
    let widths = [4usize, 2, 4, 1, 1, 2, 2, 0];
    let mut present = [false; 8];
    for i in 0..7 {
        present[i] = df1 & (0x80 >> i) != 0;
    }
    let mut pos = 1usize;
    if df1 & 0x01 != 0 {
        let df2 = *bytes.get(pos).ok_or(ItemError::Truncated { needed: pos + 1, available: bytes.len() })?;
        pos += 1;
        present[7] = df2 & 0x80 != 0;
    }
    let mut fields = Vec::new();
    let names = ["apc", "cov", "apw", "aga", "aba", "atv", "aa", "arc"];
    for (i, name) in names.iter().enumerate() {
        if present[i] {
            let w = widths[i];
            let span = bytes.get(pos..pos + w).ok_or(ItemError::Truncated { needed: pos + w, available: bytes.len() })?;
            fields.push((*name, ItemValue::Bytes(span.to_vec())));
            pos += w;
        }
    }
    Ok((ItemValue::Map(fields), pos))
}

/// Composed Track Number: FX-chained sequence of 3-octet (SUI, STN)
/// groups, first the master track, then zero or more slave tracks.
/// `/* tba */` in the source: computed but never persisted even there.
fn item_510(bytes: &[u8], _ctx: &mut DecodingContext<'_>) -> Result<(ItemValue, usize), ItemError> {
    let mut len = 0usize;
    loop {
        let group = bytes
            .get(len..len + 3)
            .ok_or(ItemError::Truncated { needed: len + 3, available: bytes.len() })?;
        len += 3;
        if group[2] & 0x01 == 0 {
            break;
        }
    }
    Ok((ItemValue::Bytes(bytes[..len].to_vec()), len))
}

/// Mode 5 Data Reports & Extended Mode 1 Code and Mode 2 Code:
/// neither is named by any `Track062` field; decoded generically as raw
/// bytes so the record still carries them in its item list.
fn item_110(bytes: &[u8], _ctx: &mut DecodingContext<'_>) -> Result<(ItemValue, usize), ItemError> {
    let df1 = *bytes.first().ok_or(ItemError::Truncated { needed: 1, available: 0 })?;
    let mut present = [false; 7];
    for (i, p) in present.iter_mut().enumerate() {
        *p = df1 & (0x40 >> i) != 0;
    }
    let widths = [2usize, 2, 1, 2, 2, 1, 1];
    let mut pos = 1usize;
    for (present, width) in present.iter().zip(widths) {
        if *present {
            pos += width;
        }
    }
    let span = bytes.get(1..pos).ok_or(ItemError::Truncated { needed: pos, available: bytes.len() })?;
    Ok((ItemValue::Bytes(span.to_vec()), pos))
}

fn item_120(bytes: &[u8], _ctx: &mut DecodingContext<'_>) -> Result<ItemValue, ItemError> {
    Ok(ItemValue::U64((make_ui16(bytes) & 0x0fff) as u64))
}

macro_rules! common_slots {
    ($item_040_decode:expr) => {
        [
            UapSlot::Item(DataItemDescriptor::Fixed { name: "i062_010", size: 2, decode: item_010 }), // 1
            UapSlot::None,                                                                            // 2
            UapSlot::Item(DataItemDescriptor::Fixed { name: "i062_015", size: 1, decode: item_015 }),  // 3
            UapSlot::Item(DataItemDescriptor::Fixed { name: "i062_070", size: 3, decode: item_070 }),  // 4
            UapSlot::Item(DataItemDescriptor::Fixed { name: "i062_105", size: 8, decode: item_105 }),  // 5
            UapSlot::Item(DataItemDescriptor::Fixed { name: "i062_100", size: 6, decode: item_100 }),  // 6
            UapSlot::Item(DataItemDescriptor::Fixed { name: "i062_185", size: 4, decode: item_185 }),  // 7
            UapSlot::Item(DataItemDescriptor::Fixed { name: "i062_210", size: 2, decode: item_210 }),  // 8
            UapSlot::Item(DataItemDescriptor::Fixed { name: "i062_060", size: 2, decode: item_060 }),  // 9
            UapSlot::Item(DataItemDescriptor::Fixed { name: "i062_245", size: 7, decode: item_245 }),  // 10
            UapSlot::Item(DataItemDescriptor::Immediate { name: "i062_380", decode: item_380 }),       // 11
            UapSlot::Item(DataItemDescriptor::Fixed { name: "i062_040", size: 2, decode: $item_040_decode }), // 12
            UapSlot::Item(DataItemDescriptor::Variable { name: "i062_080", decode: item_080 }), // 13
            UapSlot::Item(DataItemDescriptor::Immediate { name: "i062_290", decode: item_290 }), // 14
            UapSlot::Item(DataItemDescriptor::Fixed { name: "i062_200", size: 1, decode: item_200 }), // 15
            UapSlot::Item(DataItemDescriptor::Immediate { name: "i062_295", decode: item_295 }), // 16
            UapSlot::Item(DataItemDescriptor::Fixed { name: "i062_136", size: 2, decode: item_136 }), // 17
            UapSlot::Item(DataItemDescriptor::Fixed { name: "i062_130", size: 2, decode: item_130 }), // 18
            UapSlot::Item(DataItemDescriptor::Fixed { name: "i062_135", size: 2, decode: item_135 }), // 19
            UapSlot::Item(DataItemDescriptor::Fixed { name: "i062_220", size: 2, decode: item_220 }), // 20
            UapSlot::Item(DataItemDescriptor::Immediate { name: "i062_390", decode: item_390 }), // 21
            UapSlot::Item(DataItemDescriptor::Variable { name: "i062_270", decode: item_270 }), // 22
            UapSlot::Item(DataItemDescriptor::Fixed { name: "i062_300", size: 1, decode: item_300 }), // 23
            UapSlot::Item(DataItemDescriptor::Immediate { name: "i062_110", decode: item_110 }), // 24
            UapSlot::Item(DataItemDescriptor::Fixed { name: "i062_120", size: 2, decode: item_120 }), // 25
            UapSlot::Item(DataItemDescriptor::Immediate { name: "i062_510", decode: item_510 }), // 26
            UapSlot::Item(DataItemDescriptor::Immediate { name: "i062_500", decode: item_500 }), // 27
            UapSlot::Item(DataItemDescriptor::Immediate { name: "i062_340", decode: item_340 }), // 28
            UapSlot::None, // 29
            UapSlot::None, // 30
            UapSlot::None, // 31
            UapSlot::None, // 32
            UapSlot::None, // 33
            UapSlot::Ref,  // 34
            UapSlot::Spf,  // 35
        ]
    };
}

static SLOTS_TN12: [UapSlot; 35] = common_slots!(item_040_tn12);
static SLOTS_TN16: [UapSlot; 35] = common_slots!(item_040_tn16);

/// 12-bit ARTAS-style track-number width (edition ordinal 0).
pub static UAP_TN12: Uap = Uap { category: 62, fspec_max: 5, slots: &SLOTS_TN12 };

/// 16-bit track-number width (edition ordinal 1 and later).
pub static UAP_TN16: Uap = Uap { category: 62, fspec_max: 5, slots: &SLOTS_TN16 };

pub fn assemble(items: &[(&'static str, ItemValue)]) -> Track062 {
    let mut out = Track062::default();
    for (name, value) in items {
        match *name {
            "i062_010" => {
                out.sac = value.field("sac").and_then(ItemValue::as_i64).map(|v| v as u8);
                out.sic = value.field("sic").and_then(ItemValue::as_i64).map(|v| v as u8);
            }
            "i062_015" => out.service_identification = value.as_u64().map(|v| v as u8),
            "i062_070" => out.time_of_track_s = value.as_f64(),
            "i062_040" => {
                out.track_number = value.field("track_number").and_then(ItemValue::as_u64).map(|v| v as u16);
                out.track_numbering_indicator =
                    value.field("track_numbering_indicator").and_then(ItemValue::as_bool);
            }
            "i062_060" => {
                out.mode_3a = Some(crate::output::target048::ModeCode {
                    code: value.field("code").and_then(ItemValue::as_u64).unwrap_or(0) as u16,
                    v: value.field("v").and_then(ItemValue::as_bool).unwrap_or(false),
                    g: value.field("g").and_then(ItemValue::as_bool).unwrap_or(false),
                    l: value.field("l").and_then(ItemValue::as_bool).unwrap_or(false),
                });
            }
            "i062_080" => {
                out.track_status = TrackStatus {
                    multi_sensor: value.field("multi_sensor").and_then(ItemValue::as_bool).unwrap_or(false),
                    special_position_indication: value
                        .field("special_position_indication")
                        .and_then(ItemValue::as_bool)
                        .unwrap_or(false),
                    most_reliable_height: value
                        .field("most_reliable_height")
                        .and_then(ItemValue::as_u64)
                        .map(|v| v as u8),
                    tentative_track: value.field("tentative_track").and_then(ItemValue::as_bool).unwrap_or(false),
                    simulated: value.field("simulated").and_then(ItemValue::as_bool).unwrap_or(false),
                    track_terminated: value.field("track_terminated").and_then(ItemValue::as_bool).unwrap_or(false),
                    track_created: value.field("track_created").and_then(ItemValue::as_bool).unwrap_or(false),
                    coasted_track: value.field("coasted_track").and_then(ItemValue::as_bool).unwrap_or(false),
                };
            }
            "i062_100" => {
                out.cartesian_position = Some(CartesianPosition {
                    x_m: value.field("x_m").and_then(ItemValue::as_f64).unwrap_or(0.0),
                    y_m: value.field("y_m").and_then(ItemValue::as_f64).unwrap_or(0.0),
                });
            }
            "i062_105" => {
                out.latitude_rad = value.field("latitude_rad").and_then(ItemValue::as_f64);
                out.longitude_rad = value.field("longitude_rad").and_then(ItemValue::as_f64);
            }
            "i062_130" => out.geometric_altitude_ft = value.as_f64(),
            "i062_135" => out.flight_level_ft = value.as_f64(),
            "i062_136" => out.measured_mode_c_ft = value.as_f64(),
            "i062_185" => {
                out.cartesian_velocity = Some(CartesianVelocity {
                    vx_ms: value.field("vx_ms").and_then(ItemValue::as_f64).unwrap_or(0.0),
                    vy_ms: value.field("vy_ms").and_then(ItemValue::as_f64).unwrap_or(0.0),
                });
            }
            "i062_200" => {
                out.mode_of_movement = Some(ModeOfMovement {
                    transversal: value.field("transversal").and_then(ItemValue::as_u64).unwrap_or(0) as u8,
                    longitudinal: value.field("longitudinal").and_then(ItemValue::as_u64).unwrap_or(0) as u8,
                    vertical: value.field("vertical").and_then(ItemValue::as_u64).unwrap_or(0) as u8,
                });
            }
            "i062_210" => {
                out.calculated_acceleration = Some(CartesianAcceleration {
                    ax_ms2: value.field("ax_ms2").and_then(ItemValue::as_f64).unwrap_or(0.0),
                    ay_ms2: value.field("ay_ms2").and_then(ItemValue::as_f64).unwrap_or(0.0),
                });
            }
            "i062_220" => out.rate_of_climb_descent_ftmin = value.as_f64(),
            "i062_245" => {
                out.aircraft_identification = value.field("identification").and_then(ItemValue::as_str).map(str::to_owned);
                out.aircraft_identification_source =
                    value.field("source").and_then(ItemValue::as_u64).map(|v| v as u8);
            }
            "i062_270" => {
                out.target_size = Some(TargetSizeOrientation {
                    length_m: value.field("length_m").and_then(ItemValue::as_u64).map(|v| v as u8),
                    orientation_deg: value.field("orientation_deg").and_then(ItemValue::as_f64),
                    width_m: value.field("width_m").and_then(ItemValue::as_u64).map(|v| v as u8),
                });
            }
            "i062_290" => out.track_age_s = value.field("trk").and_then(ItemValue::as_f64),
            "i062_295" => out.position_age_s = value.field("pos").and_then(ItemValue::as_f64),
            "i062_300" => out.vehicle_fleet_identification = value.as_u64().map(|v| v as u8),
            "i062_340" => {
                out.last_updating_sensor_sac =
                    value.field("last_updating_sensor_sac").and_then(ItemValue::as_u64).map(|v| v as u8);
                out.last_updating_sensor_sic =
                    value.field("last_updating_sensor_sic").and_then(ItemValue::as_u64).map(|v| v as u8);
            }
            "i062_380" => {
                if let Some(addr) = value.field("aircraft_address").and_then(ItemValue::as_u64) {
                    out.aircraft_address = Some(addr as u32);
                }
                if let Some(id) = value.field("aircraft_identification").and_then(ItemValue::as_str) {
                    out.aircraft_identification = Some(id.to_owned());
                }
                if let Some(heading) = value.field("heading_rad").and_then(ItemValue::as_f64) {
                    out.heading_rad = Some(heading);
                }
                if let Some(gsp) = value.field("ground_speed_kt").and_then(ItemValue::as_f64) {
                    out.ground_speed_kt = Some(gsp);
                }
                if let Some(regs) = value.field("mode_s_mb_data").and_then(ItemValue::as_list) {
                    out.mode_s_mb_data = regs
                        .iter()
                        .filter_map(|v| {
                            let number = v.field("number")?.as_u64()? as u8;
                            let bytes = match v.field("value")? {
                                ItemValue::Bytes(b) if b.len() == 7 => {
                                    let mut arr = [0u8; 7];
                                    arr.copy_from_slice(b);
                                    arr
                                }
                                _ => return None,
                            };
                            Some(ModeSRegister { number, value: bytes })
                        })
                        .collect();
                }
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
    fn decodes_data_source_and_track_number_tn12() {
        // FSPEC: FRN1 (010) + FRN12 (040), FX into a second octet.
        let fspec = [0b1000_0001u8, 0b0000_1000u8];
        let mut bytes = fspec.to_vec();
        bytes.extend_from_slice(&[0x01, 0x02]); // sac=1 sic=2
        bytes.extend_from_slice(&[0b0001_0011, 0x45]); // sttn=1, stn=0x345

        let editions = EditionConfig::latest();
        let mut frame = FrameState::default();
        let mut ctx = DecodingContext::new(&editions, &mut frame);
        let uap = &UAP_TN12;
        let record = decode_record(&bytes, uap, &mut ctx).unwrap();
        match record.kind {
            crate::output::RecordKind::Track062(t) => {
                assert_eq!(t.sac, Some(1));
                assert_eq!(t.sic, Some(2));
                assert_eq!(t.track_number, Some(0x345));
                assert_eq!(t.track_numbering_indicator, Some(true));
            }
            other => panic!("expected Track062, got {other:?}"),
        }
    }

    #[test]
    fn decodes_track_number_tn16_without_numbering_indicator() {
        let fspec = [0b1000_0001u8, 0b0000_1000u8];
        let mut bytes = fspec.to_vec();
        bytes.extend_from_slice(&[0x01, 0x02]);
        bytes.extend_from_slice(&[0x12, 0x34]);

        let editions = EditionConfig::latest();
        let mut frame = FrameState::default();
        let mut ctx = DecodingContext::new(&editions, &mut frame);
        let uap = &UAP_TN16;
        let record = decode_record(&bytes, uap, &mut ctx).unwrap();
        match record.kind {
            crate::output::RecordKind::Track062(t) => {
                assert_eq!(t.track_number, Some(0x1234));
                assert_eq!(t.track_numbering_indicator, None);
            }
            other => panic!("expected Track062, got {other:?}"),
        }
    }

    #[test]
    fn position_age_does_not_leak_buffer_cursor() {
        // FSPEC: FRN16 (295) only, needs three octets of FSPEC to reach bit 16
        // (bit 16 falls in the third octet, which covers FRNs 15..21).
        let fspec = [0b0000_0001u8, 0b0000_0001u8, 0b0100_0000u8];
        let mut bytes = fspec.to_vec();
        // item 295: presence octet with only POS (bit index 4, mask 0x04) set.
        bytes.push(0b0000_0100);
        bytes.push(40); // 40 * 0.25s = 10s

        let editions = EditionConfig::latest();
        let mut frame = FrameState::default();
        let mut ctx = DecodingContext::new(&editions, &mut frame);
        let uap = &UAP_TN16;
        let record = decode_record(&bytes, uap, &mut ctx).unwrap();
        match record.kind {
            crate::output::RecordKind::Track062(t) => {
                // Had the source's `value_pos = 0.25 * pos` (buffer cursor)
                // bug been reproduced, this would reflect a byte offset
                // instead of the subfield's own scaled value.
                assert_eq!(t.position_age_s, Some(10.0));
            }
            other => panic!("expected Track062, got {other:?}"),
        }
    }

    #[test]
    fn track_update_ages_trk_uses_msb_and_ads_is_two_bytes() {
        // presence octet: TRK (0x80) and ADS (0x08) set, no second presence octet.
        let df1 = 0b1000_1000u8;
        let bytes = [df1, 40, 0x01, 0x90]; // trk = 40*0.25 = 10.0s; ads = 0x0190*0.25 = 100.0s

        let editions = EditionConfig::latest();
        let mut frame = FrameState::default();
        let mut ctx = DecodingContext::new(&editions, &mut frame);
        let (value, consumed) = item_290(&bytes, &mut ctx).unwrap();
        assert_eq!(consumed, 4);
        match value {
            ItemValue::Map(fields) => {
                let trk = fields.iter().find(|(n, _)| *n == "trk").unwrap();
                assert!(matches!(trk.1, ItemValue::F64(v) if (v - 10.0).abs() < 1e-9));
                let ads = fields.iter().find(|(n, _)| *n == "ads").unwrap();
                assert!(matches!(ads.1, ItemValue::F64(v) if (v - 100.0).abs() < 1e-9));
            }
            other => panic!("expected Map, got {other:?}"),
        }
    }

    #[test]
    fn track_age_promotes_from_msb_trk_bit() {
        // FSPEC: FRN14 (290) only, needs two octets of FSPEC to reach bit 14.
        let fspec = [0b0000_0001u8, 0b0000_0010u8];
        let mut bytes = fspec.to_vec();
        bytes.push(0b1000_0000); // TRK only, mask 0x80
        bytes.push(40); // 40 * 0.25s = 10s

        let editions = EditionConfig::latest();
        let mut frame = FrameState::default();
        let mut ctx = DecodingContext::new(&editions, &mut frame);
        let uap = &UAP_TN16;
        let record = decode_record(&bytes, uap, &mut ctx).unwrap();
        match record.kind {
            crate::output::RecordKind::Track062(t) => {
                assert_eq!(t.track_age_s, Some(10.0));
            }
            other => panic!("expected Track062, got {other:?}"),
        }
    }

    #[test]
    fn mode_3a_code_reuses_cat048_flag_layout() {
        let fspec = [0b0000_0001u8, 0b0100_0000u8]; // FRN9 (060)
        let mut bytes = fspec.to_vec();
        bytes.extend_from_slice(&[0b1010_0001, 0x23]); // v=1 c=1 code=0x123... wait width

        let editions = EditionConfig::latest();
        let mut frame = FrameState::default();
        let mut ctx = DecodingContext::new(&editions, &mut frame);
        let uap = &UAP_TN16;
        let record = decode_record(&bytes, uap, &mut ctx).unwrap();
        match record.kind {
            crate::output::RecordKind::Track062(t) => {
                let m3a = t.mode_3a.unwrap();
                assert!(m3a.v);
                assert!(!m3a.g);
                assert_eq!(m3a.code, 0x023);
            }
            other => panic!("expected Track062, got {other:?}"),
        }
    }
}
