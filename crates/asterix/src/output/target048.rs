//! CAT048 "Monoradar Target Report" output record.

use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct ModeCode {
    pub code: u16,
    pub v: bool,
    pub g: bool,
    pub l: bool,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PolarPosition {
    pub range_m: f64,
    pub azimuth_rad: f64,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CartesianPosition {
    pub x_m: f64,
    pub y_m: f64,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Target048 {
    pub sac: Option<u8>,
    pub sic: Option<u8>,
    pub time_of_day_s: Option<f64>,
    pub polar_position: Option<PolarPosition>,
    pub cartesian_position: Option<CartesianPosition>,
    pub mode_3a: Option<ModeCode>,
    pub mode_c_ft: Option<i32>,
    pub mode_c_garbled: Option<bool>,
    pub mode_c_invalid: Option<bool>,
    pub height_3d_ft: Option<f64>,
    pub aircraft_address: Option<u32>,
    pub aircraft_identification: Option<String>,
    pub mode_s_mb_data: Vec<[u8; 8]>,
    pub simulated: bool,
    pub test_target: bool,
    pub ground_bit: bool,
    pub special_position_indication: bool,
    pub track_number: Option<u16>,
}
