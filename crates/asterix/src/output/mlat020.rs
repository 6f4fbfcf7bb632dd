//! CAT020 "Multilateration Target Reports" output record (surface/MLAT
//! vehicle targets, spec §3 "10/11/20 -> surface/MLAT/vehicle target").
//! No `original_source/` file exists for this category; built directly
//! from spec.md §3's field list.

use serde::Serialize;

use super::target048::CartesianPosition;

#[derive(Debug, Clone, Default, Serialize)]
pub struct Mlat020 {
    pub sac: Option<u8>,
    pub sic: Option<u8>,
    pub time_of_day_s: Option<f64>,
    pub cartesian_position: Option<CartesianPosition>,
    pub mode_3a_code: Option<u16>,
    pub flight_level_ft: Option<f64>,
    pub track_number: Option<u16>,
    pub aircraft_address: Option<u32>,
    pub aircraft_identification: Option<String>,
    pub ground_bit: bool,
}
