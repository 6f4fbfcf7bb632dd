//! CAT021 "ADS-B Reports" output record. No `original_source/` file
//! exists for this category; built directly from the data fields spec.md
//! §3 describes (SAC/SIC, ToD, WGS-84 position, mode-3A/C, identification,
//! aircraft address), using the same unit-scaling constants as the
//! grounded categories.

use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct Adsb021 {
    pub sac: Option<u8>,
    pub sic: Option<u8>,
    pub time_of_day_s: Option<f64>,
    pub aircraft_address: Option<u32>,
    pub latitude_rad: Option<f64>,
    pub longitude_rad: Option<f64>,
    pub flight_level_ft: Option<f64>,
    pub geometric_altitude_ft: Option<f64>,
    pub aircraft_identification: Option<String>,
    pub ground_speed_kt: Option<f64>,
    pub true_track_angle_rad: Option<f64>,
    pub emitter_category: Option<u8>,
}
