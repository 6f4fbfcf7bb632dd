//! CAT062 "System Track Data" output record, grounded on `astx_062.cpp`
//! (track number width, mode-3/A, position, altitudes, velocity,
//! rate of climb/descent, track status, target identification/size,
//! Mode S MB data, update/data ages).

use serde::Serialize;

use super::target048::{CartesianPosition, ModeCode};

#[derive(Debug, Clone, Default, Serialize)]
pub struct CartesianVelocity {
    pub vx_ms: f64,
    pub vy_ms: f64,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CartesianAcceleration {
    pub ax_ms2: f64,
    pub ay_ms2: f64,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ModeOfMovement {
    pub transversal: u8,
    pub longitudinal: u8,
    pub vertical: u8,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct TargetSizeOrientation {
    pub length_m: Option<u8>,
    pub orientation_deg: Option<f64>,
    pub width_m: Option<u8>,
}

/// A single Mode S BDS register as carried by item 380 subfield 25:
/// one byte naming the register (high/low nibble = BDS1/BDS2), seven
/// bytes of register content.
#[derive(Debug, Clone, Serialize)]
pub struct ModeSRegister {
    pub number: u8,
    pub value: [u8; 7],
}

/// Flags carried by item 080 "Track Status" (bit-for-bit grounded, but
/// not every original bit is promoted to a named field here — several
/// are reserved or rarely populated in practice and stay in the
/// record's generic item list instead).
#[derive(Debug, Clone, Default, Serialize)]
pub struct TrackStatus {
    pub multi_sensor: bool,
    pub special_position_indication: bool,
    pub most_reliable_height: Option<u8>,
    pub tentative_track: bool,
    pub simulated: bool,
    pub track_terminated: bool,
    pub track_created: bool,
    pub coasted_track: bool,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Track062 {
    pub sac: Option<u8>,
    pub sic: Option<u8>,
    pub service_identification: Option<u8>,
    pub time_of_track_s: Option<f64>,
    pub track_number: Option<u16>,
    /// Only meaningful under the 12-bit ARTAS-style track-number width
    /// (edition 0's `UAP_TN12`); `None` under the 16-bit convention.
    pub track_numbering_indicator: Option<bool>,
    pub mode_3a: Option<ModeCode>,
    pub cartesian_position: Option<CartesianPosition>,
    pub latitude_rad: Option<f64>,
    pub longitude_rad: Option<f64>,
    pub flight_level_ft: Option<f64>,
    pub geometric_altitude_ft: Option<f64>,
    pub measured_mode_c_ft: Option<f64>,
    pub cartesian_velocity: Option<CartesianVelocity>,
    pub mode_of_movement: Option<ModeOfMovement>,
    pub calculated_acceleration: Option<CartesianAcceleration>,
    pub rate_of_climb_descent_ftmin: Option<f64>,
    pub aircraft_identification: Option<String>,
    pub aircraft_identification_source: Option<u8>,
    pub target_size: Option<TargetSizeOrientation>,
    pub track_status: TrackStatus,
    pub aircraft_address: Option<u32>,
    pub ground_speed_kt: Option<f64>,
    pub heading_rad: Option<f64>,
    pub mode_s_mb_data: Vec<ModeSRegister>,
    /// Age of the last position update; 1/4 second units (item 295
    /// subfield PSA). See `cat062::item_295` for the bug this
    /// deliberately does not reproduce.
    pub position_age_s: Option<f64>,
    pub track_age_s: Option<f64>,
    pub vehicle_fleet_identification: Option<u8>,
    /// `tba` in the original decoder: computed but not persisted there;
    /// stored here since the typed record has a field for it.
    pub last_updating_sensor_sac: Option<u8>,
    pub last_updating_sensor_sic: Option<u8>,
}
