//! CAT034 "Radar Service Message" output record, grounded on
//! `astx_034.cpp`'s UAP (items 000/010/020/030/041/050/060/070/100/110/120).

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageType {
    NorthMarker,
    SectorCrossing,
    GeographicalFiltering,
    Jamming,
    Unknown(u8),
}

impl Default for MessageType {
    fn default() -> Self {
        MessageType::Unknown(0)
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Service034 {
    pub message_type: MessageType,
    pub sac: Option<u8>,
    pub sic: Option<u8>,
    pub time_of_day_s: Option<f64>,
    pub antenna_azimuth_rad: Option<f64>,
    pub antenna_rotation_period_s: Option<f64>,
    pub station_configuration_status: Option<u16>,
    pub station_processing_mode: Option<u16>,
}
