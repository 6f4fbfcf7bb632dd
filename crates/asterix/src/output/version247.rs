//! CAT247 "Version Number" output record, grounded on `astx_247.cpp`
//! (items 010/015/140/550).

use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct Version247 {
    pub sac: Option<u8>,
    pub sic: Option<u8>,
    pub service_identification: Option<u8>,
    pub time_of_day_s: Option<f64>,
    /// Item 550 "Version Number": `(category, major, minor)` per
    /// reported standard, one triple per repetition.
    pub version_reports: Vec<(u8, u8, u8)>,
}
