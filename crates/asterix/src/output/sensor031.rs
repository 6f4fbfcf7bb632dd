//! CAT031 "General Status Messages of an ASTERIX Sensor Proxy" output
//! record, grounded on `astx_031.cpp`'s full 10-FRN UAP (items
//! 010/015/020/030/040/050/060/070/080/090). Items 060 and 080 keep the
//! original's bit-shifted bias/gain extraction verbatim, see
//! `categories::cat031`.

use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct Sensor031 {
    pub sac: Option<u8>,
    pub sic: Option<u8>,
    pub user_number: Option<u16>,
    pub time_of_day_s: Option<f64>,
    pub sensor_sac: Option<u8>,
    pub sensor_sic: Option<u8>,
    pub connection_status: Option<u8>,
    pub time_stamping_bias_s: Option<f64>,
    pub ssr_range_bias_m: Option<f64>,
    pub ssr_range_gain: Option<f64>,
    pub ssr_azimuth_bias_rad: Option<f64>,
    pub psr_range_bias_m: Option<f64>,
    pub psr_range_gain: Option<f64>,
    pub psr_azimuth_bias_rad: Option<f64>,
}
