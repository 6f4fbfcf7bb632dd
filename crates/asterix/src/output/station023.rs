//! CAT023 "CNS/ATM Ground Station Service Message" output record,
//! grounded on `astx_023.cpp`'s full UAP (items 000/010/015/070/100/101/
//! 110/120/200). Item 100 is edition-dependent: edition 1 stores `op` in
//! bit 7 where edition 4+ stores `nogo`; `spo`/`rn` only exist from
//! edition 4 onward, and `gssp` only when item 100's second octet is
//! actually transmitted. Item 101 only exists from edition 2 onward,
//! with `ssrp` added in edition 4.

use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct Station023 {
    pub sac: Option<u8>,
    pub sic: Option<u8>,
    pub message_type: Option<u8>,
    pub service_identification: Option<u8>,
    pub service_type: Option<u8>,
    pub time_of_day_s: Option<f64>,
    /// Edition 1 only: operational release status of the system.
    pub op: Option<bool>,
    /// Edition 4+ only: operational release status of the data.
    pub nogo: Option<bool>,
    /// Data processor overload indicator.
    pub odp: Option<bool>,
    /// Ground interface data communications overload.
    pub oxt: Option<bool>,
    /// Monitoring system connected status.
    pub msc: Option<bool>,
    /// Time source validity.
    pub tsv: Option<bool>,
    /// Edition 4+ only: indication of spoofing attack.
    pub spo: Option<bool>,
    /// Edition 4+ only: renumbering indication for track id.
    pub rn: Option<bool>,
    /// Ground station status reporting period, seconds. Present only
    /// from edition 4 onward when item 100's second octet is transmitted.
    pub gssp_s: Option<u8>,
    /// Report period, seconds; 0 in the wire field means "data driven
    /// mode" and is reported here as `Some(0.0)`.
    pub report_period_s: Option<f64>,
    pub service_class: Option<u8>,
    /// Edition 4+ only, and only when item 101's third octet is present.
    pub service_status_reporting_period_s: Option<u8>,
    pub service_status: Option<u8>,
    /// Item 120 "Service Statistics Data": `(report_type, since_nogo_ref, counter)`.
    pub service_statistics: Vec<(u8, bool, u32)>,
    pub operational_range_nm: Option<u8>,
}
