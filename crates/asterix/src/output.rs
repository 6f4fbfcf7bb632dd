//! Decoded output: the value produced by a single data item, and the
//! per-category records assembled from them (spec §3 "Output record
//! kinds").

use serde::Serialize;

pub mod adsb021;
pub mod mlat020;
pub mod sensor031;
pub mod service034;
pub mod station023;
pub mod target048;
pub mod track062;
pub mod version247;

/// The generic value a single data item decodes to, before a category
/// decoder folds it into a typed output record. Kept deliberately small:
/// item decoders never need more shapes than this to describe ASTERIX
/// fields (scalars, short strings, sub-bitmaps and repetition groups).
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ItemValue {
    I64(i64),
    F64(f64),
    U64(u64),
    Bool(bool),
    Str(String),
    Bytes(Vec<u8>),
    List(Vec<ItemValue>),
    Map(Vec<(&'static str, ItemValue)>),
}

impl ItemValue {
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            ItemValue::I64(v) => Some(*v),
            ItemValue::U64(v) => i64::try_from(*v).ok(),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ItemValue::F64(v) => Some(*v),
            ItemValue::I64(v) => Some(*v as f64),
            ItemValue::U64(v) => Some(*v as f64),
            _ => None,
        }
    }

    pub fn as_u64(&self) -> Option<u64> {
        match self {
            ItemValue::U64(v) => Some(*v),
            ItemValue::I64(v) => u64::try_from(*v).ok(),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ItemValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ItemValue::Str(v) => Some(v.as_str()),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&[(&'static str, ItemValue)]> {
        match self {
            ItemValue::Map(v) => Some(v.as_slice()),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[ItemValue]> {
        match self {
            ItemValue::List(v) => Some(v.as_slice()),
            _ => None,
        }
    }

    pub fn field(&self, name: &str) -> Option<&ItemValue> {
        self.as_map()?.iter().find(|(n, _)| *n == name).map(|(_, v)| v)
    }
}

/// A fully decoded ASTERIX record, tagged by the category it came from.
/// Every record also carries the raw `(item_name, value)` pairs it was
/// built from, so a generic lister or JSON sink can render a category it
/// has no typed struct for (e.g. a category enabled only through the
/// registry, spec §4.6).
#[derive(Debug, Clone, Serialize)]
pub struct Record {
    pub category: u8,
    pub items: Vec<(&'static str, ItemValue)>,
    #[serde(flatten)]
    pub kind: RecordKind,
}

impl Record {
    pub fn item(&self, name: &str) -> Option<&ItemValue> {
        self.items.iter().find(|(n, _)| *n == name).map(|(_, v)| v)
    }
}

/// The strongly typed view of a record, when its category has a
/// registered output builder (spec §4.7). Categories accepted only
/// generically fall back to `Generic`.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RecordKind {
    Target048(target048::Target048),
    Service034(service034::Service034),
    Track062(track062::Track062),
    Station023(station023::Station023),
    Version247(version247::Version247),
    Sensor031(sensor031::Sensor031),
    Adsb021(adsb021::Adsb021),
    Mlat020(mlat020::Mlat020),
    Generic,
}
