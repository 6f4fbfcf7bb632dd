//! Textual lister: the pretty-printer external collaborator from spec
//! §6, invoked once per decoded record.

use std::io::{self, Write};

use asterix::frame::Frame;
use asterix::output::{ItemValue, Record};

use crate::cli::AltitudeSelection;

/// Items carrying a geometric altitude, dropped when `--altitude
/// barometric` is requested.
const GEOMETRIC_ALTITUDE_ITEMS: &[&str] = &["i021_110", "i062_130"];
/// Items carrying a barometric (flight level) altitude, dropped when
/// `--altitude geometric` is requested.
const BAROMETRIC_ALTITUDE_ITEMS: &[&str] = &["i021_145", "i048_090", "i062_135"];

pub(crate) fn altitude_item_allowed(name: &str, selection: AltitudeSelection) -> bool {
    match selection {
        AltitudeSelection::Both => true,
        AltitudeSelection::Geometric => !BAROMETRIC_ALTITUDE_ITEMS.contains(&name),
        AltitudeSelection::Barometric => !GEOMETRIC_ALTITUDE_ITEMS.contains(&name),
    }
}

pub fn list_record<W: Write>(
    out: &mut W,
    frame: &Frame,
    frame_index: u64,
    record: &Record,
    altitude: AltitudeSelection,
) -> io::Result<()> {
    write!(out, "cat{:03} frame={frame_index}", record.category)?;
    if let Some(t) = frame.frame_time_s {
        write!(out, " t={t:.3}")?;
    }
    if let Some(line) = frame.line {
        write!(out, " line={line}")?;
    }
    writeln!(out)?;
    for (name, value) in &record.items {
        if !altitude_item_allowed(name, altitude) {
            continue;
        }
        write!(out, "  {name:<16} = ")?;
        write_value(out, value)?;
        writeln!(out)?;
    }
    Ok(())
}

fn write_value<W: Write>(out: &mut W, value: &ItemValue) -> io::Result<()> {
    match value {
        ItemValue::I64(v) => write!(out, "{v}"),
        ItemValue::F64(v) => write!(out, "{v}"),
        ItemValue::U64(v) => write!(out, "{v}"),
        ItemValue::Bool(v) => write!(out, "{v}"),
        ItemValue::Str(v) => write!(out, "{v:?}"),
        ItemValue::Bytes(v) => write!(out, "{}", hex::encode(v)),
        ItemValue::List(items) => {
            write!(out, "[")?;
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    write!(out, ", ")?;
                }
                write_value(out, item)?;
            }
            write!(out, "]")
        }
        ItemValue::Map(fields) => {
            write!(out, "{{")?;
            for (i, (name, v)) in fields.iter().enumerate() {
                if i > 0 {
                    write!(out, ", ")?;
                }
                write!(out, "{name}: ")?;
                write_value(out, v)?;
            }
            write!(out, "}}")
        }
    }
}
