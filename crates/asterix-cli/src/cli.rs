//! Command-line surface (spec §6 "External interfaces", CLI surface,
//! an external collaborator specified only at its interface).

use std::path::PathBuf;

use asterix::frame::FrameFormat;
use clap::{ArgGroup, Parser};

/// One `CAT=ORDINAL` override for `--edition`, e.g. `23=1` selects
/// CAT023 edition ordinal 1 (edition 4 in the reference document).
#[derive(Debug, Clone, Copy)]
pub struct EditionOverride {
    pub category: u8,
    pub ordinal: u8,
}

impl std::str::FromStr for EditionOverride {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (cat, ordinal) = s
            .split_once('=')
            .ok_or_else(|| format!("expected CAT=ORDINAL, got {s:?}"))?;
        let category = cat
            .trim()
            .parse::<u8>()
            .map_err(|e| format!("invalid category {cat:?}: {e}"))?;
        let ordinal = ordinal
            .trim()
            .parse::<u8>()
            .map_err(|e| format!("invalid edition ordinal {ordinal:?}: {e}"))?;
        Ok(EditionOverride { category, ordinal })
    }
}

/// The data format carried inside each frame's payload. Only `Asx`
/// (plain ASTERIX) is implemented; `Asf`/`Zzz` are named so the CLI
/// rejects them cleanly instead of silently mis-parsing bytes as
/// ASTERIX records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum DataFormat {
    Asx,
    Asf,
    Zzz,
}

/// Which altitude-bearing items the lister keeps when a record carries
/// both a geometric and a barometric one (CAT021 110/145, CAT062
/// 130/135): the underlying decoder always decodes both when present,
/// this only trims which one reaches the textual listing and the JSON
/// sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum AltitudeSelection {
    Geometric,
    Barometric,
    Both,
}

#[derive(Debug, Parser)]
#[command(
    name = "asterix-cli",
    version,
    author,
    about = "Decode and list EUROCONTROL ASTERIX surveillance recordings"
)]
#[command(group(ArgGroup::new("recording_format").args(["ioss", "rff", "net", "rec"])))]
pub struct Options {
    /// Recording to decode
    pub input: PathBuf,

    /// Write the textual listing here instead of stdout
    #[arg(long)]
    pub list: Option<PathBuf>,

    /// Input is IOSS Final Format
    #[arg(long)]
    pub ioss: bool,

    /// Input is RFF (Comsoft style)
    #[arg(long)]
    pub rff: bool,

    /// Input is Netto
    #[arg(long)]
    pub net: bool,

    /// Input is a raw sequence of records (default)
    #[arg(long)]
    pub rec: bool,

    /// Payload data format inside each frame
    #[arg(long, value_enum, default_value = "asx")]
    pub format: DataFormat,

    /// Per-category edition override, repeatable (e.g. `--edition 23=1`)
    #[arg(long = "edition", value_name = "CAT=ORDINAL")]
    pub editions: Vec<EditionOverride>,

    /// Only list these categories (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub cat: Vec<u8>,

    /// Only list this line/board number
    #[arg(long)]
    pub line: Option<u32>,

    /// Only list records whose SAC/SIC system identification code matches
    #[arg(long)]
    pub sic: Option<u8>,

    /// Which altitude item to keep when a record carries both a
    /// geometric and a barometric one
    #[arg(long, value_enum, default_value = "both")]
    pub altitude: AltitudeSelection,

    /// Skip this many bytes before reading the first frame
    #[arg(long, default_value_t = 0)]
    pub skip: u64,

    /// Stop after this many frames
    #[arg(long)]
    pub frames: Option<u64>,

    /// Stop after this many bytes of input have been consumed
    #[arg(long)]
    pub length: Option<u64>,

    /// Dump recording-format frame boundaries as hex instead of decoding
    #[arg(long)]
    pub hexdump: bool,

    /// Also write one JSON object per record to this path
    #[arg(long)]
    pub json: Option<PathBuf>,

    /// Abort on the first decode error instead of skipping and continuing
    #[arg(long)]
    pub strict: bool,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Options {
    pub fn frame_format(&self) -> FrameFormat {
        if self.ioss {
            FrameFormat::Ioss
        } else if self.rff {
            FrameFormat::Rff
        } else if self.net {
            FrameFormat::Netto
        } else {
            FrameFormat::SequenceOfRecords
        }
    }
}
