#![doc = include_str!("../readme.md")]

mod cli;
mod hexdump;
mod lister;
mod stats;

use std::fs::File;
use std::io::{self, BufWriter, Read, Seek, SeekFrom, Write};
use std::process::ExitCode;

use asterix::context::FrameState;
use asterix::output::ItemValue;
use asterix::prelude::*;
use clap::Parser;
use thiserror::Error;
use tracing::warn;

use cli::{DataFormat, Options};

/// Failures that stop the run outright (spec §6 "Exit codes": non-zero
/// on configuration errors, I/O errors opening input/output, or the
/// first decoding error in strict mode). Per-record and per-frame
/// decode failures in the default skip-and-continue mode are logged,
/// not returned here.
#[derive(Debug, Error)]
enum AppError {
    #[error("{0}")]
    Config(#[from] ConfigError),
    #[error("cannot open input {path}: {source}")]
    OpenInput { path: String, source: io::Error },
    #[error("cannot open output {path}: {source}")]
    OpenOutput { path: String, source: io::Error },
    #[error(transparent)]
    Frame(#[from] FrameError),
    #[error("aborting in strict mode: {0}")]
    Strict(String),
    #[error("error writing output: {0}")]
    Write(#[from] io::Error),
}

fn main() -> ExitCode {
    let options = Options::parse();
    init_tracing(options.verbose);

    match run(options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("asterix-cli: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .init();
}

fn run(options: Options) -> Result<(), AppError> {
    if options.format != DataFormat::Asx {
        return Err(AppError::Config(ConfigError::UnknownDataFormat(format!(
            "{:?}",
            options.format
        ))));
    }

    let mut editions = EditionConfig::latest();
    for over in &options.editions {
        editions.set_edition(over.category, over.ordinal)?;
    }

    let path = options.input.display().to_string();
    let mut file = File::open(&options.input).map_err(|source| AppError::OpenInput {
        path: path.clone(),
        source,
    })?;
    if options.skip > 0 {
        file.seek(SeekFrom::Start(options.skip))
            .map_err(|source| AppError::OpenInput { path: path.clone(), source })?;
    }

    let mut list_out: Box<dyn Write> = match &options.list {
        Some(p) => Box::new(BufWriter::new(File::create(p).map_err(|source| AppError::OpenOutput {
            path: p.display().to_string(),
            source,
        })?)),
        None => Box::new(io::stdout()),
    };

    if options.hexdump {
        let source = limited_reader(file, options.length);
        let mut reader = RecordingReader::new(source, options.frame_format());
        hexdump::run(&mut reader, &mut list_out)?;
        return Ok(());
    }

    let mut json_out = match &options.json {
        Some(p) => Some(BufWriter::new(File::create(p).map_err(|source| AppError::OpenOutput {
            path: p.display().to_string(),
            source,
        })?)),
        None => None,
    };

    let source = limited_reader(file, options.length);
    let mut reader = RecordingReader::new(source, options.frame_format());
    let mut stats = stats::Stats::default();
    let mut frame_index: u64 = 0;

    loop {
        if let Some(limit) = options.frames {
            if frame_index >= limit {
                break;
            }
        }
        let frame = match reader.next_frame() {
            Ok(None) => break,
            Ok(Some(frame)) => frame,
            Err(e) => {
                if options.strict {
                    return Err(AppError::Strict(e.to_string()));
                }
                warn!("skipping malformed frame: {e}");
                stats.record_skip();
                continue;
            }
        };
        stats.record_frame();

        let mut frame_state = FrameState::default();
        frame_state.date = frame.date;
        frame_state.frame_time_s = frame.frame_time_s;
        frame_state.line = frame.line;

        let mut ctx = DecodingContext::new(&editions, &mut frame_state);
        match asterix::block::decode_block(&frame.payload, &mut ctx) {
            Ok(block) => {
                for record in &block.records {
                    if !passes_filters(&options, &frame, record) {
                        continue;
                    }
                    stats.record_decoded(record.category);
                    lister::list_record(&mut list_out, &frame, frame_index, record, options.altitude)?;
                    if let Some(out) = json_out.as_mut() {
                        write_json(out, record, options.altitude)?;
                    }
                }
            }
            Err(e) => {
                // spec §7: block-level failures surface as frame-level
                // failures carrying the byte offset inside the file.
                let frame_err = FrameError::Block { offset: reader.offset(), source: e };
                if options.strict {
                    return Err(AppError::Frame(frame_err));
                }
                warn!("skipping unreadable block in frame {frame_index}: {frame_err}");
            }
        }

        frame_index += 1;
    }

    writeln!(list_out, "{}", stats.summary())?;
    Ok(())
}

fn limited_reader(file: File, length: Option<u64>) -> Box<dyn Read> {
    match length {
        Some(n) => Box::new(file.take(n)),
        None => Box::new(file),
    }
}

fn passes_filters(options: &Options, frame: &asterix::frame::Frame, record: &Record) -> bool {
    if !options.cat.is_empty() && !options.cat.contains(&record.category) {
        return false;
    }
    if let Some(line) = options.line {
        if frame.line != Some(line) {
            return false;
        }
    }
    if let Some(sic) = options.sic {
        if record_sic(record) != Some(sic) {
            return false;
        }
    }
    true
}

/// Every category's data-source-identifier item decodes to an
/// `ItemValue::Map` carrying `sac`/`sic` fields (spec §4.5); the
/// generic lister filters on SIC without needing a per-category
/// accessor by scanning for the first item shaped that way.
fn record_sic(record: &Record) -> Option<u8> {
    record
        .items
        .iter()
        .find_map(|(_, value)| value.field("sic").and_then(ItemValue::as_i64).map(|v| v as u8))
}

fn write_json<W: Write>(out: &mut W, record: &Record, altitude: cli::AltitudeSelection) -> io::Result<()> {
    if altitude == cli::AltitudeSelection::Both {
        serde_json::to_writer(&mut *out, record)?;
    } else {
        let mut filtered = record.clone();
        filtered
            .items
            .retain(|(name, _)| lister::altitude_item_allowed(name, altitude));
        serde_json::to_writer(&mut *out, &filtered)?;
    }
    writeln!(out)
}
