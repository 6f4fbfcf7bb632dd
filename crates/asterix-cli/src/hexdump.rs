//! Recording-format hex-dump utility (spec §6: "recording-format
//! hex-dump utility", one of the external collaborators). Bypasses
//! ASTERIX decoding entirely: it only exercises the frame
//! demultiplexer, which is useful to eyeball frame boundaries in a
//! recording before trusting the decoder against it.

use std::io::{self, Write};

use asterix::error::FrameError;
use asterix::frame::RecordingReader;

pub fn run<R: io::Read, W: Write>(reader: &mut RecordingReader<R>, out: &mut W) -> Result<(), FrameError> {
    let mut index = 0usize;
    while let Some(frame) = reader.next_frame()? {
        let mut line = format!("frame {index:06} offset {:08x}", reader.offset());
        if let Some(t) = frame.frame_time_s {
            line.push_str(&format!(" t={t:.3}"));
        }
        if let Some(line_no) = frame.line {
            line.push_str(&format!(" line={line_no}"));
        }
        let _ = writeln!(out, "{line}  {}", hex::encode(&frame.payload));
        index += 1;
    }
    Ok(())
}
