/**
 * Time of Day (ToD) helpers.
 *
 * ASTERIX encodes ToD as a 24-bit count of 1/128 s since UTC midnight
 * (category items 034/030, 048/140, 062/070, 247/140, ...). A handful of
 * categories omit ToD on some records and expect the reader to inherit
 * the most recently observed value for the current frame — that
 * inheritance lives in [`crate::context::DecodingContext`], not here.
 */
pub const SECONDS_PER_DAY: f64 = 86_400.0;
const TOD_LSB: f64 = 1.0 / 128.0;

/// Convert a 24-bit wire ToD count (units of 1/128 s) into seconds,
/// wrapped into `[0, 86400)`.
pub fn tod_to_seconds(wire: u32) -> f64 {
    let mut secs = TOD_LSB * wire as f64;
    if secs >= SECONDS_PER_DAY {
        secs -= SECONDS_PER_DAY;
    }
    secs
}

/// Render a ToD (in seconds since midnight) as `HH:MM:SS.sss`.
pub fn format_tod(seconds: f64) -> String {
    let total_ms = (seconds * 1000.0).round() as i64;
    let ms = total_ms % 1000;
    let total_s = total_ms / 1000;
    let s = total_s % 60;
    let total_m = total_s / 60;
    let m = total_m % 60;
    let h = total_m / 60;
    format!("{h:02}:{m:02}:{s:02}.{ms:03}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_at_midnight() {
        // 0xA8C000 / 128 = 86400.0 exactly -> wraps to 0
        assert_eq!(tod_to_seconds(0x00A8_C000), 0.0);
    }

    #[test]
    fn formats_hms() {
        assert_eq!(format_tod(3661.5), "01:01:01.500");
    }
}
