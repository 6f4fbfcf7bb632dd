//! Field Specification (FSPEC) reading and FRN walking (spec §3
//! "Field Specification", §4.4 steps 1-2).

use crate::error::RecordError;
use crate::primitives::Cursor;

/// A parsed field specification: the raw octets (extension bits
/// included) and the category's declared maximum length, kept only to
/// produce a clear error if a caller tries to walk past it.
pub struct Fspec<'a> {
    bytes: &'a [u8],
}

impl<'a> Fspec<'a> {
    /// Read the FSPEC from the head of `cursor`, up to `max_octets`
    /// (inclusive) before failing with `FspecTooLong`.
    pub fn read(
        cursor: &mut Cursor<'a>,
        category: u8,
        max_octets: usize,
    ) -> Result<Self, RecordError> {
        let start = cursor.position();
        loop {
            let byte = cursor.u8().map_err(|_| RecordError::Truncated)?;
            let consumed = cursor.position() - start;
            if byte & 0x01 == 0 {
                break;
            }
            if consumed >= max_octets {
                return Err(RecordError::FspecTooLong {
                    category,
                    max: max_octets,
                });
            }
        }
        let end = cursor.position();
        Ok(Fspec {
            bytes: cursor.consumed_span(start, end - start),
        })
    }

    /// Iterate `(frn, bit_is_set)` pairs in FRN-ascending order, skipping
    /// each octet's extension bit (spec §4.4 step 2).
    pub fn iter_frns(&self) -> impl Iterator<Item = (u16, bool)> + '_ {
        self.bytes.iter().enumerate().flat_map(|(octet_idx, &byte)| {
            (0..7).map(move |bit_idx| {
                let frn = (octet_idx * 7 + bit_idx + 1) as u16;
                let mask = 0x80u8 >> bit_idx;
                (frn, byte & mask != 0)
            })
        })
    }

    pub fn octet_len(&self) -> usize {
        self.bytes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_octet_fspec_has_no_extension() {
        let mut c = Cursor::new(&[0xC0, 0xAA]);
        let fspec = Fspec::read(&mut c, 48, 4).unwrap();
        assert_eq!(fspec.octet_len(), 1);
        let set: Vec<u16> = fspec.iter_frns().filter(|&(_, set)| set).map(|(f, _)| f).collect();
        assert_eq!(set, vec![1, 2]);
        // cursor has consumed exactly the fspec byte, second byte untouched
        assert_eq!(c.remaining(), 1);
    }

    #[test]
    fn extension_bit_chains_to_second_octet() {
        // first octet: FRN1 set, extension bit set; second octet: FRN8 set, no extension
        let mut c = Cursor::new(&[0x81, 0x02]);
        let fspec = Fspec::read(&mut c, 48, 4).unwrap();
        assert_eq!(fspec.octet_len(), 2);
        let set: Vec<u16> = fspec.iter_frns().filter(|&(_, set)| set).map(|(f, _)| f).collect();
        assert_eq!(set, vec![1, 8]);
    }

    #[test]
    fn too_long_fspec_is_rejected() {
        let mut c = Cursor::new(&[0x81, 0x81, 0x81, 0x81, 0x80]);
        let err = Fspec::read(&mut c, 48, 3).unwrap_err();
        assert!(matches!(err, RecordError::FspecTooLong { category: 48, max: 3 }));
    }
}
