//! Process-wide statistics accumulator (spec §2 "Sinks (external)",
//! §6 external collaborators). Not consulted by the decoder itself;
//! purely a run summary for the operator.

use std::collections::BTreeMap;

#[derive(Debug, Default)]
pub struct Stats {
    pub frames_read: u64,
    pub records_decoded: u64,
    pub frames_skipped: u64,
    pub records_by_category: BTreeMap<u8, u64>,
}

impl Stats {
    pub fn record_frame(&mut self) {
        self.frames_read += 1;
    }

    pub fn record_skip(&mut self) {
        self.frames_skipped += 1;
    }

    pub fn record_decoded(&mut self, category: u8) {
        self.records_decoded += 1;
        *self.records_by_category.entry(category).or_insert(0) += 1;
    }

    pub fn summary(&self) -> String {
        let mut out = format!(
            "frames read: {}, frames skipped: {}, records decoded: {}\n",
            self.frames_read, self.frames_skipped, self.records_decoded
        );
        for (category, count) in &self.records_by_category {
            out.push_str(&format!("  cat{category:03}: {count}\n"));
        }
        out
    }
}
