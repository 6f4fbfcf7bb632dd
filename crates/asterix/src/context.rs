//! Ambient per-frame state and per-record shared context (spec §3
//! "Shared decoding context" / "Global state", §4.7 "Ambient side
//! channels").

use crate::config::EditionConfig;

/// Per-frame ambient state, written by the frame/block layer and read by
/// item decoders. Reset whenever a new frame begins; never carried
/// across frames. Held inside [`DecodingContext`] rather than threaded
/// as extra function parameters, matching the original decoder's use of
/// module-scope "last observed" variables, but scoped to one
/// single-threaded run instead of process globals.
#[derive(Debug, Clone, Default)]
pub struct FrameState {
    pub date: Option<(u16, u8, u8)>,
    pub frame_time_s: Option<f64>,
    pub line: Option<u32>,
    pub last_time_of_day_s: Option<f64>,
    pub records_emitted: u32,
}

impl FrameState {
    /// Record a freshly decoded ToD so the next record missing its own
    /// can inherit it.
    pub fn observe_time_of_day(&mut self, seconds: f64) {
        self.last_time_of_day_s = Some(seconds);
    }
}

/// Per-record shared state, used by immediate-type decoders to pass
/// information to sibling items within the same record. Reset at every
/// record boundary.
///
/// CAT062's track-number width (spec §3's worked example for this
/// struct) turned out not to need a field here: the two widths
/// (12-bit ARTAS-style vs. 16-bit) produce two entirely different
/// item-040 decoders and two static UAP tables (`UAP_TN12`/`UAP_TN16`,
/// see `categories/cat062.rs`), selected once per block by
/// `categories::registry::uap_for` from the active edition — there is
/// no per-record decision left for this scratch space to carry.
#[derive(Debug, Clone, Default)]
pub struct RecordScratch {}

/// The full context passed to every item decoder: read-only active
/// edition configuration plus the two layers of ambient mutable state
/// above.
pub struct DecodingContext<'a> {
    pub editions: &'a EditionConfig,
    pub frame: &'a mut FrameState,
    pub scratch: RecordScratch,
}

impl<'a> DecodingContext<'a> {
    pub fn new(editions: &'a EditionConfig, frame: &'a mut FrameState) -> Self {
        DecodingContext {
            editions,
            frame,
            scratch: RecordScratch::default(),
        }
    }

    pub fn begin_record(&mut self) {
        self.scratch = RecordScratch::default();
    }

    pub fn edition_of(&self, category: u8) -> u8 {
        self.editions.edition_of(category)
    }
}
