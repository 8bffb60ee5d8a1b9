//! Static coastline facts and breathing cue scripts
//!
//! Both datasets are fixed, ordered and read-only. Selection is always by
//! rotation (`index mod len`), never random.

use serde::Serialize;

/// A coastline fact shown at the start of a focus block
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Fact {
    /// Region name
    pub region: &'static str,
    /// Approximate shoreline length in kilometres, fjords included
    pub shoreline_km: u32,
    /// Breathing cue paired with this region
    pub breath_cue: &'static str,
}

/// Coastline facts, rotated once per cycle
pub const FACTS: [Fact; 4] = [
    Fact {
        region: "Lofoten",
        shoreline_km: 2_300,
        breath_cue: "Inhale for four, like a wave climbing the skerries",
    },
    Fact {
        region: "Nordland",
        shoreline_km: 14_500,
        breath_cue: "Hold for four, still as a fjord at dawn",
    },
    Fact {
        region: "Finnmark",
        shoreline_km: 6_800,
        breath_cue: "Exhale for six, slow as the tide leaving Varanger",
    },
    Fact {
        region: "Vestland",
        shoreline_km: 16_300,
        breath_cue: "Rest for two, then begin again with the next swell",
    },
];

/// Cue script narrated during focus blocks
pub const FOCUS_SCRIPT: [&str; 4] = [
    "Settle your shoulders and breathe in through the nose",
    "Let the exhale run longer than the inhale",
    "Bring your attention back to the task in front of you",
    "Notice the breath, then return to the work",
];

/// Cue script narrated during break blocks
pub const BREAK_SCRIPT: [&str; 3] = [
    "Stand up and look at something far away",
    "Roll your neck slowly, one direction then the other",
    "Take three deep breaths before you sit back down",
];

/// Pick the item at `index` from a non-empty list, wrapping around its length.
///
/// Returns `None` only for an empty list.
#[must_use]
pub fn rotate<T>(items: &[T], index: usize) -> Option<&T> {
    if items.is_empty() {
        return None;
    }
    items.get(index % items.len())
}

/// Select the fact for a 1-based cycle number: `(cycle - 1) mod len`.
#[must_use]
pub fn fact_for_cycle(facts: &[Fact], cycle: u32) -> Option<&Fact> {
    let index = usize::try_from(cycle.saturating_sub(1)).unwrap_or(usize::MAX);
    rotate(facts, index)
}
