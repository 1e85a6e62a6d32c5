use serde::{Deserialize, Serialize};

use crate::export::allocation::{integer_event_counts, section_allocations, EventMode};
use crate::phantom::Phantom;

/// One point source of the exported phantom
///
/// Produced on demand from a phantom; never stored on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WellRecord {
    pub section_index: usize,
    pub x: f64,
    pub y: f64,
    /// Wells lie on the central plane
    pub z: f64,
    pub radius: f64,
    pub energy: f64,
    /// Real-valued share before rounding
    pub events: f64,
    pub event_count: u64,
    /// Half height of the source cylinder; 0 for an in-plane disk
    pub depth: f64,
}

impl WellRecord {
    pub fn is_volume(&self) -> bool {
        self.depth > 0.0
    }
}

/// One record per well, sections in phantom order and wells in layout order.
pub fn well_records(phantom: &Phantom, num_events: u64, energy: f64, mode: EventMode) -> Vec<WellRecord> {
    let allocations = section_allocations(phantom, num_events as f64, mode);
    let mut records = Vec::with_capacity(phantom.total_well_count());

    for (section, allocation) in phantom.sections().iter().zip(&allocations) {
        let counts = integer_event_counts(allocation, mode);
        for (center, event_count) in section.well_centers().iter().zip(counts) {
            records.push(WellRecord {
                section_index: allocation.section_index,
                x: center.x,
                y: center.y,
                z: 0.0,
                radius: section.well_radius(),
                energy,
                events: allocation.events_per_well,
                event_count,
                depth: phantom.depth(),
            });
        }
    }

    records
}

impl Phantom {
    /// See [`well_records`].
    pub fn well_records(&self, num_events: u64, energy: f64, mode: EventMode) -> Vec<WellRecord> {
        well_records(self, num_events, energy, mode)
    }
}
