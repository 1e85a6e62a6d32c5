// Event allocation: how a total event budget is split across sections and wells

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DerenzoError;
use crate::phantom::{Phantom, Section};

/// Policy for splitting an event budget across wells
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventMode {
    /// Events per well proportional to the well's own area: uniform activity concentration
    #[default]
    EqualActivity,
    /// Same number of events in every well of every section
    EqualCounts,
    /// Each section receives its share of the total well area, split across its wells
    SubsectionArea,
}

impl EventMode {
    pub const ALL: [EventMode; 3] = [
        EventMode::EqualActivity,
        EventMode::EqualCounts,
        EventMode::SubsectionArea,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            EventMode::EqualActivity => "equal_activity",
            EventMode::EqualCounts => "equal_counts",
            EventMode::SubsectionArea => "subsection_area",
        }
    }
}

impl fmt::Display for EventMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EventMode {
    type Err = DerenzoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EventMode::ALL
            .into_iter()
            .find(|mode| mode.name() == s)
            .ok_or_else(|| DerenzoError::UnknownEventMode(s.to_string()))
    }
}

/// Real-valued share of the event budget for one section
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionAllocation {
    pub section_index: usize,
    pub num_wells: usize,
    /// Events assigned to each well of the section
    pub events_per_well: f64,
    /// Events assigned to the section as a whole
    pub section_events: f64,
}

fn share(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        numerator / denominator
    } else {
        0.0
    }
}

fn allocate_section(
    index: usize,
    section: &Section,
    phantom: &Phantom,
    num_events: f64,
    mode: EventMode,
) -> SectionAllocation {
    let num_wells = section.num_wells();

    let (events_per_well, section_events) = match mode {
        EventMode::EqualActivity => {
            let per_well = num_events * share(section.well_area(), phantom.total_area());
            (per_well, per_well * num_wells as f64)
        }
        EventMode::EqualCounts => {
            let per_well = share(num_events, phantom.total_well_count() as f64);
            (per_well, per_well * num_wells as f64)
        }
        EventMode::SubsectionArea => {
            let section_events = num_events * share(section.total_area(), phantom.total_area());
            (share(section_events, num_wells as f64), section_events)
        }
    };

    SectionAllocation {
        section_index: index,
        num_wells,
        events_per_well,
        section_events,
    }
}

/// Split `num_events` across the phantom's sections according to `mode`.
///
/// A phantom without any wells receives no events.
pub fn section_allocations(phantom: &Phantom, num_events: f64, mode: EventMode) -> Vec<SectionAllocation> {
    phantom
        .sections()
        .iter()
        .enumerate()
        .map(|(i, section)| allocate_section(i, section, phantom, num_events, mode))
        .collect()
}

/// Round half away from zero to a non-negative event count.
pub fn round_events(events: f64) -> u64 {
    if events.is_finite() && events > 0.0 {
        events.round() as u64
    } else {
        0
    }
}

/// Integer event count for each well of a section, in layout order.
///
/// `equal_activity` and `equal_counts` round every well's share on its own.
/// `subsection_area` rounds the section total once and hands the remainder out one
/// event at a time to the first wells, so the section total is preserved exactly.
pub fn integer_event_counts(allocation: &SectionAllocation, mode: EventMode) -> Vec<u64> {
    let n = allocation.num_wells;
    match mode {
        EventMode::EqualActivity | EventMode::EqualCounts => {
            vec![round_events(allocation.events_per_well); n]
        }
        EventMode::SubsectionArea => {
            if n == 0 {
                return Vec::new();
            }
            let total = round_events(allocation.section_events);
            let base = total / n as u64;
            let remainder = (total % n as u64) as usize;
            (0..n)
                .map(|i| if i < remainder { base + 1 } else { base })
                .collect()
        }
    }
}

impl Phantom {
    /// Per-section split of `num_events`; see [`section_allocations`].
    pub fn section_allocations(&self, num_events: f64, mode: EventMode) -> Vec<SectionAllocation> {
        section_allocations(self, num_events, mode)
    }
}
