// Geant4 general particle source macro: one source block per well

use log::info;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::config::{DEFAULT_ENERGY_KEV, DEFAULT_NUM_EVENTS};
use crate::export::allocation::EventMode;
use crate::export::well_records::{well_records, WellRecord};
use crate::phantom::Phantom;
use crate::Result;

/// Parameters for a macro export
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MacroOptions {
    /// Total event budget across all wells
    pub num_events: u64,
    /// Gamma energy; Geant4 reads a unitless `/gps/ene/mono` value in keV
    pub energy: f64,
    pub mode: EventMode,
}

impl Default for MacroOptions {
    fn default() -> Self {
        Self {
            num_events: DEFAULT_NUM_EVENTS,
            energy: DEFAULT_ENERGY_KEV,
            mode: EventMode::default(),
        }
    }
}

/// Format a value for a macro line: always with a decimal point, no negative zero,
/// rotation noise below 1e-12 snapped to zero.
pub(crate) fn format_value(value: f64) -> String {
    let snapped = if value.abs() < 1e-12 { 0.0 } else { value };
    format!("{:?}", snapped + 0.0)
}

fn write_source_block(out: &mut String, record: &WellRecord, unit: &str) {
    let (pos_type, shape) = if record.is_volume() {
        ("Volume", "Cylinder")
    } else {
        ("Plane", "Circle")
    };

    // Writing into a String cannot fail
    let _ = writeln!(out, "/gps/particle gamma");
    let _ = writeln!(out, "/gps/pos/type {}", pos_type);
    let _ = writeln!(out, "/gps/pos/shape {}", shape);
    let _ = writeln!(
        out,
        "/gps/pos/centre {} {} {} {}",
        format_value(record.x),
        format_value(record.y),
        format_value(record.z),
        unit
    );
    let _ = writeln!(out, "/gps/pos/radius {} {}", format_value(record.radius), unit);
    if record.is_volume() {
        let _ = writeln!(out, "/gps/pos/halfz {} {}", format_value(record.depth), unit);
    }
    let _ = writeln!(out, "/gps/ang/type iso");
    let _ = writeln!(out, "/gps/ene/type Mono");
    let _ = writeln!(out, "/gps/ene/mono {}", format_value(record.energy));
    let _ = writeln!(out, "/run/beamOn {}", record.event_count);
}

/// Render the phantom as Geant4 GPS macro text.
pub fn to_gps_macro(phantom: &Phantom, options: &MacroOptions) -> String {
    let records = well_records(phantom, options.num_events, options.energy, options.mode);
    let unit = phantom.length_unit();

    let mut out = String::new();
    let _ = writeln!(
        out,
        "# Derenzo phantom: radius {} {}, feature sizes {}, {} wells, {} events ({})",
        format_value(phantom.radius()),
        unit,
        phantom
            .feature_sizes()
            .iter()
            .map(|&f| format_value(f))
            .collect::<Vec<_>>()
            .join(" "),
        records.len(),
        options.num_events,
        options.mode
    );

    for record in &records {
        out.push('\n');
        write_source_block(&mut out, record, unit);
    }

    out
}

/// Write the macro for `phantom` to `path`, parsing `mode` first.
///
/// An unrecognized mode fails before the file is created.
pub fn write_gps_macro<P: AsRef<Path>>(
    phantom: &Phantom,
    path: P,
    num_events: u64,
    energy: f64,
    mode: &str,
) -> Result<()> {
    let options = MacroOptions {
        num_events,
        energy,
        mode: mode.parse()?,
    };
    write_gps_macro_with(phantom, path, &options)
}

/// Write the macro for `phantom` to `path` with already validated options.
pub fn write_gps_macro_with<P: AsRef<Path>>(phantom: &Phantom, path: P, options: &MacroOptions) -> Result<()> {
    let text = to_gps_macro(phantom, options);
    fs::write(path.as_ref(), text)?;
    info!(
        "wrote {} point sources to {}",
        phantom.total_well_count(),
        path.as_ref().display()
    );
    Ok(())
}

impl Phantom {
    /// See [`to_gps_macro`].
    pub fn to_gps_macro(&self, options: &MacroOptions) -> String {
        to_gps_macro(self, options)
    }

    /// See [`write_gps_macro`].
    pub fn write_gps_macro<P: AsRef<Path>>(&self, path: P, num_events: u64, energy: f64, mode: &str) -> Result<()> {
        write_gps_macro(self, path, num_events, energy, mode)
    }
}
