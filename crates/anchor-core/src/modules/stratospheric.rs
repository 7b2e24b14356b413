//! RASPASS primaries for stratospheric (upward-going) showers.
//!
//! AIRES has no native upward primary, so three special particles backed by the
//! `RASPASSprimary` helper are registered and the requested species is mapped
//! onto one of them. The crossing height is handed to the helper through a
//! global variable.

use super::ShowerTask;
use super::serialization::format_fixed_f64;
use crate::domain::{RaspassSpecies, ShowerError, ShowerResult};
use std::path::Path;

pub const RASPASS_HEIGHT_GLOBAL: &str = "RASPASSHeight";

/// Registers every RASPASS species, then resolves `particle` to its special name.
///
/// Registrations are issued before the lookup, so they stay in the task even
/// when the particle is rejected.
pub fn specialize<T: ShowerTask>(
    task: &mut T,
    raspass: &Path,
    particle: &str,
) -> ShowerResult<&'static str> {
    for species in RaspassSpecies::ALL {
        task.add_special_particle(species.special_name(), raspass, &[species.tag()])?;
    }

    RaspassSpecies::from_particle(particle)
        .map(RaspassSpecies::special_name)
        .ok_or_else(|| ShowerError::unsupported_primary(particle))
}

/// Crossing height in meters, two decimals.
pub fn encode_height(height_km: f64) -> String {
    format_fixed_f64(height_km * 1.0e3, 0, 2)
}

pub fn height_command(height_km: f64) -> String {
    format!(
        "SetGlobal {} {}",
        RASPASS_HEIGHT_GLOBAL,
        encode_height(height_km)
    )
}
