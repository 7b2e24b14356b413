use crate::domain::ShowerResult;
use crate::task::LengthUnit;
use std::path::Path;

/// Command surface of a simulation task as seen by the shower builder.
///
/// Implementations own the command sequence; the builder only issues calls in
/// a fixed order and never inspects what was recorded.
pub trait ShowerTask: Sized {
    /// Opens a task bound to `program`, seeded from the `cmdfile` template.
    fn open(program: &Path, cmdfile: &Path) -> ShowerResult<Self>;

    fn load_from_file(&mut self, path: &Path) -> ShowerResult<()>;

    fn task_name(&mut self, name: &str) -> ShowerResult<()>;

    fn file_directory(&mut self, directory: &Path, scope: &str) -> ShowerResult<()>;

    fn primary_particle(&mut self, particle: &str) -> ShowerResult<()>;

    /// Energy in eV.
    fn primary_energy(&mut self, energy: f64) -> ShowerResult<()>;

    fn primary_zenith(&mut self, degrees: f64) -> ShowerResult<()>;

    fn primary_azimuth(&mut self, degrees: f64) -> ShowerResult<()>;

    fn add_site(
        &mut self,
        name: &str,
        lat: f64,
        lon: f64,
        altitude: f64,
        unit: LengthUnit,
    ) -> ShowerResult<()>;

    fn site(&mut self, name: &str) -> ShowerResult<()>;

    fn thinning_energy(&mut self, value: f64, relative: bool) -> ShowerResult<()>;

    /// Altitude in km.
    fn injection_altitude(&mut self, altitude: f64) -> ShowerResult<()>;

    fn add_special_particle(
        &mut self,
        name: &str,
        program: &Path,
        arguments: &[&str],
    ) -> ShowerResult<()>;

    fn read_cmd(&mut self, line: &str) -> ShowerResult<()>;
}
