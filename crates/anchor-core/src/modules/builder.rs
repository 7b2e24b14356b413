use super::directory::{TaskDirectory, prepare_task_directory};
use super::stratospheric::{height_command, specialize};
use super::ShowerTask;
use crate::common::config::InstallLayout;
use crate::domain::errors::RASPASS_BINARY;
use crate::domain::{ShowerError, ShowerKind, ShowerRequest, ShowerResult};
use crate::task::{LengthUnit, Task};
use std::path::PathBuf;
use tracing::info;

pub const SITE_NAME: &str = "LatLonAltSite";
pub const OUTPUT_SCOPE: &str = "All";

/// Template and binary a build will actually use once request overrides apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildPlan {
    pub kind: ShowerKind,
    pub common_template: PathBuf,
    pub template: PathBuf,
    pub program: PathBuf,
    pub raspass: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy)]
pub struct ShowerBuilder<'a> {
    layout: &'a InstallLayout,
}

impl<'a> ShowerBuilder<'a> {
    pub fn new(layout: &'a InstallLayout) -> Self {
        Self { layout }
    }

    pub fn plan(&self, kind: ShowerKind, request: &ShowerRequest) -> BuildPlan {
        let selection = self.layout.select(kind, request.aires_model());
        BuildPlan {
            kind,
            common_template: self.layout.common_template_path(),
            template: request.default.clone().unwrap_or(selection.template),
            program: request.program.clone().unwrap_or(selection.binary),
            raspass: selection.raspass,
        }
    }

    pub fn build<T: ShowerTask>(&self, kind: ShowerKind, request: &ShowerRequest) -> ShowerResult<T> {
        let plan = self.plan(kind, request);
        info!(
            kind = %kind,
            name = %request.name,
            program = %plan.program.display(),
            "building shower task"
        );

        let directory =
            prepare_task_directory(&self.layout.run_root_path(), &request.name, request.restart)?;
        let task = configure(&plan, &directory, request)?;

        info!(name = %request.name, directory = %directory.path().display(), "shower task ready");
        Ok(task)
    }
}

/// Issues the full command sequence against a freshly opened task.
pub fn configure<T: ShowerTask>(
    plan: &BuildPlan,
    directory: &TaskDirectory,
    request: &ShowerRequest,
) -> ShowerResult<T> {
    let mut task = T::open(&plan.program, &plan.common_template)?;
    task.load_from_file(&plan.template)?;

    task.task_name(&request.name)?;
    task.file_directory(directory.path(), OUTPUT_SCOPE)?;

    let primary = match plan.kind {
        ShowerKind::Stratospheric => {
            let raspass = plan.raspass.as_deref().ok_or_else(|| {
                ShowerError::internal(
                    RASPASS_BINARY,
                    "stratospheric plan is missing the RASPASS binary",
                )
            })?;
            specialize(&mut task, raspass, &request.particle)?.to_string()
        }
        ShowerKind::Direct | ShowerKind::Reflected => request.particle.clone(),
    };

    task.primary_particle(&primary)?;
    task.primary_energy(request.linear_energy())?;

    task.primary_zenith(plan.kind.effective_zenith(request.zenith))?;
    task.primary_azimuth(request.azimuth)?;

    task.add_site(
        SITE_NAME,
        request.lat,
        request.lon,
        request.ground_meters(),
        LengthUnit::Meters,
    )?;
    task.site(SITE_NAME)?;

    task.thinning_energy(request.thinning, true)?;

    match plan.kind {
        ShowerKind::Stratospheric => task.read_cmd(&height_command(request.height))?,
        ShowerKind::Direct | ShowerKind::Reflected => {
            task.injection_altitude(request.injection)?
        }
    }

    Ok(task)
}

pub fn create_shower(
    layout: &InstallLayout,
    kind: ShowerKind,
    request: &ShowerRequest,
) -> ShowerResult<Task> {
    ShowerBuilder::new(layout).build(kind, request)
}

pub fn create_direct(layout: &InstallLayout, request: &ShowerRequest) -> ShowerResult<Task> {
    create_shower(layout, ShowerKind::Direct, request)
}

pub fn create_reflected(layout: &InstallLayout, request: &ShowerRequest) -> ShowerResult<Task> {
    create_shower(layout, ShowerKind::Reflected, request)
}

pub fn create_stratospheric(
    layout: &InstallLayout,
    request: &ShowerRequest,
) -> ShowerResult<Task> {
    create_shower(layout, ShowerKind::Stratospheric, request)
}

#[cfg(test)]
mod tests {
    use super::{SITE_NAME, ShowerBuilder, configure};
    use crate::common::config::InstallLayout;
    use crate::domain::errors::{RASPASS_BINARY, TASK_EXISTS_OR_UNCREATABLE, UNSUPPORTED_PRIMARY};
    use crate::modules::directory::prepare_task_directory;
    use crate::domain::{ShowerKind, ShowerRequest, ShowerResult};
    use crate::modules::ShowerTask;
    use crate::task::LengthUnit;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    /// Records every call as a compact string so ordering is easy to assert.
    #[derive(Debug, Default)]
    struct RecordingTask {
        calls: Vec<String>,
    }

    impl ShowerTask for RecordingTask {
        fn open(program: &Path, cmdfile: &Path) -> ShowerResult<Self> {
            Ok(Self {
                calls: vec![format!(
                    "open {} {}",
                    program.display(),
                    cmdfile.file_name().unwrap().to_string_lossy()
                )],
            })
        }

        fn load_from_file(&mut self, path: &Path) -> ShowerResult<()> {
            self.calls
                .push(format!("load {}", path.file_name().unwrap().to_string_lossy()));
            Ok(())
        }

        fn task_name(&mut self, name: &str) -> ShowerResult<()> {
            self.calls.push(format!("name {name}"));
            Ok(())
        }

        fn file_directory(&mut self, _directory: &Path, scope: &str) -> ShowerResult<()> {
            self.calls.push(format!("directory {scope}"));
            Ok(())
        }

        fn primary_particle(&mut self, particle: &str) -> ShowerResult<()> {
            self.calls.push(format!("particle {particle}"));
            Ok(())
        }

        fn primary_energy(&mut self, energy: f64) -> ShowerResult<()> {
            self.calls.push(format!("energy {energy:e}"));
            Ok(())
        }

        fn primary_zenith(&mut self, degrees: f64) -> ShowerResult<()> {
            self.calls.push(format!("zenith {degrees}"));
            Ok(())
        }

        fn primary_azimuth(&mut self, degrees: f64) -> ShowerResult<()> {
            self.calls.push(format!("azimuth {degrees}"));
            Ok(())
        }

        fn add_site(
            &mut self,
            name: &str,
            lat: f64,
            lon: f64,
            altitude: f64,
            unit: LengthUnit,
        ) -> ShowerResult<()> {
            self.calls
                .push(format!("add_site {name} {lat} {lon} {altitude} {}", unit.as_str()));
            Ok(())
        }

        fn site(&mut self, name: &str) -> ShowerResult<()> {
            self.calls.push(format!("site {name}"));
            Ok(())
        }

        fn thinning_energy(&mut self, value: f64, relative: bool) -> ShowerResult<()> {
            self.calls.push(format!("thinning {value:e} {relative}"));
            Ok(())
        }

        fn injection_altitude(&mut self, altitude: f64) -> ShowerResult<()> {
            self.calls.push(format!("injection {altitude}"));
            Ok(())
        }

        fn add_special_particle(
            &mut self,
            name: &str,
            _program: &Path,
            arguments: &[&str],
        ) -> ShowerResult<()> {
            self.calls
                .push(format!("special {name} {}", arguments.join(" ")));
            Ok(())
        }

        fn read_cmd(&mut self, line: &str) -> ShowerResult<()> {
            self.calls.push(format!("raw {line}"));
            Ok(())
        }
    }

    fn layout(temp: &TempDir) -> InstallLayout {
        InstallLayout::with_install_root(temp.path())
    }

    fn request() -> ShowerRequest {
        ShowerRequest::new("ev1", "proton", 18.0, 45.0, 90.0, -80.0, 0.0)
            .with_ground(2.0)
            .with_injection(100.0)
    }

    #[test]
    fn direct_sequence_is_fixed() {
        let temp = TempDir::new().expect("tempdir should be created");
        let layout = layout(&temp);
        let task: RecordingTask = ShowerBuilder::new(&layout)
            .build(ShowerKind::Direct, &request())
            .expect("direct build should succeed");

        let program = temp.path().join("aires/aires_direct_install/bin/Aires");
        let energy = format!("energy {:e}", 10.0_f64.powf(18.0));
        assert_eq!(
            task.calls,
            [
                format!("open {} common_default.inp", program.display()),
                "load direct_default.inp".to_string(),
                "name ev1".to_string(),
                "directory All".to_string(),
                "particle proton".to_string(),
                energy,
                "zenith 45".to_string(),
                "azimuth 90".to_string(),
                format!("add_site {SITE_NAME} -80 0 2000 m"),
                format!("site {SITE_NAME}"),
                "thinning 1e-6 true".to_string(),
                "injection 100".to_string(),
            ]
        );
    }

    #[test]
    fn stratospheric_sequence_registers_primaries_before_assignment() {
        let temp = TempDir::new().expect("tempdir should be created");
        let layout = layout(&temp);
        let request = request().with_height(38.0).with_model("AiresQ");
        let task: RecordingTask = ShowerBuilder::new(&layout)
            .build(ShowerKind::Stratospheric, &request)
            .expect("stratospheric build should succeed");

        let energy = format!("energy {:e}", 10.0_f64.powf(18.0));
        let calls: Vec<&str> = task.calls.iter().map(String::as_str).collect();
        assert!(calls[0].contains("aires_stratospheric_install/bin/AiresQ"));
        assert_eq!(
            &calls[1..],
            [
                "load stratospheric_default.inp",
                "name ev1",
                "directory All",
                "special RASPASSProton Proton",
                "special RASPASSIron Iron",
                "special RASPASSElectron Electron",
                "particle RASPASSProton",
                energy.as_str(),
                "zenith 135",
                "azimuth 90",
                "add_site LatLonAltSite -80 0 2000 m",
                "site LatLonAltSite",
                "thinning 1e-6 true",
                "raw SetGlobal RASPASSHeight 38000.00",
            ]
        );
    }

    #[test]
    fn reflected_sequence_matches_direct_apart_from_selection() {
        let temp = TempDir::new().expect("tempdir should be created");
        let layout = layout(&temp);
        let direct: RecordingTask = ShowerBuilder::new(&layout)
            .build(ShowerKind::Direct, &request())
            .expect("direct build should succeed");
        let reflected: RecordingTask = ShowerBuilder::new(&layout)
            .build(ShowerKind::Reflected, &request())
            .expect("reflected build should succeed");

        assert_eq!(reflected.calls[1], "load reflected_default.inp");
        assert_eq!(&reflected.calls[2..], &direct.calls[2..]);
    }

    #[test]
    fn stratospheric_rejects_unknown_primary() {
        let temp = TempDir::new().expect("tempdir should be created");
        let layout = layout(&temp);
        let request = ShowerRequest::new("ev2", "helium", 18.0, 30.0, 0.0, 0.0, 0.0);
        let error = ShowerBuilder::new(&layout)
            .build::<RecordingTask>(ShowerKind::Stratospheric, &request)
            .expect_err("helium should be rejected");
        assert_eq!(error.placeholder(), UNSUPPORTED_PRIMARY);
    }

    #[test]
    fn overrides_replace_selected_template_and_program() {
        let temp = TempDir::new().expect("tempdir should be created");
        let layout = layout(&temp);
        let request = request()
            .with_default("/custom/anita_default.inp")
            .with_program("/custom/bin/ZHAireS");

        let plan = ShowerBuilder::new(&layout).plan(ShowerKind::Reflected, &request);
        assert_eq!(plan.template, PathBuf::from("/custom/anita_default.inp"));
        assert_eq!(plan.program, PathBuf::from("/custom/bin/ZHAireS"));
        assert_eq!(plan.common_template, temp.path().join("defaults/common_default.inp"));
        assert!(plan.raspass.is_none());
    }

    #[test]
    fn stratospheric_plan_without_raspass_binary_is_internal() {
        let temp = TempDir::new().expect("tempdir should be created");
        let layout = layout(&temp);
        let mut plan = ShowerBuilder::new(&layout).plan(ShowerKind::Stratospheric, &request());
        plan.raspass = None;
        let directory =
            prepare_task_directory(temp.path(), "ev1", false).expect("directory should be created");

        let error = configure::<RecordingTask>(&plan, &directory, &request())
            .expect_err("missing RASPASS binary should fail");
        assert_eq!(error.placeholder(), RASPASS_BINARY);
        assert_eq!(error.exit_code(), 5);
    }

    #[test]
    fn directory_failure_aborts_before_task_is_opened() {
        let temp = TempDir::new().expect("tempdir should be created");
        let layout = layout(&temp);
        std::fs::create_dir_all(temp.path().join("runs")).expect("run root should exist");
        std::fs::write(temp.path().join("runs/ev1"), "blocked").expect("file should be written");

        let error = ShowerBuilder::new(&layout)
            .build::<RecordingTask>(ShowerKind::Direct, &request())
            .expect_err("blocked directory should fail");
        assert_eq!(error.placeholder(), TASK_EXISTS_OR_UNCREATABLE);
    }
}
