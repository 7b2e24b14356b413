//! Minimal AIRES task: an append-only directive list bound to an engine binary.

mod directive;
mod runnable;
mod template;

pub use directive::{Directive, LengthUnit};
pub use runnable::RunnableTask;
pub use template::{TemplateLine, load_template, tokenize_template};

use crate::domain::errors::{INPUT_WRITE, TASK_INCOMPLETE};
use crate::domain::{ShowerError, ShowerResult};
use crate::modules::ShowerTask;
use crate::modules::serialization::write_text_artifact;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const INPUT_FILE_EXTENSION: &str = "inp";

#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    program: PathBuf,
    name: Option<String>,
    directory: Option<PathBuf>,
    sites: Vec<String>,
    directives: Vec<Directive>,
}

impl Task {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            name: None,
            directory: None,
            sites: Vec::new(),
            directives: Vec::new(),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn directory(&self) -> Option<&Path> {
        self.directory.as_deref()
    }

    pub fn sites(&self) -> &[String] {
        &self.sites
    }

    pub fn directives(&self) -> &[Directive] {
        &self.directives
    }

    /// Directives issued after template loading.
    pub fn commands(&self) -> impl Iterator<Item = &Directive> {
        self.directives
            .iter()
            .filter(|directive| !directive.is_loaded())
    }

    pub fn render(&self) -> String {
        let mut rendered = String::new();
        for directive in &self.directives {
            rendered.push_str(&directive.to_string());
            rendered.push('\n');
        }
        rendered
    }

    pub fn input_file_name(&self) -> ShowerResult<String> {
        let name = self.name.as_deref().ok_or_else(|| {
            ShowerError::input_validation(TASK_INCOMPLETE, "task has no name yet")
        })?;
        Ok(format!("{}.{}", name, INPUT_FILE_EXTENSION))
    }

    fn bound_directory(&self) -> ShowerResult<&Path> {
        self.directory.as_deref().ok_or_else(|| {
            ShowerError::input_validation(
                TASK_INCOMPLETE,
                "task has no output directory bound yet",
            )
        })
    }

    /// Writes the rendered deck into the bound output directory.
    pub fn write_input_file(&self) -> ShowerResult<PathBuf> {
        let path = self.bound_directory()?.join(self.input_file_name()?);
        write_text_artifact(&path, &self.render()).map_err(|source| {
            ShowerError::io_system(
                INPUT_WRITE,
                format!("failed to write input deck '{}': {}", path.display(), source),
            )
        })?;
        Ok(path)
    }

    pub fn runnable(&self) -> ShowerResult<RunnableTask> {
        let working_dir = self.bound_directory()?.to_path_buf();
        let input_file = working_dir.join(self.input_file_name()?);
        Ok(RunnableTask {
            program: self.program.clone(),
            input_file,
            working_dir,
        })
    }

    fn push(&mut self, directive: Directive) {
        match &directive {
            Directive::Loaded {
                source,
                source_line,
                ..
            } => debug!(
                origin = %format!("{}:{}", source.display(), source_line),
                directive = %directive,
                "template directive"
            ),
            _ => debug!(directive = %directive, "task directive"),
        }
        self.directives.push(directive);
    }
}

fn finite(field: &str, value: f64) -> ShowerResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ShowerError::invalid_value(field, value))
    }
}

impl ShowerTask for Task {
    fn open(program: &Path, cmdfile: &Path) -> ShowerResult<Self> {
        let mut task = Self::new(program);
        task.load_from_file(cmdfile)?;
        Ok(task)
    }

    fn load_from_file(&mut self, path: &Path) -> ShowerResult<()> {
        // Appended after earlier layers; the engine keeps the last value it reads.
        for directive in load_template(path)? {
            self.push(directive);
        }
        Ok(())
    }

    fn task_name(&mut self, name: &str) -> ShowerResult<()> {
        self.name = Some(name.to_string());
        self.push(Directive::TaskName(name.to_string()));
        Ok(())
    }

    fn file_directory(&mut self, directory: &Path, scope: &str) -> ShowerResult<()> {
        self.directory = Some(directory.to_path_buf());
        self.push(Directive::FileDirectory {
            scope: scope.to_string(),
            path: directory.to_path_buf(),
        });
        Ok(())
    }

    fn primary_particle(&mut self, particle: &str) -> ShowerResult<()> {
        self.push(Directive::PrimaryParticle(particle.to_string()));
        Ok(())
    }

    fn primary_energy(&mut self, energy: f64) -> ShowerResult<()> {
        let energy = finite("primary energy", energy)?;
        self.push(Directive::PrimaryEnergy(energy));
        Ok(())
    }

    fn primary_zenith(&mut self, degrees: f64) -> ShowerResult<()> {
        let degrees = finite("zenith angle", degrees)?;
        self.push(Directive::PrimaryZenAngle(degrees));
        Ok(())
    }

    fn primary_azimuth(&mut self, degrees: f64) -> ShowerResult<()> {
        let degrees = finite("azimuth angle", degrees)?;
        self.push(Directive::PrimaryAzimAngle(degrees));
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
        let lat = finite("site latitude", lat)?;
        let lon = finite("site longitude", lon)?;
        let altitude = finite("site altitude", altitude)?;
        if !self.sites.iter().any(|site| site == name) {
            self.sites.push(name.to_string());
        }
        self.push(Directive::AddSite {
            name: name.to_string(),
            lat,
            lon,
            altitude,
            unit,
        });
        Ok(())
    }

    fn site(&mut self, name: &str) -> ShowerResult<()> {
        self.push(Directive::Site(name.to_string()));
        Ok(())
    }

    fn thinning_energy(&mut self, value: f64, relative: bool) -> ShowerResult<()> {
        let value = finite("thinning energy", value)?;
        self.push(Directive::ThinningEnergy { value, relative });
        Ok(())
    }

    fn injection_altitude(&mut self, altitude: f64) -> ShowerResult<()> {
        let altitude = finite("injection altitude", altitude)?;
        self.push(Directive::InjectionAltitude(altitude));
        Ok(())
    }

    fn add_special_particle(
        &mut self,
        name: &str,
        program: &Path,
        arguments: &[&str],
    ) -> ShowerResult<()> {
        self.push(Directive::AddSpecialParticle {
            name: name.to_string(),
            program: program.to_path_buf(),
            arguments: arguments.iter().map(|argument| argument.to_string()).collect(),
        });
        Ok(())
    }

    fn read_cmd(&mut self, line: &str) -> ShowerResult<()> {
        self.push(Directive::Raw(line.trim().to_string()));
        Ok(())
    }
}
