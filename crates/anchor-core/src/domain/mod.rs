pub mod errors;

pub use errors::{ShowerError, ShowerErrorCategory, ShowerResult};

use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub const DEFAULT_GROUND_KM: f64 = 0.0;
pub const DEFAULT_THINNING: f64 = 1.0e-6;
pub const DEFAULT_INJECTION_KM: f64 = 100.0;
pub const DEFAULT_HEIGHT_KM: f64 = 38.0;

/// Shower geometry; selects the template, the binary tree and the closing command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShowerKind {
    Direct,
    Reflected,
    Stratospheric,
}

impl ShowerKind {
    pub const ALL: [ShowerKind; 3] = [Self::Direct, Self::Reflected, Self::Stratospheric];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Direct => "direct",
            Self::Reflected => "reflected",
            Self::Stratospheric => "stratospheric",
        }
    }

    /// Zenith angle handed to the engine. RASPASS primaries travel upward, so the
    /// stratospheric geometry uses the complement.
    pub fn effective_zenith(self, zenith: f64) -> f64 {
        match self {
            Self::Stratospheric => 180.0 - zenith,
            Self::Direct | Self::Reflected => zenith,
        }
    }

    pub const fn honours_model(self) -> bool {
        !matches!(self, Self::Direct)
    }
}

impl Display for ShowerKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).as_str())
    }
}

/// AIRES build flavour. Only the exact tag `AiresQ` selects the AiresQ binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AiresModel {
    #[default]
    Aires,
    AiresQ,
}

impl AiresModel {
    pub fn from_tag(tag: Option<&str>) -> Self {
        match tag {
            Some("AiresQ") => Self::AiresQ,
            _ => Self::Aires,
        }
    }

    pub const fn binary_name(self) -> &'static str {
        match self {
            Self::Aires => "Aires",
            Self::AiresQ => "AiresQ",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RaspassSpecies {
    Proton,
    Iron,
    Electron,
}

impl RaspassSpecies {
    pub const ALL: [RaspassSpecies; 3] = [Self::Proton, Self::Iron, Self::Electron];

    pub fn from_particle(particle: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|species| species.tag().eq_ignore_ascii_case(particle))
    }

    pub const fn tag(self) -> &'static str {
        match self {
            Self::Proton => "Proton",
            Self::Iron => "Iron",
            Self::Electron => "Electron",
        }
    }

    pub const fn special_name(self) -> &'static str {
        match self {
            Self::Proton => "RASPASSProton",
            Self::Iron => "RASPASSIron",
            Self::Electron => "RASPASSElectron",
        }
    }
}

/// Physical parameters for one shower task.
///
/// Angles are in degrees, `energy` is log10(eV) and all altitudes are in km.
/// `injection` only applies to direct/reflected showers and `height` only to
/// stratospheric ones.
#[derive(Debug, Clone, PartialEq)]
pub struct ShowerRequest {
    pub name: String,
    pub particle: String,
    pub energy: f64,
    pub zenith: f64,
    pub azimuth: f64,
    pub lat: f64,
    pub lon: f64,
    pub ground: f64,
    pub thinning: f64,
    pub injection: f64,
    pub height: f64,
    pub restart: bool,
    pub default: Option<PathBuf>,
    pub program: Option<PathBuf>,
    pub model: Option<String>,
}

impl ShowerRequest {
    pub fn new(
        name: impl Into<String>,
        particle: impl Into<String>,
        energy: f64,
        zenith: f64,
        azimuth: f64,
        lat: f64,
        lon: f64,
    ) -> Self {
        Self {
            name: name.into(),
            particle: particle.into(),
            energy,
            zenith,
            azimuth,
            lat,
            lon,
            ground: DEFAULT_GROUND_KM,
            thinning: DEFAULT_THINNING,
            injection: DEFAULT_INJECTION_KM,
            height: DEFAULT_HEIGHT_KM,
            restart: false,
            default: None,
            program: None,
            model: None,
        }
    }

    pub fn with_ground(mut self, ground: f64) -> Self {
        self.ground = ground;
        self
    }

    pub fn with_thinning(mut self, thinning: f64) -> Self {
        self.thinning = thinning;
        self
    }

    pub fn with_injection(mut self, injection: f64) -> Self {
        self.injection = injection;
        self
    }

    pub fn with_height(mut self, height: f64) -> Self {
        self.height = height;
        self
    }

    pub fn with_restart(mut self, restart: bool) -> Self {
        self.restart = restart;
        self
    }

    pub fn with_default(mut self, default: impl Into<PathBuf>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn with_program(mut self, program: impl Into<PathBuf>) -> Self {
        self.program = Some(program.into());
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn aires_model(&self) -> AiresModel {
        AiresModel::from_tag(self.model.as_deref())
    }

    /// Primary energy in eV.
    pub fn linear_energy(&self) -> f64 {
        10.0_f64.powf(self.energy)
    }

    /// Ground altitude in meters.
    pub fn ground_meters(&self) -> f64 {
        1.0e3 * self.ground
    }
}
