use crate::modules::serialization::format_real;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LengthUnit {
    Meters,
    Kilometers,
}

impl LengthUnit {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Meters => "m",
            Self::Kilometers => "km",
        }
    }
}

/// One line of an AIRES input deck.
#[derive(Debug, Clone, PartialEq)]
pub enum Directive {
    /// Copied verbatim from a template file.
    Loaded {
        source: PathBuf,
        source_line: usize,
        text: String,
    },
    TaskName(String),
    FileDirectory {
        scope: String,
        path: PathBuf,
    },
    PrimaryParticle(String),
    /// Energy in eV.
    PrimaryEnergy(f64),
    /// Degrees.
    PrimaryZenAngle(f64),
    /// Degrees.
    PrimaryAzimAngle(f64),
    AddSite {
        name: String,
        lat: f64,
        lon: f64,
        altitude: f64,
        unit: LengthUnit,
    },
    Site(String),
    ThinningEnergy {
        value: f64,
        relative: bool,
    },
    /// Kilometers.
    InjectionAltitude(f64),
    AddSpecialParticle {
        name: String,
        program: PathBuf,
        arguments: Vec<String>,
    },
    Raw(String),
}

impl Directive {
    pub fn keyword(&self) -> &str {
        match self {
            Self::Loaded { text, .. } | Self::Raw(text) => {
                text.split_whitespace().next().unwrap_or_default()
            }
            Self::TaskName(_) => "TaskName",
            Self::FileDirectory { .. } => "FileDirectory",
            Self::PrimaryParticle(_) => "PrimaryParticle",
            Self::PrimaryEnergy(_) => "PrimaryEnergy",
            Self::PrimaryZenAngle(_) => "PrimaryZenAngle",
            Self::PrimaryAzimAngle(_) => "PrimaryAzimAngle",
            Self::AddSite { .. } => "AddSite",
            Self::Site(_) => "Site",
            Self::ThinningEnergy { .. } => "ThinningEnergy",
            Self::InjectionAltitude(_) => "InjectionAltitude",
            Self::AddSpecialParticle { .. } => "AddSpecialParticle",
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded { .. })
    }
}

impl Display for Directive {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Loaded { text, .. } | Self::Raw(text) => f.write_str(text),
            Self::TaskName(name) => write!(f, "TaskName {}", name),
            Self::FileDirectory { scope, path } => {
                write!(f, "FileDirectory {} {}", scope, path.display())
            }
            Self::PrimaryParticle(particle) => write!(f, "PrimaryParticle {}", particle),
            Self::PrimaryEnergy(energy) => write!(f, "PrimaryEnergy {} eV", format_real(*energy)),
            Self::PrimaryZenAngle(angle) => write!(f, "PrimaryZenAngle {} deg", format_real(*angle)),
            Self::PrimaryAzimAngle(angle) => {
                write!(f, "PrimaryAzimAngle {} deg", format_real(*angle))
            }
            Self::AddSite {
                name,
                lat,
                lon,
                altitude,
                unit,
            } => write!(
                f,
                "AddSite {} {} deg {} deg {} {}",
                name,
                format_real(*lat),
                format_real(*lon),
                format_real(*altitude),
                unit.as_str()
            ),
            Self::Site(name) => write!(f, "Site {}", name),
            Self::ThinningEnergy { value, relative } => {
                if *relative {
                    write!(f, "ThinningEnergy {} Relative", format_real(*value))
                } else {
                    write!(f, "ThinningEnergy {} eV", format_real(*value))
                }
            }
            Self::InjectionAltitude(altitude) => {
                write!(f, "InjectionAltitude {} km", format_real(*altitude))
            }
            Self::AddSpecialParticle {
                name,
                program,
                arguments,
            } => {
                write!(f, "AddSpecialParticle {} {}", name, program.display())?;
                for argument in arguments {
                    write!(f, " {}", argument)?;
                }
                Ok(())
            }
        }
    }
}
