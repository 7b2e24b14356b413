//! Install layout: where templates, engine binaries and task directories live.
//!
//! Every path the builder touches is derived from an [`InstallLayout`] handed in
//! by the caller, so nothing depends on where this crate itself is deployed.

use crate::domain::errors::{CONFIG_PARSE, CONFIG_READ};
use crate::domain::{AiresModel, ShowerError, ShowerKind, ShowerResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const RASPASS_PRIMARY_BINARY: &str = "RASPASSprimary";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InstallLayout {
    pub install_root: PathBuf,
    pub run_root: PathBuf,
    pub defaults_dir: PathBuf,
    pub aires_dir: PathBuf,
    pub common_template: String,
    pub direct: KindLayout,
    pub reflected: KindLayout,
    pub stratospheric: KindLayout,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KindLayout {
    pub template: String,
    pub install_dir: String,
}

impl KindLayout {
    fn new(template: &str, install_dir: &str) -> Self {
        Self {
            template: template.to_string(),
            install_dir: install_dir.to_string(),
        }
    }
}

impl Default for InstallLayout {
    fn default() -> Self {
        Self {
            install_root: PathBuf::from("."),
            run_root: PathBuf::from("runs"),
            defaults_dir: PathBuf::from("defaults"),
            aires_dir: PathBuf::from("aires"),
            common_template: "common_default.inp".to_string(),
            direct: KindLayout::new("direct_default.inp", "aires_direct_install"),
            reflected: KindLayout::new("reflected_default.inp", "aires_reflected_install"),
            stratospheric: KindLayout::new(
                "stratospheric_default.inp",
                "aires_stratospheric_install",
            ),
        }
    }
}

/// Template and binaries resolved for one shower kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub template: PathBuf,
    pub binary: PathBuf,
    /// Companion RASPASS binary; only present for stratospheric showers.
    pub raspass: Option<PathBuf>,
}

impl InstallLayout {
    pub fn with_install_root(install_root: impl Into<PathBuf>) -> Self {
        Self {
            install_root: install_root.into(),
            ..Self::default()
        }
    }

    pub fn from_file(path: &Path) -> ShowerResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| {
            ShowerError::io_system(
                CONFIG_READ,
                format!("failed to read layout config '{}': {}", path.display(), source),
            )
        })?;
        serde_json::from_str(&content).map_err(|source| {
            ShowerError::input_validation(
                CONFIG_PARSE,
                format!(
                    "failed to parse layout config '{}': {}",
                    path.display(),
                    source
                ),
            )
        })
    }

    pub fn kind_layout(&self, kind: ShowerKind) -> &KindLayout {
        match kind {
            ShowerKind::Direct => &self.direct,
            ShowerKind::Reflected => &self.reflected,
            ShowerKind::Stratospheric => &self.stratospheric,
        }
    }

    fn defaults_root(&self) -> PathBuf {
        self.install_root.join(&self.defaults_dir)
    }

    pub fn common_template_path(&self) -> PathBuf {
        self.defaults_root().join(&self.common_template)
    }

    pub fn template_path(&self, kind: ShowerKind) -> PathBuf {
        self.defaults_root().join(&self.kind_layout(kind).template)
    }

    pub fn bin_dir(&self, kind: ShowerKind) -> PathBuf {
        self.install_root
            .join(&self.aires_dir)
            .join(&self.kind_layout(kind).install_dir)
            .join("bin")
    }

    /// Task directories are resolved against the install root unless `run_root` is absolute.
    pub fn run_root_path(&self) -> PathBuf {
        if self.run_root.is_absolute() {
            self.run_root.clone()
        } else {
            self.install_root.join(&self.run_root)
        }
    }

    pub fn select(&self, kind: ShowerKind, model: AiresModel) -> Selection {
        let model = if kind.honours_model() {
            model
        } else {
            AiresModel::Aires
        };
        let bin_dir = self.bin_dir(kind);
        let raspass =
            (kind == ShowerKind::Stratospheric).then(|| bin_dir.join(RASPASS_PRIMARY_BINARY));

        Selection {
            template: self.template_path(kind),
            binary: bin_dir.join(model.binary_name()),
            raspass,
        }
    }
}
