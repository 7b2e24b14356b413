use super::{CliError, GlobalArgs};
use anchor_core::InstallLayout;
use anyhow::Context;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

pub(super) fn init_tracing(verbosity: u8) {
    let default_directive = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    // A subscriber may already be installed when the CLI is driven from tests.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Config file first, then explicit flags on top.
pub(super) fn resolve_layout(global: &GlobalArgs) -> Result<InstallLayout, CliError> {
    let mut layout = match &global.config {
        Some(path) => InstallLayout::from_file(path)?,
        None => InstallLayout::default(),
    };

    if let Some(install_root) = &global.install_root {
        layout.install_root = install_root.clone();
    }
    if let Some(run_root) = &global.run_root {
        layout.run_root = run_root.clone();
    }

    if layout.install_root.is_relative() {
        layout.install_root = absolutize(&layout.install_root)?;
    }
    debug!(
        install_root = %layout.install_root.display(),
        run_root = %layout.run_root_path().display(),
        "resolved install layout"
    );
    Ok(layout)
}

fn absolutize(path: &std::path::Path) -> Result<PathBuf, CliError> {
    std::path::absolute(path)
        .with_context(|| format!("failed to resolve install root '{}'", path.display()))
        .map_err(CliError::from)
}
