use crate::domain::{ShowerError, ShowerResult};
use std::fs;
use std::path::{Component, Path, PathBuf};
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryOutcome {
    Created,
    AlreadyExists,
    Failed(String),
}

/// Resolved task directory threaded through a build in place of a process-wide
/// working-directory change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDirectory {
    path: PathBuf,
    outcome: DirectoryOutcome,
}

impl TaskDirectory {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn outcome(&self) -> &DirectoryOutcome {
        &self.outcome
    }
}

/// Accepts only a single normal path component, so the task directory is a
/// direct child of the run root and `<name>.inp` lands inside it.
pub fn validate_task_name(name: &str) -> ShowerResult<()> {
    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(component)), None) if component == name => Ok(()),
        _ => Err(ShowerError::invalid_task_name(name)),
    }
}

pub fn ensure_directory(path: &Path) -> DirectoryOutcome {
    if path.is_dir() {
        return DirectoryOutcome::AlreadyExists;
    }
    if path.exists() {
        return DirectoryOutcome::Failed(format!(
            "'{}' exists and is not a directory",
            path.display()
        ));
    }

    match fs::create_dir_all(path) {
        Ok(()) => DirectoryOutcome::Created,
        Err(source) => DirectoryOutcome::Failed(format!(
            "failed to create '{}': {}",
            path.display(),
            source
        )),
    }
}

/// Creates `run_root/name`.
///
/// An existing directory is reused whatever `restart` says; any other failure
/// aborts the build unless `restart` is set, in which case it is only logged.
pub fn prepare_task_directory(
    run_root: &Path,
    name: &str,
    restart: bool,
) -> ShowerResult<TaskDirectory> {
    validate_task_name(name)?;
    let joined = run_root.join(name);
    let path = std::path::absolute(&joined).unwrap_or(joined);
    let outcome = ensure_directory(&path);

    match &outcome {
        DirectoryOutcome::Created => {
            info!(directory = %path.display(), "created task directory");
        }
        DirectoryOutcome::AlreadyExists => {
            info!(directory = %path.display(), restart, "reusing existing task directory");
        }
        DirectoryOutcome::Failed(reason) if restart => {
            warn!(directory = %path.display(), %reason, "task directory unavailable, restarting anyway");
        }
        DirectoryOutcome::Failed(reason) => {
            return Err(ShowerError::task_exists_or_uncreatable(format!(
                "task '{}' already exists or cannot be created: {}",
                name, reason
            )));
        }
    }

    Ok(TaskDirectory { path, outcome })
}
