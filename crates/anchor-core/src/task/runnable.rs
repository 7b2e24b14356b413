use crate::domain::errors::INPUT_OPEN;
use crate::domain::{ShowerError, ShowerResult};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Everything needed to launch the engine on a written input deck.
///
/// AIRES reads its directives from stdin, so the deck is wired there and the
/// process runs inside the task directory. Nothing here spawns the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnableTask {
    pub program: PathBuf,
    pub input_file: PathBuf,
    pub working_dir: PathBuf,
}

impl RunnableTask {
    pub fn command(&self) -> ShowerResult<Command> {
        let input = File::open(&self.input_file).map_err(|source| {
            ShowerError::io_system(
                INPUT_OPEN,
                format!(
                    "failed to open input deck '{}': {}",
                    self.input_file.display(),
                    source
                ),
            )
        })?;

        let mut command = Command::new(&self.program);
        command
            .current_dir(&self.working_dir)
            .stdin(Stdio::from(input));
        Ok(command)
    }

    pub fn shell_line(&self) -> String {
        format!(
            "cd {} && {} < {}",
            shell_quote(&self.working_dir),
            shell_quote(&self.program),
            shell_quote(&self.input_file)
        )
    }
}

/// POSIX single-quoting; paths made only of unambiguous characters stay bare.
fn shell_quote(path: &Path) -> String {
    let text = path.to_string_lossy();
    let bare = !text.is_empty()
        && text
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "/._-+:,=@%".contains(c));
    if bare {
        text.into_owned()
    } else {
        format!("'{}'", text.replace('\'', "'\\''"))
    }
}

#[cfg(test)]
mod tests {
    use super::RunnableTask;
    use crate::domain::errors::INPUT_OPEN;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn shell_line_feeds_deck_on_stdin() {
        let runnable = RunnableTask {
            program: PathBuf::from("/opt/bin/Aires"),
            input_file: PathBuf::from("/runs/ev1/ev1.inp"),
            working_dir: PathBuf::from("/runs/ev1"),
        };
        assert_eq!(
            runnable.shell_line(),
            "cd /runs/ev1 && /opt/bin/Aires < /runs/ev1/ev1.inp"
        );
    }

    #[test]
    fn shell_line_quotes_paths_with_spaces_and_quotes() {
        let runnable = RunnableTask {
            program: PathBuf::from("/opt/AIRES install/bin/Aires"),
            input_file: PathBuf::from("/data/anita's runs/ev1/ev1.inp"),
            working_dir: PathBuf::from("/data/anita's runs/ev1"),
        };
        assert_eq!(
            runnable.shell_line(),
            "cd '/data/anita'\\''s runs/ev1' && '/opt/AIRES install/bin/Aires' < '/data/anita'\\''s runs/ev1/ev1.inp'"
        );
    }

    #[test]
    fn command_targets_program_in_task_directory() {
        let temp = TempDir::new().expect("tempdir should be created");
        let input_file = temp.path().join("ev1.inp");
        fs::write(&input_file, "TaskName ev1\n").expect("deck should be written");

        let runnable = RunnableTask {
            program: PathBuf::from("/opt/bin/Aires"),
            input_file,
            working_dir: temp.path().to_path_buf(),
        };
        let command = runnable.command().expect("command should be prepared");
        assert_eq!(command.get_program(), "/opt/bin/Aires");
        assert_eq!(command.get_current_dir(), Some(temp.path()));
    }

    #[test]
    fn missing_deck_cannot_be_wired() {
        let runnable = RunnableTask {
            program: PathBuf::from("/opt/bin/Aires"),
            input_file: PathBuf::from("/definitely/not/here.inp"),
            working_dir: PathBuf::from("/definitely/not"),
        };
        let error = runnable.command().expect_err("missing deck should fail");
        assert_eq!(error.placeholder(), INPUT_OPEN);
    }
}
