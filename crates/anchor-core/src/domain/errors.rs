use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ShowerResult<T> = Result<T, ShowerError>;

pub const TASK_EXISTS_OR_UNCREATABLE: &str = "IO.TASK_EXISTS_OR_UNCREATABLE";
pub const INVALID_TASK_NAME: &str = "INPUT.INVALID_TASK_NAME";
pub const UNSUPPORTED_PRIMARY: &str = "INPUT.UNSUPPORTED_PRIMARY";
pub const TEMPLATE_READ: &str = "IO.TEMPLATE_READ";
pub const INVALID_VALUE: &str = "INPUT.INVALID_VALUE";
pub const INPUT_WRITE: &str = "IO.INPUT_WRITE";
pub const INPUT_OPEN: &str = "IO.INPUT_OPEN";
pub const TASK_INCOMPLETE: &str = "INPUT.TASK_INCOMPLETE";
pub const CONFIG_READ: &str = "IO.CONFIG_READ";
pub const CONFIG_PARSE: &str = "INPUT.CONFIG_PARSE";
pub const RASPASS_BINARY: &str = "SYS.RASPASS_BINARY";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShowerErrorCategory {
    InputValidationError,
    IoSystemError,
    InternalError,
}

impl ShowerErrorCategory {
    pub const fn exit_code(self) -> i32 {
        match self {
            Self::InputValidationError => 2,
            Self::IoSystemError => 3,
            Self::InternalError => 5,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InputValidationError => "InputValidationError",
            Self::IoSystemError => "IoSystemError",
            Self::InternalError => "InternalError",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowerError {
    category: ShowerErrorCategory,
    placeholder: &'static str,
    message: String,
}

impl ShowerError {
    pub fn new(
        category: ShowerErrorCategory,
        placeholder: &'static str,
        message: impl Into<String>,
    ) -> Self {
        Self {
            category,
            placeholder,
            message: message.into(),
        }
    }

    pub fn input_validation(placeholder: &'static str, message: impl Into<String>) -> Self {
        Self::new(
            ShowerErrorCategory::InputValidationError,
            placeholder,
            message,
        )
    }

    pub fn io_system(placeholder: &'static str, message: impl Into<String>) -> Self {
        Self::new(ShowerErrorCategory::IoSystemError, placeholder, message)
    }

    pub fn internal(placeholder: &'static str, message: impl Into<String>) -> Self {
        Self::new(ShowerErrorCategory::InternalError, placeholder, message)
    }

    /// The task directory could not be created and no restart was requested.
    pub fn task_exists_or_uncreatable(message: impl Into<String>) -> Self {
        Self::io_system(TASK_EXISTS_OR_UNCREATABLE, message)
    }

    /// A stratospheric shower was requested for a primary without a RASPASS counterpart.
    pub fn unsupported_primary(particle: &str) -> Self {
        Self::input_validation(
            UNSUPPORTED_PRIMARY,
            format!(
                "stratospheric showers are only supported for 'proton', 'iron', and 'electron' primaries (got '{}')",
                particle
            ),
        )
    }

    /// Task names become a single directory under the run root.
    pub fn invalid_task_name(name: &str) -> Self {
        Self::input_validation(
            INVALID_TASK_NAME,
            format!(
                "task name '{}' must be a single non-empty path component",
                name
            ),
        )
    }

    pub fn invalid_value(field: &str, value: f64) -> Self {
        Self::input_validation(
            INVALID_VALUE,
            format!("{} must be a finite number, got {}", field, value),
        )
    }

    pub const fn category(&self) -> ShowerErrorCategory {
        self.category
    }

    pub const fn placeholder(&self) -> &'static str {
        self.placeholder
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn exit_code(&self) -> i32 {
        self.category.exit_code()
    }

    pub fn diagnostic_line(&self) -> String {
        format!("ERROR: [{}] {}", self.placeholder, self.message)
    }

    pub fn fatal_exit_line(&self) -> String {
        format!("FATAL EXIT CODE: {}", self.exit_code())
    }
}

impl Display for ShowerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [{}] {}",
            self.category.as_str(),
            self.placeholder,
            self.message
        )
    }
}

impl Error for ShowerError {}
