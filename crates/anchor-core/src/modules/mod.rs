pub mod builder;
pub mod directory;
pub mod serialization;
pub mod stratospheric;

mod traits;

pub use builder::{
    BuildPlan, ShowerBuilder, configure, create_direct, create_reflected, create_shower,
    create_stratospheric,
};
pub use directory::{DirectoryOutcome, TaskDirectory, prepare_task_directory, validate_task_name};
pub use traits::ShowerTask;
