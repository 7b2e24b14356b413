//! Builds AIRES/ZHAireS task decks for direct, reflected and stratospheric
//! cosmic-ray air showers.

pub mod common;
pub mod domain;
pub mod modules;
pub mod task;

pub use common::InstallLayout;
pub use domain::{ShowerError, ShowerKind, ShowerRequest, ShowerResult};
pub use modules::{
    ShowerBuilder, ShowerTask, create_direct, create_reflected, create_shower,
    create_stratospheric,
};
pub use task::Task;
