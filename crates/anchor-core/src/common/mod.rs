pub mod config;

pub use config::{InstallLayout, KindLayout, Selection};
