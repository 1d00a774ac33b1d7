//! Configuration loading and file formats.

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileConversationConfig, FileDatasetsConfig,
    FileDispatcherConfig,
};
pub use loader::ConfigLoader;
