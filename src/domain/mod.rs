pub mod database;
pub mod env_file;
pub mod error;
pub mod manifest;
pub mod options;
pub mod platform;

pub use database::{DatabaseConfig, DbDriver};
pub use error::AppError;
pub use manifest::ComposerManifest;
pub use options::AdditionalOptions;
pub use platform::Platform;
