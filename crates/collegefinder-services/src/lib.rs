//! collegefinder-services — collaborator implementations.
//!
//! Implements the `KeyValueStorage` and `Authenticator` traits from
//! `collegefinder-core`, and loads the user configuration file.

pub mod config;
pub mod mock;
pub mod storage;

pub use config::{load_config, load_config_from, CollegefinderConfig};
pub use mock::MockAuthenticator;
pub use storage::{FileStorage, MemoryStorage};
