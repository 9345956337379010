pub mod config;
pub mod dispatch;
pub mod error;
pub mod menu;
pub mod probe;

pub use config::Settings;
pub use dispatch::Mode;
pub use error::{LaunchError, Result};
