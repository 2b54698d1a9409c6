pub mod config;
pub mod error;
pub mod input;
pub mod result;
pub mod selection;

pub use config::{AppConfig, Theme};
pub use error::StagiaireError;
pub use input::InputState;
pub use result::StagiaireResult;
pub use selection::SelectionState;
