pub mod config;
pub mod error;
pub mod libretranslate;
pub mod routes;
pub mod state;
pub mod translate;

pub use crate::config::Config;
pub use crate::error::{RelayError, ValidationError};
pub use crate::state::AppState;
