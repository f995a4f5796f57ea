pub mod config;
pub mod desktop;
pub mod errors;
pub mod models;
pub mod resolver;
pub mod session;
pub mod store;
pub mod utils;

pub use crate::config::*;
pub use crate::errors::*;
pub use crate::utils::*;
