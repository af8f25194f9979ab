// Library exports for testing
pub mod config;
pub mod error;
pub mod models;
pub mod recorder;
pub mod registry;
pub mod service;

pub use crate::config::*;
pub use crate::error::*;
pub use crate::models::*;
pub use crate::recorder::*;
pub use crate::registry::*;
pub use crate::service::*;
