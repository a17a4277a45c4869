pub mod app;
pub mod catalog;
pub mod config;
pub mod error;
pub mod ui;
pub mod utils;

pub use error::{AppError, Result};
