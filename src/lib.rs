//! TechWatch IT Equipment Inventory Manager
//!
//! A single-user desktop tool for tracking IT equipment (notebooks,
//! desktops, monitors, miscellaneous items). Records live in an in-memory
//! table keyed by asset number and persist to spreadsheet or CSV files.

pub mod error;
pub mod models;
pub mod repository;
pub mod services;
pub mod settings;
pub mod shell;

pub use error::{AppError, AppResult};
pub use settings::Settings;
