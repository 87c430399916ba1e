//! Comparative scoring of Canadian residential eviction law, by province and territory.
//!
//! [`scoring`] holds the immutable dataset, [`geography`] turns boundary files into
//! region codes and canvas coordinates, and [`dashboard`] derives everything a
//! session shows from a [`dashboard::SelectionState`].

pub mod config;
pub mod dashboard;
pub mod error;
pub mod geography;
pub mod scoring;
pub mod telemetry;

pub use error::AppError;
