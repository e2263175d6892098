//! Back-office dashboard library
//!
//! Data-table engine, view controllers and formatting for the product and
//! order tables, plus the static asset server and desktop shell policy.
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![allow(elided_lifetimes_in_paths)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

// Core modules
pub mod config;
pub mod errors;
pub mod fixtures;
pub mod i18n;
pub mod models;
pub mod services;
pub mod table;

// Outer surfaces
pub mod server;
pub mod shell;

pub use config::AppConfig;
pub use errors::ServiceError;
pub use i18n::{Locale, Preferences};
pub use services::Backoffice;
