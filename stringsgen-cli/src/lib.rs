//! CLI library for testing purposes

pub mod config;
pub mod generate;
pub mod inspect;
pub mod path_glob;
pub mod validation;

pub use config::{Config, Overrides, Settings};
pub use generate::{SortedSupplier, render};
