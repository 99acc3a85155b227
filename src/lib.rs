//! Core library exports for the parking console.
//!
//! With the `data` feature this crate exposes only the registry core
//! (`domain` and `repository`). The default `cli` feature adds forms, services,
//! DTOs, configuration and the interactive shell used by the binary.

#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
pub mod error_conversions;
#[cfg(feature = "data")]
pub mod repository;

#[cfg(feature = "cli")]
pub mod dto;
#[cfg(feature = "cli")]
pub mod forms;
#[cfg(feature = "cli")]
pub mod models;
#[cfg(feature = "cli")]
pub mod services;
#[cfg(feature = "cli")]
pub mod shell;
