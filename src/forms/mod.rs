//! Operator input collected by the shell, validated into typed payloads.

pub mod menu;
pub mod parking;
