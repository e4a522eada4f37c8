//! Core Doorman library (identity provider client, validation, config).

pub mod auth;
pub mod config;
pub mod logging;
pub mod validate;
