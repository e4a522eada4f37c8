//! Feature slices for the TUI (state/update/render per screen).

pub mod login;
pub mod menu;
pub mod register;
