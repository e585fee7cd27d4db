//! Command implementations for the geminide-setup CLI

pub mod cloud_setup;
pub mod completions;
pub mod install;
pub mod uninstall;
pub mod verify;
pub mod version;
