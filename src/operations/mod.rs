//! Business logic for the installer's workflows
//!
//! Commands in `commands/` are thin CLI wrappers; the sequencing and policy
//! live here:
//! - [`install`]: full bootstrap, strict dependency order, transactional
//! - [`verify`]: artifact checklist, never aborts early
//! - [`uninstall`]: interactive double-confirmed removal
//! - [`cloud`]: three-stage Google Cloud setup

pub mod cloud;
pub mod install;
pub mod uninstall;
pub mod verify;
