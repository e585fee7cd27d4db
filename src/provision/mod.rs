//! Host provisioning steps
//!
//! - [`packages`]: system package installation per distribution family
//! - [`runtime`]: Python runtime verification (fatal when missing)
//! - [`gcloud`]: Google Cloud CLI provisioning (idempotent)

pub mod gcloud;
pub mod packages;
pub mod runtime;
