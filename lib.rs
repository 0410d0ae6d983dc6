//! Configuration layer for a progressive web app build & dev pipeline.
//!
//! Owns the schema of the recognized option groups (prerender routes, dev
//! HTTPS credentials, web-app manifest metadata, workbox cache policy,
//! dev/client toggles), loads layered TOML variants, merges them into one
//! canonical record and validates it before the hand-off to build tooling.

mod config;
mod load;
mod manifest;
mod merge;
mod result;
#[cfg(feature = "traces")]
mod traces;
mod validate;
mod workbox;

pub use config::*;
pub use load::*;
pub use manifest::*;
pub use merge::merge_values;
pub use result::*;
#[cfg(feature = "traces")]
pub use traces::*;
pub use validate::*;
pub use workbox::*;

pub use anyhow::{anyhow, bail};
pub use serde_json::json;
pub use tracing::{debug, error, info, trace, warn};
