// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]
//! Shared vocabulary for the freedom atlas workspace: exit codes, machine
//! readable errors, the storage and fetch ports, and path resolution.

pub mod domain;
pub mod errors;
pub mod ports;

pub use domain::canonical;
pub use domain::config::{
    resolve_data_path, resolve_geo_source, resolve_session_dir, resolve_session_id, GeoSource,
    DEFAULT_DATA_FILE, DEFAULT_SESSION_ID,
};
pub use domain::canonical::{sha256_hex, stable_json_bytes};
pub use errors::{Error, ErrorContext, ExitCode, MachineError, Result, ResultExt};
pub use ports::{FetchPort, SessionStore};

pub const CRATE_NAME: &str = "freedom-atlas-core";

pub const ENV_LOG_LEVEL: &str = "FREEDOM_ATLAS_LOG_LEVEL";
pub const ENV_LOG_JSON: &str = "FREEDOM_ATLAS_LOG_JSON";
pub const ENV_DATA: &str = "FREEDOM_ATLAS_DATA";
pub const ENV_GEO: &str = "FREEDOM_ATLAS_GEO";
pub const ENV_SESSION_DIR: &str = "FREEDOM_ATLAS_SESSION_DIR";
pub const ENV_SESSION: &str = "FREEDOM_ATLAS_SESSION";
