// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;

pub const DEFAULT_DATA_FILE: &str = "human-freedom-index.csv";
pub const DEFAULT_SESSION_ID: &str = "default";

/// Where the map's boundary document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeoSource {
    Path(PathBuf),
    Url(String),
}

impl GeoSource {
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            Self::Url(trimmed.to_string())
        } else {
            Self::Path(PathBuf::from(trimmed))
        }
    }
}

fn env_lookup(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[must_use]
pub fn resolve_data_path(explicit: Option<PathBuf>) -> PathBuf {
    resolve_data_path_with(explicit, env_lookup)
}

pub fn resolve_data_path_with(
    explicit: Option<PathBuf>,
    lookup: impl Fn(&str) -> Option<String>,
) -> PathBuf {
    if let Some(path) = explicit {
        return path;
    }
    non_empty(lookup(crate::ENV_DATA))
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE))
}

#[must_use]
pub fn resolve_geo_source(explicit: Option<&str>) -> Option<GeoSource> {
    resolve_geo_source_with(explicit, env_lookup)
}

pub fn resolve_geo_source_with(
    explicit: Option<&str>,
    lookup: impl Fn(&str) -> Option<String>,
) -> Option<GeoSource> {
    non_empty(explicit.map(ToString::to_string))
        .or_else(|| non_empty(lookup(crate::ENV_GEO)))
        .map(|raw| GeoSource::parse(&raw))
}

#[must_use]
pub fn resolve_session_id(explicit: Option<&str>) -> String {
    non_empty(explicit.map(ToString::to_string))
        .or_else(|| non_empty(env_lookup(crate::ENV_SESSION)))
        .unwrap_or_else(|| DEFAULT_SESSION_ID.to_string())
}

#[must_use]
pub fn resolve_session_dir() -> PathBuf {
    resolve_session_dir_with(env_lookup)
}

pub fn resolve_session_dir_with(lookup: impl Fn(&str) -> Option<String>) -> PathBuf {
    if let Some(explicit) = non_empty(lookup(crate::ENV_SESSION_DIR)) {
        return PathBuf::from(explicit);
    }
    if let Some(state_home) = non_empty(lookup("XDG_STATE_HOME")) {
        return PathBuf::from(state_home)
            .join("freedom-atlas")
            .join("sessions");
    }
    if let Some(home) = non_empty(lookup("HOME")) {
        return PathBuf::from(home)
            .join(".local")
            .join("state")
            .join("freedom-atlas")
            .join("sessions");
    }
    PathBuf::from(".freedom-atlas").join("sessions")
}
