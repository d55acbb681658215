// SPDX-License-Identifier: Apache-2.0

use freedom_atlas_core::{canonical, ResultExt};
use freedom_atlas_model::IsoCode;
use serde_json::Value;

use crate::error::CliError;

#[derive(Clone, Copy, Debug)]
pub(crate) struct OutputMode {
    pub json: bool,
}

/// `--json` prints canonical compact JSON; otherwise pretty JSON.
pub(crate) fn emit_ok(output_mode: OutputMode, payload: Value) -> Result<(), CliError> {
    if output_mode.json {
        let text = canonical::stable_json_string(&payload)
            .with_context("encode canonical output")
            .map_err(|e| CliError::internal(e.to_string()))?;
        println!("{text}");
    } else {
        let text = serde_json::to_string_pretty(&payload)
            .map_err(|e| CliError::internal(e.to_string()))?;
        println!("{text}");
    }
    Ok(())
}

pub(crate) fn to_value<T: serde::Serialize>(value: &T) -> Result<Value, CliError> {
    serde_json::to_value(value).map_err(|e| CliError::internal(e.to_string()))
}

pub(crate) fn parse_iso(raw: &str) -> Result<IsoCode, CliError> {
    IsoCode::parse(raw).map_err(|e| {
        let mut err = CliError::validation(&format!("invalid country code `{raw}`"));
        err.machine = err.machine.with_detail("reason", &e.to_string());
        err
    })
}

pub(crate) fn parse_isos(raw: &[String]) -> Result<Vec<IsoCode>, CliError> {
    raw.iter()
        .flat_map(|arg| arg.split(','))
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(parse_iso)
        .collect()
}
