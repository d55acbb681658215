// SPDX-License-Identifier: Apache-2.0

use freedom_atlas_core::SessionStore;
use freedom_atlas_model::{
    IsoCode, Metric, Region, Year, DEFAULT_REGION, DEFAULT_YEAR, FALLBACK_LINE_ISO,
};
use freedom_atlas_query::{
    all_records_for_year, bar_chart_feed, choropleth_feed, distinct_regions, line_chart_feed,
    record_for_country, records_for_regions, scatter_feed, time_series_for_countries, years,
};
use freedom_atlas_session::{serialize, ToggleOutcome};
use serde_json::{json, Value};

use crate::context::AtlasContext;
use crate::error::CliError;
use crate::helpers::{parse_iso, parse_isos, to_value};

pub(crate) fn years_payload<S: SessionStore>(ctx: &AtlasContext<S>) -> Value {
    json!({
        "command": "years",
        "years": years(ctx.index()),
        "default_year": DEFAULT_YEAR,
    })
}

pub(crate) fn regions_payload<S: SessionStore>(ctx: &AtlasContext<S>, year: Year) -> Value {
    let regions: Vec<Value> = distinct_regions(ctx.index(), year)
        .into_iter()
        .map(|region| {
            json!({
                "name": region,
                "short_name": region.short_name(),
                "known": region.is_known(),
            })
        })
        .collect();
    json!({"command": "regions", "year": year, "regions": regions})
}

pub(crate) fn records_payload<S: SessionStore>(
    ctx: &AtlasContext<S>,
    year: Year,
    regions: &[String],
    countries: &[String],
) -> Result<Value, CliError> {
    let isos = parse_isos(countries)?;
    let regions: Vec<Region> = regions.iter().map(|r| Region::new(r.as_str())).collect();
    let mut records = if regions.is_empty() {
        all_records_for_year(ctx.index(), year).iter().collect()
    } else {
        records_for_regions(ctx.index(), year, &regions)
    };
    if !isos.is_empty() {
        records.retain(|record| isos.contains(&record.iso));
    }
    Ok(json!({
        "command": "records",
        "year": year,
        "count": records.len(),
        "records": to_value(&records)?,
    }))
}

pub(crate) fn series_payload<S: SessionStore>(
    ctx: &AtlasContext<S>,
    countries: &[String],
) -> Result<Value, CliError> {
    let mut isos = parse_isos(countries)?;
    if isos.is_empty() {
        isos = ctx.selection().as_slice().to_vec();
    }
    if isos.is_empty() {
        return Err(CliError::usage(
            "no countries given and the selection is empty; pass --country",
        ));
    }
    let series = time_series_for_countries(ctx.index(), &isos);
    Ok(json!({"command": "series", "series": to_value(&series)?}))
}

fn selection_payload<S: SessionStore>(
    ctx: &AtlasContext<S>,
    action: &str,
    outcome: Option<ToggleOutcome>,
) -> Value {
    let mut payload = json!({
        "command": "select",
        "action": action,
        "selection": ctx.selection(),
        "stored": serialize(ctx.selection()),
        "full": ctx.selection().is_full(),
    });
    if let Some(outcome) = outcome {
        payload["outcome"] = Value::from(outcome.as_str());
    }
    payload
}

pub(crate) fn select_show<S: SessionStore>(ctx: &AtlasContext<S>) -> Value {
    selection_payload(ctx, "show", None)
}

/// Only countries present in the default year can be selected, matching
/// what the views can resolve.
pub(crate) fn select_toggle<S: SessionStore>(
    ctx: &mut AtlasContext<S>,
    raw: &str,
) -> Result<Value, CliError> {
    let iso = parse_iso(raw)?;
    if !ctx.selection().contains(&iso)
        && record_for_country(ctx.index(), DEFAULT_YEAR, &iso).is_none()
    {
        return Err(CliError::validation(&format!(
            "country `{iso}` has no record for {DEFAULT_YEAR}"
        )));
    }
    let outcome = ctx.selection_state_mut().toggle(iso)?;
    if outcome == ToggleOutcome::Full {
        tracing::warn!("selection already holds the maximum number of countries");
    }
    Ok(selection_payload(ctx, "toggle", Some(outcome)))
}

pub(crate) fn select_clear<S: SessionStore>(ctx: &mut AtlasContext<S>) -> Result<Value, CliError> {
    ctx.selection_state_mut().clear()?;
    Ok(selection_payload(ctx, "clear", None))
}

pub(crate) fn select_forget<S: SessionStore>(ctx: &mut AtlasContext<S>) -> Result<Value, CliError> {
    ctx.selection_state_mut().forget()?;
    Ok(selection_payload(ctx, "forget", None))
}

pub(crate) fn view_bar<S: SessionStore>(
    ctx: &AtlasContext<S>,
    year: Year,
    region: Option<&str>,
) -> Result<Value, CliError> {
    let region = Region::new(region.unwrap_or(DEFAULT_REGION));
    let feed = bar_chart_feed(ctx.index(), ctx.selection().as_slice(), year, &region);
    Ok(json!({"command": "view bar", "feed": to_value(&feed)?}))
}

pub(crate) fn view_line<S: SessionStore>(
    ctx: &AtlasContext<S>,
    metric: Metric,
) -> Result<Value, CliError> {
    let fallback = IsoCode::from_source(FALLBACK_LINE_ISO);
    let feed = line_chart_feed(ctx.index(), ctx.selection().as_slice(), metric, &fallback);
    Ok(json!({
        "command": "view line",
        "label": metric.speakable_name(),
        "feed": to_value(&feed)?,
    }))
}

pub(crate) fn view_scatter<S: SessionStore>(
    ctx: &AtlasContext<S>,
    year: Year,
    x: Metric,
    y: Metric,
) -> Result<Value, CliError> {
    let feed = scatter_feed(ctx.index(), year, x, y, ctx.selection().as_slice());
    Ok(json!({
        "command": "view scatter",
        "x_label": x.short_name(),
        "y_label": y.short_name(),
        "feed": to_value(&feed)?,
    }))
}

pub(crate) fn view_map<S: SessionStore>(
    ctx: &AtlasContext<S>,
    year: Year,
    metric: Metric,
) -> Result<Value, CliError> {
    let geography = ctx.geography().ok_or_else(|| {
        CliError::usage("no geography configured; pass --geo or set FREEDOM_ATLAS_GEO")
    })?;
    let feed = choropleth_feed(ctx.index(), geography, year, metric, ctx.selection().as_slice());
    Ok(json!({"command": "view map", "feed": to_value(&feed)?}))
}

pub(crate) fn ingest_report<S: SessionStore>(ctx: &AtlasContext<S>) -> Result<Value, CliError> {
    Ok(json!({
        "command": "ingest-report",
        "report": to_value(ctx.report())?,
        "events": to_value(&ctx.events())?,
    }))
}
