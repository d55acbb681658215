// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;

use freedom_atlas_core::{FetchPort, GeoSource, SessionStore};
use freedom_atlas_ingest::{
    load_csv_path, load_geography, DuplicateRowPolicy, IngestEvent, IngestLog, IngestOptions,
    IngestReport, LoadedDataset,
};
use freedom_atlas_model::{DatasetIndex, Geography};
use freedom_atlas_session::{FileSessionStore, Selection, SelectionState};

use crate::error::CliError;

/// Everything the application root resolves before touching the data.
#[derive(Debug, Clone)]
pub struct AtlasConfig {
    pub data: PathBuf,
    pub duplicate_policy: DuplicateRowPolicy,
    pub session_dir: PathBuf,
    pub session_id: String,
    pub geography: Option<GeoSource>,
}

/// The loaded dataset, the optional map geography and the live selection.
/// Built once per process and handed to every command.
pub struct AtlasContext<S: SessionStore> {
    index: DatasetIndex,
    report: IngestReport,
    events: Vec<IngestEvent>,
    geography: Option<Geography>,
    selection: SelectionState<S>,
}

impl<S: SessionStore> AtlasContext<S> {
    pub fn new(
        loaded: LoadedDataset,
        geography: Option<Geography>,
        selection: SelectionState<S>,
    ) -> Self {
        Self {
            index: loaded.index,
            report: loaded.report,
            events: loaded.events,
            geography,
            selection,
        }
    }

    #[must_use]
    pub fn index(&self) -> &DatasetIndex {
        &self.index
    }

    #[must_use]
    pub fn report(&self) -> &IngestReport {
        &self.report
    }

    #[must_use]
    pub fn events(&self) -> &[IngestEvent] {
        &self.events
    }

    #[must_use]
    pub fn geography(&self) -> Option<&Geography> {
        self.geography.as_ref()
    }

    #[must_use]
    pub fn selection(&self) -> &Selection {
        self.selection.selection()
    }

    pub fn selection_state_mut(&mut self) -> &mut SelectionState<S> {
        &mut self.selection
    }
}

fn default_fetch() -> Box<dyn FetchPort> {
    #[cfg(feature = "remote-geo")]
    {
        Box::new(freedom_atlas_ingest::HttpFetch::new())
    }
    #[cfg(not(feature = "remote-geo"))]
    {
        Box::new(freedom_atlas_ingest::OfflineFetch)
    }
}

pub(crate) fn open_context(
    config: &AtlasConfig,
    with_geography: bool,
) -> Result<AtlasContext<FileSessionStore>, CliError> {
    let options = IngestOptions {
        duplicate_policy: config.duplicate_policy,
        ..IngestOptions::default()
    };
    let mut loaded = load_csv_path(&config.data, &options)?;
    if loaded.report.has_anomalies() {
        tracing::warn!(
            duplicates = loaded.report.duplicate_pairs.len(),
            skipped = loaded.report.skipped_rows.len(),
            unknown_regions = loaded.report.unknown_regions.len(),
            "dataset loaded with anomalies; see `ingest-report`"
        );
    }

    let geography = match (&config.geography, with_geography) {
        (Some(source), true) => {
            let mut log = IngestLog::default();
            let geography = load_geography(source, default_fetch().as_ref(), &mut log)?;
            loaded.events.extend(log.into_events());
            Some(geography)
        }
        _ => None,
    };

    let store = FileSessionStore::open(&config.session_dir, &config.session_id)?;
    let selection = SelectionState::restore(store)?;
    tracing::debug!(session = %config.session_id, "context ready");
    Ok(AtlasContext::new(loaded, geography, selection))
}
