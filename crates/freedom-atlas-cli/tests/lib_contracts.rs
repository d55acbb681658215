// SPDX-License-Identifier: Apache-2.0

use std::cell::RefCell;
use std::rc::Rc;

use freedom_atlas_cli::AtlasContext;
use freedom_atlas_ingest::{load_rows, IngestOptions, RawRow};
use freedom_atlas_model::{IsoCode, Region, DEFAULT_YEAR};
use freedom_atlas_query::{bar_chart_feed, BarChartMode};
use freedom_atlas_session::{MemorySessionStore, SelectionState};

#[test]
fn context_wires_selection_changes_to_views() {
    let loaded = load_rows(
        vec![
            RawRow::new("2016", "AUT", "Austria", "Western Europe", ["8.5", "9.1", "7.7"]),
            RawRow::new("2016", "JPN", "Japan", "East Asia", ["8.1", "8.8", "7.5"]),
        ],
        &IngestOptions::default(),
    )
    .expect("load");
    let state = SelectionState::restore(MemorySessionStore::new()).expect("restore");
    let mut ctx = AtlasContext::new(loaded, None, state);

    let modes = Rc::new(RefCell::new(Vec::new()));
    let seen = Rc::clone(&modes);
    ctx.selection_state_mut()
        .subscribe(move |selection| seen.borrow_mut().push(selection.len()));

    let western = Region::new("Western Europe");
    let feed = bar_chart_feed(ctx.index(), ctx.selection().as_slice(), DEFAULT_YEAR, &western);
    assert_eq!(feed.mode, BarChartMode::Regional);

    ctx.selection_state_mut()
        .toggle(IsoCode::parse("JPN").expect("iso"))
        .expect("toggle");
    let feed = bar_chart_feed(ctx.index(), ctx.selection().as_slice(), DEFAULT_YEAR, &western);
    assert_eq!(feed.mode, BarChartMode::Grouped);
    assert_eq!(feed.records[0].iso.as_str(), "JPN");
    assert_eq!(*modes.borrow(), vec![1]);
    assert!(ctx.geography().is_none());
}
