// SPDX-License-Identifier: Apache-2.0

use crate::Year;

/// Year every single-year view starts on.
pub const DEFAULT_YEAR: Year = 2016;

/// Region the bar chart shows while nothing is selected.
pub const DEFAULT_REGION: &str = "Western Europe";

/// Country the line chart shows while nothing is selected.
pub const FALLBACK_LINE_ISO: &str = "AUT";

pub const MAX_SELECTIONS: usize = 4;

pub const SESSION_STORAGE_KEY: &str = "countries";

pub const SELECTION_DELIMITER: char = ',';
