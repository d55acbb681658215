// SPDX-License-Identifier: Apache-2.0

use freedom_atlas_model::{IsoCode, MAX_SELECTIONS};
use serde::Serialize;

/// Result of [`Selection::toggle`]. `Full` means nothing changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ToggleOutcome {
    Added,
    Removed,
    Full,
}

impl ToggleOutcome {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Added => "added",
            Self::Removed => "removed",
            Self::Full => "full",
        }
    }

    #[must_use]
    pub const fn changed(self) -> bool {
        !matches!(self, Self::Full)
    }
}

/// Ordered, duplicate-free set of at most [`MAX_SELECTIONS`] countries.
/// Insertion order drives colour and display order in the views.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Selection {
    isos: Vec<IsoCode>,
}

impl Selection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a selection that honours the invariants whatever the input:
    /// repeats are collapsed and anything past capacity is dropped.
    #[must_use]
    pub fn from_isos<I>(isos: I) -> Self
    where
        I: IntoIterator<Item = IsoCode>,
    {
        let mut selection = Self::new();
        for iso in isos {
            if selection.is_full() {
                break;
            }
            if !selection.contains(&iso) {
                selection.isos.push(iso);
            }
        }
        selection
    }

    #[must_use]
    pub fn as_slice(&self) -> &[IsoCode] {
        &self.isos
    }

    pub fn iter(&self) -> std::slice::Iter<'_, IsoCode> {
        self.isos.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.isos.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.isos.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.isos.len() >= MAX_SELECTIONS
    }

    #[must_use]
    pub fn contains(&self, iso: &IsoCode) -> bool {
        self.isos.contains(iso)
    }

    /// Removes `iso` if present, otherwise appends it when there is room.
    pub fn toggle(&mut self, iso: IsoCode) -> ToggleOutcome {
        if let Some(pos) = self.isos.iter().position(|existing| *existing == iso) {
            self.isos.remove(pos);
            return ToggleOutcome::Removed;
        }
        if self.is_full() {
            return ToggleOutcome::Full;
        }
        self.isos.push(iso);
        ToggleOutcome::Added
    }

    pub fn clear(&mut self) {
        self.isos.clear();
    }
}

impl<'a> IntoIterator for &'a Selection {
    type Item = &'a IsoCode;
    type IntoIter = std::slice::Iter<'a, IsoCode>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
