// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use freedom_atlas_core::SessionStore;
use freedom_atlas_model::{IsoCode, SESSION_STORAGE_KEY};

use crate::codec::{self, serialize};
use crate::{Selection, SessionError, ToggleOutcome};

pub type Subscriber = Box<dyn FnMut(&Selection)>;

/// The shared selection plus its persistence and change notification. Every
/// transition is written to the store before subscribers run, and a failed
/// write leaves the selection untouched.
pub struct SelectionState<S: SessionStore> {
    selection: Selection,
    store: S,
    subscribers: Vec<Subscriber>,
}

impl<S: SessionStore> SelectionState<S> {
    /// Starts from whatever the store holds under the session key.
    pub fn restore(store: S) -> Result<Self, SessionError> {
        let selection = match store.get(SESSION_STORAGE_KEY)? {
            Some(raw) => {
                let selection = codec::deserialize(&raw);
                let tokens = codec::tokens(&raw).count();
                if tokens != selection.len() {
                    tracing::warn!(
                        stored = %raw,
                        kept = selection.len(),
                        "stored selection sanitized on restore"
                    );
                }
                selection
            }
            None => Selection::new(),
        };
        tracing::debug!(countries = selection.len(), "selection restored");
        Ok(Self {
            selection,
            store,
            subscribers: Vec::new(),
        })
    }

    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn into_store(self) -> S {
        self.store
    }

    /// Subscribers run synchronously, in registration order, after each
    /// persisted transition.
    pub fn subscribe<F>(&mut self, subscriber: F)
    where
        F: FnMut(&Selection) + 'static,
    {
        self.subscribers.push(Box::new(subscriber));
    }

    pub fn toggle(&mut self, iso: IsoCode) -> Result<ToggleOutcome, SessionError> {
        let mut next = self.selection.clone();
        let outcome = next.toggle(iso);
        if !outcome.changed() {
            tracing::debug!("selection full; toggle ignored");
            return Ok(outcome);
        }
        self.store.set(SESSION_STORAGE_KEY, &serialize(&next))?;
        self.commit(next);
        Ok(outcome)
    }

    pub fn clear(&mut self) -> Result<(), SessionError> {
        self.store.set(SESSION_STORAGE_KEY, "")?;
        self.commit(Selection::new());
        Ok(())
    }

    /// Ends the session: drops the stored key and empties the selection.
    pub fn forget(&mut self) -> Result<(), SessionError> {
        self.store.remove(SESSION_STORAGE_KEY)?;
        self.commit(Selection::new());
        Ok(())
    }

    fn commit(&mut self, next: Selection) {
        self.selection = next;
        tracing::info!(selection = %serialize(&self.selection), "selection changed");
        for subscriber in &mut self.subscribers {
            subscriber(&self.selection);
        }
    }
}

impl<S: SessionStore + fmt::Debug> fmt::Debug for SelectionState<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionState")
            .field("selection", &self.selection)
            .field("store", &self.store)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
