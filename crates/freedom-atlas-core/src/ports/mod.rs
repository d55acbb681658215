// SPDX-License-Identifier: Apache-2.0

use crate::errors::Result;

/// Session-scoped string storage keyed by a fixed name, the role browser
/// session storage plays for the page.
pub trait SessionStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
}

impl<S: SessionStore + ?Sized> SessionStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

/// One-shot byte download used for the geography document.
pub trait FetchPort {
    fn get_bytes(&self, url: &str) -> Result<Vec<u8>>;
}
