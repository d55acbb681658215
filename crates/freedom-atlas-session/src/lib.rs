// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]
//! The cross-view country selection: a bounded ordered set, its stored text
//! form and the stateful wrapper that persists and broadcasts changes.

mod codec;
mod error;
mod selection;
mod state;
mod store;

pub use codec::{deserialize, serialize};
pub use error::{SessionError, SessionErrorCode};
pub use selection::{Selection, ToggleOutcome};
pub use state::{SelectionState, Subscriber};
pub use store::{validate_session_id, FileSessionStore, MemorySessionStore};

pub const CRATE_NAME: &str = "freedom-atlas-session";
