// SPDX-License-Identifier: Apache-2.0

use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionErrorCode {
    /// The backing store could not be read or written.
    Storage,
    /// The stored document exists but cannot be decoded.
    Corrupt,
    InvalidSessionId,
}

impl SessionErrorCode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Storage => "session_storage",
            Self::Corrupt => "session_corrupt",
            Self::InvalidSessionId => "invalid_session_id",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionError {
    pub code: SessionErrorCode,
    pub message: String,
}

impl SessionError {
    #[must_use]
    pub fn new(code: SessionErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl Display for SessionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code.as_str(), self.message)
    }
}

impl std::error::Error for SessionError {}

impl From<freedom_atlas_core::Error> for SessionError {
    fn from(value: freedom_atlas_core::Error) -> Self {
        let code = match value.code() {
            "json_error" => SessionErrorCode::Corrupt,
            _ => SessionErrorCode::Storage,
        };
        Self::new(code, value.to_string())
    }
}
