// SPDX-License-Identifier: Apache-2.0

use std::fs;
use std::path::Path;

use freedom_atlas_core::sha256_hex;

use crate::{IngestError, IngestErrorCode};

/// Reads the whole input once, returning the bytes and their fingerprint.
pub fn read_and_hash(path: &Path) -> Result<(Vec<u8>, String), IngestError> {
    let bytes = fs::read(path).map_err(|e| {
        IngestError::new(
            IngestErrorCode::Io,
            format!("failed to read {}: {e}", path.display()),
        )
    })?;
    let digest = sha256_hex(&bytes);
    Ok((bytes, digest))
}

pub fn hash_file(path: &Path) -> Result<String, IngestError> {
    read_and_hash(path).map(|(_, digest)| digest)
}
