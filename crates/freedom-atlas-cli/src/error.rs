// SPDX-License-Identifier: Apache-2.0

use freedom_atlas_core::{ExitCode, MachineError};
use freedom_atlas_ingest::IngestError;
use freedom_atlas_session::{SessionError, SessionErrorCode};

#[derive(Debug)]
pub(crate) struct CliError {
    pub exit_code: ExitCode,
    pub machine: MachineError,
}

impl CliError {
    pub(crate) fn usage(message: &str) -> Self {
        Self {
            exit_code: ExitCode::Usage,
            machine: MachineError::new("usage_error", message),
        }
    }

    pub(crate) fn validation(message: &str) -> Self {
        Self {
            exit_code: ExitCode::Validation,
            machine: MachineError::new("validation_error", message),
        }
    }

    pub(crate) fn internal(message: String) -> Self {
        Self {
            exit_code: ExitCode::Internal,
            machine: MachineError::new("internal_error", &message),
        }
    }
}

impl From<IngestError> for CliError {
    fn from(err: IngestError) -> Self {
        let exit_code = if err.code.is_dependency_failure() {
            ExitCode::DependencyFailure
        } else {
            ExitCode::Validation
        };
        Self {
            exit_code,
            machine: MachineError::new(err.code.as_str(), &err.message),
        }
    }
}

impl From<SessionError> for CliError {
    fn from(err: SessionError) -> Self {
        let exit_code = match err.code {
            SessionErrorCode::InvalidSessionId => ExitCode::Validation,
            _ => ExitCode::DependencyFailure,
        };
        Self {
            exit_code,
            machine: MachineError::new(err.code.as_str(), &err.message),
        }
    }
}

pub(crate) fn emit_error(error: &CliError, machine_json: bool) {
    if machine_json {
        match serde_json::to_string(&error.machine) {
            Ok(payload) => eprintln!("{payload}"),
            Err(_) => eprintln!(
                "{{\"code\":\"internal_error\",\"message\":\"failed to encode structured error\",\"details\":{{}}}}"
            ),
        }
    } else {
        eprintln!("error: {}", error.machine.message);
        for (key, value) in &error.machine.details {
            eprintln!("  {key}: {value}");
        }
    }
}
