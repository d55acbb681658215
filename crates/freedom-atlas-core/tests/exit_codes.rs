// SPDX-License-Identifier: Apache-2.0

use freedom_atlas_core::{ExitCode, MachineError};

#[test]
fn exit_codes_are_stable() {
    assert_eq!(ExitCode::Success as u8, 0);
    assert_eq!(ExitCode::Usage as u8, 2);
    assert_eq!(ExitCode::Validation as u8, 3);
    assert_eq!(ExitCode::DependencyFailure as u8, 4);
    assert_eq!(ExitCode::Internal as u8, 10);
    assert_eq!(ExitCode::DependencyFailure.as_str(), "dependency_failure");
}

#[test]
fn machine_error_serializes_details_in_key_order() {
    let err = MachineError::new("validation_error", "bad iso")
        .with_detail("value", "austria")
        .with_detail("arg", "toggle");
    let text = serde_json::to_string(&err).expect("encode");
    assert_eq!(
        text,
        r#"{"code":"validation_error","message":"bad iso","details":{"arg":"toggle","value":"austria"}}"#
    );
    assert_eq!(err.to_string(), "validation_error: bad iso");
}
