// SPDX-License-Identifier: Apache-2.0

use freedom_atlas_core::{ErrorContext, ResultExt};

#[test]
fn result_ext_attaches_static_context() {
    let r: Result<(), &str> = Err("bad");
    let err = r.with_context("restore selection").expect_err("must error");
    assert_eq!(err.context, "restore selection");
    assert_eq!(err.source, "bad");
}

#[test]
fn error_context_display_prefixes_step_name() {
    let err = ErrorContext::new("read csv", std::io::Error::other("disk gone"));
    assert_eq!(err.to_string(), "read csv: disk gone");
    assert!(std::error::Error::source(&err).is_some());
}
