// SPDX-License-Identifier: Apache-2.0

#[test]
fn cli_sources_leave_network_access_to_the_ingest_adapter() {
    let src = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("src");
    for entry in std::fs::read_dir(&src).expect("read src") {
        let path = entry.expect("entry").path();
        let text = std::fs::read_to_string(&path).expect("read source");
        for forbidden in ["reqwest", "std::net", "TcpStream"] {
            assert!(
                !text.contains(forbidden),
                "{} must not reach the network directly: found {forbidden}",
                path.display()
            );
        }
    }
}

#[test]
fn cli_manifest_does_not_depend_on_http_client() {
    let root = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let cargo_toml = std::fs::read_to_string(root.join("Cargo.toml")).expect("read Cargo.toml");
    assert!(!cargo_toml.contains("reqwest"));
}
