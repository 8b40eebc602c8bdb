//! CLI-level behavior tests.
//!
//! The CLI is a binary crate, so these tests exercise the same paths the
//! commands take through the underlying library crates: configuration
//! loading with environment overrides, target construction for every
//! preset, and suite generation into a fresh directory.

use quench_gym::{GymConfig, circuits};
use quench_target::Target;

#[test]
fn test_every_preset_builds() {
    for name in Target::preset_names() {
        let target = Target::preset(name, 27).expect("preset builds");
        assert_eq!(target.num_qubits(), 27);
        assert!(
            !target.two_qubit_gate().is_empty(),
            "preset {name} has no designated two-qubit gate"
        );
    }
}

#[test]
fn test_config_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("quench.yaml");
    std::fs::write(
        &path,
        "target:\n  preset: simulator\n  num_qubits: 16\nsuite:\n  iterations: 2\n",
    )
    .unwrap();

    let config = GymConfig::load(&path).unwrap();
    assert_eq!(config.target.preset, "simulator");
    assert_eq!(config.suite.iterations, 2);

    let target = config.target.build().unwrap();
    assert_eq!(target.num_qubits(), 16);
}

#[test]
fn test_generate_writes_all_families() {
    let dir = tempfile::tempdir().unwrap();
    let written = circuits::write_suite(dir.path(), 16).unwrap();

    let families: Vec<_> = written
        .iter()
        .map(|p| {
            p.parent()
                .and_then(|d| d.file_name())
                .and_then(|n| n.to_str())
                .unwrap()
                .to_string()
        })
        .collect();

    assert!(families.contains(&"qft".to_string()));
    assert!(families.contains(&"qv".to_string()));
    assert!(families.contains(&"square-heisenberg".to_string()));
    assert!(families.contains(&"qaoa".to_string()));
}

#[test]
fn test_missing_config_file_errors() {
    let err = GymConfig::load("/nonexistent/quench.yaml").unwrap_err();
    assert!(matches!(err, quench_gym::GymError::Io(_)));
}
