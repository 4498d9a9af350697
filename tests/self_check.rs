//! A PRNG self-check failure aborts the batch before anything is written

use cmatgen::{run_with_report, GenError, GeneratorConfig};

#[test]
fn test_corrupted_literal_writes_nothing() {
    let tmp = tempfile::tempdir().unwrap();
    let out = tmp.path().join("fixtures");
    let config = GeneratorConfig {
        self_check_value: 901,
        ..GeneratorConfig::with_output_dir(&out)
    };

    let mut report = Vec::new();
    let result = run_with_report(&config, &mut report);

    assert!(matches!(
        result,
        Err(GenError::DeterminismViolation { expected: 901, actual: 902 })
    ));
    assert!(!out.exists());
    assert!(report.is_empty());
}

#[test]
fn test_other_seed_fails_canonical_literal() {
    let tmp = tempfile::tempdir().unwrap();
    let config = GeneratorConfig {
        seed: 4321,
        ..GeneratorConfig::with_output_dir(tmp.path().join("fixtures"))
    };
    let result = run_with_report(&config, Vec::new());
    assert!(matches!(result, Err(GenError::DeterminismViolation { expected: 902, actual: 520 })));
}
