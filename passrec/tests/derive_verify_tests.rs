//! End-to-end derivation and verification behavior

use passrec::{
    derive, verify, DerivationRecord, Deriver, HashAlgorithm, KdfError, DEFAULT_ITERATIONS,
    DEFAULT_OUTPUT_SIZE, DEFAULT_SALT_SIZE,
};

#[test]
fn default_roundtrip_verifies() {
    let record = derive(b"test").expect("derivation with defaults");
    verify(&record, b"test").expect("matching secret verifies");
}

#[test]
fn wrong_candidate_is_a_mismatch() {
    let record = derive(b"best-pass").expect("derivation");
    let err = verify(&record, b"test-pass").expect_err("wrong secret must fail");
    assert!(matches!(err, KdfError::Mismatch));
    verify(&record, b"best-pass").expect("right secret still verifies");
}

#[test]
fn empty_secret_is_rejected() {
    let err = derive(b"").expect_err("empty secret must fail");
    assert!(matches!(err, KdfError::EmptyInput));
}

#[test]
fn empty_inputs_to_verify_are_rejected() {
    let record = small_deriver().derive(b"secret").expect("derivation");
    for (rec, pass) in [
        (&b""[..], &b""[..]),
        (&b"test-hash"[..], &b""[..]),
        (&b""[..], &b"test-pass"[..]),
    ] {
        let err = verify(rec, pass).expect_err("empty input must fail");
        assert!(matches!(err, KdfError::EmptyInput));
    }
    // a real record with an empty candidate is still an empty-input failure
    let err = verify(&record, b"").expect_err("empty candidate must fail");
    assert!(matches!(err, KdfError::EmptyInput));
}

#[test]
fn non_record_bytes_are_malformed() {
    let err = verify(b"test-hash", b"test-pass").expect_err("garbage must fail");
    assert!(matches!(err, KdfError::MalformedRecord(_)));
}

#[test]
fn salt_and_output_size_overrides_are_honored() {
    let bytes = small_deriver()
        .with_salt(b"salt".to_vec())
        .with_output_size(10)
        .derive(b"secret")
        .expect("derivation");
    let record = DerivationRecord::from_bytes(&bytes).expect("decode");
    assert_eq!(record.salt(), b"salt");
    assert_eq!(record.output_size(), 10);
    assert_eq!(record.derived_key().len(), 10);
    verify(&bytes, b"secret").expect("roundtrip");
}

#[test]
fn later_salt_options_override_earlier_ones() {
    // exact salt displaced by a later random-salt request
    let bytes = small_deriver()
        .with_salt(b"pepper".to_vec())
        .with_salt_size(16)
        .derive(b"secret")
        .expect("derivation");
    let record = DerivationRecord::from_bytes(&bytes).expect("decode");
    assert_eq!(record.salt().len(), 16);
    assert_ne!(record.salt(), b"pepper");

    // random-salt request displaced by a later exact salt
    let bytes = small_deriver()
        .with_salt_size(16)
        .with_salt(b"pepper".to_vec())
        .derive(b"secret")
        .expect("derivation");
    let record = DerivationRecord::from_bytes(&bytes).expect("decode");
    assert_eq!(record.salt(), b"pepper");
}

#[test]
fn empty_salt_falls_back_to_a_random_default() {
    let bytes = small_deriver()
        .with_salt(Vec::new())
        .derive(b"secret")
        .expect("derivation");
    let record = DerivationRecord::from_bytes(&bytes).expect("decode");
    assert_eq!(record.salt().len(), DEFAULT_SALT_SIZE);
}

#[test]
fn generated_salts_are_unique_per_record() {
    let deriver = small_deriver();
    let a = deriver.derive(b"secret").expect("first derivation");
    let b = deriver.derive(b"secret").expect("second derivation");
    let a = DerivationRecord::from_bytes(&a).expect("decode");
    let b = DerivationRecord::from_bytes(&b).expect("decode");
    assert_ne!(a.salt(), b.salt());
    assert_ne!(a.derived_key(), b.derived_key());
}

#[test]
fn fixed_parameters_derive_identical_records() {
    let deriver = small_deriver().with_salt(b"fixed-salt".to_vec());
    let a = deriver.derive(b"secret").expect("first derivation");
    let b = deriver.derive(b"secret").expect("second derivation");
    assert_eq!(a, b);
}

#[test]
fn every_algorithm_roundtrips() {
    for alg in HashAlgorithm::ALL {
        let bytes = small_deriver()
            .with_algorithm(alg)
            .derive(b"secret")
            .expect("derivation");
        let record = DerivationRecord::from_bytes(&bytes).expect("decode");
        assert_eq!(record.algorithm(), alg);
        verify(&bytes, b"secret").expect("roundtrip");
        assert!(matches!(
            verify(&bytes, b"not-the-secret"),
            Err(KdfError::Mismatch)
        ));
    }
}

#[test]
fn defaults_are_recorded() {
    let bytes = derive(b"secret").expect("derivation");
    let record = DerivationRecord::from_bytes(&bytes).expect("decode");
    assert_eq!(record.algorithm(), HashAlgorithm::Sha3_256);
    assert_eq!(record.iterations(), DEFAULT_ITERATIONS);
    assert_eq!(record.output_size(), DEFAULT_OUTPUT_SIZE);
    assert_eq!(record.salt().len(), DEFAULT_SALT_SIZE);
}

#[test]
fn zero_parameters_are_rejected() {
    let err = small_deriver()
        .with_iterations(0)
        .derive(b"secret")
        .expect_err("zero iterations must fail");
    assert!(matches!(err, KdfError::InvalidParameters(_)));

    let err = small_deriver()
        .with_output_size(0)
        .derive(b"secret")
        .expect_err("zero output size must fail");
    assert!(matches!(err, KdfError::InvalidParameters(_)));

    let err = small_deriver()
        .with_salt_size(0)
        .derive(b"secret")
        .expect_err("zero salt size must fail");
    assert!(matches!(err, KdfError::InvalidParameters(_)));
}

/// Cheap parameters for tests that exercise behavior, not cost.
fn small_deriver() -> Deriver {
    Deriver::new().with_iterations(8).with_output_size(32)
}
