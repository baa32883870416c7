//! Tests for the error taxonomy.

use sign_core::errors::error_code::{self, SignErrorCode};
use sign_core::errors::*;

#[test]
fn every_variant_has_its_code() {
    let cases: Vec<(StorageError, &str)> = vec![
        (
            StorageError::InvalidName {
                name: String::new(),
                reason: "empty".into(),
            },
            error_code::INVALID_NAME,
        ),
        (
            StorageError::InvalidFeature {
                feature: "a;b".into(),
                reason: "delimiter".into(),
            },
            error_code::INVALID_FEATURE,
        ),
        (StorageError::NotFound { name: "cat".into() }, error_code::NOT_FOUND),
        (
            StorageError::FeatureNotFound {
                sign: "cat".into(),
                feature: "wings".into(),
            },
            error_code::NOT_FOUND,
        ),
        (
            StorageError::Io {
                path: "/tmp".into(),
                message: "permission denied".into(),
            },
            error_code::STORAGE_ERROR,
        ),
    ];
    for (err, code) in cases {
        assert_eq!(err.error_code(), code, "{err}");
    }

    let none = SimilarityError::NoFeatures;
    assert_eq!(none.error_code(), error_code::NO_FEATURES);

    let config = ConfigError::FileNotFound { path: "x".into() };
    assert_eq!(config.error_code(), error_code::CONFIG_ERROR);
}

#[test]
fn from_conversions_keep_inner_code() {
    let storage = StorageError::NotFound { name: "dog".into() };
    let similarity: SimilarityError = storage.into();
    assert!(matches!(similarity, SimilarityError::Storage(StorageError::NotFound { .. })));
    assert_eq!(similarity.error_code(), error_code::NOT_FOUND);

    let top: SignError = similarity.into();
    assert_eq!(top.error_code(), error_code::NOT_FOUND);

    let top: SignError = ConfigError::ValidationFailed {
        field: "storage.dir".into(),
        message: "must not be empty".into(),
    }
    .into();
    assert!(matches!(top, SignError::Config(_)));
}

#[test]
fn coded_string_prefixes_code() {
    let err = StorageError::NotFound { name: "cat".into() };
    assert_eq!(err.coded_string(), "[NOT_FOUND] Sign not found: cat");
    assert!(err.is_not_found());
    assert!(!StorageError::Io {
        path: "p".into(),
        message: "m".into()
    }
    .is_not_found());
}

#[test]
fn io_helper_records_path() {
    let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let err = StorageError::io(std::path::Path::new("sc_files/cat.txt"), &io);
    match err {
        StorageError::Io { path, message } => {
            assert_eq!(path, "sc_files/cat.txt");
            assert!(message.contains("denied"));
        }
        other => panic!("expected Io, got {other:?}"),
    }
}
