//! Loading datasets from disk.

use std::io::Write;

use oxide_sandbox::{Sandbox, Value};
use oxide_tutor::prelude::*;

#[test]
fn test_load_dataset_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"books": [{{"id": 1, "title": "Dune"}}, {{"id": 2, "title": "Emma"}}]}}"#
    )
    .unwrap();

    let dataset = load_dataset(file.path()).unwrap();
    assert_eq!(dataset.table_names(), vec!["books".to_string()]);

    let outcome = Sandbox::new(dataset).execute("SELECT title FROM books WHERE id = 2");
    let rows = outcome.results().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].get("title"), Some(&Value::Text("Emma".into())));
}

#[test]
fn test_load_dataset_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_dataset(&dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, TutorError::DatasetRead { .. }));
    assert!(err.to_string().contains("missing.json"));
}

#[test]
fn test_load_dataset_invalid_json() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "[1, 2, 3]").unwrap();

    let err = load_dataset(file.path()).unwrap_err();
    assert!(matches!(err, TutorError::Sandbox(_)));
    assert!(err.to_string().starts_with("Invalid dataset"));
}
