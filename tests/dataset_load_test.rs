use casefile::record::{Classification, RecordError, RecordId, RecordStore};
use casefile::{apply_filters, FilterCriteria};
use std::io::Write;
use tempfile::NamedTempFile;

const DATASET: &str = r#"[
    {
        "id": 10,
        "person": "Ada Example",
        "role": "Associate",
        "documentType": "Memo",
        "date": "2020-02-29",
        "summary": "Leap day memo.",
        "classification": "PARTIALLY REDACTED",
        "connections": ["Someone Else"]
    },
    {
        "id": 11,
        "person": "Ben Example",
        "role": "Employee",
        "documentType": "Letter",
        "date": "2021-03-01",
        "summary": "Plain letter.",
        "classification": "UNSEALED"
    }
]"#;

fn write_temp(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_dataset_file() {
    let file = write_temp(DATASET);
    let store = RecordStore::load(file.path()).unwrap();
    assert_eq!(store.len(), 2);

    let ada = store.get(RecordId::new(10)).unwrap();
    assert_eq!(ada.classification, Classification::PartiallyRedacted);
    assert_eq!(ada.connections, vec!["Someone Else"]);
    assert!(store.get(RecordId::new(11)).unwrap().connections.is_empty());

    let criteria = FilterCriteria::new().with_classification(Classification::Unsealed);
    let result = apply_filters(store.records(), &criteria);
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].person, "Ben Example");
}

#[test]
fn test_load_rejects_duplicate_ids() {
    let json = DATASET.replace("\"id\": 11", "\"id\": 10");
    let file = write_temp(&json);
    match RecordStore::load(file.path()) {
        Err(RecordError::DuplicateId(id)) => assert_eq!(id, RecordId::new(10)),
        other => panic!("expected duplicate id error, got {:?}", other),
    }
}

#[test]
fn test_load_rejects_bad_date() {
    let json = DATASET.replace("2021-03-01", "2021-02-30");
    assert!(matches!(
        RecordStore::from_json_str(&json),
        Err(RecordError::InvalidDate { .. })
    ));
}

#[test]
fn test_load_rejects_unpadded_or_signed_dates() {
    for date in ["2021-3-1", "+2021-03-01", "2021-03-1"] {
        let json = DATASET.replace("2021-03-01", date);
        assert!(
            matches!(
                RecordStore::from_json_str(&json),
                Err(RecordError::InvalidDate { .. })
            ),
            "{} should be rejected",
            date
        );
    }
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.json");
    assert!(matches!(RecordStore::load(&missing), Err(RecordError::Io(_))));
}
