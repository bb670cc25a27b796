use smart_planner_bot::database::{
    models::{ScheduleDocument, WeekdayNames},
    JsonFileStore, MemoryStore, ScheduleStore, StoreManager,
};
use smart_planner_bot::utils::errors::StoreError;
use std::fs;
use tempfile::{tempdir, TempDir};

const SAMPLE: &str = r#"{
    "schedule": {
        "понедельник": ["Русский язык", "Математика"],
        "вторник": [],
        "среда": ["Физика"],
        "четверг": [],
        "пятница": ["Литература"],
        "суббота": [],
        "воскресенье": []
    },
    "123456789": {
        "22.07.2025": ["09:00 — Зарядка", "14:30 — Математика с репетитором"]
    },
    "555": {
        "01.09.2025": ["08:00 — Линейка"]
    }
}"#;

fn setup_file_store(contents: Option<&str>) -> (JsonFileStore, TempDir) {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let path = temp_dir.path().join("data.json");
    if let Some(contents) = contents {
        fs::write(&path, contents).expect("Failed to write sample");
    }
    (JsonFileStore::new(path, WeekdayNames::default()), temp_dir)
}

#[test]
fn test_load_sample_document() {
    let (store, _temp_dir) = setup_file_store(Some(SAMPLE));
    let doc = store.load().expect("Failed to load sample");

    assert_eq!(doc.schedule.len(), 7);
    assert_eq!(doc.lessons_for("понедельник"), ["Русский язык", "Математика"]);
    assert_eq!(doc.users.len(), 2);
    assert_eq!(doc.event_count(), 3);
    assert_eq!(
        doc.events_for("123456789", "22.07.2025"),
        ["09:00 — Зарядка", "14:30 — Математика с репетитором"]
    );
}

#[test]
fn test_save_load_is_stable() {
    let (store, _temp_dir) = setup_file_store(Some(SAMPLE));

    let doc = store.load().expect("Failed to load sample");
    store.save(&doc).expect("Failed to save");
    let first = fs::read_to_string(store.path()).expect("Failed to read file");

    let reloaded = store.load().expect("Failed to reload");
    assert_eq!(reloaded, doc);

    store.save(&reloaded).expect("Failed to save again");
    let second = fs::read_to_string(store.path()).expect("Failed to read file");
    assert_eq!(first, second);
}

#[test]
fn test_missing_file_gives_default_document() {
    let (store, _temp_dir) = setup_file_store(None);
    let doc = store.load().expect("Failed to load default");

    assert_eq!(doc, ScheduleDocument::with_weekdays(&WeekdayNames::default()));
    for day in WeekdayNames::default().iter() {
        assert!(doc.schedule.contains_key(day));
    }
}

#[test]
fn test_default_document_uses_configured_weekdays() {
    let weekdays = WeekdayNames::parse("mon,tue,wed,thu,fri,sat,sun").expect("valid names");
    let store = MemoryStore::new(weekdays);

    let doc = store.load().expect("Failed to load default");
    let keys: Vec<&str> = doc.schedule.keys().map(String::as_str).collect();
    assert_eq!(keys.len(), 7);
    assert!(keys.contains(&"mon") && keys.contains(&"sun"));
}

#[test]
fn test_corrupted_file_is_reported() {
    for contents in ["", "not json", "[]", r#"{"123": ["not", "a", "calendar"]}"#] {
        let (store, _temp_dir) = setup_file_store(Some(contents));
        assert!(
            matches!(store.load(), Err(StoreError::Corruption { .. })),
            "Should reject contents: {:?}",
            contents
        );
    }
}

#[tokio::test]
async fn test_manager_update_persists_to_file() {
    let (store, _temp_dir) = setup_file_store(Some(SAMPLE));
    let path = store.path().to_path_buf();
    let manager = StoreManager::new(store);

    manager
        .update(|doc| doc.add_event("555", "01.09.2025", "07:40 — Завтрак".to_string()))
        .await
        .expect("Failed to update");

    let reopened = JsonFileStore::new(path, WeekdayNames::default());
    let doc = reopened.load().expect("Failed to load");
    assert_eq!(
        doc.events_for("555", "01.09.2025"),
        ["07:40 — Завтрак", "08:00 — Линейка"]
    );
    // Untouched parts survive the rewrite
    assert_eq!(doc.lessons_for("среда"), ["Физика"]);
    assert_eq!(doc.events_for("123456789", "22.07.2025").len(), 2);
}

#[tokio::test]
async fn test_manager_update_returns_closure_value() {
    let manager = StoreManager::in_memory(WeekdayNames::default());

    let count = manager
        .update(|doc| {
            doc.add_event("1", "02.02.2026", "10:00 — A".to_string());
            doc.add_event("1", "02.02.2026", "09:00 — B".to_string());
            doc.event_count()
        })
        .await
        .expect("Failed to update");

    assert_eq!(count, 2);
    assert_eq!(manager.location(), "memory");
}
