use crate::config::DatabaseConfig;

#[test]
fn memory_path_yields_in_memory_url() {
    let database = DatabaseConfig {
        path: ":memory:".to_string(),
    };

    assert_eq!(database.url(), "sqlite::memory:");
    assert!(database.is_memory());
}

#[test]
fn file_path_yields_file_url() {
    let database = DatabaseConfig {
        path: "backoffice.db".to_string(),
    };

    assert_eq!(database.url(), "sqlite:backoffice.db");
    assert!(!database.is_memory());
}
