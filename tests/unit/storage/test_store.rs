use aristay_client::constants::AUTH_TOKEN_KEY;
use aristay_client::storage::{CredentialProvider, FileStore, KeyValueStore, StoredCredential};
use std::path::PathBuf;
use tokio_test::block_on;

fn scoped_path(scope: &str) -> PathBuf {
    std::env::temp_dir()
        .join(format!("aristay-unit-{}-{scope}", std::process::id()))
        .join("preferences.json")
}

#[test]
fn test_file_store_scopes_are_isolated() {
    let first = FileStore::new(scoped_path("first"));
    let second = FileStore::new(scoped_path("second"));

    block_on(async {
        first.set(AUTH_TOKEN_KEY, "first-token").await.unwrap();
        assert_eq!(second.get(AUTH_TOKEN_KEY).await.unwrap(), None);
        assert_eq!(
            first.get(AUTH_TOKEN_KEY).await.unwrap().as_deref(),
            Some("first-token")
        );
    });

    let _ = std::fs::remove_dir_all(first.path().parent().unwrap());
}

#[test]
fn test_file_store_keeps_other_keys() {
    let store = FileStore::new(scoped_path("other-keys"));

    block_on(async {
        store.set("theme", "dark").await.unwrap();
        store.set(AUTH_TOKEN_KEY, "abc").await.unwrap();
        store.remove(AUTH_TOKEN_KEY).await.unwrap();
        assert_eq!(store.get("theme").await.unwrap().as_deref(), Some("dark"));
    });

    let _ = std::fs::remove_dir_all(store.path().parent().unwrap());
}

#[test]
fn test_stored_credential_login_logout_cycle() {
    let path = scoped_path("cycle");
    let credential = StoredCredential::new(FileStore::new(&path));

    block_on(async {
        assert_eq!(credential.token().await.unwrap(), None);
        credential.save_token("abc123").await.unwrap();
        assert_eq!(credential.token().await.unwrap().as_deref(), Some("abc123"));
        credential.clear_token().await.unwrap();
        assert_eq!(credential.token().await.unwrap(), None);
    });

    let _ = std::fs::remove_dir_all(path.parent().unwrap());
}
