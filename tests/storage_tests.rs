use hr_portal::storage::{FileSessionStorage, MockSessionStorage, SessionStorage};

#[cfg(test)]
mod mock_tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_roundtrip() {
        let mock = MockSessionStorage::new();
        assert!(mock.load().await.is_none());

        mock.save("{\"user\":{}}").await.unwrap();
        assert_eq!(mock.load().await.as_deref(), Some("{\"user\":{}}"));

        mock.clear().await.unwrap();
        assert!(mock.load().await.is_none());
    }

    #[tokio::test]
    async fn test_mock_preseeded_record() {
        let mock = MockSessionStorage::with_record("raw-record");
        assert_eq!(mock.load().await.as_deref(), Some("raw-record"));
    }

    #[tokio::test]
    async fn test_mock_failure() {
        let mock = MockSessionStorage::new_failing();
        assert!(mock.save("anything").await.is_err());
        assert!(mock.clear().await.is_err());
    }
}

#[cfg(test)]
mod file_tests {
    use super::*;

    #[tokio::test]
    async fn test_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        let storage = FileSessionStorage::new(&path);

        assert!(storage.load().await.is_none());

        storage.save("{\"user\":{}}").await.unwrap();
        assert_eq!(storage.load().await.as_deref(), Some("{\"user\":{}}"));

        storage.clear().await.unwrap();
        assert!(storage.load().await.is_none());
    }

    #[tokio::test]
    async fn test_file_clear_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileSessionStorage::new(dir.path().join("absent.json"));

        // Clearing a record that was never written is a success.
        assert!(storage.clear().await.is_ok());
        assert!(storage.clear().await.is_ok());
    }

    #[tokio::test]
    async fn test_file_save_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileSessionStorage::new(dir.path().join("session.json"));

        storage.save("first").await.unwrap();
        storage.save("second").await.unwrap();

        assert_eq!(storage.load().await.as_deref(), Some("second"));
    }
}
