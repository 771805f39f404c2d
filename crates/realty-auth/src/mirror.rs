//! The persisted copy of the current session.
//!
//! Three keys are always written and cleared together: `user` (the session
//! as JSON), `userId`, and `userType`.

use realty_core::entities::Session;

use crate::error::AuthError;
use crate::storage::KeyValueStorage;

pub const KEY_USER: &str = "user";
pub const KEY_USER_ID: &str = "userId";
pub const KEY_USER_TYPE: &str = "userType";

/// Write all three session keys in a single storage write.
///
/// # Errors
///
/// Returns `AuthError::Storage` if encoding or the write fails; no key is
/// changed in that case.
pub fn write(storage: &dyn KeyValueStorage, session: &Session) -> Result<(), AuthError> {
    let json = serde_json::to_string(session)
        .map_err(|e| AuthError::Storage(format!("encode session: {e}")))?;
    let id = session.id.to_string();
    storage.set_many(&[
        (KEY_USER, json.as_str()),
        (KEY_USER_ID, id.as_str()),
        (KEY_USER_TYPE, session.user_type.as_str()),
    ])
}

/// Remove all three session keys.
///
/// # Errors
///
/// Returns the first storage failure after attempting every key.
pub fn clear(storage: &dyn KeyValueStorage) -> Result<(), AuthError> {
    let results = [KEY_USER, KEY_USER_ID, KEY_USER_TYPE].map(|key| storage.remove(key));
    results.into_iter().collect()
}

/// Read the stored session.
///
/// A `user` value that does not decode is purged and reads as no session.
///
/// # Errors
///
/// Returns `AuthError::Storage` if the storage itself fails.
pub fn read(storage: &dyn KeyValueStorage) -> Result<Option<Session>, AuthError> {
    let Some(raw) = storage.get(KEY_USER)? else {
        return Ok(None);
    };
    match serde_json::from_str::<Session>(&raw) {
        Ok(session) => Ok(Some(session)),
        Err(e) => {
            tracing::warn!(%e, "stored session is corrupt; clearing it");
            clear(storage)?;
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use realty_core::enums::UserType;

    use super::*;
    use crate::storage::MemoryStorage;

    fn session() -> Session {
        serde_json::from_value(serde_json::json!({
            "id": 5,
            "username": "renter",
            "email": "renter@example.com",
            "userType": "Rent & Buy"
        }))
        .unwrap()
    }

    #[test]
    fn write_then_read() {
        let storage = MemoryStorage::new();
        write(&storage, &session()).unwrap();

        let snapshot = storage.snapshot();
        assert_eq!(snapshot[KEY_USER_ID], "5");
        assert_eq!(snapshot[KEY_USER_TYPE], UserType::RentAndBuy.as_str());
        assert_eq!(read(&storage).unwrap(), Some(session()));
    }

    /// Accepts single-key writes but fails every batch.
    struct NoBatches(MemoryStorage);

    impl KeyValueStorage for NoBatches {
        fn get(&self, key: &str) -> Result<Option<String>, AuthError> {
            self.0.get(key)
        }

        fn set(&self, key: &str, value: &str) -> Result<(), AuthError> {
            self.0.set(key, value)
        }

        fn set_many(&self, _: &[(&str, &str)]) -> Result<(), AuthError> {
            Err(AuthError::Storage("disk full".into()))
        }

        fn remove(&self, key: &str) -> Result<(), AuthError> {
            self.0.remove(key)
        }
    }

    #[test]
    fn failed_write_leaves_previous_session() {
        let storage = NoBatches(MemoryStorage::new());
        storage.set(KEY_USER_ID, "9").unwrap();

        assert!(write(&storage, &session()).is_err());
        let snapshot = storage.0.snapshot();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[KEY_USER_ID], "9");
    }

    #[test]
    fn clear_removes_every_key() {
        let storage = MemoryStorage::new();
        write(&storage, &session()).unwrap();
        storage.set("unrelated", "x").unwrap();
        clear(&storage).unwrap();
        assert_eq!(storage.snapshot().keys().collect::<Vec<_>>(), ["unrelated"]);
    }

    #[test]
    fn corrupt_user_is_purged() {
        let storage = MemoryStorage::new();
        storage.set(KEY_USER, "{\"id\":").unwrap();
        storage.set(KEY_USER_ID, "5").unwrap();
        assert_eq!(read(&storage).unwrap(), None);
        assert!(storage.snapshot().is_empty());
    }
}
