//! Preference persistence in localStorage.
//!
//! Values are stored as JSON so that enums and small structs round-trip
//! without a custom format.

use serde::{Serialize, de::DeserializeOwned};

use super::dom;
use crate::error::StorageError;

/// Read a stored value.
///
/// Returns `None` if the key doesn't exist or deserialization fails.
pub fn load<T: DeserializeOwned>(key: &str) -> Option<T> {
    let storage = dom::local_storage()?;
    let json = storage.get_item(key).ok()??;
    serde_json::from_str(&json).ok()
}

/// Store a value.
pub fn save<T: Serialize>(key: &str, value: &T) -> Result<(), StorageError> {
    let storage = dom::local_storage().ok_or(StorageError::Unavailable)?;
    let json = serde_json::to_string(value).map_err(|_| StorageError::SerializationFailed)?;
    storage
        .set_item(key, &json)
        .map_err(|_| StorageError::WriteFailed)
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use wasm_bindgen_test::*;

    use super::*;
    use crate::models::Theme;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_save_then_load() {
        save("nebula.test.theme", &Theme::Dark).unwrap();
        assert_eq!(load::<Theme>("nebula.test.theme"), Some(Theme::Dark));
    }

    #[wasm_bindgen_test]
    fn test_load_missing_or_malformed() {
        assert_eq!(load::<Theme>("nebula.test.missing"), None);

        let storage = dom::local_storage().unwrap();
        storage.set_item("nebula.test.bad", "not json").unwrap();
        assert_eq!(load::<Theme>("nebula.test.bad"), None);
    }
}
