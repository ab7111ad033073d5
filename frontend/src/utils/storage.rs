//! Durable client-side storage facade.
//!
//! On wasm this is browser `localStorage`. Native builds substitute a
//! process-local map so session and transcript persistence can run under
//! host tests without a window object.

#[cfg(target_arch = "wasm32")]
mod backend {
    use web_sys::Storage;

    fn local_storage() -> Result<Storage, String> {
        web_sys::window()
            .ok_or_else(|| "No window object".to_string())?
            .local_storage()
            .map_err(|_| "No localStorage".to_string())?
            .ok_or_else(|| "No localStorage".to_string())
    }

    pub fn get_item(key: &str) -> Result<Option<String>, String> {
        local_storage()?
            .get_item(key)
            .map_err(|_| format!("Failed to read '{}'", key))
    }

    pub fn set_item(key: &str, value: &str) -> Result<(), String> {
        local_storage()?
            .set_item(key, value)
            .map_err(|_| format!("Failed to write '{}'", key))
    }

    pub fn remove_item(key: &str) -> Result<(), String> {
        local_storage()?
            .remove_item(key)
            .map_err(|_| format!("Failed to remove '{}'", key))
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod backend {
    use std::cell::RefCell;
    use std::collections::HashMap;

    thread_local! {
        static STORE: RefCell<HashMap<String, String>> = RefCell::new(HashMap::new());
    }

    pub fn get_item(key: &str) -> Result<Option<String>, String> {
        Ok(STORE.with(|store| store.borrow().get(key).cloned()))
    }

    pub fn set_item(key: &str, value: &str) -> Result<(), String> {
        STORE.with(|store| {
            store.borrow_mut().insert(key.to_string(), value.to_string());
        });
        Ok(())
    }

    pub fn remove_item(key: &str) -> Result<(), String> {
        STORE.with(|store| {
            store.borrow_mut().remove(key);
        });
        Ok(())
    }
}

pub use backend::{get_item, remove_item, set_item};

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn set_get_remove_round_trip() {
        set_item("storage-test", "value").unwrap();
        assert_eq!(get_item("storage-test").unwrap().as_deref(), Some("value"));

        remove_item("storage-test").unwrap();
        assert_eq!(get_item("storage-test").unwrap(), None);
    }

    #[test]
    fn missing_key_reads_as_none() {
        assert_eq!(get_item("storage-test-missing").unwrap(), None);
    }

    #[test]
    fn set_overwrites_existing_value() {
        set_item("storage-test-overwrite", "first").unwrap();
        set_item("storage-test-overwrite", "second").unwrap();
        assert_eq!(
            get_item("storage-test-overwrite").unwrap().as_deref(),
            Some("second")
        );
        remove_item("storage-test-overwrite").unwrap();
    }
}
