//! Key/value persistence
//!
//! LocalStorage in the browser. Native builds (tests, the headless demo) use
//! a per-thread in-memory map so callers never need to care which one they
//! are talking to. Failures are logged and treated as "nothing stored".

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok())
        .flatten()
}

/// Read a stored string
#[cfg(target_arch = "wasm32")]
pub fn load_item(key: &str) -> Option<String> {
    let storage = local_storage()?;
    match storage.get_item(key) {
        Ok(value) => value,
        Err(e) => {
            log::warn!("Failed to read {}: {:?}", key, e);
            None
        }
    }
}

/// Store a string, returning whether it was written
#[cfg(target_arch = "wasm32")]
pub fn save_item(key: &str, value: &str) -> bool {
    let Some(storage) = local_storage() else {
        log::warn!("LocalStorage unavailable, {} not saved", key);
        return false;
    };
    match storage.set_item(key, value) {
        Ok(()) => true,
        Err(e) => {
            log::warn!("Failed to write {}: {:?}", key, e);
            false
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub fn remove_item(key: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(key);
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod memory {
    use std::cell::RefCell;
    use std::collections::HashMap;

    thread_local! {
        pub static STORE: RefCell<HashMap<String, String>> = RefCell::new(HashMap::new());
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn load_item(key: &str) -> Option<String> {
    memory::STORE.with(|store| store.borrow().get(key).cloned())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn save_item(key: &str, value: &str) -> bool {
    memory::STORE.with(|store| {
        store.borrow_mut().insert(key.to_string(), value.to_string());
    });
    true
}

#[cfg(not(target_arch = "wasm32"))]
pub fn remove_item(key: &str) {
    memory::STORE.with(|store| {
        store.borrow_mut().remove(key);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_load_remove() {
        assert_eq!(load_item("persistence_test"), None);
        assert!(save_item("persistence_test", "42"));
        assert_eq!(load_item("persistence_test").as_deref(), Some("42"));
        remove_item("persistence_test");
        assert_eq!(load_item("persistence_test"), None);
    }
}
