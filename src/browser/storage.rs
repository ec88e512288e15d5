use site_core::session::{CredentialStore, SessionError};

/// `window.localStorage` as a session store.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

fn local_storage() -> Result<web_sys::Storage, SessionError> {
    web_sys::window()
        .ok_or_else(|| SessionError::Storage("no window".to_string()))?
        .local_storage()
        .map_err(|e| SessionError::Storage(format!("{e:?}")))?
        .ok_or_else(|| SessionError::Storage("localStorage disabled".to_string()))
}

impl CredentialStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, SessionError> {
        local_storage()?
            .get_item(key)
            .map_err(|e| SessionError::Storage(format!("get_item: {e:?}")))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SessionError> {
        local_storage()?
            .set_item(key, value)
            .map_err(|e| SessionError::Storage(format!("set_item: {e:?}")))
    }

    fn clear(&self, key: &str) -> Result<(), SessionError> {
        local_storage()?
            .remove_item(key)
            .map_err(|e| SessionError::Storage(format!("remove_item: {e:?}")))
    }
}
