use std::{cell::RefCell, collections::HashMap, rc::Rc};
use web_sys::{Storage, Window};

use crate::api::SessionTokens;

pub const ACCESS_TOKEN_KEY: &str = "accessToken";
pub const REFRESH_TOKEN_KEY: &str = "refreshToken";

pub fn window() -> Result<Window, String> {
    web_sys::window().ok_or_else(|| "No window object".to_string())
}

pub fn local_storage() -> Result<Storage, String> {
    window()?
        .local_storage()
        .map_err(|_| "No localStorage".to_string())?
        .ok_or_else(|| "No localStorage".to_string())
}

/// Durable home of the session tokens.
pub trait TokenStore {
    fn save(&self, tokens: &SessionTokens) -> Result<(), String>;
    fn access_token(&self) -> Option<String>;
    fn clear(&self);

    fn has_session(&self) -> bool {
        self.access_token()
            .map(|t| !t.trim().is_empty())
            .unwrap_or(false)
    }
}

/// Browser `localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageTokenStore;

impl TokenStore for LocalStorageTokenStore {
    fn save(&self, tokens: &SessionTokens) -> Result<(), String> {
        let storage = local_storage()?;
        storage
            .set_item(ACCESS_TOKEN_KEY, &tokens.access_token)
            .map_err(|_| "Failed to store token")?;
        storage
            .set_item(REFRESH_TOKEN_KEY, &tokens.refresh_token)
            .map_err(|_| "Failed to store refresh token")?;
        Ok(())
    }

    fn access_token(&self) -> Option<String> {
        local_storage()
            .ok()
            .and_then(|s| s.get_item(ACCESS_TOKEN_KEY).ok().flatten())
    }

    fn clear(&self) {
        if let Ok(storage) = local_storage() {
            let _ = storage.remove_item(ACCESS_TOKEN_KEY);
            let _ = storage.remove_item(REFRESH_TOKEN_KEY);
        }
    }
}

/// In-memory store for hosts without a browser.
#[derive(Clone, Debug, Default)]
pub struct MemoryTokenStore {
    items: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryTokenStore {
    pub fn get(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }
}

impl TokenStore for MemoryTokenStore {
    fn save(&self, tokens: &SessionTokens) -> Result<(), String> {
        let mut items = self.items.borrow_mut();
        items.insert(ACCESS_TOKEN_KEY.into(), tokens.access_token.clone());
        items.insert(REFRESH_TOKEN_KEY.into(), tokens.refresh_token.clone());
        Ok(())
    }

    fn access_token(&self) -> Option<String> {
        self.get(ACCESS_TOKEN_KEY)
    }

    fn clear(&self) {
        let mut items = self.items.borrow_mut();
        items.remove(ACCESS_TOKEN_KEY);
        items.remove(REFRESH_TOKEN_KEY);
    }
}

/// The store used by the running app.
pub fn default_token_store() -> Rc<dyn TokenStore> {
    if cfg!(target_arch = "wasm32") {
        Rc::new(LocalStorageTokenStore)
    } else {
        Rc::new(MemoryTokenStore::default())
    }
}
