// ============================================================================
// SESSION STORE - token, tipo de token, usuario y rol persistidos
// ============================================================================
// No hay control de caducidad: un 401 del backend es la única señal de que
// la sesión ya no vale.
// ============================================================================

use std::rc::Rc;

use crate::models::{LoginResponse, Role, User};
use crate::utils::storage::{load_from_storage, save_to_storage, KeyValueStore};
use crate::utils::{
    SESSION_KEYS, STORAGE_KEY_LOGGED_IN, STORAGE_KEY_ROLE, STORAGE_KEY_TOKEN,
    STORAGE_KEY_TOKEN_TYPE, STORAGE_KEY_USER,
};

#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub token: String,
    pub token_type: String,
    pub user: Option<User>,
    pub role: Option<Role>,
}

#[derive(Clone)]
pub struct SessionStore {
    storage: Rc<dyn KeyValueStore>,
}

impl PartialEq for SessionStore {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.storage, &other.storage)
    }
}

impl SessionStore {
    pub fn new(storage: Rc<dyn KeyValueStore>) -> Self {
        Self { storage }
    }

    pub fn save(&self, response: &LoginResponse) -> Result<(), String> {
        let storage = self.storage.as_ref();
        storage.set_item(STORAGE_KEY_TOKEN, &response.access_token)?;
        storage.set_item(STORAGE_KEY_TOKEN_TYPE, &response.token_type)?;
        save_to_storage(storage, STORAGE_KEY_USER, &response.user)?;
        storage.set_item(STORAGE_KEY_ROLE, response.user.role.as_str())?;
        storage.set_item(STORAGE_KEY_LOGGED_IN, "true")?;

        log::info!("💾 Sesión guardada ({})", response.user.role);
        Ok(())
    }

    pub fn clear(&self) {
        for key in SESSION_KEYS {
            self.storage.remove_item(key);
        }
        log::info!("👋 Sesión eliminada");
    }

    pub fn is_authenticated(&self) -> bool {
        let logged_in = self
            .storage
            .get_item(STORAGE_KEY_LOGGED_IN)
            .map(|v| v == "true")
            .unwrap_or(false);
        self.token().is_some() && logged_in
    }

    pub fn token(&self) -> Option<String> {
        self.storage
            .get_item(STORAGE_KEY_TOKEN)
            .filter(|token| !token.is_empty())
    }

    pub fn role(&self) -> Option<Role> {
        self.storage
            .get_item(STORAGE_KEY_ROLE)
            .and_then(|raw| Role::parse(&raw))
    }

    pub fn user(&self) -> Option<User> {
        load_from_storage(self.storage.as_ref(), STORAGE_KEY_USER)
    }

    pub fn snapshot(&self) -> Option<Session> {
        let token = self.token()?;
        Some(Session {
            token,
            token_type: self
                .storage
                .get_item(STORAGE_KEY_TOKEN_TYPE)
                .unwrap_or_else(|| "bearer".to_string()),
            user: self.user(),
            role: self.role(),
        })
    }
}
