use std::sync::Arc;

use crate::config::Config;
use crate::errors::AppError;
use crate::menu::{ErrorKind, MenuStore, MessageTable};

/// Outcome of the one-shot menu load at startup. Never changes afterwards.
#[derive(Debug, Clone)]
pub enum MenuState {
    Ready(Arc<MenuStore>),
    /// Load failed; carries the load failure kind for health reporting.
    Unavailable(ErrorKind),
}

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub menu: MenuState,
    /// User-facing failure messages. Defaults unless MENU_MESSAGES_PATH overrides them.
    pub messages: Arc<MessageTable>,
    pub config: Config,
}

impl AppState {
    /// The loaded menu, or the fixed "menu unavailable" error when loading failed.
    pub fn menu_store(&self) -> Result<&MenuStore, AppError> {
        match &self.menu {
            MenuState::Ready(store) => Ok(store.as_ref()),
            MenuState::Unavailable(kind) => Err(AppError::unavailable(*kind, &self.messages)),
        }
    }
}
