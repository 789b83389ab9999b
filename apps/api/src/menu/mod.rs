// Dice menu composition.
// Implements: menu data loading, dice input parsing, menu resolution, message rendering.
// The engine is pure; handlers are the only place that touches AppState.

pub mod dice;
pub mod engine;
pub mod error;
pub mod handlers;
pub mod loader;
pub mod messages;
pub mod store;

// Re-export the public API consumed by main, state and routes.
pub use error::{ErrorKind, MenuError};
pub use loader::{load_menu_store, ValidationPolicy};
pub use messages::MessageTable;
pub use store::MenuStore;
