//! Theme module - built-in color themes and the resolver that applies them

mod error;
mod palette;
mod resolver;
mod scope;
mod store;

pub use error::ThemeError;
pub use palette::{palette_css, Theme, ThemeName, ThemeTokens};
pub use resolver::{ThemeResolver, THEME_ATTRIBUTE};
pub use scope::{StyleScope, StyleSheet};
pub use store::{FileStore, MemoryStore, PreferenceStore, THEME_KEY};
