//! Theme resolver - owns the active theme selection

use super::{PreferenceStore, StyleScope, Theme, ThemeError, ThemeName, THEME_KEY};

/// Attribute on the style scope naming the active theme
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Keeps exactly one active theme, persists it, and mirrors its tokens into
/// a style scope.
#[derive(Debug)]
pub struct ThemeResolver<S, C> {
    store: S,
    scope: C,
    current: ThemeName,
}

impl<S: PreferenceStore, C: StyleScope> ThemeResolver<S, C> {
    /// Restore the saved theme, falling back to the default when nothing
    /// usable is saved, and apply it to `scope`.
    pub fn new(store: S, scope: C) -> Self {
        let current = match store.get(THEME_KEY) {
            Ok(Some(saved)) => saved.parse::<ThemeName>().unwrap_or_else(|e| {
                tracing::warn!("Ignoring saved theme: {}", e);
                ThemeName::default()
            }),
            Ok(None) => ThemeName::default(),
            Err(e) => {
                tracing::warn!("Failed to read saved theme: {}", e);
                ThemeName::default()
            }
        };

        let mut resolver = Self {
            store,
            scope,
            current,
        };
        resolver.apply();
        resolver
    }

    /// The active theme
    pub fn current(&self) -> &'static Theme {
        self.current.theme()
    }

    pub fn current_name(&self) -> ThemeName {
        self.current
    }

    /// Make `name` the active theme and save it.
    ///
    /// The selection and the style scope change even if saving fails; the
    /// save error is still returned.
    pub fn set_theme(&mut self, name: ThemeName) -> Result<&'static Theme, ThemeError> {
        self.current = name;
        self.apply();
        self.store.set(THEME_KEY, name.as_str())?;
        tracing::info!("Theme set to {}", name);
        Ok(name.theme())
    }

    /// Like [`ThemeResolver::set_theme`], but rejects unknown names without
    /// changing anything.
    pub fn set_theme_by_name(&mut self, name: &str) -> Result<&'static Theme, ThemeError> {
        let name: ThemeName = name.parse()?;
        self.set_theme(name)
    }

    /// Advance to the next theme in the cycle
    pub fn cycle(&mut self) -> Result<&'static Theme, ThemeError> {
        self.set_theme(self.current.next())
    }

    pub fn scope(&self) -> &C {
        &self.scope
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_parts(self) -> (S, C) {
        (self.store, self.scope)
    }

    fn apply(&mut self) {
        let theme = self.current.theme();
        self.scope.clear();
        for (token, value) in theme.tokens.entries() {
            self.scope.set_property(&Theme::css_var(token), value);
        }
        self.scope.set_attribute(THEME_ATTRIBUTE, theme.name.as_str());
        tracing::debug!("Applied theme {}", theme.name);
    }
}
