//! Inspect and switch the site theme

use anyhow::Result;

use crate::theme::{palette_css, Theme};
use crate::Folio;

/// What `folio theme` should do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeAction {
    /// Print the active theme
    Current,
    /// Print every theme, marking the active one
    List,
    /// Switch to a named theme
    Set(String),
    /// Advance to the next theme
    Cycle,
    /// Print CSS for the active theme, or for every theme
    Css { all: bool },
}

/// Run a theme action and return what should be printed
pub fn execute(folio: &Folio, action: &ThemeAction) -> Result<String> {
    let mut resolver = folio.theme_resolver();

    let output = match action {
        ThemeAction::Current => describe(resolver.current()),
        ThemeAction::List => {
            let active = resolver.current_name();
            Theme::all()
                .iter()
                .map(|theme| {
                    let marker = if theme.name == active { "*" } else { " " };
                    format!("{} {}", marker, describe(theme))
                })
                .collect::<Vec<_>>()
                .join("\n")
        }
        ThemeAction::Set(name) => {
            let theme = resolver.set_theme_by_name(name)?;
            format!("Theme set to {}", describe(theme))
        }
        ThemeAction::Cycle => {
            let theme = resolver.cycle()?;
            format!("Theme set to {}", describe(theme))
        }
        ThemeAction::Css { all: true } => palette_css(),
        ThemeAction::Css { all: false } => resolver.scope().to_css(),
    };

    Ok(output)
}

/// Run the theme command
pub fn run(folio: &Folio, action: &ThemeAction) -> Result<()> {
    let output = execute(folio, action)?;
    println!("{}", output.trim_end());
    Ok(())
}

fn describe(theme: &Theme) -> String {
    format!(
        "{} {} ({}) - {}",
        theme.glyph, theme.display_name, theme.name, theme.description
    )
}
