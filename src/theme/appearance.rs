use gpui::WindowAppearance;
use serde::{Deserialize, Serialize};

use super::ThemeVariantKind;

/// Which theme variant the showcase should use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Appearance {
    /// Follow the window's system appearance.
    #[default]
    System,
    Light,
    Dark,
}

impl Appearance {
    /// Resolves the variant kind for this mode given the current system appearance.
    pub fn resolve(self, system: WindowAppearance) -> ThemeVariantKind {
        match self {
            Appearance::Light => ThemeVariantKind::Light,
            Appearance::Dark => ThemeVariantKind::Dark,
            Appearance::System => match system {
                WindowAppearance::Dark | WindowAppearance::VibrantDark => ThemeVariantKind::Dark,
                WindowAppearance::Light | WindowAppearance::VibrantLight => {
                    ThemeVariantKind::Light
                }
            },
        }
    }
}
