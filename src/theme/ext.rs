use gpui::{App, WindowAppearance};

use crate::theme::{ActiveVariantId, Appearance, Theme, ThemeVariantKind};

/// Extension trait for accessing and modifying the global theme.
pub trait ThemeExt {
    /// Changes the theme.
    fn set_theme<T: AsRef<Theme>>(&mut self, theme: T);

    /// Gets an immutable reference to the theme.
    fn get_theme(&self) -> &Theme;

    /// Activates the variant matching `appearance`, returning its kind.
    fn apply_appearance(
        &mut self,
        appearance: Appearance,
        system: WindowAppearance,
    ) -> ThemeVariantKind;
}

impl ThemeExt for App {
    fn set_theme<T: AsRef<Theme>>(&mut self, theme: T) {
        self.set_global::<Theme>(theme.as_ref().clone())
    }

    fn get_theme(&self) -> &Theme {
        self.global()
    }

    fn apply_appearance(
        &mut self,
        appearance: Appearance,
        system: WindowAppearance,
    ) -> ThemeVariantKind {
        let kind = appearance.resolve(system);
        let index = self.get_theme().variants.index_of(kind);

        self.set_global(ActiveVariantId(index));

        self.get_theme().variants.variants[index].kind
    }
}
