use std::{
    ops::{Deref, DerefMut},
    sync::LazyLock,
};

use gpui::{AbsoluteLength, App, DefiniteLength, Global, Pixels, Rgba, SharedString};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::deserializers::{de_abs_length, de_def_length, de_font_family, de_pixels, de_variants};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Theme {
    pub name: SharedString,
    pub layout: ThemeLayout,
    pub variants: ThemeVariants,
}

macro_rules! generate_builtin_themes {
    ( $( [$path:literal, $name:ident] ),+ ) => {
        $(
            pub const $name: LazyLockTheme = LazyLockTheme::new(|| {
                Theme::from_json(include_str!($path)).expect("built-in theme is valid")
            });
        )+
    };
}

pub struct LazyLockTheme(LazyLock<Theme>);

impl LazyLockTheme {
    #[inline(always)]
    const fn new(f: fn() -> Theme) -> Self {
        Self(LazyLock::new(f))
    }
}

impl Deref for LazyLockTheme {
    type Target = Theme;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for LazyLockTheme {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl AsRef<Theme> for LazyLockTheme {
    fn as_ref(&self) -> &Theme {
        &self.0
    }
}

impl AsRef<Theme> for Theme {
    fn as_ref(&self) -> &Theme {
        self
    }
}

impl Theme {
    generate_builtin_themes!(["../../themes/default.json", DEFAULT]);

    /// Parses a theme document.
    pub fn from_json<S: AsRef<str>>(json: S) -> Result<Theme, serde_json::Error> {
        serde_json::from_str(json.as_ref())
    }
}

impl Global for Theme {}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeLayout {
    pub text: ThemeText,
    pub corner_radii: ThemeCornerRadii,
    pub size: ThemeSize,
    pub padding: ThemePadding,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeText {
    #[serde(deserialize_with = "de_pixels")]
    pub base_size: Pixels,
    pub default_font: ThemeFont,
    pub mono_font: ThemeFont,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeFont {
    #[serde(deserialize_with = "de_font_family")]
    pub family: SmallVec<[SharedString; 1]>,
    #[serde(deserialize_with = "de_def_length")]
    pub line_height: DefiniteLength,
    pub sizes: ThemeTextSizes,
    pub weights: ThemeTextWeights,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeTextSizes {
    #[serde(deserialize_with = "de_abs_length")]
    pub heading_xl: AbsoluteLength,
    #[serde(deserialize_with = "de_abs_length")]
    pub heading_lg: AbsoluteLength,
    #[serde(deserialize_with = "de_abs_length")]
    pub heading_md: AbsoluteLength,
    #[serde(deserialize_with = "de_abs_length")]
    pub heading_sm: AbsoluteLength,
    #[serde(deserialize_with = "de_abs_length")]
    pub body: AbsoluteLength,
    #[serde(deserialize_with = "de_abs_length")]
    pub caption: AbsoluteLength,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeTextWeights {
    pub heading_xl: f32,
    pub heading_lg: f32,
    pub heading_md: f32,
    pub heading_sm: f32,
    pub body: f32,
    pub caption: f32,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeCornerRadii {
    #[serde(deserialize_with = "de_pixels")]
    pub xl: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub lg: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub md: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub sm: Pixels,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeSize {
    #[serde(deserialize_with = "de_pixels")]
    pub xl: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub lg: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub md: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub sm: Pixels,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemePadding {
    #[serde(deserialize_with = "de_pixels")]
    pub xl: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub lg: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub md: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub sm: Pixels,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(transparent)]
pub struct ThemeVariants {
    #[serde(deserialize_with = "de_variants")]
    pub variants: SmallVec<[ThemeVariant; 2]>,
}

impl ThemeVariants {
    /// The variant selected by [`ActiveVariantId`], or the first variant when
    /// none has been selected yet.
    pub fn active(&self, cx: &App) -> &ThemeVariant {
        let index = cx.try_global::<ActiveVariantId>().map_or(0, |id| id.0);
        self.variants.get(index).unwrap_or(&self.variants[0])
    }

    /// Index of the first variant of the given kind, falling back to the
    /// first variant.
    pub fn index_of(&self, kind: ThemeVariantKind) -> usize {
        self.variants
            .iter()
            .position(|variant| variant.kind == kind)
            .unwrap_or(0)
    }
}

pub struct ActiveVariantId(pub usize);

impl Global for ActiveVariantId {}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeVariant {
    pub kind: ThemeVariantKind,
    pub colors: ThemeColors,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum ThemeVariantKind {
    Dark,
    Light,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeColors {
    pub background: ThemeBackgroundColors,
    pub accent: ThemeAccentColors,
    pub text: ThemeTextColors,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeBackgroundColors {
    pub primary: Rgba,
    pub secondary: Rgba,
    pub tertiary: Rgba,
    pub quaternary: Rgba,
    pub quinary: Rgba,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeAccentColors {
    pub primary: Rgba,
    pub secondary: Rgba,
    pub constructive: Rgba,
    pub destructive: Rgba,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeTextColors {
    pub primary: Rgba,
    pub secondary: Rgba,
    /// Text drawn on filled accent surfaces.
    pub on_accent: Rgba,
}

impl ThemeTextColors {
    pub fn all(&self) -> (Rgba, Rgba) {
        (self.primary, self.secondary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_theme_has_light_and_dark_variants() {
        let theme: &Theme = Theme::DEFAULT.as_ref();

        assert!(!theme.name.is_empty());
        assert_eq!(
            theme.variants.variants[theme.variants.index_of(ThemeVariantKind::Light)].kind,
            ThemeVariantKind::Light
        );
        assert_eq!(
            theme.variants.variants[theme.variants.index_of(ThemeVariantKind::Dark)].kind,
            ThemeVariantKind::Dark
        );
    }

    #[test]
    fn index_of_falls_back_to_first_variant() {
        let mut theme = Theme::DEFAULT.clone();
        theme
            .variants
            .variants
            .retain(|variant| variant.kind == ThemeVariantKind::Dark);

        assert_eq!(theme.variants.index_of(ThemeVariantKind::Light), 0);
    }

    #[test]
    fn empty_variant_list_is_rejected() {
        let mut document: serde_json::Value =
            serde_json::from_str(include_str!("../../themes/default.json")).unwrap();
        document["variants"] = serde_json::json!([]);

        assert!(Theme::from_json(document.to_string()).is_err());
    }
}
