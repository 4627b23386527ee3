#![allow(missing_docs)] // Derive macros generate undocumented methods.

use enum_assoc::Assoc;
use gpui::App;

use crate::theme::ThemeExt;

/// Text size variants that resolve to theme-defined values.
#[derive(Assoc, Clone, Copy, Debug, PartialEq, Eq)]
#[func(pub fn resolve(&self, cx: &App) -> gpui::AbsoluteLength)]
#[func(pub fn weight(&self, cx: &App) -> f32)]
pub enum ThemeTextSizeKind {
    /// Page title.
    #[assoc(resolve = cx.get_theme().layout.text.default_font.sizes.heading_xl)]
    #[assoc(weight = cx.get_theme().layout.text.default_font.weights.heading_xl)]
    Xl,
    /// Card titles.
    #[assoc(resolve = cx.get_theme().layout.text.default_font.sizes.heading_lg)]
    #[assoc(weight = cx.get_theme().layout.text.default_font.weights.heading_lg)]
    Lg,
    #[assoc(resolve = cx.get_theme().layout.text.default_font.sizes.heading_md)]
    #[assoc(weight = cx.get_theme().layout.text.default_font.weights.heading_md)]
    Md,
    /// Alert titles and accordion triggers.
    #[assoc(resolve = cx.get_theme().layout.text.default_font.sizes.heading_sm)]
    #[assoc(weight = cx.get_theme().layout.text.default_font.weights.heading_sm)]
    Sm,
    /// Standard body text.
    #[assoc(resolve = cx.get_theme().layout.text.default_font.sizes.body)]
    #[assoc(weight = cx.get_theme().layout.text.default_font.weights.body)]
    Body,
    /// Badges and captions.
    #[assoc(resolve = cx.get_theme().layout.text.default_font.sizes.caption)]
    #[assoc(weight = cx.get_theme().layout.text.default_font.weights.caption)]
    Caption,
}

/// Component size variants that resolve to theme-defined pixel values.
///
/// Each size has a corresponding corner radius for consistent styling.
#[derive(Assoc, Clone, Copy, Debug, PartialEq, Eq)]
#[func(pub fn resolve(&self, cx: &App) -> gpui::Pixels)]
#[func(pub fn corner_radii(&self) -> ThemeLayoutCornerRadiiKind)]
pub enum ThemeLayoutSizeKind {
    #[assoc(resolve = cx.get_theme().layout.size.xl)]
    #[assoc(corner_radii = ThemeLayoutCornerRadiiKind::Lg)]
    Xl,
    #[assoc(resolve = cx.get_theme().layout.size.lg)]
    #[assoc(corner_radii = ThemeLayoutCornerRadiiKind::Md)]
    Lg,
    #[assoc(resolve = cx.get_theme().layout.size.md)]
    #[assoc(corner_radii = ThemeLayoutCornerRadiiKind::Md)]
    Md,
    /// Checkbox and switch knob size.
    #[assoc(resolve = cx.get_theme().layout.size.sm)]
    #[assoc(corner_radii = ThemeLayoutCornerRadiiKind::Sm)]
    Sm,
}

/// Padding variants that resolve to theme-defined spacing values.
#[derive(Assoc, Clone, Copy, Debug, PartialEq, Eq)]
#[func(pub fn resolve(&self, cx: &App) -> gpui::Pixels)]
pub enum ThemeLayoutPaddingKind {
    #[assoc(resolve = cx.get_theme().layout.padding.xl)]
    Xl,
    #[assoc(resolve = cx.get_theme().layout.padding.lg)]
    Lg,
    #[assoc(resolve = cx.get_theme().layout.padding.md)]
    Md,
    #[assoc(resolve = cx.get_theme().layout.padding.sm)]
    Sm,
}

/// Corner radius variants that resolve to theme-defined values.
#[derive(Assoc, Clone, Copy, Debug, PartialEq, Eq)]
#[func(pub fn resolve(&self, cx: &App) -> gpui::Pixels)]
pub enum ThemeLayoutCornerRadiiKind {
    #[assoc(resolve = cx.get_theme().layout.corner_radii.xl)]
    Xl,
    #[assoc(resolve = cx.get_theme().layout.corner_radii.lg)]
    Lg,
    #[assoc(resolve = cx.get_theme().layout.corner_radii.md)]
    Md,
    #[assoc(resolve = cx.get_theme().layout.corner_radii.sm)]
    Sm,
}

/// Accent colors from the active theme variant.
#[derive(Assoc, Clone, Copy, Debug, PartialEq, Eq)]
#[func(pub fn resolve(&self, cx: &App) -> gpui::Rgba)]
pub enum ThemeAccentKind {
    /// Brand blue; primary buttons, focus rings, info alerts.
    #[assoc(resolve = cx.get_theme().variants.active(cx).colors.accent.primary)]
    Primary,
    /// Brand purple; secondary highlights.
    #[assoc(resolve = cx.get_theme().variants.active(cx).colors.accent.secondary)]
    Secondary,
    /// Success states.
    #[assoc(resolve = cx.get_theme().variants.active(cx).colors.accent.constructive)]
    Constructive,
    /// Errors and destructive actions.
    #[assoc(resolve = cx.get_theme().variants.active(cx).colors.accent.destructive)]
    Destructive,
}

/// Background color variants from the active theme variant.
#[derive(Assoc, Clone, Copy, Debug, PartialEq, Eq)]
#[func(pub fn resolve(&self, cx: &App) -> gpui::Rgba)]
pub enum ThemeBackgroundKind {
    #[assoc(resolve = cx.get_theme().variants.active(cx).colors.background.primary)]
    Primary,
    #[assoc(resolve = cx.get_theme().variants.active(cx).colors.background.secondary)]
    Secondary,
    #[assoc(resolve = cx.get_theme().variants.active(cx).colors.background.tertiary)]
    Tertiary,
    #[assoc(resolve = cx.get_theme().variants.active(cx).colors.background.quaternary)]
    Quaternary,
    #[assoc(resolve = cx.get_theme().variants.active(cx).colors.background.quinary)]
    Quinary,
}

/// Background layers for stacking surfaces with visual hierarchy.
///
/// `next()` gives the color one step up, used for borders and nested fills.
#[derive(Assoc, Clone, Copy, Debug, PartialEq, Eq)]
#[func(pub fn resolve(&self, cx: &App) -> gpui::Rgba)]
#[func(pub fn next(&self) -> ThemeBackgroundKind)]
pub enum ThemeLayerKind {
    /// Page background.
    #[assoc(resolve = cx.get_theme().variants.active(cx).colors.background.primary)]
    #[assoc(next = ThemeBackgroundKind::Secondary)]
    Primary,
    /// Cards and chrome.
    #[assoc(resolve = cx.get_theme().variants.active(cx).colors.background.secondary)]
    #[assoc(next = ThemeBackgroundKind::Quaternary)]
    Secondary,
    /// Controls placed on cards.
    #[assoc(resolve = cx.get_theme().variants.active(cx).colors.background.tertiary)]
    #[assoc(next = ThemeBackgroundKind::Quaternary)]
    Tertiary,
    #[assoc(resolve = cx.get_theme().variants.active(cx).colors.background.quaternary)]
    #[assoc(next = ThemeBackgroundKind::Quinary)]
    Quaternary,
}
