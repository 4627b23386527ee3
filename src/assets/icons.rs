#![allow(missing_docs)] // Derive macros generate undocumented methods.

use enum_assoc::Assoc;
use gpui::SharedString;

/// Icons used by the showcase, mapped to their bundled SVG paths.
#[derive(Assoc, Clone, Copy, Debug, PartialEq, Eq)]
#[func(pub fn path(&self) -> SharedString)]
pub enum IconKind {
    /// Brand mark in the header.
    #[assoc(path = "icons/sparkle.svg".into())]
    Sparkle,
    #[assoc(path = "icons/package.svg".into())]
    Package,
    #[assoc(path = "icons/code.svg".into())]
    Code,
    #[assoc(path = "icons/palette.svg".into())]
    Palette,
    #[assoc(path = "icons/info.svg".into())]
    Info,
    #[assoc(path = "icons/circle_check.svg".into())]
    CircleCheck,
    #[assoc(path = "icons/circle_alert.svg".into())]
    CircleAlert,
    /// Accordion trigger indicator.
    #[assoc(path = "icons/chevron_down.svg".into())]
    ChevronDown,
    /// Checkbox tick.
    #[assoc(path = "icons/checkmark.svg".into())]
    Checkmark,
    #[assoc(path = "icons/book_open.svg".into())]
    BookOpen,
    #[assoc(path = "icons/layers.svg".into())]
    Layers,
}

impl IconKind {
    pub const ALL: &[IconKind] = &[
        IconKind::Sparkle,
        IconKind::Package,
        IconKind::Code,
        IconKind::Palette,
        IconKind::Info,
        IconKind::CircleCheck,
        IconKind::CircleAlert,
        IconKind::ChevronDown,
        IconKind::Checkmark,
        IconKind::BookOpen,
        IconKind::Layers,
    ];
}

impl From<IconKind> for SharedString {
    fn from(kind: IconKind) -> Self {
        kind.path()
    }
}
