//! Fixed copy rendered by the static panels.

use showcase_state::DocsItem;

use crate::{IconKind, theme::ThemeAccentKind};

pub const TITLE: &str = "Spark Template";
pub const SUBTITLE: &str = "UI Component Showcase";
pub const VERSION_BADGE: &str = "v0.0.0";
pub const FRAMEWORK_BADGE: &str = "GPUI";

pub const HERO_TITLE: &str = "Welcome to Spark Template";
pub const HERO_DESCRIPTION: &str = "This showcase demonstrates the 45+ pre-built UI components \
     available in this template. All components are accessible, customizable, and \
     production-ready.";

pub struct Feature {
    pub icon: IconKind,
    pub tint: ThemeAccentKind,
    pub title: &'static str,
    pub description: &'static str,
    pub caption: &'static str,
}

pub const FEATURES: [Feature; 3] = [
    Feature {
        icon: IconKind::Package,
        tint: ThemeAccentKind::Primary,
        title: "45+ Components",
        description: "Pre-built UI components on shared focus and state primitives",
        caption: "Buttons, forms, dialogs, navigation, and more",
    },
    Feature {
        icon: IconKind::Code,
        tint: ThemeAccentKind::Secondary,
        title: "Strongly Typed",
        description: "Every component is a typed builder checked at compile time",
        caption: "Type-safe development with editor completion",
    },
    Feature {
        icon: IconKind::Palette,
        tint: ThemeAccentKind::Constructive,
        title: "Themeable",
        description: "Styled from a JSON theme with light and dark variants",
        caption: "Fully customizable and themeable",
    },
];

pub const EXAMPLES_TITLE: &str = "Component Examples";
pub const EXAMPLES_DESCRIPTION: &str = "Explore different component categories";

pub const SUCCESS_TITLE: &str = "Success";
pub const SUCCESS_DESCRIPTION: &str = "Your changes have been saved successfully.";
pub const ERROR_TITLE: &str = "Error";
pub const ERROR_DESCRIPTION: &str = "Something went wrong. Please try again.";
pub const LOADING_LABEL: &str = "Loading Progress";
pub const LOADING_VALUE: f32 = 66.;

pub const DOCS_TITLE: &str = "Documentation Quick Links";
pub const DOCS_DESCRIPTION: &str =
    "Access comprehensive documentation for all aspects of the template";

/// Sentence and docs file shown inside an expanded accordion item.
pub fn docs_entry(item: DocsItem) -> (&'static str, &'static str) {
    match item {
        DocsItem::GettingStarted => (
            "Quick setup guide to get your project running in minutes.",
            "docs/GETTING_STARTED.md",
        ),
        DocsItem::Components => (
            "Complete reference for all 45+ UI components with usage examples.",
            "docs/COMPONENTS.md",
        ),
        DocsItem::Deployment => (
            "Package and ship the binary for macOS, Linux, and Windows.",
            "docs/DEPLOYMENT.md",
        ),
    }
}

pub const CTA_TITLE: &str = "Ready to Build?";
pub const CTA_DESCRIPTION: &str = "Start creating your application with these components";
pub const CTA_BODY: &str = "This template includes everything you need: GPUI, a JSON theme, \
     and 45+ production-ready components. Check out the comprehensive documentation in the \
     docs/ directory to learn more.";

pub const FOOTER: &str = "Spark Template • Built with Rust and GPUI";
