use gpui::{ElementId, SharedString};

pub trait ElementIdExt {
    /// Derives a child id, used to key per-element state under a component id.
    fn with_suffix(&self, suffix: impl Into<SharedString>) -> ElementId;
}

impl ElementIdExt for ElementId {
    fn with_suffix(&self, suffix: impl Into<SharedString>) -> ElementId {
        ElementId::NamedChild(Box::new(self.clone()), suffix.into())
    }
}
