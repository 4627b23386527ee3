use crate::SelectionId;

/// Input accepted by [`TabSelection::apply`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TabEvent<T> {
    /// A trigger for the given tab was activated.
    Activate(T),
}

/// Exactly one active tab out of a declared set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TabSelection<T: SelectionId> {
    active: T,
}

/// One entry of the trigger strip produced by [`TabSelection::triggers`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TabTrigger<T> {
    /// The tab this trigger activates.
    pub id: T,
    /// Text shown on the trigger.
    pub label: &'static str,
    /// Whether this is the active tab.
    pub active: bool,
}

impl<T: SelectionId> TabSelection<T> {
    /// Creates a selection with `active` as the current tab.
    pub fn new(active: T) -> Self {
        Self { active }
    }

    /// The currently active tab.
    pub fn active(&self) -> T {
        self.active
    }

    /// Whether `id` is the active tab, and therefore the only visible content.
    pub fn is_active(&self, id: T) -> bool {
        self.active == id
    }

    /// Applies an event and returns the next selection.
    ///
    /// Activating the already active tab leaves the selection unchanged.
    pub fn apply(self, event: TabEvent<T>) -> Self {
        match event {
            TabEvent::Activate(id) => Self { active: id },
        }
    }

    /// Triggers for every declared tab, in declaration order.
    pub fn triggers(&self) -> impl Iterator<Item = TabTrigger<T>> + '_ {
        T::ALL.iter().map(|id| TabTrigger {
            id: *id,
            label: id.label(),
            active: self.is_active(*id),
        })
    }
}

impl<T: SelectionId> Default for TabSelection<T> {
    /// Starts on the first declared tab.
    fn default() -> Self {
        Self::new(T::first())
    }
}
