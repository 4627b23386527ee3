use gpui::{
    App, ClickEvent, Div, ElementId, Entity, FocusHandle, InteractiveElement, MouseButton,
    Stateful, StatefulInteractiveElement, Window,
};

use crate::ElementIdExt;

/// Hover, press and focus state kept across frames for an interactive component.
#[derive(Clone)]
pub struct Interaction {
    hover: Entity<bool>,
    click_down: Entity<bool>,
    focus_handle: FocusHandle,
}

impl Interaction {
    /// Fetches (or creates) the state keyed under `id`.
    pub fn use_keyed(id: &ElementId, window: &mut Window, cx: &mut App) -> Self {
        let hover = window.use_keyed_state(id.with_suffix("state:hover"), cx, |_window, _cx| false);

        let click_down = window.use_keyed_state(
            id.with_suffix("state:click_down"),
            cx,
            |_window, _cx| false,
        );

        let focus_handle = window
            .use_keyed_state(
                id.with_suffix("state:focus_handle"),
                cx,
                |_window, cx| cx.focus_handle().tab_stop(true),
            )
            .read(cx)
            .clone();

        Self {
            hover,
            click_down,
            focus_handle,
        }
    }

    pub fn is_hover(&self, cx: &App) -> bool {
        *self.hover.read(cx)
    }

    pub fn is_click_down(&self, cx: &App) -> bool {
        *self.click_down.read(cx)
    }

    pub fn is_focus(&self, window: &Window) -> bool {
        self.focus_handle.is_focused(window)
    }

    pub fn focus_handle(&self) -> &FocusHandle {
        &self.focus_handle
    }

    /// Attaches hover, press and click handling to `element`.
    ///
    /// Disabled elements get no handlers and give up focus.
    pub fn bind(
        self,
        element: Stateful<Div>,
        window: &mut Window,
        disabled: bool,
        on_click: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    ) -> Stateful<Div> {
        let is_focus = self.is_focus(window);

        if disabled {
            if is_focus {
                window.blur();
            }
            return element;
        }

        let Self {
            hover,
            click_down,
            focus_handle,
        } = self;

        element
            .on_hover({
                let hover = hover.clone();
                move |is_hover, _window, cx| set_flag(&hover, *is_hover, cx)
            })
            .on_mouse_down(MouseButton::Left, {
                let click_down = click_down.clone();
                move |_event, window, cx| {
                    // Keeps the focus ring hidden for pointer presses.
                    window.prevent_default();
                    set_flag(&click_down, true, cx);
                }
            })
            .on_click({
                let click_down = click_down.clone();
                move |event, window, cx| {
                    window.prevent_default();
                    cx.stop_propagation();

                    if !is_focus {
                        window.blur();
                    }

                    set_flag(&click_down, false, cx);
                    on_click(event, window, cx);
                }
            })
            .on_mouse_up_out(MouseButton::Left, move |_event, _window, cx| {
                // Pressed inside, released outside.
                set_flag(&hover, false, cx);
                set_flag(&click_down, false, cx);
            })
            .track_focus(&focus_handle)
    }
}

fn set_flag(flag: &Entity<bool>, value: bool, cx: &mut App) {
    flag.update(cx, |this, _cx| *this = value);
    cx.notify(flag.entity_id());
}
