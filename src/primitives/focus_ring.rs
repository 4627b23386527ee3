use std::time::Duration;

use gpui::{CornersRefinement, ElementId, FocusHandle, IntoElement, Pixels, RenderOnce, prelude::*, px};
use gpui_squircle::{SquircleStyleRefinement, SquircleStyled, squircle};
use gpui_transitions::TransitionExt;

use crate::{
    theme::{ThemeAccentKind, ThemeExt},
    utils::{RgbaExt, goal_transition},
};

const SIZE_SCALE_FACTOR: f32 = 8.;

/// Accent outline that grows into place around a focused control.
///
/// Placed as the first child of a relatively positioned control; it expands
/// to the control's bounds and draws outside of them.
#[derive(IntoElement)]
pub struct FocusRing {
    id: ElementId,
    focus_handle: FocusHandle,
    accent: ThemeAccentKind,
    style: SquircleStyleRefinement,
}

impl FocusRing {
    pub fn new(id: impl Into<ElementId>, focus_handle: FocusHandle) -> Self {
        Self {
            id: id.into(),
            focus_handle,
            accent: ThemeAccentKind::Primary,
            style: SquircleStyleRefinement::default(),
        }
    }

    /// Ring color, e.g. destructive for destructive buttons.
    pub fn accent(mut self, accent: ThemeAccentKind) -> Self {
        self.accent = accent;
        self
    }
}

impl SquircleStyled for FocusRing {
    fn style(&mut self) -> &mut gpui::StyleRefinement {
        &mut self.style.inner
    }

    fn outer_style(&mut self) -> &mut SquircleStyleRefinement {
        &mut self.style
    }
}

impl RenderOnce for FocusRing {
    fn render(self, window: &mut gpui::Window, cx: &mut gpui::App) -> impl IntoElement {
        let ring_color = self.accent.resolve(cx);
        let default_radius = cx.get_theme().layout.corner_radii.md;

        let is_focused = self.focus_handle.is_focused(window) as u8 as f32;

        let ring_progress = goal_transition(
            self.id.clone(),
            window,
            cx,
            Duration::from_millis(365),
            is_focused,
        );

        squircle()
            .absolute()
            .top_0()
            .bottom_0()
            .left_0()
            .right_0()
            .border(px(3.))
            .border_outside()
            .with_transitions(ring_progress, move |_cx, this, delta| {
                let size_factor = (1. - delta) * SIZE_SCALE_FACTOR;

                this.inset(px(-size_factor))
                    .border_color(ring_color.alpha(delta * 0.35))
                    .map(|mut this| {
                        this.outer_style().corner_radii = grow_corner_radii(
                            &self.style.corner_radii,
                            default_radius,
                            px(size_factor + 1.),
                        );
                        this
                    })
            })
    }
}

fn grow_corner_radii(
    corner_radii: &CornersRefinement<Pixels>,
    default: Pixels,
    by: Pixels,
) -> CornersRefinement<Pixels> {
    CornersRefinement {
        top_left: Some(corner_radii.top_left.unwrap_or(default) + by),
        top_right: Some(corner_radii.top_right.unwrap_or(default) + by),
        bottom_right: Some(corner_radii.bottom_right.unwrap_or(default) + by),
        bottom_left: Some(corner_radii.bottom_left.unwrap_or(default) + by),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grow_corner_radii_fills_missing_corners() {
        let radii = CornersRefinement {
            top_left: Some(px(4.)),
            ..Default::default()
        };

        let grown = grow_corner_radii(&radii, px(8.), px(2.));

        assert_eq!(grown.top_left, Some(px(6.)));
        assert_eq!(grown.bottom_right, Some(px(10.)));
    }
}
