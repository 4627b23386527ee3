use gpui::{ColorSpace, linear_color_stop, linear_gradient};
use gpui_squircle::{Squircle, SquircleStyled};

use crate::utils::rgb_a;

pub trait SquircleExt {
    /// Paints the border as a top-lit gradient, giving filled surfaces a subtle bevel.
    fn border_highlight(self, opacity: f32) -> Self;
}

impl SquircleExt for Squircle {
    fn border_highlight(self, opacity: f32) -> Self {
        self.border_color(
            linear_gradient(
                180.,
                linear_color_stop(rgb_a(0xFFFFFF, opacity), 0.),
                linear_color_stop(rgb_a(0x0F172A, opacity), 1.),
            )
            .color_space(ColorSpace::Oklab),
        )
    }
}
