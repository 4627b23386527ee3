use gpui::Rgba;
use gpui_transitions::TransitionGoal;

/// Creates an RGBA color from a hex value and alpha component.
pub fn rgb_a(hex: u32, a: f32) -> Rgba {
    let [_, r, g, b] = hex.to_be_bytes().map(|b| (b as f32) / 255.0);
    Rgba { r, g, b, a }
}

/// Extension trait for modifying RGBA colors.
pub trait RgbaExt {
    /// Returns a new color with the specified alpha value.
    fn alpha(self, alpha: f32) -> Self;

    /// Moves `amount` (0 to 1) of the way towards `other`.
    fn mix(self, other: &Self, amount: f32) -> Self;
}

impl RgbaExt for Rgba {
    fn alpha(mut self, alpha: f32) -> Self {
        self.a = alpha;
        self
    }

    fn mix(self, other: &Self, amount: f32) -> Self {
        self.apply_delta(other, amount.clamp(0., 1.))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_a_splits_channels() {
        let color = rgb_a(0xFF8000, 0.5);
        assert_eq!(color.r, 1.0);
        assert!((color.g - 128. / 255.).abs() < f32::EPSILON);
        assert_eq!(color.b, 0.0);
        assert_eq!(color.a, 0.5);
    }

    #[test]
    fn mix_interpolates_and_clamps() {
        let black = rgb_a(0x000000, 1.);
        let white = rgb_a(0xFFFFFF, 1.);

        assert_eq!(black.mix(&white, 0.5).r, 0.5);
        assert_eq!(black.mix(&white, 2.).r, 1.0);
        assert_eq!(black.mix(&white, -1.).r, 0.0);
    }
}
