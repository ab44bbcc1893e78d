//! Pointer proximity highlighting.

use nulai_core::FontWeight;

/// Text opacity of a label at rest.
pub const BASE_OPACITY: f32 = 0.15;

/// Extra scale at full intensity.
const MAX_SCALE_BOOST: f32 = 0.3;

/// Blur radius of the inner glow at full intensity, in pixels.
const GLOW_BLUR: f32 = 30.0;

/// Blur radius of the outer glow at full intensity, in pixels.
const OUTER_GLOW_BLUR: f32 = 60.0;

/// Two-layer text glow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glow {
    pub blur: f32,
    pub alpha: f32,
    pub outer_blur: f32,
    pub outer_alpha: f32,
}

/// Visual state of one label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Highlight {
    /// 1 with the pointer on the label, falling to 0 at the glow radius.
    pub intensity: f32,
    pub opacity: f32,
    pub glow: Option<Glow>,
    pub scale: f32,
    pub weight: FontWeight,
    /// Accent tint instead of the neutral one.
    pub accent: bool,
}

impl Highlight {
    pub const BASELINE: Highlight = Highlight {
        intensity: 0.0,
        opacity: BASE_OPACITY,
        glow: None,
        scale: 1.0,
        weight: FontWeight::SemiBold,
        accent: false,
    };

    /// Labels removed by the title overlap pass.
    pub const HIDDEN: Highlight = Highlight {
        opacity: 0.0,
        ..Highlight::BASELINE
    };

    /// Highlight for a label `distance` pixels from the pointer.
    pub fn for_distance(distance: f32, glow_radius: f32) -> Highlight {
        let distance = if distance.is_finite() {
            distance.max(0.0)
        } else {
            f32::INFINITY
        };
        if distance >= glow_radius {
            return Highlight::BASELINE;
        }

        let intensity = 1.0 - distance / glow_radius;
        Highlight {
            intensity,
            opacity: BASE_OPACITY + intensity * (1.0 - BASE_OPACITY),
            glow: Some(Glow {
                blur: GLOW_BLUR * intensity,
                alpha: intensity,
                outer_blur: OUTER_GLOW_BLUR * intensity,
                outer_alpha: intensity * 0.5,
            }),
            scale: 1.0 + intensity * MAX_SCALE_BOOST,
            weight: FontWeight::Bold,
            accent: true,
        }
    }
}

impl Default for Highlight {
    fn default() -> Self {
        Self::BASELINE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const G: f32 = 200.0;

    #[test]
    fn test_pointer_on_label_is_full_intensity() {
        let h = Highlight::for_distance(0.0, G);
        assert_eq!(h.intensity, 1.0);
        assert!((h.opacity - 1.0).abs() < 1e-6);
        assert!((h.scale - 1.3).abs() < 1e-6);
        assert_eq!(h.weight, FontWeight::Bold);
        let glow = h.glow.unwrap();
        assert_eq!(glow.blur, 30.0);
        assert_eq!(glow.outer_blur, 60.0);
        assert_eq!(glow.outer_alpha, 0.5);
    }

    #[test]
    fn test_boundary_is_baseline() {
        assert_eq!(Highlight::for_distance(G, G), Highlight::BASELINE);
        assert_eq!(Highlight::for_distance(G + 1.0, G), Highlight::BASELINE);
        assert_eq!(Highlight::for_distance(1e9, G), Highlight::BASELINE);
        assert_eq!(Highlight::for_distance(f32::NAN, G), Highlight::BASELINE);
    }

    #[test]
    fn test_baseline_values() {
        let b = Highlight::BASELINE;
        assert_eq!(b.opacity, 0.15);
        assert_eq!(b.scale, 1.0);
        assert!(b.glow.is_none());
        assert_eq!(b.weight.value(), 600);
        assert_eq!(Highlight::HIDDEN.opacity, 0.0);
    }

    #[test]
    fn test_monotonic_in_distance() {
        let mut prev = Highlight::for_distance(0.0, G);
        for step in 1..=40 {
            let h = Highlight::for_distance(step as f32 * 5.0, G);
            assert!(h.opacity <= prev.opacity);
            assert!(h.scale <= prev.scale);
            assert!(h.opacity >= BASE_OPACITY);
            prev = h;
        }
    }

    #[test]
    fn test_linear_falloff() {
        let h = Highlight::for_distance(50.0, G);
        assert!((h.intensity - 0.75).abs() < 1e-6);
        assert!((h.opacity - (0.15 + 0.75 * 0.85)).abs() < 1e-6);
    }

    #[test]
    fn test_negative_distance_clamps() {
        assert_eq!(Highlight::for_distance(-10.0, G), Highlight::for_distance(0.0, G));
    }
}
