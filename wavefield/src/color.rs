//! Gradient color mapping

/// RGB color, each channel in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const RED: Color = Color::new(1.0, 0.0, 0.0);
    pub const BLUE: Color = Color::new(0.0, 0.0, 1.0);
    pub const DARK_BLUE: Color = Color::new(0.0, 0.0, 0.545);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    pub fn lerp(self, other: Color, t: f32) -> Color {
        Color {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
        }
    }

    pub fn to_rgba(self, alpha: f32) -> [f32; 4] {
        [self.r, self.g, self.b, alpha]
    }
}

/// Linear interpolation between two endpoint colors
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gradient {
    pub start: Color,
    pub end: Color,
}

impl Gradient {
    /// Red at 0, blue at 1, no green
    pub const RED_BLUE: Gradient = Gradient {
        start: Color::RED,
        end: Color::BLUE,
    };

    /// Green fading from 0.7 to 0.2 while blue rises, no red
    pub const GREEN_BLUE: Gradient = Gradient {
        start: Color::new(0.0, 0.7, 0.0),
        end: Color::new(0.0, 0.2, 1.0),
    };

    pub fn new(start: Color, end: Color) -> Self {
        Self { start, end }
    }

    /// Color for `value`, clamped into [0, 1] first; NaN maps to the start color
    pub fn map(&self, value: f64) -> Color {
        let t = if value.is_nan() { 0.0 } else { value.clamp(0.0, 1.0) };
        self.start.lerp(self.end, t as f32)
    }
}

/// Named gradient presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GradientKind {
    #[default]
    RedBlue,
    GreenBlue,
}

impl GradientKind {
    pub fn gradient(self) -> Gradient {
        match self {
            GradientKind::RedBlue => Gradient::RED_BLUE,
            GradientKind::GreenBlue => Gradient::GREEN_BLUE,
        }
    }
}

impl From<GradientKind> for Gradient {
    fn from(kind: GradientKind) -> Self {
        kind.gradient()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Color, b: Color) -> bool {
        (a.r - b.r).abs() < 1e-6 && (a.g - b.g).abs() < 1e-6 && (a.b - b.b).abs() < 1e-6
    }

    #[test]
    fn red_blue_endpoints_and_midpoint() {
        let g = Gradient::RED_BLUE;
        assert_eq!(g.map(0.0), Color::new(1.0, 0.0, 0.0));
        assert_eq!(g.map(0.5), Color::new(0.5, 0.0, 0.5));
        assert_eq!(g.map(1.0), Color::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn out_of_range_inputs_clamp() {
        for g in [Gradient::RED_BLUE, Gradient::GREEN_BLUE] {
            assert_eq!(g.map(-5.0), g.map(0.0));
            assert_eq!(g.map(5.0), g.map(1.0));
        }
        assert_eq!(Gradient::RED_BLUE.map(f64::NAN), Color::RED);
    }

    #[test]
    fn green_blue_follows_secondary_ramp() {
        let g = GradientKind::GreenBlue.gradient();
        for v in [0.0, 0.2, 0.5, 0.9, 1.0] {
            let expected = Color::new(0.0, 0.7 - v as f32 / 2.0, v as f32);
            assert!(close(g.map(v), expected), "v = {v}");
        }
    }

    #[test]
    fn presets_differ() {
        let green: Gradient = GradientKind::GreenBlue.into();
        assert_ne!(Gradient::from(GradientKind::RedBlue), green);
    }
}
