//! Pointer tilt geometry for cards.

use vitrine_core::TiltSettings;

/// Card bounds in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Rotation applied to a card for a pointer position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tilt {
    /// Degrees around the horizontal axis.
    pub rotate_x: f64,
    /// Degrees around the vertical axis.
    pub rotate_y: f64,
}

impl Tilt {
    /// No rotation.
    pub const NEUTRAL: Tilt = Tilt {
        rotate_x: 0.0,
        rotate_y: 0.0,
    };

    /// Rotation for a pointer at client position (`client_x`, `client_y`).
    ///
    /// Proportional to the pointer's offset from the card center; zero at the center.
    pub fn at(settings: &TiltSettings, rect: Rect, client_x: f64, client_y: f64) -> Self {
        let x = client_x - rect.left;
        let y = client_y - rect.top;
        let center_x = rect.width / 2.0;
        let center_y = rect.height / 2.0;

        Self {
            rotate_x: (y - center_y) / settings.divisor,
            rotate_y: (center_x - x) / settings.divisor,
        }
    }

    /// CSS transform while the pointer is over the card.
    pub fn css(&self, settings: &TiltSettings) -> String {
        format!(
            "perspective({}px) rotateX({}deg) rotateY({}deg) translateY(-{}px)",
            settings.perspective_px, self.rotate_x, self.rotate_y, settings.lift_px
        )
    }

    /// CSS transform after the pointer leaves.
    pub fn neutral_css(settings: &TiltSettings) -> String {
        format!(
            "perspective({}px) rotateX(0) rotateY(0) translateY(0)",
            settings.perspective_px
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECT: Rect = Rect {
        left: 100.0,
        top: 50.0,
        width: 200.0,
        height: 100.0,
    };

    #[test]
    fn test_center_is_neutral() {
        let tilt = Tilt::at(&TiltSettings::default(), RECT, 200.0, 100.0);
        assert_eq!(tilt, Tilt::NEUTRAL);
    }

    #[test]
    fn test_corner_rotation() {
        // Top-left corner: 100px left of center, 50px above.
        let tilt = Tilt::at(&TiltSettings::default(), RECT, 100.0, 50.0);
        assert_eq!(tilt.rotate_x, -2.5);
        assert_eq!(tilt.rotate_y, 5.0);
    }

    #[test]
    fn test_css() {
        let settings = TiltSettings::default();
        let tilt = Tilt::at(&settings, RECT, 300.0, 150.0);
        assert_eq!(
            tilt.css(&settings),
            "perspective(1000px) rotateX(2.5deg) rotateY(-5deg) translateY(-10px)"
        );
        assert_eq!(
            Tilt::neutral_css(&settings),
            "perspective(1000px) rotateX(0) rotateY(0) translateY(0)"
        );
    }
}
