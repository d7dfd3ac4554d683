//! 2×3 affine transform matrix.

use serde::{Deserialize, Serialize};

use crate::vector2::Vector2;

/// A 2D affine transform as a 2×3 row-major matrix:
///
/// ```text
/// [[a, c, e],
///  [b, d, f]]
/// ```
///
/// applied as `x' = a·x + c·y + e`, `y' = b·x + d·y + f`. Encodes
/// rotation, scale, skew, and translation; the implicit third row is
/// `[0, 0, 1]`, so composition is ordinary matrix multiplication.
///
/// Serializes as the bare matrix `[[a, c, e], [b, d, f]]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AffineTransform {
    pub matrix: [[f64; 3]; 2],
}

impl AffineTransform {
    /// The identity transform.
    pub const IDENTITY: AffineTransform = AffineTransform {
        matrix: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
    };

    pub const fn new(matrix: [[f64; 3]; 2]) -> Self {
        Self { matrix }
    }

    /// A pure translation by `t`.
    pub const fn translation(t: Vector2) -> Self {
        Self::new([[1.0, 0.0, t.x], [0.0, 1.0, t.y]])
    }

    /// A pure scale about the origin by per-axis `factors`.
    pub const fn scaling(factors: Vector2) -> Self {
        Self::new([[factors.x, 0.0, 0.0], [0.0, factors.y, 0.0]])
    }

    /// Applies this transform to a point.
    ///
    /// Total over the reals; NaN/Inf inputs propagate per IEEE-754.
    pub fn apply(&self, p: Vector2) -> Vector2 {
        let [[a, c, e], [b, d, f]] = self.matrix;
        Vector2::new(a * p.x + c * p.y + e, b * p.x + d * p.y + f)
    }

    /// Matrix product `self × other` in augmented form.
    ///
    /// The right-hand transform applies first:
    /// `a.compose(b).apply(p) == a.apply(b.apply(p))`.
    pub fn compose(&self, other: &AffineTransform) -> AffineTransform {
        let a = self.matrix;
        let b = other.matrix;
        AffineTransform::new([
            [
                a[0][0] * b[0][0] + a[0][1] * b[1][0],
                a[0][0] * b[0][1] + a[0][1] * b[1][1],
                a[0][0] * b[0][2] + a[0][1] * b[1][2] + a[0][2],
            ],
            [
                a[1][0] * b[0][0] + a[1][1] * b[1][0],
                a[1][0] * b[0][1] + a[1][1] * b[1][1],
                a[1][0] * b[0][2] + a[1][1] * b[1][2] + a[1][2],
            ],
        ])
    }

    /// Composes a scale about an absolute `origin` onto this transform,
    /// keeping the origin fixed: translate to the origin, scale, translate
    /// back, then apply `self`.
    pub fn scaled_about(&self, factors: Vector2, origin: Vector2) -> AffineTransform {
        let to_origin = AffineTransform::translation(-origin);
        let scale = AffineTransform::scaling(factors);
        let back = AffineTransform::translation(origin);
        self.compose(&back.compose(&scale.compose(&to_origin)))
    }
}

impl Default for AffineTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_apply() {
        let p = Vector2::new(3.5, -7.0);
        assert_eq!(AffineTransform::IDENTITY.apply(p), p);
    }

    #[test]
    fn test_apply_rotation_and_translation() {
        // Rotate [1, 0] by 90 degrees CCW, then translate by [2, 3].
        let t = AffineTransform::new([[0.0, -1.0, 2.0], [1.0, 0.0, 3.0]]);
        assert_eq!(t.apply(Vector2::new(1.0, 0.0)), Vector2::new(2.0, 4.0));
    }

    #[test]
    fn test_compose_order_right_applies_first() {
        let translate = AffineTransform::translation(Vector2::new(10.0, 0.0));
        let scale = AffineTransform::scaling(Vector2::new(2.0, 2.0));
        let p = Vector2::new(1.0, 1.0);

        // scale ∘ translate: translate first, then scale.
        let st = scale.compose(&translate);
        assert_eq!(st.apply(p), scale.apply(translate.apply(p)));
        assert_eq!(st.apply(p), Vector2::new(22.0, 2.0));

        // translate ∘ scale differs.
        let ts = translate.compose(&scale);
        assert_eq!(ts.apply(p), Vector2::new(12.0, 2.0));
    }

    #[test]
    fn test_compose_identity_is_neutral() {
        let t = AffineTransform::new([[2.0, 0.5, -3.0], [0.1, 4.0, 9.0]]);
        assert_eq!(t.compose(&AffineTransform::IDENTITY), t);
        assert_eq!(AffineTransform::IDENTITY.compose(&t), t);
    }

    #[test]
    fn test_scaled_about_keeps_origin_fixed() {
        let origin = Vector2::new(50.0, 50.0);
        let t = AffineTransform::IDENTITY.scaled_about(Vector2::new(2.0, 2.0), origin);
        assert_eq!(t.apply(origin), origin);
        assert_eq!(t.apply(Vector2::new(60.0, 50.0)), Vector2::new(70.0, 50.0));
    }

    #[test]
    fn test_serializes_as_matrix() {
        let t = AffineTransform::new([[1.0, 0.0, 10.0], [0.0, 1.0, 20.0]]);
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(json, "[[1.0,0.0,10.0],[0.0,1.0,20.0]]");

        let back: AffineTransform = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t);
    }
}
