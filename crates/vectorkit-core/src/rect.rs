//! Axis-aligned rectangle algebra.
//!
//! Construction, set algebra (union/intersection/containment), alignment,
//! translate/scale, corner-mapped affine transform, and the relative
//! transform solver used to map design-space rects onto screen space.
//!
//! # Sign policy
//!
//! [`Rectangle::from_points`] and [`Rectangle::union`] always produce
//! non-negative dimensions. [`Rectangle::scale`] with negative factors may
//! produce a flipped rectangle (negative width/height); this is an
//! intentional transient representation for interactive drag/resize
//! gestures. Callers doing hit-testing, storage, or set algebra must go
//! through [`Rectangle::normalized`] first.

use serde::{Deserialize, Serialize};

use crate::error::{GeometryError, Result};
use crate::transform::AffineTransform;
use crate::vector2::Vector2;

/// An axis-aligned rectangle enclosed by its top-left point `(x, y)`, its
/// width, and its height.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rectangle {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// The 9 control points of a rectangle: 4 corners, 4 edge midpoints, and
/// the center. For a zero-width or zero-height rectangle the degenerate
/// anchors coincide exactly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NinePoints {
    pub top_left: Vector2,
    pub top_right: Vector2,
    pub bottom_left: Vector2,
    pub bottom_right: Vector2,
    pub top_center: Vector2,
    pub left_center: Vector2,
    pub right_center: Vector2,
    pub bottom_center: Vector2,
    pub center: Vector2,
}

/// Per-edge amounts for [`Rectangle::pad`] and [`Rectangle::inset`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Sides {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Sides {
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// The same amount on every edge.
    pub const fn uniform(amount: f64) -> Self {
        Self::new(amount, amount, amount, amount)
    }
}

/// Per-axis alignment target within the union bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisAlign {
    /// Leave the axis untouched.
    #[default]
    None,
    /// Left/top edge to the union's minimum.
    Min,
    /// Right/bottom edge to the union's maximum.
    Max,
    /// Center to the union's center.
    Center,
}

/// Alignment request for [`align`], one target per axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Alignment {
    pub horizontal: AxisAlign,
    pub vertical: AxisAlign,
}

impl Rectangle {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The minimal bounding rectangle enclosing all input points.
    ///
    /// A single point yields a zero-size rectangle. Fails with
    /// [`GeometryError::EmptyInput`] when given no points.
    pub fn from_points(points: &[Vector2]) -> Result<Rectangle> {
        let first = points.first().ok_or(GeometryError::EmptyInput)?;

        let mut min = *first;
        let mut max = *first;
        for p in &points[1..] {
            min = min.min(*p);
            max = max.max(*p);
        }

        Ok(Rectangle::new(min.x, min.y, max.x - min.x, max.y - min.y))
    }

    /// The minimal bounding rectangle enclosing all input rectangles.
    ///
    /// Commutative and associative. Fails with
    /// [`GeometryError::EmptyInput`] on an empty slice.
    pub fn union(rectangles: &[Rectangle]) -> Result<Rectangle> {
        let first = rectangles.first().ok_or(GeometryError::EmptyInput)?;

        let mut min_x = first.x;
        let mut min_y = first.y;
        let mut max_x = first.x + first.width;
        let mut max_y = first.y + first.height;
        for r in &rectangles[1..] {
            min_x = min_x.min(r.x);
            min_y = min_y.min(r.y);
            max_x = max_x.max(r.x + r.width);
            max_y = max_y.max(r.y + r.height);
        }

        Ok(Rectangle::new(min_x, min_y, max_x - min_x, max_y - min_y))
    }

    /// The 9 named control points (corners, edge midpoints, center).
    pub fn nine_points(&self) -> NinePoints {
        let Rectangle {
            x,
            y,
            width,
            height,
        } = *self;

        NinePoints {
            top_left: Vector2::new(x, y),
            top_right: Vector2::new(x + width, y),
            bottom_left: Vector2::new(x, y + height),
            bottom_right: Vector2::new(x + width, y + height),
            top_center: Vector2::new(x + width / 2.0, y),
            left_center: Vector2::new(x, y + height / 2.0),
            right_center: Vector2::new(x + width, y + height / 2.0),
            bottom_center: Vector2::new(x + width / 2.0, y + height),
            center: Vector2::new(x + width / 2.0, y + height / 2.0),
        }
    }

    pub fn center(&self) -> Vector2 {
        Vector2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.width / self.height
    }

    /// True iff `other` lies fully within this rectangle, boundaries
    /// inclusive. A rectangle strictly larger than this one is never
    /// contained, even when overlapping.
    pub fn contains(&self, other: &Rectangle) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.x + other.width <= self.x + self.width
            && other.y + other.height <= self.y + self.height
    }

    /// True iff the point lies within this rectangle, boundaries inclusive.
    pub fn contains_point(&self, p: Vector2) -> bool {
        p.x >= self.x
            && p.x <= self.x + self.width
            && p.y >= self.y
            && p.y <= self.y + self.height
    }

    /// True iff the two rectangles overlap or touch at a shared edge or
    /// corner (inclusive boundary test). Symmetric.
    pub fn intersects(&self, other: &Rectangle) -> bool {
        !(self.x > other.x + other.width
            || self.y > other.y + other.height
            || self.x + self.width < other.x
            || self.y + self.height < other.y)
    }

    /// The overlapping rectangle, or `None` without a positive-area
    /// overlap.
    ///
    /// Edge-touching rectangles (zero-area overlap) return `None`, a
    /// deliberate asymmetry with [`Rectangle::intersects`], which is
    /// inclusive of touching.
    pub fn intersection(&self, other: &Rectangle) -> Option<Rectangle> {
        let x1 = self.x.max(other.x);
        let y1 = self.y.max(other.y);
        let x2 = (self.x + self.width).min(other.x + other.width);
        let y2 = (self.y + self.height).min(other.y + other.height);

        if x2 <= x1 || y2 <= y1 {
            return None;
        }

        Some(Rectangle::new(x1, y1, x2 - x1, y2 - y1))
    }

    /// Offsets the position by `t`; the size is unchanged.
    pub fn translate(&self, t: Vector2) -> Rectangle {
        Rectangle::new(self.x + t.x, self.y + t.y, self.width, self.height)
    }

    /// Scales position and size about `origin` by per-axis `factors`:
    /// `new_pos = origin + (pos − origin) · factors`, `new_size = size ·
    /// factors`.
    ///
    /// Negative factors reflect across the origin and yield a flipped
    /// rectangle with negative width/height (see the module-level sign
    /// policy).
    pub fn scale(&self, origin: Vector2, factors: Vector2) -> Rectangle {
        Rectangle::new(
            origin.x + (self.x - origin.x) * factors.x,
            origin.y + (self.y - origin.y) * factors.y,
            self.width * factors.x,
            self.height * factors.y,
        )
    }

    /// The canonical non-negative form of a possibly flipped rectangle.
    /// Idempotent.
    pub fn normalized(&self) -> Rectangle {
        Rectangle::new(
            self.x.min(self.x + self.width),
            self.y.min(self.y + self.height),
            self.width.abs(),
            self.height.abs(),
        )
    }

    /// The per-axis factors scaling this rectangle's size onto `to`'s.
    /// Positions are not considered.
    pub fn scale_factors(&self, to: &Rectangle) -> Vector2 {
        Vector2::new(to.width / self.width, to.height / self.height)
    }

    /// Applies an affine transform to all 4 corners and returns the AABB
    /// of the mapped corners. Correct under rotation and skew, unlike a
    /// naive transform of `(x, y, width, height)` alone.
    pub fn transform(&self, t: &AffineTransform) -> Rectangle {
        let NinePoints {
            top_left,
            top_right,
            bottom_left,
            bottom_right,
            ..
        } = self.nine_points();

        let corners = [
            t.apply(top_left),
            t.apply(top_right),
            t.apply(bottom_left),
            t.apply(bottom_right),
        ];

        let mut min = corners[0];
        let mut max = corners[0];
        for c in &corners[1..] {
            min = min.min(*c);
            max = max.max(*c);
        }

        Rectangle::new(min.x, min.y, max.x - min.x, max.y - min.y)
    }

    /// The unique axis-aligned scale+translate transform mapping this
    /// rectangle's corners exactly onto `to`'s:
    /// `self.transform(&self.relative_transform(to)) == *to`.
    ///
    /// Degenerate source dimension: a zero width or height fixes that
    /// axis's scale factor at `1` and translation alone carries the single
    /// point, a pinned contract rather than an error.
    pub fn relative_transform(&self, to: &Rectangle) -> AffineTransform {
        let scale_x = if self.width == 0.0 {
            1.0
        } else {
            to.width / self.width
        };
        let scale_y = if self.height == 0.0 {
            1.0
        } else {
            to.height / self.height
        };

        // Translate to the origin, scale, translate to the target.
        let t1 = AffineTransform::translation(Vector2::new(-self.x, -self.y));
        let t2 = AffineTransform::scaling(Vector2::new(scale_x, scale_y));
        let t3 = AffineTransform::translation(Vector2::new(to.x, to.y));
        t3.compose(&t2.compose(&t1))
    }

    /// The AABB of this rectangle rotated about its center by `degrees`.
    pub fn rotate(&self, degrees: f64) -> Rectangle {
        let radians = degrees.to_radians();
        let (sin, cos) = radians.sin_cos();
        let center = self.center();

        let NinePoints {
            top_left,
            top_right,
            bottom_left,
            bottom_right,
            ..
        } = self.nine_points();

        let rotated = [top_left, top_right, bottom_right, bottom_left].map(|p| {
            let d = p - center;
            center + Vector2::new(d.x * cos - d.y * sin, d.x * sin + d.y * cos)
        });

        let mut min = rotated[0];
        let mut max = rotated[0];
        for p in &rotated[1..] {
            min = min.min(*p);
            max = max.max(*p);
        }

        Rectangle::new(min.x, min.y, max.x - min.x, max.y - min.y)
    }

    /// Aligns this rectangle relative to `anchor` (the anchor rectangle is
    /// the alignment target instead of a union bounding box).
    pub fn align_to(&self, anchor: &Rectangle, alignment: Alignment) -> Rectangle {
        let x = match alignment.horizontal {
            AxisAlign::None => self.x,
            AxisAlign::Min => anchor.x,
            AxisAlign::Max => anchor.x + anchor.width - self.width,
            AxisAlign::Center => anchor.x + (anchor.width - self.width) / 2.0,
        };
        let y = match alignment.vertical {
            AxisAlign::None => self.y,
            AxisAlign::Min => anchor.y,
            AxisAlign::Max => anchor.y + anchor.height - self.height,
            AxisAlign::Center => anchor.y + (anchor.height - self.height) / 2.0,
        };
        Rectangle::new(x, y, self.width, self.height)
    }

    /// Grows the rectangle by per-edge amounts while preserving its
    /// center.
    pub fn pad(&self, padding: Sides) -> Rectangle {
        let center = self.center();
        let width = self.width + padding.left + padding.right;
        let height = self.height + padding.top + padding.bottom;
        Rectangle::new(
            center.x - width / 2.0,
            center.y - height / 2.0,
            width,
            height,
        )
    }

    /// Shrinks the rectangle by per-edge amounts while preserving its
    /// center; dimensions clamp at zero.
    pub fn inset(&self, inset: Sides) -> Rectangle {
        let center = self.center();
        let width = (self.width - inset.left - inset.right).max(0.0);
        let height = (self.height - inset.top - inset.bottom).max(0.0);
        Rectangle::new(
            center.x - width / 2.0,
            center.y - height / 2.0,
            width,
            height,
        )
    }

    /// The signed escape vector from this rectangle to `p`: zero for a
    /// point inside, otherwise the per-axis distance past the nearest
    /// edge.
    pub fn offset_of_point(&self, p: Vector2) -> Vector2 {
        let dx = if p.x < self.x {
            p.x - self.x
        } else if p.x > self.x + self.width {
            p.x - (self.x + self.width)
        } else {
            0.0
        };
        let dy = if p.y < self.y {
            p.y - self.y
        } else if p.y > self.y + self.height {
            p.y - (self.y + self.height)
        } else {
            0.0
        };
        Vector2::new(dx, dy)
    }
}

/// Repositions every rectangle along each requested axis so it aligns
/// within the union bounding box of the whole input set.
///
/// The alignment target is always derived from the union of all inputs,
/// never from any single reference rectangle. `AxisAlign::None` leaves an
/// axis untouched, so an all-`None` alignment returns the input unchanged.
/// An empty input yields an empty output.
pub fn align(rectangles: &[Rectangle], alignment: Alignment) -> Vec<Rectangle> {
    let Ok(bounds) = Rectangle::union(rectangles) else {
        return Vec::new();
    };

    rectangles
        .iter()
        .map(|r| r.align_to(&bounds, alignment))
        .collect()
}
