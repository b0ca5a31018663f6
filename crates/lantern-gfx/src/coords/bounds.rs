use super::{Rect, Vec2, Viewport};

/// Normalized rectangle in the unit square, origin top-left.
///
/// The UI tree stores one of these per element, interpreted relative to the
/// parent's absolute rectangle. Composing a local `Bounds` into a parent's
/// absolute `Bounds` is a plain linear interpolation of both corners
/// ([`map_into`](Self::map_into)); a root's absolute bounds are its local
/// bounds unchanged.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Bounds {
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl Bounds {
    #[inline]
    pub const fn new(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Self {
        Self { min_x, min_y, max_x, max_y }
    }

    /// The zero rectangle — the default for document nodes with no `rect`.
    #[inline]
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// The full unit square, i.e. the whole viewport.
    #[inline]
    pub const fn unit() -> Self {
        Self::new(0.0, 0.0, 1.0, 1.0)
    }

    #[inline]
    pub fn width(self) -> f32 {
        self.max_x - self.min_x
    }

    #[inline]
    pub fn height(self) -> f32 {
        self.max_y - self.min_y
    }

    /// Maps this local rectangle into `parent`'s absolute rectangle.
    ///
    /// Both corners are lerped independently, so `map_into(Bounds::unit())`
    /// is the identity and nesting composes associatively.
    #[inline]
    #[must_use]
    pub fn map_into(self, parent: Bounds) -> Bounds {
        let w = parent.width();
        let h = parent.height();
        Bounds::new(
            parent.min_x + w * self.min_x,
            parent.min_y + h * self.min_y,
            parent.min_x + w * self.max_x,
            parent.min_y + h * self.max_y,
        )
    }

    /// Closed containment: both edges are inclusive.
    ///
    /// Hit testing uses this, so a point exactly on the max edge still counts
    /// as inside. Pixel-space [`Rect::contains`] is half-open; the two are
    /// intentionally different.
    #[inline]
    pub fn contains(self, x: f32, y: f32) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }

    /// Symmetric grow by `dx`/`dy` in normalized units.
    #[inline]
    #[must_use]
    pub fn inflate(self, dx: f32, dy: f32) -> Bounds {
        Bounds::new(self.min_x - dx, self.min_y - dy, self.max_x + dx, self.max_y + dy)
    }

    /// Converts to a pixel rectangle for draw commands and scissor clips.
    #[inline]
    pub fn to_rect(self, viewport: Viewport) -> Rect {
        Rect::from_origin_size(
            Vec2::new(self.min_x * viewport.width, self.min_y * viewport.height),
            Vec2::new(self.width() * viewport.width, self.height() * viewport.height),
        )
    }

    /// Center point in normalized coordinates.
    #[inline]
    pub fn center(self) -> (f32, f32) {
        ((self.min_x + self.max_x) / 2.0, (self.min_y + self.max_y) / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn b(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Bounds {
        Bounds::new(min_x, min_y, max_x, max_y)
    }

    // ── map_into ──────────────────────────────────────────────────────────

    #[test]
    fn map_into_unit_is_identity() {
        let local = b(0.2, 0.3, 0.8, 0.9);
        assert_eq!(local.map_into(Bounds::unit()), local);
    }

    #[test]
    fn map_into_half_parent() {
        // Parent occupies the left half of the viewport; a child spanning the
        // parent's right half lands in the second quarter.
        let parent = b(0.0, 0.0, 0.5, 1.0);
        let child = b(0.5, 0.0, 1.0, 1.0);
        let abs = child.map_into(parent);
        assert_eq!(abs, b(0.25, 0.0, 0.5, 1.0));
    }

    #[test]
    fn map_into_composes() {
        let a = b(0.0, 0.0, 0.5, 0.5);
        let m = b(0.5, 0.5, 1.0, 1.0);
        let inner = b(0.0, 0.0, 1.0, 1.0);
        // inner fills m, m sits in the lower-right quadrant of a.
        let abs = inner.map_into(m).map_into(a);
        assert_eq!(abs, b(0.25, 0.25, 0.5, 0.5));
    }

    #[test]
    fn map_into_full_child_equals_parent() {
        let parent = b(0.1, 0.2, 0.7, 0.8);
        assert_eq!(Bounds::unit().map_into(parent), parent);
    }

    // ── contains ──────────────────────────────────────────────────────────

    #[test]
    fn contains_interior() {
        assert!(b(0.0, 0.0, 0.5, 0.5).contains(0.25, 0.25));
    }

    #[test]
    fn contains_edges_inclusive() {
        let r = b(0.1, 0.1, 0.4, 0.4);
        assert!(r.contains(0.1, 0.1));
        assert!(r.contains(0.4, 0.4));
    }

    #[test]
    fn contains_outside() {
        let r = b(0.1, 0.1, 0.4, 0.4);
        assert!(!r.contains(0.05, 0.2));
        assert!(!r.contains(0.2, 0.45));
    }

    // ── to_rect ───────────────────────────────────────────────────────────

    #[test]
    fn to_rect_scales_by_viewport() {
        let r = b(0.25, 0.5, 0.75, 1.0).to_rect(Viewport::new(800.0, 600.0));
        assert_eq!(r.origin, Vec2::new(200.0, 300.0));
        assert_eq!(r.size, Vec2::new(400.0, 300.0));
    }

    // ── inflate ───────────────────────────────────────────────────────────

    #[test]
    fn inflate_grows_both_ends() {
        let r = b(0.2, 0.2, 0.4, 0.4).inflate(0.05, 0.1);
        assert_eq!(r, b(0.15, 0.1, 0.45, 0.5));
    }
}
