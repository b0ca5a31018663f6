use lantern_gfx::coords::Bounds;

use crate::element::ElementRef;

/// Lays children out contiguously along the horizontal axis.
///
/// See [`distribute`] for the arithmetic. Recomputation is not automatic:
/// after adding or removing children the caller must invoke
/// [`ElementRef::update_child_dimensions`] itself (the factory does so once
/// after construction).
pub struct HorizontalLayout {
    /// Gap between adjacent items, normalized units.
    pub gap: f32,
}

impl HorizontalLayout {
    pub fn new(gap: f32) -> Self {
        Self { gap }
    }
}

/// Lays children out contiguously along the vertical axis.
pub struct VerticalLayout {
    /// Gap between adjacent items, normalized units.
    pub gap: f32,
}

impl VerticalLayout {
    pub fn new(gap: f32) -> Self {
        Self { gap }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub(crate) enum Axis {
    Horizontal,
    Vertical,
}

/// Assigns each active child an equal slice of the unit interval along
/// `axis`, separated by `gap`, in insertion order; the cross axis is forced
/// to the full [0,1] extent.
///
/// With `n` active children, `item = (1 − gap·max(n−1, 0)) / n` and child `i`
/// spans `[i·(item + gap), i·(item + gap) + item]`. Inactive children keep
/// their bounds. `n == 0` is a no-op.
pub(crate) fn distribute(children: &[ElementRef], gap: f32, axis: Axis) {
    let active: Vec<&ElementRef> = children.iter().filter(|c| c.is_active()).collect();
    let count = active.len();
    if count == 0 {
        return;
    }

    let total_gap = if count > 1 { gap * (count - 1) as f32 } else { 0.0 };
    let item = (1.0 - total_gap) / count as f32;

    for (i, child) in active.into_iter().enumerate() {
        let start = i as f32 * (item + gap);
        let end = start + item;
        let bounds = match axis {
            Axis::Horizontal => Bounds::new(start, 0.0, end, 1.0),
            Axis::Vertical => Bounds::new(0.0, start, 1.0, end),
        };
        child.set_bounds(bounds);
    }
}
