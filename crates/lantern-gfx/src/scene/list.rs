use crate::coords::Rect;

use super::DrawCmd;

/// A draw command plus the scissor rect it was recorded under.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub cmd: DrawCmd,
    /// Scissor rect in pixels. `None` = unclipped.
    pub clip: Option<Rect>,
}

/// Recorded draw stream for a frame.
///
/// # Clipping
///
/// [`push_clip`](Self::push_clip) / [`pop_clip`](Self::pop_clip) scope
/// commands to a scissor rect. Nested clips are intersected with their
/// parent, so a scrollable container inside another clipped region stays
/// inside both.
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
    /// Stack of active scissor rects; the top is the current effective clip,
    /// already intersected with all parents.
    clip_stack: Vec<Rect>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items and the clip stack, keeping capacity.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.clip_stack.clear();
    }

    /// Items in insertion (= paint) order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    /// Records a command under the current clip.
    #[inline]
    pub fn push(&mut self, cmd: DrawCmd) {
        self.items.push(DrawItem {
            cmd,
            clip: self.clip_stack.last().copied(),
        });
    }

    /// Begins a scissor region. Must be balanced with [`pop_clip`](Self::pop_clip).
    pub fn push_clip(&mut self, rect: Rect) {
        let effective = match self.clip_stack.last() {
            None => rect,
            // No overlap with the parent clip collapses to a zero-area rect
            // so the renderer skips those draws entirely.
            Some(&parent) => parent.intersect(rect).unwrap_or(Rect::new(0.0, 0.0, 0.0, 0.0)),
        };
        self.clip_stack.push(effective);
    }

    /// Ends the most recent scissor region.
    ///
    /// # Panics
    /// Panics (debug only) if called without a matching `push_clip`.
    #[inline]
    pub fn pop_clip(&mut self) {
        debug_assert!(!self.clip_stack.is_empty(), "pop_clip called without matching push_clip");
        self.clip_stack.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::Color;
    use crate::resources::{MeshId, ShaderId};
    use crate::scene::RectCmd;

    fn rect_cmd(x: f32, y: f32) -> DrawCmd {
        DrawCmd::Rect(RectCmd {
            shader: ShaderId(0),
            mesh: MeshId(0),
            rect: Rect::new(x, y, 10.0, 10.0),
            color: Color::white(),
        })
    }

    #[test]
    fn push_outside_clip_is_unclipped() {
        let mut list = DrawList::new();
        list.push(rect_cmd(0.0, 0.0));
        assert_eq!(list.items()[0].clip, None);
    }

    #[test]
    fn push_inside_clip_records_scissor() {
        let mut list = DrawList::new();
        list.push_clip(Rect::new(0.0, 0.0, 50.0, 50.0));
        list.push(rect_cmd(0.0, 0.0));
        list.pop_clip();
        list.push(rect_cmd(1.0, 1.0));

        assert_eq!(list.items()[0].clip, Some(Rect::new(0.0, 0.0, 50.0, 50.0)));
        assert_eq!(list.items()[1].clip, None);
    }

    #[test]
    fn nested_clips_intersect() {
        let mut list = DrawList::new();
        list.push_clip(Rect::new(0.0, 0.0, 50.0, 50.0));
        list.push_clip(Rect::new(25.0, 25.0, 50.0, 50.0));
        list.push(rect_cmd(0.0, 0.0));
        list.pop_clip();
        list.pop_clip();

        assert_eq!(list.items()[0].clip, Some(Rect::new(25.0, 25.0, 25.0, 25.0)));
    }

    #[test]
    fn disjoint_nested_clip_collapses_to_zero_area() {
        let mut list = DrawList::new();
        list.push_clip(Rect::new(0.0, 0.0, 10.0, 10.0));
        list.push_clip(Rect::new(100.0, 100.0, 10.0, 10.0));
        list.push(rect_cmd(0.0, 0.0));

        let clip = list.items()[0].clip.unwrap();
        assert!(clip.is_empty());
    }

    #[test]
    fn clear_resets_items_and_clips() {
        let mut list = DrawList::new();
        list.push_clip(Rect::new(0.0, 0.0, 10.0, 10.0));
        list.push(rect_cmd(0.0, 0.0));
        list.clear();
        assert!(list.items().is_empty());

        // A push after clear starts from an empty clip stack again.
        list.push(rect_cmd(0.0, 0.0));
        assert_eq!(list.items()[0].clip, None);
    }
}
