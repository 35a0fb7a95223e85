use crate::coords::Vec2;
use crate::paint::Color;

use super::{DrawCmd, LineCmd, PolygonCmd};

/// Recorded draw stream for a frame.
///
/// Commands are painted in the order they were pushed: a later command covers
/// an earlier one where they overlap. Callers that need back-to-front order
/// sort before pushing.
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawCmd>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded commands. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Commands in paint order.
    #[inline]
    pub fn items(&self) -> &[DrawCmd] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn push(&mut self, cmd: DrawCmd) {
        self.items.push(cmd);
    }

    /// Pushes a filled polygon. Outlines with fewer than three points are dropped.
    pub fn push_polygon(&mut self, points: impl IntoIterator<Item = Vec2>, color: Color) {
        let points: Vec<Vec2> = points.into_iter().collect();
        if points.len() < 3 {
            return;
        }
        self.push(DrawCmd::Polygon(PolygonCmd { points, color }));
    }

    pub fn push_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color) {
        self.push(DrawCmd::Line(LineCmd { from, to, width, color }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tri(x: f32) -> [Vec2; 3] {
        [Vec2::new(x, 0.0), Vec2::new(x + 1.0, 0.0), Vec2::new(x, 1.0)]
    }

    #[test]
    fn commands_keep_push_order() {
        let mut list = DrawList::new();
        list.push_polygon(tri(0.0), Color::BLACK);
        list.push_line(Vec2::zero(), Vec2::new(5.0, 5.0), 1.0, Color::BLACK);
        list.push_polygon(tri(9.0), Color::BLACK);

        let kinds: Vec<&str> = list
            .items()
            .iter()
            .map(|c| match c {
                DrawCmd::Polygon(_) => "poly",
                DrawCmd::Line(_) => "line",
            })
            .collect();
        assert_eq!(kinds, ["poly", "line", "poly"]);

        let DrawCmd::Polygon(last) = &list.items()[2] else { panic!("expected polygon") };
        assert_eq!(last.points[0], Vec2::new(9.0, 0.0));
    }

    #[test]
    fn degenerate_polygons_are_dropped() {
        let mut list = DrawList::new();
        list.push_polygon([Vec2::zero(), Vec2::new(1.0, 1.0)], Color::BLACK);
        assert!(list.is_empty());
    }

    #[test]
    fn clear_empties_the_list() {
        let mut list = DrawList::new();
        list.push_polygon(tri(0.0), Color::BLACK);
        list.clear();
        assert_eq!(list.len(), 0);
    }
}
