//! Recursive quad subdivision.
//!
//! Each level splits a quad into four children around the midpoint of its
//! `p1-p3` diagonal, so a wall at level `n` becomes `4^n` patches. Patches are
//! shaded flat, so the level sets the shading granularity.

use crate::math::Vec3;
use crate::scene::{Quad, Scene};

/// Deepest supported level: `4^8` patches per wall.
pub const MAX_LEVEL: u32 = 8;

/// Splits `quad` recursively `level` times. Level 0 yields the quad itself.
/// Levels above [`MAX_LEVEL`] are treated as `MAX_LEVEL`.
pub fn subdivide(quad: Quad, level: u32) -> Vec<Quad> {
    let level = level.min(MAX_LEVEL);
    let mut out = Vec::with_capacity(4usize.pow(level));
    subdivide_into(quad, level, &mut out);
    out
}

fn subdivide_into(quad: Quad, level: u32, out: &mut Vec<Quad>) {
    if level == 0 {
        out.push(quad);
        return;
    }
    for child in split(quad) {
        subdivide_into(child, level - 1, out);
    }
}

/// One subdivision step. Each child keeps one original corner, its two
/// adjacent edge midpoints, and the diagonal midpoint.
fn split(quad: Quad) -> [Quad; 4] {
    let [p1, p2, p3, p4] = quad.0;

    let m12 = p1.midpoint(p2);
    let m23 = p2.midpoint(p3);
    let m34 = p3.midpoint(p4);
    let m41 = p4.midpoint(p1);
    let c: Vec3 = p1.midpoint(p3);

    [
        Quad::new(p1, m12, c, m41),
        Quad::new(m12, p2, m23, c),
        Quad::new(c, m23, p3, m34),
        Quad::new(m41, c, m34, p4),
    ]
}

/// Quad tagged with the index of the figure it came from.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TaggedQuad {
    pub figure: usize,
    pub quad: Quad,
}

/// Subdivided walls of every figure, cached for one subdivision level.
#[derive(Debug, Clone, Default)]
pub struct SubdividedWalls {
    level: Option<u32>,
    quads: Vec<TaggedQuad>,
}

impl SubdividedWalls {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the set for `scene` at `level`.
    pub fn build(scene: &Scene, level: u32) -> Self {
        let mut walls = Self::new();
        walls.rebuild(scene, level);
        walls
    }

    /// Level the cache currently holds, `None` before the first build.
    pub fn level(&self) -> Option<u32> {
        self.level
    }

    pub fn quads(&self) -> &[TaggedQuad] {
        &self.quads
    }

    pub fn len(&self) -> usize {
        self.quads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quads.is_empty()
    }

    /// Recomputes the set only if `level` differs from the cached one.
    /// Returns `true` when a rebuild happened.
    pub fn rebuild_if_needed(&mut self, scene: &Scene, level: u32) -> bool {
        if self.level == Some(level.min(MAX_LEVEL)) {
            return false;
        }
        self.rebuild(scene, level);
        true
    }

    /// Unconditionally recomputes the set. `level` is capped at [`MAX_LEVEL`].
    pub fn rebuild(&mut self, scene: &Scene, level: u32) {
        let level = level.min(MAX_LEVEL);
        self.quads.clear();
        self.quads.reserve(scene.wall_count() * 4usize.pow(level));

        for (figure, fig) in scene.figures().iter().enumerate() {
            for wall in fig.wall_quads() {
                self.quads
                    .extend(subdivide(wall, level).into_iter().map(|quad| TaggedQuad { figure, quad }));
            }
        }

        self.level = Some(level);
        log::debug!("subdivided walls at level {level}: {} patches", self.quads.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Figure;
    use approx::assert_relative_eq;

    fn square() -> Quad {
        Quad::new(
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(8.0, 0.0, 0.0),
            Vec3::new(8.0, 8.0, 0.0),
            Vec3::new(0.0, 8.0, 0.0),
        )
    }

    fn slanted() -> Quad {
        // Planar but not axis aligned, and not a rectangle.
        Quad::new(
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(10.0, 0.0, 5.0),
            Vec3::new(12.0, 6.0, 6.0),
            Vec3::new(1.0, 4.0, 0.5),
        )
    }

    fn cube_scene() -> Scene {
        let pts = vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(1.0, 1.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(1.0, 0.0, 1.0),
            Vec3::new(1.0, 1.0, 1.0),
            Vec3::new(0.0, 1.0, 1.0),
        ];
        Scene::new(vec![
            Figure::with_box_topology("a", pts.clone()).unwrap(),
            Figure::with_box_topology("b", pts).unwrap(),
        ])
    }

    // ── subdivide ─────────────────────────────────────────────────────────

    #[test]
    fn level_zero_is_passthrough() {
        assert_eq!(subdivide(square(), 0), vec![square()]);
    }

    #[test]
    fn count_is_four_to_the_level() {
        for level in 0..=5 {
            assert_eq!(subdivide(slanted(), level).len(), 4usize.pow(level));
        }
    }

    #[test]
    fn area_is_preserved() {
        for quad in [square(), slanted()] {
            let total = quad.area();
            for level in 0..=4 {
                let sum: f64 = subdivide(quad, level).iter().map(Quad::area).sum();
                assert_relative_eq!(sum, total, max_relative = 1e-9);
            }
        }
    }

    #[test]
    fn first_split_layout() {
        let children = subdivide(square(), 1);
        assert_eq!(
            children[0],
            Quad::new(
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(4.0, 0.0, 0.0),
                Vec3::new(4.0, 4.0, 0.0),
                Vec3::new(0.0, 4.0, 0.0),
            )
        );
        assert_eq!(children[2].points()[2], Vec3::new(8.0, 8.0, 0.0));
        // Every child shares the diagonal midpoint.
        for child in &children {
            assert!(child.points().contains(&Vec3::new(4.0, 4.0, 0.0)));
        }
    }

    #[test]
    fn level_two_to_three_keeps_bounds() {
        let quad = slanted();
        let bounds_of = |quads: &[Quad]| {
            quads.iter().map(Quad::bounds).fold(quads[0].bounds(), |(lo, hi), (a, b)| {
                (
                    Vec3::new(lo.x.min(a.x), lo.y.min(a.y), lo.z.min(a.z)),
                    Vec3::new(hi.x.max(b.x), hi.y.max(b.y), hi.z.max(b.z)),
                )
            })
        };

        let two = subdivide(quad, 2);
        let three = subdivide(quad, 3);
        assert_eq!(two.len(), 16);
        assert_eq!(three.len(), 64);
        assert_eq!(bounds_of(&two), quad.bounds());
        assert_eq!(bounds_of(&three), quad.bounds());
    }

    // ── cache ─────────────────────────────────────────────────────────────

    #[test]
    fn build_tags_each_patch_with_its_figure() {
        let walls = SubdividedWalls::build(&cube_scene(), 1);
        assert_eq!(walls.len(), 2 * 6 * 4);
        assert!(walls.quads()[..24].iter().all(|q| q.figure == 0));
        assert!(walls.quads()[24..].iter().all(|q| q.figure == 1));
    }

    #[test]
    fn deep_levels_are_capped() {
        assert_eq!(subdivide(square(), 40).len(), 4usize.pow(MAX_LEVEL));

        let [p1, p2, p3, p4] = square().0;
        let wall = Figure::new("w", vec![p1, p2, p3, p4], vec![], vec![[0, 1, 2, 3]]).unwrap();
        let scene = Scene::new(vec![wall]);
        let mut walls = SubdividedWalls::build(&scene, u32::MAX);
        assert_eq!(walls.level(), Some(MAX_LEVEL));
        assert!(!walls.rebuild_if_needed(&scene, 1000));
    }

    #[test]
    fn rebuild_only_when_level_changes() {
        let scene = cube_scene();
        let mut walls = SubdividedWalls::new();
        assert_eq!(walls.level(), None);

        assert!(walls.rebuild_if_needed(&scene, 2));
        assert_eq!(walls.len(), 2 * 6 * 16);
        assert!(!walls.rebuild_if_needed(&scene, 2));

        assert!(walls.rebuild_if_needed(&scene, 3));
        assert_eq!(walls.len(), 2 * 6 * 64);
        assert_eq!(walls.level(), Some(3));
    }

    #[test]
    fn empty_scene_builds_nothing() {
        let walls = SubdividedWalls::build(&Scene::default(), 4);
        assert!(walls.is_empty());
    }
}
