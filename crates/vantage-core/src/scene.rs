//! Static scene data: figures made of points, edges and quad walls.
//!
//! Scene JSON maps figure names to either a bare point list (box topology is
//! assumed) or a record with explicit `points` / `edges` / `walls`. Figure
//! order in the file is kept: it decides palette colors.

use serde::Deserialize;
use serde_json::Value;

use crate::error::{SceneError, SceneResult, Topology};
use crate::math::Vec3;

/// Edges of the eight-point box used when a figure gives only points.
pub const BOX_EDGES: [[usize; 2]; 12] = [
    [0, 1], [1, 2], [2, 3], [3, 0],
    [4, 5], [5, 6], [6, 7], [7, 4],
    [0, 4], [1, 5], [2, 6], [3, 7],
];

/// Walls of the eight-point box: bottom, top, right, left, front, back.
pub const BOX_WALLS: [[usize; 4]; 6] = [
    [0, 1, 5, 4],
    [2, 3, 7, 6],
    [1, 2, 6, 5],
    [3, 0, 4, 7],
    [4, 5, 6, 7],
    [0, 1, 2, 3],
];

/// Ordered quad `p1-p2-p3-p4`; consecutive points share an edge, `p1-p3` is the diagonal.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Quad(pub [Vec3; 4]);

impl Quad {
    #[inline]
    pub const fn new(p1: Vec3, p2: Vec3, p3: Vec3, p4: Vec3) -> Self {
        Self([p1, p2, p3, p4])
    }

    #[inline]
    pub fn points(&self) -> &[Vec3; 4] {
        &self.0
    }

    #[inline]
    pub fn centroid(&self) -> Vec3 {
        Vec3::centroid(&self.0)
    }

    /// Surface area, split into two triangles along the `p1-p3` diagonal.
    pub fn area(&self) -> f64 {
        let [p1, p2, p3, p4] = self.0;
        let a = (p2 - p1).cross(p3 - p1).length();
        let b = (p3 - p1).cross(p4 - p1).length();
        0.5 * (a + b)
    }

    /// Axis-aligned bounds as `(min, max)`.
    pub fn bounds(&self) -> (Vec3, Vec3) {
        let first = self.0[0];
        self.0.iter().skip(1).fold((first, first), |(lo, hi), p| {
            (
                Vec3::new(lo.x.min(p.x), lo.y.min(p.y), lo.z.min(p.z)),
                Vec3::new(hi.x.max(p.x), hi.y.max(p.y), hi.z.max(p.z)),
            )
        })
    }
}

/// Named group of points plus edge and wall topology. Never mutated after load.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    name: String,
    points: Vec<Vec3>,
    edges: Vec<[usize; 2]>,
    walls: Vec<[usize; 4]>,
}

impl Figure {
    /// Builds a figure, rejecting any edge or wall index outside `points`.
    pub fn new(
        name: impl Into<String>,
        points: Vec<Vec3>,
        edges: Vec<[usize; 2]>,
        walls: Vec<[usize; 4]>,
    ) -> SceneResult<Self> {
        let name = name.into();
        check_indices(&name, Topology::Edge, points.len(), edges.iter().map(|e| e.as_slice()))?;
        check_indices(&name, Topology::Wall, points.len(), walls.iter().map(|w| w.as_slice()))?;
        Ok(Self { name, points, edges, walls })
    }

    /// Figure using [`BOX_EDGES`] / [`BOX_WALLS`]; needs at least eight points.
    pub fn with_box_topology(name: impl Into<String>, points: Vec<Vec3>) -> SceneResult<Self> {
        Self::new(name, points, BOX_EDGES.to_vec(), BOX_WALLS.to_vec())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    pub fn edges(&self) -> &[[usize; 2]] {
        &self.edges
    }

    pub fn walls(&self) -> &[[usize; 4]] {
        &self.walls
    }

    /// Walls resolved to point coordinates.
    pub fn wall_quads(&self) -> impl Iterator<Item = Quad> + '_ {
        self.walls
            .iter()
            .map(|&[a, b, c, d]| Quad::new(self.points[a], self.points[b], self.points[c], self.points[d]))
    }

    /// Edges resolved to point coordinates.
    pub fn edge_segments(&self) -> impl Iterator<Item = (Vec3, Vec3)> + '_ {
        self.edges
            .iter()
            .map(|&[a, b]| (self.points[a], self.points[b]))
    }
}

fn check_indices<'a>(
    figure: &str,
    kind: Topology,
    count: usize,
    lists: impl Iterator<Item = &'a [usize]>,
) -> SceneResult<()> {
    for (position, list) in lists.enumerate() {
        if let Some(&index) = list.iter().find(|&&i| i >= count) {
            return Err(SceneError::IndexOutOfRange {
                figure: figure.to_string(),
                kind,
                position,
                index,
                count,
            });
        }
    }
    Ok(())
}

/// Ordered collection of figures.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    figures: Vec<Figure>,
}

impl Scene {
    pub fn new(figures: Vec<Figure>) -> Self {
        Self { figures }
    }

    pub fn figures(&self) -> &[Figure] {
        &self.figures
    }

    pub fn is_empty(&self) -> bool {
        self.figures.is_empty()
    }

    pub fn wall_count(&self) -> usize {
        self.figures.iter().map(|f| f.walls().len()).sum()
    }

    /// Parses scene JSON text.
    pub fn from_json_str(src: &str) -> SceneResult<Self> {
        let value: Value = serde_json::from_str(src)?;
        Self::from_json_value(value)
    }

    /// Builds a scene from an already-parsed JSON document.
    pub fn from_json_value(value: Value) -> SceneResult<Self> {
        let Value::Object(map) = value else {
            return Err(SceneError::NotAnObject);
        };

        let mut figures = Vec::with_capacity(map.len());
        for (name, def) in map {
            let def: FigureDef = serde_json::from_value(def).map_err(|source| SceneError::Figure {
                figure: name.clone(),
                source,
            })?;
            figures.push(def.into_figure(name)?);
        }

        log::debug!("parsed scene with {} figure(s)", figures.len());
        Ok(Self { figures })
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FigureDef {
    Points(Vec<Vec3>),
    Record {
        points: Vec<Vec3>,
        #[serde(default)]
        edges: Option<Vec<Vec<usize>>>,
        #[serde(default)]
        walls: Option<Vec<Vec<usize>>>,
    },
}

impl FigureDef {
    fn into_figure(self, name: String) -> SceneResult<Figure> {
        match self {
            FigureDef::Points(points) => Figure::with_box_topology(name, points),
            FigureDef::Record { points, edges, walls } => {
                let edges = match edges {
                    Some(raw) => fixed_arity::<2>(&name, Topology::Edge, raw)?,
                    None => BOX_EDGES.to_vec(),
                };
                let walls = match walls {
                    Some(raw) => fixed_arity::<4>(&name, Topology::Wall, raw)?,
                    None => BOX_WALLS.to_vec(),
                };
                Figure::new(name, points, edges, walls)
            }
        }
    }
}

fn fixed_arity<const N: usize>(
    figure: &str,
    kind: Topology,
    raw: Vec<Vec<usize>>,
) -> SceneResult<Vec<[usize; N]>> {
    raw.into_iter()
        .enumerate()
        .map(|(position, list)| {
            let len = list.len();
            <[usize; N]>::try_from(list).map_err(|_| SceneError::Arity {
                figure: figure.to_string(),
                kind,
                position,
                len,
                expected: N,
            })
        })
        .collect()
}
