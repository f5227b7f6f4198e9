//! JSON scene input: the snapshot of points, polygons, and rectangles a
//! command operates on.
//!
//! ```json
//! {
//!   "points": [[0, 0], [2, 0], [1, 3]],
//!   "polygons": [{ "id": 1, "name": "outer", "vertices": [[0, 0], [10, 0], [10, 10]] }],
//!   "rectangles": [{ "x1": 0, "y1": 0, "x2": 2, "y2": 2 }]
//! }
//! ```
//!
//! Every section is optional. Rectangles may list corners in any order; they
//! are normalized on load.

use anyhow::{Context, Result};
use gridgeom::api::{Point, Rect, ShapeKind, TaggedPolygon};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    #[serde(default)]
    pub points: Vec<Point>,
    #[serde(default)]
    pub polygons: Vec<SceneShape>,
    #[serde(default)]
    pub rectangles: Vec<Rect>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SceneShape {
    pub id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub vertices: Vec<Point>,
}

impl SceneShape {
    /// Caller-facing label: explicit name, else "Polygon <position>".
    pub fn label(&self, position: usize) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| format!("Polygon {}", position + 1))
    }

    #[inline]
    pub fn kind(&self) -> ShapeKind {
        ShapeKind::from_vertex_count(self.vertices.len())
    }
}

impl Scene {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read(path).with_context(|| format!("reading scene {}", path.display()))?;
        let scene = Self::from_slice(&raw)
            .with_context(|| format!("parsing scene {}", path.display()))?;
        tracing::debug!(
            points = scene.points.len(),
            polygons = scene.polygons.len(),
            rectangles = scene.rectangles.len(),
            "scene loaded"
        );
        Ok(scene)
    }

    pub fn from_slice(raw: &[u8]) -> Result<Self> {
        let mut scene: Scene = serde_json::from_slice(raw)?;
        for r in &mut scene.rectangles {
            *r = r.normalized();
        }
        Ok(scene)
    }

    pub fn tagged_polygons(&self) -> Vec<TaggedPolygon> {
        self.polygons
            .iter()
            .map(|s| TaggedPolygon::new(s.id, s.vertices.clone()))
            .collect()
    }
}
