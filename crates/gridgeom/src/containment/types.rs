//! Data types for the containment tree.
//!
//! Kept small and explicit so `build` reads top to bottom.

use crate::geom2::Point;

/// Synthetic id of the root node (the unbounded plane).
pub const ROOT_ID: u64 = 0;

/// Input polygon with a caller-assigned identity.
///
/// Ids are labels only; linking uses input position, so duplicate ids or an
/// id equal to `ROOT_ID` do not corrupt the tree. Id lookups return the first
/// match, and `ROOT_ID` always resolves to the root.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TaggedPolygon {
    pub id: u64,
    pub vertices: Vec<Point>,
}

impl TaggedPolygon {
    #[inline]
    pub fn new(id: u64, vertices: Vec<Point>) -> Self {
        Self { id, vertices }
    }
}

impl AsRef<[Point]> for TaggedPolygon {
    fn as_ref(&self) -> &[Point] {
        &self.vertices
    }
}

/// How a polygon is tested for lying inside a candidate parent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ProbeMode {
    /// Only the first vertex is probed.
    #[default]
    FirstVertex,
    /// Every vertex must probe inside.
    AllVertices,
}

/// Containment configuration.
#[derive(Clone, Copy, Debug, Default)]
pub struct ContainmentCfg {
    pub probe: ProbeMode,
}

/// Arena node. `parent` and `children` are arena indices.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContainmentNode {
    pub id: u64,
    /// `None` only for the root.
    pub parent: Option<usize>,
    /// Children in input order.
    pub children: Vec<usize>,
}

/// Containment forest stored as an arena.
///
/// Invariants:
/// - `nodes[0]` is the root with id `ROOT_ID`.
/// - `nodes[k + 1]` corresponds to input polygon `k`.
/// - Every non-root node has a parent and is reachable from the root.
///
/// Constructed only by `build_containment_tree[_with]`; serialize-only.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ContainmentTree {
    pub(super) nodes: Vec<ContainmentNode>,
}

/// Recursive export shape: `{ id, children }`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NestedNode {
    pub id: u64,
    pub children: Vec<NestedNode>,
}

impl ContainmentTree {
    #[inline]
    pub fn root(&self) -> &ContainmentNode {
        &self.nodes[0]
    }

    #[inline]
    pub fn node(&self, index: usize) -> Option<&ContainmentNode> {
        self.nodes.get(index)
    }

    /// The whole arena, root first.
    #[inline]
    pub fn nodes(&self) -> &[ContainmentNode] {
        &self.nodes
    }

    /// Number of polygon nodes (root excluded).
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Arena index of the first polygon node carrying `id`.
    pub fn index_of(&self, id: u64) -> Option<usize> {
        if id == ROOT_ID {
            return Some(0);
        }
        self.nodes
            .iter()
            .skip(1)
            .position(|n| n.id == id)
            .map(|k| k + 1)
    }

    /// Id of the immediate container of `id` (`ROOT_ID` for top-level shapes).
    pub fn parent_of(&self, id: u64) -> Option<u64> {
        let idx = self.index_of(id)?;
        self.nodes[idx].parent.map(|p| self.nodes[p].id)
    }

    /// Ids of the shapes directly inside `id`, in input order.
    pub fn children_of(&self, id: u64) -> Vec<u64> {
        match self.index_of(id) {
            Some(idx) => self.nodes[idx]
                .children
                .iter()
                .map(|&c| self.nodes[c].id)
                .collect(),
            None => Vec::new(),
        }
    }

    /// Nesting depth: 0 for the root, 1 for top-level shapes.
    pub fn depth_of(&self, id: u64) -> Option<usize> {
        let mut idx = self.index_of(id)?;
        let mut depth = 0;
        while let Some(p) = self.nodes[idx].parent {
            depth += 1;
            idx = p;
        }
        Some(depth)
    }

    /// Depth-first `(depth, arena index)` walk from the root, children in
    /// input order.
    pub fn preorder(&self) -> Vec<(usize, usize)> {
        let mut out = Vec::with_capacity(self.nodes.len());
        if self.nodes.is_empty() {
            return out;
        }
        let mut stack = vec![(0usize, 0usize)];
        while let Some((depth, idx)) = stack.pop() {
            out.push((depth, idx));
            for &c in self.nodes[idx].children.iter().rev() {
                stack.push((depth + 1, c));
            }
        }
        out
    }

    /// Recursive `{ id, children }` view, for renderers that want nesting.
    pub fn to_nested(&self) -> NestedNode {
        if self.nodes.is_empty() {
            return NestedNode {
                id: ROOT_ID,
                children: Vec::new(),
            };
        }
        self.nest(0)
    }

    fn nest(&self, idx: usize) -> NestedNode {
        let node = &self.nodes[idx];
        NestedNode {
            id: node.id,
            children: node.children.iter().map(|&c| self.nest(c)).collect(),
        }
    }
}
