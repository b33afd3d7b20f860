//! Generator options
//!
//! Every options type validates its arguments in `new`, so a generator never
//! starts building from out-of-range values.

use indexed_graph::{GraphError, GraphResult};

fn positive(name: &str, value: usize) -> GraphResult<usize> {
    if value == 0 {
        return Err(GraphError::InvalidConfiguration(format!(
            "{} must be positive",
            name
        )));
    }
    Ok(value)
}

fn overflow(what: &str) -> GraphError {
    GraphError::InvalidConfiguration(format!("{} overflows usize", what))
}

/// Path of `length` nodes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineOptions {
    length: usize,
}

impl LineOptions {
    pub fn new(length: usize) -> GraphResult<Self> {
        Ok(Self {
            length: positive("line length", length)?,
        })
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// Number of edges
    pub fn size(&self) -> usize {
        self.length - 1
    }
}

/// Cycle of `length` nodes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RingOptions {
    length: usize,
}

impl RingOptions {
    pub fn new(length: usize) -> GraphResult<Self> {
        Ok(Self {
            length: positive("ring length", length)?,
        })
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// Number of edges
    pub fn size(&self) -> usize {
        self.length
    }
}

/// Center node with `arms` leaves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarOptions {
    arms: usize,
}

impl StarOptions {
    pub fn new(arms: usize) -> GraphResult<Self> {
        let arms = positive("star arm count", arms)?;
        arms.checked_add(1).ok_or_else(|| overflow("star size"))?;
        Ok(Self { arms })
    }

    pub fn arms(&self) -> usize {
        self.arms
    }

    pub fn order(&self) -> usize {
        self.arms + 1
    }

    /// Number of edges
    pub fn size(&self) -> usize {
        self.arms
    }
}

/// Rectangular lattice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridOptions {
    rows: usize,
    columns: usize,
    size: usize,
}

impl GridOptions {
    pub fn new(rows: usize, columns: usize) -> GraphResult<Self> {
        let rows = positive("grid rows", rows)?;
        let columns = positive("grid columns", columns)?;
        rows.checked_mul(columns).ok_or_else(|| overflow("grid cell count"))?;
        let size = rows
            .checked_mul(columns - 1)
            .zip(columns.checked_mul(rows - 1))
            .and_then(|(across, down)| across.checked_add(down))
            .ok_or_else(|| overflow("grid edge count"))?;
        Ok(Self {
            rows,
            columns,
            size,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn order(&self) -> usize {
        self.rows * self.columns
    }

    /// Number of edges
    pub fn size(&self) -> usize {
        self.size
    }
}

/// Complete `branching`-ary tree with `depth` levels below the root
///
/// A depth of zero is a lone root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeOptions {
    depth: usize,
    branching: usize,
    /// Nodes that have children
    internal: usize,
}

impl TreeOptions {
    pub fn new(depth: usize, branching: usize) -> GraphResult<Self> {
        let branching = positive("tree branching", branching)?;

        let mut internal = 0usize;
        let mut level = 1usize;
        for _ in 0..depth {
            internal = internal.checked_add(level).ok_or_else(|| overflow("tree size"))?;
            level = level.checked_mul(branching).ok_or_else(|| overflow("tree size"))?;
        }
        internal
            .checked_mul(branching)
            .and_then(|children| children.checked_add(1))
            .ok_or_else(|| overflow("tree size"))?;

        Ok(Self {
            depth,
            branching,
            internal,
        })
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn branching(&self) -> usize {
        self.branching
    }

    pub(crate) fn internal_nodes(&self) -> usize {
        self.internal
    }

    pub fn order(&self) -> usize {
        self.internal * self.branching + 1
    }

    /// Number of edges
    pub fn size(&self) -> usize {
        self.internal * self.branching
    }
}

/// Concentric rings joined along meridians around a center node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiskOptions {
    rings: usize,
    meridians: usize,
    size: usize,
}

impl DiskOptions {
    pub fn new(rings: usize, meridians: usize) -> GraphResult<Self> {
        let rings = positive("disk ring count", rings)?;
        let meridians = positive("disk meridian count", meridians)?;
        let cells = rings
            .checked_mul(meridians)
            .ok_or_else(|| overflow("disk size"))?;
        cells.checked_add(1).ok_or_else(|| overflow("disk size"))?;
        // spokes, outward meridian steps, then ring edges
        let size = meridians
            .checked_add((rings - 1) * meridians)
            .and_then(|radial| radial.checked_add(cells))
            .ok_or_else(|| overflow("disk edge count"))?;
        Ok(Self {
            rings,
            meridians,
            size,
        })
    }

    pub fn rings(&self) -> usize {
        self.rings
    }

    pub fn meridians(&self) -> usize {
        self.meridians
    }

    pub fn order(&self) -> usize {
        1 + self.rings * self.meridians
    }

    /// Number of edges
    pub fn size(&self) -> usize {
        self.size
    }

    /// Index of the node on `ring` (0 = innermost) and `meridian`
    pub fn position(&self, ring: usize, meridian: usize) -> usize {
        1 + ring * self.meridians + meridian
    }
}

/// Two node sets, every left node linked to every right node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BipartiteOptions {
    left: usize,
    right: usize,
}

impl BipartiteOptions {
    pub fn new(left: usize, right: usize) -> GraphResult<Self> {
        let left = positive("left part size", left)?;
        let right = positive("right part size", right)?;
        left.checked_add(right).ok_or_else(|| overflow("bipartite size"))?;
        left.checked_mul(right)
            .ok_or_else(|| overflow("bipartite edge count"))?;
        Ok(Self { left, right })
    }

    pub fn left(&self) -> usize {
        self.left
    }

    pub fn right(&self) -> usize {
        self.right
    }

    pub fn order(&self) -> usize {
        self.left + self.right
    }

    /// Number of edges
    pub fn size(&self) -> usize {
        self.left * self.right
    }
}

/// Ordered node sets, each linked to every later set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultipartiteOptions {
    parts: Vec<usize>,
    order: usize,
    size: usize,
}

impl MultipartiteOptions {
    pub fn new(parts: Vec<usize>) -> GraphResult<Self> {
        if parts.is_empty() {
            return Err(GraphError::InvalidConfiguration(
                "multipartite graph needs at least one part".to_string(),
            ));
        }
        let mut order = 0usize;
        for &part in &parts {
            positive("part size", part)?;
            order = order
                .checked_add(part)
                .ok_or_else(|| overflow("multipartite size"))?;
        }

        // every node links to all nodes of the parts after its own
        let mut size = 0usize;
        let mut later = order;
        for &part in &parts {
            later -= part;
            size = part
                .checked_mul(later)
                .and_then(|edges| size.checked_add(edges))
                .ok_or_else(|| overflow("multipartite edge count"))?;
        }
        Ok(Self { parts, order, size })
    }

    pub fn parts(&self) -> &[usize] {
        &self.parts
    }

    pub fn order(&self) -> usize {
        self.order
    }

    /// Number of edges
    pub fn size(&self) -> usize {
        self.size
    }
}

/// Every ordered pair of distinct nodes linked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompleteOptions {
    order: usize,
}

impl CompleteOptions {
    pub fn new(order: usize) -> GraphResult<Self> {
        let order = positive("complete graph order", order)?;
        order
            .checked_mul(order - 1)
            .ok_or_else(|| overflow("complete graph edge count"))?;
        Ok(Self { order })
    }

    pub fn order(&self) -> usize {
        self.order
    }

    /// Number of edges
    pub fn size(&self) -> usize {
        self.order * (self.order - 1)
    }
}
