//! Grid and tree topologies

use super::common::Builder;
use super::options::{GridOptions, TreeOptions};
use indexed_graph::{GraphResult, IndexedGraph};

/// Grid indexed by `(row, column)` with edges to the right and downward
pub fn grid<N, E, FN, FE>(
    options: &GridOptions,
    node_data: FN,
    edge_data: FE,
) -> GraphResult<IndexedGraph<(usize, usize), N, E>>
where
    FN: FnMut(&(usize, usize)) -> N,
    FE: FnMut(&(usize, usize), &(usize, usize)) -> E,
{
    let rows = options.rows();
    let columns = options.columns();

    let mut builder = Builder::new(options.order(), options.size(), node_data, edge_data);
    for row in 0..rows {
        for column in 0..columns {
            builder.node((row, column))?;
        }
    }
    for row in 0..rows {
        for column in 0..columns {
            if column + 1 < columns {
                builder.edge(&(row, column), &(row, column + 1))?;
            }
            if row + 1 < rows {
                builder.edge(&(row, column), &(row + 1, column))?;
            }
        }
    }
    Ok(builder.finish("grid"))
}

/// Complete tree numbered breadth-first from root `0`, edges parent -> child
///
/// Children of node `p` are `p * branching + 1 ..= p * branching + branching`.
pub fn tree<N, E, FN, FE>(
    options: &TreeOptions,
    node_data: FN,
    edge_data: FE,
) -> GraphResult<IndexedGraph<usize, N, E>>
where
    FN: FnMut(&usize) -> N,
    FE: FnMut(&usize, &usize) -> E,
{
    let order = options.order();
    let branching = options.branching();

    let mut builder = Builder::new(order, options.size(), node_data, edge_data);
    for i in 0..order {
        builder.node(i)?;
    }
    for parent in 0..options.internal_nodes() {
        for k in 1..=branching {
            builder.edge(&parent, &(parent * branching + k))?;
        }
    }
    Ok(builder.finish("tree"))
}
