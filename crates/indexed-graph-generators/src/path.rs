//! Line and ring topologies

use super::common::Builder;
use super::options::{LineOptions, RingOptions};
use indexed_graph::{GraphResult, IndexedGraph};

/// Nodes `0..length`, edges `i -> i + 1`
pub fn line<N, E, FN, FE>(
    options: &LineOptions,
    node_data: FN,
    edge_data: FE,
) -> GraphResult<IndexedGraph<usize, N, E>>
where
    FN: FnMut(&usize) -> N,
    FE: FnMut(&usize, &usize) -> E,
{
    let n = options.length();
    let mut builder = Builder::new(n, options.size(), node_data, edge_data);
    chain(&mut builder, n)?;
    Ok(builder.finish("line"))
}

/// A line closed by `length - 1 -> 0`
///
/// A ring of one node is a single self loop.
pub fn ring<N, E, FN, FE>(
    options: &RingOptions,
    node_data: FN,
    edge_data: FE,
) -> GraphResult<IndexedGraph<usize, N, E>>
where
    FN: FnMut(&usize) -> N,
    FE: FnMut(&usize, &usize) -> E,
{
    let n = options.length();
    let mut builder = Builder::new(n, options.size(), node_data, edge_data);
    chain(&mut builder, n)?;
    builder.edge(&(n - 1), &0)?;
    Ok(builder.finish("ring"))
}

fn chain<N, E, FN, FE>(builder: &mut Builder<usize, N, E, FN, FE>, n: usize) -> GraphResult<()>
where
    FN: FnMut(&usize) -> N,
    FE: FnMut(&usize, &usize) -> E,
{
    for i in 0..n {
        builder.node(i)?;
    }
    for i in 1..n {
        builder.edge(&(i - 1), &i)?;
    }
    Ok(())
}
