//! Bipartite, multipartite and complete topologies

use super::common::Builder;
use super::options::{BipartiteOptions, CompleteOptions, MultipartiteOptions};
use indexed_graph::{GraphResult, IndexedGraph};

/// Left nodes `0..left`, right nodes `left..left + right`
pub fn bipartite<N, E, FN, FE>(
    options: &BipartiteOptions,
    node_data: FN,
    edge_data: FE,
) -> GraphResult<IndexedGraph<usize, N, E>>
where
    FN: FnMut(&usize) -> N,
    FE: FnMut(&usize, &usize) -> E,
{
    let left = options.left();
    let order = options.order();

    let mut builder = Builder::new(order, options.size(), node_data, edge_data);
    for i in 0..order {
        builder.node(i)?;
    }
    for l in 0..left {
        for r in left..order {
            builder.edge(&l, &r)?;
        }
    }
    Ok(builder.finish("bipartite"))
}

/// Parts numbered consecutively; every node links to every node of each later part
pub fn multipartite<N, E, FN, FE>(
    options: &MultipartiteOptions,
    node_data: FN,
    edge_data: FE,
) -> GraphResult<IndexedGraph<usize, N, E>>
where
    FN: FnMut(&usize) -> N,
    FE: FnMut(&usize, &usize) -> E,
{
    let order = options.order();
    let mut bounds = Vec::with_capacity(options.parts().len());
    let mut start = 0;
    for &part in options.parts() {
        bounds.push((start, start + part));
        start += part;
    }

    let mut builder = Builder::new(order, options.size(), node_data, edge_data);
    for i in 0..order {
        builder.node(i)?;
    }
    for &(from, to) in &bounds {
        for origin in from..to {
            for destination in to..order {
                builder.edge(&origin, &destination)?;
            }
        }
    }
    Ok(builder.finish("multipartite"))
}

/// Every ordered pair of distinct nodes
pub fn complete<N, E, FN, FE>(
    options: &CompleteOptions,
    node_data: FN,
    edge_data: FE,
) -> GraphResult<IndexedGraph<usize, N, E>>
where
    FN: FnMut(&usize) -> N,
    FE: FnMut(&usize, &usize) -> E,
{
    let n = options.order();
    let mut builder = Builder::new(n, options.size(), node_data, edge_data);
    for i in 0..n {
        builder.node(i)?;
    }
    for i in 0..n {
        for j in 0..n {
            if i != j {
                builder.edge(&i, &j)?;
            }
        }
    }
    Ok(builder.finish("complete"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexed_graph::GraphRead;

    #[test]
    fn test_bipartite() {
        let graph = bipartite(&BipartiteOptions::new(2, 3).unwrap(), |_| (), |o, d| (*o, *d)).unwrap();
        assert_eq!(graph.order(), 5);
        assert_eq!(graph.size(), 6);
        for l in 0..2 {
            assert_eq!(graph.outgoing_edges(&l).len(), 3);
            assert!(graph.incoming_edges(&l).is_empty());
        }
        for r in 2..5 {
            assert_eq!(graph.incoming_edges(&r).len(), 2);
        }
    }

    #[test]
    fn test_multipartite() {
        let options = MultipartiteOptions::new(vec![1, 2, 3]).unwrap();
        let graph = multipartite(&options, |_| (), |_, _| ()).unwrap();
        assert_eq!(graph.order(), 6);
        // 1*(2+3) + 2*3
        assert_eq!(graph.size(), 11);
        assert_eq!(graph.outgoing_edges(&0).len(), 5);
        assert_eq!(graph.outgoing_edges(&1).len(), 3);
        assert!(graph.outgoing_edges(&5).is_empty());
        assert_eq!(graph.incoming_edges(&5).len(), 3);
    }

    #[test]
    fn test_single_part_has_no_edges() {
        let options = MultipartiteOptions::new(vec![4]).unwrap();
        let graph = multipartite(&options, |_| (), |_, _| ()).unwrap();
        assert_eq!(graph.order(), 4);
        assert_eq!(graph.size(), 0);
    }

    #[test]
    fn test_complete() {
        let graph = complete(&CompleteOptions::new(4).unwrap(), |_| (), |_, _| ()).unwrap();
        assert_eq!(graph.order(), 4);
        assert_eq!(graph.size(), 12);
        assert!(graph.edges().iter().all(|e| !e.is_self_loop().unwrap()));
    }
}
