//! Star and disk topologies

use super::common::Builder;
use super::options::{DiskOptions, StarOptions};
use indexed_graph::{GraphResult, IndexedGraph};

/// Center `0` linked to leaves `1..=arms`
pub fn star<N, E, FN, FE>(
    options: &StarOptions,
    node_data: FN,
    edge_data: FE,
) -> GraphResult<IndexedGraph<usize, N, E>>
where
    FN: FnMut(&usize) -> N,
    FE: FnMut(&usize, &usize) -> E,
{
    let arms = options.arms();
    let mut builder = Builder::new(options.order(), options.size(), node_data, edge_data);
    for i in 0..=arms {
        builder.node(i)?;
    }
    for leaf in 1..=arms {
        builder.edge(&0, &leaf)?;
    }
    Ok(builder.finish("star"))
}

/// Center `0` surrounded by `rings` concentric rings of `meridians` nodes
///
/// The center links to every node of the innermost ring, each meridian runs
/// outward ring by ring, and each ring closes on itself. With one meridian the
/// ring edges are self loops.
pub fn disk<N, E, FN, FE>(
    options: &DiskOptions,
    node_data: FN,
    edge_data: FE,
) -> GraphResult<IndexedGraph<usize, N, E>>
where
    FN: FnMut(&usize) -> N,
    FE: FnMut(&usize, &usize) -> E,
{
    let rings = options.rings();
    let meridians = options.meridians();
    let order = options.order();

    let mut builder = Builder::new(order, options.size(), node_data, edge_data);
    for i in 0..order {
        builder.node(i)?;
    }

    for m in 0..meridians {
        builder.edge(&0, &options.position(0, m))?;
    }
    for r in 1..rings {
        for m in 0..meridians {
            builder.edge(&options.position(r - 1, m), &options.position(r, m))?;
        }
    }
    for r in 0..rings {
        for m in 0..meridians {
            builder.edge(
                &options.position(r, m),
                &options.position(r, (m + 1) % meridians),
            )?;
        }
    }

    Ok(builder.finish("disk"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexed_graph::GraphRead;

    #[test]
    fn test_star() {
        let graph = star(&StarOptions::new(4).unwrap(), |_| (), |_, _| ()).unwrap();
        assert_eq!(graph.order(), 5);
        assert_eq!(graph.size(), 4);
        assert_eq!(graph.outgoing_edges(&0).len(), 4);
        for leaf in 1..=4 {
            assert_eq!(graph.incoming_edges(&leaf).len(), 1);
            assert!(graph.outgoing_edges(&leaf).is_empty());
        }
    }

    #[test]
    fn test_disk() {
        let options = DiskOptions::new(2, 4).unwrap();
        let graph = disk(&options, |_| (), |o, d| (*o, *d)).unwrap();

        assert_eq!(graph.order(), 9);
        assert_eq!(graph.size(), 4 + 4 + 8);
        assert_eq!(graph.outgoing_edges(&0).len(), 4);

        // inner ring node: one spoke in, one ring edge in, one outward, one ring edge out
        let inner = options.position(0, 1);
        assert_eq!(graph.incoming_edges(&inner).len(), 2);
        assert_eq!(graph.outgoing_edges(&inner).len(), 2);

        // outer ring node has no outward meridian edge
        let outer = options.position(1, 3);
        let targets: Vec<_> = graph
            .outgoing_edges(&outer)
            .iter()
            .map(|e| e.data().1)
            .collect();
        assert_eq!(targets, vec![options.position(1, 0)]);
    }

    #[test]
    fn test_disk_single_meridian() {
        let graph = disk(&DiskOptions::new(3, 1).unwrap(), |_| (), |_, _| ()).unwrap();
        assert_eq!(graph.order(), 4);
        let loops = graph
            .edges()
            .iter()
            .filter(|e| e.is_self_loop().unwrap())
            .count();
        assert_eq!(loops, 3);
    }
}
