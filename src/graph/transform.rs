//! Structural algorithms producing new graphs from existing ones
//!
//! - `clone_with`: same index type and comparer, payloads passed through copy functions
//! - `transform`: may change index, node payload and edge payload types
//! - `reindex_sequential`: drops caller indices in favour of a fresh `u64` sequence
//!
//! Edge indices and the edge index counter carry over unchanged. Node and edge
//! iteration order of the copy matches the source.
//!
//! Each copy function sees a borrowed source payload. Writing that payload
//! through a handle from inside the function fails with
//! [`GraphError::DataBorrowed`](super::GraphError::DataBorrowed).

use super::comparer::{DefaultComparer, IndexComparer, SharedComparer};
use super::error::GraphResult;
use super::node::Node;
use super::store::GraphStore;
use std::fmt;
use std::hash::Hash;
use std::rc::Rc;
use tracing::debug;

impl<I, N, E> GraphStore<I, N, E>
where
    I: Clone + fmt::Debug + 'static,
{
    /// Copy the graph, passing every payload through the given functions
    ///
    /// The copy shares the comparer with the source. Handles of the copy are
    /// independent of the source's handles.
    pub fn clone_with<FN, FE>(&self, mut node_fn: FN, edge_fn: FE) -> Self
    where
        FN: FnMut(&N) -> N,
        FE: FnMut(&E) -> E,
    {
        let mut copy = GraphStore::from_parts(self.comparer(), self.config().clone());
        let mapped: Vec<Node<I, N>> = self
            .nodes
            .iter()
            .map(|(key, node)| copy.insert_node(key.index().clone(), node_fn(&node.data())))
            .collect();
        self.copy_edges_into(&mut copy, &mapped, edge_fn);
        debug!(order = copy.order(), size = copy.size(), "cloned graph");
        copy
    }

    /// Build a graph with new index, node payload and edge payload types
    ///
    /// The result compares indices by value. Fails with
    /// [`GraphError::DuplicateIndex`](super::GraphError::DuplicateIndex) if
    /// `index_fn` maps two source nodes onto equal indices.
    pub fn transform<I2, N2, E2, FN, FE, FI>(
        &self,
        node_fn: FN,
        edge_fn: FE,
        mut index_fn: FI,
    ) -> GraphResult<GraphStore<I2, N2, E2>>
    where
        I2: Hash + Eq + Clone + fmt::Debug + 'static,
        FN: FnMut(&N) -> N2,
        FE: FnMut(&E) -> E2,
        FI: FnMut(&I) -> I2,
    {
        self.rebuild(
            Rc::new(DefaultComparer),
            |index, _| index_fn(index),
            node_fn,
            edge_fn,
        )
    }

    /// [`transform`](Self::transform) with an explicit comparer for the new index type
    pub fn transform_with_comparer<I2, N2, E2, C, FN, FE, FI>(
        &self,
        node_fn: FN,
        edge_fn: FE,
        mut index_fn: FI,
        comparer: C,
    ) -> GraphResult<GraphStore<I2, N2, E2>>
    where
        I2: Clone + fmt::Debug + 'static,
        C: IndexComparer<I2> + 'static,
        FN: FnMut(&N) -> N2,
        FE: FnMut(&E) -> E2,
        FI: FnMut(&I) -> I2,
    {
        self.rebuild(Rc::new(comparer), |index, _| index_fn(index), node_fn, edge_fn)
    }

    /// Rebuild the graph, deriving each new node index from the old index and payload
    pub(crate) fn rebuild<I2, N2, E2, FI, FN, FE>(
        &self,
        comparer: SharedComparer<I2>,
        mut index_fn: FI,
        mut node_fn: FN,
        edge_fn: FE,
    ) -> GraphResult<GraphStore<I2, N2, E2>>
    where
        I2: Clone + fmt::Debug + 'static,
        FI: FnMut(&I, &N) -> I2,
        FN: FnMut(&N) -> N2,
        FE: FnMut(&E) -> E2,
    {
        let mut target = GraphStore::from_parts(comparer, self.config().clone());
        let mut mapped = Vec::with_capacity(self.order());
        for (key, node) in &self.nodes {
            let data = node.data();
            let index = index_fn(key.index(), &data);
            mapped.push(target.add_node(index, node_fn(&data))?);
        }
        self.copy_edges_into(&mut target, &mapped, edge_fn);
        debug!(order = target.order(), size = target.size(), "transformed graph");
        Ok(target)
    }

    /// Copy the graph onto indices `0..order` in node iteration order
    pub(crate) fn reindex_sequential<N2, E2, FN, FE>(
        &self,
        mut node_fn: FN,
        edge_fn: FE,
    ) -> GraphStore<u64, N2, E2>
    where
        FN: FnMut(&N) -> N2,
        FE: FnMut(&E) -> E2,
    {
        let mut target = GraphStore::with_config(self.config().clone());
        let mapped: Vec<Node<u64, N2>> = self
            .nodes
            .values()
            .zip(0u64..)
            .map(|(node, index)| target.insert_node(index, node_fn(&node.data())))
            .collect();
        self.copy_edges_into(&mut target, &mapped, edge_fn);
        target
    }

    /// Copy every edge into `target`, where `mapped[p]` is the target node
    /// standing in for the source node at position `p`
    fn copy_edges_into<I2, N2, E2, FE>(
        &self,
        target: &mut GraphStore<I2, N2, E2>,
        mapped: &[Node<I2, N2>],
        mut edge_fn: FE,
    ) where
        I2: Clone + fmt::Debug + 'static,
        FE: FnMut(&E) -> E2,
    {
        for (index, edge) in &self.edges {
            let (origin, destination) = edge.endpoints();
            let origin = self.nodes.get_index_of(&self.key(origin.raw_index()));
            let destination = self.nodes.get_index_of(&self.key(destination.raw_index()));
            // Live edges always connect live nodes
            let Some((origin, destination)) = origin.zip(destination) else {
                continue;
            };
            target.insert_edge(
                *index,
                mapped[origin].clone(),
                mapped[destination].clone(),
                edge_fn(&edge.data()),
            );
        }
        target.next_edge_index = self.next_edge_index;
    }
}

impl<I, N, E> Clone for GraphStore<I, N, E>
where
    I: Clone + fmt::Debug + 'static,
    N: Clone,
    E: Clone,
{
    /// Deep copy: the clone owns fresh records, so removing from one graph
    /// never invalidates handles of the other
    fn clone(&self) -> Self {
        self.clone_with(N::clone, E::clone)
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::{EdgeIndex, GraphError, GraphStore, KeyComparer};
    use std::collections::HashSet;

    fn path() -> GraphStore<u32, String, u32> {
        let mut store = GraphStore::new();
        for i in 0..4 {
            store.add_node(i, format!("n{}", i)).unwrap();
        }
        for i in 0..3 {
            store.add_edge(&i, &(i + 1), i * 10).unwrap();
        }
        store
    }

    fn connectivity<I: Clone + std::fmt::Debug + 'static, N: Clone + std::hash::Hash + Eq, E>(
        store: &GraphStore<I, N, E>,
    ) -> HashSet<(N, N)> {
        store
            .edges()
            .map(|edge| {
                (
                    edge.origin().unwrap().data_cloned(),
                    edge.destination().unwrap().data_cloned(),
                )
            })
            .collect()
    }

    #[test]
    fn test_clone_preserves_topology() {
        let source = path();
        let copy = source.clone();

        assert_eq!(copy.order(), source.order());
        assert_eq!(copy.size(), source.size());
        assert_eq!(connectivity(&copy), connectivity(&source));

        let source_edges: Vec<u32> = source.edges().map(|e| e.data_cloned()).collect();
        let copy_edges: Vec<u32> = copy.edges().map(|e| e.data_cloned()).collect();
        assert_eq!(source_edges, copy_edges);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut source = path();
        let copy = source.clone();
        let copied_node = copy.get_node(&0).unwrap();

        source.remove_node(&0);
        assert!(copied_node.is_valid());
        assert_eq!(copy.size(), 3);

        copied_node.set_data("changed".to_string()).unwrap();
        assert!(!source.contains_node(&0));
        assert_eq!(*copy.get_node(&0).unwrap().data(), "changed");
    }

    #[test]
    fn test_clone_with_copy_functions() {
        let source = path();
        let copy = source.clone_with(|n| n.to_uppercase(), |e| e + 1);
        assert_eq!(*copy.get_node(&2).unwrap().data(), "N2");
        let weights: HashSet<u32> = copy.edges().map(|e| e.data_cloned()).collect();
        assert_eq!(weights, [1, 11, 21].into_iter().collect());
    }

    #[test]
    fn test_clone_preserves_comparer_and_edge_indices() {
        let mut source: GraphStore<u32, (), ()> =
            GraphStore::with_comparer(KeyComparer::new(|i: &u32| i % 10));
        source.add_node(1, ()).unwrap();
        source.add_node(2, ()).unwrap();
        source.add_edge_with_index(EdgeIndex::new(40), &1, &2, ()).unwrap();

        let mut copy = source.clone();
        assert!(copy.add_node(11, ()).is_err());
        assert!(copy.contains_edge(EdgeIndex::new(40)));
        let next = copy.add_edge(&1, &2, ()).unwrap();
        assert_eq!(next.index(), Ok(EdgeIndex::new(41)));
    }

    #[test]
    fn test_transform_changes_types() {
        let source = path();
        let transformed = source
            .transform(|n| n.len(), |e| *e as f64 / 10.0, |i| format!("#{}", i))
            .unwrap();

        assert_eq!(transformed.order(), 4);
        assert_eq!(transformed.size(), 3);
        assert_eq!(*transformed.get_node(&"#3".to_string()).unwrap().data(), 2);
        assert_eq!(transformed.out_degree(&"#0".to_string()), 1);
        assert_eq!(transformed.in_degree(&"#3".to_string()), 1);
    }

    #[test]
    fn test_transform_collision() {
        let source = path();
        let result = source.transform(|n| n.clone(), |e| *e, |i| i / 2);
        assert!(matches!(result, Err(GraphError::DuplicateIndex(_))));
    }

    #[test]
    fn test_transform_with_comparer() {
        let source = path();
        let transformed = source
            .transform_with_comparer(
                |n| n.clone(),
                |e| *e,
                |i| format!("Node{}", i),
                KeyComparer::new(|s: &String| s.to_lowercase()),
            )
            .unwrap();
        assert!(transformed.contains_node(&"NODE1".to_string()));
    }

    #[test]
    fn test_reindex_sequential() {
        let mut source = path();
        source.remove_node(&0);
        let reindexed = source.reindex_sequential(|n| n.clone(), |e| *e);

        assert_eq!(reindexed.order(), 3);
        assert_eq!(reindexed.size(), 2);
        let indices: HashSet<u64> = reindexed.indices().copied().collect();
        assert_eq!(indices, [0, 1, 2].into_iter().collect());
        assert_eq!(connectivity(&reindexed), connectivity(&source));
    }
}
