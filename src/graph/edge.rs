//! Directed edge records and their handles
//!
//! An edge record keeps handles to both endpoint nodes. The graph removes every
//! incident edge before it removes a node, so the endpoints of a valid edge are
//! always valid nodes.

use super::error::{GraphError, GraphResult};
use super::node::Node;
use super::types::EdgeIndex;
use std::cell::{Cell, Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

pub(crate) struct EdgeRecord<I, N, E> {
    index: EdgeIndex,
    origin: Node<I, N>,
    destination: Node<I, N>,
    valid: Cell<bool>,
    data: RefCell<E>,
}

/// Handle to a directed edge of a graph
///
/// Same validity rules as [`Node`]: data stays readable after removal,
/// writes and relational accessors fail.
pub struct Edge<I, N, E> {
    record: Rc<EdgeRecord<I, N, E>>,
}

impl<I, N, E> Edge<I, N, E> {
    pub(crate) fn create(
        index: EdgeIndex,
        origin: Node<I, N>,
        destination: Node<I, N>,
        data: E,
    ) -> Self {
        Edge {
            record: Rc::new(EdgeRecord {
                index,
                origin,
                destination,
                valid: Cell::new(true),
                data: RefCell::new(data),
            }),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.record.valid.get()
    }

    /// Borrow the payload. Works on invalidated handles too.
    ///
    /// Guards behave like [`Node::data`] guards: they may be held across graph
    /// mutation, and writes to the same edge fail with
    /// [`GraphError::DataBorrowed`] while one is alive.
    pub fn data(&self) -> Ref<'_, E> {
        self.record.data.borrow()
    }

    pub fn data_cloned(&self) -> E
    where
        E: Clone,
    {
        self.record.data.borrow().clone()
    }

    /// Replace the payload, returning the previous value
    pub fn set_data(&self, data: E) -> GraphResult<E> {
        let mut current = self.writable()?;
        Ok(std::mem::replace(&mut *current, data))
    }

    pub fn update_data<F>(&self, update: F) -> GraphResult<()>
    where
        F: FnOnce(&mut E),
    {
        let mut current = self.writable()?;
        update(&mut current);
        Ok(())
    }

    fn writable(&self) -> GraphResult<RefMut<'_, E>> {
        if !self.is_valid() {
            return Err(GraphError::DataImmutable);
        }
        self.record
            .data
            .try_borrow_mut()
            .map_err(|_| GraphError::DataBorrowed)
    }

    pub fn index(&self) -> GraphResult<EdgeIndex> {
        self.check_valid()?;
        Ok(self.record.index)
    }

    /// Node the edge starts from
    pub fn origin(&self) -> GraphResult<Node<I, N>> {
        self.check_valid()?;
        Ok(self.record.origin.clone())
    }

    /// Node the edge points to
    pub fn destination(&self) -> GraphResult<Node<I, N>> {
        self.check_valid()?;
        Ok(self.record.destination.clone())
    }

    /// Whether origin and destination are the same node
    pub fn is_self_loop(&self) -> GraphResult<bool> {
        self.check_valid()?;
        Ok(self.record.origin.same_record(&self.record.destination))
    }

    fn check_valid(&self) -> GraphResult<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(GraphError::ComponentInvalid)
        }
    }

    pub(crate) fn raw_index(&self) -> EdgeIndex {
        self.record.index
    }

    /// Endpoint handles regardless of validity
    pub(crate) fn endpoints(&self) -> (&Node<I, N>, &Node<I, N>) {
        (&self.record.origin, &self.record.destination)
    }

    pub(crate) fn invalidate(&self) {
        self.record.valid.set(false);
    }

    pub(crate) fn same_record(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.record, &other.record)
    }
}

impl<I, N, E> Clone for Edge<I, N, E> {
    fn clone(&self) -> Self {
        Edge {
            record: Rc::clone(&self.record),
        }
    }
}

impl<I, N, E> PartialEq for Edge<I, N, E> {
    fn eq(&self, other: &Self) -> bool {
        self.same_record(other)
    }
}

impl<I, N, E> Eq for Edge<I, N, E> {}

impl<I, N, E> std::hash::Hash for Edge<I, N, E> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        Rc::as_ptr(&self.record).hash(state);
    }
}

impl<I: fmt::Debug, N, E: fmt::Debug> fmt::Debug for Edge<I, N, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let record = &self.record;
        let mut out = f.debug_struct("Edge");
        out.field("index", &record.index)
            .field("origin", &record.origin.debug_index())
            .field("destination", &record.destination.debug_index());
        match record.data.try_borrow() {
            Ok(data) => out.field("data", &*data),
            Err(_) => out.field("data", &"<borrowed>"),
        };
        out.field("valid", &self.is_valid()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoints() -> (Node<u32, &'static str>, Node<u32, &'static str>) {
        (Node::create(1, "a"), Node::create(2, "b"))
    }

    #[test]
    fn test_edge_accessors() {
        let (a, b) = endpoints();
        let edge = Edge::create(EdgeIndex::new(5), a.clone(), b.clone(), 0.5f64);

        assert!(edge.is_valid());
        assert_eq!(edge.index(), Ok(EdgeIndex::new(5)));
        assert_eq!(edge.origin().unwrap(), a);
        assert_eq!(edge.destination().unwrap(), b);
        assert_eq!(edge.is_self_loop(), Ok(false));
        assert_eq!(*edge.origin().unwrap().data(), "a");

        assert_eq!(edge.set_data(0.75).unwrap(), 0.5);
        assert_eq!(edge.data_cloned(), 0.75);
    }

    #[test]
    fn test_invalidated_edge() {
        let (a, b) = endpoints();
        let edge = Edge::create(EdgeIndex::new(1), a, b, 3i32);
        edge.invalidate();

        assert!(!edge.is_valid());
        assert_eq!(*edge.data(), 3);
        assert_eq!(edge.set_data(4), Err(GraphError::DataImmutable));
        assert_eq!(edge.index(), Err(GraphError::ComponentInvalid));
        assert!(matches!(edge.origin(), Err(GraphError::ComponentInvalid)));
        assert!(matches!(edge.destination(), Err(GraphError::ComponentInvalid)));
        assert_eq!(edge.raw_index(), EdgeIndex::new(1));
    }

    #[test]
    fn test_self_loop() {
        let a = Node::create(1u32, ());
        let edge = Edge::create(EdgeIndex::new(0), a.clone(), a, ());
        assert_eq!(edge.is_self_loop(), Ok(true));
    }

    #[test]
    fn test_guard_survives_invalidation() {
        let (a, b) = endpoints();
        let edge = Edge::create(EdgeIndex::new(2), a, b, 9u8);
        let guard = edge.data();
        edge.invalidate();

        assert_eq!(*guard, 9);
        assert!(matches!(edge.origin(), Err(GraphError::ComponentInvalid)));
        assert_eq!(edge.set_data(1), Err(GraphError::DataImmutable));
    }

    #[test]
    fn test_write_while_borrowed() {
        let (a, b) = endpoints();
        let edge = Edge::create(EdgeIndex::new(0), a, b, 1i32);
        let guard = edge.data();
        assert_eq!(edge.update_data(|d| *d = 2), Err(GraphError::DataBorrowed));
        drop(guard);
        assert_eq!(edge.update_data(|d| *d = 2), Ok(()));
        assert_eq!(*edge.data(), 2);
    }
}
