//! Node records and the handles exposed to callers
//!
//! A [`Node`] is a non-owning view onto a record owned by a graph. Once the
//! record is removed the handle is invalidated: its payload stays readable as
//! the last value written, but it can no longer be written and its index can no
//! longer be resolved.

use super::error::{GraphError, GraphResult};
use std::cell::{Cell, Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

/// Shared node record
///
/// Validity lives outside the payload cell, so invalidation and the
/// relational accessors never contend with payload borrows.
pub(crate) struct NodeRecord<I, N> {
    index: I,
    valid: Cell<bool>,
    data: RefCell<N>,
}

/// Handle to a node of a graph
///
/// Handles are cheap to clone. Two handles are equal when they refer to the
/// same record, i.e. the same index in the same graph instance and the same
/// lifetime of that index.
pub struct Node<I, N> {
    record: Rc<NodeRecord<I, N>>,
}

impl<I, N> Node<I, N> {
    pub(crate) fn create(index: I, data: N) -> Self {
        Node {
            record: Rc::new(NodeRecord {
                index,
                valid: Cell::new(true),
                data: RefCell::new(data),
            }),
        }
    }

    /// Whether the node is still part of its graph
    pub fn is_valid(&self) -> bool {
        self.record.valid.get()
    }

    /// Borrow the payload. Works on invalidated handles too.
    ///
    /// A guard may be held across any graph mutation, including removal of
    /// this node and `clear`; it keeps reading the payload as it was. While a
    /// guard is alive, writes through any handle of the same node fail with
    /// [`GraphError::DataBorrowed`]. Calling `data` from inside
    /// [`update_data`](Self::update_data) on the same node panics.
    pub fn data(&self) -> Ref<'_, N> {
        self.record.data.borrow()
    }

    pub fn data_cloned(&self) -> N
    where
        N: Clone,
    {
        self.record.data.borrow().clone()
    }

    /// Replace the payload, returning the previous value
    pub fn set_data(&self, data: N) -> GraphResult<N> {
        let mut current = self.writable()?;
        Ok(std::mem::replace(&mut *current, data))
    }

    /// Modify the payload in place
    pub fn update_data<F>(&self, update: F) -> GraphResult<()>
    where
        F: FnOnce(&mut N),
    {
        let mut current = self.writable()?;
        update(&mut current);
        Ok(())
    }

    fn writable(&self) -> GraphResult<RefMut<'_, N>> {
        if !self.is_valid() {
            return Err(GraphError::DataImmutable);
        }
        self.record
            .data
            .try_borrow_mut()
            .map_err(|_| GraphError::DataBorrowed)
    }

    /// Index of the node within its graph
    pub fn index(&self) -> GraphResult<I>
    where
        I: Clone,
    {
        if !self.is_valid() {
            return Err(GraphError::ComponentInvalid);
        }
        Ok(self.record.index.clone())
    }

    /// Index regardless of validity, for the owning graph's bookkeeping
    pub(crate) fn raw_index(&self) -> I
    where
        I: Clone,
    {
        self.record.index.clone()
    }

    pub(crate) fn invalidate(&self) {
        self.record.valid.set(false);
    }

    pub(crate) fn same_record(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.record, &other.record)
    }
}

impl<I: fmt::Debug, N> Node<I, N> {
    pub(crate) fn debug_index(&self) -> String {
        format!("{:?}", self.record.index)
    }
}

impl<I, N> Clone for Node<I, N> {
    fn clone(&self) -> Self {
        Node {
            record: Rc::clone(&self.record),
        }
    }
}

impl<I, N> PartialEq for Node<I, N> {
    fn eq(&self, other: &Self) -> bool {
        self.same_record(other)
    }
}

impl<I, N> Eq for Node<I, N> {}

impl<I, N> std::hash::Hash for Node<I, N> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        Rc::as_ptr(&self.record).hash(state);
    }
}

impl<I: fmt::Debug, N: fmt::Debug> fmt::Debug for Node<I, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = f.debug_struct("Node");
        out.field("index", &self.record.index);
        match self.record.data.try_borrow() {
            Ok(data) => out.field("data", &*data),
            Err(_) => out.field("data", &"<borrowed>"),
        };
        out.field("valid", &self.is_valid()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_handle_reads_and_writes() {
        let node = Node::create(1u32, "Alice".to_string());
        assert!(node.is_valid());
        assert_eq!(node.index(), Ok(1));
        assert_eq!(*node.data(), "Alice");

        let old = node.set_data("Bob".to_string()).unwrap();
        assert_eq!(old, "Alice");
        assert_eq!(node.data_cloned(), "Bob");

        node.update_data(|name| name.push('!')).unwrap();
        assert_eq!(*node.data(), "Bob!");
    }

    #[test]
    fn test_invalidated_node_freezes_data() {
        let node = Node::create(7u32, 10i64);
        node.set_data(11).unwrap();
        node.invalidate();

        assert!(!node.is_valid());
        assert_eq!(*node.data(), 11);
        assert_eq!(node.set_data(12), Err(GraphError::DataImmutable));
        assert_eq!(node.update_data(|d| *d += 1), Err(GraphError::DataImmutable));
        assert_eq!(node.index(), Err(GraphError::ComponentInvalid));
        assert_eq!(*node.data(), 11);
    }

    #[test]
    fn test_invalidate_is_idempotent() {
        let node = Node::create(0u8, ());
        node.invalidate();
        node.invalidate();
        assert!(!node.is_valid());
        assert_eq!(node.raw_index(), 0);
    }

    #[test]
    fn test_node_identity() {
        let a = Node::create(1u32, 5);
        let b = a.clone();
        let c = Node::create(1u32, 5);

        assert_eq!(a, b); // Same record
        assert_ne!(a, c); // Same contents, different record
    }

    #[test]
    fn test_guard_survives_invalidation() {
        let node = Node::create(3u32, "kept".to_string());
        let guard = node.data();
        node.invalidate();

        assert!(!node.is_valid());
        assert_eq!(*guard, "kept");
        assert_eq!(node.index(), Err(GraphError::ComponentInvalid));
    }

    #[test]
    fn test_write_while_borrowed() {
        let node = Node::create(1u32, 5);
        let other = node.clone();
        {
            let guard = node.data();
            assert_eq!(other.set_data(6), Err(GraphError::DataBorrowed));
            assert_eq!(other.update_data(|d| *d += 1), Err(GraphError::DataBorrowed));
            assert_eq!(*guard, 5);
        }
        assert_eq!(other.set_data(6), Ok(5));
    }
}
