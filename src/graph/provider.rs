//! Index providers for auto-indexed graphs
//!
//! A provider turns a node payload into the index the node is stored under.
//! [`Stateless`] derives it purely from the payload; [`Incremental`] ignores the
//! payload and hands out a counter that advances through an explicit successor
//! function.

use std::fmt;

pub trait IndexProvider<I, N> {
    /// Produce the index for a node about to be added with `data`
    fn next_index(&mut self, data: &N) -> I;
}

/// Index computed from the node payload alone
///
/// The same payload always yields the same index, so two equal payloads
/// collide with [`GraphError::DuplicateIndex`](super::GraphError::DuplicateIndex).
#[derive(Clone, Copy)]
pub struct Stateless<F> {
    index_of: F,
}

impl<F> Stateless<F> {
    pub fn new(index_of: F) -> Self {
        Self { index_of }
    }
}

impl<I, N, F> IndexProvider<I, N> for Stateless<F>
where
    F: Fn(&N) -> I,
{
    fn next_index(&mut self, data: &N) -> I {
        (self.index_of)(data)
    }
}

impl<F> fmt::Debug for Stateless<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stateless").finish_non_exhaustive()
    }
}

/// Counter-based indices: returns the current value, then advances it
#[derive(Clone, Copy)]
pub struct Incremental<I, F> {
    next: I,
    successor: F,
}

/// Incremental `u64` indices counting up by one
pub type Sequential = Incremental<u64, fn(&u64) -> u64>;

fn next_u64(index: &u64) -> u64 {
    index.wrapping_add(1)
}

impl<I, F> Incremental<I, F>
where
    F: Fn(&I) -> I,
{
    pub fn new(start: I, successor: F) -> Self {
        Self {
            next: start,
            successor,
        }
    }

    /// The index the next call will hand out
    pub fn peek(&self) -> &I {
        &self.next
    }

    /// Hand out the current value and advance
    pub fn advance(&mut self) -> I {
        let following = (self.successor)(&self.next);
        std::mem::replace(&mut self.next, following)
    }
}

impl Incremental<u64, fn(&u64) -> u64> {
    /// Count up by one from `start`
    pub fn sequential(start: u64) -> Sequential {
        Incremental::new(start, next_u64 as fn(&u64) -> u64)
    }
}

impl<I, N, F> IndexProvider<I, N> for Incremental<I, F>
where
    F: Fn(&I) -> I,
{
    fn next_index(&mut self, _data: &N) -> I {
        self.advance()
    }
}

impl<I: fmt::Debug, F> fmt::Debug for Incremental<I, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Incremental")
            .field("next", &self.next)
            .finish_non_exhaustive()
    }
}
