//! Fixed-capacity ring of body cells
//!
//! Cells are stored in motion order: the oldest live cell sits at `tail`,
//! the next write goes to `head`. Storage is allocated once and never grows.

use std::iter::FusedIterator;

use thiserror::Error;

use super::state::Cell;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QueueError {
    #[error("pop from empty occupancy queue")]
    Empty,
}

/// Ring buffer of `N` cells with head/tail cursors
#[derive(Debug, Clone)]
pub struct OccupancyQueue<const N: usize> {
    slots: [Cell; N],
    head: usize,
    tail: usize,
    len: usize,
}

impl<const N: usize> OccupancyQueue<N> {
    pub fn new() -> Self {
        Self {
            slots: [Cell { x: 0, y: 0 }; N],
            head: 0,
            tail: 0,
            len: 0,
        }
    }

    /// Drop every live cell and rewind both cursors to slot 0
    pub fn reset(&mut self) {
        self.head = 0;
        self.tail = 0;
        self.len = 0;
    }

    /// Append a cell as the newest live cell
    ///
    /// There is no capacity check: a body longer than the board would have
    /// collided with itself before reaching this point.
    pub fn push(&mut self, cell: Cell) {
        debug_assert!(self.len < N, "occupancy queue overflow");
        self.slots[self.head] = cell;
        self.head = (self.head + 1) % N;
        self.len += 1;
    }

    /// Remove and return the oldest live cell
    pub fn pop(&mut self) -> Result<Cell, QueueError> {
        if self.len == 0 {
            return Err(QueueError::Empty);
        }
        let cell = self.slots[self.tail];
        self.tail = (self.tail + 1) % N;
        self.len -= 1;
        Ok(cell)
    }

    /// Live cells from oldest to newest
    pub fn iter(&self) -> Iter<'_, N> {
        Iter {
            queue: self,
            offset: 0,
        }
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.iter().any(|live| live == cell)
    }

    /// Most recently pushed cell (the snake's head)
    pub fn newest(&self) -> Option<Cell> {
        if self.len == 0 {
            return None;
        }
        Some(self.slots[(self.head + N - 1) % N])
    }

    /// Oldest live cell (the snake's tail)
    pub fn oldest(&self) -> Option<Cell> {
        if self.len == 0 {
            return None;
        }
        Some(self.slots[self.tail])
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        N
    }

    /// Slot the next push writes to
    pub fn head_index(&self) -> usize {
        self.head
    }

    /// Slot holding the oldest live cell
    pub fn tail_index(&self) -> usize {
        self.tail
    }
}

impl<const N: usize> Default for OccupancyQueue<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, const N: usize> IntoIterator for &'a OccupancyQueue<N> {
    type Item = Cell;
    type IntoIter = Iter<'a, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the live cells of an [`OccupancyQueue`]
pub struct Iter<'a, const N: usize> {
    queue: &'a OccupancyQueue<N>,
    offset: usize,
}

impl<const N: usize> Iterator for Iter<'_, N> {
    type Item = Cell;

    fn next(&mut self) -> Option<Cell> {
        if self.offset >= self.queue.len {
            return None;
        }
        let cell = self.queue.slots[(self.queue.tail + self.offset) % N];
        self.offset += 1;
        Some(cell)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.queue.len - self.offset;
        (remaining, Some(remaining))
    }
}

impl<const N: usize> ExactSizeIterator for Iter<'_, N> {}

impl<const N: usize> FusedIterator for Iter<'_, N> {}
