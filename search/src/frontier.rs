//! Two-level bucket priority queue for the A* open set.
//!
//! Priorities are small non-negative integers, so entries are filed in dense
//! arrays indexed by `f` (outer) and `g` (inner) instead of a binary heap.
//! Pop order is ascending `f`, then descending `g`, then FIFO within one
//! `(f, g)` bucket.

use std::collections::VecDeque;

/// All entries sharing one `f`, filed by `g`.
#[derive(Debug)]
struct FBucket<T> {
    by_g: Vec<VecDeque<T>>,
    len: usize,
}

impl<T> FBucket<T> {
    fn new() -> Self {
        Self {
            by_g: Vec::new(),
            len: 0,
        }
    }

    fn push(&mut self, g: usize, item: T) {
        if self.by_g.len() <= g {
            self.by_g.resize_with(g + 1, VecDeque::new);
        }
        self.by_g[g].push_back(item);
        self.len += 1;
    }

    /// Take the oldest entry of the deepest non-empty `g` bucket.
    fn pop_deepest(&mut self) -> Option<(T, usize)> {
        // Trailing empty buckets are trimmed eagerly, so the last one is
        // non-empty whenever `len > 0`.
        let g = self.by_g.len().checked_sub(1)?;
        let item = self.by_g[g].pop_front()?;
        self.len -= 1;
        while self.by_g.last().is_some_and(VecDeque::is_empty) {
            self.by_g.pop();
        }
        Some((item, g))
    }
}

/// Refused insertion: `f` exceeds the configured ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriorityOutOfRange {
    pub f: u32,
    pub max_priority: u32,
}

/// Bucketed best-first frontier.
///
/// Holds lightweight items (A* stores registry handles); cost data stays
/// with the caller.
#[derive(Debug)]
pub struct BucketFrontier<T> {
    by_f: Vec<FBucket<T>>,
    /// Lowest `f` that may hold entries. Every bucket below it is empty.
    next_priority: usize,
    len: usize,
    high_water: u64,
    max_priority: u32,
}

impl<T> BucketFrontier<T> {
    /// Create an empty frontier accepting priorities up to `max_priority`.
    #[must_use]
    pub fn new(max_priority: u32) -> Self {
        Self {
            by_f: Vec::new(),
            next_priority: 0,
            len: 0,
            high_water: 0,
            max_priority,
        }
    }

    /// File `item` under `(f, g)`.
    ///
    /// # Errors
    ///
    /// Returns [`PriorityOutOfRange`] if `f` exceeds the ceiling. The
    /// frontier is unchanged in that case.
    pub fn insert(&mut self, item: T, f: u32, g: u32) -> Result<(), PriorityOutOfRange> {
        if f > self.max_priority {
            return Err(PriorityOutOfRange {
                f,
                max_priority: self.max_priority,
            });
        }
        let f_idx = f as usize;
        if self.by_f.len() <= f_idx {
            self.by_f.resize_with(f_idx + 1, FBucket::new);
        }
        self.by_f[f_idx].push(g as usize, item);
        self.len += 1;
        self.next_priority = self.next_priority.min(f_idx);

        let size = self.len as u64;
        if size > self.high_water {
            self.high_water = size;
        }
        Ok(())
    }

    /// Remove the entry with least `f`, deepest `g`. Returns `(item, f, g)`.
    pub fn pop_front(&mut self) -> Option<(T, u32, u32)> {
        if self.len == 0 {
            return None;
        }
        self.advance_cursor();
        let f = self.next_priority;
        let (item, g) = self.by_f.get_mut(f)?.pop_deepest()?;
        self.len -= 1;
        self.advance_cursor();
        #[allow(clippy::cast_possible_truncation)]
        Some((item, f as u32, g as u32))
    }

    /// Move the cursor forward past empty `f` buckets.
    fn advance_cursor(&mut self) {
        while self
            .by_f
            .get(self.next_priority)
            .is_some_and(|bucket| bucket.len == 0)
        {
            self.next_priority += 1;
        }
    }

    /// Lowest `f` currently held, if any.
    #[must_use]
    pub fn peek_priority(&self) -> Option<u32> {
        if self.len == 0 {
            return None;
        }
        #[allow(clippy::cast_possible_truncation)]
        self.by_f[self.next_priority..]
            .iter()
            .position(|bucket| bucket.len > 0)
            .map(|offset| (self.next_priority + offset) as u32)
    }

    /// Current number of entries (stale ones included).
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// High-water mark of frontier size.
    #[must_use]
    pub fn high_water(&self) -> u64 {
        self.high_water
    }
}
