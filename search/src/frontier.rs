//! Frontier disciplines: stack, queue, and stable priority queue.
//!
//! The set of disciplines is closed, so the frontier is an enum over its
//! backing collections rather than a trait object.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};

use crate::contract::Cost;
use crate::node::FrontierKey;

/// Which ordering the frontier applies on `pop`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontierKind {
    /// Last in, first out.
    Stack,
    /// First in, first out.
    Queue,
    /// Smallest key first, insertion order among equal keys.
    Priority,
}

/// A frontier entry wrapping a record with its ordering key.
///
/// `BinaryHeap` is a max-heap, so we use `Reverse<FrontierKey>` to get
/// min-heap behavior (lowest priority first).
#[derive(Debug)]
struct PriorityEntry<T> {
    key: Reverse<FrontierKey>,
    record: T,
}

impl<T> PartialEq for PriorityEntry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<T> Eq for PriorityEntry<T> {}

impl<T> PartialOrd for PriorityEntry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for PriorityEntry<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key.cmp(&other.key)
    }
}

#[derive(Debug)]
enum Slots<T> {
    Stack(Vec<T>),
    Queue(VecDeque<T>),
    Priority(BinaryHeap<PriorityEntry<T>>),
}

/// Pending records ordered by one of the [`FrontierKind`] disciplines.
///
/// The frontier does no deduplication: the same state may be pushed any
/// number of times, and stale copies are left for the caller to discard at
/// pop time.
#[derive(Debug)]
pub struct Frontier<T> {
    slots: Slots<T>,
    next_creation_order: u64,
    high_water: u64,
}

impl<T> Frontier<T> {
    /// Create an empty frontier of the given kind.
    #[must_use]
    pub fn new(kind: FrontierKind) -> Self {
        let slots = match kind {
            FrontierKind::Stack => Slots::Stack(Vec::new()),
            FrontierKind::Queue => Slots::Queue(VecDeque::new()),
            FrontierKind::Priority => Slots::Priority(BinaryHeap::new()),
        };
        Self {
            slots,
            next_creation_order: 0,
            high_water: 0,
        }
    }

    /// LIFO frontier.
    #[must_use]
    pub fn stack() -> Self {
        Self::new(FrontierKind::Stack)
    }

    /// FIFO frontier.
    #[must_use]
    pub fn queue() -> Self {
        Self::new(FrontierKind::Queue)
    }

    /// Stable min-priority frontier.
    #[must_use]
    pub fn priority() -> Self {
        Self::new(FrontierKind::Priority)
    }

    #[must_use]
    pub fn kind(&self) -> FrontierKind {
        match self.slots {
            Slots::Stack(_) => FrontierKind::Stack,
            Slots::Queue(_) => FrontierKind::Queue,
            Slots::Priority(_) => FrontierKind::Priority,
        }
    }

    /// Push a record. `priority` is only consulted by the priority discipline.
    pub fn push(&mut self, record: T, priority: Cost) {
        let creation_order = self.next_creation_order;
        self.next_creation_order += 1;

        match &mut self.slots {
            Slots::Stack(items) => items.push(record),
            Slots::Queue(items) => items.push_back(record),
            Slots::Priority(heap) => heap.push(PriorityEntry {
                key: Reverse(FrontierKey {
                    priority,
                    creation_order,
                }),
                record,
            }),
        }

        let size = self.len() as u64;
        if size > self.high_water {
            self.high_water = size;
        }
    }

    /// Pop the next record under this frontier's discipline.
    #[must_use]
    pub fn pop(&mut self) -> Option<T> {
        self.pop_keyed().map(|(record, _)| record)
    }

    /// Pop the next record along with the priority it was pushed with.
    ///
    /// The priority is `None` for the stack and queue disciplines.
    #[must_use]
    pub fn pop_keyed(&mut self) -> Option<(T, Option<Cost>)> {
        match &mut self.slots {
            Slots::Stack(items) => items.pop().map(|r| (r, None)),
            Slots::Queue(items) => items.pop_front().map(|r| (r, None)),
            Slots::Priority(heap) => heap.pop().map(|e| (e.record, Some(e.key.0.priority))),
        }
    }

    /// Current frontier size.
    #[must_use]
    pub fn len(&self) -> usize {
        match &self.slots {
            Slots::Stack(items) => items.len(),
            Slots::Queue(items) => items.len(),
            Slots::Priority(heap) => heap.len(),
        }
    }

    /// Whether the frontier is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// High-water mark of frontier size.
    #[must_use]
    pub fn high_water(&self) -> u64 {
        self.high_water
    }

    /// Total number of records ever pushed.
    #[must_use]
    pub fn total_pushed(&self) -> u64 {
        self.next_creation_order
    }
}
