//! Persistent (immutable) FIFO queue.
//!
//! This module provides [`PersistentQueue`], the classic banker's queue:
//! two [`PersistentList`]s, one holding the front of the queue in order
//! and one holding the back in reverse. Elements are pushed onto the back
//! list in O(1); when the front list drains, the back list is reversed
//! once to become the new front, giving amortized O(1) `pop_front`.
//!
//! # Invariant
//!
//! If the front list is empty, the back list is empty too. Every
//! constructor re-establishes this, so `front()` only ever needs to look
//! at the front list.
//!
//! # Examples
//!
//! ```rust
//! use evergreen::persistent::PersistentQueue;
//!
//! let queue = PersistentQueue::new()
//!     .push_back(1)
//!     .push_back(2)
//!     .push_back(3);
//!
//! assert_eq!(queue.front(), Some(&1));
//!
//! // Structural sharing: the original queue is preserved
//! let shorter = queue.pop_front();
//! assert_eq!(queue.len(), 3);   // Original unchanged
//! assert_eq!(shorter.len(), 2); // New queue
//! ```

use std::fmt;
use std::iter::FromIterator;

use super::PersistentList;
use crate::typeclass::{Foldable, TypeConstructor};

/// A persistent (immutable) FIFO queue built from two persistent lists.
///
/// # Time Complexity
///
/// | Operation   | Complexity     |
/// |-------------|----------------|
/// | `new`       | O(1)           |
/// | `push_back` | O(1)           |
/// | `front`     | O(1)           |
/// | `pop_front` | amortized O(1) |
/// | `len`       | O(1)           |
///
/// # Examples
///
/// ```rust
/// use evergreen::persistent::PersistentQueue;
///
/// let queue = PersistentQueue::singleton(42);
/// assert_eq!(queue.front(), Some(&42));
/// ```
pub struct PersistentQueue<T> {
    /// Front of the queue, in dequeue order.
    front: PersistentList<T>,
    /// Back of the queue, most recently pushed first.
    back: PersistentList<T>,
}

impl<T> Clone for PersistentQueue<T> {
    fn clone(&self) -> Self {
        Self {
            front: self.front.clone(),
            back: self.back.clone(),
        }
    }
}

impl<T> PersistentQueue<T> {
    /// Creates a new empty queue.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use evergreen::persistent::PersistentQueue;
    ///
    /// let queue: PersistentQueue<i32> = PersistentQueue::new();
    /// assert!(queue.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            front: PersistentList::new(),
            back: PersistentList::new(),
        }
    }

    /// Creates a queue containing a single element.
    #[inline]
    #[must_use]
    pub fn singleton(element: T) -> Self {
        Self {
            front: PersistentList::singleton(element),
            back: PersistentList::new(),
        }
    }

    /// Returns the number of elements in the queue.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.front.len() + self.back.len()
    }

    /// Returns `true` if the queue contains no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        // front empty implies back empty
        self.front.is_empty()
    }

    /// Returns a reference to the element at the front of the queue.
    #[inline]
    #[must_use]
    pub fn front(&self) -> Option<&T> {
        self.front.head()
    }

    /// Enqueues an element at the back, returning the new queue version.
    ///
    /// # Complexity
    ///
    /// O(1)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use evergreen::persistent::PersistentQueue;
    ///
    /// let queue = PersistentQueue::new().push_back(1).push_back(2);
    /// assert_eq!(queue.front(), Some(&1));
    /// assert_eq!(queue.len(), 2);
    /// ```
    #[must_use]
    pub fn push_back(&self, element: T) -> Self {
        if self.is_empty() {
            Self {
                front: PersistentList::singleton(element),
                back: PersistentList::new(),
            }
        } else {
            Self {
                front: self.front.clone(),
                back: self.back.cons(element),
            }
        }
    }
}

impl<T: Clone> PersistentQueue<T> {
    /// Dequeues the front element, returning the new queue version.
    ///
    /// Popping an empty queue returns an empty queue. When the front list
    /// drains, the back list is reversed to replace it; this single O(n)
    /// rotation is what the amortized O(1) bound pays for.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use evergreen::persistent::PersistentQueue;
    ///
    /// let queue = PersistentQueue::new().push_back(1).push_back(2);
    /// let shorter = queue.pop_front();
    ///
    /// assert_eq!(shorter.front(), Some(&2));
    /// assert_eq!(queue.front(), Some(&1)); // Original unchanged
    /// ```
    #[must_use]
    pub fn pop_front(&self) -> Self {
        let front = self.front.tail();
        if front.is_empty() {
            Self {
                front: self.back.reverse(),
                back: PersistentList::new(),
            }
        } else {
            Self {
                front,
                back: self.back.clone(),
            }
        }
    }

    /// Returns an iterator over the queue's elements in dequeue order.
    ///
    /// The iterator owns a snapshot of the queue and pops it as it goes,
    /// cloning elements out; the queue itself is unaffected.
    #[must_use]
    pub fn iter(&self) -> PersistentQueueIterator<T> {
        PersistentQueueIterator {
            queue: self.clone(),
        }
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over the elements of a [`PersistentQueue`] in dequeue order.
pub struct PersistentQueueIterator<T> {
    queue: PersistentQueue<T>,
}

impl<T: Clone> Iterator for PersistentQueueIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let element = self.queue.front()?.clone();
        self.queue = self.queue.pop_front();
        Some(element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.queue.len(), Some(self.queue.len()))
    }
}

impl<T: Clone> ExactSizeIterator for PersistentQueueIterator<T> {
    fn len(&self) -> usize {
        self.queue.len()
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for PersistentQueue<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for PersistentQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        // Building through the front list directly keeps construction O(n)
        // with no rotations.
        Self {
            front: iter.into_iter().collect(),
            back: PersistentList::new(),
        }
    }
}

impl<T: Clone> IntoIterator for PersistentQueue<T> {
    type Item = T;
    type IntoIter = PersistentQueueIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        PersistentQueueIterator { queue: self }
    }
}

impl<T: Clone + PartialEq> PartialEq for PersistentQueue<T> {
    /// Queues are equal when they dequeue the same element sequence,
    /// regardless of how the elements are split between the two lists.
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Clone + Eq> Eq for PersistentQueue<T> {}

impl<T: Clone + fmt::Debug> fmt::Debug for PersistentQueue<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<T> TypeConstructor for PersistentQueue<T> {
    type Inner = T;
    type WithType<B> = PersistentQueue<B>;
}

impl<T: Clone> Foldable for PersistentQueue<T> {
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        self.into_iter().fold(init, function)
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        let elements: Vec<T> = self.into_iter().collect();
        elements
            .into_iter()
            .rev()
            .fold(init, |accumulator, element| function(element, accumulator))
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.front.is_empty()
    }

    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}

// =============================================================================
// Tests
// =============================================================================
