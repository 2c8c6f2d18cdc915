mod cursor;
mod into_iter;
mod iter;
mod node;

pub use cursor::Cursor;
pub use into_iter::IntoIter;
pub use iter::Iter;

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::mem;

use tracing::trace;

use crate::error::{Error, Result};

use self::node::{HEAD, Link, Node, Slot, TAIL};

/// A doubly linked list with index based access and fail-fast cursors.
///
/// Nodes live in an arena and refer to each other by position, with two
/// permanent sentinels framing the elements. Insertion and removal relink
/// exactly two neighbours; resolving an index walks from whichever end is
/// nearer, so it costs at most `len / 2` steps.
///
/// Every structural change bumps a version stamp that outstanding
/// [`Cursor`]s compare against, so a cursor notices modifications made
/// behind its back instead of reading through stale links.
///
/// # Example
/// ```rust
/// use duolist::LinkedList;
///
/// let mut list = LinkedList::new();
/// list.push(10)?;
/// list.push(20)?;
/// list.insert(1, 15)?;
/// assert_eq!(list, [10, 15, 20]);
///
/// assert_eq!(list.remove(2), Ok(20));
/// assert_eq!(list, [10, 15]);
/// # Ok::<(), duolist::Error>(())
/// ```
pub struct LinkedList<T> {
    slots: Vec<Slot<T>>,
    free: Option<usize>,
    len: usize,
    version: u64,
}

impl<T> LinkedList<T> {
    /// Creates a new, empty `LinkedList` holding only its two sentinels.
    ///
    /// # Example
    /// ```rust
    /// use duolist::LinkedList;
    ///
    /// let list: LinkedList<i64> = LinkedList::new();
    ///
    /// assert!(list.is_empty());
    /// ```
    pub fn new() -> Self {
        Self {
            slots: vec![Slot::sentinel(), Slot::sentinel()],
            free: None,
            len: 0,
            version: 0,
        }
    }

    /// Returns the number of elements currently stored in the `LinkedList`.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Checks if the `LinkedList` is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    /// - [`Error::OutOfRange`] unless `index < len`.
    ///
    /// # Example
    /// ```rust
    /// use duolist::{Error, LinkedList};
    ///
    /// let list = LinkedList::from([10, 20]);
    ///
    /// assert_eq!(list.get(1), Ok(&20));
    /// assert_eq!(list.get(2), Err(Error::OutOfRange { index: 2, len: 2 }));
    /// ```
    pub fn get(&self, index: usize) -> Result<&T> {
        self.check_index(index)?;
        Ok(&self.slots[self.position_of(index)].node().value)
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    /// - [`Error::OutOfRange`] unless `index < len`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        self.check_index(index)?;
        let at = self.position_of(index);
        Ok(&mut self.slots[at].node_mut().value)
    }

    /// Replaces the element at `index`, returning the previous one.
    ///
    /// This is not a structural change: outstanding cursors stay valid.
    ///
    /// # Errors
    /// - [`Error::OutOfRange`] unless `index < len`.
    pub fn set(&mut self, index: usize, value: T) -> Result<T> {
        self.get_mut(index).map(|slot| mem::replace(slot, value))
    }

    /// Appends an element to the back of the `LinkedList`.
    ///
    /// # Errors
    /// - [`Error::AllocationFailure`] if the node arena cannot grow.
    pub fn push(&mut self, value: T) -> Result<()> {
        self.link_before(TAIL, value)
    }

    /// Inserts an element at `index`, in front of the element currently there.
    ///
    /// # Errors
    /// - [`Error::OutOfRange`] unless `index <= len`.
    /// - [`Error::AllocationFailure`] if the node arena cannot grow.
    ///
    /// # Example
    /// ```rust
    /// use duolist::LinkedList;
    ///
    /// let mut list = LinkedList::from([10, 30]);
    /// list.insert(1, 20)?;
    /// list.insert(0, 0)?;
    /// list.insert(4, 40)?;
    ///
    /// assert_eq!(list, [0, 10, 20, 30, 40]);
    /// assert!(list.insert(9, 90).is_err());
    /// # Ok::<(), duolist::Error>(())
    /// ```
    pub fn insert(&mut self, index: usize, value: T) -> Result<()> {
        if index > self.len {
            return Err(Error::OutOfRange {
                index,
                len: self.len,
            });
        }

        self.link_before(self.position_of(index), value)
    }

    /// Removes and returns the element at `index`.
    ///
    /// # Errors
    /// - [`Error::OutOfRange`] unless `index < len`.
    pub fn remove(&mut self, index: usize) -> Result<T> {
        self.check_index(index)?;
        Ok(self.unlink(self.position_of(index)))
    }

    /// Drops every element, leaving only the two sentinels linked to each other.
    ///
    /// Outstanding cursors are invalidated.
    pub fn clear(&mut self) {
        self.slots.truncate(2);
        self.slots[HEAD] = Slot::sentinel();
        self.slots[TAIL] = Slot::sentinel();
        self.free = None;
        self.len = 0;
        self.version += 1;

        trace!(version = self.version, "cleared linked list");
    }

    /// Provides an iterator over list's elements.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::from_list(self)
    }

    /// Provides a fail-fast traversal cursor positioned before the first element.
    ///
    /// # Example
    /// ```rust
    /// use duolist::{Error, LinkedList};
    ///
    /// let mut list = LinkedList::from([1, 2, 3]);
    /// let mut cursor = list.cursor();
    ///
    /// assert_eq!(cursor.next(&list), Ok(&1));
    /// list.push(4)?;
    /// assert_eq!(cursor.next(&list), Err(Error::ConcurrentModification));
    /// # Ok::<(), duolist::Error>(())
    /// ```
    #[inline]
    pub fn cursor(&self) -> Cursor {
        Cursor::from_list(self)
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.len {
            return Err(Error::OutOfRange {
                index,
                len: self.len,
            });
        }

        Ok(())
    }

    /// Resolves `index` to an arena position, `TAIL` when `index == len`.
    fn position_of(&self, index: usize) -> usize {
        debug_assert!(index <= self.len);

        if index < self.len / 2 {
            (0..index).fold(self.slots[HEAD].link().next, |at, _| {
                self.slots[at].link().next
            })
        } else {
            (index..self.len).fold(TAIL, |at, _| self.slots[at].link().prev)
        }
    }

    fn link_before(&mut self, at: usize, value: T) -> Result<()> {
        let prev = self.slots[at].link().prev;
        let node = Node {
            value,
            link: Link::new(prev, at),
        };

        let new = match self.free {
            Some(free) => {
                let Slot::Vacant { next_free } = self.slots[free] else {
                    unreachable!("free list points at a linked slot");
                };
                self.free = next_free;
                self.slots[free] = Slot::Occupied(node);
                free
            }
            None => {
                self.slots
                    .try_reserve(1)
                    .map_err(|_| Error::AllocationFailure {
                        capacity: self.slots.len() + 1,
                    })?;
                self.slots.push(Slot::Occupied(node));
                self.slots.len() - 1
            }
        };

        self.slots[prev].link_mut().next = new;
        self.slots[at].link_mut().prev = new;
        self.len += 1;
        self.version += 1;
        Ok(())
    }

    fn unlink(&mut self, at: usize) -> T {
        debug_assert!(at != HEAD && at != TAIL);

        let Node { value, link } = self.slots[at].vacate(self.free);
        self.free = Some(at);

        self.slots[link.prev].link_mut().next = link.next;
        self.slots[link.next].link_mut().prev = link.prev;
        self.len -= 1;
        self.version += 1;
        value
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const M: usize> From<[T; M]> for LinkedList<T> {
    fn from(values: [T; M]) -> Self {
        values.into_iter().collect()
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut this = Self::new();
        this.extend(iter);
        this
    }
}

impl<T> Extend<T> for LinkedList<T> {
    /// # Panics
    /// - Panics if the node arena cannot grow to hold the new elements.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value).unwrap_or_else(|error| panic!("{error}"));
        }
    }
}

impl<'a, T> Extend<&'a T> for LinkedList<T>
where
    T: Clone,
{
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().cloned());
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T, const M: usize> PartialEq<[T; M]> for LinkedList<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &[T; M]) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T> PartialEq<&[T]> for LinkedList<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &&[T]) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T> PartialEq<[T]> for LinkedList<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &[T]) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T> PartialEq for LinkedList<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T> Eq for LinkedList<T> where T: Eq {}

impl<T> PartialOrd for LinkedList<T>
where
    T: PartialOrd,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other)
    }
}

impl<T> Ord for LinkedList<T>
where
    T: Ord,
{
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}

impl<T> Hash for LinkedList<T>
where
    T: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        self.iter().for_each(|v| v.hash(state));
    }
}

impl<T> std::fmt::Debug for LinkedList<T>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::from_list(self)
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter::from_list(self)
    }
}
