mod cursor;
mod into_iter;
mod iter;

pub use cursor::Cursor;
pub use into_iter::IntoIter;
pub use iter::Iter;

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::mem::{self, MaybeUninit};
use std::ptr;
use std::slice;

use tracing::{trace, warn};

use crate::error::{Error, Result};

/// Capacity the storage is reset to by [`ArrayList::clear`].
pub const DEFAULT_CAPACITY: usize = 10;

/// A growable, contiguous list with indexed access.
///
/// Appending is amortized *O*(1): whenever the storage is full it is replaced
/// by a block of `2 * len + 1` slots. Insertion and removal at an arbitrary
/// index shift the tail of the list and are *O*(n).
///
/// # Example
/// ```rust
/// use duolist::ArrayList;
///
/// let mut list = ArrayList::new();
/// list.push(1)?;
/// list.push(2)?;
/// list.push(3)?;
/// assert_eq!(list.get(1), Ok(&2));
///
/// assert_eq!(list.remove(0), Ok(1));
/// assert_eq!(list.get(0), Ok(&2));
/// assert_eq!(list.len(), 2);
/// # Ok::<(), duolist::Error>(())
/// ```
pub struct ArrayList<T> {
    storage: Box<[MaybeUninit<T>]>,
    len: usize,
}

impl<T> ArrayList<T> {
    /// Creates a new, empty `ArrayList` without allocating.
    ///
    /// # Example
    /// ```rust
    /// use duolist::ArrayList;
    ///
    /// let list: ArrayList<i64> = ArrayList::new();
    ///
    /// assert!(list.is_empty());
    /// assert_eq!(list.capacity(), 0);
    /// ```
    pub fn new() -> Self {
        Self {
            storage: Box::new([]),
            len: 0,
        }
    }

    /// Creates a new, empty `ArrayList` able to hold `capacity` elements
    /// before reallocating.
    ///
    /// # Errors
    /// - [`Error::AllocationFailure`] if the storage cannot be allocated.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        Ok(Self {
            storage: Self::allocate(capacity)?,
            len: 0,
        })
    }

    /// Returns the number of elements currently stored in the `ArrayList`.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Checks if the `ArrayList` is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slots in the backing storage.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// Returns the live elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: the first `len` slots are initialized.
        unsafe { slice::from_raw_parts(self.storage.as_ptr().cast::<T>(), self.len) }
    }

    /// Returns the live elements as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: the first `len` slots are initialized.
        unsafe { slice::from_raw_parts_mut(self.storage.as_mut_ptr().cast::<T>(), self.len) }
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    /// - [`Error::OutOfRange`] unless `index < len`.
    ///
    /// # Example
    /// ```rust
    /// use duolist::{ArrayList, Error};
    ///
    /// let list = ArrayList::from([10, 20]);
    ///
    /// assert_eq!(list.get(1), Ok(&20));
    /// assert_eq!(list.get(2), Err(Error::OutOfRange { index: 2, len: 2 }));
    /// ```
    pub fn get(&self, index: usize) -> Result<&T> {
        self.as_slice().get(index).ok_or(Error::OutOfRange {
            index,
            len: self.len,
        })
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    /// - [`Error::OutOfRange`] unless `index < len`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        let len = self.len;
        self.as_mut_slice()
            .get_mut(index)
            .ok_or(Error::OutOfRange { index, len })
    }

    /// Replaces the element at `index`, returning the previous one.
    ///
    /// # Errors
    /// - [`Error::OutOfRange`] unless `index < len`.
    ///
    /// # Example
    /// ```rust
    /// use duolist::ArrayList;
    ///
    /// let mut list = ArrayList::from([1, 2, 3]);
    ///
    /// assert_eq!(list.set(1, 20), Ok(2));
    /// assert_eq!(list, [1, 20, 3]);
    /// ```
    pub fn set(&mut self, index: usize, value: T) -> Result<T> {
        self.get_mut(index).map(|slot| mem::replace(slot, value))
    }

    /// Reallocates the storage to exactly `capacity` slots, keeping every
    /// element in place.
    ///
    /// Does nothing if `capacity` is smaller than the current length. This is
    /// the only path that replaces the storage; the old block is released once
    /// the elements have been moved over.
    ///
    /// # Errors
    /// - [`Error::AllocationFailure`] if the new storage cannot be allocated.
    ///   The list keeps its previous storage.
    ///
    /// # Example
    /// ```rust
    /// use duolist::ArrayList;
    ///
    /// let mut list = ArrayList::from([1, 2, 3]);
    /// list.ensure_capacity(32)?;
    ///
    /// assert_eq!(list.capacity(), 32);
    /// assert_eq!(list, [1, 2, 3]);
    /// # Ok::<(), duolist::Error>(())
    /// ```
    pub fn ensure_capacity(&mut self, capacity: usize) -> Result<()> {
        if capacity < self.len {
            return Ok(());
        }

        let mut storage = Self::allocate(capacity)?;

        // SAFETY: both blocks hold at least `len` slots, they are distinct
        // allocations, and the first `len` slots of the old block are initialized.
        // The old block stores `MaybeUninit<T>`, so releasing it does not drop
        // the moved elements.
        unsafe {
            ptr::copy_nonoverlapping(self.storage.as_ptr(), storage.as_mut_ptr(), self.len);
        }

        trace!(
            from = self.storage.len(),
            to = capacity,
            len = self.len,
            "reallocated array list storage"
        );
        self.storage = storage;
        Ok(())
    }

    /// Shrinks the storage to exactly the current length.
    ///
    /// # Errors
    /// - [`Error::AllocationFailure`] if the new storage cannot be allocated.
    pub fn trim_to_size(&mut self) -> Result<()> {
        self.ensure_capacity(self.len)
    }

    /// Appends an element to the back of the `ArrayList`.
    ///
    /// # Errors
    /// - [`Error::AllocationFailure`] if the storage is full and cannot grow.
    pub fn push(&mut self, value: T) -> Result<()> {
        self.insert(self.len, value)
    }

    /// Inserts an element at `index`, shifting subsequent elements towards the back.
    ///
    /// # Errors
    /// - [`Error::OutOfRange`] unless `index <= len`.
    /// - [`Error::AllocationFailure`] if the storage is full and cannot grow.
    ///
    /// # Example
    /// ```rust
    /// use duolist::ArrayList;
    ///
    /// let mut list = ArrayList::from([10, 30]);
    /// list.insert(1, 20)?;
    /// list.insert(3, 40)?;
    ///
    /// assert_eq!(list, [10, 20, 30, 40]);
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

        if self.len == self.capacity() {
            self.ensure_capacity(self.len.saturating_mul(2).saturating_add(1))?;
        }

        // SAFETY: `len < capacity`, so the shifted range `index + 1..=len` is in bounds.
        unsafe {
            let base = self.storage.as_mut_ptr();
            ptr::copy(base.add(index), base.add(index + 1), self.len - index);
            base.add(index).write(MaybeUninit::new(value));
        }

        self.len += 1;
        Ok(())
    }

    /// Removes and returns the element at `index`, shifting subsequent elements
    /// towards the front. The capacity is left untouched.
    ///
    /// # Errors
    /// - [`Error::OutOfRange`] unless `index < len`.
    ///
    /// # Example
    /// ```rust
    /// use duolist::ArrayList;
    ///
    /// let mut list = ArrayList::from([10, 20, 30]);
    ///
    /// assert_eq!(list.remove(1), Ok(20));
    /// assert_eq!(list, [10, 30]);
    /// assert_eq!(list.capacity(), 3);
    /// ```
    pub fn remove(&mut self, index: usize) -> Result<T> {
        if index >= self.len {
            return Err(Error::OutOfRange {
                index,
                len: self.len,
            });
        }

        // SAFETY: `index < len`, so the slot is initialized. Its bits are
        // overwritten by the shift and never read again. The shifted range
        // `index + 1..len` lies within the initialized prefix.
        let value = unsafe {
            let base = self.storage.as_mut_ptr();
            let value = (*base.add(index)).assume_init_read();
            ptr::copy(base.add(index + 1), base.add(index), self.len - index - 1);
            value
        };

        self.len -= 1;
        Ok(value)
    }

    /// Drops every element and resets the storage to [`DEFAULT_CAPACITY`] slots.
    ///
    /// Should the fresh storage be unavailable, the current one is kept.
    pub fn clear(&mut self) {
        let elements: *mut [T] = self.as_mut_slice();
        self.len = 0;

        // SAFETY: `len` is already zero, so the elements are unreachable from
        // the list and are dropped exactly once.
        unsafe { ptr::drop_in_place(elements) };

        if self.capacity() == DEFAULT_CAPACITY {
            return;
        }

        match Self::allocate(DEFAULT_CAPACITY) {
            Ok(storage) => self.storage = storage,
            Err(error) => warn!(%error, "keeping previous array list storage after clear"),
        }
    }

    /// Provides an iterator over list's elements.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::from_list(self)
    }

    /// Provides a traversal cursor positioned before the first element.
    ///
    /// # Example
    /// ```rust
    /// use duolist::ArrayList;
    ///
    /// let mut list = ArrayList::from([1, 2, 3, 4]);
    /// let mut cursor = list.cursor();
    ///
    /// while cursor.has_next(&list) {
    ///     if cursor.next(&list)? % 2 == 0 {
    ///         cursor.remove(&mut list)?;
    ///     }
    /// }
    ///
    /// assert_eq!(list, [1, 3]);
    /// # Ok::<(), duolist::Error>(())
    /// ```
    #[inline]
    pub fn cursor(&self) -> Cursor {
        Cursor::new()
    }

    fn allocate(capacity: usize) -> Result<Box<[MaybeUninit<T>]>> {
        let mut storage = Vec::new();
        storage
            .try_reserve_exact(capacity)
            .map_err(|_| Error::AllocationFailure { capacity })?;

        // SAFETY: `MaybeUninit<T>` needs no initialization and the reservation
        // above guarantees room for `capacity` slots.
        unsafe { storage.set_len(capacity) };
        Ok(storage.into_boxed_slice())
    }
}

impl<T> Drop for ArrayList<T> {
    fn drop(&mut self) {
        let elements: *mut [T] = self.as_mut_slice();
        self.len = 0;

        // SAFETY: the elements are initialized and dropped exactly once.
        unsafe { ptr::drop_in_place(elements) };
    }
}

impl<T> Default for ArrayList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const M: usize> From<[T; M]> for ArrayList<T> {
    fn from(values: [T; M]) -> Self {
        values.into_iter().collect()
    }
}

impl<T> FromIterator<T> for ArrayList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut this = Self::new();
        this.extend(iter);
        this
    }
}

impl<T> Extend<T> for ArrayList<T> {
    /// # Panics
    /// - Panics if the storage cannot grow to hold the new elements.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();

        let (lower, _) = iter.size_hint();
        let wanted = self.len.saturating_add(lower);
        if wanted > self.capacity() {
            self.ensure_capacity(wanted)
                .unwrap_or_else(|error| panic!("{error}"));
        }

        for value in iter {
            self.push(value).unwrap_or_else(|error| panic!("{error}"));
        }
    }
}

impl<'a, T> Extend<&'a T> for ArrayList<T>
where
    T: Clone,
{
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().cloned());
    }
}

impl<T: Clone> Clone for ArrayList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T, const M: usize> PartialEq<[T; M]> for ArrayList<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &[T; M]) -> bool {
        self.as_slice() == other
    }
}

impl<T> PartialEq<&[T]> for ArrayList<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &&[T]) -> bool {
        self.as_slice() == *other
    }
}

impl<T> PartialEq<[T]> for ArrayList<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}

impl<T> PartialEq for ArrayList<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T> Eq for ArrayList<T> where T: Eq {}

impl<T> PartialOrd for ArrayList<T>
where
    T: PartialOrd,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other)
    }
}

impl<T> Ord for ArrayList<T>
where
    T: Ord,
{
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}

impl<T> Hash for ArrayList<T>
where
    T: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        self.iter().for_each(|v| v.hash(state));
    }
}

impl<T> std::fmt::Debug for ArrayList<T>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> IntoIterator for ArrayList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::from_list(self)
    }
}

impl<'a, T> IntoIterator for &'a ArrayList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter::from_list(self)
    }
}
