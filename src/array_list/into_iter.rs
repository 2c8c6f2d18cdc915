use core::iter::FusedIterator;
use core::mem::{self, MaybeUninit};
use core::ptr;
use core::slice;

use crate::ArrayList;

/// An owning iterator over the elements of an [`ArrayList`].
///
/// This struct is created by [`IntoIterator::into_iter`] on the list.
pub struct IntoIter<T> {
    storage: Box<[MaybeUninit<T>]>,
    front: usize,
    back: usize,
}

impl<T> Default for IntoIter<T> {
    fn default() -> Self {
        Self {
            storage: Box::new([]),
            front: 0,
            back: 0,
        }
    }
}

impl<T> IntoIter<T> {
    pub(crate) fn from_list(mut list: ArrayList<T>) -> Self {
        let back = mem::take(&mut list.len);
        Self {
            storage: mem::replace(&mut list.storage, Box::new([])),
            front: 0,
            back,
        }
    }

    /// Returns the remaining elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: slots in `front..back` are initialized and not yet yielded.
        unsafe {
            slice::from_raw_parts(
                self.storage.as_ptr().add(self.front).cast::<T>(),
                self.back - self.front,
            )
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }

        // SAFETY: the slot is initialized and leaves the live range right away.
        let value = unsafe { self.storage[self.front].assume_init_read() };
        self.front += 1;
        Some(value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back - self.front;
        (len, Some(len))
    }

    #[inline]
    fn last(mut self) -> Option<Self::Item> {
        self.next_back()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }

        self.back -= 1;
        // SAFETY: the slot is initialized and just left the live range.
        Some(unsafe { self.storage[self.back].assume_init_read() })
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        let remaining: *mut [T] = ptr::slice_from_raw_parts_mut(
            self.storage[self.front..].as_mut_ptr().cast::<T>(),
            self.back - self.front,
        );
        self.front = self.back;

        // SAFETY: the remaining slots are initialized and dropped exactly once.
        unsafe { ptr::drop_in_place(remaining) };
    }
}

impl<T: Clone> Clone for IntoIter<T> {
    fn clone(&self) -> Self {
        self.as_slice()
            .iter()
            .cloned()
            .collect::<ArrayList<_>>()
            .into_iter()
    }
}

impl<T> core::fmt::Debug for IntoIter<T>
where
    T: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}
