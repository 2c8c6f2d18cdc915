use core::iter::FusedIterator;

use super::node::{HEAD, TAIL};
use crate::LinkedList;

/// An owning iterator over the elements of a [`LinkedList`].
///
/// This struct is created by [`IntoIterator::into_iter`] on the list.
#[derive(Clone)]
pub struct IntoIter<T> {
    list: LinkedList<T>,
}

impl<T> Default for IntoIter<T> {
    fn default() -> Self {
        Self {
            list: LinkedList::new(),
        }
    }
}

impl<T> IntoIter<T> {
    pub(crate) fn from_list(list: LinkedList<T>) -> Self {
        Self { list }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.list.is_empty() {
            return None;
        }

        let first = self.list.slots[HEAD].link().next;
        Some(self.list.unlink(first))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }

    #[inline]
    fn last(mut self) -> Option<Self::Item> {
        self.next_back()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.list.is_empty() {
            return None;
        }

        let last = self.list.slots[TAIL].link().prev;
        Some(self.list.unlink(last))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> core::fmt::Debug for IntoIter<T>
where
    T: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("IntoIter").field(&self.list).finish()
    }
}
