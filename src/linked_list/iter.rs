use core::iter::FusedIterator;

use super::node::{HEAD, Slot, TAIL};
use crate::LinkedList;

/// An iterator over the elements of a [`LinkedList`].
///
/// This struct is created by [`LinkedList::iter`].
pub struct Iter<'a, T> {
    slots: &'a [Slot<T>],
    front: usize,
    back: usize,
    len: usize,
}

impl<T> Default for Iter<'_, T> {
    fn default() -> Self {
        Self {
            slots: &[],
            front: TAIL,
            back: HEAD,
            len: 0,
        }
    }
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn from_list(list: &'a LinkedList<T>) -> Self {
        Self {
            slots: &list.slots,
            front: list.slots[HEAD].link().next,
            back: list.slots[TAIL].link().prev,
            len: list.len,
        }
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self { ..*self }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }

        let node = self.slots[self.front].node();
        self.front = node.link.next;
        self.len -= 1;
        Some(&node.value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }

    #[inline]
    fn last(mut self) -> Option<Self::Item> {
        self.next_back()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }

        let node = self.slots[self.back].node();
        self.back = node.link.prev;
        self.len -= 1;
        Some(&node.value)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        self.len
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> core::fmt::Debug for Iter<'_, T>
where
    T: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("Iter")
            .field(&self.clone().collect::<Vec<_>>())
            .field(&self.len)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::LinkedList;

    use super::Iter;

    #[test]
    fn default_iterator_yelds_nothing() {
        let mut sut: Iter<i32> = Default::default();
        assert_eq!(sut.len(), 0);
        assert_eq!(sut.next(), None);
        assert_eq!(sut.next_back(), None);
    }

    #[test]
    fn iter_forward() {
        let mut list = LinkedList::from([0, 1, 2, 3, 4]);
        let sut = list.iter();
        assert_eq!(&sut.copied().collect::<Vec<_>>(), &[0, 1, 2, 3, 4]);

        list.clear();
        let sut = list.iter();
        assert_eq!(&sut.copied().collect::<Vec<_>>(), &[]);
    }

    #[test]
    fn iter_backward() {
        let mut list = LinkedList::from([0, 1, 2, 3, 4]);
        list.remove(2).unwrap();
        list.insert(0, 9).unwrap();

        let sut = list.iter().rev();
        assert_eq!(&sut.copied().collect::<Vec<_>>(), &[4, 3, 1, 0, 9]);
    }

    #[test]
    fn double_ended_iterator_works_correctly() {
        let list = LinkedList::from([0, 1, 2, 3, 4]);

        let mut sut = list.iter();
        assert_eq!(sut.len(), 5);

        assert_eq!(sut.next(), Some(&0));
        assert_eq!(sut.len(), 4);

        assert_eq!(sut.next_back(), Some(&4));
        assert_eq!(sut.len(), 3);

        assert_eq!(sut.next(), Some(&1));
        assert_eq!(sut.next_back(), Some(&3));
        assert_eq!(sut.next(), Some(&2));
        assert_eq!(sut.len(), 0);

        assert_eq!(sut.next_back(), None);
        assert_eq!(sut.next(), None);
    }

    #[test]
    fn last_works_correctly() {
        let list = LinkedList::from([0, 1, 2, 3, 4]);
        assert_eq!(list.iter().last(), Some(&4));
    }

    #[test]
    fn clone_works_correctly() {
        let list = LinkedList::from([0, 1, 2, 3, 4]);

        let mut base = list.iter();
        base.next();
        base.next_back();

        let sut = base.clone();
        assert_eq!(&sut.copied().collect::<Vec<_>>(), &[1, 2, 3]);
    }

    #[test]
    fn debug_works_correctly() {
        let list = LinkedList::from([0, 1, 2]);
        let sut = list.iter();
        assert_eq!(format!("{sut:?}"), "Iter([0, 1, 2], 3)");
    }
}
