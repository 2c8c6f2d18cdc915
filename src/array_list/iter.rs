use core::iter::FusedIterator;
use core::slice;

use crate::ArrayList;

/// An iterator over the elements of an [`ArrayList`].
///
/// This struct is created by [`ArrayList::iter`].
pub struct Iter<'a, T> {
    delegate: slice::Iter<'a, T>,
}

impl<T> Default for Iter<'_, T> {
    fn default() -> Self {
        Self {
            delegate: <&[T]>::default().iter(),
        }
    }
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn from_list(list: &'a ArrayList<T>) -> Self {
        Self {
            delegate: list.as_slice().iter(),
        }
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            delegate: self.delegate.clone(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.delegate.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.delegate.size_hint()
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.delegate.nth(n)
    }

    #[inline]
    fn last(mut self) -> Option<Self::Item> {
        self.next_back()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.delegate.next_back()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        self.delegate.len()
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> core::fmt::Debug for Iter<'_, T>
where
    T: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("Iter")
            .field(&self.delegate.as_slice())
            .field(&self.delegate.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::ArrayList;

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
        let mut list = ArrayList::from([0, 1, 2, 3, 4]);
        let sut = list.iter();
        assert_eq!(&sut.copied().collect::<Vec<_>>(), &[0, 1, 2, 3, 4]);

        list.clear();
        let sut = list.iter();
        assert_eq!(&sut.copied().collect::<Vec<_>>(), &[]);
    }

    #[test]
    fn iter_backward() {
        let list = ArrayList::from([0, 1, 2, 3, 4]);
        let sut = list.iter().rev();
        assert_eq!(&sut.copied().collect::<Vec<_>>(), &[4, 3, 2, 1, 0]);
    }

    #[test]
    fn double_ended_iterator_works_correctly() {
        let list = ArrayList::from([0, 1, 2]);

        let mut sut = list.iter();
        assert_eq!(sut.len(), 3);

        assert_eq!(sut.next(), Some(&0));
        assert_eq!(sut.next_back(), Some(&2));
        assert_eq!(sut.len(), 1);

        assert_eq!(sut.next(), Some(&1));
        assert_eq!(sut.next_back(), None);
        assert_eq!(sut.next(), None);
        assert_eq!(sut.len(), 0);
    }

    #[test]
    fn iteration_restarts_on_every_call() {
        let list = ArrayList::from([1, 2, 3]);

        let mut first = list.iter();
        first.next();

        assert_eq!(list.iter().next(), Some(&1));
        assert_eq!((&list).into_iter().count(), 3);
    }

    #[test]
    fn debug_works_correctly() {
        let array = [0, 1, 2, 3, 4];
        let list = ArrayList::from(array);
        let sut = list.iter();
        assert_eq!(
            format!("{sut:?}"),
            format!("Iter({:?}, {})", array, array.len())
        );
    }
}
