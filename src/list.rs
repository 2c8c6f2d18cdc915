use crate::error::Result;
use crate::{ArrayList, LinkedList};

/// Index based operations shared by [`ArrayList`] and [`LinkedList`].
///
/// This trait is sealed; it lets code stay generic over the storage
/// strategy while keeping the same error semantics for both.
///
/// # Example
/// ```rust
/// use duolist::{ArrayList, LinkedList, List};
///
/// fn fill<L: List<u8>>(list: &mut L) -> duolist::Result<()> {
///     list.push(1)?;
///     list.push(3)?;
///     list.insert(1, 2)
/// }
///
/// let mut array = ArrayList::new();
/// let mut linked = LinkedList::new();
/// fill(&mut array)?;
/// fill(&mut linked)?;
///
/// assert!(array.iter().eq(linked.iter()));
/// # Ok::<(), duolist::Error>(())
/// ```
pub trait List<T>: crate::sealed::Sealed {
    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Checks if there are no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops every element.
    fn clear(&mut self);

    /// Returns a reference to the element at `index`.
    fn get(&self, index: usize) -> Result<&T>;

    /// Returns a mutable reference to the element at `index`.
    fn get_mut(&mut self, index: usize) -> Result<&mut T>;

    /// Replaces the element at `index`, returning the previous one.
    fn set(&mut self, index: usize, value: T) -> Result<T>;

    /// Appends an element.
    fn push(&mut self, value: T) -> Result<()>;

    /// Inserts an element at `index`, `0 <= index <= len`.
    fn insert(&mut self, index: usize, value: T) -> Result<()>;

    /// Removes and returns the element at `index`.
    fn remove(&mut self, index: usize) -> Result<T>;
}

macro_rules! impl_list {
    ($list:ident) => {
        impl<T> List<T> for $list<T> {
            #[inline]
            fn len(&self) -> usize {
                $list::len(self)
            }

            #[inline]
            fn clear(&mut self) {
                $list::clear(self)
            }

            #[inline]
            fn get(&self, index: usize) -> Result<&T> {
                $list::get(self, index)
            }

            #[inline]
            fn get_mut(&mut self, index: usize) -> Result<&mut T> {
                $list::get_mut(self, index)
            }

            #[inline]
            fn set(&mut self, index: usize, value: T) -> Result<T> {
                $list::set(self, index, value)
            }

            #[inline]
            fn push(&mut self, value: T) -> Result<()> {
                $list::push(self, value)
            }

            #[inline]
            fn insert(&mut self, index: usize, value: T) -> Result<()> {
                $list::insert(self, index, value)
            }

            #[inline]
            fn remove(&mut self, index: usize) -> Result<T> {
                $list::remove(self, index)
            }
        }
    };
}

impl_list!(ArrayList);
impl_list!(LinkedList);

#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;

    use super::List;
    use crate::{ArrayList, Error, LinkedList};

    fn contents<L: List<i32>>(sut: &L) -> Vec<i32> {
        (0..sut.len()).map(|i| *sut.get(i).unwrap()).collect()
    }

    fn check_append_then_read_in_order<L: List<i32> + Default>() {
        let mut sut = L::default();
        for i in 0..100 {
            sut.push(i).unwrap();
        }
        assert_eq!(contents(&sut), (0..100).collect::<Vec<_>>());
    }

    fn check_set_then_get<L: List<i32> + Default>() {
        let mut sut = L::default();
        for i in 0..10 {
            sut.push(i).unwrap();
        }

        for i in 0..10 {
            assert_eq!(sut.set(i, 100 + i as i32), Ok(i as i32));
            assert_eq!(sut.get(i), Ok(&(100 + i as i32)));
        }
    }

    fn check_remove_closes_the_gap<L: List<i32> + Default>() {
        let mut sut = L::default();
        for i in 0..5 {
            sut.push(i).unwrap();
        }

        assert_eq!(sut.remove(1), Ok(1));
        assert_eq!(sut.get(1), Ok(&2));
        assert_eq!(contents(&sut), [0, 2, 3, 4]);

        assert_eq!(sut.remove(3), Ok(4));
        assert!(sut.get(3).is_err());
        assert_eq!(contents(&sut), [0, 2, 3]);
    }

    fn check_out_of_range_leaves_list_untouched<L: List<i32> + Default>() {
        let mut sut = L::default();
        sut.push(1).unwrap();
        sut.push(2).unwrap();

        let out_of_range = Error::OutOfRange { index: 2, len: 2 };
        assert_eq!(sut.get(2), Err(out_of_range));
        assert_eq!(sut.get_mut(2).map(|v| *v), Err(out_of_range));
        assert_eq!(sut.set(2, 9), Err(out_of_range));
        assert_eq!(sut.remove(2), Err(out_of_range));
        assert_eq!(sut.insert(3, 9), Err(Error::OutOfRange { index: 3, len: 2 }));
        assert_eq!(sut.len(), 2);
        assert_eq!(contents(&sut), [1, 2]);
    }

    fn check_clear_empties<L: List<i32> + Default>() {
        let mut sut = L::default();
        sut.push(1).unwrap();
        assert!(!sut.is_empty());

        sut.clear();
        assert!(sut.is_empty());
        assert_eq!(sut.len(), 0);
    }

    #[test]
    fn append_then_read_in_order() {
        check_append_then_read_in_order::<ArrayList<_>>();
        check_append_then_read_in_order::<LinkedList<_>>();
    }

    #[test]
    fn set_then_get() {
        check_set_then_get::<ArrayList<_>>();
        check_set_then_get::<LinkedList<_>>();
    }

    #[test]
    fn remove_closes_the_gap() {
        check_remove_closes_the_gap::<ArrayList<_>>();
        check_remove_closes_the_gap::<LinkedList<_>>();
    }

    #[test]
    fn out_of_range_leaves_list_untouched() {
        check_out_of_range_leaves_list_untouched::<ArrayList<_>>();
        check_out_of_range_leaves_list_untouched::<LinkedList<_>>();
    }

    #[test]
    fn clear_empties() {
        check_clear_empties::<ArrayList<_>>();
        check_clear_empties::<LinkedList<_>>();
    }

    #[quickcheck]
    fn both_lists_agree(seed: Vec<i32>) {
        let mut array: ArrayList<i32> = seed.iter().copied().collect();
        let mut linked: LinkedList<i32> = seed.iter().copied().collect();

        for _ in 0..64 {
            let len = array.len();
            assert_eq!(len, linked.len());
            assert!(array.iter().eq(linked.iter()));

            let index = rand::random_range(0..=len);
            let value = rand::random();
            if rand::random() {
                assert_eq!(
                    List::insert(&mut array, index, value),
                    List::insert(&mut linked, index, value)
                );
            } else {
                assert_eq!(
                    List::remove(&mut array, index),
                    List::remove(&mut linked, index)
                );
            }
        }
    }
}
