use crate::ArrayList;
use crate::error::{Error, Result};

/// A forward traversal cursor over an [`ArrayList`].
///
/// The cursor only remembers positions; the list is handed to every call.
/// Removing through the cursor deletes the element yielded last and leaves
/// the cursor in front of the element that followed it.
///
/// This struct is created by [`ArrayList::cursor`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Cursor {
    index: usize,
    last: Option<usize>,
}

impl Cursor {
    pub(crate) const fn new() -> Self {
        Self {
            index: 0,
            last: None,
        }
    }

    /// Returns `true` if a call to [`Cursor::next`] would yield an element.
    pub fn has_next<T>(&self, list: &ArrayList<T>) -> bool {
        self.index < list.len()
    }

    /// Yields the next element.
    ///
    /// # Errors
    /// - [`Error::Exhausted`] once every element has been yielded.
    pub fn next<'a, T>(&mut self, list: &'a ArrayList<T>) -> Result<&'a T> {
        let value = list.as_slice().get(self.index).ok_or(Error::Exhausted)?;
        self.last = Some(self.index);
        self.index += 1;
        Ok(value)
    }

    /// Removes and returns the element yielded by the last call to [`Cursor::next`].
    ///
    /// # Errors
    /// - [`Error::IllegalCursorState`] if nothing was yielded since the cursor
    ///   was created or since the previous removal.
    /// - [`Error::OutOfRange`] if the list shrank below the yielded position.
    pub fn remove<T>(&mut self, list: &mut ArrayList<T>) -> Result<T> {
        let index = self.last.ok_or(Error::IllegalCursorState)?;
        let value = list.remove(index)?;
        self.index = index;
        self.last = None;
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use crate::{ArrayList, Error};

    #[test]
    fn cursor_yields_every_element_in_order() {
        let list = ArrayList::from([1, 2, 3]);
        let mut sut = list.cursor();

        let mut seen = Vec::new();
        while sut.has_next(&list) {
            seen.push(*sut.next(&list).unwrap());
        }

        assert_eq!(seen, [1, 2, 3]);
        assert_eq!(sut.next(&list), Err(Error::Exhausted));
        assert_eq!(sut.next(&list), Err(Error::Exhausted));
    }

    #[test]
    fn cursor_on_empty_list_is_exhausted() {
        let list: ArrayList<i32> = ArrayList::new();
        let mut sut = list.cursor();
        assert!(!sut.has_next(&list));
        assert_eq!(sut.next(&list), Err(Error::Exhausted));
    }

    #[test]
    fn remove_does_not_skip_the_following_element() {
        let mut list = ArrayList::from([1, 2, 2, 3, 2]);
        let mut sut = list.cursor();

        let mut seen = Vec::new();
        while sut.has_next(&list) {
            let value = *sut.next(&list).unwrap();
            seen.push(value);
            if value == 2 {
                assert_eq!(sut.remove(&mut list), Ok(2));
            }
        }

        assert_eq!(seen, [1, 2, 2, 3, 2]);
        assert_eq!(list, [1, 3]);
    }

    #[test]
    fn remove_requires_a_yielded_element() {
        let mut list = ArrayList::from([1, 2]);
        let mut sut = list.cursor();

        assert_eq!(sut.remove(&mut list), Err(Error::IllegalCursorState));

        sut.next(&list).unwrap();
        assert_eq!(sut.remove(&mut list), Ok(1));
        assert_eq!(sut.remove(&mut list), Err(Error::IllegalCursorState));
        assert_eq!(list, [2]);
    }

    #[test]
    fn remove_after_exhaustion_removes_the_last_element() {
        let mut list = ArrayList::from([1, 2]);
        let mut sut = list.cursor();

        sut.next(&list).unwrap();
        sut.next(&list).unwrap();
        assert_eq!(sut.next(&list), Err(Error::Exhausted));

        assert_eq!(sut.remove(&mut list), Ok(2));
        assert_eq!(sut.remove(&mut list), Err(Error::IllegalCursorState));
        assert_eq!(list, [1]);
    }

    #[test]
    fn remove_reports_positions_lost_to_outside_removal() {
        let mut list = ArrayList::from([1, 2]);
        let mut sut = list.cursor();

        sut.next(&list).unwrap();
        sut.next(&list).unwrap();
        list.clear();

        assert_eq!(
            sut.remove(&mut list),
            Err(Error::OutOfRange { index: 1, len: 0 })
        );
    }
}
