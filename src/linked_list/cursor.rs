use tracing::debug;

use super::node::{HEAD, TAIL};
use crate::LinkedList;
use crate::error::{Error, Result};

/// A fail-fast forward traversal cursor over a [`LinkedList`].
///
/// The cursor only remembers positions and the version stamp of the list at
/// creation; the list is handed to every call. Any structural change made
/// to the list by other means is reported by the next call as
/// [`Error::ConcurrentModification`], and every call after that fails the
/// same way. Removals made through the cursor itself keep it valid.
///
/// This struct is created by [`LinkedList::cursor`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cursor {
    current: usize,
    last: Option<usize>,
    expected_version: u64,
}

impl Cursor {
    pub(crate) fn from_list<T>(list: &LinkedList<T>) -> Self {
        Self {
            current: list.slots[HEAD].link().next,
            last: None,
            expected_version: list.version,
        }
    }

    /// Returns `true` if the cursor has not reached the end of the list.
    ///
    /// This does not check for outside modifications; [`Cursor::next`] does.
    pub fn has_next<T>(&self, _list: &LinkedList<T>) -> bool {
        self.current != TAIL
    }

    /// Yields the next element.
    ///
    /// # Errors
    /// - [`Error::ConcurrentModification`] if the list changed structurally
    ///   since the cursor last synchronised with it.
    /// - [`Error::Exhausted`] once every element has been yielded.
    pub fn next<'a, T>(&mut self, list: &'a LinkedList<T>) -> Result<&'a T> {
        self.check_version(list)?;

        if self.current == TAIL {
            return Err(Error::Exhausted);
        }

        let node = match list.slots.get(self.current) {
            Some(slot) if slot.is_occupied() => slot.node(),
            _ => return Err(Error::ConcurrentModification),
        };

        self.last = Some(self.current);
        self.current = node.link.next;
        Ok(&node.value)
    }

    /// Removes and returns the element yielded by the last call to [`Cursor::next`].
    ///
    /// # Errors
    /// - [`Error::ConcurrentModification`] if the list changed structurally
    ///   since the cursor last synchronised with it.
    /// - [`Error::IllegalCursorState`] if nothing was yielded since the cursor
    ///   was created or since the previous removal.
    pub fn remove<T>(&mut self, list: &mut LinkedList<T>) -> Result<T> {
        self.check_version(list)?;

        let at = self.last.ok_or(Error::IllegalCursorState)?;
        if !list.slots.get(at).is_some_and(|slot| slot.is_occupied()) {
            return Err(Error::ConcurrentModification);
        }

        let value = list.unlink(at);
        self.last = None;
        self.expected_version = list.version;
        Ok(value)
    }

    fn check_version<T>(&self, list: &LinkedList<T>) -> Result<()> {
        if list.version != self.expected_version {
            debug!(
                expected = self.expected_version,
                actual = list.version,
                "linked list cursor invalidated"
            );
            return Err(Error::ConcurrentModification);
        }

        Ok(())
    }
}
