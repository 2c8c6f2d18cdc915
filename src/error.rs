/// Errors reported by list and cursor operations.
///
/// A failed operation leaves its list exactly as it was before the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The index lies outside the range accepted by the operation.
    #[error("index {index} out of range for list of length {len}")]
    OutOfRange { index: usize, len: usize },
    /// The cursor has already yielded every element.
    #[error("cursor is exhausted")]
    Exhausted,
    /// The list was structurally modified behind the cursor's back.
    #[error("list was modified outside of the cursor")]
    ConcurrentModification,
    /// Removal through a cursor that has no yielded element to remove.
    #[error("cursor has no yielded element to remove")]
    IllegalCursorState,
    /// Backing storage for the requested number of elements could not be allocated.
    #[error("failed to allocate storage for {capacity} elements")]
    AllocationFailure { capacity: usize },
}

/// `Result` specialized to this crate's [`Error`].
pub type Result<T> = core::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn display_names_the_offending_index() {
        let sut = Error::OutOfRange { index: 7, len: 3 };
        assert_eq!(
            sut.to_string(),
            "index 7 out of range for list of length 3"
        );
    }

    #[test]
    fn display_names_the_requested_capacity() {
        let sut = Error::AllocationFailure { capacity: 42 };
        assert_eq!(
            sut.to_string(),
            "failed to allocate storage for 42 elements"
        );
    }
}
