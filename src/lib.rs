//! # duolist
//!
//! `duolist` provides two list containers over a single element type, both
//! with index based access, insertion, deletion and forward traversal:
//!
//! - [`ArrayList`]: contiguous storage with amortized *O*(1) appends and
//!   *O*(1) indexed access. Capacity grows as `2 * len + 1` and only shrinks
//!   on request through [`ArrayList::trim_to_size`].
//! - [`LinkedList`]: a node chain framed by two permanent sentinels, with
//!   *O*(1) insertion and removal once a position is resolved and index
//!   lookups that walk from the nearer end.
//!
//! Every fallible operation returns [`Result`]; a failed call leaves the list
//! untouched.
//!
//! ## Cursors
//! Besides the borrowing [`Iterator`]s returned by `iter()`, each list hands
//! out a detached traversal cursor via `cursor()`. A cursor is given the list
//! on every call, so the list can still be modified directly while a
//! traversal is in progress. The linked list stamps every structural change
//! with a version number and its cursor fails fast with
//! [`Error::ConcurrentModification`] once the stamps disagree.
//!
//! ## Example
//! ```rust
//! use duolist::{Error, LinkedList};
//!
//! let mut list = LinkedList::from([1, 2, 3, 4]);
//! let mut cursor = list.cursor();
//!
//! // Removing through the cursor keeps it usable.
//! while cursor.has_next(&list) {
//!     if cursor.next(&list)? % 2 == 0 {
//!         cursor.remove(&mut list)?;
//!     }
//! }
//! assert_eq!(list, [1, 3]);
//!
//! // Modifying the list behind its back does not.
//! let mut cursor = list.cursor();
//! list.insert(1, 2)?;
//! assert_eq!(cursor.next(&list), Err(Error::ConcurrentModification));
//! # Ok::<(), duolist::Error>(())
//! ```
//!
//! ## Thread safety
//! The containers do no internal synchronization. They are `Send` and `Sync`
//! whenever `T` is, and rely on Rust's borrow rules for anything beyond
//! single threaded use.

pub mod array_list;
mod error;
pub mod linked_list;
mod list;
mod sealed;

pub use array_list::ArrayList;
pub use error::{Error, Result};
pub use linked_list::LinkedList;
pub use list::List;
