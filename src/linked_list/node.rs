use std::mem;

/// Arena position of the sentinel in front of the first element.
pub(crate) const HEAD: usize = 0;

/// Arena position of the sentinel behind the last element.
pub(crate) const TAIL: usize = 1;

/// Neighbours of a slot, as arena positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Link {
    pub(crate) prev: usize,
    pub(crate) next: usize,
}

impl Link {
    pub(crate) const fn new(prev: usize, next: usize) -> Self {
        Self { prev, next }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) link: Link,
}

/// An arena slot.
///
/// Sentinels carry links but never a value, so an element can always be read
/// out of an `Occupied` slot without an emptiness check.
#[derive(Debug, Clone)]
pub(crate) enum Slot<T> {
    Sentinel(Link),
    Occupied(Node<T>),
    Vacant { next_free: Option<usize> },
}

impl<T> Slot<T> {
    pub(crate) const fn sentinel() -> Self {
        Self::Sentinel(Link::new(HEAD, TAIL))
    }

    pub(crate) fn link(&self) -> Link {
        match self {
            Self::Sentinel(link) => *link,
            Self::Occupied(node) => node.link,
            Self::Vacant { .. } => unreachable!("vacant slots are never linked"),
        }
    }

    pub(crate) fn link_mut(&mut self) -> &mut Link {
        match self {
            Self::Sentinel(link) => link,
            Self::Occupied(node) => &mut node.link,
            Self::Vacant { .. } => unreachable!("vacant slots are never linked"),
        }
    }

    pub(crate) fn node(&self) -> &Node<T> {
        match self {
            Self::Occupied(node) => node,
            _ => unreachable!("only occupied slots hold a value"),
        }
    }

    pub(crate) fn node_mut(&mut self) -> &mut Node<T> {
        match self {
            Self::Occupied(node) => node,
            _ => unreachable!("only occupied slots hold a value"),
        }
    }

    #[inline]
    pub(crate) const fn is_occupied(&self) -> bool {
        matches!(self, Self::Occupied(_))
    }

    /// Turns the slot into a vacant one, handing back the node it held.
    pub(crate) fn vacate(&mut self, next_free: Option<usize>) -> Node<T> {
        match mem::replace(self, Self::Vacant { next_free }) {
            Self::Occupied(node) => node,
            _ => unreachable!("only occupied slots can be vacated"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{HEAD, Link, Node, Slot, TAIL};

    #[test]
    fn sentinel_links_head_to_tail() {
        let sut: Slot<i32> = Slot::sentinel();
        assert_eq!(sut.link(), Link::new(HEAD, TAIL));
        assert!(!sut.is_occupied());
    }

    #[test]
    fn occupied_slot_exposes_value_and_link() {
        let mut sut = Slot::Occupied(Node {
            value: 42,
            link: Link::new(HEAD, TAIL),
        });
        assert!(sut.is_occupied());
        assert_eq!(sut.node().value, 42);

        sut.link_mut().next = 7;
        sut.node_mut().value = 43;
        assert_eq!(sut.link(), Link::new(HEAD, 7));

        let node = sut.vacate(Some(3));
        assert_eq!(node.value, 43);
        assert!(matches!(sut, Slot::Vacant { next_free: Some(3) }));
    }

    #[test]
    #[should_panic(expected = "only occupied slots can be vacated")]
    fn sentinel_cannot_be_vacated() {
        let mut sut: Slot<i32> = Slot::sentinel();
        sut.vacate(None);
    }
}
