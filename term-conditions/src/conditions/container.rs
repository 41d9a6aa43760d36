//! Container shapes understood by the emptiness and containment checks.
//!
//! "Empty" is decided per shape: a fixed-size sequence has length zero, a
//! collection reports size zero, text has no characters, and a plain iterable
//! yields nothing on the first pull from a fresh iterator. Containment is a
//! left-to-right scan in the shape's natural iteration order.

use std::collections::{BTreeSet, HashSet, LinkedList, VecDeque};
use std::hash::BuildHasher;

/// A shape whose emptiness and elements can be inspected.
pub trait Container {
    /// Element type yielded by a scan.
    type Item;

    /// Returns true when the container holds no elements.
    fn is_vacant(&self) -> bool;

    /// Returns the index of the first element matching `predicate`.
    ///
    /// The scan stops at the first match.
    fn position_of<P>(&self, predicate: P) -> Option<usize>
    where
        P: FnMut(&Self::Item) -> bool;
}

impl<T> Container for [T] {
    type Item = T;

    fn is_vacant(&self) -> bool {
        self.is_empty()
    }

    fn position_of<P>(&self, predicate: P) -> Option<usize>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().position(predicate)
    }
}

impl<T, const N: usize> Container for [T; N] {
    type Item = T;

    fn is_vacant(&self) -> bool {
        N == 0
    }

    fn position_of<P>(&self, predicate: P) -> Option<usize>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().position(predicate)
    }
}

impl<T> Container for Vec<T> {
    type Item = T;

    fn is_vacant(&self) -> bool {
        self.is_empty()
    }

    fn position_of<P>(&self, predicate: P) -> Option<usize>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().position(predicate)
    }
}

impl<T> Container for VecDeque<T> {
    type Item = T;

    fn is_vacant(&self) -> bool {
        self.is_empty()
    }

    fn position_of<P>(&self, predicate: P) -> Option<usize>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().position(predicate)
    }
}

impl<T> Container for LinkedList<T> {
    type Item = T;

    fn is_vacant(&self) -> bool {
        self.is_empty()
    }

    fn position_of<P>(&self, predicate: P) -> Option<usize>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().position(predicate)
    }
}

impl<T, S: BuildHasher> Container for HashSet<T, S> {
    type Item = T;

    fn is_vacant(&self) -> bool {
        self.is_empty()
    }

    fn position_of<P>(&self, predicate: P) -> Option<usize>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().position(predicate)
    }
}

impl<T> Container for BTreeSet<T> {
    type Item = T;

    fn is_vacant(&self) -> bool {
        self.is_empty()
    }

    fn position_of<P>(&self, predicate: P) -> Option<usize>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().position(predicate)
    }
}

impl Container for str {
    type Item = char;

    fn is_vacant(&self) -> bool {
        self.is_empty()
    }

    fn position_of<P>(&self, mut predicate: P) -> Option<usize>
    where
        P: FnMut(&char) -> bool,
    {
        self.chars().position(|c| predicate(&c))
    }
}

impl Container for String {
    type Item = char;

    fn is_vacant(&self) -> bool {
        self.is_empty()
    }

    fn position_of<P>(&self, predicate: P) -> Option<usize>
    where
        P: FnMut(&char) -> bool,
    {
        self.as_str().position_of(predicate)
    }
}

impl<'a, C: Container + ?Sized> Container for &'a C {
    type Item = C::Item;

    fn is_vacant(&self) -> bool {
        (**self).is_vacant()
    }

    fn position_of<P>(&self, predicate: P) -> Option<usize>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        (**self).position_of(predicate)
    }
}

/// Any re-iterable sequence, inspected only through fresh iterators.
///
/// Useful for ranges, iterator adaptors, and borrowed collections that offer
/// no length.
///
/// # Examples
///
/// ```rust
/// use term_conditions::conditions::{Container, Iterable};
///
/// let evens = Iterable((1..10).filter(|n| n % 2 == 0));
/// assert!(!evens.is_vacant());
/// assert_eq!(evens.position_of(|n| *n == 6), Some(2));
///
/// assert!(Iterable(0..0).is_vacant());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Iterable<I>(pub I);

impl<I> Iterable<I> {
    /// Returns the wrapped sequence.
    pub fn into_inner(self) -> I {
        self.0
    }
}

impl<I> Container for Iterable<I>
where
    I: Clone + IntoIterator,
{
    type Item = I::Item;

    fn is_vacant(&self) -> bool {
        self.0.clone().into_iter().next().is_none()
    }

    fn position_of<P>(&self, mut predicate: P) -> Option<usize>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        self.0.clone().into_iter().position(|item| predicate(&item))
    }
}
