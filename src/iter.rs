//! Contains all iterator types and implementations.
//!
//! This is in its own module to not pollute the top-level namespace.

use std::prelude::v1::*;
use std::{
    fmt,
    iter::FusedIterator,
    slice,
};

use allocator_api2::{
    alloc::{Allocator, Global},
    vec,
};


/// Iterator over immutable references to a ptr vec's elements.
///
/// Use the method [`PtrVec::iter`][crate::PtrVec::iter] or the
/// `IntoIterator` impl of `&PtrVec` to obtain an iterator of this kind. Call
/// `.rev()` on it to traverse the vector back to front.
pub struct Iter<'a, T: ?Sized> {
    slots: slice::Iter<'a, Box<T>>,
}

impl<'a, T: ?Sized> Iter<'a, T> {
    pub(crate) fn new(slots: &'a [Box<T>]) -> Self {
        Self {
            slots: slots.iter(),
        }
    }
}

impl<T: ?Sized> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
        }
    }
}

impl<'a, T: ?Sized> Iterator for Iter<'a, T> {
    type Item = &'a T;
    fn next(&mut self) -> Option<Self::Item> {
        self.slots.next().map(|b| &**b)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }

    fn count(self) -> usize {
        self.len()
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.slots.nth(n).map(|b| &**b)
    }

    fn last(mut self) -> Option<Self::Item> {
        self.next_back()
    }
}

impl<T: ?Sized> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.slots.next_back().map(|b| &**b)
    }

    fn nth_back(&mut self, n: usize) -> Option<Self::Item> {
        self.slots.nth_back(n).map(|b| &**b)
    }
}

impl<T: ?Sized> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        self.slots.len()
    }
}

impl<T: ?Sized> FusedIterator for Iter<'_, T> {}

impl<T: ?Sized + fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").field(&self.slots.as_slice()).finish()
    }
}

/// A mutable iterator can always be downgraded to an immutable one. The
/// opposite direction does not exist.
impl<'a, T: ?Sized> From<IterMut<'a, T>> for Iter<'a, T> {
    fn from(it: IterMut<'a, T>) -> Self {
        let slots: &'a [Box<T>] = it.slots.into_slice();
        Self::new(slots)
    }
}


/// Iterator over mutable references to a ptr vec's elements.
///
/// Use the method [`PtrVec::iter_mut`][crate::PtrVec::iter_mut] or the
/// `IntoIterator` impl of `&mut PtrVec` to obtain an iterator of this kind.
pub struct IterMut<'a, T: ?Sized> {
    slots: slice::IterMut<'a, Box<T>>,
}

impl<'a, T: ?Sized> IterMut<'a, T> {
    pub(crate) fn new(slots: &'a mut [Box<T>]) -> Self {
        Self {
            slots: slots.iter_mut(),
        }
    }
}

impl<'a, T: ?Sized> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;
    fn next(&mut self) -> Option<Self::Item> {
        self.slots.next().map(|b| &mut **b)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }

    fn count(self) -> usize {
        self.len()
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.slots.nth(n).map(|b| &mut **b)
    }

    fn last(mut self) -> Option<Self::Item> {
        self.next_back()
    }
}

impl<T: ?Sized> DoubleEndedIterator for IterMut<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.slots.next_back().map(|b| &mut **b)
    }

    fn nth_back(&mut self, n: usize) -> Option<Self::Item> {
        self.slots.nth_back(n).map(|b| &mut **b)
    }
}

impl<T: ?Sized> ExactSizeIterator for IterMut<'_, T> {
    fn len(&self) -> usize {
        self.slots.len()
    }
}

impl<T: ?Sized> FusedIterator for IterMut<'_, T> {}

impl<T: ?Sized> fmt::Debug for IterMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IterMut").field("remaining", &self.len()).finish()
    }
}


/// Iterator over the owned elements of a `PtrVec`, handing out the boxes
/// the elements live in.
///
/// Use the `IntoIterator` impl of `PtrVec` to obtain an iterator of this
/// kind. This is also the way to turn a `PtrVec<Concrete>` into a
/// `PtrVec<dyn Trait>` without touching the elements:
///
/// ```
/// use std::fmt::Debug;
/// use ptr_vec::PtrVec;
///
/// let numbers = PtrVec::from([1, 2, 3]);
/// let erased: PtrVec<dyn Debug> = numbers
///     .into_iter()
///     .map(|b| b as Box<dyn Debug>)
///     .collect();
/// assert_eq!(erased.len(), 3);
/// ```
pub struct IntoIter<T: ?Sized, A: Allocator = Global> {
    slots: vec::IntoIter<Box<T>, A>,
}

impl<T: ?Sized, A: Allocator> IntoIter<T, A> {
    pub(crate) fn new(slots: vec::Vec<Box<T>, A>) -> Self {
        Self {
            slots: slots.into_iter(),
        }
    }
}

impl<T: ?Sized, A: Allocator> Iterator for IntoIter<T, A> {
    type Item = Box<T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.slots.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}

impl<T: ?Sized, A: Allocator> DoubleEndedIterator for IntoIter<T, A> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.slots.next_back()
    }
}

impl<T: ?Sized, A: Allocator> ExactSizeIterator for IntoIter<T, A> {}

impl<T: ?Sized, A: Allocator> FusedIterator for IntoIter<T, A> {}

impl<T: ?Sized, A: Allocator> fmt::Debug for IntoIter<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntoIter").field("remaining", &self.len()).finish()
    }
}
