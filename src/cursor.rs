//! Random-access cursors over the elements of a [`PtrVec`][crate::PtrVec].
//!
//! A cursor is a position in the vector, from `0` up to and including `len`
//! (the past-the-end position). Unlike an iterator, it can be moved in both
//! directions by arbitrary offsets, compared against other cursors and used
//! to look at elements relative to its position. Dereferencing a cursor
//! always yields the element, never the box the element lives in.
//!
//! Cursors borrow the vector, so it cannot be modified structurally while a
//! cursor exists. Two cursors belong to the same vector if they were created
//! from the same `PtrVec` value; the buffer address alone does not tell
//! empty vectors apart.

use std::prelude::v1::*;
use std::{
    cmp::Ordering,
    fmt,
    ops::{Add, AddAssign, Sub, SubAssign},
};


/// A read-only cursor. Obtained via [`PtrVec::cursor`][crate::PtrVec::cursor]
/// or by converting a [`CursorMut`].
///
/// ```
/// use ptr_vec::PtrVec;
///
/// let pv = PtrVec::from(['a', 'b', 'c', 'd']);
/// let begin = pv.cursor(0);
/// let end = pv.cursor(pv.len());
///
/// let mut c = begin + 2;
/// assert_eq!(c.get(), Some(&'c'));
/// assert_eq!(c.peek(-1), Some(&'b'));
/// assert_eq!(end - c, 2);
/// assert!(begin < c && c < end);
///
/// c += 2;
/// assert_eq!(c, end);
/// assert_eq!(c.get(), None);
/// ```
pub struct Cursor<'a, T: ?Sized> {
    slots: &'a [Box<T>],
    /// Address of the `PtrVec` the cursor was created from.
    owner: usize,
    pos: usize,
}

impl<'a, T: ?Sized> Cursor<'a, T> {
    pub(crate) fn new(slots: &'a [Box<T>], owner: usize, pos: usize) -> Self {
        debug_assert!(pos <= slots.len());
        Self { slots, owner, pos }
    }

    /// Returns the index this cursor points at.
    pub fn index(&self) -> usize {
        self.pos
    }

    /// Returns `true` if this cursor is at the past-the-end position.
    pub fn is_end(&self) -> bool {
        self.pos == self.slots.len()
    }

    /// Returns the element under the cursor, or `None` at the past-the-end
    /// position.
    pub fn get(&self) -> Option<&'a T> {
        self.slots.get(self.pos).map(|b| &**b)
    }

    /// Returns the element `offset` positions away from the cursor, or
    /// `None` if that is outside of the vector.
    pub fn peek(&self, offset: isize) -> Option<&'a T> {
        let idx = offset_index(self.pos, offset)?;
        self.slots.get(idx).map(|b| &**b)
    }

    /// Moves the cursor one element forward.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is already at the past-the-end position.
    pub fn move_next(&mut self) {
        *self += 1;
    }

    /// Moves the cursor one element backward.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is at index 0.
    pub fn move_prev(&mut self) {
        *self -= 1;
    }
}

impl<T: ?Sized> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for Cursor<'_, T> {}

impl<T: ?Sized> fmt::Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("index", &self.pos)
            .field("len", &self.slots.len())
            .finish()
    }
}

/// Two cursors are equal if they point at the same position of the same
/// vector.
impl<T: ?Sized> PartialEq for Cursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.owner == other.owner && self.pos == other.pos
    }
}

impl<T: ?Sized> Eq for Cursor<'_, T> {}

/// Cursors into different vectors are not ordered.
impl<T: ?Sized> PartialOrd for Cursor<'_, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.owner == other.owner {
            Some(self.pos.cmp(&other.pos))
        } else {
            None
        }
    }
}

impl<T: ?Sized> AddAssign<usize> for Cursor<'_, T> {
    fn add_assign(&mut self, n: usize) {
        self.pos = advance(self.pos, n, self.slots.len());
    }
}

impl<T: ?Sized> SubAssign<usize> for Cursor<'_, T> {
    fn sub_assign(&mut self, n: usize) {
        self.pos = retreat(self.pos, n);
    }
}

impl<T: ?Sized> Add<usize> for Cursor<'_, T> {
    type Output = Self;
    fn add(mut self, n: usize) -> Self {
        self += n;
        self
    }
}

impl<T: ?Sized> Sub<usize> for Cursor<'_, T> {
    type Output = Self;
    fn sub(mut self, n: usize) -> Self {
        self -= n;
        self
    }
}

/// The signed distance between two cursors: `b - a` is the number of steps
/// needed to get from `a` to `b`.
///
/// # Panics
///
/// Panics if the cursors point into different vectors.
impl<T: ?Sized> Sub for Cursor<'_, T> {
    type Output = isize;
    fn sub(self, other: Self) -> isize {
        assert!(
            self.owner == other.owner,
            "distance between cursors of different vectors",
        );
        self.pos as isize - other.pos as isize
    }
}


/// A cursor that can mutate the element under it. Obtained via
/// [`PtrVec::cursor_mut`][crate::PtrVec::cursor_mut].
///
/// Converts into a read-only [`Cursor`] with `From`/`Into`; there is no
/// conversion the other way around.
///
/// ```
/// use ptr_vec::{Cursor, PtrVec};
///
/// let mut pv = PtrVec::from([1, 2, 3]);
/// let mut c = pv.cursor_mut(0);
/// while let Some(x) = c.get_mut() {
///     *x *= 10;
///     c.move_next();
/// }
///
/// let c: Cursor<_> = c.into();
/// assert!(c.is_end());
/// assert_eq!(c.peek(-3), Some(&10));
/// assert_eq!(pv, [10, 20, 30]);
/// ```
pub struct CursorMut<'a, T: ?Sized> {
    slots: &'a mut [Box<T>],
    owner: usize,
    pos: usize,
}

impl<'a, T: ?Sized> CursorMut<'a, T> {
    pub(crate) fn new(slots: &'a mut [Box<T>], owner: usize, pos: usize) -> Self {
        debug_assert!(pos <= slots.len());
        Self { slots, owner, pos }
    }

    /// Returns the index this cursor points at.
    pub fn index(&self) -> usize {
        self.pos
    }

    /// Returns `true` if this cursor is at the past-the-end position.
    pub fn is_end(&self) -> bool {
        self.pos == self.slots.len()
    }

    /// Returns the element under the cursor, or `None` at the past-the-end
    /// position.
    pub fn get(&self) -> Option<&T> {
        self.slots.get(self.pos).map(|b| &**b)
    }

    /// Returns the element under the cursor mutably, or `None` at the
    /// past-the-end position.
    pub fn get_mut(&mut self) -> Option<&mut T> {
        self.slots.get_mut(self.pos).map(|b| &mut **b)
    }

    /// Returns the element `offset` positions away from the cursor, or
    /// `None` if that is outside of the vector.
    pub fn peek(&self, offset: isize) -> Option<&T> {
        let idx = offset_index(self.pos, offset)?;
        self.slots.get(idx).map(|b| &**b)
    }

    /// Mutable version of [`peek`][CursorMut::peek].
    pub fn peek_mut(&mut self, offset: isize) -> Option<&mut T> {
        let idx = offset_index(self.pos, offset)?;
        self.slots.get_mut(idx).map(|b| &mut **b)
    }

    /// Moves the cursor one element forward.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is already at the past-the-end position.
    pub fn move_next(&mut self) {
        *self += 1;
    }

    /// Moves the cursor one element backward.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is at index 0.
    pub fn move_prev(&mut self) {
        *self -= 1;
    }

    /// Returns a read-only cursor at the same position, borrowing this one.
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor::new(&*self.slots, self.owner, self.pos)
    }
}

impl<'a, T: ?Sized> From<CursorMut<'a, T>> for Cursor<'a, T> {
    fn from(c: CursorMut<'a, T>) -> Self {
        let CursorMut { slots, owner, pos } = c;
        Cursor::new(slots, owner, pos)
    }
}

impl<T: ?Sized> fmt::Debug for CursorMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CursorMut")
            .field("index", &self.pos)
            .field("len", &self.slots.len())
            .finish()
    }
}

impl<T: ?Sized> AddAssign<usize> for CursorMut<'_, T> {
    fn add_assign(&mut self, n: usize) {
        self.pos = advance(self.pos, n, self.slots.len());
    }
}

impl<T: ?Sized> SubAssign<usize> for CursorMut<'_, T> {
    fn sub_assign(&mut self, n: usize) {
        self.pos = retreat(self.pos, n);
    }
}

impl<T: ?Sized> Add<usize> for CursorMut<'_, T> {
    type Output = Self;
    fn add(mut self, n: usize) -> Self {
        self += n;
        self
    }
}

impl<T: ?Sized> Sub<usize> for CursorMut<'_, T> {
    type Output = Self;
    fn sub(mut self, n: usize) -> Self {
        self -= n;
        self
    }
}


fn advance(pos: usize, n: usize, len: usize) -> usize {
    assert!(
        n <= len - pos,
        "cursor advanced past the end (index is {}, offset is {}, len is {})",
        pos,
        n,
        len,
    );
    pos + n
}

fn retreat(pos: usize, n: usize) -> usize {
    assert!(
        n <= pos,
        "cursor moved before the start (index is {}, offset is {})",
        pos,
        n,
    );
    pos - n
}

fn offset_index(pos: usize, offset: isize) -> Option<usize> {
    if offset >= 0 {
        pos.checked_add(offset as usize)
    } else {
        pos.checked_sub(offset.unsigned_abs())
    }
}
