//! A `Vec<T>`-like collection which stores every element in its own heap
//! allocation, but only ever hands out references to the elements
//! themselves.
//!
//! This crate provides a single owning vector type. You can find nearly all
//! the relevant documentation on [`PtrVec`]. The iterator and cursor types
//! live in the modules [`iter`] and [`cursor`].
//!
//! ---
//!
//! In order to use this crate, you have to include it into your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! ptr-vec = "0.1"
//! ```
//!
//! A quick tour:
//!
//! ```
//! use ptr_vec::PtrVec;
//!
//! trait Shape {
//!     fn area(&self) -> f64;
//! }
//!
//! struct Square(f64);
//! struct Circle(f64);
//!
//! impl Shape for Square {
//!     fn area(&self) -> f64 { self.0 * self.0 }
//! }
//! impl Shape for Circle {
//!     fn area(&self) -> f64 { 3.0 * self.0 * self.0 }
//! }
//!
//! let mut shapes: PtrVec<dyn Shape> = PtrVec::new();
//! shapes.push_boxed(Box::new(Square(2.0)));
//! shapes.push_boxed(Box::new(Circle(1.0)));
//!
//! let total: f64 = shapes.iter().map(|s| s.area()).sum();
//! assert_eq!(total, 7.0);
//! ```

#![deny(missing_debug_implementations)]
#![no_std]

extern crate no_std_compat as std;
#[cfg(test)]
extern crate std as real_std;

use std::prelude::v1::*;
use std::{
    fmt,
    hash::{Hash, Hasher},
    iter::FromIterator,
    mem,
    ops::{Index, IndexMut, RangeBounds},
};

use allocator_api2::{
    alloc::{Allocator, Global},
    vec::Vec as SlotVec,
};

pub use crate::{
    cursor::{Cursor, CursorMut},
    error::OutOfRange,
    iter::{IntoIter, Iter, IterMut},
};

pub mod cursor;
pub mod iter;
mod error;



/// A `Vec<T>`-like collection which stores each element behind its own
/// `Box<T>` while presenting plain values to the outside.
///
/// # Why?
///
/// A `Vec<T>` stores its elements inline. That has two consequences which
/// are sometimes in the way:
///
/// 1. `T` has to be `Sized`. You cannot have a `Vec<dyn Shape>`, only a
///    `Vec<Box<dyn Shape>>`.
/// 2. Every element has the same concrete type, so a vector of one type
///    cannot hold a mix of types implementing some trait.
///
/// The usual workaround, `Vec<Box<T>>`, works but leaks the boxes into every
/// API: indexing yields `&Box<T>`, iterating yields `&Box<T>`, and it is easy
/// to end up juggling the boxes instead of the values. `PtrVec<T>` has the
/// same memory layout as `Vec<Box<T>>`, but indexing, iteration and cursors
/// always yield `&T`/`&mut T`. Boxes only show up where ownership really
/// changes hands: when inserting an already boxed value, and when taking an
/// element back out.
///
///
/// # How?
///
/// Each slot of the vector owns exactly one heap allocation. Inserting a
/// value allocates it (or adopts an existing box), removing or overwriting a
/// slot drops it, and dropping the vector drops every element exactly once.
///
/// Methods come in two flavors:
///
/// - For `T: Sized` there are conveniences taking `T` directly, like
///   [`push`][PtrVec::push], [`insert`][PtrVec::insert] or
///   [`resize`][PtrVec::resize]. They box the value themselves.
/// - For any `T`, including trait objects, the methods taking a `Box<T>`
///   ([`push_boxed`][PtrVec::push_boxed], ...) or a closure producing one
///   ([`emplace`][PtrVec::emplace], [`resize_with`][PtrVec::resize_with],
///   ...). A `Box<Circle>` passed to a `PtrVec<dyn Shape>` coerces at the
///   call site, so any mix of concrete types can be stored.
///
/// The array of boxes itself can be placed in a custom allocator, see
/// [`new_in`][PtrVec::new_in]. The boxed elements always live in the global
/// heap.
///
///
/// # Why not?
///
/// - If all your elements have the same sized type, use a plain `Vec<T>`.
///   It is faster to iterate and needs one allocation instead of `n + 1`.
/// - If you need the elements to be shared, store `Rc<T>` or `Arc<T>` in a
///   `Vec`. `PtrVec` is strictly single-owner.
/// - If you need to clone the whole collection: `PtrVec` deliberately does
///   not implement `Clone`, because cloning a `Box<dyn Trait>` is not
///   generally possible.
///
///
/// # Note
///
/// This type's interface is very similar to the `Vec<T>` interface from the
/// Rust standard library. When in doubt about what a method is doing, please
/// consult [the official `Vec<T>` documentation][vec-doc] first.
///
/// [vec-doc]: https://doc.rust-lang.org/stable/std/vec/struct.Vec.html
pub struct PtrVec<T: ?Sized, A: Allocator = Global> {
    /// One owning box per slot, in positional order.
    slots: SlotVec<Box<T>, A>,
}

impl<T: ?Sized> PtrVec<T> {
    /// Constructs a new, empty `PtrVec<T>`.
    ///
    /// The vector will not allocate until elements are pushed onto it.
    pub fn new() -> Self {
        Self {
            slots: SlotVec::new(),
        }
    }

    /// Constructs a new, empty `PtrVec<T>` with room for `capacity` elements
    /// before the array of boxes has to be reallocated.
    ///
    /// This does not allocate any elements, only the slots.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: SlotVec::with_capacity(capacity),
        }
    }
}

impl<T: ?Sized, A: Allocator> PtrVec<T, A> {
    /// Constructs a new, empty `PtrVec<T, A>` whose array of boxes is
    /// allocated with `alloc`.
    pub fn new_in(alloc: A) -> Self {
        Self {
            slots: SlotVec::new_in(alloc),
        }
    }

    /// Like [`with_capacity`][PtrVec::with_capacity], but with a custom
    /// allocator for the array of boxes.
    pub fn with_capacity_in(capacity: usize, alloc: A) -> Self {
        Self {
            slots: SlotVec::with_capacity_in(capacity, alloc),
        }
    }

    /// Returns a reference to the allocator of the array of boxes.
    pub fn allocator(&self) -> &A {
        self.slots.allocator()
    }

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if this vector contains no elements.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns the number of elements the vector can hold without
    /// reallocating its array of boxes.
    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Reserves capacity for at least `additional` more elements to be
    /// inserted. Never shrinks.
    pub fn reserve(&mut self, additional: usize) {
        self.slots.reserve(additional);
    }

    /// Shrinks the capacity of the array of boxes as much as possible.
    pub fn shrink_to_fit(&mut self) {
        self.slots.shrink_to_fit();
    }

    /// Drops all elements. The capacity is not changed.
    pub fn clear(&mut self) {
        self.slots.clear();
    }

    /// Drops all elements at index `len` and above. Does nothing if `len` is
    /// greater than or equal to the current length.
    pub fn truncate(&mut self, len: usize) {
        self.slots.truncate(len);
    }

    /// Returns a reference to the element at `index`, or `None` if `index`
    /// is out of bounds.
    ///
    /// If you are calling `unwrap()` on the result of this method anyway,
    /// rather use the index operator instead: `ptr_vec[index]`.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.slots.get(index).map(|b| &**b)
    }

    /// Returns a mutable reference to the element at `index`, or `None` if
    /// `index` is out of bounds.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.slots.get_mut(index).map(|b| &mut **b)
    }

    /// Bounds-checked access returning an error that carries the offending
    /// index and the current length.
    ///
    /// ```
    /// use ptr_vec::{PtrVec, OutOfRange};
    ///
    /// let pv = PtrVec::from([1, 2]);
    /// assert_eq!(pv.at(1), Ok(&2));
    /// assert_eq!(pv.at(2), Err(OutOfRange { index: 2, len: 2 }));
    /// ```
    pub fn at(&self, index: usize) -> Result<&T, OutOfRange> {
        let len = self.len();
        self.get(index).ok_or(OutOfRange { index, len })
    }

    /// Mutable version of [`at`][PtrVec::at].
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, OutOfRange> {
        let len = self.len();
        self.get_mut(index).ok_or(OutOfRange { index, len })
    }

    /// Returns a reference to the first element, or `None` if the vector is
    /// empty.
    pub fn first(&self) -> Option<&T> {
        self.slots.first().map(|b| &**b)
    }

    /// Returns a mutable reference to the first element, or `None` if the
    /// vector is empty.
    pub fn first_mut(&mut self) -> Option<&mut T> {
        self.slots.first_mut().map(|b| &mut **b)
    }

    /// Returns a reference to the last element, or `None` if the vector is
    /// empty.
    pub fn last(&self) -> Option<&T> {
        self.slots.last().map(|b| &**b)
    }

    /// Returns a mutable reference to the last element, or `None` if the
    /// vector is empty.
    pub fn last_mut(&mut self) -> Option<&mut T> {
        self.slots.last_mut().map(|b| &mut **b)
    }

    /// Appends an already boxed element and returns its index.
    ///
    /// This is the way to add elements whose concrete type differs from `T`:
    /// the box coerces at the call site.
    ///
    /// ```
    /// use std::fmt::Display;
    /// use ptr_vec::PtrVec;
    ///
    /// let mut pv: PtrVec<dyn Display> = PtrVec::new();
    /// pv.push_boxed(Box::new(3));
    /// pv.push_boxed(Box::new("apples"));
    ///
    /// let words: Vec<_> = pv.iter().map(|d| d.to_string()).collect();
    /// assert_eq!(words, ["3", "apples"]);
    /// ```
    pub fn push_boxed(&mut self, elem: Box<T>) -> usize {
        self.slots.push(elem);
        self.slots.len() - 1
    }

    /// Appends the element created by `make` and returns its index.
    pub fn emplace_back<F>(&mut self, make: F) -> usize
    where
        F: FnOnce() -> Box<T>,
    {
        self.push_boxed(make())
    }

    /// Inserts an already boxed element at `index`, shifting all elements
    /// after it to the right. Returns `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn insert_boxed(&mut self, index: usize, elem: Box<T>) -> usize {
        self.assert_insert_index(index);
        self.slots.insert(index, elem);
        index
    }

    /// Inserts the element created by `make` at `index`, shifting all
    /// elements after it to the right. Returns `index`.
    ///
    /// `make` is only called after the index has been checked.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn emplace<F>(&mut self, index: usize, make: F) -> usize
    where
        F: FnOnce() -> Box<T>,
    {
        self.assert_insert_index(index);
        self.slots.insert(index, make());
        index
    }

    /// Inserts `count` elements created by `make` at `index`, preserving the
    /// order in which they were created. Returns `index`, which is the index
    /// of the first inserted element if `count > 0`.
    ///
    /// If `make` panics, the elements created before the panic stay in the
    /// vector, starting at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn insert_n_with<F>(&mut self, index: usize, count: usize, mut make: F) -> usize
    where
        F: FnMut() -> Box<T>,
    {
        self.assert_insert_index(index);

        // Append everything at the end and then rotate the new elements into
        // place. That's a single shift of the tail instead of one per element.
        self.slots.reserve(count);
        let mut guard = RotateOnDrop {
            old_len: self.slots.len(),
            slots: &mut self.slots,
            index,
        };
        for _ in 0..count {
            guard.slots.push(make());
        }

        index
    }

    /// Takes ownership of `elem` and appends it, without moving the element
    /// itself. Returns the index of the new element, or `None` (and does
    /// nothing) if `elem` is `None`.
    ///
    /// ```
    /// use ptr_vec::PtrVec;
    ///
    /// let b = Box::new(27);
    /// let addr: *const i32 = &*b;
    ///
    /// let mut pv: PtrVec<i32> = PtrVec::new();
    /// assert_eq!(pv.push_own(None), None);
    /// assert_eq!(pv.push_own(Some(b)), Some(0));
    /// assert!(std::ptr::eq(&pv[0], addr));
    /// ```
    pub fn push_own(&mut self, elem: Option<Box<T>>) -> Option<usize> {
        elem.map(|b| self.push_boxed(b))
    }

    /// Takes ownership of `elem` and inserts it at `index`. Returns `index`,
    /// or `None` (and does nothing) if `elem` is `None`.
    ///
    /// # Panics
    ///
    /// Panics if `elem` is `Some` and `index > len`.
    pub fn insert_own(&mut self, index: usize, elem: Option<Box<T>>) -> Option<usize> {
        elem.map(|b| self.insert_boxed(index, b))
    }

    /// Takes ownership of the allocation behind `ptr` and appends it. A null
    /// pointer is ignored and `None` returned.
    ///
    /// # Safety
    ///
    /// `ptr` must either be null or have been returned by `Box::into_raw`
    /// (for the global allocator), and must not be used by the caller
    /// afterwards. The element is dropped by this vector.
    pub unsafe fn push_raw(&mut self, ptr: *mut T) -> Option<usize> {
        if ptr.is_null() {
            return None;
        }

        Some(self.push_boxed(Box::from_raw(ptr)))
    }

    /// Like [`push_raw`][PtrVec::push_raw], but inserts at `index`.
    ///
    /// # Safety
    ///
    /// Same requirements as for `push_raw`.
    ///
    /// # Panics
    ///
    /// Panics if `ptr` is not null and `index > len`. The allocation is
    /// dropped in that case.
    pub unsafe fn insert_raw(&mut self, index: usize, ptr: *mut T) -> Option<usize> {
        if ptr.is_null() {
            return None;
        }

        Some(self.insert_boxed(index, Box::from_raw(ptr)))
    }

    /// Removes the last element and returns it, or `None` if the vector is
    /// empty. Dropping the returned box drops the element.
    pub fn pop(&mut self) -> Option<Box<T>> {
        self.slots.pop()
    }

    /// Removes the element at `index` and returns it, shifting all elements
    /// after it to the left.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn remove(&mut self, index: usize) -> Box<T> {
        self.assert_index(index);
        self.slots.remove(index)
    }

    /// Drops the element at `index`, shifting all elements after it to the
    /// left. Returns `index`, which now refers to the element that followed
    /// the erased one (or equals `len` if the last element was erased).
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn erase(&mut self, index: usize) -> usize {
        drop(self.remove(index));
        index
    }

    /// Drops all elements in `range`, shifting the elements after it to the
    /// left. Returns the start of the range, which now refers to the element
    /// that followed the erased range (or equals `len` if the range reached
    /// the end).
    ///
    /// # Panics
    ///
    /// Panics if the range is decreasing or its end is greater than `len`.
    pub fn erase_range<R>(&mut self, range: R) -> usize
    where
        R: RangeBounds<usize>,
    {
        use std::ops::Bound;

        let start = match range.start_bound() {
            Bound::Included(&s) => s,
            Bound::Excluded(&s) => s + 1,
            Bound::Unbounded => 0,
        };
        self.slots.drain(range);
        start
    }

    /// Keeps only the elements for which `keep` returns `true`; the others
    /// are dropped. The order of the kept elements is preserved.
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&T) -> bool,
    {
        self.slots.retain(|b| keep(&**b));
    }

    /// Replaces the element at `index` with `elem`, dropping the old one.
    /// Nothing is shifted.
    ///
    /// On error, `elem` is dropped and the vector is unchanged.
    pub fn reset_boxed_at(&mut self, index: usize, elem: Box<T>) -> Result<(), OutOfRange> {
        self.emplace_reset_at(index, move || elem)
    }

    /// Replaces the element at `index` with the one created by `make`,
    /// dropping the old one. `make` is not called if `index` is out of
    /// bounds.
    pub fn emplace_reset_at<F>(&mut self, index: usize, make: F) -> Result<(), OutOfRange>
    where
        F: FnOnce() -> Box<T>,
    {
        let len = self.len();
        let slot = self.slots.get_mut(index).ok_or(OutOfRange { index, len })?;
        *slot = make();
        Ok(())
    }

    /// Resizes the vector to `new_len` elements.
    ///
    /// If the vector shrinks, the trailing elements are dropped. If it grows,
    /// the new slots are filled with boxes created by `make`, called once per
    /// new element. Use this with a closure borrowing a prototype when the
    /// element type is unsized:
    ///
    /// ```
    /// use std::fmt::Debug;
    /// use ptr_vec::PtrVec;
    ///
    /// let proto = String::from("x");
    /// let mut pv: PtrVec<dyn Debug> = PtrVec::new();
    /// pv.resize_with(3, || Box::new(proto.clone()));
    /// assert_eq!(pv.len(), 3);
    /// pv.resize_with(1, || unreachable!());
    /// assert_eq!(pv.len(), 1);
    /// ```
    pub fn resize_with<F>(&mut self, new_len: usize, mut make: F)
    where
        F: FnMut() -> Box<T>,
    {
        let len = self.len();
        if new_len <= len {
            self.slots.truncate(new_len);
        } else {
            self.slots.reserve(new_len - len);
            for _ in len..new_len {
                self.slots.push(make());
            }
        }
    }

    /// Swaps the contents of both vectors, including the ownership of all
    /// elements. No element is moved in memory.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.slots, &mut other.slots);
    }

    /// Returns `true` if the vector contains an element equal to `x`.
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|e| e == x)
    }

    /// Returns an iterator over immutable references to the elements.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.slots)
    }

    /// Returns an iterator over mutable references to the elements.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(&mut self.slots)
    }

    /// Returns a read-only cursor positioned at `index`. `cursor(0)` is the
    /// beginning, `cursor(len)` the past-the-end position.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn cursor(&self, index: usize) -> Cursor<'_, T> {
        self.assert_insert_index(index);
        Cursor::new(&self.slots, self.owner_id(), index)
    }

    /// Returns a mutable cursor positioned at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn cursor_mut(&mut self, index: usize) -> CursorMut<'_, T> {
        self.assert_insert_index(index);
        let owner = self.owner_id();
        CursorMut::new(&mut self.slots, owner, index)
    }

    /// Moves all boxes into a standard `Vec`, leaving the elements where
    /// they are in memory.
    pub fn into_boxes(self) -> Vec<Box<T>> {
        self.slots.into_iter().collect()
    }

    /// Identifies this vector for cursor comparisons. Stable while any
    /// cursor borrows the vector, since it cannot move in that time.
    fn owner_id(&self) -> usize {
        self as *const Self as *const u8 as usize
    }

    fn assert_index(&self, index: usize) {
        assert!(
            index < self.len(),
            "index (is {}) should be < len (is {})",
            index,
            self.len(),
        );
    }

    fn assert_insert_index(&self, index: usize) {
        assert!(
            index <= self.len(),
            "index (is {}) should be <= len (is {})",
            index,
            self.len(),
        );
    }
}

/// Moves everything appended after `old_len` to `index` when dropped, also
/// while unwinding out of a panicking factory.
struct RotateOnDrop<'s, T: ?Sized, A: Allocator> {
    slots: &'s mut SlotVec<Box<T>, A>,
    index: usize,
    old_len: usize,
}

impl<T: ?Sized, A: Allocator> Drop for RotateOnDrop<'_, T, A> {
    fn drop(&mut self) {
        let added = self.slots.len() - self.old_len;
        self.slots[self.index..].rotate_right(added);
    }
}

impl<T, A: Allocator> PtrVec<T, A> {
    /// Boxes `elem`, appends it and returns its index.
    pub fn push(&mut self, elem: T) -> usize {
        self.push_boxed(Box::new(elem))
    }

    /// Boxes `elem` and inserts it at `index`, shifting all elements after it
    /// to the right. Returns `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn insert(&mut self, index: usize, elem: T) -> usize {
        self.insert_boxed(index, Box::new(elem))
    }

    /// Inserts `count` clones of `value` at `index`. Every clone gets its own
    /// allocation. Returns `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn insert_n(&mut self, index: usize, count: usize, value: &T) -> usize
    where
        T: Clone,
    {
        self.insert_n_with(index, count, || Box::new(value.clone()))
    }

    /// Replaces the element at `index` with `elem`, dropping the old one.
    pub fn reset_at(&mut self, index: usize, elem: T) -> Result<(), OutOfRange> {
        self.emplace_reset_at(index, move || Box::new(elem))
    }

    /// Resizes the vector to `new_len` elements, filling new slots with
    /// clones of `prototype`.
    ///
    /// ```
    /// use ptr_vec::PtrVec;
    ///
    /// let mut pv = PtrVec::from([6, 7]);
    /// pv.resize(4, &0);
    /// assert_eq!(pv, [6, 7, 0, 0]);
    /// pv.resize(1, &0);
    /// assert_eq!(pv, [6]);
    /// ```
    pub fn resize(&mut self, new_len: usize, prototype: &T)
    where
        T: Clone,
    {
        self.resize_with(new_len, || Box::new(prototype.clone()));
    }

    /// Appends clones of all elements in `other`.
    pub fn extend_from_slice(&mut self, other: &[T])
    where
        T: Clone,
    {
        self.extend(other);
    }
}

impl<T: ?Sized + fmt::Debug, A: Allocator> fmt::Debug for PtrVec<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PtrVec ")?;
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: ?Sized, A: Allocator + Default> Default for PtrVec<T, A> {
    fn default() -> Self {
        Self::new_in(A::default())
    }
}

impl<T: ?Sized, A: Allocator> Index<usize> for PtrVec<T, A> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        self.assert_index(index);
        &self.slots[index]
    }
}

impl<T: ?Sized, A: Allocator> IndexMut<usize> for PtrVec<T, A> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        self.assert_index(index);
        &mut self.slots[index]
    }
}

impl<T, U, A, B> PartialEq<PtrVec<U, B>> for PtrVec<T, A>
where
    T: ?Sized + PartialEq<U>,
    U: ?Sized,
    A: Allocator,
    B: Allocator,
{
    fn eq(&self, other: &PtrVec<U, B>) -> bool {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<T: ?Sized + Eq, A: Allocator> Eq for PtrVec<T, A> {}

impl<T: ?Sized + PartialEq<U>, U, A: Allocator> PartialEq<[U]> for PtrVec<T, A> {
    fn eq(&self, other: &[U]) -> bool {
        self.len() == other.len() && self.iter().zip(other).all(|(a, b)| a == b)
    }
}

impl<'b, T: ?Sized + PartialEq<U>, U, A: Allocator> PartialEq<&'b [U]> for PtrVec<T, A> {
    fn eq(&self, other: &&'b [U]) -> bool {
        self == *other
    }
}

impl<T: ?Sized + PartialEq<U>, U, A: Allocator> PartialEq<Vec<U>> for PtrVec<T, A> {
    fn eq(&self, other: &Vec<U>) -> bool {
        self == other.as_slice()
    }
}

impl<T: ?Sized + PartialEq<U>, U, A: Allocator, const N: usize> PartialEq<[U; N]> for PtrVec<T, A> {
    fn eq(&self, other: &[U; N]) -> bool {
        self == &other[..]
    }
}

impl<T: ?Sized + Hash, A: Allocator> Hash for PtrVec<T, A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for elem in self {
            elem.hash(state);
        }
    }
}

impl<T: ?Sized, A: Allocator> Extend<Box<T>> for PtrVec<T, A> {
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = Box<T>>,
    {
        let iter = iter.into_iter();
        self.slots.reserve(iter.size_hint().0);
        for elem in iter {
            self.slots.push(elem);
        }
    }
}

impl<'a, T: Clone + 'a, A: Allocator> Extend<&'a T> for PtrVec<T, A> {
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = &'a T>,
    {
        self.extend(iter.into_iter().map(|elem| Box::new(elem.clone())));
    }
}

impl<T: ?Sized> FromIterator<Box<T>> for PtrVec<T> {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Box<T>>,
    {
        let mut out = Self::new();
        out.extend(iter);
        out
    }
}

impl<T: ?Sized> From<Vec<Box<T>>> for PtrVec<T> {
    fn from(boxes: Vec<Box<T>>) -> Self {
        boxes.into_iter().collect()
    }
}

impl<T: Clone> From<&[T]> for PtrVec<T> {
    fn from(slice: &[T]) -> Self {
        let mut out = Self::with_capacity(slice.len());
        out.extend_from_slice(slice);
        out
    }
}

impl<T, const N: usize> From<[T; N]> for PtrVec<T> {
    fn from(values: [T; N]) -> Self {
        IntoIterator::into_iter(values).map(Box::new).collect()
    }
}

impl<T: ?Sized, A: Allocator> IntoIterator for PtrVec<T, A> {
    type Item = Box<T>;
    type IntoIter = IntoIter<T, A>;
    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.slots)
    }
}

impl<'a, T: ?Sized, A: Allocator> IntoIterator for &'a PtrVec<T, A> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T: ?Sized, A: Allocator> IntoIterator for &'a mut PtrVec<T, A> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
