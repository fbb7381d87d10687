#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::perf,
    clippy::cargo,
    clippy::alloc_instead_of_core,
    clippy::std_instead_of_alloc,
    clippy::std_instead_of_core,
    clippy::get_unwrap,
    clippy::panic_in_result_fn,
    clippy::todo,
    clippy::undocumented_unsafe_blocks,
    unsafe_op_in_unsafe_fn,
    clippy::multiple_unsafe_ops_per_block
)]
#![cfg_attr(not(test), warn(clippy::unwrap_used, clippy::expect_used))]
#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

mod alloc {
    extern crate alloc;
    pub use alloc::{boxed::Box, vec::Vec};
}

use core::{
    alloc::Layout,
    fmt,
    mem::{self, MaybeUninit},
    ptr, slice,
};

use crate::alloc::Box;

pub mod cursor;
mod edit;
mod errors;
pub mod iter;
mod search;
mod snapshot;

use cursor::{BidirectionalCursor, ForwardCursor};
pub use errors::ListError;

/// The capacity of a new or freshly cleared [`DynamicList`].
pub const DEFAULT_CAPACITY: usize = 15;

/// Numerator of the growth ratio.
///
/// A full list grows to `capacity * GROWTH_NUMERATOR / GROWTH_DENOMINATOR` slots, rounded down.
pub const GROWTH_NUMERATOR: usize = 13;

/// Denominator of the growth ratio.
pub const GROWTH_DENOMINATOR: usize = 10;

/// A growable, contiguous list.
///
/// Elements live in a single buffer of [`capacity`](Self::capacity) slots, of which the first
/// [`len`](Self::len) are initialised. When the buffer is full it grows by 30%.
///
/// Cursors ([`ForwardCursor`], [`BidirectionalCursor`]) borrow the list mutably, so the list cannot
/// be changed behind their back. The list itself does no synchronisation.
pub struct DynamicList<T> {
    buffer: Box<[MaybeUninit<T>]>,
    len: usize,
}

impl<T> DynamicList<T> {
    #[must_use]
    #[inline]
    /// Creates an empty [`DynamicList`] with [`DEFAULT_CAPACITY`] slots.
    pub fn new() -> Self {
        Self {
            buffer: Box::new_uninit_slice(DEFAULT_CAPACITY),
            len: 0,
        }
    }

    #[must_use]
    #[inline]
    /// Creates a [`DynamicList`] holding one element.
    ///
    /// # Examples
    /// ```
    /// # use dynamic_list::DynamicList;
    /// let list = DynamicList::from_element('a');
    /// assert_eq!(list.as_slice(), &['a']);
    /// ```
    pub fn from_element(value: T) -> Self {
        let mut list = Self::new();
        list.push_within_capacity(value);
        list
    }

    #[must_use]
    #[inline]
    /// Returns the number of elements in the list.
    pub const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    #[inline]
    /// Returns the number of slots in the backing buffer.
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    #[inline]
    /// Returns [`true`] if the list holds no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    #[inline]
    /// Gets the elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY:
        // The first `len` slots are initialised and `MaybeUninit<T>` has the same layout as `T`.
        unsafe { slice::from_raw_parts(self.buffer.as_ptr().cast::<T>(), self.len) }
    }

    #[must_use]
    #[inline]
    /// Gets the elements as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY:
        // The first `len` slots are initialised and `MaybeUninit<T>` has the same layout as `T`.
        unsafe { slice::from_raw_parts_mut(self.buffer.as_mut_ptr().cast::<T>(), self.len) }
    }

    /// Gets a reference to the element at `index`.
    ///
    /// # Errors
    /// If `index >= len`, this will return [`ListError::IndexOutOfRange`].
    pub fn get(&self, index: usize) -> Result<&T, ListError> {
        self.as_slice()
            .get(index)
            .ok_or(ListError::IndexOutOfRange {
                index,
                len: self.len,
            })
    }

    /// Gets a mutable reference to the element at `index`.
    ///
    /// # Errors
    /// If `index >= len`, this will return [`ListError::IndexOutOfRange`].
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, ListError> {
        let len = self.len;
        self.as_mut_slice()
            .get_mut(index)
            .ok_or(ListError::IndexOutOfRange { index, len })
    }

    /// Replaces the element at `index` with `value`, returning the previous element.
    ///
    /// # Errors
    /// If `index >= len`, this will return [`ListError::IndexOutOfRange`].
    ///
    /// # Examples
    /// ```
    /// # use dynamic_list::DynamicList;
    /// let mut list = DynamicList::from([1, 2, 3]);
    /// assert_eq!(list.set(1, 20), Ok(2));
    /// assert_eq!(list.as_slice(), &[1, 20, 3]);
    /// assert!(list.set(3, 4).is_err());
    /// ```
    pub fn set(&mut self, index: usize, value: T) -> Result<T, ListError> {
        self.get_mut(index).map(|slot| mem::replace(slot, value))
    }

    /// Drops every element and resets the capacity to [`DEFAULT_CAPACITY`].
    ///
    /// # Examples
    /// ```
    /// # use dynamic_list::{DynamicList, DEFAULT_CAPACITY};
    /// let mut list: DynamicList<u32> = (0..100).collect();
    /// assert!(list.capacity() > DEFAULT_CAPACITY);
    ///
    /// list.clear();
    /// assert!(list.is_empty());
    /// assert_eq!(list.capacity(), DEFAULT_CAPACITY);
    /// ```
    pub fn clear(&mut self) {
        let mut old = mem::replace(&mut self.buffer, Box::new_uninit_slice(DEFAULT_CAPACITY));
        let len = mem::replace(&mut self.len, 0);
        let live = ptr::slice_from_raw_parts_mut(old.as_mut_ptr().cast::<T>(), len);
        // SAFETY:
        // The first `len` slots of the old buffer were initialised and the list no longer refers to them.
        unsafe { ptr::drop_in_place(live) };
    }

    #[must_use]
    #[inline]
    /// Creates an iterator over references to the elements.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    #[must_use]
    #[inline]
    /// Creates an iterator over mutable references to the elements.
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    #[must_use]
    #[inline]
    /// Creates a [`ForwardCursor`] before the first element.
    pub fn forward_cursor(&mut self) -> ForwardCursor<'_, T> {
        ForwardCursor {
            list: self,
            position: 0,
        }
    }

    #[must_use]
    #[inline]
    /// Creates a [`BidirectionalCursor`] before the first element.
    pub fn cursor(&mut self) -> BidirectionalCursor<'_, T> {
        BidirectionalCursor {
            list: self,
            position: 0,
            last_returned: None,
        }
    }

    /// Creates a [`BidirectionalCursor`] whose first call to `next` yields the element at `index`.
    ///
    /// # Errors
    /// If `index > len`, this will return [`ListError::IndexOutOfRange`].
    pub fn cursor_at(&mut self, index: usize) -> Result<BidirectionalCursor<'_, T>, ListError> {
        if index > self.len {
            return Err(ListError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }

        Ok(BidirectionalCursor {
            list: self,
            position: index,
            last_returned: None,
        })
    }

    /// Makes room for `additional` more elements.
    ///
    /// The capacity grows by the growth ratio, repeatedly, until the elements fit.
    fn reserve_for(&mut self, additional: usize) -> Result<(), ListError> {
        let required = self
            .len
            .checked_add(additional)
            .ok_or(ListError::CapacityOverflow)?;
        if required <= self.capacity() {
            return Ok(());
        }

        let capacity = grown_capacity(self.capacity(), required)?;
        self.reallocate(capacity)
    }

    fn reallocate(&mut self, capacity: usize) -> Result<(), ListError> {
        if Layout::array::<T>(capacity).is_err() {
            return Err(ListError::CapacityOverflow);
        }

        let mut buffer = Box::new_uninit_slice(capacity);
        // SAFETY:
        // Both buffers have at least `len` slots and are separate allocations.
        // The elements are moved bitwise and the old buffer never drops its contents.
        unsafe { ptr::copy_nonoverlapping(self.buffer.as_ptr(), buffer.as_mut_ptr(), self.len) };
        self.buffer = buffer;
        Ok(())
    }

    /// Writes `value` into the first free slot.
    ///
    /// The caller must have reserved space beforehand.
    fn push_within_capacity(&mut self, value: T) {
        debug_assert!(self.len < self.capacity());
        self.buffer[self.len].write(value);
        self.len += 1;
    }

    /// Moves the buffer out, leaving an empty list with no capacity behind.
    fn take_buffer(&mut self) -> (Box<[MaybeUninit<T>]>, usize) {
        let buffer = mem::replace(&mut self.buffer, Box::new_uninit_slice(0));
        let len = mem::replace(&mut self.len, 0);
        (buffer, len)
    }

    #[cfg(test)]
    fn check_invariants(&self) {
        assert!(self.len <= self.capacity());
        assert!(self.capacity() >= DEFAULT_CAPACITY);
    }
}

/// Applies the growth ratio to `capacity` until it reaches `required`.
fn grown_capacity(mut capacity: usize, required: usize) -> Result<usize, ListError> {
    while capacity < required {
        capacity = capacity
            .checked_mul(GROWTH_NUMERATOR)
            .map(|scaled| (scaled / GROWTH_DENOMINATOR).max(capacity + 1))
            .ok_or(ListError::CapacityOverflow)?;
    }
    Ok(capacity)
}

impl<T> Default for DynamicList<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for DynamicList<T> {
    fn drop(&mut self) {
        let live: *mut [T] = self.as_mut_slice();
        // SAFETY:
        // The live prefix is initialised and is never read again.
        unsafe { ptr::drop_in_place(live) };
    }
}

impl<T> Clone for DynamicList<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        let mut list = Self {
            buffer: Box::new_uninit_slice(self.capacity()),
            len: 0,
        };
        for value in self {
            list.push_within_capacity(value.clone());
        }
        list
    }
}

impl<T> PartialEq for DynamicList<T>
where
    T: PartialEq,
{
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T> Eq for DynamicList<T> where T: Eq {}

impl<T> fmt::Debug for DynamicList<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> fmt::Display for DynamicList<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (index, value) in self.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            fmt::Display::fmt(value, f)?;
        }
        f.write_str("]")
    }
}

impl<T> Extend<T> for DynamicList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.append_all(iter);
    }
}

impl<T> FromIterator<T> for DynamicList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.append_all(iter);
        list
    }
}

impl<T> From<alloc::Vec<T>> for DynamicList<T> {
    #[inline]
    fn from(values: alloc::Vec<T>) -> Self {
        values.into_iter().collect()
    }
}

impl<T, const N: usize> From<[T; N]> for DynamicList<T> {
    #[inline]
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<'a, T> IntoIterator for &'a DynamicList<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut DynamicList<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
