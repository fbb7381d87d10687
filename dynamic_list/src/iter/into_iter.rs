use core::{fmt, iter::FusedIterator, mem::MaybeUninit, ptr, slice};

use crate::{alloc::Box, DynamicList};

/// An iterator over owned elements of a [`DynamicList`].
///
/// This is created by [`DynamicList::into_iter`](IntoIterator::into_iter).
pub struct IntoIter<T> {
    buffer: Box<[MaybeUninit<T>]>,
    front: usize,
    back: usize,
}

impl<T> IntoIter<T> {
    #[must_use]
    #[inline]
    pub(crate) fn new(mut list: DynamicList<T>) -> Self {
        let (buffer, len) = list.take_buffer();
        Self {
            buffer,
            front: 0,
            back: len,
        }
    }

    #[must_use]
    #[inline]
    /// Gets the elements that have not been yielded yet.
    pub fn as_slice(&self) -> &[T] {
        let remaining = &self.buffer[self.front..self.back];
        // SAFETY:
        // The slots in `front..back` are initialised and `MaybeUninit<T>` has the same layout as `T`.
        unsafe { slice::from_raw_parts(remaining.as_ptr().cast::<T>(), remaining.len()) }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }

        // SAFETY:
        // `front < back`, so the slot is initialised. `front` moves past it, so it is not read again.
        let value = unsafe { self.buffer[self.front].assume_init_read() };
        self.front += 1;
        Some(value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }

        self.back -= 1;
        // SAFETY:
        // The slot at the old `back - 1` is initialised and is now outside `front..back`.
        Some(unsafe { self.buffer[self.back].assume_init_read() })
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        let remaining = &mut self.buffer[self.front..self.back];
        let remaining =
            ptr::slice_from_raw_parts_mut(remaining.as_mut_ptr().cast::<T>(), remaining.len());
        // SAFETY:
        // The slots in `front..back` are initialised and have not been yielded.
        unsafe { ptr::drop_in_place(remaining) };
    }
}

impl<T> fmt::Debug for IntoIter<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<T> IntoIterator for DynamicList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}
