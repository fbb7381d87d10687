use core::fmt;

use crate::{DynamicList, ListError};

/// A cursor that walks a [`DynamicList`] in both directions and can edit it as it goes.
///
/// The cursor sits between elements: [`next`](Self::next) steps over the element after it and
/// [`previous`](Self::previous) over the element before it.
/// The element stepped over last can be removed or replaced until the cursor inserts or removes.
///
/// # Examples
/// ```
/// # use dynamic_list::DynamicList;
/// let mut list = DynamicList::from(['a', 'b', 'c']);
/// let mut cursor = list.cursor_at(1)?;
/// assert_eq!(cursor.next(), Ok(&'b'));
/// cursor.replace_last('B')?;
/// cursor.insert_before('x')?;
/// assert_eq!(cursor.previous(), Ok(&'x'));
/// cursor.remove_last()?;
/// assert_eq!(list.as_slice(), &['a', 'B', 'c']);
/// # Ok::<(), dynamic_list::ListError>(())
/// ```
pub struct BidirectionalCursor<'a, T> {
    pub(crate) list: &'a mut DynamicList<T>,
    pub(crate) position: usize,
    pub(crate) last_returned: Option<usize>,
}

impl<T> BidirectionalCursor<'_, T> {
    #[must_use]
    #[inline]
    /// Returns [`true`] if there is an element after the cursor.
    pub fn has_next(&self) -> bool {
        self.position < self.list.len()
    }

    #[must_use]
    #[inline]
    /// Returns [`true`] if there is an element before the cursor.
    pub const fn has_previous(&self) -> bool {
        self.position > 0
    }

    #[allow(clippy::should_implement_trait)]
    /// Steps forwards over the next element and returns it.
    ///
    /// # Errors
    /// If the cursor is at the back of the list, this will return [`ListError::Exhausted`].
    pub fn next(&mut self) -> Result<&T, ListError> {
        let index = self.position;
        let value = self
            .list
            .as_slice()
            .get(index)
            .ok_or(ListError::Exhausted)?;
        self.position = index + 1;
        self.last_returned = Some(index);
        Ok(value)
    }

    /// Steps backwards over the previous element and returns it.
    ///
    /// # Errors
    /// If the cursor is at the front of the list, this will return [`ListError::Exhausted`].
    pub fn previous(&mut self) -> Result<&T, ListError> {
        let index = self.position.checked_sub(1).ok_or(ListError::Exhausted)?;
        let value = self
            .list
            .as_slice()
            .get(index)
            .ok_or(ListError::Exhausted)?;
        self.position = index;
        self.last_returned = Some(index);
        Ok(value)
    }

    #[must_use]
    #[inline]
    /// Returns the index of the element [`next`](Self::next) would return.
    pub const fn next_index(&self) -> usize {
        self.position
    }

    #[must_use]
    #[inline]
    /// Returns the index of the element [`previous`](Self::previous) would return.
    ///
    /// At the front of the list this returns [`None`].
    pub const fn previous_index(&self) -> Option<usize> {
        self.position.checked_sub(1)
    }

    /// Removes the element last stepped over by [`next`](Self::next) or
    /// [`previous`](Self::previous).
    ///
    /// # Errors
    /// If there has been no step since the last insertion or removal, this will return
    /// [`ListError::InvalidCursorState`].
    pub fn remove_last(&mut self) -> Result<T, ListError> {
        let index = self.last_returned.ok_or(ListError::InvalidCursorState)?;
        let value = self.list.remove_at(index)?;
        self.position = index;
        self.last_returned = None;
        Ok(value)
    }

    /// Replaces the element last stepped over with `value`, returning the old element.
    ///
    /// The element stays eligible, so it can be replaced again without stepping.
    ///
    /// # Errors
    /// If there has been no step since the last insertion or removal, this will return
    /// [`ListError::InvalidCursorState`].
    pub fn replace_last(&mut self, value: T) -> Result<T, ListError> {
        let index = self.last_returned.ok_or(ListError::InvalidCursorState)?;
        self.list.set(index, value)
    }

    /// Inserts `value` before the cursor and steps past it.
    ///
    /// Nothing is eligible for removal or replacement until the cursor steps again.
    ///
    /// # Errors
    /// If the buffer cannot grow, this will return [`ListError::CapacityOverflow`].
    pub fn insert_before(&mut self, value: T) -> Result<(), ListError> {
        self.list.insert(self.position, value)?;
        self.position += 1;
        self.last_returned = None;
        Ok(())
    }

    #[must_use]
    #[inline]
    /// Returns a reference to the underlying list.
    pub fn as_list(&self) -> &DynamicList<T> {
        self.list
    }
}

impl<T> fmt::Debug for BidirectionalCursor<'_, T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BidirectionalCursor")
            .field("position", &self.position)
            .field("last_returned", &self.last_returned)
            .field("list", &self.list)
            .finish()
    }
}
