use core::fmt;

use crate::{DynamicList, ListError};

/// A cursor that walks a [`DynamicList`] from front to back and can remove what it has passed.
///
/// The cursor sits between elements. It starts before the first one and [`next`](Self::next)
/// steps over one element at a time.
pub struct ForwardCursor<'a, T> {
    pub(crate) list: &'a mut DynamicList<T>,
    pub(crate) position: usize,
}

impl<T> ForwardCursor<'_, T> {
    #[must_use]
    #[inline]
    /// Returns [`true`] if there is an element after the cursor.
    pub fn has_next(&self) -> bool {
        self.position < self.list.len()
    }

    #[allow(clippy::should_implement_trait)]
    /// Steps over the next element and returns it.
    ///
    /// # Errors
    /// If the cursor is at the back of the list, this will return [`ListError::Exhausted`].
    pub fn next(&mut self) -> Result<&T, ListError> {
        let position = self.position;
        let value = self
            .list
            .as_slice()
            .get(position)
            .ok_or(ListError::Exhausted)?;
        self.position = position + 1;
        Ok(value)
    }

    /// Removes the element the cursor last stepped over.
    ///
    /// # Errors
    /// If the cursor has not stepped over anything, this will return
    /// [`ListError::InvalidCursorState`].
    ///
    /// # Examples
    /// ```
    /// # use dynamic_list::DynamicList;
    /// let mut list = DynamicList::from([1, 2, 3]);
    /// let mut cursor = list.forward_cursor();
    /// assert!(cursor.remove_last().is_err());
    ///
    /// cursor.next()?;
    /// assert_eq!(cursor.remove_last(), Ok(1));
    /// assert_eq!(cursor.next(), Ok(&2));
    /// # Ok::<(), dynamic_list::ListError>(())
    /// ```
    pub fn remove_last(&mut self) -> Result<T, ListError> {
        let index = self
            .position
            .checked_sub(1)
            .ok_or(ListError::InvalidCursorState)?;
        let value = self.list.remove_at(index)?;
        self.position = index;
        Ok(value)
    }

    #[must_use]
    #[inline]
    /// Returns the index of the element [`next`](Self::next) would return.
    pub fn position(&self) -> usize {
        self.position
    }

    #[must_use]
    #[inline]
    /// Returns a reference to the underlying list.
    pub fn as_list(&self) -> &DynamicList<T> {
        self.list
    }
}

impl<T> fmt::Debug for ForwardCursor<'_, T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ForwardCursor")
            .field("position", &self.position)
            .field("list", &self.list)
            .finish()
    }
}
