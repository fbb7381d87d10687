use crate::{alloc::Vec, DynamicList, ListError};

impl<T> DynamicList<T> {
    /// Attempts to add `value` to the back of the list, growing the buffer if it is full.
    ///
    /// # Errors
    /// If the buffer cannot grow, this will return [`ListError::CapacityOverflow`] and drop `value`.
    pub fn try_append(&mut self, value: T) -> Result<(), ListError> {
        self.reserve_for(1)?;
        self.push_within_capacity(value);
        Ok(())
    }

    /// Adds `value` to the back of the list.
    ///
    /// Returns [`false`] if the buffer could not grow, in which case the list is unchanged.
    ///
    /// # Examples
    /// ```
    /// # use dynamic_list::DynamicList;
    /// let mut list = DynamicList::new();
    /// assert!(list.append("agate"));
    /// assert!(list.append("diamond"));
    /// assert_eq!(list.as_slice(), &["agate", "diamond"]);
    /// ```
    pub fn append(&mut self, value: T) -> bool {
        self.try_append(value).is_ok()
    }

    /// Inserts `value` at `index`, shifting every element after it one place to the right.
    ///
    /// Inserting at `len` is the same as [`append`](Self::append).
    ///
    /// # Errors
    /// - If `index > len`, this will return [`ListError::IndexOutOfRange`].
    /// - If the buffer cannot grow, this will return [`ListError::CapacityOverflow`].
    ///
    /// # Examples
    /// ```
    /// # use dynamic_list::DynamicList;
    /// let mut list = DynamicList::from(['a', 'b']);
    /// list.insert(1, 'c')?;
    /// assert_eq!(list.as_slice(), &['a', 'c', 'b']);
    /// assert!(list.insert(4, 'd').is_err());
    /// # Ok::<(), dynamic_list::ListError>(())
    /// ```
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), ListError> {
        let len = self.len;
        if index > len {
            return Err(ListError::IndexOutOfRange { index, len });
        }

        self.reserve_for(1)?;
        self.buffer[len].write(value);
        self.buffer[index..=len].rotate_right(1);
        self.len = len + 1;
        Ok(())
    }

    /// Adds every item to the back of the list, in iteration order.
    ///
    /// Returns [`true`] if anything was added.
    pub fn append_all<I>(&mut self, items: I) -> bool
    where
        I: IntoIterator<Item = T>,
    {
        let len = self.len;
        matches!(self.insert_all(len, items), Ok(true))
    }

    /// Inserts every item starting at `index`, keeping their iteration order.
    ///
    /// The elements previously at `index..` move past the inserted block.
    /// Returns `Ok(true)` if anything was added, and `Ok(false)` if there was nothing to add or the
    /// buffer could not grow. In both cases the list is left unchanged.
    ///
    /// # Errors
    /// If `index > len`, this will return [`ListError::IndexOutOfRange`].
    ///
    /// # Examples
    /// ```
    /// # use dynamic_list::DynamicList;
    /// let mut list = DynamicList::from(['a', 'b']);
    /// assert_eq!(list.insert_all(1, ['x', 'y']), Ok(true));
    /// assert_eq!(list.as_slice(), &['a', 'x', 'y', 'b']);
    /// ```
    pub fn insert_all<I>(&mut self, index: usize, items: I) -> Result<bool, ListError>
    where
        I: IntoIterator<Item = T>,
    {
        let len = self.len;
        if index > len {
            return Err(ListError::IndexOutOfRange { index, len });
        }

        let items: Vec<T> = items.into_iter().collect();
        let count = items.len();
        if count == 0 || self.reserve_for(count).is_err() {
            return Ok(false);
        }

        for (slot, item) in self.buffer[len..len + count].iter_mut().zip(items) {
            slot.write(item);
        }
        self.buffer[index..len + count].rotate_right(count);
        self.len = len + count;
        Ok(true)
    }

    /// Removes the element at `index` and returns it.
    ///
    /// Every element after it moves one place to the left.
    ///
    /// # Errors
    /// If `index >= len`, this will return [`ListError::IndexOutOfRange`].
    pub fn remove_at(&mut self, index: usize) -> Result<T, ListError> {
        let len = self.len;
        if index >= len {
            return Err(ListError::IndexOutOfRange { index, len });
        }

        // SAFETY:
        // `index < len`, so the slot is initialised. It is moved to the unused tail below and
        // is not read again.
        let value = unsafe { self.buffer[index].assume_init_read() };
        self.buffer[index..len].rotate_left(1);
        self.len = len - 1;
        Ok(value)
    }

    /// Removes the first element equal to `value`.
    ///
    /// Returns [`false`] if no element matched.
    pub fn remove_value(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(value)
            .is_some_and(|index| self.remove_at(index).is_ok())
    }

    /// Removes one matching element for each item in `items`, in their order.
    ///
    /// Returns [`true`] if the list changed.
    pub fn remove_all(&mut self, items: &[T]) -> bool
    where
        T: PartialEq,
    {
        let before = self.len;
        for item in items {
            self.remove_value(item);
        }
        before != self.len
    }

    /// Removes every element that does not appear in `items`.
    ///
    /// Returns [`true`] if the list changed.
    ///
    /// # Examples
    /// ```
    /// # use dynamic_list::DynamicList;
    /// let mut list = DynamicList::from([1, 2, 1, 3]);
    /// assert!(list.retain_all(&[1, 3]));
    /// assert_eq!(list.as_slice(), &[1, 1, 3]);
    /// assert!(!list.retain_all(&[1, 3]));
    /// ```
    pub fn retain_all(&mut self, items: &[T]) -> bool
    where
        T: PartialEq,
    {
        let before = self.len;
        let mut index = 0;
        while index < self.len {
            if items.contains(&self.as_slice()[index]) {
                index += 1;
            } else {
                // The next element has shifted into `index`, so it is examined next.
                let _ = self.remove_at(index);
            }
        }
        before != self.len
    }
}
