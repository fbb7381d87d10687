use crate::{alloc::Vec, DynamicList, ListError};

impl<T> DynamicList<T>
where
    T: Clone,
{
    #[must_use]
    /// Copies the elements into a new [`Vec`].
    pub fn to_vec(&self) -> Vec<T> {
        self.as_slice().to_vec()
    }

    #[must_use]
    /// Copies the elements into `dest`, reusing it when it is long enough.
    ///
    /// If `dest` is shorter than the list, a new buffer of exactly `len` slots is returned instead.
    /// Otherwise the first `len` slots of `dest` are overwritten and, if `dest` is longer, the slot
    /// at `len` is set to [`None`] to mark the end of the copied elements.
    ///
    /// # Examples
    /// ```
    /// # use dynamic_list::DynamicList;
    /// let list = DynamicList::from([1, 2]);
    /// let dest = list.to_vec_into(vec![Some(7); 4]);
    /// assert_eq!(dest, [Some(1), Some(2), None, Some(7)]);
    /// ```
    pub fn to_vec_into(&self, mut dest: Vec<Option<T>>) -> Vec<Option<T>> {
        if dest.len() < self.len() {
            return self.iter().cloned().map(Some).collect();
        }

        for (slot, value) in dest.iter_mut().zip(self) {
            *slot = Some(value.clone());
        }
        if let Some(end) = dest.get_mut(self.len()) {
            *end = None;
        }
        dest
    }

    /// Copies the elements in `from..to` into a new [`Vec`].
    ///
    /// # Errors
    /// If `to > len` or `from > to`, this will return [`ListError::IndexOutOfRange`].
    pub fn sub_list(&self, from: usize, to: usize) -> Result<Vec<T>, ListError> {
        let len = self.len();
        if to > len {
            return Err(ListError::IndexOutOfRange { index: to, len });
        }
        if from > to {
            return Err(ListError::IndexOutOfRange { index: from, len });
        }

        Ok(self.as_slice()[from..to].to_vec())
    }
}

#[cfg(test)]
mod tests {
    use crate::{DynamicList, ListError};

    #[test]
    fn to_vec_preserves_order() {
        let list = DynamicList::from(["agate", "diamond"]);
        assert_eq!(list.to_vec(), ["agate", "diamond"]);
        assert!(DynamicList::<u8>::new().to_vec().is_empty());
    }

    #[test]
    fn to_vec_into_short_destination() {
        let list = DynamicList::from([1, 2]);
        let dest = list.to_vec_into(vec![Some(9)]);
        assert_eq!(dest, [Some(1), Some(2)]);
    }

    #[test]
    fn to_vec_into_exact_destination() {
        let list = DynamicList::from([1, 2]);
        let dest = list.to_vec_into(vec![None, None]);
        assert_eq!(dest, [Some(1), Some(2)]);
    }

    #[test]
    fn to_vec_into_marks_the_end() {
        let list = DynamicList::from([1]);
        let dest = list.to_vec_into(vec![Some(5), Some(6), Some(7)]);
        assert_eq!(dest, [Some(1), None, Some(7)]);
    }

    #[test]
    fn sub_list_bounds() {
        let list = DynamicList::from([1, 2, 3]);
        assert_eq!(list.sub_list(1, 3), Ok(vec![2, 3]));
        assert_eq!(list.sub_list(3, 3), Ok(vec![]));
        assert_eq!(list.sub_list(0, 0), Ok(vec![]));
        assert_eq!(
            list.sub_list(1, 22),
            Err(ListError::IndexOutOfRange { index: 22, len: 3 })
        );
        assert_eq!(
            list.sub_list(2, 1),
            Err(ListError::IndexOutOfRange { index: 2, len: 3 })
        );
    }

    #[test]
    fn sub_list_is_independent() {
        let mut list = DynamicList::from([1, 2, 3]);
        let copy = list.sub_list(0, 2).unwrap();
        list.set(0, 10).unwrap();
        assert_eq!(copy, [1, 2]);
    }
}
