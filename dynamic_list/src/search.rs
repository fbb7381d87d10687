use crate::DynamicList;

impl<T> DynamicList<T>
where
    T: PartialEq,
{
    #[must_use]
    /// Returns the index of the first element equal to `value`.
    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.iter().position(|element| element == value)
    }

    #[must_use]
    /// Returns the index of the last element equal to `value`.
    pub fn last_index_of(&self, value: &T) -> Option<usize> {
        self.iter().rposition(|element| element == value)
    }

    #[must_use]
    #[inline]
    /// Returns [`true`] if an element equal to `value` is in the list.
    pub fn contains(&self, value: &T) -> bool {
        self.index_of(value).is_some()
    }

    #[must_use]
    /// Returns [`true`] if every item in `items` is in the list.
    pub fn contains_all(&self, items: &[T]) -> bool {
        items.iter().all(|item| self.contains(item))
    }
}
