use crate::zipper::CircularCursor;

impl<T> CircularCursor<T> {
    /// Inserts `item` immediately before the cursor. The cursor element is
    /// unchanged and [`offset`] grows by one. Inserting into an empty cursor
    /// leaves it past the logical end, pointing at `item`.
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_zipper::CircularCursor;
    ///
    /// let cursor = CircularCursor::init([1, 2, 3, 4, 5]).insert(0);
    /// assert_eq!(cursor.current(), Some(&1));
    /// assert_eq!(cursor.offset(), 1);
    /// assert_eq!(cursor.to_list(), vec![0, 1, 2, 3, 4, 5]);
    /// ```
    ///
    /// [`offset`]: CircularCursor::offset
    #[must_use]
    pub fn insert(mut self, item: T) -> Self {
        self.visited.push_back(item);
        self
    }

    /// Overwrites the element at the cursor with `item`. The position and the
    /// length are unchanged, and an empty cursor is returned as is.
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_zipper::CircularCursor;
    ///
    /// let cursor = CircularCursor::init([1, 2, 3, 4, 5]).move_next_by(3).replace(0);
    /// assert_eq!(cursor.current(), Some(&0));
    /// assert_eq!(cursor.to_list(), vec![1, 2, 3, 0, 5]);
    /// ```
    #[must_use]
    pub fn replace(mut self, item: T) -> Self {
        if let Some(current) = self.current_mut() {
            *current = item;
        }
        self
    }

    /// Removes the element at the cursor; the cursor then points at the
    /// element that followed it, wrapping to the logical start if it was the
    /// last one. An empty cursor is returned as is.
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_zipper::CircularCursor;
    ///
    /// let cursor = CircularCursor::init(1..=7).move_next_by(3).remove();
    /// assert_eq!(cursor.current(), Some(&5));
    /// assert_eq!(cursor.to_list(), vec![1, 2, 3, 5, 6, 7]);
    /// ```
    #[must_use]
    pub fn remove(self) -> Self {
        self.pop().0
    }

    /// Removes the element at the cursor like [`remove`], and returns it
    /// along with the new cursor, or `None` if the cursor was empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_zipper::CircularCursor;
    ///
    /// let (cursor, removed) = CircularCursor::init(['a', 'b']).move_next().pop();
    /// assert_eq!(removed, Some('b'));
    /// assert_eq!(cursor.current(), Some(&'a'));
    ///
    /// let (cursor, removed) = cursor.pop();
    /// assert_eq!(removed, Some('a'));
    /// assert!(cursor.is_empty());
    ///
    /// let (cursor, removed) = cursor.pop();
    /// assert_eq!(removed, None);
    /// assert!(cursor.is_empty());
    /// ```
    ///
    /// [`remove`]: CircularCursor::remove
    pub fn pop(mut self) -> (Self, Option<T>) {
        let removed = match self.remaining.pop_front() {
            Some(elem) => Some(elem),
            // past the logical end the cursor is the logical start
            None => self.visited.pop_front(),
        };
        (self, removed)
    }
}
