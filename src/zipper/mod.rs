use std::collections::VecDeque;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

mod edit;
pub mod iterator;

mod algorithms;
#[cfg(test)]
mod properties;

/// The `CircularCursor` is a circular sequence with a movable cursor, represented
/// as a zipper split at the cursor position.
///
/// The `CircularCursor` contains:
/// - the `visited` half: elements the cursor has already passed. It is kept in
///   forward order, so its *back* is the element most recently stepped over
///   and iterating it from the back yields the visited elements nearest-first;
/// - the `remaining` half: the cursor element followed by every element ahead
///   of it, in forward order.
///
/// `visited` followed by `remaining` is always the canonical forward order of
/// the sequence (see [`to_list`]). The neighbour in either direction is the end
/// of one of the halves, so a single step is *O*(1).
///
/// When `remaining` is empty but `visited` is not, the cursor has stepped past
/// the logical end and conceptually points at the logical start again.
///
/// Every stepping and editing operation consumes the cursor and returns the
/// new state:
/// ```
/// use cyclic_zipper::CircularCursor;
///
/// let cursor = CircularCursor::init(vec![1, 2, 3, 4, 5, 6, 7]);
/// let moved = cursor.clone().move_next_by(3);
///
/// assert_eq!(cursor.current(), Some(&1));
/// assert_eq!(moved.current(), Some(&4));
/// assert_eq!(moved.value(-4), Some(&7));
/// ```
///
/// [`to_list`]: CircularCursor::to_list
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CircularCursor<T> {
    pub(crate) visited: VecDeque<T>,
    pub(crate) remaining: VecDeque<T>,
}

impl<T> Default for CircularCursor<T> {
    fn default() -> Self {
        Self::new()
    }
}

// private methods
impl<T> CircularCursor<T> {
    /// Move elements across the split until exactly `target` elements are
    /// visited. Both halves keep their canonical order.
    fn settle_at(mut self, target: usize) -> Self {
        debug_assert!(target <= self.len());
        let visited = self.visited.len();
        if target > visited {
            self.visited.extend(self.remaining.drain(..target - visited));
        } else {
            for elem in self.visited.drain(target..).rev() {
                self.remaining.push_front(elem);
            }
        }
        debug_assert_eq!(self.visited.len(), target);
        self
    }

    /// Resolve `offset` (relative to the cursor) into an index into one of the
    /// halves, wrapping by the logical length.
    fn resolve(&self, offset: isize) -> Option<Position> {
        if self.is_empty() {
            return None;
        }
        let len = self.len() as i128;
        let visited = self.visited.len() as i128;
        // normalise into `-visited..remaining`, a window of exactly `len`
        let wrapped = (offset as i128 + visited).rem_euclid(len) - visited;
        if wrapped < 0 {
            Some(Position::Visited((visited + wrapped) as usize))
        } else {
            Some(Position::Remaining(wrapped as usize))
        }
    }
}

#[derive(Clone, Copy)]
enum Position {
    Visited(usize),
    Remaining(usize),
}

impl<T> CircularCursor<T> {
    /// Creates an empty `CircularCursor`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_zipper::CircularCursor;
    ///
    /// let cursor = CircularCursor::<i32>::new();
    /// assert!(cursor.is_empty());
    /// assert_eq!(cursor.current(), None);
    /// ```
    pub fn new() -> Self {
        Self {
            visited: VecDeque::new(),
            remaining: VecDeque::new(),
        }
    }

    /// Creates a `CircularCursor` over `items`, with the cursor at the first
    /// element and nothing visited.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_zipper::CircularCursor;
    ///
    /// let cursor = CircularCursor::init(['a', 'b', 'c']);
    /// assert_eq!(cursor.current(), Some(&'a'));
    /// assert_eq!(cursor.offset(), 0);
    /// assert_eq!(cursor.len(), 3);
    /// ```
    pub fn init<I: IntoIterator<Item = T>>(items: I) -> Self {
        Self {
            visited: VecDeque::new(),
            remaining: items.into_iter().collect(),
        }
    }

    /// Returns the logical length of the sequence.
    pub fn len(&self) -> usize {
        self.visited.len() + self.remaining.len()
    }

    /// Returns `true` if the sequence holds no element.
    pub fn is_empty(&self) -> bool {
        self.visited.is_empty() && self.remaining.is_empty()
    }

    /// Returns the number of elements visited since the last [`init`] or
    /// [`reset`].
    ///
    /// The value is derived from the representation: it is the size of the
    /// visited half, so a wraparound step brings it back to 1.
    ///
    /// [`init`]: CircularCursor::init
    /// [`reset`]: CircularCursor::reset
    pub fn offset(&self) -> usize {
        self.visited.len()
    }

    /// Returns `true` once a forward traversal has reached the logical end,
    /// that is, nothing remains ahead of the cursor before wrapping.
    ///
    /// An empty cursor is always done.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_zipper::CircularCursor;
    ///
    /// let cursor = CircularCursor::init(1..=7).move_next_by(6);
    /// assert!(!cursor.is_done());
    ///
    /// let cursor = cursor.move_next();
    /// assert!(cursor.is_done());
    /// assert_eq!(cursor.current(), Some(&1));
    /// ```
    pub fn is_done(&self) -> bool {
        self.remaining.is_empty()
    }

    /// Returns a reference to the element `offset` steps away from the cursor,
    /// wrapping around both ends, or `None` if the sequence is empty.
    ///
    /// `cursor.value(k)` always equals `cursor.move_next_by(k).current()`.
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_zipper::CircularCursor;
    ///
    /// let cursor = CircularCursor::init(1..=7);
    /// assert_eq!(cursor.value(1), Some(&2));
    /// assert_eq!(cursor.value(-2), Some(&6));
    /// assert_eq!(cursor.value(7), Some(&1));
    /// assert_eq!(cursor.value(10), Some(&4));
    /// assert_eq!(cursor.value(-10), Some(&5));
    /// ```
    pub fn value(&self, offset: isize) -> Option<&T> {
        match self.resolve(offset)? {
            Position::Visited(index) => self.visited.get(index),
            Position::Remaining(index) => self.remaining.get(index),
        }
    }

    /// Returns a mutable reference to the element `offset` steps away from the
    /// cursor, with the same wrapping rules as [`value`].
    ///
    /// [`value`]: CircularCursor::value
    pub fn value_mut(&mut self, offset: isize) -> Option<&mut T> {
        match self.resolve(offset)? {
            Position::Visited(index) => self.visited.get_mut(index),
            Position::Remaining(index) => self.remaining.get_mut(index),
        }
    }

    /// Returns a reference to the element at the cursor.
    pub fn current(&self) -> Option<&T> {
        self.value(0)
    }

    /// Returns a mutable reference to the element at the cursor.
    pub fn current_mut(&mut self) -> Option<&mut T> {
        self.value_mut(0)
    }

    /// Move the cursor one step forward. Stepping past the logical end wraps
    /// to the start: the whole visited half becomes the new remaining half,
    /// and its first element is stepped over.
    ///
    /// An empty cursor is returned unchanged.
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_zipper::CircularCursor;
    ///
    /// let cursor = CircularCursor::init([1, 2, 3]).move_next();
    /// assert_eq!(cursor.current(), Some(&2));
    /// assert_eq!(cursor.offset(), 1);
    ///
    /// // [1, 2, 3|] -> [1|2, 3]
    /// let cursor = cursor.move_next().move_next().move_next();
    /// assert_eq!(cursor.current(), Some(&2));
    /// assert_eq!(cursor.offset(), 1);
    /// ```
    #[must_use]
    pub fn move_next(mut self) -> Self {
        if self.remaining.is_empty() {
            std::mem::swap(&mut self.visited, &mut self.remaining);
        }
        if let Some(elem) = self.remaining.pop_front() {
            self.visited.push_back(elem);
        }
        self
    }

    /// Move the cursor one step backward. Stepping before the logical start
    /// wraps to the end: the whole remaining half becomes the new visited
    /// half, and its last element becomes the cursor.
    ///
    /// An empty cursor is returned unchanged.
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_zipper::CircularCursor;
    ///
    /// let cursor = CircularCursor::init([1, 2, 3]).move_prev();
    /// assert_eq!(cursor.current(), Some(&3));
    /// assert_eq!(cursor.offset(), 2);
    /// ```
    #[must_use]
    pub fn move_prev(mut self) -> Self {
        if self.visited.is_empty() {
            std::mem::swap(&mut self.visited, &mut self.remaining);
        }
        if let Some(elem) = self.visited.pop_back() {
            self.remaining.push_front(elem);
        }
        self
    }

    /// Move the cursor `steps` steps forward.
    ///
    /// The result is the state `steps` calls of [`move_next`] would produce,
    /// computed modulo the length, so this operation should compute in
    /// *O*(min(`steps`, *n*)) time.
    ///
    /// [`move_next`]: CircularCursor::move_next
    #[must_use]
    pub fn seek_forward(self, steps: usize) -> Self {
        let len = self.len();
        if len == 0 || steps == 0 {
            return self;
        }
        let offset = self.offset();
        let target = if steps <= len - offset {
            offset + steps
        } else {
            // past the end the offsets cycle through `1..=len`
            ((offset + len - 1) % len + steps % len) % len + 1
        };
        self.settle_at(target)
    }

    /// Move the cursor `steps` steps backward.
    ///
    /// The result is the state `steps` calls of [`move_prev`] would produce,
    /// computed modulo the length, so this operation should compute in
    /// *O*(min(`steps`, *n*)) time.
    ///
    /// [`move_prev`]: CircularCursor::move_prev
    #[must_use]
    pub fn seek_backward(self, steps: usize) -> Self {
        let len = self.len();
        if len == 0 || steps == 0 {
            return self;
        }
        let offset = self.offset();
        let target = if steps <= offset {
            offset - steps
        } else {
            // before the start the offsets cycle through `0..len`
            (offset % len + len - steps % len) % len
        };
        self.settle_at(target)
    }

    /// Move the cursor `steps` steps forward, or backward if `steps` is
    /// negative.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_zipper::CircularCursor;
    ///
    /// let cursor = CircularCursor::init(1..=7);
    /// assert_eq!(cursor.clone().move_next_by(3).current(), Some(&4));
    /// assert_eq!(cursor.clone().move_next_by(-3).current(), Some(&5));
    /// assert_eq!(cursor.move_next_by(7).current(), Some(&1));
    /// ```
    #[must_use]
    pub fn move_next_by(self, steps: isize) -> Self {
        if steps < 0 {
            self.seek_backward(steps.unsigned_abs())
        } else {
            self.seek_forward(steps as usize)
        }
    }

    /// Move the cursor `steps` steps backward, or forward if `steps` is
    /// negative.
    #[must_use]
    pub fn move_prev_by(self, steps: isize) -> Self {
        if steps < 0 {
            self.seek_forward(steps.unsigned_abs())
        } else {
            self.seek_backward(steps as usize)
        }
    }

    /// Rebuild the cursor from its canonical order, as [`init`] would: the
    /// cursor goes back to the logical start and [`offset`] becomes 0.
    ///
    /// This is a full reconstruction rather than a pointer reset: it moves
    /// every remaining element and computes in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_zipper::CircularCursor;
    ///
    /// let cursor = CircularCursor::init(1..=5).move_next_by(3).reset();
    /// assert_eq!(cursor.current(), Some(&1));
    /// assert_eq!(cursor.offset(), 0);
    /// ```
    ///
    /// [`init`]: CircularCursor::init
    /// [`offset`]: CircularCursor::offset
    #[must_use]
    pub fn reset(self) -> Self {
        Self::init(self)
    }

    /// Make the cursor element the new logical start, keeping the cursor where
    /// it is. [`offset`] becomes 0 and `value(k)` is unchanged for every `k`.
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_zipper::CircularCursor;
    ///
    /// let cursor = CircularCursor::init(1..=5).move_next_by(3).rebase();
    /// assert_eq!(cursor.current(), Some(&4));
    /// assert_eq!(cursor.offset(), 0);
    /// assert_eq!(cursor.into_vec(), vec![4, 5, 1, 2, 3]);
    /// ```
    ///
    /// [`offset`]: CircularCursor::offset
    #[must_use]
    pub fn rebase(mut self) -> Self {
        if self.remaining.is_empty() {
            // the cursor is already at the logical start
            std::mem::swap(&mut self.visited, &mut self.remaining);
        } else {
            let mut visited = std::mem::take(&mut self.visited);
            self.remaining.append(&mut visited);
        }
        self
    }

    /// Returns the elements in canonical forward order, independent of the
    /// cursor position.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_zipper::CircularCursor;
    ///
    /// let cursor = CircularCursor::init(1..=5).move_prev_by(2);
    /// assert_eq!(cursor.to_list(), vec![1, 2, 3, 4, 5]);
    /// ```
    pub fn to_list(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Consumes the cursor and returns the elements in canonical forward order.
    pub fn into_vec(self) -> Vec<T> {
        self.into_iter().collect()
    }
}

impl<T> From<Vec<T>> for CircularCursor<T> {
    fn from(items: Vec<T>) -> Self {
        Self {
            visited: VecDeque::new(),
            remaining: VecDeque::from(items),
        }
    }
}
