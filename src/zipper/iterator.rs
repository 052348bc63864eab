use crate::zipper::CircularCursor;
use std::collections::vec_deque;
use std::fmt;
use std::iter::{Chain, FromIterator, FusedIterator};

/// An iterator over the elements of a `CircularCursor` in canonical forward
/// order, regardless of where the cursor is.
///
/// This `struct` is created by [`CircularCursor::iter`]. It is double-ended and
/// fused.
pub struct Iter<'a, T: 'a> {
    inner: Chain<vec_deque::Iter<'a, T>, vec_deque::Iter<'a, T>>,
    len: usize,
}

/// An owning iterator over the elements of a `CircularCursor` in canonical
/// forward order.
///
/// This `struct` is created by the `into_iter` method on `CircularCursor`
/// (provided by the `IntoIterator` trait).
pub struct IntoIter<T> {
    inner: Chain<vec_deque::IntoIter<T>, vec_deque::IntoIter<T>>,
    len: usize,
}

/// An iterator over exactly one lap of a `CircularCursor`, starting at the
/// cursor element and wrapping past the logical end.
///
/// This `struct` is created by [`CircularCursor::around`].
pub struct Around<'a, T: 'a> {
    cursor: &'a CircularCursor<T>,
    front: usize,
    back: usize,
}

/// A consuming iterator that steps a `CircularCursor` forward until it is
/// done, yielding each element it steps over.
///
/// This `struct` is created by [`CircularCursor::sweep`].
pub struct Sweep<T> {
    inner: vec_deque::IntoIter<T>,
}

impl<T> CircularCursor<T> {
    /// Provides a forward iterator in canonical order.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_zipper::CircularCursor;
    ///
    /// let cursor = CircularCursor::init([0, 1, 2]).move_next();
    /// let mut iter = cursor.iter();
    /// assert_eq!(iter.next(), Some(&0));
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), Some(&2));
    /// assert_eq!(iter.next(), None);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.visited.iter().chain(self.remaining.iter()),
            len: self.len(),
        }
    }

    /// Provides an iterator over one lap of the ring, starting at the cursor.
    /// It yields `value(0)`, `value(1)`, ..., `value(len - 1)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_zipper::CircularCursor;
    ///
    /// let cursor = CircularCursor::init([0, 1, 2, 3]).move_prev();
    /// let lap: Vec<_> = cursor.around().copied().collect();
    /// assert_eq!(lap, vec![3, 0, 1, 2]);
    /// ```
    pub fn around(&self) -> Around<'_, T> {
        Around {
            cursor: self,
            front: 0,
            back: self.len(),
        }
    }

    /// Converts the cursor into an iterator that steps forward, yielding the
    /// element under the cursor before each step, until the logical end is
    /// reached.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_zipper::CircularCursor;
    ///
    /// let cursor = CircularCursor::init(1..=5).move_next_by(2);
    /// let rest: Vec<_> = cursor.sweep().collect();
    /// assert_eq!(rest, vec![3, 4, 5]);
    /// ```
    pub fn sweep(self) -> Sweep<T> {
        Sweep {
            inner: self.remaining.into_iter(),
        }
    }
}

impl<'a, T: 'a> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.inner.next()?;
        self.len -= 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, T: 'a> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let item = self.inner.next_back()?;
        self.len -= 1;
        Some(item)
    }
}

impl<'a, T: 'a> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T: 'a> FusedIterator for Iter<'a, T> {}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.inner.next()?;
        self.len -= 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let item = self.inner.next_back()?;
        self.len -= 1;
        Some(item)
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<'a, T: 'a> Iterator for Around<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let item = self.cursor.value(self.front as isize);
        self.front += 1;
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back - self.front;
        (len, Some(len))
    }
}

impl<'a, T: 'a> DoubleEndedIterator for Around<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        self.cursor.value(self.back as isize)
    }
}

impl<'a, T: 'a> ExactSizeIterator for Around<'a, T> {}

impl<'a, T: 'a> FusedIterator for Around<'a, T> {}

impl<T> Iterator for Sweep<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for Sweep<T> {}

impl<T> FusedIterator for Sweep<T> {}

impl<T> IntoIterator for CircularCursor<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let len = self.len();
        IntoIter {
            inner: self.visited.into_iter().chain(self.remaining),
            len,
        }
    }
}

impl<'a, T> IntoIterator for &'a CircularCursor<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> FromIterator<T> for CircularCursor<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        CircularCursor::init(iter)
    }
}

/// Appends elements at the logical end, keeping the cursor element where it
/// is.
impl<T> Extend<T> for CircularCursor<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        if self.remaining.is_empty() && !self.visited.is_empty() {
            // past the logical end: the tail of `visited` is the logical end
            self.visited.extend(iter);
        } else {
            self.remaining.extend(iter);
        }
    }
}

impl<'a, T: 'a + Copy> Extend<&'a T> for CircularCursor<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied())
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            len: self.len,
        }
    }
}

impl<T> Clone for Around<'_, T> {
    fn clone(&self) -> Self {
        Self {
            cursor: self.cursor,
            front: self.front,
            back: self.back,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").field(&self.inner).finish()
    }
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.inner).finish()
    }
}

impl<T: fmt::Debug> fmt::Debug for Around<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<T: fmt::Debug> fmt::Debug for Sweep<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Sweep").field(&self.inner).finish()
    }
}
