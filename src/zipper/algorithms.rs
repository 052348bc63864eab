use crate::zipper::CircularCursor;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Compare cursors by the ring they see.
///
/// Two cursors are equal when one lap starting at each cursor yields equal
/// elements. Where the logical start lies, and how many elements have been
/// visited since, does not take part in the comparison.
///
/// # Examples
/// ```
/// use cyclic_zipper::CircularCursor;
///
/// let cursor = CircularCursor::init([1, 2, 3]);
/// // wrapping backward then forward lands on the same element
/// let moved = cursor.clone().move_prev().move_next();
/// assert_eq!(moved.offset(), 3);
/// assert_eq!(cursor, moved);
///
/// // the same ring seen from another element
/// assert_ne!(cursor, cursor.clone().move_next());
/// // a rotated ring seen from the same element
/// assert_eq!(cursor.clone().move_next(), CircularCursor::init([2, 3, 1]));
/// ```
impl<T: PartialEq> PartialEq for CircularCursor<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.around().eq(other.around())
    }
}

impl<T: Eq> Eq for CircularCursor<T> {}

impl<T: Hash> Hash for CircularCursor<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for elt in self.around() {
            elt.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for CircularCursor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CircularCursor")
            .field("visited", &self.visited)
            .field("current", &self.current())
            .field("ahead", &self.remaining.iter().skip(1).collect::<Vec<_>>())
            .finish()
    }
}

impl<T> CircularCursor<T> {
    /// Returns `true` if the sequence contains an element equal to the given
    /// value.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_zipper::CircularCursor;
    ///
    /// let cursor = CircularCursor::init([0, 1, 2]).move_next_by(2);
    /// assert!(cursor.contains(&0));
    /// assert!(!cursor.contains(&10));
    /// ```
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq<T>,
    {
        self.iter().any(|e| e == x)
    }
}

#[cfg(test)]
mod tests {
    use crate::CircularCursor;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn cursor_eq() {
        let cursor = CircularCursor::init(1..=7);
        for steps in -9..9 {
            let moved = cursor.clone().move_prev_by(steps).move_next_by(steps);
            assert_eq!(moved, cursor);
            assert_eq!(hash_of(&moved), hash_of(&cursor));
        }
        assert_eq!(cursor.clone().move_next_by(7), cursor);
        assert_ne!(cursor.clone().move_next(), cursor);
        assert_ne!(cursor.clone().remove(), cursor);
        assert_ne!(CircularCursor::init(1..=6), cursor);
        assert_eq!(CircularCursor::<i32>::new(), CircularCursor::default());
    }

    #[test]
    fn cursor_eq_rotation() {
        let cursor = CircularCursor::init(['a', 'b', 'c', 'd']).move_next_by(2);
        let rotated = CircularCursor::init(['c', 'd', 'a', 'b']);
        assert_eq!(cursor, rotated);
        assert_eq!(hash_of(&cursor), hash_of(&rotated));
        assert_ne!(cursor.to_list(), rotated.to_list());
    }

    #[test]
    fn cursor_debug() {
        let cursor = CircularCursor::init([1, 2, 3]).move_next();
        assert_eq!(
            format!("{:?}", cursor),
            "CircularCursor { visited: [1], current: Some(2), ahead: [3] }"
        );
        let cursor = CircularCursor::<i32>::new();
        assert_eq!(
            format!("{:?}", cursor),
            "CircularCursor { visited: [], current: None, ahead: [] }"
        );
    }

    #[test]
    fn cursor_contains() {
        let cursor = CircularCursor::init(0..4).move_next_by(4);
        assert!(cursor.contains(&0));
        assert!(cursor.contains(&3));
        assert!(!cursor.contains(&4));
        assert!(!CircularCursor::new().contains(&0));
    }
}
