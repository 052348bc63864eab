//! This crate provides a circular sequence with a movable cursor, implemented
//! as a zipper over two double-ended queues.
//!
//! The [`CircularCursor`] steps forward and backward in constant time, wrapping
//! around both ends, looks up elements at any offset relative to the cursor, and
//! inserts, replaces or removes the element at the cursor without disturbing the
//! order of the others.
//!
//! Here is a quick example showing how the cursor works.
//!
//! ```
//! use cyclic_zipper::CircularCursor;
//!
//! let cursor = CircularCursor::init(1..=7);
//! assert_eq!(cursor.current(), Some(&1));
//! assert_eq!(cursor.value(-2), Some(&6)); // looking behind wraps to the end
//!
//! let cursor = cursor.move_next_by(3).remove(); // move to `4`, and remove it
//! assert_eq!(cursor.current(), Some(&5));
//! assert_eq!(cursor.to_list(), vec![1, 2, 3, 5, 6, 7]);
//!
//! let cursor = cursor.insert(0); // insert before the cursor
//! assert_eq!(cursor.current(), Some(&5));
//! assert_eq!(cursor.to_list(), vec![1, 2, 3, 0, 5, 6, 7]);
//! ```
//!
//! # Memory Layout
//!
//! The sequence is split at the cursor into two halves:
//! ```text
//!                 visited                          remaining
//!    ┌─────┬─────┬─────┬─────┐           ┌─────┬─────┬─────┐
//!    │  1  │  2  │  3  │  4  │           │  5  │  6  │  7  │
//!    └─────┴─────┴─────┴─────┘           └─────┴─────┴─────┘
//!   logical          nearest ↑           ↑ cursor      logical
//!    start           visited                            end
//! ```
//! Both halves are kept in forward order, so the canonical order of the whole
//! sequence is `visited` followed by `remaining`, and the neighbours of the
//! cursor are the back of `visited` and the second element of `remaining`.
//!
//! Stepping forward past the logical end leaves `remaining` empty; the cursor
//! then conceptually points at the logical start, and the next step moves the
//! whole of `visited` over to `remaining` (a wraparound). Stepping backward
//! before the logical start does the mirror image.
//!
//! [`offset`] counts the elements in `visited`, i.e. the forward steps taken
//! since the last [`init`] or [`reset`], and [`is_done`] tells when a single
//! forward sweep has reached the logical end.
//!
//! # Value Semantics
//!
//! Stepping and editing operations consume the cursor and return the new
//! state, so they chain naturally and an old state is kept by cloning it
//! first. Every operation is total: stepping or editing an empty cursor
//! returns it unchanged, looking up an empty cursor gives `None`, and offsets
//! or step counts of any magnitude wrap around.
//!
//! # Iteration
//!
//! [`iter`] and `into_iter` visit the elements in canonical order, [`around`]
//! visits one lap starting at the cursor, and [`sweep`] consumes the cursor
//! and yields the elements from the cursor up to the logical end.
//!
//! ```
//! use cyclic_zipper::CircularCursor;
//!
//! let cursor = CircularCursor::init(['a', 'b', 'c']).move_prev();
//! assert_eq!(cursor.iter().collect::<String>(), "abc");
//! assert_eq!(cursor.around().collect::<String>(), "cab");
//! assert_eq!(cursor.sweep().collect::<String>(), "c");
//! ```
//!
//! # Features
//!
//! - `serde`: implements `Serialize` and `Deserialize` for [`CircularCursor`].
//!
//! [`CircularCursor`]: crate::CircularCursor
//! [`offset`]: crate::CircularCursor::offset
//! [`init`]: crate::CircularCursor::init
//! [`reset`]: crate::CircularCursor::reset
//! [`is_done`]: crate::CircularCursor::is_done
//! [`iter`]: crate::CircularCursor::iter
//! [`around`]: crate::CircularCursor::around
//! [`sweep`]: crate::CircularCursor::sweep

#[doc(inline)]
pub use zipper::iterator::{Around, IntoIter, Iter, Sweep};
#[doc(inline)]
pub use zipper::CircularCursor;

pub mod zipper;
