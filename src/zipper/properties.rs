use quickcheck::TestResult;
use quickcheck_macros::quickcheck;

use crate::CircularCursor;

fn walk(cursor: CircularCursor<i32>, steps: i16) -> CircularCursor<i32> {
    let mut cursor = cursor;
    for _ in 0..steps.unsigned_abs() {
        cursor = if steps < 0 {
            cursor.move_prev()
        } else {
            cursor.move_next()
        };
    }
    cursor
}

#[quickcheck]
fn step_symmetry(seed: Vec<i32>, start: i16, travel: i16) -> bool {
    let (start, travel) = (start as isize, travel as isize);
    let cursor = CircularCursor::init(seed);
    let stepped = cursor.clone().move_next_by(start).move_next_by(travel);
    let summed = cursor.clone().move_next_by(start + travel);
    stepped.current() == summed.current()
        && summed.move_prev_by(travel).current() == cursor.move_next_by(start).current()
}

#[quickcheck]
fn step_symmetry_reverse(seed: Vec<i32>, start: i16, travel: i16) -> bool {
    let (start, travel) = (start as isize, travel as isize);
    let cursor = CircularCursor::init(seed);
    let stepped = cursor.clone().move_prev_by(start).move_prev_by(travel);
    let summed = cursor.clone().move_prev_by(start + travel);
    stepped.current() == summed.current()
        && summed.move_next_by(travel).current() == cursor.move_prev_by(start).current()
}

#[quickcheck]
fn step_round_trip(seed: Vec<i32>, start: i32, travel: isize) -> bool {
    let cursor = CircularCursor::init(seed).move_next_by(start as isize);
    let there = cursor.clone().move_prev_by(travel);
    there.clone().move_next_by(travel) == cursor
        && there.move_next_by(travel).to_list() == cursor.to_list()
}

#[quickcheck]
fn seek_matches_single_steps(seed: Vec<i32>, start: i16, travel: i16) -> bool {
    let cursor = CircularCursor::init(seed).move_next_by(start as isize);
    let fast = cursor.clone().move_next_by(travel as isize);
    let slow = walk(cursor, travel);
    fast.offset() == slow.offset() && fast.is_done() == slow.is_done() && fast == slow
}

#[quickcheck]
fn insert_growth(seed: Vec<i32>, edits: Vec<(i16, i32)>) -> bool {
    let expected = seed.len() + edits.len();
    let mut cursor = CircularCursor::init(seed);
    for (steps, item) in edits {
        cursor = cursor.move_next_by(steps as isize);
        let (current, offset) = (cursor.current().copied(), cursor.offset());
        cursor = cursor.insert(item);
        if cursor.offset() != offset + 1 {
            return false;
        }
        // an empty cursor ends up on the inserted element
        let expected_current = current.or(Some(item));
        if cursor.current().copied() != expected_current {
            return false;
        }
    }
    cursor.len() == expected
}

#[quickcheck]
fn remove_shrink(seed: Vec<i32>, steps: Vec<i16>) -> bool {
    let expected = seed.len().saturating_sub(steps.len());
    let mut cursor = CircularCursor::init(seed);
    for step in steps {
        cursor = cursor.move_next_by(step as isize).remove();
    }
    cursor.len() == expected
}

#[quickcheck]
fn lookup_step_equivalence(seed: Vec<i32>, start: i32, travel: isize) -> bool {
    let cursor = CircularCursor::init(seed).move_next_by(start as isize);
    cursor.value(travel) == cursor.clone().move_next_by(travel).current()
}

#[quickcheck]
fn to_list_ignores_position(seed: Vec<i32>, travels: Vec<isize>) -> bool {
    let mut cursor = CircularCursor::init(seed.clone());
    for travel in travels {
        cursor = cursor.move_next_by(travel);
        if cursor.to_list() != seed {
            return false;
        }
    }
    true
}

#[quickcheck]
fn replace_keeps_shape(seed: Vec<i32>, start: i32, items: Vec<i32>) -> TestResult {
    if seed.is_empty() || items.is_empty() {
        return TestResult::discard();
    }
    let cursor = CircularCursor::init(seed).move_next_by(start as isize);
    let (len, offset) = (cursor.len(), cursor.offset());
    let last = items[items.len() - 1];
    let replaced = items.into_iter().fold(cursor, CircularCursor::replace);
    TestResult::from_bool(
        replaced.len() == len
            && replaced.offset() == offset
            && replaced.current() == Some(&last),
    )
}

#[quickcheck]
fn rebase_keeps_ring(seed: Vec<i32>, start: i32) -> bool {
    let cursor = CircularCursor::init(seed).move_next_by(start as isize);
    let rebased = cursor.clone().rebase();
    let lap: Vec<i32> = cursor.around().copied().collect();
    rebased.offset() == 0 && rebased == cursor && rebased.to_list() == lap
}
