//! Position arithmetic for the implicit binary tree.
//!
//! Positions are 1-based: the root lives at position 1 and position 0 of the
//! backing buffer is never occupied, which keeps the parent/child relations
//! free of offsets.

/// Position of the root element.
pub const ROOT: usize = 1;

// Parent of `pos`, or `None` for the root (and the unused slot 0).
#[inline]
pub fn parent(pos: usize) -> Option<usize> {
    if pos <= ROOT { None } else { Some(pos / 2) }
}

// Left child of `pos`. May lie beyond the live region; callers compare against `n`.
#[inline]
pub fn left_child(pos: usize) -> usize {
    2 * pos
}

// Right child of `pos`.
#[inline]
pub fn right_child(pos: usize) -> usize {
    2 * pos + 1
}
