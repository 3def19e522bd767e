//! Path level helpers.
//!
//! Positive `hops` count separators from the start of the path, negative
//! `hops` count them from the end. When the path runs out of separators the
//! result is the empty string. A separator at the very first byte does not
//! count as one.

use crate::path::codec::SEPARATOR;

fn find_separator(path: &str, from_end: bool) -> Option<usize> {
	let found = if from_end {
		path.rfind(SEPARATOR)
	} else {
		path.find(SEPARATOR)
	};
	found.filter(|&idx| idx > 0)
}

/// Drop `hops` segments from the start (`hops > 0`) or the end (`hops < 0`).
///
/// `path_slice("a.b.c", 1) == "b.c"`, `path_slice("a.b.c", -1) == "a.b"`.
pub fn path_slice(path: &str, hops: i32) -> &str {
	let mut rest = path;
	let mut hops = hops;
	while hops != 0 {
		let from_end = hops < 0;
		let Some(idx) = find_separator(rest, from_end) else {
			return "";
		};
		if from_end {
			rest = &rest[..idx];
			hops += 1;
		} else {
			rest = &rest[idx + 1..];
			hops -= 1;
		}
	}
	rest
}

/// The segment reached after `hops` separators.
///
/// From the start the segment must be followed by a separator, so
/// `path_segment("a.b.c", 2) == "b"` while `path_segment("a.b.c", 3) == ""`.
/// From the end it must be preceded by one: `path_segment("a.b.c", -1) == "c"`.
pub fn path_segment(path: &str, hops: i32) -> &str {
	let mut rest = path;
	let mut segment = path;
	let mut hops = hops;
	while hops != 0 {
		let from_end = hops < 0;
		let Some(idx) = find_separator(rest, from_end) else {
			return "";
		};
		if from_end {
			segment = &rest[idx + 1..];
			rest = &rest[..idx];
			hops += 1;
		} else {
			segment = &rest[..idx];
			rest = &rest[idx + 1..];
			hops -= 1;
		}
	}
	segment
}

/// The path one level up, or `""` for a top-level key.
pub fn parent_path(path: &str) -> &str {
	path_slice(path, -1)
}
