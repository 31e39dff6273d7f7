use std::ops::Range;

use regex::Captures;

/// A read-only view of a single match, handed to a [`Resolver`] for every
/// match found during a replacement.
///
/// Group text and offsets are read lazily from the engine's captures for the
/// match. The context borrows those captures, so it cannot be kept around
/// once the resolver returns and the replacement moves on to the next match.
///
/// All offsets are byte offsets into the input string, so
/// `&input[ctx.start()..ctx.end()] == ctx.full_match()`.
///
/// [`Resolver`]: crate::Resolver
#[derive(Debug, Clone, Copy)]
pub struct MatchContext<'c> {
	captures: &'c Captures<'c>,
	match_index: usize,
	group_count: usize,
}

impl<'c> MatchContext<'c> {
	pub(crate) fn new(captures: &'c Captures<'c>, match_index: usize, group_count: usize) -> Self {
		Self {
			captures,
			match_index,
			group_count,
		}
	}

	/// Zero-based position of this match within the current replacement.
	pub fn match_index(&self) -> usize {
		self.match_index
	}

	/// Number of capturing groups in the pattern, not counting the implicit
	/// whole-match group.
	pub fn group_count(&self) -> usize {
		self.group_count
	}

	/// Text captured by group `n`, counting from `1`.
	///
	/// Returns `None` when `n` is `0`, when `n` is greater than
	/// [`group_count`](Self::group_count), or when the group did not take part
	/// in this match. Use [`full_match`](Self::full_match) for the whole match.
	pub fn group(&self, n: usize) -> Option<&'c str> {
		if n < 1 || n > self.group_count {
			return None;
		}

		self.captures.get(n).map(|m| m.as_str())
	}

	/// Text captured by the named group `name`, if it exists and took part in
	/// this match.
	pub fn named_group(&self, name: &str) -> Option<&'c str> {
		self.captures.name(name).map(|m| m.as_str())
	}

	/// The entire matched text.
	pub fn full_match(&self) -> &'c str {
		self.captures.get(0).map_or("", |m| m.as_str())
	}

	/// Inclusive start offset of the match.
	pub fn start(&self) -> usize {
		self.captures.get(0).map_or(0, |m| m.start())
	}

	/// Exclusive end offset of the match.
	pub fn end(&self) -> usize {
		self.captures.get(0).map_or(0, |m| m.end())
	}

	pub fn range(&self) -> Range<usize> {
		self.start()..self.end()
	}

	/// Whether the match has zero length.
	pub fn is_empty(&self) -> bool {
		self.start() == self.end()
	}
}
