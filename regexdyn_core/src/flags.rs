use std::fmt;
use std::ops::BitAnd;
use std::ops::BitOr;
use std::ops::BitOrAssign;
use std::str::FromStr;

use regex::RegexBuilder;
use serde::Deserialize;

use crate::ReplaceError;
use crate::ReplaceResult;

/// Engine flags passed through to [`RegexBuilder`] when a pattern is
/// compiled.
///
/// Each flag corresponds to one of the `regex` crate's inline flags, so
/// `RegexFlags::CASE_INSENSITIVE | RegexFlags::MULTI_LINE` behaves exactly
/// like prefixing the pattern with `(?im)`.
///
/// ```rust
/// use regexdyn_core::RegexFlags;
///
/// let flags: RegexFlags = "is".parse().unwrap();
/// assert!(flags.contains(RegexFlags::CASE_INSENSITIVE));
/// assert!(flags.contains(RegexFlags::DOT_MATCHES_NEW_LINE));
/// assert_eq!(flags.to_string(), "is");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct RegexFlags(u32);

impl RegexFlags {
	/// `i`: letters match both upper and lower case.
	pub const CASE_INSENSITIVE: Self = Self(1);
	/// `m`: `^` and `$` match at the beginning and end of lines.
	pub const MULTI_LINE: Self = Self(1 << 1);
	/// `s`: `.` also matches `\n`.
	pub const DOT_MATCHES_NEW_LINE: Self = Self(1 << 2);
	/// `U`: swaps the meaning of `x*` and `x*?`.
	pub const SWAP_GREED: Self = Self(1 << 3);
	/// `x`: whitespace is ignored and `#` starts a comment.
	pub const IGNORE_WHITESPACE: Self = Self(1 << 4);
	/// `R`: `\r\n` is treated as a line terminator in multi-line mode and `.`
	/// excludes `\r`.
	pub const CRLF: Self = Self(1 << 5);

	const ALL: u32 = (1 << 6) - 1;

	/// Flags in the order they are rendered by [`fmt::Display`].
	const LETTERS: [(char, Self); 6] = [
		('i', Self::CASE_INSENSITIVE),
		('m', Self::MULTI_LINE),
		('s', Self::DOT_MATCHES_NEW_LINE),
		('U', Self::SWAP_GREED),
		('x', Self::IGNORE_WHITESPACE),
		('R', Self::CRLF),
	];

	pub const fn empty() -> Self {
		Self(0)
	}

	pub const fn bits(self) -> u32 {
		self.0
	}

	/// Build flags from raw bits, silently dropping unknown bits.
	pub const fn from_bits_truncate(bits: u32) -> Self {
		Self(bits & Self::ALL)
	}

	pub const fn is_empty(self) -> bool {
		self.0 == 0
	}

	pub const fn contains(self, other: Self) -> bool {
		self.0 & other.0 == other.0
	}

	pub fn insert(&mut self, other: Self) {
		self.0 |= other.0;
	}

	pub fn remove(&mut self, other: Self) {
		self.0 &= !other.0;
	}

	/// Parse inline flag letters such as `"im"` or `"sR"`. Letters may repeat.
	/// The empty string yields [`RegexFlags::empty`].
	pub fn from_letters(letters: &str) -> ReplaceResult<Self> {
		let mut flags = Self::empty();

		for letter in letters.chars() {
			let Some((_, flag)) = Self::LETTERS.iter().find(|(c, _)| *c == letter) else {
				return Err(ReplaceError::InvalidFlag(letter));
			};
			flags.insert(*flag);
		}

		Ok(flags)
	}

	/// Configure `builder` so that every flag is explicitly switched on or
	/// off.
	pub fn apply(self, builder: &mut RegexBuilder) {
		builder
			.case_insensitive(self.contains(Self::CASE_INSENSITIVE))
			.multi_line(self.contains(Self::MULTI_LINE))
			.dot_matches_new_line(self.contains(Self::DOT_MATCHES_NEW_LINE))
			.swap_greed(self.contains(Self::SWAP_GREED))
			.ignore_whitespace(self.contains(Self::IGNORE_WHITESPACE))
			.crlf(self.contains(Self::CRLF));
	}
}

impl BitOr for RegexFlags {
	type Output = Self;

	fn bitor(self, rhs: Self) -> Self {
		Self(self.0 | rhs.0)
	}
}

impl BitOrAssign for RegexFlags {
	fn bitor_assign(&mut self, rhs: Self) {
		self.0 |= rhs.0;
	}
}

impl BitAnd for RegexFlags {
	type Output = Self;

	fn bitand(self, rhs: Self) -> Self {
		Self(self.0 & rhs.0)
	}
}

impl fmt::Display for RegexFlags {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (letter, flag) in Self::LETTERS {
			if self.contains(flag) {
				write!(f, "{letter}")?;
			}
		}
		Ok(())
	}
}

impl FromStr for RegexFlags {
	type Err = ReplaceError;

	fn from_str(s: &str) -> ReplaceResult<Self> {
		Self::from_letters(s)
	}
}

impl TryFrom<String> for RegexFlags {
	type Error = ReplaceError;

	fn try_from(value: String) -> ReplaceResult<Self> {
		Self::from_letters(&value)
	}
}
