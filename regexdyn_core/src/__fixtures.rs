use crate::MatchContext;

pub const PERSONS_INPUT: &str =
	"There are 4 persons in the room, each having 20 dollars in their pocket.";
pub const PERSONS_TRIPLED: &str =
	"There are 12 persons in the room, each having 60 dollars in their pocket.";

pub const CONCERT_INPUT: &str = "Everybody at the concert got excited when she entered the \
                                 stage. Her performance of all 13 songs was awesome.";
pub const CONCERT_UPPERCASE: &str = "EVERYBODY AT THE CONCERT GOT EXCITED WHEN SHE ENTERED THE \
                                     STAGE. HER PERFORMANCE OF ALL 13 SONGS WAS AWESOME.";

pub const THREE_LINES: &str =
	"This is the first line.\r\nThis is the second line.\r\nAnd this is the third line.";
pub const THREE_LINES_FIRST_UPPERCASE: &str =
	"THIS IS THE FIRST LINE.\r\nThis is the second line.\r\nAnd this is the third line.";
pub const THREE_LINES_UPPERCASE: &str =
	"THIS IS THE FIRST LINE.\r\nTHIS IS THE SECOND LINE.\r\nAND THIS IS THE THIRD LINE.";

/// A snapshot of everything a resolver can observe about one match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeenMatch {
	pub index: usize,
	pub group_count: usize,
	pub full: String,
	pub groups: Vec<Option<String>>,
	pub start: usize,
	pub end: usize,
}

impl SeenMatch {
	pub fn capture(ctx: &MatchContext<'_>) -> Self {
		Self {
			index: ctx.match_index(),
			group_count: ctx.group_count(),
			full: ctx.full_match().to_string(),
			groups: (1..=ctx.group_count())
				.map(|n| ctx.group(n).map(ToString::to_string))
				.collect(),
			start: ctx.start(),
			end: ctx.end(),
		}
	}
}

/// A resolver that records every match it sees and keeps the original text.
pub fn recording_resolver(
	seen: &mut Vec<SeenMatch>,
) -> impl FnMut(&MatchContext<'_>) -> Option<String> + '_ {
	move |ctx: &MatchContext<'_>| {
		seen.push(SeenMatch::capture(ctx));
		None
	}
}
