//! `regexdyn_core` replaces regular expression matches with text computed by
//! a callback. Instead of a static replacement template, every match is
//! handed to a [`Resolver`] that decides what the match becomes.
//!
//! ## Replacement Loop
//!
//! ```text
//! input + pattern + flags
//!   → RegexBuilder (compiles the pattern with the configured flags)
//!   → captures_iter (finds each non-overlapping match in order)
//!   → MatchContext (read-only view of one match: index, groups, span)
//!   → Resolver (returns replacement text, or None to keep the match)
//!   → output (unmatched text copied verbatim, tail appended at the end)
//! ```
//!
//! ## Modules
//!
//! - [`config`] — [`ReplaceOptions`] and [`NoMatchPolicy`], loadable from TOML.
//! - [`resolvers`] — Identity, integer multiplication and uppercase
//!   resolvers.
//!
//! ## Key Types
//!
//! - [`DynamicReplacer`] — A pattern, its options and a resolver, reusable
//!   across inputs.
//! - [`MatchContext`] — The per-match view given to a resolver.
//! - [`RegexFlags`] — Engine flags such as case-insensitive or multi-line.
//! - [`ReplaceError`] — Why a replacement failed, grouped by [`FailureKind`].
//!
//! ## Failure Signalling
//!
//! The `replace_all*` functions return `None` when anything goes wrong: an
//! empty input or pattern, a pattern that does not compile, a panicking
//! resolver, or no match under [`NoMatchPolicy::Fail`]. [`try_replace_all`]
//! and [`DynamicReplacer::try_replace`] return the [`ReplaceError`] instead.
//!
//! ## Quick Start
//!
//! ```rust
//! use regexdyn_core::MatchContext;
//! use regexdyn_core::replace_all;
//! use regexdyn_core::resolvers::MultiplyResolver;
//!
//! let tripled = replace_all("4 persons, 20 dollars", r"(\d+)", MultiplyResolver::new(3));
//! assert_eq!(tripled.as_deref(), Some("12 persons, 60 dollars"));
//!
//! // `None` keeps a match, an empty string deletes it.
//! let result = replace_all("a-b-c", "[a-c]", |ctx: &MatchContext<'_>| {
//! 	match ctx.full_match() {
//! 		"a" => None,
//! 		"b" => Some(String::new()),
//! 		other => Some(other.to_uppercase()),
//! 	}
//! });
//! assert_eq!(result.as_deref(), Some("a--C"));
//! ```

pub use config::*;
pub use context::*;
pub use error::*;
pub use flags::*;
pub use replacer::*;

pub mod config;
mod context;
#[allow(unused_assignments)]
mod error;
mod flags;
mod replacer;
pub mod resolvers;

#[cfg(test)]
mod __fixtures;
