use std::any::Any;
use std::fmt;
use std::panic;
use std::panic::AssertUnwindSafe;

use regex::Regex;
use regex::RegexBuilder;

use crate::MatchContext;
use crate::NoMatchPolicy;
use crate::RegexFlags;
use crate::ReplaceError;
use crate::ReplaceOptions;
use crate::ReplaceResult;

/// Computes the replacement text for a single match.
///
/// Returning `Some(text)` substitutes the match with `text`, which is always
/// inserted literally (`$1` and `\` have no special meaning). Returning
/// `Some(String::new())` deletes the match. Returning `None` keeps the
/// matched text unchanged.
///
/// Any `FnMut(&MatchContext<'_>) -> Option<String>` closure is a resolver.
pub trait Resolver {
	fn resolve(&mut self, ctx: &MatchContext<'_>) -> Option<String>;
}

impl<F> Resolver for F
where
	F: FnMut(&MatchContext<'_>) -> Option<String>,
{
	fn resolve(&mut self, ctx: &MatchContext<'_>) -> Option<String> {
		self(ctx)
	}
}

/// A reusable replacement: a pattern, its options and the resolver that
/// decides what each match becomes.
///
/// ```rust
/// use regexdyn_core::DynamicReplacer;
/// use regexdyn_core::MatchContext;
///
/// let mut replacer = DynamicReplacer::new(r"\d+")
/// 	.with_resolver(|ctx: &MatchContext<'_>| Some(format!("<{}>", ctx.match_index())));
///
/// assert_eq!(replacer.replace("a1 b22 c333").as_deref(), Some("a<0> b<1> c<2>"));
/// ```
pub struct DynamicReplacer<'r> {
	pattern: String,
	options: ReplaceOptions,
	resolver: Option<Box<dyn Resolver + 'r>>,
}

impl<'r> DynamicReplacer<'r> {
	pub fn new(pattern: impl Into<String>) -> Self {
		Self {
			pattern: pattern.into(),
			options: ReplaceOptions::default(),
			resolver: None,
		}
	}

	#[must_use]
	pub fn with_flags(mut self, flags: RegexFlags) -> Self {
		self.options.flags = flags;
		self
	}

	#[must_use]
	pub fn with_no_match(mut self, policy: NoMatchPolicy) -> Self {
		self.options.no_match = policy;
		self
	}

	#[must_use]
	pub fn with_size_limit(mut self, bytes: usize) -> Self {
		self.options.size_limit = Some(bytes);
		self
	}

	/// Replace all compile and policy options at once.
	#[must_use]
	pub fn with_options(mut self, options: &ReplaceOptions) -> Self {
		self.options = options.clone();
		self
	}

	#[must_use]
	pub fn with_resolver(mut self, resolver: impl Resolver + 'r) -> Self {
		self.resolver = Some(Box::new(resolver));
		self
	}

	pub fn pattern(&self) -> &str {
		&self.pattern
	}

	pub fn options(&self) -> &ReplaceOptions {
		&self.options
	}

	/// Run the replacement over `input`, reporting why it failed.
	pub fn try_replace(&mut self, input: &str) -> ReplaceResult<String> {
		validate_arguments(input, &self.pattern)?;
		let Some(resolver) = self.resolver.as_mut() else {
			return Err(ReplaceError::MissingResolver);
		};

		let regex = compile(&self.pattern, &self.options)?;
		replace_matches(&regex, input, resolver.as_mut(), self.options.no_match)
	}

	/// Run the replacement over `input`. Every failure collapses to `None`.
	pub fn replace(&mut self, input: &str) -> Option<String> {
		into_option(self.try_replace(input))
	}
}

impl fmt::Debug for DynamicReplacer<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("DynamicReplacer")
			.field("pattern", &self.pattern)
			.field("options", &self.options)
			.field("has_resolver", &self.resolver.is_some())
			.finish()
	}
}

/// Replace every match of `pattern` in `input` with the text chosen by
/// `resolver`, using no flags. Returns the input unchanged when nothing
/// matches and `None` on any failure.
pub fn replace_all(input: &str, pattern: &str, resolver: impl Resolver) -> Option<String> {
	replace_all_with(
		input,
		pattern,
		RegexFlags::empty(),
		resolver,
		NoMatchPolicy::default(),
	)
}

/// Like [`replace_all`], compiling `pattern` with `flags`.
pub fn replace_all_with_flags(
	input: &str,
	pattern: &str,
	flags: RegexFlags,
	resolver: impl Resolver,
) -> Option<String> {
	replace_all_with(input, pattern, flags, resolver, NoMatchPolicy::default())
}

/// Like [`replace_all`], with explicit flags and no-match policy.
pub fn replace_all_with(
	input: &str,
	pattern: &str,
	flags: RegexFlags,
	resolver: impl Resolver,
	policy: NoMatchPolicy,
) -> Option<String> {
	into_option(try_replace_all(input, pattern, flags, resolver, policy))
}

/// Replace every match of `pattern` in `input` with the text chosen by
/// `resolver`.
///
/// Fails without calling the engine when `input` or `pattern` is empty. Any
/// failure after that (compilation, a panicking resolver, or no match under
/// [`NoMatchPolicy::Fail`]) discards the partial output.
pub fn try_replace_all(
	input: &str,
	pattern: &str,
	flags: RegexFlags,
	mut resolver: impl Resolver,
	policy: NoMatchPolicy,
) -> ReplaceResult<String> {
	validate_arguments(input, pattern)?;
	let regex = compile(pattern, &ReplaceOptions::new(flags, policy))?;
	replace_matches(&regex, input, &mut resolver, policy)
}

fn validate_arguments(input: &str, pattern: &str) -> ReplaceResult<()> {
	if pattern.is_empty() {
		return Err(ReplaceError::EmptyPattern);
	}
	if input.is_empty() {
		return Err(ReplaceError::EmptyInput);
	}
	Ok(())
}

fn compile(pattern: &str, options: &ReplaceOptions) -> ReplaceResult<Regex> {
	let mut builder = RegexBuilder::new(pattern);
	options.flags.apply(&mut builder);
	if let Some(limit) = options.size_limit {
		builder.size_limit(limit);
	}

	Ok(builder.build()?)
}

/// The find, resolve and append loop. Text between matches, and the text of
/// every match the resolver declines, is copied through unchanged.
fn replace_matches<R>(
	regex: &Regex,
	input: &str,
	resolver: &mut R,
	policy: NoMatchPolicy,
) -> ReplaceResult<String>
where
	R: Resolver + ?Sized,
{
	let group_count = regex.captures_len().saturating_sub(1);
	let mut output = String::with_capacity(input.len());
	// End of the last substituted match. Declined matches do not move it, so
	// their text is copied along with the next prefix.
	let mut last_end = 0;
	let mut match_count = 0;
	let mut substituted = 0;

	for captures in regex.captures_iter(input) {
		let ctx = MatchContext::new(&captures, match_count, group_count);
		let replacement = resolve_guarded(resolver, &ctx)?;

		tracing::trace!(
			index = ctx.match_index(),
			start = ctx.start(),
			end = ctx.end(),
			replaced = replacement.is_some(),
			"resolved match"
		);

		if let Some(text) = replacement {
			output.push_str(&input[last_end..ctx.start()]);
			output.push_str(&text);
			last_end = ctx.end();
			substituted += 1;
		}
		match_count += 1;
	}

	if match_count == 0 {
		tracing::debug!(pattern = regex.as_str(), ?policy, "pattern did not match");
		return match policy {
			NoMatchPolicy::Original => Ok(input.to_string()),
			NoMatchPolicy::Fail => Err(ReplaceError::NoMatch),
		};
	}

	output.push_str(&input[last_end..]);
	tracing::debug!(
		pattern = regex.as_str(),
		matches = match_count,
		substituted,
		"replacement complete"
	);

	Ok(output)
}

fn resolve_guarded<R>(resolver: &mut R, ctx: &MatchContext<'_>) -> ReplaceResult<Option<String>>
where
	R: Resolver + ?Sized,
{
	panic::catch_unwind(AssertUnwindSafe(|| resolver.resolve(ctx))).map_err(|payload| {
		ReplaceError::ResolverPanicked {
			index: ctx.match_index(),
			message: panic_message(payload.as_ref()),
		}
	})
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
	if let Some(message) = payload.downcast_ref::<&str>() {
		(*message).to_string()
	} else if let Some(message) = payload.downcast_ref::<String>() {
		message.clone()
	} else {
		"unknown panic payload".to_string()
	}
}

fn into_option(result: ReplaceResult<String>) -> Option<String> {
	match result {
		Ok(output) => Some(output),
		Err(error) => {
			tracing::debug!(%error, kind = ?error.kind(), "replacement failed");
			None
		}
	}
}
