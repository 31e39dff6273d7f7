use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum ReplaceError {
	#[error("input string is empty")]
	#[diagnostic(
		code(regexdyn::empty_input),
		help("pass a non-empty string to search for matches")
	)]
	EmptyInput,

	#[error("pattern is missing or empty")]
	#[diagnostic(
		code(regexdyn::empty_pattern),
		help("provide a regular expression with at least one character")
	)]
	EmptyPattern,

	#[error("no resolver was configured for the replacement")]
	#[diagnostic(
		code(regexdyn::missing_resolver),
		help("call `with_resolver` before running the replacement")
	)]
	MissingResolver,

	#[error("failed to compile pattern: {0}")]
	#[diagnostic(code(regexdyn::compile))]
	Compile(#[from] regex::Error),

	#[error("pattern did not match the input")]
	#[diagnostic(
		code(regexdyn::no_match),
		help("use `NoMatchPolicy::Original` to return the input unchanged instead")
	)]
	NoMatch,

	#[error("resolver panicked while handling match {index}: {message}")]
	#[diagnostic(code(regexdyn::resolver_panicked))]
	ResolverPanicked { index: usize, message: String },

	#[error("unknown regex flag: `{0}`")]
	#[diagnostic(
		code(regexdyn::invalid_flag),
		help("supported flags: i, m, s, U, x, R")
	)]
	InvalidFlag(char),

	#[error("failed to parse replace options: {0}")]
	#[diagnostic(
		code(regexdyn::config_parse),
		help("expected TOML with optional `flags`, `no_match` and `size_limit` keys")
	)]
	ConfigParse(String),

	#[error(transparent)]
	#[diagnostic(code(regexdyn::io_error))]
	Io(#[from] std::io::Error),
}

/// The broad category a [`ReplaceError`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
	/// A precondition on the arguments was violated before the engine ran.
	InvalidArgument,
	/// The pattern could not be compiled.
	Compile,
	/// The replacement failed while iterating matches.
	Engine,
	/// Nothing matched and the policy asked for a failure.
	NoMatch,
	/// Options could not be loaded or parsed.
	Config,
}

impl ReplaceError {
	pub fn kind(&self) -> FailureKind {
		match self {
			Self::EmptyInput | Self::EmptyPattern | Self::MissingResolver => {
				FailureKind::InvalidArgument
			}
			Self::Compile(_) => FailureKind::Compile,
			Self::ResolverPanicked { .. } => FailureKind::Engine,
			Self::NoMatch => FailureKind::NoMatch,
			Self::InvalidFlag(_) | Self::ConfigParse(_) | Self::Io(_) => FailureKind::Config,
		}
	}
}

pub type ReplaceResult<T> = Result<T, ReplaceError>;
