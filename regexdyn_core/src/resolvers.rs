//! Ready-made [`Resolver`] implementations.

use crate::MatchContext;
use crate::Resolver;

/// Returns every match unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityResolver;

impl Resolver for IdentityResolver {
	fn resolve(&mut self, ctx: &MatchContext<'_>) -> Option<String> {
		Some(ctx.full_match().to_string())
	}
}

/// Treats each match as a decimal integer and multiplies it by `factor`.
///
/// Matches that are not integers, or whose product overflows `i64`, are kept
/// unchanged.
#[derive(Debug, Clone, Copy)]
pub struct MultiplyResolver {
	pub factor: i64,
}

impl MultiplyResolver {
	pub fn new(factor: i64) -> Self {
		Self { factor }
	}
}

impl Default for MultiplyResolver {
	fn default() -> Self {
		Self::new(1)
	}
}

impl Resolver for MultiplyResolver {
	fn resolve(&mut self, ctx: &MatchContext<'_>) -> Option<String> {
		let value: i64 = ctx.full_match().parse().ok()?;
		value.checked_mul(self.factor).map(|product| product.to_string())
	}
}

/// Uppercases every match using the full Unicode case mapping, so `ß`
/// becomes `SS`.
#[derive(Debug, Clone, Copy, Default)]
pub struct UppercaseResolver;

impl Resolver for UppercaseResolver {
	fn resolve(&mut self, ctx: &MatchContext<'_>) -> Option<String> {
		Some(ctx.full_match().to_uppercase())
	}
}
