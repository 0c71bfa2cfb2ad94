//! Boolean-ring simplification of bitwise logic expressions.
//!
//! Given the root of a chain of bitwise AND/OR/XOR operations in some host IR, [`Simplifier`]
//! translates the expression into a polynomial over the boolean ring (see `anf-core`), lets ring
//! arithmetic cancel what it can, and maps the reduced polynomial back to an IR value when the
//! result is trivial: a constant or a single leaf. Everything the translation declines to
//! decompose (loads, calls, arguments, unsupported operators, constants other than 0/all-ones)
//! becomes an opaque leaf identified by IR value identity, so equal subexpressions share one
//! leaf bit and cancellations like `a ^ a -> 0` fall out of the algebra.
//!
//! Hosts plug in by implementing [`LogicHost`] for their value handles. The scan is bounded by
//! [`SimplifyConfig`] in both recursion depth and distinct leaf count; when a bound is hit the
//! driver reports "no change" and the host keeps its original IR.
//!
//! Module map (data flow):
//! - `host`: the interface a host IR implements to plug in.
//! - `builder`: recursive translation with per-value memoization and scan bounds.
//! - `simplifier`: driver orchestration plus reconstruction of trivial polynomials.

mod builder;

mod host;
pub use host::{LogicHost, LogicOp};

mod simplifier;
pub use simplifier::{Simplifier, SimplifyConfig};

pub use anf_core::{Monomial, Polynomial};

/// Reasons the translation of an expression is abandoned.
///
/// None of these is fatal: every variant collapses to "no change" at the driver boundary and the
/// host keeps its original IR.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    #[error("expression nesting reaches the depth limit ({0})")]
    DepthLimitExceeded(u32),
    #[error("expression references more than {0} distinct leaves")]
    LeafLimitExceeded(u32),
    #[error("root value is not a supported bitwise operator")]
    UnsupportedRoot,
}
