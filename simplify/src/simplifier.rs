use anf_core::Monomial;
use tracing::trace;

use crate::{
    LogicHost,
    builder::{ExprBuilder, ExprNode},
};

// CONFIGURATION
// ================================================================================================

/// Scan bounds for one [`Simplifier`].
///
/// Both bounds exist to cap the work per attempt: a fully expanded polynomial can carry up to
/// `2^leaves` terms, so the defaults keep the worst case at a few thousand mask operations. A
/// host pass would typically populate this from its own flag registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimplifyConfig {
    /// Maximum number of distinct opaque leaves tolerated before the attempt is abandoned.
    /// Capped at [`Monomial::MAX_LEAVES`] by the mask encoding.
    pub max_leaves: u32,
    /// Maximum recursion depth into the expression DAG before the attempt is abandoned.
    pub max_depth: u32,
}

impl Default for SimplifyConfig {
    fn default() -> Self {
        Self { max_leaves: 8, max_depth: 8 }
    }
}

// SIMPLIFIER
// ================================================================================================

/// Rewrites chains of bitwise AND/OR/XOR into algebraically simpler forms.
///
/// Each [`Self::simplify`] call is self-contained: the translation caches live and die inside
/// the call, so one simplifier can be reused across any number of roots (and hosts). The
/// simplifier is single-threaded; run one instance per thread on disjoint IR if parallelism is
/// needed.
#[derive(Debug)]
pub struct Simplifier {
    config: SimplifyConfig,
    num_simplified: u64,
}

/// Constructors
impl Simplifier {
    /// Returns a simplifier with the given scan bounds.
    ///
    /// # Panics
    /// Panics if `config.max_leaves` exceeds [`Monomial::MAX_LEAVES`].
    pub fn new(config: SimplifyConfig) -> Self {
        assert!(
            config.max_leaves <= Monomial::MAX_LEAVES,
            "max_leaves {} exceeds the {} leaf bits of the mask encoding",
            config.max_leaves,
            Monomial::MAX_LEAVES,
        );
        Self { config, num_simplified: 0 }
    }
}

impl Default for Simplifier {
    fn default() -> Self {
        Self::new(SimplifyConfig::default())
    }
}

/// Public accessors
impl Simplifier {
    /// Returns the number of expressions this simplifier has rewritten.
    pub fn num_simplified(&self) -> u64 {
        self.num_simplified
    }
}

/// Simplification
impl Simplifier {
    /// Attempts to replace the expression rooted at `root` with something simpler.
    ///
    /// Returns the replacement value, or `None` if the expression is out of scope, a scan bound
    /// was hit, or the reduced polynomial has no trivial form. The replacement is never equal to
    /// `root`, and the host IR is only touched (to synthesize a constant) when a reduction
    /// succeeded.
    pub fn simplify<H: LogicHost>(&mut self, host: &mut H, root: H::Value) -> Option<H::Value> {
        let (node, leaves) = {
            let mut builder = ExprBuilder::new(&*host, self.config);
            match builder.get_node(root, 0) {
                Ok(id) => builder.finish(id),
                Err(err) => {
                    trace!(target: "anf", "no rewrite: {err}");
                    return None;
                },
            }
        };
        let replacement = reconstruct(host, &node, &leaves)?;
        if replacement == root {
            return None;
        }
        self.num_simplified += 1;
        Some(replacement)
    }
}

// RECONSTRUCTION
// ================================================================================================

/// Maps a reduced polynomial back to an IR value, or `None` if it has no trivial form.
///
/// Only the degenerate polynomials are reconstructed: empty (the constant 0), a lone sentinel
/// constant, or a lone single-leaf term. Factoring an arbitrary polynomial back into compact IR
/// is deliberately not attempted; the translation earns its keep on the expressions whose
/// cancellations collapse all the way down.
fn reconstruct<H: LogicHost>(
    host: &mut H,
    node: &ExprNode<H::Value>,
    leaves: &[H::Value],
) -> Option<H::Value> {
    if node.poly.is_zero() {
        return Some(host.zero_like(node.value));
    }
    let term = node.poly.as_singleton()?;
    if term.is_zero() {
        Some(host.zero_like(node.value))
    } else if term.is_one() {
        Some(host.all_ones_like(node.value))
    } else {
        let leaf = term.as_single_leaf()?;
        leaves.get(leaf as usize).copied()
    }
}

// TESTS
// ================================================================================================
