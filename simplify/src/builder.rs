use std::collections::HashMap;

use anf_core::{Monomial, Polynomial};
use tracing::trace;

use crate::{BuildError, LogicHost, LogicOp, SimplifyConfig};

// EXPRESSION BUILDER
// ================================================================================================

/// Identifier of a node in the builder's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct NodeId(u32);

impl NodeId {
    const fn index(self) -> usize {
        self.0 as usize
    }
}

/// One translated IR value: the value paired with its polynomial.
#[derive(Debug)]
pub(crate) struct ExprNode<V> {
    pub value: V,
    pub poly: Polynomial,
}

/// Translates a rooted IR expression into boolean-ring polynomials.
///
/// Nodes live in an arena owned by the builder and are keyed by IR value identity, so a value
/// reached through two paths of the expression DAG translates once and shares its polynomial.
/// The sharing is required for correctness, not just speed: `a ^ a` folds to zero only because
/// both operands map to the same leaf bit. All state is scoped to one simplification attempt;
/// the driver constructs a fresh builder per call.
pub(crate) struct ExprBuilder<'a, H: LogicHost> {
    host: &'a H,
    config: SimplifyConfig,
    nodes: Vec<ExprNode<H::Value>>,
    node_ids: HashMap<H::Value, NodeId>,
    /// Leaf values in discovery order; the position of a value is its leaf index.
    leaves: Vec<H::Value>,
    leaf_ids: HashMap<H::Value, u32>,
}

impl<'a, H: LogicHost> ExprBuilder<'a, H> {
    pub fn new(host: &'a H, config: SimplifyConfig) -> Self {
        Self {
            host,
            config,
            nodes: Vec::new(),
            node_ids: HashMap::new(),
            leaves: Vec::new(),
            leaf_ids: HashMap::new(),
        }
    }

    /// Returns the node for `value`, translating it on first sight.
    ///
    /// Supported binary operators recurse into both operands and combine the operand polynomials
    /// with ring arithmetic; everything else is handled as a leaf. Any failure below `value`
    /// abandons the whole translation.
    pub fn get_node(&mut self, value: H::Value, depth: u32) -> Result<NodeId, BuildError> {
        if depth == self.config.max_depth {
            return Err(BuildError::DepthLimitExceeded(self.config.max_depth));
        }
        if let Some(&id) = self.node_ids.get(&value) {
            return Ok(id);
        }
        let Some((op, lhs, rhs)) = self.host.as_logic_op(value) else {
            return self.visit_leaf(value, depth);
        };
        let lhs = self.get_node(lhs, depth + 1)?;
        let rhs = self.get_node(rhs, depth + 1)?;
        let (l, r) = (&self.nodes[lhs.index()].poly, &self.nodes[rhs.index()].poly);
        let poly = match op {
            LogicOp::And => l & r,
            LogicOp::Or => l | r,
            LogicOp::Xor => l ^ r,
        };
        Ok(self.insert(value, poly))
    }

    /// Translates a value the builder declines to decompose.
    ///
    /// Literal 0/all-ones constants map to the sentinel monomials without consuming a leaf slot
    /// or a table entry; everything else is assigned the next leaf bit in discovery order.
    fn visit_leaf(&mut self, value: H::Value, depth: u32) -> Result<NodeId, BuildError> {
        if depth == 0 {
            // A bare leaf cannot get simpler than itself.
            return Err(BuildError::UnsupportedRoot);
        }
        if self.leaves.len() > self.config.max_leaves as usize {
            return Err(BuildError::LeafLimitExceeded(self.config.max_leaves));
        }
        let poly = if self.host.is_zero_constant(value) {
            Polynomial::from(Monomial::ZERO)
        } else if self.host.is_all_ones_constant(value) {
            Polynomial::from(Monomial::ONE)
        } else {
            Polynomial::from(Monomial::leaf(self.leaf_index(value)?))
        };
        Ok(self.insert(value, poly))
    }

    fn leaf_index(&mut self, value: H::Value) -> Result<u32, BuildError> {
        if let Some(&index) = self.leaf_ids.get(&value) {
            return Ok(index);
        }
        let index = self.leaves.len() as u32;
        if index >= Monomial::MAX_LEAVES {
            // Leaf indices must stay below the sentinel bits of the mask encoding.
            return Err(BuildError::LeafLimitExceeded(self.config.max_leaves));
        }
        self.leaves.push(value);
        self.leaf_ids.insert(value, index);
        Ok(index)
    }

    fn insert(&mut self, value: H::Value, poly: Polynomial) -> NodeId {
        trace!(
            target: "anf",
            "{} --> {}",
            self.host.value_name(value),
            describe(self.host, &self.leaves, &poly),
        );
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(ExprNode { value, poly });
        self.node_ids.insert(value, id);
        id
    }

    /// Consumes the builder, returning the node of `root` and the leaf table.
    pub fn finish(mut self, root: NodeId) -> (ExprNode<H::Value>, Vec<H::Value>) {
        let node = self.nodes.swap_remove(root.index());
        (node, self.leaves)
    }
}

/// Renders `poly` with host leaf names, in the shape the debug log uses.
fn describe<H: LogicHost>(host: &H, leaves: &[H::Value], poly: &Polynomial) -> String {
    let names: Vec<String> = leaves.iter().map(|&leaf| host.value_name(leaf)).collect();
    poly.display_with(move |f, leaf| match names.get(leaf as usize) {
        Some(name) => f.write_str(name),
        None => write!(f, "x{leaf}"),
    })
    .to_string()
}

// TESTS
// ================================================================================================
