//! A miniature expression IR for exercising the simplifier.
//!
//! Values live in an arena and are hash-consed: structurally identical expressions share one
//! [`ValueId`]. That makes DAG-shaped inputs trivial to build (construct the same subexpression
//! twice and both uses carry the same handle), which is exactly the identity sharing the
//! simplifier's cancellation rules rely on.

use std::collections::HashMap;

use anf_simplify::{LogicHost, LogicOp};

// TEST HOST
// ================================================================================================

/// Handle to one value in a [`TestHost`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ValueId(u32);

impl ValueId {
    const fn index(self) -> usize {
        self.0 as usize
    }
}

/// One value of the test IR.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expr {
    /// A named opaque variable.
    Var(String),
    /// A 64-bit integer constant. `0` and `u64::MAX` classify as the ring constants; every
    /// other value is an opaque leaf.
    Const(u64),
    /// A binary operation.
    Binary(BinOp, ValueId, ValueId),
}

/// Binary operators of the test IR.
///
/// `Add` exists to exercise the unsupported-operator path: the simplifier must treat it as an
/// opaque leaf rather than decompose it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinOp {
    And,
    Or,
    Xor,
    Add,
}

/// An arena of interned expressions implementing [`LogicHost`].
#[derive(Debug, Default)]
pub struct TestHost {
    nodes: Vec<Expr>,
    cache: HashMap<Expr, ValueId>,
}

impl TestHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the expression behind a handle.
    pub fn expr(&self, id: ValueId) -> &Expr {
        &self.nodes[id.index()]
    }

    pub fn var(&mut self, name: impl Into<String>) -> ValueId {
        self.intern(Expr::Var(name.into()))
    }

    pub fn constant(&mut self, value: u64) -> ValueId {
        self.intern(Expr::Const(value))
    }

    pub fn and(&mut self, lhs: ValueId, rhs: ValueId) -> ValueId {
        self.intern(Expr::Binary(BinOp::And, lhs, rhs))
    }

    pub fn or(&mut self, lhs: ValueId, rhs: ValueId) -> ValueId {
        self.intern(Expr::Binary(BinOp::Or, lhs, rhs))
    }

    pub fn xor(&mut self, lhs: ValueId, rhs: ValueId) -> ValueId {
        self.intern(Expr::Binary(BinOp::Xor, lhs, rhs))
    }

    pub fn add(&mut self, lhs: ValueId, rhs: ValueId) -> ValueId {
        self.intern(Expr::Binary(BinOp::Add, lhs, rhs))
    }

    /// Builds `~value`, lowered the way a host IR would hand it to the simplifier: as XOR with
    /// the all-ones constant (NOT is not a first-class operator of the input language).
    pub fn not(&mut self, value: ValueId) -> ValueId {
        let ones = self.constant(u64::MAX);
        self.xor(value, ones)
    }

    fn intern(&mut self, expr: Expr) -> ValueId {
        if let Some(&id) = self.cache.get(&expr) {
            return id;
        }
        let id = ValueId(self.nodes.len() as u32);
        self.nodes.push(expr.clone());
        self.cache.insert(expr, id);
        id
    }
}

impl LogicHost for TestHost {
    type Value = ValueId;

    fn as_logic_op(&self, value: ValueId) -> Option<(LogicOp, ValueId, ValueId)> {
        match self.nodes[value.index()] {
            Expr::Binary(BinOp::And, lhs, rhs) => Some((LogicOp::And, lhs, rhs)),
            Expr::Binary(BinOp::Or, lhs, rhs) => Some((LogicOp::Or, lhs, rhs)),
            Expr::Binary(BinOp::Xor, lhs, rhs) => Some((LogicOp::Xor, lhs, rhs)),
            _ => None,
        }
    }

    fn is_zero_constant(&self, value: ValueId) -> bool {
        matches!(self.nodes[value.index()], Expr::Const(0))
    }

    fn is_all_ones_constant(&self, value: ValueId) -> bool {
        matches!(self.nodes[value.index()], Expr::Const(u64::MAX))
    }

    fn zero_like(&mut self, _value: ValueId) -> ValueId {
        self.constant(0)
    }

    fn all_ones_like(&mut self, _value: ValueId) -> ValueId {
        self.constant(u64::MAX)
    }

    fn value_name(&self, value: ValueId) -> String {
        match &self.nodes[value.index()] {
            Expr::Var(name) => name.clone(),
            Expr::Const(c) if *c == u64::MAX => "-1".to_string(),
            Expr::Const(c) => c.to_string(),
            Expr::Binary(..) => format!("%{}", value.0),
        }
    }
}

// TESTS
// ================================================================================================
