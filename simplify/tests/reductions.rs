use anf_simplify::{Simplifier, SimplifyConfig};
use anf_test_utils::TestHost;

// TRIVIAL REDUCTIONS
// ================================================================================================

#[test]
fn xor_with_self_folds_to_zero() {
    let mut host = TestHost::new();
    let a = host.var("a");
    let root = host.xor(a, a);

    let mut simplifier = Simplifier::default();
    let replacement = simplifier.simplify(&mut host, root);
    let zero = host.constant(0);
    assert_eq!(replacement, Some(zero));
    assert_eq!(simplifier.num_simplified(), 1);
}

#[test]
fn xor_of_equal_conjunctions_folds_to_zero() {
    let mut host = TestHost::new();
    let a = host.var("a");
    let b = host.var("b");
    let lhs = host.and(a, b);
    let rhs = host.and(b, a);
    let root = host.xor(lhs, rhs);

    // The operands are structurally distinct values, but their polynomials coincide.
    assert_ne!(lhs, rhs);
    let replacement = Simplifier::default().simplify(&mut host, root);
    let zero = host.constant(0);
    assert_eq!(replacement, Some(zero));
}

#[test]
fn conjunction_with_own_negation_folds_to_zero() {
    let mut host = TestHost::new();
    let a = host.var("a");
    let not_a = host.not(a);
    let root = host.and(a, not_a);

    let replacement = Simplifier::default().simplify(&mut host, root);
    let zero = host.constant(0);
    assert_eq!(replacement, Some(zero));
}

#[test]
fn disjunction_with_own_negation_folds_to_all_ones() {
    let mut host = TestHost::new();
    let a = host.var("a");
    let not_a = host.not(a);
    let root = host.or(a, not_a);

    let replacement = Simplifier::default().simplify(&mut host, root);
    let ones = host.constant(u64::MAX);
    assert_eq!(replacement, Some(ones));
}

#[test]
fn conjunction_with_zero_folds_to_zero() {
    let mut host = TestHost::new();
    let a = host.var("a");
    let zero = host.constant(0);
    let root = host.and(a, zero);

    let replacement = Simplifier::default().simplify(&mut host, root);
    assert_eq!(replacement, Some(zero));
}

#[test]
fn double_negation_folds_to_the_operand() {
    let mut host = TestHost::new();
    let a = host.var("a");
    let once = host.not(a);
    let root = host.not(once);

    let replacement = Simplifier::default().simplify(&mut host, root);
    assert_eq!(replacement, Some(a));
}

#[test]
fn nested_chain_cancels_down_to_one_leaf() {
    // ((a & b) | (a ^ c)) ^ (~(b & c) & a) leaves just c standing:
    // the left side expands to abc + a + c, the right to abc + a.
    let mut host = TestHost::new();
    let a = host.var("a");
    let b = host.var("b");
    let c = host.var("c");
    let ab = host.and(a, b);
    let a_xor_c = host.xor(a, c);
    let lhs = host.or(ab, a_xor_c);
    let bc = host.and(b, c);
    let not_bc = host.not(bc);
    let rhs = host.and(not_bc, a);
    let root = host.xor(lhs, rhs);

    let mut simplifier = Simplifier::default();
    assert_eq!(simplifier.simplify(&mut host, root), Some(c));
    assert_eq!(simplifier.num_simplified(), 1);
}

#[test]
fn opaque_constants_are_ordinary_leaves() {
    // 5 is neither 0 nor all-ones, so it gets a leaf bit and cancels against itself.
    let mut host = TestHost::new();
    let a = host.var("a");
    let five = host.constant(5);
    let inner = host.xor(a, five);
    let root = host.xor(inner, five);

    let replacement = Simplifier::default().simplify(&mut host, root);
    assert_eq!(replacement, Some(a));
}

#[test]
fn opaque_binary_operators_are_leaves() {
    let mut host = TestHost::new();
    let a = host.var("a");
    let b = host.var("b");
    let sum = host.add(a, b);
    let root = host.xor(sum, sum);

    let replacement = Simplifier::default().simplify(&mut host, root);
    let zero = host.constant(0);
    assert_eq!(replacement, Some(zero));
}

// NO-CHANGE OUTCOMES
// ================================================================================================

#[test]
fn multi_term_polynomials_are_left_alone() {
    // (a | b) & c expands to abc + ac + bc: three terms, nothing trivial to rebuild.
    let mut host = TestHost::new();
    let a = host.var("a");
    let b = host.var("b");
    let c = host.var("c");
    let a_or_b = host.or(a, b);
    let root = host.and(a_or_b, c);

    let mut simplifier = Simplifier::default();
    assert_eq!(simplifier.simplify(&mut host, root), None);
    assert_eq!(simplifier.num_simplified(), 0);
}

#[test]
fn single_conjunction_is_left_alone() {
    // a & b reduces to the one-term polynomial ab, which is not a single leaf.
    let mut host = TestHost::new();
    let a = host.var("a");
    let b = host.var("b");
    let root = host.and(a, b);

    assert_eq!(Simplifier::default().simplify(&mut host, root), None);
}

#[test]
fn bare_leaf_roots_are_left_alone() {
    let mut host = TestHost::new();
    let a = host.var("a");
    assert_eq!(Simplifier::default().simplify(&mut host, a), None);

    let b = host.var("b");
    let sum = host.add(a, b);
    assert_eq!(Simplifier::default().simplify(&mut host, sum), None);
}

#[test]
fn depth_bound_abandons_deep_expressions() {
    let mut host = TestHost::new();
    let a = host.var("a");
    let b = host.var("b");
    // Left-leaning XOR chain twelve levels deep over two leaves. It would cancel to zero, but
    // the scan gives up first.
    let mut root = host.xor(a, b);
    for _ in 0..11 {
        root = host.xor(root, b);
    }

    let mut simplifier = Simplifier::default();
    assert_eq!(simplifier.simplify(&mut host, root), None);
    assert_eq!(simplifier.num_simplified(), 0);
}

#[test]
fn leaf_bound_abandons_wide_expressions() {
    let mut host = TestHost::new();
    // A balanced XOR tree over 12 distinct variables stays shallow but blows the leaf budget.
    let mut layer: Vec<_> = (0..12).map(|i| host.var(format!("v{i}"))).collect();
    while layer.len() > 1 {
        layer = layer
            .chunks(2)
            .map(|pair| if let [lhs, rhs] = *pair { host.xor(lhs, rhs) } else { pair[0] })
            .collect();
    }

    assert_eq!(Simplifier::default().simplify(&mut host, layer[0]), None);
}

#[test]
fn bounds_are_configurable() {
    let mut host = TestHost::new();
    let a = host.var("a");
    let b = host.var("b");
    let inner = host.xor(a, b);
    let root = host.xor(inner, b);

    // Depth 2 suffices for this shape; depth 1 does not.
    let mut tight = Simplifier::new(SimplifyConfig { max_leaves: 8, max_depth: 1 });
    assert_eq!(tight.simplify(&mut host, root), None);

    let mut roomy = Simplifier::new(SimplifyConfig { max_leaves: 2, max_depth: 8 });
    assert_eq!(roomy.simplify(&mut host, root), Some(a));
}

// DRIVER STATE
// ================================================================================================

#[test]
fn simplifier_is_reusable_across_roots() {
    let mut host = TestHost::new();
    let mut simplifier = Simplifier::default();

    let a = host.var("a");
    let first = host.xor(a, a);
    let zero = host.constant(0);
    assert_eq!(simplifier.simplify(&mut host, first), Some(zero));

    // A fresh root over fresh variables; stale leaf assignments would misfold this one.
    let p = host.var("p");
    let q = host.var("q");
    let pq = host.xor(p, q);
    let second = host.xor(pq, q);
    assert_eq!(simplifier.simplify(&mut host, second), Some(p));
    assert_eq!(simplifier.num_simplified(), 2);
}
