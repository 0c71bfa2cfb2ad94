//! Boolean-ring polynomial algebra over opaque leaves.
//!
//! Bitwise logic has a ring structure on `{0, 1}^n`: XOR is addition and AND is multiplication
//! (GF(2), one copy per bit lane). In that ring every logical operator is a polynomial:
//!
//! - `a | b = a*b + a + b`
//! - `~a = a + 1`
//!
//! This crate provides the two value types of that calculus. A [`Monomial`] is one and-chain,
//! encoded as a 64-bit mask over leaf indices with two reserved sentinel bits for the constants
//! 0 and all-ones. A [`Polynomial`] is an XOR-set of monomials in which duplicate terms cancel,
//! so rewriting an expression into a polynomial performs algebraic simplification for free:
//! `a ^ a` becomes the empty polynomial, `a | ~a` becomes `{1}`.
//!
//! What the leaves stand for is up to the caller; leaf indices are plain dense integers.

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod monomial;
pub use monomial::Monomial;

mod polynomial;
pub use polynomial::Polynomial;
