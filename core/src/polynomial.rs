use alloc::collections::BTreeSet;
use core::{
    fmt,
    ops::{Add, AddAssign, BitAnd, BitOr, BitXor, Mul, MulAssign, Not},
};

use crate::Monomial;

// POLYNOMIAL
// ================================================================================================

/// A polynomial over the boolean ring: a set of [`Monomial`]s combined under XOR.
///
/// Addition is XOR and multiplication is AND, which gives every bitwise logical operator a
/// polynomial form: `a ^ b = a + b`, `a & b = a * b`, `a | b = a*b + a + b`, `~a = a + 1`.
///
/// Terms are kept canonical: inserting a monomial that is already present removes it instead
/// (`m + m = 0`), so no term ever appears twice. The empty polynomial denotes the constant 0 and
/// the singleton `{1}` denotes the all-ones constant. The zero-sentinel monomial can enter a
/// polynomial only as the translation of a literal zero constant; multiplication filters it out,
/// so it never survives a product.
///
/// Terms are stored in increasing mask order, making iteration and rendering deterministic.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Polynomial {
    terms: BTreeSet<Monomial>,
}

/// Constructors
impl Polynomial {
    /// Returns the polynomial with no terms, denoting the constant 0.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Returns the polynomial `{1}`, denoting the all-ones constant.
    pub fn one() -> Self {
        Self::from(Monomial::ONE)
    }
}

impl From<Monomial> for Polynomial {
    fn from(monomial: Monomial) -> Self {
        let mut terms = BTreeSet::new();
        terms.insert(monomial);
        Self { terms }
    }
}

/// Public accessors
impl Polynomial {
    /// Returns the number of terms.
    pub fn num_terms(&self) -> usize {
        self.terms.len()
    }

    /// Returns true if this polynomial has no terms, i.e. denotes the constant 0.
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns true if this polynomial is `{1}`, i.e. denotes the all-ones constant.
    pub fn is_one(&self) -> bool {
        self.as_singleton().is_some_and(Monomial::is_one)
    }

    /// Returns the only term of this polynomial, or `None` if it has zero or several terms.
    pub fn as_singleton(&self) -> Option<Monomial> {
        if self.terms.len() == 1 { self.terms.first().copied() } else { None }
    }

    /// Returns the terms in increasing mask order.
    pub fn iter(&self) -> impl Iterator<Item = Monomial> + '_ {
        self.terms.iter().copied()
    }

    /// Returns the union of the leaf bits referenced by any term.
    pub fn leaf_mask(&self) -> u64 {
        self.terms.iter().fold(0, |mask, m| mask | m.leaf_mask())
    }
}

/// Ring operations
impl Polynomial {
    /// Flips the presence of `monomial` in `terms`: inserted if absent, removed if present.
    fn toggle(terms: &mut BTreeSet<Monomial>, monomial: Monomial) {
        if !terms.remove(&monomial) {
            terms.insert(monomial);
        }
    }
}

impl AddAssign<&Polynomial> for Polynomial {
    /// Ring addition (XOR): the symmetric difference of the term sets.
    fn add_assign(&mut self, other: &Polynomial) {
        for &m in &other.terms {
            Self::toggle(&mut self.terms, m);
        }
    }
}

impl MulAssign<&Polynomial> for Polynomial {
    /// Ring multiplication (AND): the distributed product of the term sets.
    ///
    /// Pairs involving the zero constant are skipped (`0 * x = 0`), every other pair contributes
    /// the conjunction of its two and-chains, and coinciding products cancel.
    fn mul_assign(&mut self, other: &Polynomial) {
        let mut product = BTreeSet::new();
        for &l in &self.terms {
            if l.is_zero() {
                continue;
            }
            for &r in &other.terms {
                if r.is_zero() {
                    continue;
                }
                Self::toggle(&mut product, l.and(r));
            }
        }
        self.terms = product;
    }
}

impl Add for &Polynomial {
    type Output = Polynomial;

    fn add(self, other: &Polynomial) -> Polynomial {
        let mut sum = self.clone();
        sum += other;
        sum
    }
}

impl Mul for &Polynomial {
    type Output = Polynomial;

    fn mul(self, other: &Polynomial) -> Polynomial {
        let mut product = self.clone();
        product *= other;
        product
    }
}

impl BitXor for &Polynomial {
    type Output = Polynomial;

    fn bitxor(self, other: &Polynomial) -> Polynomial {
        self + other
    }
}

impl BitAnd for &Polynomial {
    type Output = Polynomial;

    fn bitand(self, other: &Polynomial) -> Polynomial {
        self * other
    }
}

impl BitOr for &Polynomial {
    type Output = Polynomial;

    /// `a | b = a*b + a + b` in the boolean ring.
    fn bitor(self, other: &Polynomial) -> Polynomial {
        let mut result = self * other;
        result += self;
        result += other;
        result
    }
}

impl Not for &Polynomial {
    type Output = Polynomial;

    /// `~a = a + 1` in the boolean ring.
    fn not(self) -> Polynomial {
        self + &Polynomial::one()
    }
}

// PRETTY PRINTING
// ================================================================================================

impl Polynomial {
    /// Returns a displayable form of this polynomial rendering leaf `i` via `name`.
    ///
    /// Terms are joined with ` + ` and the leaves of a term with ` * `. The all-ones constant
    /// prints as `-1`, the zero constant prints nothing, and a polynomial with no terms prints
    /// as `0`.
    pub fn display_with<'a, F>(&'a self, name: F) -> impl fmt::Display + 'a
    where
        F: Fn(&mut fmt::Formatter<'_>, u32) -> fmt::Result + 'a,
    {
        DisplayPolynomial { poly: self, name }
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_with(|f, leaf| write!(f, "x{leaf}")))
    }
}

struct DisplayPolynomial<'a, F> {
    poly: &'a Polynomial,
    name: F,
}

impl<F> fmt::Display for DisplayPolynomial<'_, F>
where
    F: Fn(&mut fmt::Formatter<'_>, u32) -> fmt::Result,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.poly.is_zero() {
            return f.write_str("0");
        }
        for (i, term) in self.poly.iter().enumerate() {
            if i > 0 {
                f.write_str(" + ")?;
            }
            if term.is_zero() {
                continue;
            } else if term.is_one() {
                f.write_str("-1")?;
            } else {
                for (j, leaf) in term.leaves().enumerate() {
                    if j > 0 {
                        f.write_str(" * ")?;
                    }
                    (self.name)(f, leaf)?;
                }
            }
        }
        Ok(())
    }
}

// TESTS
// ================================================================================================
