use crate::{ops::AlgebraError, Operand, Polynomial, Variable};
use std::{
    fmt::{self, Display, Formatter},
    ops::{Add, Mul, Sub},
};

/// A coefficient multiplied by zero or more [`Variable`]s, each raised to a
/// positive integer power (e.g. `3*x^2*y`).
///
/// The power map remembers insertion order because it determines how the
/// [`Term`] is displayed, but equality ignores it.
#[derive(Debug, Clone)]
pub struct Term {
    coefficient: i64,
    powers: Vec<(Variable, u32)>,
}

impl Term {
    /// Create a new [`Term`].
    ///
    /// When a [`Variable`] is repeated the later power replaces the earlier
    /// one (keeping the original position), and variables raised to the
    /// zeroth power are dropped.
    pub fn new<P>(powers: P, coefficient: i64) -> Self
    where
        P: IntoIterator<Item = (Variable, u32)>,
    {
        let mut map: Vec<(Variable, u32)> = Vec::new();

        for (variable, power) in powers {
            match map.iter_mut().find(|(v, _)| *v == variable) {
                Some(existing) => existing.1 = power,
                None => map.push((variable, power)),
            }
        }

        map.retain(|&(_, power)| power != 0);

        Term {
            coefficient,
            powers: map,
        }
    }

    /// A [`Term`] with no variables.
    pub fn constant(value: i64) -> Self {
        Term {
            coefficient: value,
            powers: Vec::new(),
        }
    }

    pub fn coefficient(&self) -> i64 { self.coefficient }

    pub fn powers(&self) -> impl Iterator<Item = (&Variable, u32)> + '_ {
        self.powers.iter().map(|(v, p)| (v, *p))
    }

    /// The power a [`Variable`] is raised to, if it appears in this [`Term`].
    pub fn power_of(&self, variable: &Variable) -> Option<u32> {
        self.powers
            .iter()
            .find(|(v, _)| v == variable)
            .map(|(_, p)| *p)
    }

    pub fn is_constant(&self) -> bool { self.powers.is_empty() }

    /// Multiply two terms together.
    ///
    /// Coefficients are multiplied and the power maps merged, adding the
    /// exponents of any shared variables. Integers and variables are
    /// promoted to a [`Term`] first.
    pub fn multiply<T: Into<Term>>(
        &self,
        other: T,
    ) -> Result<Term, AlgebraError> {
        let other = other.into();
        let overflow = || AlgebraError::Overflow {
            operation: "multiply",
        };
        let mut powers = self.powers.clone();

        for (variable, power) in other.powers {
            match powers.iter_mut().find(|(v, _)| *v == variable) {
                Some(existing) => {
                    existing.1 =
                        existing.1.checked_add(power).ok_or_else(overflow)?;
                },
                None => powers.push((variable, power)),
            }
        }

        let coefficient = self
            .coefficient
            .checked_mul(other.coefficient)
            .ok_or_else(overflow)?;

        Ok(Term::new(powers, coefficient))
    }

    /// Calculate this [`Term`]'s partial derivative with respect to a
    /// [`Variable`] using the power rule.
    ///
    /// The result is the integer `0` when the variable doesn't appear.
    pub fn derivative(
        &self,
        param: &Variable,
    ) -> Result<Operand, AlgebraError> {
        let mut terms = Vec::new();

        for &(_, power) in self.powers.iter().filter(|(v, _)| v == param) {
            let coefficient = self
                .coefficient
                .checked_mul(i64::from(power))
                .ok_or(AlgebraError::Overflow {
                    operation: "differentiate",
                })?;
            let powers = self.powers.iter().map(|(v, p)| {
                if v == param {
                    (v.clone(), p - 1)
                } else {
                    (v.clone(), *p)
                }
            });
            terms.push(Term::new(powers, coefficient));
        }

        log::trace!("d({})/d{} produced {} term(s)", self, param, terms.len());

        let got = match terms.len() {
            0 => Operand::Integer(0),
            1 => Operand::Term(terms.remove(0)),
            _ => Operand::Polynomial(Polynomial::new(terms)),
        };

        Ok(got)
    }

    /// A key derived from the power map which doesn't depend on the order
    /// variables were inserted in.
    pub(crate) fn canonical_key(&self) -> String {
        let mut powers: Vec<_> = self.powers.iter().collect();
        powers.sort();

        let parts: Vec<String> = powers
            .into_iter()
            .map(|(v, p)| format!("{}^{}", v, p))
            .collect();
        parts.join("*")
    }
}

impl PartialEq for Term {
    fn eq(&self, other: &Term) -> bool {
        self.coefficient == other.coefficient
            && self.powers.len() == other.powers.len()
            && self
                .powers
                .iter()
                .all(|(v, p)| other.power_of(v) == Some(*p))
    }
}

impl Eq for Term {}

impl From<i64> for Term {
    fn from(value: i64) -> Term { Term::constant(value) }
}

impl From<Variable> for Term {
    fn from(variable: Variable) -> Term { Term::new(vec![(variable, 1)], 1) }
}

impl Display for Term {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();

        if self.coefficient != 1 || self.powers.is_empty() {
            parts.push(self.coefficient.to_string());
        }

        for (variable, power) in &self.powers {
            if *power == 1 {
                parts.push(variable.to_string());
            } else {
                parts.push(format!("{}^{}", variable, power));
            }
        }

        if parts.is_empty() {
            write!(f, "0")
        } else {
            write!(f, "{}", parts.join("*"))
        }
    }
}

// Operator overloads so expressions can be written inline. Like the integer
// operators they wrap, `*` and `-` panic if a coefficient or exponent
// overflows; use the named methods or `crate::ops` to get an error instead.

/// Unwrap the result of an arithmetic operator.
pub(crate) fn panic_on_overflow<T>(result: Result<T, AlgebraError>) -> T {
    match result {
        Ok(value) => value,
        Err(e) => panic!("{}", e),
    }
}

impl<T: Into<Term>> Mul<T> for Term {
    type Output = Term;

    fn mul(self, rhs: T) -> Term { panic_on_overflow(self.multiply(rhs)) }
}

impl<T: Into<Term>> Mul<T> for Variable {
    type Output = Term;

    fn mul(self, rhs: T) -> Term { Term::from(self) * rhs }
}

impl Mul<Term> for i64 {
    type Output = Term;

    fn mul(self, rhs: Term) -> Term { Term::constant(self) * rhs }
}

impl Mul<Variable> for i64 {
    type Output = Term;

    fn mul(self, rhs: Variable) -> Term { Term::constant(self) * rhs }
}

impl<P: Into<Polynomial>> Add<P> for Term {
    type Output = Polynomial;

    fn add(self, rhs: P) -> Polynomial { Polynomial::from(self) + rhs }
}

impl<P: Into<Polynomial>> Sub<P> for Term {
    type Output = Polynomial;

    fn sub(self, rhs: P) -> Polynomial { Polynomial::from(self) - rhs }
}

impl<P: Into<Polynomial>> Add<P> for Variable {
    type Output = Polynomial;

    fn add(self, rhs: P) -> Polynomial { Polynomial::from(self) + rhs }
}

impl<P: Into<Polynomial>> Sub<P> for Variable {
    type Output = Polynomial;

    fn sub(self, rhs: P) -> Polynomial { Polynomial::from(self) - rhs }
}

impl Add<Term> for i64 {
    type Output = Polynomial;

    fn add(self, rhs: Term) -> Polynomial { Polynomial::from(self) + rhs }
}

impl Sub<Term> for i64 {
    type Output = Polynomial;

    fn sub(self, rhs: Term) -> Polynomial { Polynomial::from(self) - rhs }
}

impl Add<Variable> for i64 {
    type Output = Polynomial;

    fn add(self, rhs: Variable) -> Polynomial { Polynomial::from(self) + rhs }
}

impl Sub<Variable> for i64 {
    type Output = Polynomial;

    fn sub(self, rhs: Variable) -> Polynomial { Polynomial::from(self) - rhs }
}
