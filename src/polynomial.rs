use crate::{
    ops::AlgebraError, parse::ParseOptions, term::panic_on_overflow, Operand,
    ParseError, Term, Variable,
};
use std::{
    fmt::{self, Display, Formatter},
    ops::{Add, Mul, Sub},
    str::FromStr,
};

/// A sum of [`Term`]s.
///
/// Terms are kept in the order they were added and like terms are never
/// collected, so `2*x + 3*x` and `5*x` are different polynomials. Equality
/// only ignores the order terms appear in.
#[derive(Debug, Default, Clone)]
pub struct Polynomial {
    terms: Vec<Term>,
}

impl Polynomial {
    pub fn new<I, T>(terms: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Term>,
    {
        Polynomial {
            terms: terms.into_iter().map(Into::into).collect(),
        }
    }

    pub fn terms(&self) -> &[Term] { &self.terms }

    pub fn len(&self) -> usize { self.terms.len() }

    pub fn is_empty(&self) -> bool { self.terms.is_empty() }

    /// Append another operand's terms to this polynomial's.
    pub fn add<P: Into<Polynomial>>(&self, other: P) -> Polynomial {
        let mut terms = self.terms.clone();
        terms.extend(other.into().terms);

        Polynomial { terms }
    }

    /// Add the negation of `other`, failing if negating one of its
    /// coefficients overflows (i.e. `i64::MIN`).
    pub fn subtract<P: Into<Polynomial>>(
        &self,
        other: P,
    ) -> Result<Polynomial, AlgebraError> {
        let mut terms = self.terms.clone();

        for term in other.into().terms {
            let negated = term.multiply(Term::constant(-1)).map_err(|_| {
                AlgebraError::Overflow {
                    operation: "subtract",
                }
            })?;
            terms.push(negated);
        }

        Ok(Polynomial { terms })
    }

    /// Multiply every term in this polynomial by every term in `other`.
    ///
    /// The result always has `self.len() * other.len()` terms. Integers,
    /// variables and terms are single-term polynomials, so multiplying by
    /// them distributes over each term.
    pub fn multiply<P: Into<Polynomial>>(
        &self,
        other: P,
    ) -> Result<Polynomial, AlgebraError> {
        let other = other.into();
        let mut terms = Vec::with_capacity(self.len() * other.len());

        for left in &self.terms {
            for right in &other.terms {
                terms.push(left.multiply(right.clone())?);
            }
        }

        Ok(Polynomial { terms })
    }

    /// Calculate the partial derivative with respect to a [`Variable`].
    ///
    /// Terms which don't contain the variable disappear. If nothing is left
    /// the result is the integer `0` rather than an empty polynomial.
    pub fn derivative(
        &self,
        param: &Variable,
    ) -> Result<Operand, AlgebraError> {
        let mut terms = Vec::new();

        for term in &self.terms {
            match term.derivative(param)? {
                Operand::Integer(0) => {},
                Operand::Integer(value) => terms.push(Term::constant(value)),
                Operand::Variable(v) => terms.push(Term::from(v)),
                Operand::Term(t) => terms.push(t),
                Operand::Polynomial(p) => terms.extend(p.terms),
            }
        }

        log::trace!("d({})/d{} = {} term(s)", self, param, terms.len());

        if terms.is_empty() {
            Ok(Operand::Integer(0))
        } else {
            Ok(Operand::Polynomial(Polynomial { terms }))
        }
    }

    /// Differentiate with respect to a variable given by name.
    ///
    /// The name is trimmed and lowercased before use.
    pub fn derivative_by_name(
        &self,
        name: &str,
    ) -> Result<Operand, AlgebraError> {
        let param: Variable = name.parse()?;
        self.derivative(&param)
    }

    /// The terms, sorted by their canonical key so comparisons don't depend
    /// on the order terms were added.
    fn sorted_terms(&self) -> Vec<&Term> {
        let mut terms: Vec<&Term> = self.terms.iter().collect();
        terms.sort_by_cached_key(|t| (t.canonical_key(), t.coefficient()));
        terms
    }
}

impl PartialEq for Polynomial {
    fn eq(&self, other: &Polynomial) -> bool {
        self.sorted_terms() == other.sorted_terms()
    }
}

/// A polynomial equals a scalar when it has exactly one matching term.
impl PartialEq<Term> for Polynomial {
    fn eq(&self, other: &Term) -> bool {
        match self.terms.as_slice() {
            [single] => single == other,
            _ => false,
        }
    }
}

impl PartialEq<Variable> for Polynomial {
    fn eq(&self, other: &Variable) -> bool {
        *self == Term::from(other.clone())
    }
}

impl PartialEq<i64> for Polynomial {
    fn eq(&self, other: &i64) -> bool { *self == Term::constant(*other) }
}

impl From<i64> for Polynomial {
    fn from(value: i64) -> Polynomial { Polynomial::from(Term::from(value)) }
}

impl From<Variable> for Polynomial {
    fn from(variable: Variable) -> Polynomial {
        Polynomial::from(Term::from(variable))
    }
}

impl From<Term> for Polynomial {
    fn from(term: Term) -> Polynomial { Polynomial { terms: vec![term] } }
}

impl FromStr for Polynomial {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse_with(s, &ParseOptions::default())
    }
}

impl Display for Polynomial {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.terms.is_empty() {
            return write!(f, "0");
        }

        let terms: Vec<String> =
            self.terms.iter().map(ToString::to_string).collect();

        write!(f, "{}", join_signs(&terms.join(" + ")))
    }
}

/// Turn `"a + -b"` into `"a - b"`.
///
/// This is a plain text substitution over the whole string, applied after
/// the terms have been joined.
fn join_signs(joined: &str) -> String { joined.replace("+ -", "- ") }

impl<P: Into<Polynomial>> Add<P> for Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: P) -> Polynomial { Polynomial::add(&self, rhs) }
}

/// # Panics
///
/// If negating a coefficient overflows.
impl<P: Into<Polynomial>> Sub<P> for Polynomial {
    type Output = Polynomial;

    fn sub(self, rhs: P) -> Polynomial { panic_on_overflow(self.subtract(rhs)) }
}

/// # Panics
///
/// If a coefficient or exponent overflows.
impl<P: Into<Polynomial>> Mul<P> for Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: P) -> Polynomial { panic_on_overflow(self.multiply(rhs)) }
}

impl Add<Polynomial> for i64 {
    type Output = Polynomial;

    fn add(self, rhs: Polynomial) -> Polynomial { Polynomial::from(self) + rhs }
}

impl Sub<Polynomial> for i64 {
    type Output = Polynomial;

    fn sub(self, rhs: Polynomial) -> Polynomial { Polynomial::from(self) - rhs }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn x() -> Variable { Variable::named("x") }
    fn y() -> Variable { Variable::named("y") }

    #[test]
    fn adding_concatenates_terms() {
        let got = x() + y() + 3_i64;

        assert_eq!(got.len(), 3);
        assert_eq!(got.to_string(), "x + y + 3");
    }

    #[test]
    fn add_variables() {
        let got = x() + y();
        let should_be = Polynomial::new(vec![x(), y()]);

        assert_eq!(got, should_be);
    }

    #[test]
    fn subtracting_negates_the_other_operand() {
        let got = Term::new(vec![(x(), 1)], 5) - 3_i64;

        assert_eq!(got.to_string(), "5*x - 3");
    }

    #[test]
    fn negative_terms_are_joined_with_a_minus() {
        let p = Polynomial::new(vec![
            Term::new(vec![(x(), 1)], 5),
            Term::constant(-3),
        ]);

        assert_eq!(p.to_string(), "5*x - 3");
    }

    #[test]
    fn display() {
        let inputs = vec![
            (Polynomial::default(), "0"),
            (Polynomial::from(7_i64), "7"),
            (
                Term::new(vec![(x(), 2), (y(), 1)], 3)
                    + Term::new(vec![(x(), 1), (y(), 2)], 2),
                "3*x^2*y + 2*x*y^2",
            ),
            (Term::new(vec![(x(), 1)], 5) + 3_i64, "5*x + 3"),
            (Polynomial::new(vec![-1_i64, 2]), "-1 + 2"),
            (x() - y(), "x - 1*y"),
        ];

        for (poly, should_be) in inputs {
            let got = poly.to_string();
            assert_eq!(got, should_be);
        }
    }

    #[test]
    fn equality_ignores_term_order() {
        let a = x().pow(2) + y() + 1_i64;
        let b = Polynomial::from(1_i64) + y() + x().pow(2);

        assert_eq!(a, b);
    }

    #[test]
    fn equality_compares_every_term() {
        let a = Polynomial::new(vec![1_i64, 2]);
        let b = Polynomial::new(vec![2_i64, 2]);
        let c = Polynomial::new(vec![1_i64, 2, 2]);

        assert_ne!(a, b);
        assert_ne!(b, c);
    }

    #[test]
    fn like_terms_are_not_collected() {
        let two_x_plus_three_x = Term::new(vec![(x(), 1)], 2)
            + Term::new(vec![(x(), 1)], 3);
        let five_x = Polynomial::from(Term::new(vec![(x(), 1)], 5));

        assert_ne!(two_x_plus_three_x, five_x);
    }

    #[test]
    fn multiplying_by_a_term_distributes() {
        let a = x() + 1_i64;
        let c = Term::new(vec![(y(), 1)], 2);

        let got = a.multiply(c.clone()).unwrap();
        let should_be = x() * c.clone() + c;

        assert_eq!(got, should_be);
        assert_eq!(got.len(), 2);
    }

    #[test]
    fn multiplying_polynomials_takes_the_cross_product() {
        let a = x() + y() + 1_i64;
        let b = x() - 2_i64;

        let got = a * b;

        assert_eq!(got.len(), 6);
        assert_eq!(got.to_string(), "x^2 - 2*x + y*x - 2*y + x - 2");
    }

    #[test]
    fn differentiate_polynomial() {
        let p = x().pow(2) * y() + x() * y().pow(2);
        let should_be = 2_i64 * x() * y() + y().pow(2);

        let got = p.derivative(&x()).unwrap();

        assert_eq!(got, Operand::Polynomial(should_be));
    }

    #[test]
    fn differentiating_constants_collapses_to_zero() {
        let p = Polynomial::new(vec![5_i64]);

        assert_eq!(p.derivative(&x()), Ok(Operand::Integer(0)));
        assert_eq!(
            Polynomial::default().derivative(&x()),
            Ok(Operand::Integer(0))
        );
    }

    #[test]
    fn differentiate_by_name() {
        let p = x().pow(3) + y();

        let got = p.derivative_by_name(" X ").unwrap();

        assert_eq!(got.to_string(), "3*x^2");
    }

    #[test]
    fn differentiate_by_invalid_name() {
        let p = Polynomial::from(x().pow(3));

        assert!(p.derivative_by_name("").is_err());
    }

    #[test]
    fn compare_against_scalars() {
        let three_x = Term::new(vec![(x(), 1)], 3);

        assert_eq!(Polynomial::from(three_x.clone()), three_x);
        assert_eq!(Polynomial::from(x()), x());
        assert_eq!(Polynomial::from(5_i64), 5_i64);
        assert_ne!(Polynomial::from(5_i64), 6_i64);
        assert_ne!(x() + 5_i64, 5_i64);
        assert_ne!(three_x.clone() + three_x.clone(), three_x);
        assert_ne!(Polynomial::default(), 0_i64);
    }

    #[test]
    fn integers_on_the_left() {
        assert_eq!((2_i64 + (x() + y())).to_string(), "2 + x + y");
        assert_eq!((2_i64 - (x() - 1_i64)).to_string(), "2 - 1*x + 1");
    }

    #[test]
    fn subtracting_reports_overflow() {
        let zero = Polynomial::from(0_i64);
        let most_negative = Polynomial::from(i64::MIN);

        assert_eq!(
            zero.subtract(most_negative),
            Err(AlgebraError::Overflow {
                operation: "subtract",
            })
        );
        assert_eq!(
            zero.subtract(i64::MAX).unwrap(),
            Polynomial::new(vec![0, -i64::MAX])
        );
    }

    #[test]
    fn multiplying_reports_overflow() {
        let huge = Polynomial::from(x().pow(4_000_000_000));
        let big = x() + Term::constant(i64::MAX);

        assert_eq!(
            huge.multiply(huge.clone()),
            Err(AlgebraError::Overflow {
                operation: "multiply",
            })
        );
        assert!(big.multiply(2_i64).is_err());
        assert!(big.multiply(1_i64).is_ok());
    }

    #[test]
    fn differentiating_reports_overflow() {
        let p = x() + Term::new(vec![(x(), 2)], i64::MAX);

        assert!(p.derivative(&x()).is_err());
        assert!(p.derivative_by_name("x").is_err());
        assert_eq!(p.derivative(&y()), Ok(Operand::Integer(0)));
    }

    #[test]
    #[should_panic(expected = "overflow")]
    fn subtraction_operator_panics_on_overflow() {
        let _ = Polynomial::from(0_i64) - i64::MIN;
    }
}
