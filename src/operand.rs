use crate::{Polynomial, Term, Variable};
use std::{
    borrow::Cow,
    fmt::{self, Display, Formatter},
};

/// Anything which can take part in an algebraic operation.
#[derive(Debug, Clone)]
pub enum Operand {
    Integer(i64),
    Variable(Variable),
    Term(Term),
    Polynomial(Polynomial),
}

impl Operand {
    pub fn kind(&self) -> OperandKind {
        match self {
            Operand::Integer(_) => OperandKind::Integer,
            Operand::Variable(_) => OperandKind::Variable,
            Operand::Term(_) => OperandKind::Term,
            Operand::Polynomial(_) => OperandKind::Polynomial,
        }
    }

    /// View this operand as a single [`Term`], if it only contains one.
    fn as_term(&self) -> Option<Cow<'_, Term>> {
        match self {
            Operand::Integer(value) => Some(Cow::Owned(Term::constant(*value))),
            Operand::Variable(v) => Some(Cow::Owned(Term::from(v.clone()))),
            Operand::Term(term) => Some(Cow::Borrowed(term)),
            Operand::Polynomial(p) => match p.terms() {
                [single] => Some(Cow::Borrowed(single)),
                _ => None,
            },
        }
    }

    /// Promote this operand to a [`Polynomial`].
    pub fn into_polynomial(self) -> Polynomial {
        match self {
            Operand::Integer(value) => Polynomial::from(value),
            Operand::Variable(v) => Polynomial::from(v),
            Operand::Term(term) => Polynomial::from(term),
            Operand::Polynomial(p) => p,
        }
    }
}

/// The different kinds of [`Operand`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum OperandKind {
    Integer,
    Variable,
    Term,
    Polynomial,
}

impl Display for OperandKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            OperandKind::Integer => write!(f, "integer"),
            OperandKind::Variable => write!(f, "variable"),
            OperandKind::Term => write!(f, "term"),
            OperandKind::Polynomial => write!(f, "polynomial"),
        }
    }
}

/// Two polynomials are compared term-by-term after sorting. Anything else is
/// treated as a single term, so a polynomial only equals an integer,
/// variable or term when it has exactly one matching term.
impl PartialEq for Operand {
    fn eq(&self, other: &Operand) -> bool {
        match (self, other) {
            (Operand::Polynomial(left), Operand::Polynomial(right)) => {
                left == right
            },
            (Operand::Integer(left), Operand::Integer(right)) => left == right,
            (Operand::Variable(left), Operand::Variable(right)) => {
                left == right
            },
            _ => match (self.as_term(), other.as_term()) {
                (Some(left), Some(right)) => left == right,
                _ => false,
            },
        }
    }
}

impl PartialEq<i64> for Operand {
    fn eq(&self, other: &i64) -> bool {
        *self == Operand::Integer(*other)
    }
}

impl PartialEq<Term> for Operand {
    fn eq(&self, other: &Term) -> bool {
        self.as_term().map_or(false, |term| *term == *other)
    }
}

impl PartialEq<Polynomial> for Operand {
    fn eq(&self, other: &Polynomial) -> bool {
        match self {
            Operand::Polynomial(p) => p == other,
            _ => match other.terms() {
                [single] => *self == *single,
                _ => false,
            },
        }
    }
}

impl From<i64> for Operand {
    fn from(value: i64) -> Operand { Operand::Integer(value) }
}

impl From<Variable> for Operand {
    fn from(variable: Variable) -> Operand { Operand::Variable(variable) }
}

impl From<Term> for Operand {
    fn from(term: Term) -> Operand { Operand::Term(term) }
}

impl From<Polynomial> for Operand {
    fn from(polynomial: Polynomial) -> Operand {
        Operand::Polynomial(polynomial)
    }
}

impl Display for Operand {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Integer(value) => write!(f, "{}", value),
            Operand::Variable(v) => write!(f, "{}", v),
            Operand::Term(term) => write!(f, "{}", term),
            Operand::Polynomial(p) => write!(f, "{}", p),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn x() -> Variable { Variable::named("x") }
    fn y() -> Variable { Variable::named("y") }

    #[test]
    fn a_variable_is_a_term_with_unit_power() {
        let term = Operand::Term(Term::new(vec![(x(), 1)], 1));

        assert_eq!(Operand::Variable(x()), term);
        assert_eq!(term, Operand::Variable(x()));
        assert_ne!(Operand::Variable(y()), term);
    }

    #[test]
    fn single_term_polynomials_equal_their_term() {
        let three_x = Term::new(vec![(x(), 1)], 3);
        let poly = Operand::Polynomial(Polynomial::from(three_x.clone()));

        assert_eq!(poly, three_x);
        assert_eq!(poly, Operand::Term(three_x.clone()));
        assert_eq!(Operand::Term(three_x), poly);
    }

    #[test]
    fn polynomials_compared_against_scalars() {
        let five = Operand::Polynomial(Polynomial::from(5_i64));
        let five_plus_x = Operand::Polynomial(x() + 5_i64);

        assert_eq!(five, 5_i64);
        assert_ne!(five, 6_i64);
        assert_ne!(five_plus_x, 5_i64);
        assert_ne!(Operand::Polynomial(Polynomial::default()), 0_i64);
    }

    #[test]
    fn integers_and_constant_terms() {
        assert_eq!(Operand::Integer(4), Term::constant(4));
        assert_ne!(Operand::Integer(0), Operand::Variable(x()));
    }

    #[test]
    fn compare_against_a_polynomial() {
        let p = x() + y();

        assert_eq!(Operand::Polynomial(y() + x()), p);
        assert_ne!(Operand::Variable(x()), p);
        assert_eq!(Operand::Variable(x()), Polynomial::from(x()));
    }

    #[test]
    fn display() {
        let inputs = vec![
            (Operand::Integer(0), "0"),
            (Operand::Integer(-12), "-12"),
            (Operand::Variable(x()), "x"),
            (Operand::Term(x().pow(2) * 4_i64), "4*x^2"),
            (Operand::Polynomial(x() - 1_i64), "x - 1"),
        ];

        for (operand, should_be) in inputs {
            assert_eq!(operand.to_string(), should_be);
        }
    }
}
