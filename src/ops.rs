//! [`Operand`] operations.
//!
//! These work on any combination of integers, variables, terms and
//! polynomials, picking the narrowest result type the same way the typed
//! operator overloads do.
//!
//! Unlike the operators, coefficient and exponent arithmetic here is checked
//! and overflow comes back as [`AlgebraError::Overflow`].

use crate::{Operand, OperandKind, Term, Variable};
use smol_str::SmolStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AlgebraError {
    #[error("Unable to multiply a {left} by a {right}")]
    UnsupportedOperandKind {
        left: OperandKind,
        right: OperandKind,
    },
    #[error("\"{name}\" is not a valid variable name")]
    InvalidVariableName { name: SmolStr },
    #[error("Integer overflow while trying to {operation}")]
    Overflow { operation: &'static str },
}

/// Add two operands.
///
/// Integers are summed directly, everything else becomes a
/// [`Polynomial`](crate::Polynomial) containing the terms of both sides.
pub fn add(left: Operand, right: Operand) -> Result<Operand, AlgebraError> {
    match (left, right) {
        (Operand::Integer(l), Operand::Integer(r)) => l
            .checked_add(r)
            .map(Operand::Integer)
            .ok_or(AlgebraError::Overflow { operation: "add" }),
        (left, right) => {
            let sum = left.into_polynomial() + right.into_polynomial();
            Ok(Operand::Polynomial(sum))
        },
    }
}

/// Subtract one operand from another, `left + right * -1`.
pub fn subtract(
    left: Operand,
    right: Operand,
) -> Result<Operand, AlgebraError> {
    let overflow = AlgebraError::Overflow {
        operation: "subtract",
    };

    match (left, right) {
        (Operand::Integer(l), Operand::Integer(r)) => {
            l.checked_sub(r).map(Operand::Integer).ok_or(overflow)
        },
        (left, right) => {
            let negated = right
                .into_polynomial()
                .multiply(Term::constant(-1))
                .map_err(|_| overflow)?;
            add(left, Operand::Polynomial(negated))
        },
    }
}

/// Multiply two operands.
///
/// A polynomial on the left distributes over whatever is on the right, while
/// integers, variables and terms multiply into a single [`Term`]. Only a
/// polynomial can be multiplied by a polynomial.
pub fn multiply(
    left: Operand,
    right: Operand,
) -> Result<Operand, AlgebraError> {
    let got = match (left, right) {
        (Operand::Integer(l), Operand::Integer(r)) => l
            .checked_mul(r)
            .map(Operand::Integer)
            .ok_or(AlgebraError::Overflow {
                operation: "multiply",
            })?,
        (Operand::Polynomial(p), right) => {
            Operand::Polynomial(p.multiply(right.into_polynomial())?)
        },
        (left, Operand::Polynomial(_)) => {
            return Err(AlgebraError::UnsupportedOperandKind {
                left: left.kind(),
                right: OperandKind::Polynomial,
            });
        },
        (left, right) => {
            Operand::Term(into_term(left).multiply(into_term(right))?)
        },
    };

    Ok(got)
}

fn into_term(operand: Operand) -> Term {
    match operand {
        Operand::Integer(value) => Term::constant(value),
        Operand::Variable(v) => Term::from(v),
        Operand::Term(term) => term,
        Operand::Polynomial(_) => {
            unreachable!("Polynomials are handled by the caller")
        },
    }
}

/// Calculate an [`Operand`]'s partial derivative with respect to a
/// particular [`Variable`].
pub fn partial_derivative(
    operand: &Operand,
    param: &Variable,
) -> Result<Operand, AlgebraError> {
    match operand {
        Operand::Integer(_) => Ok(Operand::Integer(0)),
        Operand::Variable(v) => Ok(v.derivative(param)),
        Operand::Term(term) => term.derivative(param),
        Operand::Polynomial(p) => p.derivative(param),
    }
}

/// Sum a list of operands, returning `0` when there are none.
pub fn sum<I>(operands: I) -> Result<Operand, AlgebraError>
where
    I: IntoIterator<Item = Operand>,
{
    let total = operands.into_iter().try_fold(None, |acc, operand| {
        let next = match acc {
            None => operand,
            Some(acc) => add(acc, operand)?,
        };
        Ok::<_, AlgebraError>(Some(next))
    })?;

    Ok(total.unwrap_or(Operand::Integer(0)))
}
