use crate::{ops::AlgebraError, Operand, Term};
use smol_str::SmolStr;
use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

/// A named symbol which can appear in a [`Term`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Variable(SmolStr);

impl Variable {
    /// Create a [`Variable`] without validating the name.
    ///
    /// Callers are expected to have normalized the name to lowercase. Use
    /// [`str::parse()`] when the name comes from the outside world.
    pub fn named<S: Into<SmolStr>>(name: S) -> Self { Variable(name.into()) }

    pub fn name(&self) -> &str { &self.0 }

    /// Raise the variable to an integer power, `x^n`.
    pub fn pow(self, power: u32) -> Term { Term::new(vec![(self, power)], 1) }

    /// `dx/dx = 1`, and everything else is constant.
    pub fn derivative(&self, param: &Variable) -> Operand {
        if self == param {
            Operand::Integer(1)
        } else {
            Operand::Integer(0)
        }
    }
}

impl FromStr for Variable {
    type Err = AlgebraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase();
        let mut chars = name.chars();

        let valid = match chars.next() {
            Some(first) => {
                (first.is_alphabetic() || first == '_')
                    && chars.all(|c| c.is_alphanumeric() || c == '_')
            },
            None => false,
        };

        if valid {
            Ok(Variable::named(name))
        } else {
            Err(AlgebraError::InvalidVariableName { name: s.into() })
        }
    }
}

impl Display for Variable {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
