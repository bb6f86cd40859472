use std::fmt;
use std::str::FromStr;

use itertools::Itertools;

use super::assignment::Assignments;
use super::clause::Clause;
use super::parse::{clause_lines, parse_formula, ParseError};
use super::var::Var;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Formula {
    pub clauses: Vec<Clause>,
}

impl Formula {
    pub fn new(clauses: Vec<Clause>) -> Self {
        Self { clauses }
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    pub fn is_satisfied(&self, assignments: &Assignments) -> bool {
        self.clauses
            .iter()
            .all(|clause| clause.is_satisfied(assignments))
    }

    /// Every variable of the formula once, in the order it is first seen
    /// scanning clauses and then literals.
    pub fn variables(&self) -> Vec<Var> {
        self.clauses
            .iter()
            .flat_map(|clause| clause.vars.iter().map(|lit| lit.get_var()))
            .unique()
            .cloned()
            .collect()
    }
}

/// One clause per line. Blank lines and lines starting with `#` are skipped.
impl FromStr for Formula {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_formula(clause_lines(s))
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.clauses.iter().join(" ∧ "))
    }
}
