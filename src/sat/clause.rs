use std::fmt;

use itertools::Itertools;

use super::assignment::Assignments;
use super::var::Lit;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clause {
    pub vars: Vec<Lit>,
}

impl Clause {
    pub fn new(vars: Vec<Lit>) -> Self {
        Self { vars }
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn is_satisfied(&self, assignments: &Assignments) -> bool {
        self.vars
            .iter()
            .any(|var| assignments.get_assignment(var) == Some(true))
    }

    /// Literals whose variable has no value yet, in clause order.
    pub fn unassigned<'a>(&'a self, assignments: &Assignments) -> Vec<&'a Lit> {
        self.vars
            .iter()
            .filter(|var| !assignments.is_assigned(var.get_var()))
            .collect()
    }

    pub fn get_unit_var(&self, assignments: &Assignments) -> Option<&Lit> {
        if self.is_satisfied(assignments) {
            return None;
        }
        // exactly one unassigned variable in an unsatisfied clause makes it a unit
        match self.unassigned(assignments).as_slice() {
            [lit] => Some(*lit),
            _ => None,
        }
    }

    /// Whether the clause holds a literal and its complement. Search never
    /// needs this; it only feeds diagnostics such as the solver's debug log.
    pub fn is_tautology(&self) -> bool {
        self.vars
            .iter()
            .tuple_combinations()
            .any(|(a, b)| a.is_complement_of(b))
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.vars.iter().join(" ∨ "))
    }
}

#[cfg(test)]
mod clause_test {
    use super::Clause;
    use crate::sat::assignment::Assignments;
    use crate::sat::var::{Lit, Var};

    fn abc() -> (Var, Var, Var, Clause) {
        let var_a = Var::new("a");
        let var_b = Var::new("b");
        let var_c = Var::new("c");
        let clause = Clause::new(vec![
            Lit::pos(var_a.clone()),
            Lit::neg(var_b.clone()),
            Lit::pos(var_c.clone()),
        ]);
        (var_a, var_b, var_c, clause)
    }

    #[test]
    fn satisfied_by_any_true_lit() {
        let (_, var_b, _, clause) = abc();
        assert!(!clause.is_satisfied(&Assignments::new()));
        let assignments = Assignments::new().with(var_b, false);
        assert!(clause.is_satisfied(&assignments));
    }

    #[test]
    fn unit_when_one_unassigned_left() {
        let (var_a, var_b, var_c, clause) = abc();
        let assignments = Assignments::new()
            .with(var_a, false)
            .with(var_b, true);
        assert_eq!(clause.unassigned(&assignments).len(), 1);
        assert_eq!(clause.get_unit_var(&assignments), Some(&Lit::pos(var_c)));
    }

    #[test]
    fn satisfied_clause_is_never_unit() {
        let (var_a, var_b, _, clause) = abc();
        let assignments = Assignments::new().with(var_a, true).with(var_b, true);
        assert_eq!(clause.get_unit_var(&assignments), None);
    }

    #[test]
    fn conflicting_clause_has_nothing_unassigned() {
        let (var_a, var_b, var_c, clause) = abc();
        let assignments = Assignments::new()
            .with(var_a, false)
            .with(var_b, true)
            .with(var_c, false);
        assert!(!clause.is_satisfied(&assignments));
        assert!(clause.unassigned(&assignments).is_empty());
    }

    #[test]
    fn tautology() {
        let var_a = Var::new("a");
        let clause = Clause::new(vec![Lit::pos(var_a.clone()), Lit::neg(var_a)]);
        assert!(clause.is_tautology());
        let (_, _, _, clause) = abc();
        assert!(!clause.is_tautology());
    }

    #[test]
    fn display() {
        let (_, _, _, clause) = abc();
        assert_eq!(clause.to_string(), "(a ∨ ¬b ∨ c)");
    }
}
