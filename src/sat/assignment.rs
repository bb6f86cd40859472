use std::collections::HashMap;
use std::fmt;

use itertools::Itertools;

use super::var::{Lit, Var};

/// A partial map from variables to truth values.
///
/// Search branches never share one of these: a branch extends its parent's
/// snapshot with [`Assignments::with`], which leaves the parent untouched.
#[derive(Debug, Clone, Default)]
pub struct Assignments {
    values: HashMap<Var, bool>,
    // binding order, for display and iteration
    order: Vec<Var>,
}

impl Assignments {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, var: &Var) -> Option<bool> {
        self.values.get(var).copied()
    }

    /// Value of `lit` under this assignment, `None` while its variable is unassigned.
    pub fn get_assignment(&self, lit: &Lit) -> Option<bool> {
        self.get(lit.get_var()).map(|value| lit.eval(value))
    }

    pub fn is_assigned(&self, var: &Var) -> bool {
        self.values.contains_key(var)
    }

    /// Binds `var` within this snapshot. Rebinding to the same value is a no-op.
    pub(crate) fn assign(&mut self, var: Var, value: bool) {
        match self.values.get(&var) {
            Some(existing) => debug_assert_eq!(
                *existing, value,
                "{var} cannot be both true and false in one assignment"
            ),
            None => {
                self.order.push(var.clone());
                self.values.insert(var, value);
            }
        }
    }

    /// A new snapshot identical to this one plus `var = value`.
    pub fn with(&self, var: Var, value: bool) -> Self {
        let mut next = self.clone();
        next.assign(var, value);
        next
    }

    /// Extends the assignment over `vars`, giving unbound variables `default`.
    /// The result is ordered by `vars`.
    pub fn complete(&self, vars: &[Var], default: bool) -> Self {
        let mut complete = Self::new();
        for var in vars {
            let value = self.get(var).unwrap_or(default);
            complete.assign(var.clone(), value);
        }
        complete
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Var, bool)> {
        self.order.iter().map(|var| (var, self.values[var]))
    }
}

impl PartialEq for Assignments {
    fn eq(&self, other: &Self) -> bool {
        self.values == other.values
    }
}

impl Eq for Assignments {}

impl fmt::Display for Assignments {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self
            .iter()
            .map(|(var, value)| format!("{var} = {value}"))
            .join(", ");
        f.write_str(&rendered)
    }
}

#[cfg(test)]
mod assignment_test {
    use super::Assignments;
    use crate::sat::var::{Lit, Var};

    #[test]
    fn with_leaves_parent_untouched() {
        let var_a = Var::new("a");
        let var_b = Var::new("b");
        let parent = Assignments::new().with(var_a.clone(), true);
        let left = parent.with(var_b.clone(), true);
        let right = parent.with(var_b.clone(), false);

        assert_eq!(parent.get(&var_b), None);
        assert_eq!(left.get(&var_b), Some(true));
        assert_eq!(right.get(&var_b), Some(false));
        assert_eq!(left.get(&var_a), Some(true));
        assert_eq!(right.get(&var_a), Some(true));
    }

    #[test]
    fn lit_values() {
        let var_a = Var::new("a");
        let assignments = Assignments::new().with(var_a.clone(), false);
        assert_eq!(assignments.get_assignment(&Lit::pos(var_a.clone())), Some(false));
        assert_eq!(assignments.get_assignment(&Lit::neg(var_a)), Some(true));
        assert_eq!(assignments.get_assignment(&Lit::pos(Var::new("b"))), None);
    }

    #[test]
    fn complete_fills_gaps_in_order() {
        let vars = vec![Var::new("a"), Var::new("b"), Var::new("c")];
        let partial = Assignments::new().with(vars[2].clone(), true);
        let complete = partial.complete(&vars, false);
        assert_eq!(complete.len(), 3);
        assert_eq!(complete.to_string(), "a = false, b = false, c = true");
    }

    #[test]
    fn display_follows_binding_order() {
        let assignments = Assignments::new()
            .with(Var::new("b"), true)
            .with(Var::new("a"), false);
        assert_eq!(assignments.to_string(), "b = true, a = false");
    }
}
