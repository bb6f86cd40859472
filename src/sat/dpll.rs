use std::fmt;

use super::assignment::Assignments;
use super::formula::Formula;
use super::trace::{BranchKind, Trace, TraceEvent};
use super::var::Var;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SatResult {
    /// Every variable of the formula mapped to a value satisfying all clauses.
    Satisfiable(Assignments),
    Unsatisfiable,
}

impl SatResult {
    pub fn is_satisfiable(&self) -> bool {
        matches!(self, SatResult::Satisfiable(_))
    }

    pub fn assignment(&self) -> Option<&Assignments> {
        match self {
            SatResult::Satisfiable(assignments) => Some(assignments),
            SatResult::Unsatisfiable => None,
        }
    }
}

impl fmt::Display for SatResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SatResult::Satisfiable(_) => f.write_str("SATISFIABLE"),
            SatResult::Unsatisfiable => f.write_str("UNSATISFIABLE"),
        }
    }
}

/// The outcome of a solve and the decisions that led to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub result: SatResult,
    pub trace: Trace,
}

/// Some clause has every literal false.
#[derive(Debug)]
struct Conflict;

#[derive(Debug, Clone)]
pub struct Solver {
    all_vars: Vec<Var>,
    formula: Formula,
}

impl Solver {
    pub fn new(formula: Formula) -> Self {
        let all_vars = formula.variables();
        log::debug!(
            "Solver over {} clauses ({} tautologies) and {} variables",
            formula.len(),
            formula.clauses.iter().filter(|c| c.is_tautology()).count(),
            all_vars.len()
        );
        Self { all_vars, formula }
    }

    pub fn formula(&self) -> &Formula {
        &self.formula
    }

    /// Variables in the order branching considers them.
    pub fn variables(&self) -> &[Var] {
        &self.all_vars
    }

    fn get_next_to_assign(&self, assignments: &Assignments) -> Option<&Var> {
        self.all_vars
            .iter()
            .find(|var| !assignments.is_assigned(var))
    }

    /// Assigns unit clauses until a full pass over the clauses changes nothing.
    fn unit_prop(
        &self,
        assignments: &mut Assignments,
        depth: usize,
        trace: &mut Trace,
    ) -> Result<(), Conflict> {
        let mut changed = true;
        while changed {
            changed = false;
            for clause in self.formula.clauses.iter() {
                if clause.is_satisfied(assignments) {
                    continue;
                }
                let unit = match clause.unassigned(assignments).as_slice() {
                    [] => {
                        log::debug!("Clause {clause} is falsified");
                        trace.record(depth, TraceEvent::Conflict);
                        return Err(Conflict);
                    }
                    [lit] => (*lit).clone(),
                    _ => continue,
                };
                let value = unit.satisfying_value();
                log::trace!("Clause {clause} forces {unit}");
                assignments.assign(unit.get_var().clone(), value);
                trace.record(
                    depth,
                    TraceEvent::UnitPropagation {
                        variable: unit.get_var().clone(),
                        value,
                    },
                );
                changed = true;
            }
        }
        Ok(())
    }

    fn dpll(
        &self,
        mut assignments: Assignments,
        depth: usize,
        trace: &mut Trace,
    ) -> Option<Assignments> {
        if self.unit_prop(&mut assignments, depth, trace).is_err() {
            return None;
        }

        if self.formula.is_satisfied(&assignments) {
            trace.record(depth, TraceEvent::AllSatisfied);
            return Some(assignments);
        }

        let Some(to_assign) = self.get_next_to_assign(&assignments) else {
            log::debug!("Every variable assigned but the formula is unsatisfied");
            return None;
        };

        trace.record(
            depth,
            TraceEvent::Branch {
                variable: to_assign.clone(),
                value: true,
                kind: BranchKind::Try,
            },
        );
        if let Some(found) = self.dpll(assignments.with(to_assign.clone(), true), depth + 1, trace)
        {
            return Some(found);
        }

        trace.record(
            depth,
            TraceEvent::Branch {
                variable: to_assign.clone(),
                value: false,
                kind: BranchKind::Backtrack,
            },
        );
        self.dpll(assignments.with(to_assign.clone(), false), depth + 1, trace)
    }

    pub fn run(&self) -> Solution {
        let mut trace = Trace::new();
        let result = match self.dpll(Assignments::new(), 0, &mut trace) {
            Some(assignments) => {
                let unbound = self.all_vars.len() - assignments.len();
                if unbound > 0 {
                    log::debug!("Completing {unbound} unconstrained variables with false");
                }
                SatResult::Satisfiable(assignments.complete(&self.all_vars, false))
            }
            None => SatResult::Unsatisfiable,
        };
        log::debug!("Finished with {result} after {} steps", trace.len());
        Solution { result, trace }
    }
}

pub fn solve(formula: &Formula) -> Solution {
    Solver::new(formula.clone()).run()
}
