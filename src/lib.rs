//! A DPLL satisfiability solver that records every decision it makes.
//!
//! Clauses are read from text such as `(A ∨ ¬B)`, solved by unit propagation
//! and backtracking, and returned together with a [`sat::Trace`] that can be
//! replayed step by step.
//!
//! ```
//! use dpll_trace::sat::{parse_formula, solve};
//!
//! let formula = parse_formula(["(A ∨ B)", "(¬A)"]).unwrap();
//! let solution = solve(&formula);
//! assert!(solution.result.is_satisfiable());
//! print!("{}", solution.trace);
//! ```

pub mod sat;
