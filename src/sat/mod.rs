pub mod assignment;
pub mod clause;
pub mod dpll;
pub mod formula;
pub mod parse;
pub mod trace;
pub mod var;
pub mod workbench;

pub use assignment::Assignments;
pub use clause::Clause;
pub use dpll::{solve, SatResult, Solution, Solver};
pub use formula::Formula;
pub use parse::{clause_lines, parse_clause, parse_formula, ParseError};
pub use trace::{BranchKind, Trace, TraceEvent, TraceStep};
pub use var::{Lit, Var};
pub use workbench::ClauseList;
