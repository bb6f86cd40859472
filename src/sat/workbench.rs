use super::dpll::{Solution, Solver};
use super::parse::{parse_formula, ParseError};

const DEMO_CLAUSES: [&str; 3] = ["(A ∨ B)", "(¬A ∨ C)", "(¬B ∨ ¬C)"];

/// The clause strings a front end edits between solves.
///
/// Text is kept as typed and only parsed when [`ClauseList::solve`] runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClauseList {
    clauses: Vec<String>,
}

impl ClauseList {
    pub fn new() -> Self {
        Self {
            clauses: Vec::new(),
        }
    }

    /// Appends `text` unless it is blank.
    pub fn add(&mut self, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        log::debug!("Adding clause {text:?} at {}", self.clauses.len());
        self.clauses.push(text.to_string());
        true
    }

    pub fn remove(&mut self, index: usize) -> Option<String> {
        if index >= self.clauses.len() {
            return None;
        }
        let removed = self.clauses.remove(index);
        log::debug!("Removed clause {removed:?} from {index}");
        Some(removed)
    }

    pub fn clauses(&self) -> &[String] {
        &self.clauses
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    pub fn solve(&self) -> Result<Solution, ParseError> {
        let formula = parse_formula(&self.clauses)?;
        Ok(Solver::new(formula).run())
    }
}

impl Default for ClauseList {
    fn default() -> Self {
        Self {
            clauses: DEMO_CLAUSES.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl<S: AsRef<str>> Extend<S> for ClauseList {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for text in iter {
            self.add(text.as_ref());
        }
    }
}

#[cfg(test)]
mod workbench_test {
    use super::ClauseList;
    use crate::sat::parse::ParseError;

    #[test]
    fn default_holds_demo_clauses() {
        let list = ClauseList::default();
        assert_eq!(list.clauses(), ["(A ∨ B)", "(¬A ∨ C)", "(¬B ∨ ¬C)"]);
        let solution = list.solve().unwrap();
        assert!(solution.result.is_satisfiable());
    }

    #[test]
    fn blank_clauses_are_ignored() {
        let mut list = ClauseList::new();
        assert!(!list.add("   "));
        assert!(list.add("  (A)  "));
        assert_eq!(list.clauses(), ["(A)"]);
    }

    #[test]
    fn remove_by_index() {
        let mut list = ClauseList::default();
        assert_eq!(list.remove(1), Some("(¬A ∨ C)".to_string()));
        assert_eq!(list.len(), 2);
        assert_eq!(list.remove(5), None);
        assert_eq!(list.clauses(), ["(A ∨ B)", "(¬B ∨ ¬C)"]);
    }

    #[test]
    fn edits_between_solves() {
        let mut list = ClauseList::new();
        list.extend(["(A ∨ B)", "(¬A)"]);
        assert!(list.solve().unwrap().result.is_satisfiable());

        list.add("(¬B)");
        assert!(!list.solve().unwrap().result.is_satisfiable());

        list.remove(2);
        assert!(list.solve().unwrap().result.is_satisfiable());
    }

    #[test]
    fn malformed_clause_stops_solve() {
        let mut list = ClauseList::new();
        list.add("(A)");
        list.add("(A ∨ ¬)");
        match list.solve() {
            Err(ParseError::Clause { index, .. }) => assert_eq!(index, 1),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn empty_list_is_satisfiable() {
        let solution = ClauseList::new().solve().unwrap();
        assert!(solution.result.assignment().unwrap().is_empty());
    }
}
