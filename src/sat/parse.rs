//! Reads clauses written the way people type them, e.g. `(A ∨ ¬B ∨ C)` or
//! `(A | !B | C)`.

use thiserror::Error;

use super::clause::Clause;
use super::formula::Formula;
use super::var::{Lit, Var};

const SEPARATORS: [char; 2] = ['∨', '|'];
const NEGATIONS: [char; 2] = ['¬', '!'];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Nothing left once the parentheses are gone.
    #[error("clause {text:?} has no literals")]
    EmptyClause { text: String },
    /// A literal with no variable name, e.g. the tail of `(A ∨ )`.
    #[error("clause {text:?} has a literal without a variable")]
    EmptyVariable { text: String },
    /// A clause in a list failed to parse.
    #[error("cannot parse clause {}", .index + 1)]
    Clause {
        index: usize,
        #[source]
        source: Box<ParseError>,
    },
}

/// Lines of a clause file that hold clauses: trimmed, without blank lines or
/// `#` comments.
pub fn clause_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
}

pub fn parse_clause(text: &str) -> Result<Clause, ParseError> {
    let cleaned: String = text.chars().filter(|c| *c != '(' && *c != ')').collect();
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return Err(ParseError::EmptyClause {
            text: text.to_string(),
        });
    }

    let mut vars = Vec::new();
    for token in cleaned.split(SEPARATORS).map(str::trim) {
        let negated = token.starts_with(NEGATIONS);
        let name: String = token.chars().filter(|c| !NEGATIONS.contains(c)).collect();
        let name = name.trim();
        if name.is_empty() {
            return Err(ParseError::EmptyVariable {
                text: text.to_string(),
            });
        }
        let var = Var::new(name);
        vars.push(if negated { Lit::neg(var) } else { Lit::pos(var) });
    }
    log::trace!("Parsed {text:?} into {vars:?}");
    Ok(Clause::new(vars))
}

/// Parses clauses in order, stopping at the first one that fails.
pub fn parse_formula<I, S>(lines: I) -> Result<Formula, ParseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let clauses = lines
        .into_iter()
        .enumerate()
        .map(|(index, line)| {
            parse_clause(line.as_ref()).map_err(|err| ParseError::Clause {
                index,
                source: Box::new(err),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    log::debug!("Parsed formula with {} clauses", clauses.len());
    Ok(Formula::new(clauses))
}
