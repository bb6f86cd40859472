use std::fmt;

use super::var::Var;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchKind {
    Try,
    Backtrack,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceEvent {
    UnitPropagation {
        variable: Var,
        value: bool,
    },
    Conflict,
    AllSatisfied,
    Branch {
        variable: Var,
        value: bool,
        kind: BranchKind,
    },
}

impl TraceEvent {
    /// The symbol a rendered trace line starts with, one per kind of event.
    pub fn marker(&self) -> &'static str {
        match self {
            TraceEvent::UnitPropagation { .. } => "📌",
            TraceEvent::Conflict => "❌",
            TraceEvent::AllSatisfied => "✅",
            TraceEvent::Branch { .. } => "🔀",
        }
    }
}

impl fmt::Display for TraceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", self.marker())?;
        match self {
            TraceEvent::UnitPropagation { variable, value } => {
                write!(f, "Unit propagation: {variable} = {value}")
            }
            TraceEvent::Conflict => f.write_str("Conflict detected!"),
            TraceEvent::AllSatisfied => f.write_str("All clauses satisfied!"),
            TraceEvent::Branch {
                variable,
                value,
                kind: BranchKind::Try,
            } => write!(f, "Branching: try {variable} = {value}"),
            TraceEvent::Branch {
                variable,
                value,
                kind: BranchKind::Backtrack,
            } => write!(f, "Backtrack: try {variable} = {value}"),
        }
    }
}

/// An event and the number of branch decisions above it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceStep {
    pub depth: usize,
    pub event: TraceEvent,
}

impl fmt::Display for TraceStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:indent$}{}", "", self.event, indent = self.depth * 2)
    }
}

/// Decisions made during one solve, in the order they were made.
///
/// Only the solver appends to a trace; callers read it once the solve returns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trace {
    steps: Vec<TraceStep>,
}

impl Trace {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record(&mut self, depth: usize, event: TraceEvent) {
        log::debug!("[{depth}] {event}");
        self.steps.push(TraceStep { depth, event });
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TraceStep> {
        self.steps.iter()
    }

    pub fn events(&self) -> impl Iterator<Item = &TraceEvent> {
        self.steps.iter().map(|step| &step.event)
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a TraceStep;
    type IntoIter = std::slice::Iter<'a, TraceStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

impl fmt::Display for Trace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for step in self.steps.iter() {
            writeln!(f, "{step}")?;
        }
        Ok(())
    }
}
