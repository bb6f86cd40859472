use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Var {
    name: String,
}

impl Var {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn get_name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A variable together with its polarity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Lit {
    negated: bool,
    var: Var,
}

impl Lit {
    pub fn pos(var: Var) -> Self {
        Self {
            var,
            negated: false,
        }
    }

    pub fn neg(var: Var) -> Self {
        Self { var, negated: true }
    }

    pub fn get_var(&self) -> &Var {
        &self.var
    }

    pub fn get_name(&self) -> &str {
        self.var.get_name()
    }

    pub fn is_negated(&self) -> bool {
        self.negated
    }

    /// The value the variable must take for this literal to hold.
    pub fn satisfying_value(&self) -> bool {
        !self.negated
    }

    /// Evaluates the literal under a value for its variable.
    pub fn eval(&self, value: bool) -> bool {
        value != self.negated
    }

    pub fn complement(&self) -> Self {
        Self {
            var: self.var.clone(),
            negated: !self.negated,
        }
    }

    pub fn is_complement_of(&self, other: &Lit) -> bool {
        self.var == other.var && self.negated != other.negated
    }
}

impl fmt::Display for Lit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negated {
            write!(f, "¬{}", self.var)
        } else {
            write!(f, "{}", self.var)
        }
    }
}
