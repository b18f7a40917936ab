//! Canonical row form: the single-sided sparse shape an engine ingests.
//!
//! A two-sided comparison `lhs (op) rhs` collapses into one net coefficient
//! per variable and a single scalar moved to the right-hand side:
//! `sum(net_i * x_i) (op) constant` with `constant = rhs.constant - lhs.constant`.

use std::collections::BTreeMap;

use crate::ids::VariableId;
use crate::linear::LinearExpr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelOp {
    Equal,
    LessOrEqual,
    GreaterOrEqual,
}

impl RelOp {
    /// Parse the wire sense character. Unknown characters yield `None`.
    pub fn from_char(sense: char) -> Option<Self> {
        match sense {
            '=' => Some(RelOp::Equal),
            '<' => Some(RelOp::LessOrEqual),
            '>' => Some(RelOp::GreaterOrEqual),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            RelOp::Equal => '=',
            RelOp::LessOrEqual => '<',
            RelOp::GreaterOrEqual => '>',
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RelOp::Equal => "eq",
            RelOp::LessOrEqual => "le",
            RelOp::GreaterOrEqual => "ge",
        }
    }

    /// Rendering symbol for diagnostics.
    pub fn symbol(self) -> &'static str {
        match self {
            RelOp::Equal => "=",
            RelOp::LessOrEqual => "<=",
            RelOp::GreaterOrEqual => ">=",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CanonicalRow {
    entries: Vec<(VariableId, f64)>,
    constant: f64,
}

impl CanonicalRow {
    /// Collapse a two-sided comparison into canonical row form.
    ///
    /// Left-hand terms add into the net coefficient, right-hand terms
    /// subtract; duplicate ids within either side merge the same way. The
    /// row constant is `rhs.constant - lhs.constant` exactly. Entries come
    /// out in ascending id order; nets that merge to exactly zero are
    /// dropped.
    pub fn from_sides(lhs: &LinearExpr, rhs: &LinearExpr) -> Self {
        let mut net: BTreeMap<VariableId, f64> = BTreeMap::new();
        for (var_id, coeff) in lhs.terms() {
            *net.entry(*var_id).or_insert(0.0) += *coeff;
        }
        for (var_id, coeff) in rhs.terms() {
            *net.entry(*var_id).or_insert(0.0) -= *coeff;
        }

        Self {
            entries: net.into_iter().filter(|(_, c)| *c != 0.0).collect(),
            constant: rhs.constant() - lhs.constant(),
        }
    }

    pub fn entries(&self) -> &[(VariableId, f64)] {
        &self.entries
    }

    pub fn constant(&self) -> f64 {
        self.constant
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Net coefficient for a variable, if present.
    pub fn coefficient(&self, var_id: VariableId) -> Option<f64> {
        self.entries
            .binary_search_by(|(id, _)| id.cmp(&var_id))
            .ok()
            .map(|idx| self.entries[idx].1)
    }
}
