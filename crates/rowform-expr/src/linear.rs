//! Linear expressions: weighted variable terms plus a scalar constant.
//!
//! Terms are stored as submitted. Duplicate ids are allowed; they merge
//! only when an expression is collapsed into a canonical row.

use crate::error::LinearExprError;
use crate::ids::VariableId;

#[derive(Debug, Clone, Default)]
pub struct LinearExpr {
    constant: f64,
    terms: Vec<(VariableId, f64)>,
}

impl LinearExpr {
    /// Empty expression (all zeros).
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// Expression from terms and constant.
    pub fn new(terms: Vec<(VariableId, f64)>, constant: f64) -> Self {
        Self { constant, terms }
    }

    /// Just a constant, no variable terms.
    pub fn from_constant(constant: f64) -> Self {
        Self {
            constant,
            terms: Vec::new(),
        }
    }

    /// Single term: coeff * var.
    pub fn term(var_id: VariableId, coeff: f64) -> Self {
        if coeff == 0.0 {
            return Self::default();
        }
        Self {
            constant: 0.0,
            terms: vec![(var_id, coeff)],
        }
    }

    /// Single variable with coefficient 1.0.
    pub fn var(var_id: VariableId) -> Self {
        Self {
            constant: 0.0,
            terms: vec![(var_id, 1.0)],
        }
    }

    /// From raw terms, no constant.
    pub fn from_terms(terms: Vec<(VariableId, f64)>) -> Self {
        Self {
            constant: 0.0,
            terms,
        }
    }

    pub fn constant(&self) -> f64 {
        self.constant
    }

    pub fn terms(&self) -> &[(VariableId, f64)] {
        &self.terms
    }

    /// Consume and return (terms, constant).
    pub fn into_parts(self) -> (Vec<(VariableId, f64)>, f64) {
        (self.terms, self.constant)
    }

    /// Scale all terms and the constant by a factor.
    pub fn scale(&self, by: f64) -> Self {
        Self {
            constant: self.constant * by,
            terms: self
                .terms
                .iter()
                .map(|(v, c)| (*v, *c * by))
                .filter(|(_, c)| *c != 0.0)
                .collect(),
        }
    }

    /// Add another expression (concatenates terms, sums constants).
    pub fn add(&self, other: &LinearExpr) -> Self {
        let mut terms = Vec::with_capacity(self.terms.len() + other.terms.len());
        terms.extend_from_slice(&self.terms);
        terms.extend_from_slice(&other.terms);
        Self {
            constant: self.constant + other.constant,
            terms,
        }
    }

    /// Add a constant offset.
    pub fn add_constant(&self, value: f64) -> Self {
        Self {
            constant: self.constant + value,
            terms: self.terms.clone(),
        }
    }
}

// ── Operator overloads ──────────────────────────────────────

impl std::ops::Add for LinearExpr {
    type Output = LinearExpr;

    fn add(self, rhs: LinearExpr) -> Self::Output {
        LinearExpr::add(&self, &rhs)
    }
}

impl std::ops::Sub for LinearExpr {
    type Output = LinearExpr;

    fn sub(self, rhs: LinearExpr) -> Self::Output {
        LinearExpr::add(&self, &rhs.scale(-1.0))
    }
}

impl std::ops::Mul<f64> for LinearExpr {
    type Output = LinearExpr;

    fn mul(self, rhs: f64) -> Self::Output {
        self.scale(rhs)
    }
}

impl std::ops::Neg for LinearExpr {
    type Output = LinearExpr;

    fn neg(self) -> Self::Output {
        self.scale(-1.0)
    }
}

// ── Aggregation helpers ─────────────────────────────────────

/// Sum of expressions.
pub fn sum(exprs: impl IntoIterator<Item = LinearExpr>) -> LinearExpr {
    let mut total = LinearExpr::default();
    for expr in exprs {
        total = total.add(&expr);
    }
    total
}

/// Sum of variables, each with coefficient 1.0.
pub fn sum_vars(vars: impl IntoIterator<Item = VariableId>) -> LinearExpr {
    LinearExpr::from_terms(vars.into_iter().map(|v| (v, 1.0)).collect())
}

/// Inner product of variables and coefficients. Zero coefficients are
/// filtered out.
pub fn dot(vars: &[VariableId], coeffs: &[f64]) -> Result<LinearExpr, LinearExprError> {
    if vars.len() != coeffs.len() {
        return Err(LinearExprError::MismatchedLengths);
    }
    Ok(LinearExpr::from_terms(
        vars.iter()
            .copied()
            .zip(coeffs.iter().copied())
            .filter(|(_, c)| *c != 0.0)
            .collect(),
    ))
}
