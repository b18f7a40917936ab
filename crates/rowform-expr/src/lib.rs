pub mod error;
pub mod ids;
pub mod linear;
pub mod row;

pub use error::LinearExprError;
pub use ids::VariableId;
pub use linear::{LinearExpr, dot, sum, sum_vars};
pub use row::{CanonicalRow, RelOp};
