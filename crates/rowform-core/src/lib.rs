//! Model-building adapter over pluggable solve engines.
//!
//! [`Model`] owns an [`Engine`](rowform_solver::Engine) and drives it
//! through the declare / constrain / objective / optimize protocol,
//! collapsing two-sided expressions into canonical rows on the way in and
//! decoding raw engine reports into [`Solution`](rowform_solver::Solution)s
//! on the way out.

mod error;
mod model;

pub use error::ModelError;
pub use model::Model;
