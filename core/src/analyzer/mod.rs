//! Static type checking of whole trees.
//!
//! A tree is well-typed when every node's `infer_return_type` succeeds on the
//! types inferred for its children. Checking never evaluates anything, so it
//! can run on trees whose variables are still unbound.

pub mod analyzer;
pub mod error;


pub use analyzer::{analyze, analyze_with_options, is_well_typed};
pub use error::TypeError;
