pub mod coercion;
mod value;

pub use coercion::coerce_f64;
pub use value::{NumericValue, Value};
