pub mod amount;
pub mod batch;
pub mod csv;
pub mod model;
pub mod thai;

pub use amount::{Amount, AmountError};
pub use model::Conversion;
pub use thai::{convert_currency, convert_integer};
