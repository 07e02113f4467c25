pub mod error;
pub mod record;
pub mod value;

pub use error::{ListError, Result};
pub use record::Record;
pub use value::Value;
