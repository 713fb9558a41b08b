mod command;
mod error;
mod query;
mod types;

pub use command::*;
pub use error::*;
pub use query::*;
pub use types::*;
