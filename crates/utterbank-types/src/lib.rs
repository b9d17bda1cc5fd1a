pub mod example;
pub mod query;
pub mod signature;

pub use example::*;
pub use query::*;
pub use signature::*;
