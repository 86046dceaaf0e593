//! Typed responses returned by object-level operations.

mod object;

pub use object::{GetObjectResult, HeadObjectResult};
