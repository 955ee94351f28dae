pub mod tag;
pub mod task;

pub use tag::*;
pub use task::*;
