pub mod counts;
pub mod todo;

pub use counts::*;
pub use todo::*;
