pub mod game;
pub mod summary;

pub use game::*;
pub use summary::*;
