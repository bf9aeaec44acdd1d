pub mod identity;
pub mod layout;
pub mod reputation;

pub use identity::*;
pub use layout::*;
pub use reputation::*;
