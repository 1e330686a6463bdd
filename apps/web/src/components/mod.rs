pub mod icons;
pub mod navbar;

pub use icons::*;
pub use navbar::*;
