pub mod registrar;
pub mod voter;

pub use registrar::*;
pub use voter::*;
