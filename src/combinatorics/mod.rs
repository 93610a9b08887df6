pub mod combinations;
pub use combinations::*;

pub mod mask;
pub use mask::*;

pub mod selector;
pub use selector::*;
