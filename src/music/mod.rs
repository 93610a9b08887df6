pub mod accidental;
pub use accidental::*;

pub mod instrument;
pub use instrument::*;

pub mod note;
pub use note::*;

pub mod orchestra;
pub use orchestra::*;

pub mod pitch;
pub use pitch::*;

pub mod scale;
pub use scale::*;

pub mod signature;
pub use signature::*;

pub mod tag;
pub use tag::*;

pub mod tagger;
pub use tagger::*;

pub mod tone;
pub use tone::*;
