//! Exhaustive enumeration and classification of five-card hands.
//!
//! Every 5-subset of a fixed deck is visited exactly once and labeled,
//! and the labels are accumulated into a histogram. Two decks ship with
//! the crate: the standard 52-card deck ranked by a poker priority chain,
//! and a 105-tone musical deck tagged by independent patterns.

pub mod classify;
pub mod combinatorics;
pub mod domain;
pub mod error;
pub mod histogram;
pub mod music;
pub mod poker;
pub mod predicates;
pub mod progress;
pub mod variant;

pub use error::Error;
pub use error::Result;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and sampling.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// ENUMERATION PARAMETERS
// ============================================================================
/// Cards per hand; every predicate is written for this size.
pub const HAND_SIZE: usize = 5;
/// Progress lines logged over one full enumeration.
pub const PROGRESS_LINES: u128 = 100;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize terminal logging at INFO, or DEBUG when `verbose`.
#[cfg(feature = "cli")]
pub fn log(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let term = simplelog::TermLogger::new(
        level,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term]).expect("initialize logger");
}
