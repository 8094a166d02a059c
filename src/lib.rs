//! Monte Carlo estimate of a Hold'em player's chance to hold the winning hand.
//!
//! - [`cards`] — `Card`, `Rank`, `Suit`, `Deck`, `Hole`, `Board`
//! - [`evaluation`] — best-five-of-N scoring and hand categories
//! - [`simulation`] — `Calculator` (cards still hidden) and `Showdown` (all dealt)
pub mod cards;
pub mod error;
pub mod evaluation;
pub mod simulation;

pub use error::Error;
pub use error::Result;

/// Win rates and other sampled frequencies.
pub type Probability = f32;

/// Random instance generation for testing and Monte Carlo sampling.
pub trait Arbitrary {
    fn random() -> Self;
}

/// Trials per estimate when the caller has no preference.
pub const ITERATIONS: usize = 1000;
/// Cards in a scored hand.
pub const HAND_SIZE: usize = 5;
/// Community cards on a complete board.
pub const BOARD_SIZE: usize = 5;
/// Most opponents a single deck can serve: (52 - 2 - 5) / 2.
pub const MAX_OPPONENTS: usize = 22;

/// Initialize terminal logging at the given level.
#[cfg(feature = "cli")]
pub fn log(level: log::LevelFilter) {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )
    .expect("initialize logger");
}
