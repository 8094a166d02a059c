use crate::cards::Card;

/// Contract violations surfaced by the card model, evaluator and simulation.
///
/// None of these are retried internally. A caller that sees one has handed
/// the engine a state that cannot exist in a real deal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("card {0} is not in the deck")]
    NotFound(Card),
    #[error("cannot draw from an empty deck")]
    EmptyDeck,
    #[error("card {0} is already in play")]
    DuplicateCard(Card),
    #[error("need at least 5 cards to score a hand, got {0}")]
    InsufficientCards(usize),
    #[error("at most 5 community cards, got {0}")]
    BoardOverflow(usize),
    #[error("need at least one iteration")]
    NoIterations,
    #[error("invalid rank: {0}")]
    InvalidRank(String),
    #[error("invalid suit: {0}")]
    InvalidSuit(String),
    #[error("invalid card: {0}")]
    InvalidCard(String),
    #[error("hole needs exactly 2 cards, got {0}")]
    HoleSize(usize),
}

pub type Result<T> = std::result::Result<T, Error>;
