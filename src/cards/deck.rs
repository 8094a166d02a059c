use super::card::Card;
use super::hole::Hole;
use super::rank::Rank;
use super::suit::Suit;
use crate::error::Error;
use rand::Rng;

/// The cards nobody holds yet.
///
/// Starts as the 52-card standard deck. Cards leave it by name via
/// [`Deck::remove`] or at random via [`Deck::draw`]. Random draws pick an
/// index and swap-remove it, so a draw costs the same whatever has been
/// dealt before. Cloning yields a fully independent deck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck(Vec<Card>);

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// A fresh standard deck, suit by suit, Two through Ace.
    pub fn new() -> Self {
        Self(
            Suit::all()
                .into_iter()
                .flat_map(|s| Rank::all().into_iter().map(move |r| Card::from((r, s))))
                .collect(),
        )
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn contains(&self, card: &Card) -> bool {
        self.0.contains(card)
    }
    pub fn cards(&self) -> &[Card] {
        &self.0
    }

    /// Removes a specific card. Asking for a card that was already dealt
    /// is a caller bug, reported as [`Error::NotFound`].
    pub fn remove(&mut self, card: Card) -> Result<(), Error> {
        let i = self
            .0
            .iter()
            .position(|c| *c == card)
            .ok_or(Error::NotFound(card))?;
        self.0.swap_remove(i);
        Ok(())
    }

    /// Removes and returns a uniformly random card.
    pub fn draw(&mut self) -> Result<Card, Error> {
        self.draw_with(&mut rand::rng())
    }
    pub fn draw_with<R: Rng>(&mut self, rng: &mut R) -> Result<Card, Error> {
        match self.0.len() {
            0 => Err(Error::EmptyDeck),
            n => {
                let card = self.0.swap_remove(rng.random_range(0..n));
                log::trace!("drew {} ({} left)", card, self.0.len());
                Ok(card)
            }
        }
    }

    /// Deals two cards as a player's hole cards.
    pub fn hole(&mut self) -> Result<Hole, Error> {
        let a = self.draw()?;
        let b = self.draw()?;
        Hole::try_from((a, b))
    }
}

impl std::fmt::Display for Deck {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for card in self.0.iter() {
            write!(f, "{} ", card)?;
        }
        Ok(())
    }
}
