use super::card::Card;
use crate::error::Error;

/// The community cards, in the order they were revealed. Zero to five.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct Board(Vec<Card>);

impl Board {
    pub fn new() -> Self {
        Self(Vec::with_capacity(crate::BOARD_SIZE))
    }
    pub fn push(&mut self, card: Card) -> Result<(), Error> {
        match self.0.len() {
            n if n >= crate::BOARD_SIZE => Err(Error::BoardOverflow(n + 1)),
            _ if self.0.contains(&card) => Err(Error::DuplicateCard(card)),
            _ => {
                self.0.push(card);
                Ok(())
            }
        }
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn is_full(&self) -> bool {
        self.0.len() == crate::BOARD_SIZE
    }
    /// How many cards are still hidden.
    pub fn missing(&self) -> usize {
        crate::BOARD_SIZE - self.0.len()
    }
    pub fn contains(&self, card: &Card) -> bool {
        self.0.contains(card)
    }
    pub fn cards(&self) -> &[Card] {
        &self.0
    }
    pub fn nice(&self) -> String {
        self.0
            .iter()
            .map(Card::nice)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl TryFrom<&[Card]> for Board {
    type Error = Error;
    fn try_from(cards: &[Card]) -> Result<Self, Self::Error> {
        match cards.len() {
            n if n > crate::BOARD_SIZE => Err(Error::BoardOverflow(n)),
            _ => cards.iter().try_fold(Self::new(), |mut board, card| {
                board.push(*card)?;
                Ok(board)
            }),
        }
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let codes = self.0.iter().map(Card::to_string).collect::<Vec<_>>();
        write!(f, "{}", codes.join(" "))
    }
}
