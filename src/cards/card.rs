use super::rank::Rank;
use super::suit::Suit;
use crate::error::Error;

/// A playing card as a `(Rank, Suit)` pair.
///
/// Two cards are the same card iff rank and suit match. Ordering is by
/// rank first, then suit.
///
/// # Text forms
///
/// - `Display` gives the compact two-character code, rank then suit:
///   `"2S"`, `"TD"`, `"AH"`. Used for routing and logs.
/// - [`Card::nice`] gives the symbolic form for people: `"2♠"`, `"10♦"`, `"A♥"`.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    pub fn rank(&self) -> Rank {
        self.rank
    }
    pub fn suit(&self) -> Suit {
        self.suit
    }
    pub fn nice(&self) -> String {
        format!("{}{}", self.rank.nice(), self.suit.glyph())
    }

    /// Parses whitespace-separated compact codes, e.g. `"AH KD 10c"`.
    /// Empty input yields no cards.
    pub fn parse(s: &str) -> Result<Vec<Self>, Error> {
        s.split_whitespace().map(Self::try_from).collect()
    }
}

/// (Rank, Suit) isomorphism
impl From<(Rank, Suit)> for Card {
    fn from((rank, suit): (Rank, Suit)) -> Self {
        Self { rank, suit }
    }
}
impl From<Card> for (Rank, Suit) {
    fn from(card: Card) -> Self {
        (card.rank, card.suit)
    }
}

/// str isomorphism
/// the suit is always the last character; whatever precedes it is the rank
impl TryFrom<&str> for Card {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let s = s.trim();
        let split = s
            .char_indices()
            .last()
            .map(|(i, _)| i)
            .filter(|&i| i > 0)
            .ok_or_else(|| Error::InvalidCard(s.to_string()))?;
        let (rank, suit) = s.split_at(split);
        let rank = Rank::try_from(rank).map_err(|_| Error::InvalidCard(s.to_string()))?;
        let suit = Suit::try_from(suit).map_err(|_| Error::InvalidCard(s.to_string()))?;
        Ok(Self::from((rank, suit)))
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl crate::Arbitrary for Card {
    fn random() -> Self {
        let ranks = Rank::all();
        let suits = Suit::all();
        let rank = ranks[rand::random_range(0..ranks.len())];
        let suit = suits[rand::random_range(0..suits.len())];
        Self::from((rank, suit))
    }
}
