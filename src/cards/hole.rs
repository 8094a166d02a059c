use super::card::Card;
use crate::Arbitrary;
use crate::error::Error;

/// A player's two private cards. Always two distinct cards.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct Hole(Card, Card);

impl Hole {
    pub fn cards(&self) -> [Card; 2] {
        [self.0, self.1]
    }
    pub fn contains(&self, card: &Card) -> bool {
        self.0 == *card || self.1 == *card
    }
    pub fn nice(&self) -> String {
        format!("{} {}", self.0.nice(), self.1.nice())
    }
}

impl TryFrom<(Card, Card)> for Hole {
    type Error = Error;
    fn try_from((a, b): (Card, Card)) -> Result<Self, Self::Error> {
        if a == b {
            Err(Error::DuplicateCard(b))
        } else {
            Ok(Self(a, b))
        }
    }
}

impl TryFrom<&[Card]> for Hole {
    type Error = Error;
    fn try_from(cards: &[Card]) -> Result<Self, Self::Error> {
        match cards {
            [a, b] => Self::try_from((*a, *b)),
            _ => Err(Error::HoleSize(cards.len())),
        }
    }
}

/// str isomorphism, e.g. "AH AS"
impl TryFrom<&str> for Hole {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::try_from(Card::parse(s)?.as_slice())
    }
}

impl Arbitrary for Hole {
    fn random() -> Self {
        let a = Card::random();
        let b = std::iter::repeat_with(Card::random)
            .find(|b| *b != a)
            .unwrap_or(a);
        Self(a, b)
    }
}

impl std::fmt::Display for Hole {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {}", self.0, self.1)
    }
}
