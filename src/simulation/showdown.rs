use crate::cards::Board;
use crate::cards::Card;
use crate::cards::Deck;
use crate::cards::Hole;
use crate::error::Error;
use crate::evaluation::Evaluator;
use crate::evaluation::Score;

/// A fully dealt table: five community cards and two cards per opponent.
///
/// Only produced by [`Calculator::assign`]. All that is left to do is
/// decide whether the player won.
///
/// [`Calculator::assign`]: super::calculator::Calculator::assign
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Showdown {
    hole: Hole,
    board: Board,
    villains: Vec<Hole>,
    deck: Deck,
}

impl Showdown {
    pub(crate) fn new(hole: Hole, board: Board, villains: Vec<Hole>, deck: Deck) -> Self {
        Self {
            hole,
            board,
            villains,
            deck,
        }
    }

    /// True iff the player's best five beat every opponent's best five.
    /// A tie with anyone is a loss. With no opponents the player always wins.
    pub fn is_winning(&self) -> Result<bool, Error> {
        let hero = self.strength(&self.hole)?;
        let best = self
            .villains
            .iter()
            .map(|villain| self.strength(villain))
            .collect::<Result<Vec<_>, _>>()?
            .into_iter()
            .max();
        Ok(best.is_none_or(|villain| hero > villain))
    }

    fn strength(&self, hole: &Hole) -> Result<Score, Error> {
        let cards = hole
            .cards()
            .into_iter()
            .chain(self.board.cards().iter().copied())
            .collect::<Vec<Card>>();
        Evaluator::from(cards.as_slice()).score()
    }

    pub fn opponents(&self) -> usize {
        self.villains.len()
    }
    pub fn hole(&self) -> &Hole {
        &self.hole
    }
    pub fn board(&self) -> &Board {
        &self.board
    }
    pub fn villains(&self) -> &[Hole] {
        &self.villains
    }
    pub fn deck(&self) -> &Deck {
        &self.deck
    }
}

impl std::fmt::Display for Showdown {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} ~ {}", self.hole, self.board)?;
        for villain in self.villains.iter() {
            write!(f, " | {}", villain)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn showdown(hole: &str, board: &str, villains: &[&str]) -> Showdown {
        let hole = Hole::try_from(hole).unwrap();
        let cards = Card::parse(board).unwrap();
        let board = Board::try_from(cards.as_slice()).unwrap();
        let villains = villains
            .iter()
            .map(|v| Hole::try_from(*v).unwrap())
            .collect::<Vec<_>>();
        let mut deck = Deck::new();
        hole.cards()
            .into_iter()
            .chain(board.cards().iter().copied())
            .chain(villains.iter().flat_map(|v| v.cards()))
            .for_each(|c| deck.remove(c).unwrap());
        Showdown::new(hole, board, villains, deck)
    }

    #[test]
    fn better_hand_wins() {
        let s = showdown("AH AS", "2C 7D 9H JC 3S", &["KH KS"]);
        assert!(s.is_winning().unwrap());
    }

    #[test]
    fn worse_hand_loses() {
        let s = showdown("KH KS", "2C 7D 9H JC 3S", &["AH AS"]);
        assert!(!s.is_winning().unwrap());
    }

    #[test]
    fn ties_lose() {
        let s = showdown("2H 3S", "AH KH QH JH TH", &["4C 5D"]);
        assert!(!s.is_winning().unwrap());
    }

    #[test]
    fn must_beat_every_opponent() {
        let s = showdown("KH KS", "2C 7D 9H JC 3S", &["QH QS", "AH AS", "4D 5D"]);
        assert!(!s.is_winning().unwrap());
    }

    #[test]
    fn nobody_to_beat() {
        let s = showdown("2H 7S", "AH KH QH JH 9C", &[]);
        assert!(s.is_winning().unwrap());
        assert_eq!(s.opponents(), 0);
    }

    #[test]
    fn kicker_decides() {
        let s = showdown("AH KD", "AS 7D 9H JC 3S", &["AC QD"]);
        assert!(s.is_winning().unwrap());
    }

    #[test]
    fn dealt_cards_are_distinct_and_conserved() {
        let hole = Hole::try_from("AH AS").unwrap();
        let board = Card::parse("KD KC").unwrap();
        for _ in 0..100 {
            let s = crate::simulation::Calculator::new(4, hole, &board)
                .unwrap()
                .assign()
                .unwrap();
            let mut seen = s
                .hole()
                .cards()
                .into_iter()
                .chain(s.board().cards().iter().copied())
                .chain(s.villains().iter().flat_map(|v| v.cards()))
                .chain(s.deck().cards().iter().copied())
                .collect::<Vec<Card>>();
            assert!(s.board().is_full());
            assert_eq!(seen.len(), 52);
            seen.sort();
            seen.dedup();
            assert_eq!(seen.len(), 52);
        }
    }

    #[test]
    fn display_lists_every_seat() {
        let s = showdown("AH KD", "AS 7D 9H JC 3S", &["AC QD"]);
        assert_eq!(s.to_string(), "AH KD ~ AS 7D 9H JC 3S | AC QD");
    }
}
