use super::showdown::Showdown;
use crate::Arbitrary;
use crate::Probability;
use crate::cards::Board;
use crate::cards::Card;
use crate::cards::Deck;
use crate::cards::Hole;
use crate::error::Error;
use rayon::prelude::*;

/// What one player knows before the hidden cards are dealt.
///
/// Holds the opponent count, the player's hole cards, the community cards
/// revealed so far and every card nobody has seen. Known cards can be added
/// with [`Calculator::update`]. [`Calculator::assign`] consumes the
/// calculator to deal out the rest, so a dealt table can never be updated
/// or dealt a second time.
///
/// Cloning is a deep copy. [`Calculator::equity`] relies on that to run
/// each trial on its own copy without touching the original.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Calculator {
    opponents: usize,
    hole: Hole,
    board: Board,
    deck: Deck,
}

impl Calculator {
    pub fn new(opponents: usize, hole: Hole, board: &[Card]) -> Result<Self, Error> {
        let board = Board::try_from(board)?;
        let mut deck = Deck::new();
        for card in hole.cards().into_iter().chain(board.cards().iter().copied()) {
            deck.remove(card).map_err(|_| Error::DuplicateCard(card))?;
        }
        log::debug!(
            "new calculator: {} vs {} opponents, board [{}]",
            hole,
            opponents,
            board
        );
        Ok(Self {
            opponents,
            hole,
            board,
            deck,
        })
    }

    /// Replaces the opponent count and reveals more community cards.
    ///
    /// Either every card is accepted or the calculator is left untouched.
    pub fn update(&mut self, opponents: usize, cards: &[Card]) -> Result<(), Error> {
        let total = self.board.len() + cards.len();
        if total > crate::BOARD_SIZE {
            return Err(Error::BoardOverflow(total));
        }
        for (i, card) in cards.iter().enumerate() {
            if !self.deck.contains(card) || cards[..i].contains(card) {
                return Err(Error::DuplicateCard(*card));
            }
        }
        for card in cards.iter().copied() {
            self.deck.remove(card)?;
            self.board.push(card)?;
        }
        self.opponents = opponents;
        log::debug!(
            "updated calculator: {} opponents, board [{}]",
            self.opponents,
            self.board
        );
        Ok(())
    }

    /// Draws one uniformly random unseen card.
    pub fn draw(&mut self) -> Result<Card, Error> {
        self.deck.draw()
    }

    /// Deals the hidden cards: the board up to five, then two per opponent.
    pub fn assign(mut self) -> Result<Showdown, Error> {
        while !self.board.is_full() {
            let card = self.draw()?;
            self.board.push(card)?;
        }
        let villains = (0..self.opponents)
            .map(|_| self.deck.hole())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Showdown::new(self.hole, self.board, villains, self.deck))
    }

    /// Fraction of `iterations` random deals that the player wins outright.
    ///
    /// Trials are independent and run on the rayon pool, each on its own
    /// clone. The calculator itself is not modified.
    pub fn equity(&self, iterations: usize) -> Result<Probability, Error> {
        if iterations == 0 {
            return Err(Error::NoIterations);
        }
        let wins = (0..iterations)
            .into_par_iter()
            .map(|_| self.trial())
            .try_reduce(|| 0, |a, b| Ok(a + b))?;
        log::debug!(
            "{} won {}/{} trials against {} opponents",
            self.hole,
            wins,
            iterations,
            self.opponents
        );
        Ok(wins as Probability / iterations as Probability)
    }

    fn trial(&self) -> Result<usize, Error> {
        self.clone()
            .assign()?
            .is_winning()
            .map(|won| won as usize)
    }

    pub fn opponents(&self) -> usize {
        self.opponents
    }
    pub fn hole(&self) -> &Hole {
        &self.hole
    }
    pub fn board(&self) -> &Board {
        &self.board
    }
    pub fn deck(&self) -> &Deck {
        &self.deck
    }
}

impl Arbitrary for Calculator {
    fn random() -> Self {
        let opponents = rand::random_range(0..=crate::MAX_OPPONENTS);
        let revealed = rand::random_range(0..=crate::BOARD_SIZE);
        let mut calc =
            Self::new(opponents, Hole::random(), &[]).expect("hole cards are distinct");
        for _ in 0..revealed {
            let card = calc.draw().expect("fresh deck has cards to spare");
            calc.board.push(card).expect("board has room");
        }
        calc
    }
}
