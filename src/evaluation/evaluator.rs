use super::ranking::Ranking;
use super::score::Score;
use super::shape::Shape;
use crate::HAND_SIZE;
use crate::cards::Card;
use crate::error::Error;

/// Best-five-of-N hand evaluator.
///
/// With more than five cards we drop each card in turn, evaluate what is
/// left, and keep the maximum. Recursing down to five cards reaches every
/// five-card subset, so the result is the best hand any subset can make.
/// Hands here never exceed seven cards, which keeps the recursion shallow.
pub struct Evaluator<'a>(&'a [Card]);

impl<'a> From<&'a [Card]> for Evaluator<'a> {
    fn from(cards: &'a [Card]) -> Self {
        Self(cards)
    }
}

impl Evaluator<'_> {
    pub fn score(&self) -> Result<Score, Error> {
        Self::search(self.0).map(|(score, _)| score)
    }
    /// The five cards that make up the best hand.
    pub fn best(&self) -> Result<[Card; 5], Error> {
        Self::search(self.0).map(|(_, five)| five)
    }
    pub fn ranking(&self) -> Result<Ranking, Error> {
        self.best()
            .map(Shape::from)
            .map(|ref shape| Ranking::classify(shape))
    }

    fn search(cards: &[Card]) -> Result<(Score, [Card; 5]), Error> {
        match cards.len() {
            n if n < HAND_SIZE => Err(Error::InsufficientCards(n)),
            HAND_SIZE => {
                let five = <[Card; 5]>::try_from(cards)
                    .map_err(|_| Error::InsufficientCards(cards.len()))?;
                Ok((Score::encode(&Shape::from(five)), five))
            }
            n => (0..n)
                .map(|skip| Self::without(cards, skip))
                .map(|rest| Self::search(&rest))
                .collect::<Result<Vec<_>, _>>()?
                .into_iter()
                .max_by_key(|&(score, _)| score)
                .ok_or(Error::InsufficientCards(n)),
        }
    }

    fn without(cards: &[Card], skip: usize) -> Vec<Card> {
        cards
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != skip)
            .map(|(_, c)| *c)
            .collect()
    }
}

/// Scores the best five-card hand found in `cards`.
pub fn score(cards: &[Card]) -> Result<Score, Error> {
    Evaluator::from(cards).score()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Rank;

    fn eval(s: &str) -> Score {
        score(&Card::parse(s).unwrap()).unwrap()
    }
    fn rank(s: &str) -> Ranking {
        Evaluator::from(Card::parse(s).unwrap().as_slice())
            .ranking()
            .unwrap()
    }

    #[rustfmt::skip]
    const LADDER: [&str; 18] = [
        "AH KH QH JH TH", // high straight flush
        "2H 3H 4H 5H 6H", // low straight flush
        "AH AS AC AD KD", // high quads
        "2H 2S 2C 2D AH", // low quads, high kicker
        "2H 2S 2C 2D 5H", // same quads, low kicker
        "AH AS AC TD TC", // high full house
        "2H 2S 2C AH AD", // low full house, high pair
        "2H 2S 2C 3H 3D", // same trips, low pair
        "2S 4S 9S JS AS", // flush
        "TS JH QS KC AD", // high straight
        "2S 3H 4S 5C 6D", // low straight
        "2S 2H 2D 9H 5C", // trips, high kickers
        "2S 2H 2D 6H 3C", // same trips, lower kickers
        "3S 3H 9D 9H JC", // two pair, nines up
        "3S 3H 7D 7H JC", // two pair, sevens up
        "2S 2H 7D 7H JC", // same high pair, lower low pair
        "2S 2H 7D 7H TC", // same pairs, lower kicker
        "2S 2H 9D TH 5C", // one pair
    ];

    #[test]
    fn ladder_strictly_decreasing() {
        let scores = LADDER.iter().map(|s| eval(s)).collect::<Vec<_>>();
        for (i, pair) in scores.windows(2).enumerate() {
            assert!(pair[0] > pair[1], "{} should beat {}", LADDER[i], LADDER[i + 1]);
        }
    }

    #[test]
    fn ladder_agrees_with_categories() {
        let ranks = LADDER.iter().map(|s| rank(s)).collect::<Vec<_>>();
        for pair in ranks.windows(2) {
            assert!(pair[0] >= pair[1]);
        }
    }

    #[test]
    fn too_few_cards() {
        let cards = Card::parse("AH KH QH JH").unwrap();
        assert_eq!(score(&cards), Err(Error::InsufficientCards(4)));
        assert_eq!(score(&[]), Err(Error::InsufficientCards(0)));
    }

    #[test]
    fn wheel_sits_between_trips_and_six_high() {
        let wheel = eval("AS 2H 3D 4C 5S");
        assert!(wheel > eval("AS AH AD KC QS"));
        assert!(wheel < eval("6S 2H 3D 4C 5S"));
        assert!(eval("AS 2S 3S 4S 5S") > eval("AS AH AD AC KS"));
        assert!(eval("AS 2S 3S 4S 5S") < eval("6S 2S 3S 4S 5S"));
    }

    #[test]
    fn seven_cards_pick_best_five() {
        assert_eq!(rank("AS AH KD KC QS JH 9D"), Ranking::TwoPair(Rank::Ace, Rank::King));
        assert_eq!(eval("AS AH KD KC QS JH 9D"), eval("AS AH KD KC QS"));
    }

    #[test]
    fn best_five_may_omit_the_last_card() {
        // the only flush uses the first five; the last two cards add nothing
        let seven = eval("2H 5H 8H JH KH AS 3C");
        assert_eq!(seven, eval("2H 5H 8H JH KH"));
        // the last card is the one that spoils the straight
        let six = eval("6S 7H 8D 9C TS 2C");
        assert_eq!(six, eval("6S 7H 8D 9C TS"));
    }

    #[test]
    fn flush_over_straight() {
        assert_eq!(rank("4H 6H 7H 8H 9H TS"), Ranking::Flush(Rank::Nine));
    }

    #[test]
    fn full_house_over_flush() {
        assert_eq!(rank("KH AH AD AS KS QS JS 9S"), Ranking::FullHouse(Rank::Ace, Rank::King));
    }

    #[test]
    fn four_oak_over_full_house() {
        assert_eq!(rank("AS AH AD AC KS KH QD"), Ranking::FourOAK(Rank::Ace));
    }

    #[test]
    fn two_trips_make_a_full_house() {
        assert_eq!(rank("AS AH AD KC KS KH QD"), Ranking::FullHouse(Rank::Ace, Rank::King));
    }

    #[test]
    fn three_pair_keeps_best_kicker() {
        assert_eq!(rank("AS AH KD KC QS QH JD"), Ranking::TwoPair(Rank::Ace, Rank::King));
        assert_eq!(eval("AS AH KD KC QS QH JD"), eval("AS AH KD KC QS"));
    }

    #[test]
    fn best_returns_five_cards_of_the_input() {
        let cards = Card::parse("AS AH KD KC QS JH 9D").unwrap();
        let best = Evaluator::from(cards.as_slice()).best().unwrap();
        assert!(best.iter().all(|c| cards.contains(c)));
    }

    #[test]
    fn order_of_input_is_irrelevant() {
        assert_eq!(eval("AS KD 9D 2C 7H 7S QD"), eval("QD 7S 7H 2C 9D KD AS"));
    }
}
