use super::shape::Shape;
use crate::cards::Rank;

/// A hand's strength as one integer. Larger is better.
///
/// Built by appending base-16 digits, most significant category first:
///
/// | digit | feature                          |
/// |-------|----------------------------------|
/// | 1     | straight flush high card         |
/// | 2-3   | quads rank, kicker               |
/// | 4-5   | full house trips, pair           |
/// | 6     | flush (1)                        |
/// | 7     | straight high card               |
/// | 8-10  | trips rank, second group, last group |
/// | 11-13 | two pair high, low, kicker       |
/// | 14    | pair rank                        |
/// | 15-19 | the five ranks, high to low      |
///
/// Absent features write 0. Ranks are at most 14 so every feature fits in a
/// digit, and any present category outweighs everything below it.
/// Only comparable with other scores from this evaluator.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Score(u128);

impl Score {
    pub(crate) fn encode(shape: &Shape) -> Self {
        let (n, top) = shape.group(0);
        let (m, next) = shape.group(1);
        let (_, third) = shape.group(2);
        let quads = n == 4;
        let house = n == 3 && m == 2;
        // written for full houses too; house digits already dominate
        let trips = n == 3;
        let twos = n == 2 && m == 2;
        let pair = n == 2;
        [
            digit(shape.straight_flush()),
            digit(top.filter(|_| quads)),
            digit(next.filter(|_| quads)),
            digit(top.filter(|_| house)),
            digit(next.filter(|_| house)),
            shape.flush() as u8,
            digit(shape.straight()),
            digit(top.filter(|_| trips)),
            digit(next.filter(|_| trips)),
            digit(shape.last().filter(|_| trips)),
            digit(top.filter(|_| twos)),
            digit(next.filter(|_| twos)),
            digit(third.filter(|_| twos)),
            digit(top.filter(|_| pair)),
        ]
        .into_iter()
        .chain(shape.ranks().iter().map(|&r| u8::from(r)))
        .fold(Self(0), Self::push)
    }

    fn push(self, digit: u8) -> Self {
        Self(self.0 << 4 | digit as u128)
    }
}

fn digit(rank: Option<Rank>) -> u8 {
    rank.map(u8::from).unwrap_or(0)
}

impl From<Score> for u128 {
    fn from(score: Score) -> Self {
        score.0
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:019x}", self.0)
    }
}
