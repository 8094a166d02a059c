use super::shape::Shape;
use crate::cards::Rank;

/// The poker category of a five-card hand, with its defining ranks.
///
/// For presentation only. Winners are decided by [`Score`], which also
/// carries every kicker.
///
/// [`Score`]: super::score::Score
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord)]
pub enum Ranking {
    HighCard(Rank),
    OnePair(Rank),
    TwoPair(Rank, Rank),
    ThreeOAK(Rank),
    Straight(Rank),
    Flush(Rank),
    FullHouse(Rank, Rank),
    FourOAK(Rank),
    StraightFlush(Rank),
}

impl Ranking {
    pub(crate) fn classify(shape: &Shape) -> Self {
        let high = shape.ranks()[0];
        match (shape.straight_flush(), shape.straight(), shape.groups()) {
            (Some(top), _, _) => Ranking::StraightFlush(top),
            (_, _, [(4, quad), ..]) => Ranking::FourOAK(*quad),
            (_, _, [(3, trip), (2, pair)]) => Ranking::FullHouse(*trip, *pair),
            _ if shape.flush() => Ranking::Flush(high),
            (_, Some(top), _) => Ranking::Straight(top),
            (_, _, [(3, trip), ..]) => Ranking::ThreeOAK(*trip),
            (_, _, [(2, hi), (2, lo), ..]) => Ranking::TwoPair(*hi, *lo),
            (_, _, [(2, pair), ..]) => Ranking::OnePair(*pair),
            _ => Ranking::HighCard(high),
        }
    }
}

impl std::fmt::Display for Ranking {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Ranking::HighCard(r) => write!(f, "{}-high", r.nice()),
            Ranking::OnePair(r) => write!(f, "pair of {}", r.nice()),
            Ranking::TwoPair(hi, lo) => write!(f, "two pair, {} and {}", hi.nice(), lo.nice()),
            Ranking::ThreeOAK(r) => write!(f, "three of a kind, {}", r.nice()),
            Ranking::Straight(r) => write!(f, "{}-high straight", r.nice()),
            Ranking::Flush(r) => write!(f, "{}-high flush", r.nice()),
            Ranking::FullHouse(t, p) => write!(f, "full house, {} over {}", t.nice(), p.nice()),
            Ranking::FourOAK(r) => write!(f, "four of a kind, {}", r.nice()),
            Ranking::StraightFlush(r) => write!(f, "{}-high straight flush", r.nice()),
        }
    }
}
