use crate::cards::Card;
use crate::cards::Rank;
use std::cmp::Reverse;

/// Everything the scoring rules need to know about exactly five cards.
///
/// Groups are `(count, rank)` pairs sorted by `count * 16 + rank` descending,
/// so the biggest group comes first and equal-sized groups are ordered high
/// to low. Ranks are the five individual ranks, high to low.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Shape {
    groups: Vec<(u8, Rank)>,
    ranks: [Rank; 5],
    flush: bool,
    straight: Option<Rank>,
}

const WHEEL: [Rank; 5] = [Rank::Ace, Rank::Five, Rank::Four, Rank::Three, Rank::Two];

impl Shape {
    pub fn groups(&self) -> &[(u8, Rank)] {
        &self.groups
    }
    pub fn ranks(&self) -> &[Rank; 5] {
        &self.ranks
    }
    pub fn flush(&self) -> bool {
        self.flush
    }
    /// High card of the straight; the wheel counts as five-high.
    pub fn straight(&self) -> Option<Rank> {
        self.straight
    }
    pub fn straight_flush(&self) -> Option<Rank> {
        self.straight.filter(|_| self.flush)
    }
    /// Size and rank of the i-th group, or `(0, None)` past the end.
    pub fn group(&self, i: usize) -> (u8, Option<Rank>) {
        self.groups
            .get(i)
            .map(|&(n, r)| (n, Some(r)))
            .unwrap_or((0, None))
    }
    pub fn last(&self) -> Option<Rank> {
        self.groups.last().map(|&(_, r)| r)
    }
}

impl From<[Card; 5]> for Shape {
    fn from(cards: [Card; 5]) -> Self {
        let mut counts = [0u8; 15];
        cards
            .iter()
            .for_each(|c| counts[u8::from(c.rank()) as usize] += 1);
        let mut groups = Rank::all()
            .into_iter()
            .map(|r| (counts[u8::from(r) as usize], r))
            .filter(|&(n, _)| n > 0)
            .collect::<Vec<_>>();
        groups.sort_by_key(|&(n, r)| Reverse(n as u16 * 16 + u8::from(r) as u16));
        let mut ranks = cards.map(|c| c.rank());
        ranks.sort_by_key(|&r| Reverse(r));
        let flush = cards.iter().all(|c| c.suit() == cards[0].suit());
        let straight = match groups.len() {
            5 if u8::from(ranks[0]) - u8::from(ranks[4]) == 4 => Some(ranks[0]),
            5 if ranks == WHEEL => Some(Rank::Five),
            _ => None,
        };
        Self {
            groups,
            ranks,
            flush,
            straight,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shape(s: &str) -> Shape {
        let cards = Card::parse(s).unwrap();
        Shape::from(<[Card; 5]>::try_from(cards.as_slice()).unwrap())
    }

    #[test]
    fn groups_biggest_first() {
        let shape = shape("3S 9H 3H 9D JC");
        assert_eq!(
            shape.groups(),
            &[(2, Rank::Nine), (2, Rank::Three), (1, Rank::Jack)]
        );
        assert_eq!(shape.last(), Some(Rank::Jack));
        assert_eq!(shape.group(3), (0, None));
    }

    #[test]
    fn ranks_descending() {
        let shape = shape("2S 9H 5H KD JC");
        assert_eq!(
            shape.ranks(),
            &[Rank::King, Rank::Jack, Rank::Nine, Rank::Five, Rank::Two]
        );
    }

    #[test]
    fn wheel_is_five_high() {
        assert_eq!(shape("AS 2H 3D 4C 5S").straight(), Some(Rank::Five));
        assert_eq!(shape("6S 2H 3D 4C 5S").straight(), Some(Rank::Six));
        assert_eq!(shape("AS KH 3D 4C 5S").straight(), None);
    }

    #[test]
    fn paired_hands_are_not_straights() {
        assert_eq!(shape("2S 2H 3D 4C 5S").straight(), None);
    }

    #[test]
    fn flush_needs_every_suit_equal() {
        assert!(shape("2S 4S 9S JS AS").flush());
        assert!(!shape("2S 4S 9S JS AH").flush());
        assert_eq!(shape("AH KH QH JH TH").straight_flush(), Some(Rank::Ace));
    }
}
