//! Seat identification and per-seat data storage.
//!
//! GOPS is strictly a two-player game, so the engine uses a closed `Seat`
//! enum rather than a numeric player index. Card ownership is always
//! expressed as a `Seat` payload on `CardState`, never as a raw integer.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two sides of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Seat {
    A,
    B,
}

impl Seat {
    /// Both seats, in resolution order (A is always evaluated first).
    pub const ALL: [Seat; 2] = [Seat::A, Seat::B];

    /// The other seat.
    #[must_use]
    pub const fn opponent(self) -> Seat {
        match self {
            Seat::A => Seat::B,
            Seat::B => Seat::A,
        }
    }

    /// 0-based index, for array-backed storage.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Seat::A => 0,
            Seat::B => 1,
        }
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Seat::A => write!(f, "player_a"),
            Seat::B => write!(f, "player_b"),
        }
    }
}

/// Per-seat data storage with O(1) access.
///
/// A fixed two-slot analogue of a per-player map.
///
/// ## Example
///
/// ```
/// use gops_sim::core::{Seat, SeatMap};
///
/// let mut wins: SeatMap<u32> = SeatMap::with_value(0);
/// wins[Seat::A] += 1;
/// assert_eq!(wins[Seat::A], 1);
/// assert_eq!(wins[Seat::B], 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatMap<T> {
    data: [T; 2],
}

impl<T> SeatMap<T> {
    /// Create a new SeatMap with values from a factory function.
    pub fn new(factory: impl Fn(Seat) -> T) -> Self {
        Self {
            data: [factory(Seat::A), factory(Seat::B)],
        }
    }

    /// Create a new SeatMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Iterate over (Seat, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Seat, &T)> {
        Seat::ALL.into_iter().map(move |s| (s, &self.data[s.index()]))
    }
}

impl<T> Index<Seat> for SeatMap<T> {
    type Output = T;

    fn index(&self, seat: Seat) -> &Self::Output {
        &self.data[seat.index()]
    }
}

impl<T> IndexMut<Seat> for SeatMap<T> {
    fn index_mut(&mut self, seat: Seat) -> &mut Self::Output {
        &mut self.data[seat.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent() {
        assert_eq!(Seat::A.opponent(), Seat::B);
        assert_eq!(Seat::B.opponent(), Seat::A);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Seat::A), "player_a");
        assert_eq!(format!("{}", Seat::B), "player_b");
    }

    #[test]
    fn test_seat_map_factory() {
        let map = SeatMap::new(|s| s.index() * 10);
        assert_eq!(map[Seat::A], 0);
        assert_eq!(map[Seat::B], 10);
    }

    #[test]
    fn test_seat_map_mutation() {
        let mut map: SeatMap<i32> = SeatMap::with_value(5);
        map[Seat::B] = 7;
        assert_eq!(map[Seat::A], 5);
        assert_eq!(map[Seat::B], 7);
    }

    #[test]
    fn test_seat_map_iter() {
        let map = SeatMap::new(|s| s.index() as i32);
        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(Seat::A, &0), (Seat::B, &1)]);
    }

    #[test]
    fn test_seat_serialization() {
        let json = serde_json::to_string(&Seat::A).unwrap();
        let back: Seat = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Seat::A);
    }
}
