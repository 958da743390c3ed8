//! Card data model: cards, states, piles, the shared deck, player hands.

pub mod card;
pub mod deck;
pub mod hand;
pub mod pile;
pub mod state;

pub use card::{Card, CardView, Suit, BOMB_VALUE, SPY_VALUE};
pub use deck::Deck;
pub use hand::Hand;
pub use pile::Pile;
pub use state::CardState;
