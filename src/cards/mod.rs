pub mod basic;


pub use basic::{Card, CardError, Rank, Suit};
