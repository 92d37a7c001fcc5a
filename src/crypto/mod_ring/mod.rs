//! Ring of integers modulo an odd prime.

mod element;
mod ring;
mod uint_exp;
mod uint_mont;

pub use self::{element::ModRingElement, ring::ModRing, uint_exp::UintExp, uint_mont::UintMont};
