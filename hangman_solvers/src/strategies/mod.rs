//! Some strategies for use with `hangman_rs`.
//!
//! Each strategy consists of a single struct, and everything you need to
//! configure the strategy should exist as a method.

mod frequency;
pub use frequency::Frequency;

mod narrowing;
pub use narrowing::Narrowing;
