//! Rules for deciding the outcome of a round.

pub mod win;
