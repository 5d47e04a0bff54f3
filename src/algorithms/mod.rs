//! Algorithms.

pub mod linear_search;
