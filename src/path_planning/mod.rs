// Path Planning module

pub mod reeds_shepp;

pub use reeds_shepp::*;
