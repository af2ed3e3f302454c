pub mod board;
pub mod dict;
pub mod errors;
pub mod game;
pub mod web;
