#![deny(unused_must_use)]

#[macro_use] extern crate log;

pub mod errors;
pub mod beatmaps;
pub mod gameplay;
pub mod prelude;
