#![cfg(test)]

mod mapping;
mod utils;
