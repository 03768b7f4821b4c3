#![allow(clippy::style)]

#[macro_use] extern crate log;

pub mod heapsort;

pub use crate::heapsort::{sort, sort_by, sort_by_with_observer, trace_swaps};
