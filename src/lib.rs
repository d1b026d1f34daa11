//! Reusable display widgets: an overlapping avatar stack with an overflow
//! badge, and a text field whose label floats above its border.
//!
//! The crate is `#![no_std]` with `extern crate alloc` so the widgets draw on
//! embedded targets and on desktop hosts (the simulator and tests) alike.

#![no_std]

extern crate alloc;

pub mod config;
pub mod pages;
pub mod ui;
