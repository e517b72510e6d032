//! Formatter tests
//!
//! Rules as observed from the outside: exact outputs, snapshots of whole
//! renders, and properties that must hold for any input.

mod highlight;
mod paragraph;
mod properties;
mod render;
