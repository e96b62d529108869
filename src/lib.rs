//! Posthouse Scene Library
//!
//! A small night scene around a posthouse model that can run headless or
//! with a Bevy UI.

pub mod scene;

#[cfg(feature = "ui")]
pub mod ui;
