//! Browser-free interaction logic for the SCOAN ministry site.
//!
//! Everything here is plain Rust so it can be unit tested natively; the
//! Leptos crate at the workspace root binds these state machines to
//! `web-sys` (timers, intersection observers, Web Audio, localStorage).

pub mod admin;
pub mod autoplay;
pub mod carousel;
pub mod config;
pub mod gallery;
pub mod gesture;
pub mod media;
pub mod playlist;
pub mod routes;
pub mod session;
pub mod task;
pub mod video;
pub mod visibility;
pub mod visualizer;

// Deterministic FrequencySource for driving the visualiser pipeline in tests
#[cfg(test)]
mod analyser;
