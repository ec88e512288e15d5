//! Static site content authored in source.

pub mod admin;
pub mod biographies;
pub mod gallery;
pub mod media;
