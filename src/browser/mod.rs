//! Thin adapters from `site_core` abstractions onto browser APIs.

pub mod delay;
pub mod dom;
pub mod files;
pub mod scheduler;
pub mod storage;
pub mod visibility;
