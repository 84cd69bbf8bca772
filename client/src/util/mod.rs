//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure helpers (timing, scroll math, menu bookkeeping, counters, theme
//! parsing) compile everywhere and carry the unit tests. Modules that touch
//! `web-sys` directly are gated behind the `hydrate` feature.

pub mod counter;
#[cfg(feature = "hydrate")]
pub mod dom;
pub mod loading;
pub mod menu;
#[cfg(feature = "hydrate")]
pub mod observer;
#[cfg(feature = "hydrate")]
pub mod preload;
pub mod reveal;
pub mod scroll;
pub mod storage;
pub mod theme;
pub mod timing;
