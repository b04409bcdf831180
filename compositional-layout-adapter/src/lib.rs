//! Host-side utilities for the `compositional-layout` crate.
//!
//! The `compositional-layout` crate is UI-agnostic and only resolves geometry. This crate
//! provides the small, framework-neutral pieces a host usually needs on top of it:
//!
//! - A [`LayoutController`] that builds sections lazily through a provider, caches resolved
//!   layouts and measurements, and drives scroll invalidation
//! - Tween-based paging snaps (adapter-driven, via `tick(now_ms)`)
//! - Four reference section kinds selected by a capability table ([`SectionKind`])
//!
//! No views or rendering toolkit bindings live here.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod kinds;
mod tween;

#[cfg(test)]
mod tests;

pub use controller::{LayoutController, ScrollUpdate, SectionProvider};
pub use kinds::{
    BADGE_ELEMENT_KIND, HEADER_ELEMENT_KIND, SectionCapabilities, SectionKind, reference_provider,
};
pub use tween::{Easing, Tween};
