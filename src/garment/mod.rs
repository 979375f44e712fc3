//! Garment type table: per-type scale, physical bounds and anchor rule.
//!
//! Lookups are total. Identifiers are normalized (lowercase, `-`, `_` and
//! whitespace removed) and anything unrecognized resolves to
//! [`GarmentStandard::DEFAULT`].

pub mod standards;

pub use standards::{Anchor, GarmentKind, GarmentStandard, normalize_key, standard_for};
