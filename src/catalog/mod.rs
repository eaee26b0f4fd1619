//! Catalog domain model.
//!
//! A [`Catalog`] is the ordered, immutable list of [`Item`]s a subset is
//! chosen from. A [`TargetProfile`] holds the attribute totals to approach
//! and the budget interval the total cost must fall into.
//!
//! Both are created once per run and only read afterwards.

mod item;
mod profile;

pub use item::{Catalog, Item};
pub use profile::TargetProfile;
