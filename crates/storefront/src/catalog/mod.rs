//! Client-side derivations over an already-fetched product list.
//!
//! Nothing here talks to the backend: the catalog client hands over a flat
//! `Vec<Product>` and these utilities derive presentation-ready views from
//! it (color-variant families, filtered/sorted listings).

pub mod filter;
pub mod variants;

pub use filter::{ProductFilter, SortOrder, filter_and_sort};
pub use variants::{ColorVariant, ProductFamily, group_color_variants};
