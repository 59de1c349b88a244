//! Catalog entries.

mod input;
mod table;
