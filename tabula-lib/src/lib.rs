//! View-state engines for data tables and text inputs.
//!
//! - [`table`]: sorting, selection and pagination over caller-owned rows
//! - [`input`]: text input state and validation
//! - [`model`]: the dynamic record type rows are made of

pub mod error;
pub mod input;
pub mod model;
pub mod table;
