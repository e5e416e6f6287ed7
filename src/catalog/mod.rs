// src/catalog/mod.rs
// DOCUMENTATION: Catalog module organization
// PURPOSE: Re-export the pure query/filter/aggregate core

pub mod aggregate;
pub mod compare;
pub mod query;
pub mod snapshot;

pub use aggregate::*;
pub use compare::*;
pub use query::*;
pub use snapshot::*;
