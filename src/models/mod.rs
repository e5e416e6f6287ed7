// src/models/mod.rs
// DOCUMENTATION: Models module organization
// PURPOSE: Re-export model components

pub mod breed;
pub mod characteristic;
pub mod photo;
pub mod review;

pub use breed::*;
pub use characteristic::*;
pub use photo::*;
pub use review::*;
