// src/store/mod.rs
// DOCUMENTATION: Store module organization
// PURPOSE: Re-export the in-memory repository

pub mod repository;

pub use repository::*;
