// src/services/mod.rs
// DOCUMENTATION: Services module organization
// PURPOSE: Re-export service components

pub mod breed_service;
pub mod breeds_client;
pub mod provider;
pub mod sample_data;

pub use breed_service::*;
pub use breeds_client::*;
pub use provider::*;
pub use sample_data::*;
