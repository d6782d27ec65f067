//! Clients for the JPL Solar System Dynamics APIs.

pub mod sbdb;
