//! Modules layer - Infrastructure components for external integrations
//!
//! Contains the storage backends that sit behind the feature services.

pub mod storage;
