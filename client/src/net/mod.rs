//! Networking modules for the identity-provider boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `identity` talks to the external provider and `types` defines the subset
//! of its schema the shell reads. Attendance data goes through the server's
//! `/api` proxy and is fetched by the pages that need it.

pub mod identity;
pub mod types;
