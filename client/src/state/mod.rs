//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`identity`, `theme`) so route guards and
//! chrome components depend only on the model they read.

pub mod identity;
pub mod theme;
