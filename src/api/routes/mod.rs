//! API Routes
//!
//! Route handlers organized by functionality.

pub mod charts;
pub mod dashboard;
pub mod dataset;
pub mod dispatch;
pub mod health;
pub mod shell;
