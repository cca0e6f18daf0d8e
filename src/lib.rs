//! Federal R&D Tax Credit Estimation Engine
//!
//! This crate estimates the U.S. federal research credit for small and
//! medium businesses using the Alternative Simplified Credit (ASC) method,
//! maps the estimate to a service pricing tier and reports the ROI of that
//! tier.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
