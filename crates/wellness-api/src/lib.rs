//! Wellness prediction HTTP service
//!
//! Exposes the rule-based health prediction and the BMI calculator over
//! HTTP, together with health probes and Prometheus metrics.

pub mod api;
pub mod config;
pub mod error;
