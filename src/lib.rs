//! Rainstone - Cloud cost estimator for bioinformatics workflows
//!
//! This crate serves per-tool cost statistics from an in-memory catalog and
//! estimates the cost of Galaxy workflows by summing the statistics of the
//! tools they reference.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
