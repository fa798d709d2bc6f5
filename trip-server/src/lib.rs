//! Trip booking service.
//!
//! A web application that books multi-segment trips between cities,
//! planning the best route for a chosen priority: time, cost, or comfort.

pub mod booking;
pub mod cache;
pub mod client;
pub mod domain;
pub mod network;
pub mod planner;
pub mod web;
