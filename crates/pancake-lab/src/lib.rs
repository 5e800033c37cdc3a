//! # Pancake Lab
//!
//! Order lifecycle management for a pancake kitchen: orders are started for a delivery
//! address, filled with pancakes and their ingredients, then completed, prepared and
//! delivered (or cancelled along the way).
//!
//! - **[model]**: Orders, pancakes, addresses and deliveries
//! - **[validators]**: Address and ingredient rules
//! - **[repository]**: In-memory storage for orders and pancakes
//! - **[order_log]**: The activity journal
//! - **[service]**: [`PancakeService`](service::PancakeService), the lifecycle manager
//! - **[lifecycle]**: [`PancakeLab`](lifecycle::PancakeLab), which wires and shuts everything down
//! - **[config]**: Runtime settings

pub mod config;
pub mod lifecycle;
pub mod model;
pub mod order_log;
pub mod repository;
pub mod service;
pub mod validators;
