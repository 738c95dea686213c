//! # Healthcare Design Patterns
//!
//! Six classic patterns, each shown as a naive "before" rendition (the
//! `naive` submodule) and a pattern-applied "after" rendition, over toy
//! healthcare data.
//!
//! ## Behavioral
//! - Chain of Responsibility: [`chain`]
//! - Observer: [`observer`]
//!
//! ## Creational
//! - Factory Method: [`factory`]
//! - Singleton (with injection): [`singleton`]
//!
//! ## Structural
//! - Flyweight: [`flyweight`]
//! - Module encapsulation (IIFE): [`encapsulation`]
//!
//! Run individual examples with:
//! ```bash
//! cargo run --bin chain_of_responsibility
//! cargo run --bin factory_method -- 1 2 3 0
//! cargo run --bin flyweight
//! cargo run --bin iife
//! cargo run --bin observer
//! cargo run --bin singleton
//! ```

pub mod chain;
pub mod config;
pub mod console;
pub mod encapsulation;
pub mod error;
pub mod factory;
pub mod flyweight;
pub mod logging;
pub mod metrics;
pub mod observer;
pub mod singleton;

pub use config::DemoConfig;
pub use error::{PatternError, Result};
pub use metrics::HealthMetrics;
