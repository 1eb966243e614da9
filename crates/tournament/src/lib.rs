//! Tournament Runner for Lines of Action
//!
//! This crate provides infrastructure for:
//! - Carrying players across rounds (who starts, which colors, cumulative score)
//! - Running multi-round matches between automated engines
//! - Saving standings and generating reports
//!
//! # Usage
//!
//! ```bash
//! # Ten rounds between two random engines, reproducible
//! cargo run -p tournament -- match random random --rounds 10 --seed 7
//!
//! # Show the last saved standings
//! cargo run -p tournament -- standings standings.json
//! ```

mod config;
mod error;
mod match_runner;
mod results;
mod tournament;

pub use config::*;
pub use error::*;
pub use match_runner::*;
pub use results::*;
pub use tournament::*;
