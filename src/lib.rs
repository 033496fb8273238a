//! # Lazy Sequences & Unpacking
//!
//! Two small, independent demonstrations.
//!
//! 1. **Random Number Printer** (`random_numbers`)
//!    - An infinite iterator of `f64` values in `[0, 1)`
//!    - Pulling a fixed number of values with `.take(n)`
//!    - Fresh-per-value versus shared sequences
//!
//! 2. **Unpacking Demo** (`unpacking`)
//!    - Multiple assignment from a tuple
//!    - Destructuring a fixed-size sequence
//!    - Destructuring a lazily produced sequence
//!    - Nested destructuring
//!    - Swapping with a parallel assignment
//!    - Head / rest / tail split
//!
//! ## Running
//!
//! ```bash
//! cargo run --bin random_numbers
//! cargo run --bin random_numbers -- --count 10 --seed 42
//! cargo run --bin unpacking_demo
//! ```
//!
//! ## Key Dependencies
//!
//! - `rand` - generators behind the random sequence
//! - `itertools` - `collect_tuple` for fixed-arity unpacking
//! - `thiserror` / `anyhow` - library errors and binary error reporting
//! - `clap` - command-line options
//! - `tracing` - diagnostics on stderr

pub mod config;
pub mod error;
pub mod logging;
pub mod random_numbers;
pub mod unpacking;

pub use error::{Arity, DemoError, Result};
