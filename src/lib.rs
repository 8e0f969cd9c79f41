//! # optio
//!
//! An optional value that either holds exactly one value or holds none, with
//! a combinator set for working on it without explicit branching.
//!
//! ## Quick Tour
//!
//! ```rust
//! use optio::{apply, first_option, flatten, none, safe_apply, some, Option, OptExt};
//!
//! // Construction
//! let name = apply(Some("ada"));
//! let nobody: Option<&str> = none().into();
//! assert!(name.has_value() && nobody.is_empty());
//!
//! // Combinators
//! let shout = name.map(str::to_uppercase).get_or_else(|| "?".to_string());
//! assert_eq!(shout, "ADA");
//! assert_eq!(nobody.or(|| "grace".opt()), Option::Some("grace"));
//!
//! // Failures become empties
//! assert!(safe_apply(|| "2.5".parse::<f64>()).has_value());
//! assert!(safe_apply(|| "x".parse::<u8>()).is_empty());
//!
//! // Sequences
//! let values: Vec<i32> = flatten(vec![some(1), Option::None, some(3)]).collect();
//! assert_eq!(values, vec![1, 3]);
//! assert_eq!(first_option(values), Option::Some(1));
//! ```
//!
//! ## Features
//!
//! - `tracing` (default): emit `tracing` debug events whenever a safe
//!   combinator swallows a failure.

pub mod option;
pub mod empty;
pub mod attempt;
pub mod companion;
pub mod iter;
pub mod error;
mod trace;


pub use option::*;
pub use empty::*;
pub use attempt::Attempt;
pub use companion::*;
pub use iter::{Flatten, IntoIter, Iter, SequenceExt};
pub use error::*;
