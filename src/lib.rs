//! Ordered collections backed by a bottom-up splay tree.
//!
//! # Examples
//!
//! ```
//! use splay_collections::splay_tree::SplayTree;
//!
//! let mut tree = SplayTree::new();
//! for key in 1..=7 {
//!     tree.insert(key, format!("value_{}", key));
//! }
//!
//! assert_eq!(tree.find(&7).map(String::as_str), Some("value_7"));
//! assert_eq!(tree.find(&1).map(String::as_str), Some("value_1"));
//! assert!(tree.delete(&4));
//! assert_eq!(tree.keys().cloned().collect::<Vec<_>>(), vec![1, 2, 3, 5, 6, 7]);
//! ```

#[macro_use]
extern crate log;
extern crate serde;
#[macro_use]
extern crate serde_derive;
extern crate thiserror;

mod entry;
pub mod arena;
pub mod error;
pub mod splay_tree;

pub use error::{Error, Result};
