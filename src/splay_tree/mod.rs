//! Self-adjusting binary search tree with the additional property that recently accessed elements
//! are quick to access again.
//!
//! Nodes keep a link to their parent, and every access splays the touched node bottom-up to the
//! root through zig, zig-zig and zig-zag steps.

mod iter;
mod node;
mod serialize;
mod set;
mod tree;

pub use self::iter::{IntoIter, Iter, Keys, Values};
pub use self::set::{SplaySet, SplaySetIntoIter};
pub use self::tree::SplayTree;
