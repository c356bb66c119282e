//! `nodes` crate: the adapt/build/invoke node contract and built-in node
//! implementations.
//!
//! Every node kind implements [`NodeAdaptor`] and [`NodeBuilder`]; what they
//! build implements [`InvokableNode`]. The [`NodeRegistry`] dispatches on the
//! graph's type tag.

pub mod error;
pub mod traits;
pub mod value;
pub mod registry;
pub mod text_trimmer;
pub mod mock;

pub use error::NodeError;
pub use traits::{AdaptOptions, BuildOptions, InvokableNode, NodeAdaptor, NodeBuilder, NodeKind};
pub use value::{Record, Value};
pub use registry::NodeRegistry;
