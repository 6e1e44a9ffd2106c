//! JSON document to tree graph, and path search over the result.
//!
//! [`build`] turns a [`JsonValue`] into nodes and containment edges, each
//! node addressed by a path such as `$.orders[0].price`. [`find`] and
//! [`resolve`] map a typed path back to a node.

mod builder;
mod parse;
pub mod path;
mod resolver;
mod stats;
mod types;
mod value;

pub use builder::{GraphBuilder, build};
pub use parse::parse_document;
pub use resolver::{SearchOutcome, find, resolve};
pub use stats::TreeStats;
pub use types::{GraphEdge, GraphNode, JsonGraph, NodeId, NodeKind};
pub use value::{JsonValue, Scalar};
