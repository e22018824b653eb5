//! Minimal scene graph and lookup helpers.
//!
//! Nodes carry a name, arbitrary typed components and children. Name lookups
//! accept `/`-separated paths; component lookups only see direct children.

mod node;

pub use node::{child_by_name, child_with, SceneNode};
