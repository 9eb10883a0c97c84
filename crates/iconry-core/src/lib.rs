//! Iconry Core Types
//!
//! This crate provides the building blocks shared by Iconry icon components
//! and render hosts:
//!
//! - **Attributes**: Pass-through attribute values ([`AttrValue`])
//! - **Props**: The open-ended properties bag handed to components ([`Props`])
//! - **Nodes**: Node descriptions ([`VElement`], [`VNode`]) and live nodes ([`NodeHandle`])
//! - **References**: Caller-owned slots populated with mounted nodes ([`NodeRef`])

pub mod attr;
pub mod node;
pub mod node_ref;
pub mod props;

pub use attr::AttrValue;
pub use node::{LiveNode, NodeHandle, VElement, VNode};
pub use node_ref::NodeRef;
pub use props::Props;
