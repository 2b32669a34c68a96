//! Route-topology reasoning.
//!
//! Pure queries over the route list: whether two stops share a route,
//! which stop to change at when they don't, and directional traversal of
//! ordered stop sequences. The network is assumed hub-and-spoke, so no
//! journey ever needs more than one interchange; that assumption is relied
//! upon here, never verified.

mod graph;

pub use graph::RouteGraph;
