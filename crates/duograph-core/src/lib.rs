//! Duograph Core Library
//!
//! Two independent graph representations and the classical algorithms that
//! run over them:
//! - [`graph::DirectedGraph`]: integer vertices, weighted edges, adjacency matrix
//! - [`graph::UndirectedGraph`]: string vertices, unweighted edges, sorted adjacency lists

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
