//! Command implementations for duograph

pub mod config;
pub mod demo;
pub mod directed;
pub mod dispatch;
pub mod undirected;

use serde::Serialize;

use duograph_core::error::Result;

/// Print a JSON value the way every command does
pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Join displayable items with a separator
pub(crate) fn join<T: std::fmt::Display>(items: &[T], sep: &str) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(sep)
}
