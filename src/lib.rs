//! Public library API for reading Ziff/GEO chunk trees.

/// Chunk tag registry, recursive tree reader, and file helpers.
pub mod ziff;
