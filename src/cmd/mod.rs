/// Payload hex dump command.
pub mod dump;
/// Tag search command.
pub mod find;
/// File-level summary command.
pub mod info;
/// Stderr logger installed by `--verbose`.
pub mod logger;
/// Chunk outline command.
pub mod tree;
/// Shared argument and rendering helpers.
pub mod util;
