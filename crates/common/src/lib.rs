//! Cross-cutting helpers shared by every crate in the workspace:
//! logging bootstrap, outbound string sanitization and small wire types.

pub mod sanitize;
pub mod types;
pub mod utils;
