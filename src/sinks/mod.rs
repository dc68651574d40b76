//! Output destinations: the rotating file machinery and the console mirror

pub mod console;
pub mod rotation;
pub mod writer;

pub use console::ConsoleMirror;
pub use rotation::{RotationConfig, RotationState, DEFAULT_MAX_BYTES, DEFAULT_MAX_COUNT};
pub use writer::{RotatingWriter, SESSION_SEPARATOR};
