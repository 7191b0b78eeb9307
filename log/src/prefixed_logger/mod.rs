// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
mod logger_prefix;
#[allow(clippy::module_inception)]
mod prefixed_logger;

// Re-export.
pub use logger_prefix::*;
pub use prefixed_logger::*;
