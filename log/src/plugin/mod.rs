// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
mod plugin_config;
mod plugin_host;

// Re-export.
pub use plugin_config::*;
pub use plugin_host::*;
