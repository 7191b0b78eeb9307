// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod custom_event_formatter;
pub mod public_api;
pub mod tracing_config;
pub mod tracing_init;

// Re-export.
pub use custom_event_formatter::*;
pub use public_api::*;
pub use tracing_config::*;
pub use tracing_init::*;
