//! Maps UI service errors to skyglance_core error types for consistent user-facing messages.

mod weather;
