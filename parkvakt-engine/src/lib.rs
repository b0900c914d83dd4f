pub mod engine;

// Re-export the runtime entry points so frontends can simply do:
pub use engine::{run_monitor_mode, run_single_pass_mode, EngineError, MonitorRuntime};
