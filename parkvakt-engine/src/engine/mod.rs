mod error;
mod runtime;

pub use self::{
    error::EngineError,
    runtime::{run_monitor_mode, run_single_pass_mode, MonitorRuntime},
};

pub mod prelude {
    pub use super::{run_monitor_mode, run_single_pass_mode, EngineError, MonitorRuntime};
}
