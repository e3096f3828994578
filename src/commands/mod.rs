mod audit;
mod classify;

pub use audit::run_audit_command;
pub use classify::run_classify;
