pub mod metrics;
pub mod notifier;
pub mod rate_limit;
pub mod scheduler;
