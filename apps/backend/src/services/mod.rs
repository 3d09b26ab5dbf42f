pub mod clock;
pub mod error_log;
pub mod rate_limit;
