pub mod rate_limiter;
pub mod timer_wheel;

pub use rate_limiter::PulseRateLimiter;
pub use timer_wheel::{TimerKey, TimerWheel};
