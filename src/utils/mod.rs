//! Utility Module
//!
//! - [`FpsCounter`]: rolling-window frame rate measurement
//! - [`time`]: injectable clocks ([`SystemClock`], [`ManualClock`])
//! - [`scheduler`]: background scheduling backends for deferred work

pub mod fps_counter;
pub mod scheduler;
pub mod time;

pub use fps_counter::{FpsCounter, MIN_FPS_SAMPLES};
pub use scheduler::{BackgroundScheduler, IdleQueueScheduler, ImmediateScheduler, Task, WorkerScheduler};
pub use time::{Clock, ManualClock, SystemClock};
