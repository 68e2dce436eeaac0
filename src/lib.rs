#![cfg_attr(not(test), no_std)]

//! # terrarium-sensor
//! ## Periodic temperature/humidity acquisition for a terrarium controller
//!
//! Features:
//! - Wake → measure → read → publish cycle with fixed settle times
//! - Driver return code gating (busy buses are retried on the next cycle)
//! - Sensor, sink and delay injected as traits, so the cycle runs on the host in tests
//! - BME680 + Raspberry Pi Pico firmware behind the `rp-pico` feature

pub mod acquisition;
pub mod driver;
#[cfg(feature = "rp-pico")]
pub mod sensors;
pub mod terrarium;
pub mod timing;

pub use acquisition::{run_cycle, CycleOutcome, Reading, SensorTask};
pub use driver::{DriverReturnCode, HumiditySensor};
pub use terrarium::{LatestReadings, TerrariumSink};
pub use timing::CycleTiming;
