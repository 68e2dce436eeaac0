pub const WAKE_SETTLE_MS: u32 = 10_000; // Power-up settle time after wake
pub const MEASURE_SETTLE_MS: u32 = 100; // Conversion time after measure
pub const FINAL_PACE_MS: u32 = 5;

/// Delays of one acquisition cycle, in milliseconds.
/// wake_settle_ms: pause after waking the sensor
/// measure_settle_ms: pause after triggering a measurement
/// final_pace_ms: pause before the readings are published
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CycleTiming {
    pub wake_settle_ms: u32,
    pub measure_settle_ms: u32,
    pub final_pace_ms: u32,
}

impl Default for CycleTiming {
    fn default() -> Self {
        CycleTiming {
            wake_settle_ms: WAKE_SETTLE_MS,
            measure_settle_ms: MEASURE_SETTLE_MS,
            final_pace_ms: FINAL_PACE_MS,
        }
    }
}

impl CycleTiming {
    pub fn new(wake_settle_ms: u32, measure_settle_ms: u32, final_pace_ms: u32) -> CycleTiming {
        Self {
            wake_settle_ms,
            measure_settle_ms,
            final_pace_ms,
        }
    }

    /// Total time one cycle spends sleeping
    pub fn total_ms(&self) -> u32 {
        self.wake_settle_ms
            .saturating_add(self.measure_settle_ms)
            .saturating_add(self.final_pace_ms)
    }
}
