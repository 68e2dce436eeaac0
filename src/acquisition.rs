use embedded_hal::delay::DelayNs;

use crate::driver::{DriverReturnCode, HumiditySensor};
use crate::terrarium::TerrariumSink;
use crate::timing::CycleTiming;

/// One temperature/humidity pair taken after a successful measurement.
/// Only lives for the cycle that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Reading {
    pub temperature: f32,
    pub humidity: f32,
}

/// What a cycle ended up doing. Informational only; a cycle never fails.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CycleOutcome {
    /// Both values were read and handed to the sink
    Published(Reading),
    /// Wake-up failed hard, nothing was measured
    WakeFailed(DriverReturnCode),
    /// Measurement was not accepted, nothing was read
    MeasureFailed(DriverReturnCode),
}

impl CycleOutcome {
    pub fn reading(&self) -> Option<Reading> {
        match self {
            CycleOutcome::Published(reading) => Some(*reading),
            _ => None,
        }
    }
}

/// Runs one wake → measure → read → publish cycle.
/// All three delays are taken on every cycle whatever the driver reports.
/// A failed wake or measure only skips the steps after it.
/// param sensor: sensor capabilities
/// param sink: receiver of the readings
/// param delay: blocking delay provider
/// param timing: settle and pacing delays
/// returns CycleOutcome
pub fn run_cycle<S, T, D>(
    sensor: &mut S,
    sink: &mut T,
    delay: &mut D,
    timing: &CycleTiming,
) -> CycleOutcome
where
    S: HumiditySensor + ?Sized,
    T: TerrariumSink + ?Sized,
    D: DelayNs + ?Sized,
{
    let woken = sensor.wake();
    delay.delay_ms(timing.wake_settle_ms);

    let measured = if woken.permits_measure() {
        Some(sensor.measure())
    } else {
        None
    };
    delay.delay_ms(timing.measure_settle_ms);

    let outcome = match measured {
        None => CycleOutcome::WakeFailed(woken),
        Some(DriverReturnCode::Ok) => CycleOutcome::Published(Reading {
            temperature: sensor.read_temperature(),
            humidity: sensor.read_humidity(),
        }),
        Some(code) => CycleOutcome::MeasureFailed(code),
    };
    delay.delay_ms(timing.final_pace_ms);

    match outcome {
        CycleOutcome::Published(reading) => {
            sink.update_temperature(reading.temperature);
            sink.update_humidity(reading.humidity);
            #[cfg(feature = "defmt")]
            defmt::debug!(
                "published {} C, {} %RH",
                reading.temperature,
                reading.humidity
            );
        }
        CycleOutcome::WakeFailed(_code) => {
            #[cfg(feature = "defmt")]
            defmt::warn!("sensor wake-up failed: {}", _code);
        }
        CycleOutcome::MeasureFailed(_code) => {
            #[cfg(feature = "defmt")]
            defmt::warn!("sensor measurement failed: {}", _code);
        }
    }

    outcome
}

/// Scheduled task owning everything one acquisition cycle needs.
pub struct SensorTask<S, T, D> {
    sensor: S,
    sink: T,
    delay: D,
    timing: CycleTiming,
}

impl<S, T, D> SensorTask<S, T, D>
where
    S: HumiditySensor,
    T: TerrariumSink,
    D: DelayNs,
{
    pub fn new(sensor: S, sink: T, delay: D, timing: CycleTiming) -> Self {
        Self {
            sensor,
            sink,
            delay,
            timing,
        }
    }

    /// Sets up the sensor driver. A failure is logged but not fatal:
    /// the driver then reports NotInitialised on wake and every cycle is skipped.
    pub fn initialise(&mut self) -> DriverReturnCode {
        let code = self.sensor.initialise();
        if !code.is_ok() {
            #[cfg(feature = "defmt")]
            defmt::error!("sensor initialisation failed: {}", code);
        }
        code
    }

    pub fn run_once(&mut self) -> CycleOutcome {
        run_cycle(
            &mut self.sensor,
            &mut self.sink,
            &mut self.delay,
            &self.timing,
        )
    }

    /// Task body, never returns
    pub fn run(&mut self) -> ! {
        loop {
            self.run_once();
        }
    }

    pub fn timing(&self) -> &CycleTiming {
        &self.timing
    }

    pub fn sink(&self) -> &T {
        &self.sink
    }

    pub fn release(self) -> (S, T, D) {
        (self.sensor, self.sink, self.delay)
    }
}
