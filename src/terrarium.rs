/// Receiver of published readings on the terrarium-control side.
/// Each value arrives through its own call.
pub trait TerrariumSink {
    fn update_temperature(&mut self, temperature: f32);
    fn update_humidity(&mut self, humidity: f32);
}

impl<T: TerrariumSink + ?Sized> TerrariumSink for &mut T {
    fn update_temperature(&mut self, temperature: f32) {
        (**self).update_temperature(temperature);
    }

    fn update_humidity(&mut self, humidity: f32) {
        (**self).update_humidity(humidity);
    }
}

/// Sink that keeps the most recent value of each quantity.
/// temperature: last published temperature in °C
/// humidity: last published relative humidity percentage
/// updates: number of temperature updates received
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LatestReadings {
    pub temperature: Option<f32>,
    pub humidity: Option<f32>,
    pub updates: u32,
}

impl LatestReadings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Both values, once each has been published at least once
    pub fn both(&self) -> Option<(f32, f32)> {
        Some((self.temperature?, self.humidity?))
    }
}

impl TerrariumSink for LatestReadings {
    fn update_temperature(&mut self, temperature: f32) {
        self.temperature = Some(temperature);
        self.updates = self.updates.wrapping_add(1);
    }

    fn update_humidity(&mut self, humidity: f32) {
        self.humidity = Some(humidity);
    }
}
