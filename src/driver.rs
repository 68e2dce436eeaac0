/// Outcome of a sensor bus operation.
/// Ok: the operation was accepted
/// Busy: the bus was in use, the operation may succeed later
/// OutOfResource: the driver could not allocate what it needed
/// NotInitialised: the driver has not been set up
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DriverReturnCode {
    #[default]
    Ok,
    Busy,
    OutOfResource,
    NotInitialised,
}

impl DriverReturnCode {
    pub fn is_ok(self) -> bool {
        self == DriverReturnCode::Ok
    }

    /// Busy is the only code that a later attempt can clear on its own
    pub fn is_transient(self) -> bool {
        self == DriverReturnCode::Busy
    }

    /// Whether a wake-up with this result still warrants a measurement.
    /// A busy bus during wake-up does not mean the sensor stayed asleep,
    /// so only hard failures skip the measurement.
    pub fn permits_measure(self) -> bool {
        self.is_ok() || self.is_transient()
    }
}

/// Capabilities of a humidity/temperature sensor as seen by the acquisition cycle.
///
/// Reads have no error channel: they return whatever the driver last converted,
/// so callers must only read after `measure` reported `Ok`.
pub trait HumiditySensor {
    /// Prepares the driver. Called once before the first cycle.
    fn initialise(&mut self) -> DriverReturnCode {
        DriverReturnCode::Ok
    }

    /// Powers the sensor up. It needs a settle time before it can measure.
    fn wake(&mut self) -> DriverReturnCode;

    /// Triggers a conversion of temperature and humidity.
    fn measure(&mut self) -> DriverReturnCode;

    /// Temperature from the last conversion in °C
    fn read_temperature(&mut self) -> f32;

    /// Relative humidity from the last conversion in percent
    fn read_humidity(&mut self) -> f32;
}

impl<S: HumiditySensor + ?Sized> HumiditySensor for &mut S {
    fn initialise(&mut self) -> DriverReturnCode {
        (**self).initialise()
    }

    fn wake(&mut self) -> DriverReturnCode {
        (**self).wake()
    }

    fn measure(&mut self) -> DriverReturnCode {
        (**self).measure()
    }

    fn read_temperature(&mut self) -> f32 {
        (**self).read_temperature()
    }

    fn read_humidity(&mut self) -> f32 {
        (**self).read_humidity()
    }
}
