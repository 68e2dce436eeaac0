use bme680::{
    Bme680, FieldData, FieldDataCondition, I2CAddress, IIRFilterSize, OversamplingSetting,
    PowerMode, SettingsBuilder,
};
use rp_pico::hal::gpio::bank0::{Gpio8, Gpio9};
use rp_pico::hal::gpio::{FunctionI2C, Pin, PullUp};
use rp_pico::hal::{Timer, I2C};
use rp_pico::pac::I2C0;

use crate::driver::{DriverReturnCode, HumiditySensor};

pub type BmeI2c = I2C<
    I2C0,
    (
        Pin<Gpio8, FunctionI2C, PullUp>,
        Pin<Gpio9, FunctionI2C, PullUp>,
    ),
>;

type Bme = Bme680<BmeI2c, Timer>;

/// BME680 exposed through the acquisition cycle's sensor capabilities.
/// The driver's results are folded into return codes here; the last fresh
/// field data is cached for the read calls.
pub struct Bme680Sensor {
    bme: Option<Bme>,
    delayer: Timer,
    data: FieldData,
}

impl Bme680Sensor {
    /// Probes and configures the BME680 on the secondary address.
    /// If the sensor does not answer, the adapter reports NotInitialised on every call
    /// param i2c: I2C bus the sensor sits on
    /// param delayer: BME sensor delay
    pub fn probe(i2c: BmeI2c, mut delayer: Timer) -> Bme680Sensor {
        let bme = Bme680::init(i2c, &mut delayer, I2CAddress::Secondary)
            .ok()
            .and_then(|mut bme| {
                let settings = SettingsBuilder::new()
                    .with_humidity_oversampling(OversamplingSetting::OS2x)
                    .with_pressure_oversampling(OversamplingSetting::OS4x)
                    .with_temperature_oversampling(OversamplingSetting::OS8x)
                    .with_temperature_filter(IIRFilterSize::Size3)
                    .with_run_gas(false)
                    .build();
                bme.set_sensor_settings(&mut delayer, settings).ok()?;
                Some(bme)
            });

        if bme.is_none() {
            defmt::warn!("BME680 did not respond");
        }

        Bme680Sensor {
            bme,
            delayer,
            data: FieldData::default(),
        }
    }

    pub fn is_attached(&self) -> bool {
        self.bme.is_some()
    }
}

impl HumiditySensor for Bme680Sensor {
    fn initialise(&mut self) -> DriverReturnCode {
        if self.is_attached() {
            DriverReturnCode::Ok
        } else {
            DriverReturnCode::NotInitialised
        }
    }

    /// Puts the sensor in forced mode so it runs one conversion
    fn wake(&mut self) -> DriverReturnCode {
        let Some(bme) = self.bme.as_mut() else {
            return DriverReturnCode::NotInitialised;
        };
        match bme.set_sensor_mode(&mut self.delayer, PowerMode::ForcedMode) {
            Ok(()) => DriverReturnCode::Ok,
            Err(_) => DriverReturnCode::Busy,
        }
    }

    /// Collects the conversion started by `wake`. The BME680 finishes it well within
    /// the wake settle time, so the data is already final here and the post-measure
    /// delay has nothing left to wait for.
    fn measure(&mut self) -> DriverReturnCode {
        let Some(bme) = self.bme.as_mut() else {
            return DriverReturnCode::NotInitialised;
        };
        match bme.get_sensor_data(&mut self.delayer) {
            Ok((data, FieldDataCondition::NewData)) => {
                self.data = data;
                DriverReturnCode::Ok
            }
            // Conversion not finished yet
            Ok((_, FieldDataCondition::Unchanged)) => DriverReturnCode::Busy,
            Err(_) => DriverReturnCode::Busy,
        }
    }

    fn read_temperature(&mut self) -> f32 {
        self.data.temperature_celsius()
    }

    fn read_humidity(&mut self) -> f32 {
        self.data.humidity_percent()
    }
}
