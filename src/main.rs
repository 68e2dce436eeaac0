#![no_std]
#![no_main]

use bsp::entry;
use defmt::*;
use defmt_rtt as _;
use panic_probe as _;
use rp_pico::hal::Timer;

// Provide an alias for our BSP so we can switch targets quickly.
// Uncomment the BSP you included in Cargo.toml, the rest of the code does not need to change.
use rp_pico as bsp;

use bsp::hal::{
    clocks::{init_clocks_and_plls, Clock},
    pac,
    watchdog::Watchdog,
};
use rp_pico::hal;
use rp_pico::hal::fugit::RateExtU32;
use rp_pico::hal::gpio::bank0::{Gpio8, Gpio9};
use rp_pico::hal::gpio::{FunctionI2C, Pin, PullUp};
use terrarium_sensor::sensors::Bme680Sensor;
use terrarium_sensor::{CycleTiming, LatestReadings, SensorTask, TerrariumSink};

/// Hands readings to the terrarium controller and logs each complete pair over RTT
#[derive(Default)]
struct TerrariumLink {
    latest: LatestReadings,
}

impl TerrariumSink for TerrariumLink {
    fn update_temperature(&mut self, temperature: f32) {
        self.latest.update_temperature(temperature);
    }

    fn update_humidity(&mut self, humidity: f32) {
        self.latest.update_humidity(humidity);
        if let Some((temperature, humidity)) = self.latest.both() {
            info!(
                "reading {}: {} C, {} %RH",
                self.latest.updates, temperature, humidity
            );
        }
    }
}

#[entry]
fn main() -> ! {
    info!("Terrarium sensor starting");
    // Grab our singleton objects
    let mut pac = pac::Peripherals::take().unwrap();

    // Set up the watchdog driver - needed by the clock setup code
    let mut watchdog = Watchdog::new(pac.WATCHDOG);

    // Configure the clocks
    //
    // The default is to generate a 125 MHz system clock
    let clocks = init_clocks_and_plls(
        rp_pico::XOSC_CRYSTAL_FREQ,
        pac.XOSC,
        pac.CLOCKS,
        pac.PLL_SYS,
        pac.PLL_USB,
        &mut pac.RESETS,
        &mut watchdog,
    )
    .ok()
    .unwrap();

    // The single-cycle I/O block controls our GPIO pins
    let sio = hal::Sio::new(pac.SIO);

    // Set the pins up according to their function on this particular board
    let pins = rp_pico::Pins::new(
        pac.IO_BANK0,
        pac.PADS_BANK0,
        sio.gpio_bank0,
        &mut pac.RESETS,
    );

    let timer = Timer::new(pac.TIMER, &mut pac.RESETS, &clocks);

    // BME680 on I2C0 (SDA GP8, SCL GP9)
    let sda_pin: Pin<Gpio8, FunctionI2C, PullUp> = pins.gpio8.reconfigure();
    let scl_pin: Pin<Gpio9, FunctionI2C, PullUp> = pins.gpio9.reconfigure();
    let i2c = hal::I2C::i2c0(
        pac.I2C0,
        sda_pin,
        scl_pin,
        100.kHz(),
        &mut pac.RESETS,
        clocks.system_clock.freq(),
    );

    let sensor = Bme680Sensor::probe(i2c, timer);

    let mut task = SensorTask::new(
        sensor,
        TerrariumLink::default(),
        timer,
        CycleTiming::default(),
    );
    task.initialise();

    info!(
        "Terrarium sensor ready, one reading every {} ms",
        task.timing().total_ms()
    );

    task.run()
}
