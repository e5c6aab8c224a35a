//! Range demo firmware for the STM32F401RE Nucleo.
//!
//! One GP2Y0A21YK ranger on PA0 (ADC1_IN0), readings logged over RTT twice
//! a second. Build with the `firmware` feature for the thumbv7em target.

#![no_std]
#![no_main]

use defmt::info;
use embassy_executor::Spawner;
use embassy_stm32::Config;
use embassy_stm32::adc::Adc;
use embassy_stm32::gpio::{Level, Output, Speed};
use embassy_time::Timer;
use {defmt_rtt as _, panic_probe as _};

use gp2y0a21_core::curve::{self, RangeMode};

defmt::timestamp!("{=u64}", { embassy_time::Instant::now().as_millis() });

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_stm32::init(Config::default());

    info!("=== GP2Y0A21YK Range Demo ===");

    // LED for visual feedback
    let mut led = Output::new(p.PA5, Level::Low, Speed::Low);

    // Ranger output on PA0 (ADC1_IN0)
    let mut adc = Adc::new(p.ADC1);
    let mut pin = p.PA0;

    info!("ADC initialized, starting range readings...");

    loop {
        let raw = adc.blocking_read(&mut pin);

        // Far mode: the rated 10-80 cm regime. Switch to Close for
        // targets known to sit under 10 cm.
        let cm = curve::range_cm(RangeMode::Far, raw);
        let inches = curve::cm_to_in(cm);

        info!("raw: {}  range: {} cm ({} in)", raw, cm, inches);

        // Toggle LED to show we're running
        led.toggle();

        // Wait 500ms between readings
        Timer::after_millis(500).await;
    }
}
