// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

#![no_main]
#![no_std]

use core::cell::RefCell;
use core::fmt::Write;

use cortex_m::interrupt::{free, Mutex};
use cortex_m_rt::entry;
use panic_halt as _;

use hal::{
    pac::{self, interrupt},
    prelude::*,
    serial::{Config, Serial},
};
use stm32f7xx_hal as hal;

use vectorscope::config::{self, ActiveSource};
use vectorscope::display::Display;
use vectorscope::hw::{BoardPins, Console, PwmPair, TickTimer};

/// Everything the tick interrupt touches.
struct Runtime {
    tick: TickTimer,
    display: Display<ActiveSource, PwmPair>,
}

static RUNTIME: Mutex<RefCell<Option<Runtime>>> = Mutex::new(RefCell::new(None));

#[entry]
fn main() -> ! {
    // Peripherals
    let dp = pac::Peripherals::take().unwrap();

    // Clocks
    let rcc = dp.RCC.constrain();
    let clocks = rcc.cfgr.sysclk(96.MHz()).freeze();
    let timclk = clocks.timclk1().raw();

    // GPIO
    let pins = BoardPins::new(dp.GPIOA);

    // USART1 (DBG)
    let usart_cfg = Config {
        baud_rate: 115_200.bps(),
        ..Default::default()
    };
    let serial = Serial::new(dp.USART1, (pins.usart1.tx, pins.usart1.rx), &clocks, usart_cfg);
    let mut console = Console::new(serial);

    console.println("vectorscope");
    console.write_str("  source: ");
    console.println(config::ACTIVE_SOURCE_NAME);

    let runtime = config::build_source().and_then(|source| {
        let pwm = PwmPair::tim2(
            dp.TIM2,
            pins.deflection,
            timclk,
            config::CARRIER_HZ,
            config::DEVICE_MAX,
        )?;
        let tick = TickTimer::tim3(dp.TIM3, timclk, config::TICK_RATE_HZ)?;
        Ok((source, pwm, tick))
    });

    let (source, pwm, tick) = match runtime {
        Ok(parts) => parts,
        Err(e) => {
            let _ = writeln!(console, "config error: {}\r", e);
            console.flush();
            loop {
                cortex_m::asm::wfi();
            }
        }
    };

    let pwm_setup = pwm.setup();
    let tick_setup = tick.setup();
    console.print_rate("carrier", pwm.carrier_hz(timclk));
    console.print_timer("TIM2", pwm_setup.prescaler, pwm_setup.reload);
    console.print_rate("tick", tick.rate_hz(timclk));
    console.print_timer("TIM3", tick_setup.prescaler, tick_setup.reload);
    console.flush();

    // The first tick must already find a runtime to acknowledge.
    free(|cs| {
        let mut rt = Runtime {
            tick,
            display: Display::new(source, pwm),
        };
        rt.tick.listen();
        RUNTIME.borrow(cs).replace(Some(rt));
    });

    loop {
        cortex_m::asm::wfi();
    }
}

#[interrupt]
fn TIM3() {
    free(|cs| {
        if let Some(rt) = RUNTIME.borrow(cs).borrow_mut().as_mut() {
            rt.display.tick();
            rt.tick.clear_interrupt();
        }
    });
}
