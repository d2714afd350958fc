//! Embedded entry point: peripheral bring-up, task spawning and the main cycle.

mod display;
mod leds;
mod sampler;
mod tasks;

use defmt::{debug, info};
use embassy_executor::Spawner;
use embassy_rp::adc::{self, Adc, Channel};
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::peripherals::I2C1;
use embassy_rp::pwm::Pwm;
use embassy_rp::{bind_interrupts, i2c};
use embassy_time::{Instant, Timer};
use joystick_display::config::{
    BUTTON_A_PIN,
    DISPLAY_HEIGHT,
    DISPLAY_WIDTH,
    I2C_SCL_PIN,
    I2C_SDA_PIN,
    JOYSTICK_BUTTON_PIN,
    JOYSTICK_X_PIN,
    JOYSTICK_Y_PIN,
    LED_BLUE_PIN,
    LED_GREEN_PIN,
    LED_RED_PIN,
    SAMPLE_PERIOD_MS,
};
use joystick_display::{CycleOutput, SharedState, StatusTimer, plan_cycle};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use self::display::{Screen, display_i2c_config};
use self::leds::{LedPwm, led_pwm_config};
use self::sampler::JoystickSampler;
use self::tasks::{button_a_task, joystick_button_task};

bind_interrupts!(struct Irqs {
    ADC_IRQ_FIFO => adc::InterruptHandler;
    I2C1_IRQ => i2c::InterruptHandler<I2C1>;
});

// Program metadata for `picotool info`
#[unsafe(link_section = ".bi_entries")]
#[used]
pub static PICOTOOL_ENTRIES: [embassy_rp::binary_info::EntryAddr; 4] = [
    embassy_rp::binary_info::rp_program_name!(c"pico2-joystick-display"),
    embassy_rp::binary_info::rp_program_description!(c"Joystick LED dimmer with SSD1306 cursor and border"),
    embassy_rp::binary_info::rp_cargo_version!(),
    embassy_rp::binary_info::rp_program_build_attribute!(),
];

/// Device state shared by the edge tasks and the main cycle.
static STATE: StaticCell<SharedState> = StaticCell::new();

/// Milliseconds since boot, truncated to `u32` (wraps after ~49 days).
#[inline]
fn now_ms() -> u32 { Instant::now().as_millis() as u32 }

/// Bring up the peripherals, spawn the edge tasks and run the main cycle forever.
pub async fn run(spawner: Spawner) -> ! {
    info!("Joystick display starting...");

    let p = embassy_rp::init(Default::default());
    let state: &'static SharedState = STATE.init(SharedState::new());

    // Display first: without it there is nothing to run
    let i2c = i2c::I2c::new_async(p.I2C1, p.PIN_15, p.PIN_14, Irqs, display_i2c_config());
    let mut screen = match Screen::init(i2c).await {
        Ok(screen) => screen,
        Err(e) => defmt::panic!("Startup failed: {}", e),
    };
    info!(
        "Display initialized ({}x{}, SDA=GPIO{}, SCL=GPIO{})",
        DISPLAY_WIDTH, DISPLAY_HEIGHT, I2C_SDA_PIN, I2C_SCL_PIN
    );

    // Joystick axes
    let adc = Adc::new(p.ADC, Irqs, adc::Config::default());
    let x = Channel::new_pin(p.PIN_27, Pull::None);
    let y = Channel::new_pin(p.PIN_26, Pull::None);
    let mut sampler = JoystickSampler::new(adc, x, y);
    info!("ADC initialized (X=GPIO{}, Y=GPIO{})", JOYSTICK_X_PIN, JOYSTICK_Y_PIN);

    // Buttons (active-low with internal pull-up)
    let joystick_button = Input::new(p.PIN_22, Pull::Up);
    let button_a = Input::new(p.PIN_5, Pull::Up);

    // LEDs: blue (GPIO12, A) and red (GPIO13, B) share PWM slice 6
    let mut leds = LedPwm::new(Pwm::new_output_ab(p.PWM_SLICE6, p.PIN_12, p.PIN_13, led_pwm_config()));
    let green_led = Output::new(p.PIN_11, Level::Low);
    info!(
        "LEDs initialized (R=GPIO{}, G=GPIO{}, B=GPIO{})",
        LED_RED_PIN, LED_GREEN_PIN, LED_BLUE_PIN
    );

    spawner.spawn(joystick_button_task(joystick_button, green_led, state)).unwrap();
    spawner.spawn(button_a_task(button_a, state)).unwrap();
    info!(
        "Buttons initialized (joystick=GPIO{}, A=GPIO{})",
        JOYSTICK_BUTTON_PIN, BUTTON_A_PIN
    );

    let mut status = StatusTimer::new();

    info!("Main loop starting");

    loop {
        let sample = sampler.read().await;
        let snapshot = state.snapshot();
        let CycleOutput { duty, frame } = plan_cycle(sample, snapshot);

        leds.set_duty(duty);
        screen.present(&frame).await;

        if status.due(now_ms()) {
            debug!(
                "Sample {} -> duty {}, cursor ({}, {}), state {}",
                sample, duty, frame.cursor.x, frame.cursor.y, snapshot
            );
        }

        Timer::after_millis(SAMPLE_PERIOD_MS).await;
    }
}
