//! Electric Fan
//!
//! This example drives a fan with an off state and three gears.
//!
//! Key concepts:
//! - Declaring states and events with the macros
//! - Registering one handler under several states
//! - Handling rejected events without stopping
//! - Routing transition diagnostics through tracing
//!
//! Run with: RUST_LOG=info cargo run --example electric_fan

use tracing_subscriber::EnvFilter;
use turnstile::builder::StateMachineBuilder;
use turnstile::{event_enum, state_enum, Handler};

state_enum! {
    enum FanState {
        PowerOff,
        FirstGear,
        SecondGear,
        ThirdGear,
    }
}

event_enum! {
    enum Button {
        PressOff,
        PressFirst,
        PressSecond,
        PressThird,
    }
}

fn announce(message: &'static str, next: FanState) -> Handler<FanState> {
    Handler::new(move || {
        println!("{message}");
        next
    })
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("=== Electric Fan ===\n");

    let power_off = announce("power off", FanState::PowerOff);
    let fan = StateMachineBuilder::new()
        .name("fan")
        .initial(FanState::PowerOff)
        .handler_from_each(
            [
                FanState::PowerOff,
                FanState::FirstGear,
                FanState::SecondGear,
                FanState::ThirdGear,
            ],
            Button::PressOff,
            power_off,
        )
        .handler(
            FanState::PowerOff,
            Button::PressFirst,
            announce("first gear on", FanState::FirstGear),
        )
        .handler(
            FanState::PowerOff,
            Button::PressSecond,
            announce("second gear on", FanState::SecondGear),
        )
        .handler(
            FanState::PowerOff,
            Button::PressThird,
            announce("third gear on", FanState::ThirdGear),
        )
        .build()
        .expect("initial state is set");

    // Gears can only be changed from power off, so the second press is rejected.
    for button in [Button::PressFirst, Button::PressSecond, Button::PressOff] {
        match fan.dispatch(button) {
            Ok(state) => println!("fan is now {:?}", state),
            Err(err) => println!("rejected: {err}"),
        }
    }

    println!("\n=== Example Complete ===");
}
