//! Telephone Call State Machine
//!
//! This example models a phone call with a hold state nested inside the
//! connected state.
//!
//! Key concepts:
//! - Entry and exit actions (the call timer)
//! - Sub-states inheriting triggers from their super-state
//! - Transition callbacks and `Display` for inspection
//!
//! Run with: RUST_LOG=stateful=debug cargo run --example telephone_call

use stateful::{state_enum, StateMachine};
use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

state_enum! {
    enum Phone {
        OffHook,
        Ringing,
        Connected,
        OnHold,
        PhoneDestroyed,
    }
}

state_enum! {
    enum Call {
        CallDialled,
        HungUp,
        CallConnected,
        LeftMessage,
        PlacedOnHold,
        TakenOffHold,
        PhoneHurledAgainstWall,
    }
}

fn main() -> stateful::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== Telephone Call State Machine ===\n");

    let started: Rc<Cell<Option<Instant>>> = Rc::default();
    let mut phone = StateMachine::new(Phone::OffHook);

    phone
        .configure(Phone::OffHook)
        .permit(Call::CallDialled, Phone::Ringing)?;

    phone
        .configure(Phone::Ringing)
        .permit(Call::HungUp, Phone::OffHook)?
        .permit(Call::CallConnected, Phone::Connected)?;

    let (start, stop) = (Rc::clone(&started), Rc::clone(&started));
    phone
        .configure(Phone::Connected)
        .on_entry(move |_| {
            start.set(Some(Instant::now()));
            println!("  Call timer started");
        })
        .on_exit(move |_| {
            if let Some(at) = stop.take() {
                println!("  Call timer stopped after {:?}", at.elapsed());
            }
        })
        .permit(Call::LeftMessage, Phone::OffHook)?
        .permit(Call::HungUp, Phone::OffHook)?
        .permit(Call::PlacedOnHold, Phone::OnHold)?;

    phone
        .configure(Phone::OnHold)
        .sub_state_of(Phone::Connected)?
        .permit(Call::TakenOffHold, Phone::Connected)?
        .permit(Call::HungUp, Phone::OffHook)?
        .permit(Call::PhoneHurledAgainstWall, Phone::PhoneDestroyed)?;

    phone.on_transition(|t| {
        println!("  {} -> {} via {}", t.source(), t.destination(), t.trigger());
    });

    println!("{phone}");
    for call in [
        Call::CallDialled,
        Call::CallConnected,
        Call::PlacedOnHold,
        Call::TakenOffHold,
        Call::HungUp,
    ] {
        println!("Firing [{call}]");
        phone.fire(call)?;
        println!("{phone}");
    }

    println!("\nHanging up again is not allowed while off hook:");
    if let Err(err) = phone.fire(Call::HungUp) {
        println!("  {err}");
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
