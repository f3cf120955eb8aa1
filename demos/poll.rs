// SPDX-License-Identifier: MPL-2.0

//! Polls a Kulon 912 once and prints its state.
//!
//! # Usage
//!
//! ```bash
//! cargo run --example poll -- <host> [port]
//! ```
//!
//! # Example
//!
//! ```bash
//! RUST_LOG=kulon912=debug cargo run --example poll -- 192.168.1.60
//! ```

use std::env;
use std::time::Duration;

use kulon912::{DeviceClient, DeviceMode, HttpConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <host> [port]", args[0]);
        eprintln!();
        eprintln!("Examples:");
        eprintln!("  cargo run --example poll -- 192.168.1.60");
        eprintln!("  cargo run --example poll -- kulon.local 8080");
        std::process::exit(1);
    }

    let mut config = HttpConfig::new(&args[1]).with_timeout(Duration::from_secs(5));
    if let Some(port) = args.get(2) {
        config = config.with_port(port.parse()?);
    }

    let device = DeviceClient::from_config(config)?;
    println!("Polling {}", device.status_url());

    let state = match device.fetch().await {
        Ok(state) => state,
        Err(e) if e.is_unreachable() => {
            eprintln!("Device offline: {e}");
            std::process::exit(2);
        }
        Err(e) => return Err(e.into()),
    };

    println!("Mode:    {}", state.mode());
    if let Some(voltage) = state.voltage() {
        println!("Voltage: {voltage:.2} V");
    }
    if let Some(current) = state.current() {
        println!("Current: {current:.2} A");
    }
    if let Some(energy) = state.energy() {
        let label = if state.mode() == DeviceMode::Charging {
            "Charged"
        } else {
            "Capacity"
        };
        println!("{label}: {energy:.2} Ah");
    }

    Ok(())
}
