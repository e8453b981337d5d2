//! Zone Sim demo CLI
//!
//! Runs one full autoplay session on a real clock and logs each zone:
//!
//! ```text
//! zone-sim [config.json] [seed]
//! ```

use std::time::{Duration, Instant};

use rand::Rng;
use zone_sim::consts::{MAP_MAX, MAP_MIN};
use zone_sim::{SimConfig, ZoneSimulator};

fn load_config(path: Option<&str>) -> Result<SimConfig, Box<dyn std::error::Error>> {
    match path {
        Some(path) => {
            let json = std::fs::read_to_string(path)?;
            Ok(serde_json::from_str(&json)?)
        }
        None => Ok(SimConfig::default()),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let config = load_config(args.next().as_deref())?;
    let seed = match args.next() {
        Some(raw) => raw.parse()?,
        None => rand::rng().random(),
    };

    let mut sim = ZoneSimulator::new(&config, seed)?;
    log::info!("Starting run with seed {seed}");

    let mid = (MAP_MIN + MAP_MAX) / 2.0;
    sim.place_initial_zone(mid, mid);
    sim.start_autoplay();

    let mut last = Instant::now();
    while !sim.is_terminal() {
        std::thread::sleep(Duration::from_millis(50));
        let now = Instant::now();
        sim.update((now - last).as_secs_f32());
        last = now;
    }

    println!("seed {seed}");
    for zone in sim.zones() {
        println!(
            "phase {}: center ({:.2}, {:.2}) radius {}",
            zone.phase, zone.center.x, zone.center.y, zone.radius
        );
    }
    Ok(())
}
