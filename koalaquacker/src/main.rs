use std::thread;
use std::time::Instant;

use clap::Parser;

use koalaquacker_lib::cli::Cli;
use koalaquacker_lib::{SimConfig, TickClock, World, logger, render};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    logger::init(cli.log_level())?;
    let config = cli.config();
    let mut world = World::from_config(&config)?;

    if config.realtime {
        run_realtime(&mut world, &config);
    } else {
        while !world.all_done() && world.tick_count() < config.max_ticks {
            world.tick();
        }
    }

    print!("{}", render(&world));
    let arrived = world
        .agents()
        .iter()
        .filter(|a| a.navigator.arrived())
        .count();
    println!(
        "{} ticks, {}/{} travelers arrived",
        world.tick_count(),
        arrived,
        world.agents().len()
    );
    if !world.all_done() {
        log::warn!("stopped after {} ticks with travelers still underway", config.max_ticks);
    }
    Ok(())
}

/// Poll once per frame and step the world whenever a tick is due.
fn run_realtime(world: &mut World, config: &SimConfig) {
    let mut clock = TickClock::new(config.tick);
    let mut last = Instant::now();
    while !world.all_done() && world.tick_count() < config.max_ticks {
        thread::sleep(config.frame);
        let now = Instant::now();
        if clock.advance(now - last) {
            world.tick();
            // clear screen, cursor home
            print!("\x1b[2J\x1b[H{}", render(world));
        }
        last = now;
    }
}
