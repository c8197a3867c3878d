use anyhow::{Context, Result};

use cascade_engine::CascadeClock;
use cascade_engine::logging::{LoggingConfig, init_logging};

mod config;

use config::DriverConfig;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let config = DriverConfig::from_env().context("failed to load driver configuration")?;
    log::info!("driving {} tick(s) every {:?}", config.ticks, config.interval);

    let mut clock = CascadeClock::hms();
    for _ in 0..config.ticks {
        clock.tick();
        println!("{}", clock.render());

        if !config.interval.is_zero() {
            std::thread::sleep(config.interval);
        }
    }

    log::debug!("final read-out {}", clock.render_labeled());
    Ok(())
}
