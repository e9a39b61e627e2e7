use anyhow::Context;
use emporium_app::{app_config::Config, demo, init_tracing};

fn main() -> anyhow::Result<()> {
    let config = Config::load().context("Failed to load config")?;
    init_tracing(&config.logging);

    tracing::info!(store = %config.store.name, "Running storefront demo");

    let report = demo::run(&config.store.name)?;
    if let Err(message) = &report.order {
        tracing::warn!(%message, "Demo order was not created");
    }

    println!("{}", report.render(config.demo.output)?);
    Ok(())
}
