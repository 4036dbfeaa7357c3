use anyhow::Context;

use bazaar_core::UuidV7Generator;
use bazaar_storefront::{OutputMode, StorefrontConfig, scenario};

fn main() -> anyhow::Result<()> {
    bazaar_observability::init(StorefrontConfig::log_format_from_env());
    let config = StorefrontConfig::from_env().context("invalid storefront configuration")?;

    tracing::info!(
        locale = ?config.locale,
        markup = ?config.markup,
        output = ?config.output,
        "starting bazaar"
    );

    let report = scenario::run(&config.renderer(), &UuidV7Generator)
        .context("scenario failed")?;

    match config.output {
        OutputMode::Text => println!("{}", report.text()),
        OutputMode::Json => println!(
            "{}",
            serde_json::to_string_pretty(&report.cart.snapshot())
                .context("failed to serialize cart snapshot")?
        ),
    }

    Ok(())
}
