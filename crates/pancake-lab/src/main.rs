//! # Pancake Lab demo
//!
//! Runs one order through the whole kitchen:
//!
//! 1.  Start an order for building 1, room 1.
//! 2.  Add two pancakes and top them.
//! 3.  Complete, prepare and deliver the order.
//! 4.  Print the activity journal.
//!
//! Settings come from [`LabConfig::from_env`]; set `RUST_LOG=debug` for full payloads.

use entity_framework::tracing::setup_tracing;
use pancake_lab::config::LabConfig;
use pancake_lab::lifecycle::PancakeLab;
use pancake_lab::model::{Address, Ingredient};
use std::error::Error;
use tracing::{info, Instrument};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = LabConfig::from_env()?;
    setup_tracing(&config.log_filter);

    let lab = PancakeLab::new(&config);
    let service = lab.service.clone();

    let span = tracing::info_span!("order_taking");
    let order_id = async {
        let order_id = service.start_order(Address::new(1, 1))?;

        let first = service.add_pancake(order_id).await?;
        for ingredient in [
            Ingredient::MilkChocolate,
            Ingredient::Hazelnuts,
            Ingredient::WhippedCream,
        ] {
            service.add_ingredient(first, ingredient).await?;
        }

        let second = service.add_pancake(order_id).await?;
        for ingredient in [Ingredient::DarkChocolate, Ingredient::WhippedCream] {
            service.add_ingredient(second, ingredient).await?;
        }

        Ok::<_, Box<dyn Error>>(order_id)
    }
    .instrument(span)
    .await?;

    info!(pancakes = ?service.view_order(order_id)?, "Order taken");

    let span = tracing::info_span!("kitchen");
    let delivery = async {
        service.complete_order(order_id).await?;
        service.prepare_order(order_id).await?;
        service.deliver_order(order_id).await
    }
    .instrument(span)
    .await?;

    info!(
        order_id = %delivery.order.id,
        address = %delivery.order.address,
        pancakes = ?delivery.pancakes,
        "Delivered"
    );

    for line in lab.order_log.entries().await? {
        println!("{line}");
    }

    drop(service);
    lab.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
