//! Demo binary: a customer terminal places an order, and an admin terminal
//! attached to the same slot — the second "tab" — sees it, serves it, and
//! closes out the shift.

use gourmet_pos::{menu, setup_tracing, FileSlot, OrderFilter, PosSystem, Screen, SLOT_NAME};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let path = std::env::var("GOURMET_POS_SLOT").unwrap_or_else(|_| format!("{SLOT_NAME}.json"));
    info!(%path, "Starting Gourmet Express POS");
    let mut system = PosSystem::new(Arc::new(FileSlot::new(&path)));

    // Customer tab: log in, build a cart, ask for a tip, send the order.
    let mut customer = system.open_terminal();
    customer.log_in("lan", "hoa-phuong")?;

    let dishes = menu::dishes();
    customer.add_to_cart(&dishes[0])?;
    customer.add_to_cart(&dishes[0])?;
    customer.add_to_cart(&dishes[4])?;
    customer.go(Screen::Cart)?;

    customer.request_tip();
    if let Some(tip) = customer.next_tip().await {
        info!(%tip, "Upsell suggestion");
    }

    let order = customer.submit_order(menu::TABLES[0]).await?;
    info!(id = %order.id, total = order.total_price, "Order sent to the kitchen");

    // Admin tab: a second view over the same slot.
    let mut admin = system.open_terminal();
    admin.log_in("admin", "admin")?;

    let pending = admin.dashboard(OrderFilter::Pending).await?;
    info!(pending = pending.len(), "Open orders on the dashboard");
    for order in &pending {
        admin.complete_order(order.id.clone()).await?;
    }

    let stats = admin.stats().await?;
    info!(pending = stats.pending, revenue = stats.revenue, "End of shift");

    drop(customer);
    drop(admin);
    system.shutdown().await;
    Ok(())
}
