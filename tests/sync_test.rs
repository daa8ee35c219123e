//! Cross-view synchronization through a shared slot: seeding, change
//! notification, last-write-wins convergence, and durable round-trips.

use chrono::{TimeZone, Utc};
use gourmet_pos::ids::{SequentialIds, SteppingClock};
use gourmet_pos::model::CartLine;
use gourmet_pos::recommend::HouseRecommender;
use gourmet_pos::{menu, DishId, FileSlot, MemorySlot, OrderFilter, PosSystem, StorageSlot};
use std::sync::Arc;
use std::time::Duration;

fn deterministic_system(slot: Arc<dyn StorageSlot>) -> PosSystem {
    PosSystem::with_parts(
        slot,
        Arc::new(SequentialIds::new()),
        Arc::new(SteppingClock::new(
            Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap(),
            60,
        )),
        Arc::new(HouseRecommender),
    )
}

fn line(dish_id: &str, quantity: u32) -> CartLine {
    CartLine {
        dish: menu::find_dish(&DishId::from(dish_id)).expect("catalog dish"),
        quantity,
    }
}

const POLL: Duration = Duration::from_millis(10);
const POLL_ROUNDS: usize = 200;

#[tokio::test]
async fn a_second_view_lists_an_external_submission_as_pending() {
    let mut system = deterministic_system(Arc::new(MemorySlot::new()));
    let view_a = system.attach_store();
    let view_b = system.attach_store();

    let order = view_a
        .submit(vec![line("1", 2)], "Bàn 01", "lan")
        .await
        .unwrap();

    let mut seen = Vec::new();
    for _ in 0..POLL_ROUNDS {
        seen = view_b.list(OrderFilter::Pending).await.unwrap();
        if !seen.is_empty() {
            break;
        }
        tokio::time::sleep(POLL).await;
    }
    assert_eq!(seen.len(), 1, "view B never saw the external submission");
    assert_eq!(seen[0].id, order.id);

    drop(view_a);
    drop(view_b);
    system.shutdown().await;
}

#[tokio::test]
async fn views_converge_when_both_sides_write() {
    let mut system = deterministic_system(Arc::new(MemorySlot::new()));
    let view_a = system.attach_store();
    let view_b = system.attach_store();

    view_a
        .submit(vec![line("1", 1)], "Bàn 01", "lan")
        .await
        .unwrap();

    // B refreshes to A's write before it writes itself; its full-replace
    // write then carries both orders back to A.
    for _ in 0..POLL_ROUNDS {
        if view_b.orders().await.unwrap().len() == 1 {
            break;
        }
        tokio::time::sleep(POLL).await;
    }
    view_b
        .submit(vec![line("5", 1)], "Bàn 02", "minh")
        .await
        .unwrap();

    let mut from_a = Vec::new();
    for _ in 0..POLL_ROUNDS {
        from_a = view_a.orders().await.unwrap();
        if from_a.len() == 2 {
            break;
        }
        tokio::time::sleep(POLL).await;
    }
    assert_eq!(from_a.len(), 2, "view A never converged on B's write");
    assert_eq!(from_a, view_b.orders().await.unwrap());

    drop(view_a);
    drop(view_b);
    system.shutdown().await;
}

#[tokio::test]
async fn a_view_attached_later_seeds_from_the_slot() {
    let mut system = deterministic_system(Arc::new(MemorySlot::new()));
    let early = system.attach_store();
    early
        .submit(vec![line("3", 1)], "Bàn 04", "thu")
        .await
        .unwrap();

    // Seeding happens before the new actor serves its first request.
    let late = system.attach_store();
    assert_eq!(late.orders().await.unwrap().len(), 1);

    drop(early);
    drop(late);
    system.shutdown().await;
}

#[tokio::test]
async fn malformed_slot_contents_degrade_to_an_empty_store() {
    let mut system = deterministic_system(Arc::new(MemorySlot::seeded("{not json at all")));
    let store = system.attach_store();

    assert!(store.orders().await.unwrap().is_empty());

    // The store still works; its next write replaces the junk.
    store
        .submit(vec![line("2", 1)], "Bàn 05", "lan")
        .await
        .unwrap();
    assert_eq!(store.orders().await.unwrap().len(), 1);

    drop(store);
    system.shutdown().await;
}

#[tokio::test]
async fn file_slot_round_trips_the_collection_across_a_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gourmet_orders.json");

    let mut first_run = deterministic_system(Arc::new(FileSlot::new(&path)));
    let store = first_run.attach_store();
    store
        .submit(vec![line("1", 2), line("5", 1)], "Bàn 01", "lan")
        .await
        .unwrap();
    let served = store
        .submit(vec![line("6", 3)], "Mang về", "minh")
        .await
        .unwrap();
    store.complete(served.id).await.unwrap();
    let before = store.orders().await.unwrap();
    drop(store);
    first_run.shutdown().await;

    let mut second_run = deterministic_system(Arc::new(FileSlot::new(&path)));
    let reloaded = second_run.attach_store();
    assert_eq!(reloaded.orders().await.unwrap(), before);

    drop(reloaded);
    second_run.shutdown().await;
}
