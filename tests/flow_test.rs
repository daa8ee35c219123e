//! End-to-end terminal flows: customer checkout reaching the admin
//! dashboard, role gating, and the recommendation boundary.

use async_trait::async_trait;
use gourmet_pos::ids::{ReceiptIds, SystemClock};
use gourmet_pos::recommend::{RecommendError, Recommender};
use gourmet_pos::{
    menu, DishId, MemorySlot, OrderFilter, PosSystem, Role, Screen, StoreError, TerminalError,
    FALLBACK_TIP,
};
use std::sync::Arc;
use std::time::Duration;

struct FailingRecommender;

#[async_trait]
impl Recommender for FailingRecommender {
    async fn suggest(&self, _dishes: &[String]) -> Result<String, RecommendError> {
        Err(RecommendError::Unavailable("network down".to_string()))
    }
}

struct SlowRecommender;

#[async_trait]
impl Recommender for SlowRecommender {
    async fn suggest(&self, dishes: &[String]) -> Result<String, RecommendError> {
        tokio::time::sleep(Duration::from_millis(250)).await;
        Ok(format!("Món {} rất hợp hôm nay.", dishes.len()))
    }
}

fn system_with(recommender: Arc<dyn Recommender>) -> PosSystem {
    PosSystem::with_parts(
        Arc::new(MemorySlot::new()),
        Arc::new(ReceiptIds),
        Arc::new(SystemClock),
        recommender,
    )
}

#[tokio::test]
async fn customer_checkout_reaches_the_admin_dashboard() {
    let mut system = PosSystem::new(Arc::new(MemorySlot::new()));

    let mut customer = system.open_terminal();
    assert_eq!(customer.log_in("lan", "x").unwrap(), Role::Customer);
    assert_eq!(customer.session().screen(), Screen::Menu);

    let pho = menu::find_dish(&DishId::from("1")).unwrap();
    let banh_mi = menu::find_dish(&DishId::from("5")).unwrap();
    customer.add_to_cart(&pho).unwrap();
    customer.add_to_cart(&pho).unwrap();
    customer.add_to_cart(&banh_mi).unwrap();
    customer.add_to_cart(&banh_mi).unwrap();
    customer.update_quantity(&DishId::from("5"), -1).unwrap();
    customer.go(Screen::Cart).unwrap();

    let order = customer.submit_order("Bàn 01").await.unwrap();
    assert_eq!(order.total_price, 155000);
    assert!(customer.cart().is_empty());
    assert_eq!(customer.session().screen(), Screen::OrderSuccess);

    // The admin tab attaches to the same slot and sees the order at once.
    let mut admin = system.open_terminal();
    assert_eq!(admin.log_in("admin", "admin").unwrap(), Role::Admin);
    assert_eq!(admin.session().screen(), Screen::Dashboard);

    let pending = admin.dashboard(OrderFilter::Pending).await.unwrap();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].customer_name, "lan");

    assert!(admin.complete_order(pending[0].id.clone()).await.unwrap());
    assert_eq!(admin.dashboard(OrderFilter::Completed).await.unwrap().len(), 1);
    assert_eq!(admin.stats().await.unwrap().pending, 0);

    drop(customer);
    drop(admin);
    system.shutdown().await;
}

#[tokio::test]
async fn guests_and_customers_are_gated_by_role() {
    let mut system = PosSystem::new(Arc::new(MemorySlot::new()));

    let mut guest = system.open_terminal();
    let pho = menu::find_dish(&DishId::from("1")).unwrap();
    assert!(matches!(
        guest.add_to_cart(&pho),
        Err(TerminalError::NotAllowed)
    ));
    assert!(matches!(
        guest.submit_order("Bàn 01").await,
        Err(TerminalError::NotAllowed)
    ));
    assert!(matches!(guest.go(Screen::Menu), Err(TerminalError::NotAllowed)));

    let mut customer = system.open_terminal();
    customer.log_in("lan", "x").unwrap();
    assert!(matches!(
        customer.dashboard(OrderFilter::All).await,
        Err(TerminalError::NotAllowed)
    ));
    assert!(matches!(
        customer.go(Screen::Dashboard),
        Err(TerminalError::NotAllowed)
    ));

    drop(guest);
    drop(customer);
    system.shutdown().await;
}

#[tokio::test]
async fn a_rejected_submission_keeps_the_cart_for_correction() {
    let mut system = PosSystem::new(Arc::new(MemorySlot::new()));
    let mut customer = system.open_terminal();
    customer.log_in("lan", "x").unwrap();

    let pho = menu::find_dish(&DishId::from("1")).unwrap();
    customer.add_to_cart(&pho).unwrap();

    let rejected = customer.submit_order("").await;
    assert!(matches!(
        rejected,
        Err(TerminalError::Store(StoreError::NoTable))
    ));
    assert_eq!(customer.cart().lines().len(), 1);

    drop(customer);
    system.shutdown().await;
}

#[tokio::test]
async fn logout_clears_identity_and_cart() {
    let mut system = PosSystem::new(Arc::new(MemorySlot::new()));
    let mut customer = system.open_terminal();
    customer.log_in("lan", "x").unwrap();
    customer
        .add_to_cart(&menu::find_dish(&DishId::from("2")).unwrap())
        .unwrap();

    customer.log_out();
    assert!(customer.cart().is_empty());
    assert_eq!(customer.session().screen(), Screen::Login);
    assert!(customer.session().user().is_none());

    drop(customer);
    system.shutdown().await;
}

#[tokio::test]
async fn a_failing_recommender_degrades_to_the_fallback_tip() {
    let mut system = system_with(Arc::new(FailingRecommender));
    let mut customer = system.open_terminal();
    customer.log_in("lan", "x").unwrap();
    customer
        .add_to_cart(&menu::find_dish(&DishId::from("1")).unwrap())
        .unwrap();

    customer.request_tip();
    assert_eq!(customer.next_tip().await.as_deref(), Some(FALLBACK_TIP));

    drop(customer);
    system.shutdown().await;
}

#[tokio::test]
async fn a_slow_recommender_never_delays_checkout() {
    let mut system = system_with(Arc::new(SlowRecommender));
    let mut customer = system.open_terminal();
    customer.log_in("lan", "x").unwrap();
    customer
        .add_to_cart(&menu::find_dish(&DishId::from("1")).unwrap())
        .unwrap();

    customer.request_tip();
    let order = customer.submit_order("Bàn 02").await.unwrap();
    assert_eq!(order.items.len(), 1);
    // The tip is still in flight when checkout finishes; it arrives later.
    assert_eq!(customer.try_tip(), None);
    assert!(customer.next_tip().await.is_some());

    drop(customer);
    system.shutdown().await;
}
