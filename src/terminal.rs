//! # Terminal
//!
//! One point-of-sale view: the session, the active cart, and the client of
//! the order store behind it. The source system keeps all of this in UI
//! component state; here it is an explicit value the caller owns, with
//! every user action routed through a method that enforces the session's
//! role gates before touching the cart or the store.

use crate::model::{Cart, Dish, DishId, Order, OrderId, Role};
use crate::recommend::{spawn_tip, Recommender};
use crate::session::{self, AuthError, Screen, Session, SessionAction};
use crate::store::{OrderFilter, OrderStoreClient, StoreError, StoreStats};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::mpsc;
use tracing::{debug, info, instrument};

const TIP_BUFFER: usize = 4;

/// Errors surfaced to the person at the terminal.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TerminalError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Store(#[from] StoreError),

    /// The current identity or screen does not allow the attempted action.
    #[error("action not available for the current session")]
    NotAllowed,
}

pub struct Terminal {
    session: Session,
    cart: Cart,
    store: OrderStoreClient,
    recommender: Arc<dyn Recommender>,
    tips_tx: mpsc::Sender<String>,
    tips_rx: mpsc::Receiver<String>,
}

impl Terminal {
    pub fn new(store: OrderStoreClient, recommender: Arc<dyn Recommender>) -> Self {
        let (tips_tx, tips_rx) = mpsc::channel(TIP_BUFFER);
        Self {
            session: Session::new(),
            cart: Cart::new(),
            store,
            recommender,
            tips_tx,
            tips_rx,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Authenticates and lands on the role's home screen.
    #[instrument(skip(self, password))]
    pub fn log_in(&mut self, username: &str, password: &str) -> Result<Role, TerminalError> {
        let user = session::login(username, password)?;
        let role = user.role;
        info!(username = %user.username, ?role, "Logged in");
        self.session = self.session.clone().apply(SessionAction::LogIn(user));
        Ok(role)
    }

    /// Clears identity and cart and returns to the login screen.
    pub fn log_out(&mut self) {
        info!("Logged out");
        self.cart.clear();
        self.session = self.session.clone().apply(SessionAction::LogOut);
    }

    /// Navigates to a screen the current role allows.
    pub fn go(&mut self, screen: Screen) -> Result<(), TerminalError> {
        let next = self.session.clone().apply(SessionAction::Go(screen));
        if next.screen() != screen {
            return Err(TerminalError::NotAllowed);
        }
        self.session = next;
        Ok(())
    }

    /// Adds one unit of the dish to the cart. Requires a logged-in
    /// identity.
    pub fn add_to_cart(&mut self, dish: &Dish) -> Result<(), TerminalError> {
        if self.session.user().is_none() {
            return Err(TerminalError::NotAllowed);
        }
        self.cart.add_dish(dish);
        debug!(dish = %dish.id, count = self.cart.item_count(), "Added to cart");
        Ok(())
    }

    /// Applies a quantity delta to a cart line. Requires a logged-in
    /// identity.
    pub fn update_quantity(&mut self, id: &DishId, delta: i32) -> Result<(), TerminalError> {
        if self.session.user().is_none() {
            return Err(TerminalError::NotAllowed);
        }
        self.cart.update_quantity(id, delta);
        Ok(())
    }

    /// Kicks off the cosmetic upsell suggestion for the current cart. The
    /// result lands on the tip feed whenever it is ready; checkout never
    /// waits for it.
    pub fn request_tip(&self) {
        spawn_tip(
            self.recommender.clone(),
            self.cart.dish_names(),
            self.tips_tx.clone(),
        );
    }

    /// Next delivered tip, without waiting.
    pub fn try_tip(&mut self) -> Option<String> {
        self.tips_rx.try_recv().ok()
    }

    /// Waits for the next delivered tip. With several requests in flight,
    /// later deliveries supersede earlier ones.
    pub async fn next_tip(&mut self) -> Option<String> {
        self.tips_rx.recv().await
    }

    /// Submits the cart for the given table. On success the cart is cleared
    /// and the view moves to the order-success screen; on rejection the
    /// cart is left intact for correction.
    #[instrument(skip(self))]
    pub async fn submit_order(&mut self, table: &str) -> Result<Order, TerminalError> {
        let user = self.session.user().ok_or(TerminalError::NotAllowed)?;
        let customer = user.username.clone();
        let order = self
            .store
            .submit(self.cart.lines().to_vec(), table, customer)
            .await?;
        self.cart.clear();
        self.session = self
            .session
            .clone()
            .apply(SessionAction::Go(Screen::OrderSuccess));
        Ok(order)
    }

    /// Marks an order served. Admin only.
    pub async fn complete_order(&self, id: OrderId) -> Result<bool, TerminalError> {
        self.require_admin()?;
        Ok(self.store.complete(id).await?)
    }

    /// Dashboard listing, most recent first. Admin only.
    pub async fn dashboard(&self, filter: OrderFilter) -> Result<Vec<Order>, TerminalError> {
        self.require_admin()?;
        Ok(self.store.list(filter).await?)
    }

    /// Dashboard figures. Admin only.
    pub async fn stats(&self) -> Result<StoreStats, TerminalError> {
        self.require_admin()?;
        Ok(self.store.stats().await?)
    }

    fn require_admin(&self) -> Result<(), TerminalError> {
        match self.session.role() {
            Some(Role::Admin) => Ok(()),
            _ => Err(TerminalError::NotAllowed),
        }
    }
}
