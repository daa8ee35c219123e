//! # Recommendation collaborator
//!
//! The cosmetic upsell tip shown in the cart view. The collaborator sits
//! behind the [`Recommender`] trait and is invoked as a detached task via
//! [`spawn_tip`]; the tip, or the fixed fallback on any failure, is
//! delivered over a channel the view may simply ignore. Nothing here is
//! ever awaited before checkout, and no failure ever escapes the boundary.
//!
//! There is no cancellation: when several requests race, whichever delivery
//! lands last wins.

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::mpsc;
use tracing::{debug, warn};

/// Fallback tip used whenever the collaborator fails.
pub const FALLBACK_TIP: &str = "Chúc bạn ngon miệng với sự lựa chọn tuyệt vời này!";

/// Errors a recommendation backend may produce. They never leave
/// [`spawn_tip`].
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RecommendError {
    #[error("recommendation backend unavailable: {0}")]
    Unavailable(String),
}

/// Upsell collaborator: given the dish names in the cart, produce a short
/// serving suggestion. Must tolerate an empty list.
#[async_trait]
pub trait Recommender: Send + Sync {
    async fn suggest(&self, dishes: &[String]) -> Result<String, RecommendError>;
}

/// Local pairing engine used as the default collaborator. Deterministic and
/// infallible; a hosted-model client can replace it behind the trait.
#[derive(Debug, Default, Clone, Copy)]
pub struct HouseRecommender;

#[async_trait]
impl Recommender for HouseRecommender {
    async fn suggest(&self, dishes: &[String]) -> Result<String, RecommendError> {
        let Some(first) = dishes.first() else {
            return Ok("Hãy chọn món trước, giỏ hàng của bạn đang trống.".to_string());
        };
        let pairing = if dishes.iter().any(|name| name.contains("Phở")) {
            "một ly Cà Phê Muối tráng miệng"
        } else if dishes.iter().any(|name| name.contains("Bún Chả")) {
            "phần Gỏi Cuốn Tôm Thịt khai vị"
        } else if dishes.iter().any(|name| name.contains("Cà Phê")) {
            "chiếc Bánh Mì Đặc Biệt ăn kèm"
        } else {
            "một món đồ uống mát lạnh"
        };
        Ok(format!(
            "{first} là lựa chọn tuyệt vời! Hãy thử thêm {pairing} để bữa ăn thêm trọn vẹn."
        ))
    }
}

/// Fire-and-forget tip request: spawns a detached task that asks the
/// collaborator and delivers the tip — or [`FALLBACK_TIP`] on any failure —
/// over `tips`. A receiver that has gone away just drops the delivery.
pub fn spawn_tip(recommender: Arc<dyn Recommender>, dishes: Vec<String>, tips: mpsc::Sender<String>) {
    tokio::spawn(async move {
        let tip = match recommender.suggest(&dishes).await {
            Ok(tip) => tip,
            Err(error) => {
                warn!(%error, "Recommendation failed, using fallback");
                FALLBACK_TIP.to_string()
            }
        };
        if tips.send(tip).await.is_err() {
            debug!("Tip arrived after the view went away");
        }
    });
}
