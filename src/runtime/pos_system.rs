//! # Pos system
//!
//! The runtime orchestrator. It owns the shared storage slot and the
//! generators every store actor uses, spawns one store actor per attached
//! view, and coordinates graceful shutdown.
//!
//! The canonical wiring is create → attach → run → shutdown:
//!
//! 1. build a slot ([`MemorySlot`](crate::slot::MemorySlot) or
//!    [`FileSlot`](crate::slot::FileSlot)) and a `PosSystem` on top of it;
//! 2. open a [`Terminal`] per concurrent view — each gets its own store
//!    actor seeded from, and synchronized through, the shared slot;
//! 3. drop every terminal/client when done — each actor's request channel
//!    closes and its loop exits;
//! 4. await [`PosSystem::shutdown`] so no actor is cut off mid-message.

use crate::ids::{Clock, OrderIds, ReceiptIds, SystemClock};
use crate::recommend::{HouseRecommender, Recommender};
use crate::slot::StorageSlot;
use crate::store::{self, OrderStoreClient};
use crate::terminal::Terminal;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::info;

pub struct PosSystem {
    slot: Arc<dyn StorageSlot>,
    ids: Arc<dyn OrderIds>,
    clock: Arc<dyn Clock>,
    recommender: Arc<dyn Recommender>,
    handles: Vec<JoinHandle<()>>,
}

impl PosSystem {
    /// A system with the production generators and the house recommender.
    pub fn new(slot: Arc<dyn StorageSlot>) -> Self {
        Self::with_parts(
            slot,
            Arc::new(ReceiptIds),
            Arc::new(SystemClock),
            Arc::new(HouseRecommender),
        )
    }

    /// A system with explicit generators and recommendation collaborator —
    /// the constructor tests use to inject deterministic ids and clocks.
    pub fn with_parts(
        slot: Arc<dyn StorageSlot>,
        ids: Arc<dyn OrderIds>,
        clock: Arc<dyn Clock>,
        recommender: Arc<dyn Recommender>,
    ) -> Self {
        Self {
            slot,
            ids,
            clock,
            recommender,
            handles: Vec::new(),
        }
    }

    /// Attaches a new view: spawns a store actor on the shared slot and
    /// returns a terminal bound to it.
    pub fn open_terminal(&mut self) -> Terminal {
        Terminal::new(self.attach_store(), self.recommender.clone())
    }

    /// Spawns a bare store view without the session layer. Monitoring and
    /// tests drive the store client directly through this.
    pub fn attach_store(&mut self) -> OrderStoreClient {
        let (actor, client) = store::new(self.slot.clone(), self.ids.clone(), self.clock.clone());
        self.handles.push(tokio::spawn(actor.run()));
        client
    }

    /// Awaits every store actor. Callers drop their terminals and clients
    /// first; each actor drains its queue and exits when its channel
    /// closes.
    pub async fn shutdown(self) {
        info!(views = self.handles.len(), "Shutting down POS system");
        for handle in self.handles {
            let _ = handle.await;
        }
    }
}
