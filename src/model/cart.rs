//! # Cart Accumulator
//!
//! The in-memory cart a customer builds before submitting an order. Lines
//! are keyed by dish id — at most one line per dish — and kept in insertion
//! order. The cart never touches persistence; its lines are snapshotted by
//! value into an order at submission time.

use super::dish::{Dish, DishId};
use serde::{Deserialize, Serialize};

/// A dish snapshot plus the quantity currently in the cart or on an order.
///
/// Invariant: a line held by a [`Cart`] always has `quantity >= 1`; a line
/// whose quantity would reach 0 is removed, never retained.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    #[serde(flatten)]
    pub dish: Dish,
    pub quantity: u32,
}

impl CartLine {
    /// Price of this line: unit price times quantity, in integer units.
    pub fn line_total(&self) -> u64 {
        self.dish.price * u64::from(self.quantity)
    }
}

/// Ordered collection of [`CartLine`]s keyed by dish id.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one unit of `dish`: increments an existing line, or inserts a
    /// fresh quantity-1 line at the end. Lookup is by dish id.
    pub fn add_dish(&mut self, dish: &Dish) {
        match self.lines.iter_mut().find(|line| line.dish.id == dish.id) {
            Some(line) => line.quantity += 1,
            None => self.lines.push(CartLine {
                dish: dish.clone(),
                quantity: 1,
            }),
        }
    }

    /// Applies a quantity delta to the line with the given dish id. The new
    /// quantity is clamped at 0, and a line reaching 0 is removed. Unknown
    /// ids are a no-op.
    pub fn update_quantity(&mut self, id: &DishId, delta: i32) {
        let Some(index) = self.lines.iter().position(|line| &line.dish.id == id) else {
            return;
        };
        let quantity = (i64::from(self.lines[index].quantity) + i64::from(delta)).max(0);
        if quantity == 0 {
            self.lines.remove(index);
        } else {
            self.lines[index].quantity = quantity as u32;
        }
    }

    /// Empties the cart. Called after a successful submission and on logout.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum of line totals over the whole cart. Pure.
    pub fn total_price(&self) -> u64 {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Total unit count across all lines (the cart badge in the menu view).
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Dish names in cart order, for the recommendation collaborator.
    pub fn dish_names(&self) -> Vec<String> {
        self.lines.iter().map(|line| line.dish.name.clone()).collect()
    }
}
