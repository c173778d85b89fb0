//! Bill list presenter - the employee's bills, most recent first.
//!
//! Bills are ordered by date descending with a stable sort, so bills sharing a date keep
//! the order the store returned them in. A failed fetch becomes a [`BillListView::Fault`]
//! rather than an error, so the page always has something to show.

use crate::{
    core::navigation::{Navigator, Route},
    errors::Result,
    models::Bill,
    store::BillStore,
};
use std::fmt;
use tracing::{debug, error};

/// Text that marks a fault view.
pub const FAULT_INDICATOR: &str = "Erreur";

/// Page title shown above the list.
pub const TITLE: &str = "Mes notes de frais";

/// Orders `bills` from most recent to oldest, keeping the relative order of equal dates.
#[must_use]
pub fn order_bills(mut bills: Vec<Bill>) -> Vec<Bill> {
    bills.sort_by(|a, b| b.date.cmp(&a.date));
    bills
}

/// What the bill list page shows.
#[derive(Debug, Clone, PartialEq)]
pub enum BillListView {
    /// Fetch succeeded with no bills
    Empty,
    /// Fetch succeeded; bills are already ordered
    Bills(Vec<Bill>),
    /// Fetch failed
    Fault { message: String },
}

impl BillListView {
    /// Builds the view from the outcome of a fetch.
    #[must_use]
    pub fn from_fetch(result: Result<Vec<Bill>>) -> Self {
        match result {
            Ok(bills) if bills.is_empty() => Self::Empty,
            Ok(bills) => Self::Bills(order_bills(bills)),
            Err(e) => {
                error!("Failed to fetch bills: {e}");
                Self::Fault {
                    message: e.to_string(),
                }
            }
        }
    }

    #[must_use]
    pub const fn is_fault(&self) -> bool {
        matches!(self, Self::Fault { .. })
    }
}

impl fmt::Display for BillListView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fault { message } => {
                writeln!(f, "{FAULT_INDICATOR}")?;
                writeln!(f, "{message}")
            }
            Self::Empty => {
                writeln!(f, "{TITLE}")?;
                writeln!(f, "Aucune note de frais")
            }
            Self::Bills(bills) => {
                writeln!(f, "{TITLE}")?;
                for bill in bills {
                    writeln!(
                        f,
                        "{}  {:<24} {:<28} {:>10.2} €  {}",
                        bill.canonical_date(),
                        bill.expense_type,
                        bill.name,
                        bill.amount,
                        bill.status.label()
                    )?;
                }
                Ok(())
            }
        }
    }
}

/// Controller behind the bill list page.
pub struct BillList<S, N> {
    store: S,
    navigator: N,
}

impl<S, N> BillList<S, N>
where
    S: BillStore,
    N: Navigator,
{
    pub const fn new(store: S, navigator: N) -> Self {
        Self { store, navigator }
    }

    /// Fetches bills from the store and builds the view.
    pub async fn load(&self) -> BillListView {
        let view = BillListView::from_fetch(self.store.list().await);
        if let BillListView::Bills(bills) = &view {
            debug!("Loaded {} bills", bills.len());
        }
        view
    }

    /// Opens the new-bill form.
    pub fn click_new_bill(&mut self) {
        self.navigator.navigate(Route::NewBill);
    }

    #[must_use]
    pub const fn navigator(&self) -> &N {
        &self.navigator
    }
}
