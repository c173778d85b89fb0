//! Store collaborator - where bills and their proofs are persisted.
//!
//! The submission workflow and bill list only see the [`BillStore`] trait. Every method
//! rejects with an [`Error`](crate::errors::Error) whose message is human readable
//! (`Erreur 404`, `Erreur 500`, ...).

/// `SeaORM`-backed store used by the binary
pub mod database;

pub use database::DatabaseBillStore;

use crate::errors::Result;
use crate::models::{Attachment, Bill, BillIdentity, UploadedFile};

/// Remote persistence for bill entities.
#[allow(async_fn_in_trait)]
pub trait BillStore {
    /// Uploads a validated attachment on behalf of `email`, returning its key and URL.
    async fn upload(&self, attachment: &Attachment, email: &str) -> Result<UploadedFile>;

    /// Creates a bill from `draft`, linked to a previously uploaded proof.
    async fn create(&self, draft: &Bill, upload: &UploadedFile) -> Result<BillIdentity>;

    /// Replaces the stored fields of an already persisted bill.
    async fn update(&self, bill: &Bill) -> Result<Bill>;

    /// Lists every stored bill, in no particular order.
    async fn list(&self) -> Result<Vec<Bill>>;
}
