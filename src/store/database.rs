//! Local bill store built on `SeaORM`.
//!
//! Proof files are kept as blobs in the `attachments` table; the row id doubles as the
//! upload key and the public URL is `<base_url>/<key>/<file_name>`.

use crate::{
    config::settings::AttachmentSettings,
    entities::{attachment, bill},
    errors::{Error, Result},
    models::{Attachment, Bill, BillIdentity, UploadedFile},
    store::BillStore,
};
use sea_orm::{QueryOrder, Set, prelude::*};
use tracing::{debug, info, instrument};

/// Message used when a referenced bill or attachment does not exist.
const NOT_FOUND: &str = "Erreur 404";

/// [`BillStore`] persisting into a `SeaORM` connection.
#[derive(Debug, Clone)]
pub struct DatabaseBillStore {
    db: DatabaseConnection,
    base_url: String,
}

impl DatabaseBillStore {
    /// Creates a store over `db`, serving attachments under `settings.base_url`.
    #[must_use]
    pub fn new(db: DatabaseConnection, settings: &AttachmentSettings) -> Self {
        Self {
            db,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Underlying connection.
    #[must_use]
    pub const fn connection(&self) -> &DatabaseConnection {
        &self.db
    }

    fn file_url(&self, key: &str, file_name: &str) -> String {
        format!("{}/{key}/{file_name}", self.base_url)
    }

    async fn find_bill(&self, id: &str) -> Result<bill::Model> {
        let id: i64 = id.parse().map_err(|_| Error::store(NOT_FOUND))?;
        bill::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| Error::store(NOT_FOUND))
    }
}

fn to_db_pct(pct: u32) -> Result<i32> {
    i32::try_from(pct).map_err(|_| Error::InvalidField {
        field: "pct",
        value: pct.to_string(),
    })
}

impl TryFrom<bill::Model> for Bill {
    type Error = Error;

    fn try_from(model: bill::Model) -> Result<Self> {
        let pct = u32::try_from(model.pct).map_err(|_| Error::InvalidField {
            field: "pct",
            value: model.pct.to_string(),
        })?;

        Ok(Self {
            identity: Some(BillIdentity {
                id: model.id.to_string(),
                file_url: model.file_url,
                file_name: model.file_name,
            }),
            email: model.email,
            expense_type: model.expense_type.parse()?,
            name: model.name,
            date: model.date,
            amount: model.amount,
            vat: model.vat,
            pct,
            commentary: model.commentary,
            status: model.status.parse()?,
        })
    }
}

impl BillStore for DatabaseBillStore {
    #[instrument(skip(self, attachment), fields(file_name = %attachment.file_name))]
    async fn upload(&self, attachment: &Attachment, email: &str) -> Result<UploadedFile> {
        let model = attachment::ActiveModel {
            email: Set(email.to_string()),
            file_name: Set(attachment.file_name.clone()),
            mime_type: Set(attachment.mime_type.clone()),
            content: Set(attachment.content.clone()),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;

        let key = model.id.to_string();
        let file_url = self.file_url(&key, &model.file_name);
        debug!("Stored attachment {} ({} bytes)", key, attachment.content.len());
        Ok(UploadedFile { key, file_url })
    }

    #[instrument(skip(self, draft, upload), fields(key = %upload.key))]
    async fn create(&self, draft: &Bill, upload: &UploadedFile) -> Result<BillIdentity> {
        if draft.is_persisted() {
            return Err(Error::store("Erreur 409"));
        }

        let key: i64 = upload.key.parse().map_err(|_| Error::store(NOT_FOUND))?;
        let proof = attachment::Entity::find_by_id(key)
            .one(&self.db)
            .await?
            .ok_or_else(|| Error::store(NOT_FOUND))?;

        let model = bill::ActiveModel {
            email: Set(draft.email.clone()),
            expense_type: Set(draft.expense_type.label().to_string()),
            name: Set(draft.name.clone()),
            date: Set(draft.date),
            amount: Set(draft.amount),
            vat: Set(draft.vat.clone()),
            pct: Set(to_db_pct(draft.pct)?),
            commentary: Set(draft.commentary.clone()),
            attachment_key: Set(upload.key.clone()),
            file_url: Set(upload.file_url.clone()),
            file_name: Set(proof.file_name),
            status: Set(draft.status.as_str().to_string()),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;

        info!("Created bill {} for {}", model.id, model.email);
        Ok(BillIdentity {
            id: model.id.to_string(),
            file_url: model.file_url,
            file_name: model.file_name,
        })
    }

    #[instrument(skip(self, bill), fields(id = ?bill.id()))]
    async fn update(&self, bill: &Bill) -> Result<Bill> {
        let identity = bill.identity.as_ref().ok_or(Error::NotPersisted)?;
        let existing = self.find_bill(&identity.id).await?;

        let mut active: bill::ActiveModel = existing.into();
        active.email = Set(bill.email.clone());
        active.expense_type = Set(bill.expense_type.label().to_string());
        active.name = Set(bill.name.clone());
        active.date = Set(bill.date);
        active.amount = Set(bill.amount);
        active.vat = Set(bill.vat.clone());
        active.pct = Set(to_db_pct(bill.pct)?);
        active.commentary = Set(bill.commentary.clone());
        active.status = Set(bill.status.as_str().to_string());

        let updated = active.update(&self.db).await?;
        debug!("Updated bill {}", updated.id);
        updated.try_into()
    }

    async fn list(&self) -> Result<Vec<Bill>> {
        bill::Entity::find()
            .order_by_asc(bill::Column::Id)
            .all(&self.db)
            .await?
            .into_iter()
            .map(Bill::try_from)
            .collect()
    }
}
