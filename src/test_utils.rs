//! Shared test utilities for the expense desk.
//!
//! Recording doubles for every collaborator, form and bill fixtures, and an in-memory
//! `SQLite` store.

use crate::{
    config::{database::create_tables, settings::AttachmentSettings},
    core::{
        draft::FormFields,
        navigation::{Navigator, Route},
        preview::Modal,
        submission::DiagnosticSink,
    },
    errors::{Error, Result},
    models::{Attachment, Bill, BillIdentity, BillStatus, ExpenseType, UploadedFile},
    store::{BillStore, DatabaseBillStore},
};
use chrono::NaiveDate;
use std::sync::{Mutex, MutexGuard};

/// Creates a store over an in-memory `SQLite` database with all tables initialized.
pub async fn setup_test_store() -> Result<DatabaseBillStore> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    create_tables(&db).await?;
    Ok(DatabaseBillStore::new(db, &AttachmentSettings::default()))
}

/// Form values of a typical transport bill.
pub fn test_form_fields() -> FormFields {
    FormFields {
        expense_type: "Transports".to_string(),
        name: "Vol Paris-Bordeaux".to_string(),
        date: "2023-04-01".to_string(),
        amount: "42".to_string(),
        vat: "18".to_string(),
        pct: "20".to_string(),
        commentary: "test bill".to_string(),
    }
}

/// The draft [`test_form_fields`] assembles into for `email`.
pub fn test_draft(email: &str) -> Bill {
    Bill {
        identity: None,
        email: email.to_string(),
        expense_type: ExpenseType::Transports,
        name: "Vol Paris-Bordeaux".to_string(),
        date: date(2023, 4, 1),
        amount: 42.0,
        vat: Some("18".to_string()),
        pct: 20,
        commentary: Some("test bill".to_string()),
        status: BillStatus::Pending,
    }
}

pub fn test_attachment(file_name: &str, mime_type: &str) -> Attachment {
    Attachment::new(file_name, mime_type, b"test".to_vec())
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

#[allow(clippy::too_many_arguments)]
fn persisted_bill(
    id: &str,
    expense_type: ExpenseType,
    name: &str,
    date: NaiveDate,
    amount: f64,
    vat: &str,
    pct: u32,
    status: BillStatus,
) -> Bill {
    Bill {
        identity: Some(BillIdentity {
            id: id.to_string(),
            file_url: format!("https://test.storage.tld/{id}.jpg"),
            file_name: "preview-facture-free-201801-pdf-1.jpg".to_string(),
        }),
        email: "a@a".to_string(),
        expense_type,
        name: name.to_string(),
        date,
        amount,
        vat: Some(vat.to_string()),
        pct,
        commentary: None,
        status,
    }
}

/// Four persisted bills in no particular date order.
pub fn fixture_bills() -> Vec<Bill> {
    vec![
        persisted_bill(
            "47qAXb6fIm2zOKkLzMro",
            ExpenseType::Lodging,
            "encore",
            date(2004, 4, 4),
            400.0,
            "80",
            20,
            BillStatus::Pending,
        ),
        persisted_bill(
            "BeKy5Mo4jkmdfPGYpTxZ",
            ExpenseType::Restaurants,
            "test1",
            date(2001, 1, 1),
            100.0,
            "",
            20,
            BillStatus::Refused,
        ),
        persisted_bill(
            "UIUZtnPQvnbFnB0ozvJh",
            ExpenseType::OnlineServices,
            "test3",
            date(2003, 3, 3),
            300.0,
            "60",
            20,
            BillStatus::Accepted,
        ),
        persisted_bill(
            "qcCK3SzECmaZAGRrHjaC",
            ExpenseType::Restaurants,
            "test2",
            date(2002, 2, 2),
            200.0,
            "40",
            20,
            BillStatus::Refused,
        ),
    ]
}

#[derive(Debug, Default)]
struct MockStoreState {
    bills: Vec<Bill>,
    uploads: Vec<String>,
    created: Vec<Bill>,
    updated: Vec<Bill>,
    create_calls: usize,
    upload_failure: Option<String>,
    create_failure: Option<String>,
    list_failure: Option<String>,
}

/// In-memory [`BillStore`] that records calls and can be told to reject.
#[derive(Debug, Default)]
pub struct MockBillStore {
    state: Mutex<MockStoreState>,
}

impl MockBillStore {
    fn with_state(state: MockStoreState) -> Self {
        Self {
            state: Mutex::new(state),
        }
    }

    pub fn with_bills(bills: Vec<Bill>) -> Self {
        Self::with_state(MockStoreState {
            bills,
            ..MockStoreState::default()
        })
    }

    pub fn failing_upload(message: &str) -> Self {
        Self::with_state(MockStoreState {
            upload_failure: Some(message.to_string()),
            ..MockStoreState::default()
        })
    }

    pub fn failing_create(message: &str) -> Self {
        Self::with_state(MockStoreState {
            create_failure: Some(message.to_string()),
            ..MockStoreState::default()
        })
    }

    pub fn failing_list(message: &str) -> Self {
        Self::with_state(MockStoreState {
            list_failure: Some(message.to_string()),
            ..MockStoreState::default()
        })
    }

    fn lock(&self) -> MutexGuard<'_, MockStoreState> {
        self.state
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    /// Makes every following `create` reject with `message`.
    pub fn fail_create(&self, message: &str) {
        self.lock().create_failure = Some(message.to_string());
    }

    pub fn clear_failures(&self) {
        let mut state = self.lock();
        state.upload_failure = None;
        state.create_failure = None;
        state.list_failure = None;
    }

    /// Names of uploaded files, in upload order.
    pub fn uploads(&self) -> Vec<String> {
        self.lock().uploads.clone()
    }

    /// Drafts the store accepted, in creation order.
    pub fn created(&self) -> Vec<Bill> {
        self.lock().created.clone()
    }

    pub fn updated(&self) -> Vec<Bill> {
        self.lock().updated.clone()
    }

    /// Number of `create` calls, including rejected ones.
    pub fn create_calls(&self) -> usize {
        self.lock().create_calls
    }
}

impl BillStore for MockBillStore {
    async fn upload(&self, attachment: &Attachment, _email: &str) -> Result<UploadedFile> {
        let mut state = self.lock();
        if let Some(message) = &state.upload_failure {
            return Err(Error::store(message.clone()));
        }
        state.uploads.push(attachment.file_name.clone());
        Ok(UploadedFile {
            key: format!("key-{}", state.uploads.len()),
            file_url: format!("https://localhost:3456/images/{}", attachment.file_name),
        })
    }

    async fn create(&self, draft: &Bill, upload: &UploadedFile) -> Result<BillIdentity> {
        let mut state = self.lock();
        state.create_calls += 1;
        if let Some(message) = &state.create_failure {
            return Err(Error::store(message.clone()));
        }
        state.created.push(draft.clone());
        let file_name = upload
            .file_url
            .rsplit('/')
            .next()
            .unwrap_or_default()
            .to_string();
        Ok(BillIdentity {
            id: format!("bill-{}", state.created.len()),
            file_url: upload.file_url.clone(),
            file_name,
        })
    }

    async fn update(&self, bill: &Bill) -> Result<Bill> {
        if !bill.is_persisted() {
            return Err(Error::NotPersisted);
        }
        self.lock().updated.push(bill.clone());
        Ok(bill.clone())
    }

    async fn list(&self) -> Result<Vec<Bill>> {
        let state = self.lock();
        match &state.list_failure {
            Some(message) => Err(Error::store(message.clone())),
            None => Ok(state.bills.clone()),
        }
    }
}

/// [`Navigator`] that records every route it is asked for.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    pub routes: Vec<Route>,
}

impl Navigator for RecordingNavigator {
    fn navigate(&mut self, route: Route) {
        self.routes.push(route);
    }
}

/// [`DiagnosticSink`] that records every reason.
#[derive(Debug, Default)]
pub struct RecordingDiagnostics {
    pub reasons: Vec<String>,
}

impl DiagnosticSink for RecordingDiagnostics {
    fn report(&mut self, reason: &str) {
        self.reasons.push(reason.to_string());
    }
}

/// [`Modal`] that records its content and how often it was shown.
#[derive(Debug, Default)]
pub struct FakeModal {
    pub width: u32,
    pub content: String,
    pub show_calls: usize,
}

impl FakeModal {
    pub fn with_width(width: u32) -> Self {
        Self {
            width,
            ..Self::default()
        }
    }
}

impl Modal for FakeModal {
    fn width(&self) -> u32 {
        self.width
    }

    fn set_content(&mut self, html: &str) {
        self.content = html.to_string();
    }

    fn show(&mut self) {
        self.show_calls += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_store_update_records_persisted_bills() -> Result<()> {
        let store = MockBillStore::default();
        let bill = fixture_bills().remove(0);

        assert_eq!(store.update(&bill).await?, bill);
        assert!(matches!(
            store.update(&test_draft("a@a")).await,
            Err(Error::NotPersisted)
        ));
        assert_eq!(store.updated(), vec![bill]);
        Ok(())
    }
}
