//! Bill entity - One expense bill filed by an employee.
//!
//! Each bill carries the submitter's `email`, its `expense_type`, amounts, the review
//! `status` and the location of its uploaded proof (`file_url`, `file_name`).
//! Categories and statuses are stored by label and parsed back into domain enums by the store.
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Bill database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "bills")]
pub struct Model {
    /// Unique identifier for the bill
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Email of the employee who filed the bill
    pub email: String,
    /// Expense category label, e.g. `"Transports"`
    pub expense_type: String,
    /// Free-text name of the expense
    pub name: String,
    /// Date of the expense
    pub date: Date,
    /// Amount in euros
    pub amount: f64,
    /// VAT amount as entered
    pub vat: Option<String>,
    /// VAT percentage
    pub pct: i32,
    /// Optional comment from the employee
    pub commentary: Option<String>,
    /// Key of the uploaded proof in the `attachments` table
    pub attachment_key: String,
    /// Public URL of the uploaded proof
    pub file_url: String,
    /// Canonical name of the uploaded proof
    pub file_name: String,
    /// Review status: `"pending"`, `"accepted"` or `"refused"`
    pub status: String,
}

/// Bills reference their uploaded proof by key only
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
