//! Bill draft assembly - turns raw form values into a typed bill.
//!
//! Assembly is pure: it performs no I/O and never assigns an identity, which only the
//! store can provide.

use crate::{
    core::session::SessionContext,
    errors::{Error, Result},
    models::{Bill, BillStatus, ExpenseType, parse_bill_date},
};

/// VAT percentage used when the field is blank or not an integer.
pub const DEFAULT_PCT: u32 = 20;

/// Raw values of the new-bill form, exactly as typed.
///
/// There is deliberately no status or email field: both are decided by the assembler.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub expense_type: String,
    pub name: String,
    pub date: String,
    pub amount: String,
    pub vat: String,
    pub pct: String,
    pub commentary: String,
}

/// Builds a draft bill from `fields` on behalf of `session`.
///
/// # Errors
/// - `Error::InvalidField` for an unknown expense type or a non-numeric VAT
/// - `Error::InvalidDate` for a date outside the accepted forms
/// - `Error::InvalidAmount` for a non-numeric, negative or non-finite amount
pub fn assemble(fields: &FormFields, session: &SessionContext) -> Result<Bill> {
    let expense_type: ExpenseType = fields.expense_type.trim().parse()?;
    let date = parse_bill_date(&fields.date)?;

    Ok(Bill {
        identity: None,
        email: session.email.clone(),
        expense_type,
        name: fields.name.clone(),
        date,
        amount: parse_amount(&fields.amount)?,
        vat: parse_vat(&fields.vat)?,
        pct: parse_pct(&fields.pct),
        commentary: non_empty(&fields.commentary),
        status: BillStatus::Pending,
    })
}

fn parse_amount(raw: &str) -> Result<f64> {
    let invalid = || Error::InvalidAmount {
        value: raw.to_string(),
    };
    let amount: f64 = raw.trim().parse().map_err(|_| invalid())?;
    if amount.is_finite() && amount >= 0.0 {
        Ok(amount)
    } else {
        Err(invalid())
    }
}

fn parse_vat(raw: &str) -> Result<Option<String>> {
    let Some(vat) = non_empty(raw) else {
        return Ok(None);
    };
    match vat.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(Some(vat)),
        _ => Err(Error::InvalidField {
            field: "vat",
            value: raw.to_string(),
        }),
    }
}

fn parse_pct(raw: &str) -> u32 {
    raw.trim().parse().unwrap_or(DEFAULT_PCT)
}

fn non_empty(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
