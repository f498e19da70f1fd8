//! Invoice domain constants and form validation.
//!
//! The write path validates here before touching the store, so user
//! mistakes come back as field-level messages instead of constraint
//! violations. The database enforces the same rules (status CHECK, positive
//! amount) as a backstop.

use std::collections::BTreeMap;

use crate::money::parse_amount_to_cents;
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// Invoice lifecycle states.
pub const STATUS_PENDING: &str = "pending";
pub const STATUS_PAID: &str = "paid";

/// All valid invoice statuses.
pub const VALID_STATUSES: &[&str] = &[STATUS_PENDING, STATUS_PAID];

/// Check whether a status string is one of the closed enumeration.
pub fn is_valid_status(status: &str) -> bool {
    VALID_STATUSES.contains(&status)
}

// ---------------------------------------------------------------------------
// Form fields
// ---------------------------------------------------------------------------

/// Field names used as keys in validation error maps.
pub const FIELD_CUSTOMER_ID: &str = "customer_id";
pub const FIELD_AMOUNT: &str = "amount";
pub const FIELD_STATUS: &str = "status";

/// Inline error messages shown next to the invoice form fields.
pub const MSG_SELECT_CUSTOMER: &str = "Please select a customer.";
pub const MSG_AMOUNT_GT_ZERO: &str = "Please enter an amount greater than $0.";
pub const MSG_SELECT_STATUS: &str = "Please select an invoice status.";

/// Field name mapped to the list of error messages for that field.
pub type FieldErrorMap = BTreeMap<&'static str, Vec<String>>;

/// A fully validated invoice form, amount already in cents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceForm {
    pub customer_id: DbId,
    pub amount_cents: i64,
    pub status: String,
}

/// Validate raw invoice form fields.
///
/// Checks all fields and accumulates every failure, so the form can render
/// inline errors for each field at once. On success the returned payload
/// carries the amount converted to cents.
pub fn validate_invoice_form(
    customer_id: Option<&str>,
    amount: Option<&str>,
    status: Option<&str>,
) -> Result<InvoiceForm, FieldErrorMap> {
    let mut errors = FieldErrorMap::new();

    let customer_id = match customer_id.map(str::trim).filter(|s| !s.is_empty()) {
        Some(raw) => match raw.parse::<DbId>() {
            Ok(id) if id > 0 => Some(id),
            _ => {
                errors
                    .entry(FIELD_CUSTOMER_ID)
                    .or_default()
                    .push(MSG_SELECT_CUSTOMER.to_string());
                None
            }
        },
        None => {
            errors
                .entry(FIELD_CUSTOMER_ID)
                .or_default()
                .push(MSG_SELECT_CUSTOMER.to_string());
            None
        }
    };

    let amount_cents = match amount.and_then(parse_amount_to_cents) {
        Some(cents) if cents > 0 => Some(cents),
        _ => {
            errors
                .entry(FIELD_AMOUNT)
                .or_default()
                .push(MSG_AMOUNT_GT_ZERO.to_string());
            None
        }
    };

    let status = match status.map(str::trim) {
        Some(s) if is_valid_status(s) => Some(s.to_string()),
        _ => {
            errors
                .entry(FIELD_STATUS)
                .or_default()
                .push(MSG_SELECT_STATUS.to_string());
            None
        }
    };

    match (customer_id, amount_cents, status) {
        (Some(customer_id), Some(amount_cents), Some(status)) if errors.is_empty() => {
            Ok(InvoiceForm {
                customer_id,
                amount_cents,
                status,
            })
        }
        _ => Err(errors),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
