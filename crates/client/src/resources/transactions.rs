//! Transactions: journals, invoices and payments.

use chrono::NaiveDate;
use ledgerly_core::ledger::{Journal, JournalRequest};
use ledgerly_shared::types::{InvoiceId, ItemId, JournalId, PartnerId, PaymentId, TaxTypeId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::resource::Resource;

impl Resource for Journal {
    const COLLECTION: &'static str = "journals";
    type Id = JournalId;
    type Request = JournalRequest;

    fn id(&self) -> JournalId {
        self.id
    }
}

/// Invoice lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum InvoiceStatus {
    /// Being prepared.
    Draft,
    /// Sent to the partner.
    Issued,
    /// Settled.
    Paid,
    /// Voided.
    Canceled,
}

impl InvoiceStatus {
    /// Returns the wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "DRAFT",
            Self::Issued => "ISSUED",
            Self::Paid => "PAID",
            Self::Canceled => "CANCELED",
        }
    }
}

impl std::fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An invoice line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceDetail {
    /// 1-based position.
    pub line_number: u32,
    /// Item sold.
    #[serde(default)]
    pub item_id: Option<ItemId>,
    /// Description.
    #[serde(default)]
    pub description: Option<String>,
    /// Quantity.
    pub quantity: Decimal,
    /// Unit price.
    pub unit_price: Decimal,
    /// Tax type applied.
    #[serde(default)]
    pub tax_type_id: Option<TaxTypeId>,
    /// Tax on this line.
    #[serde(default)]
    pub tax_amount: Option<Decimal>,
    /// Line amount before tax.
    #[serde(default)]
    pub amount: Option<Decimal>,
}

/// An invoice issued to a partner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    /// Unique identifier.
    pub id: InvoiceId,
    /// Invoice number.
    pub invoice_number: String,
    /// Billed partner.
    pub partner_id: PartnerId,
    /// Billed partner name.
    #[serde(default)]
    pub partner_name: Option<String>,
    /// Issue date.
    pub invoice_date: NaiveDate,
    /// Due date.
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    /// Lifecycle status.
    pub status: InvoiceStatus,
    /// Sum of line amounts.
    #[serde(default)]
    pub subtotal: Decimal,
    /// Sum of line taxes.
    #[serde(default)]
    pub tax_amount: Decimal,
    /// `subtotal + tax_amount`.
    #[serde(default)]
    pub total_amount: Decimal,
    /// Notes.
    #[serde(default)]
    pub notes: Option<String>,
    /// Lines.
    #[serde(default)]
    pub details: Vec<InvoiceDetail>,
}

/// One line of an [`InvoiceRequest`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceDetailRequest {
    /// 1-based position.
    pub line_number: u32,
    /// Item sold.
    pub item_id: Option<ItemId>,
    /// Description.
    pub description: Option<String>,
    /// Quantity.
    pub quantity: Decimal,
    /// Unit price.
    pub unit_price: Decimal,
    /// Tax type applied.
    pub tax_type_id: Option<TaxTypeId>,
}

/// Body of invoice create/update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceRequest {
    /// Invoice number.
    pub invoice_number: String,
    /// Billed partner.
    pub partner_id: PartnerId,
    /// Issue date.
    pub invoice_date: NaiveDate,
    /// Due date.
    pub due_date: Option<NaiveDate>,
    /// Notes.
    pub notes: Option<String>,
    /// Lines.
    pub details: Vec<InvoiceDetailRequest>,
}

impl Resource for Invoice {
    const COLLECTION: &'static str = "invoices";
    type Id = InvoiceId;
    type Request = InvoiceRequest;

    fn id(&self) -> InvoiceId {
        self.id
    }
}

/// How a payment was made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    /// Bank transfer.
    BankTransfer,
    /// Cash.
    Cash,
    /// Credit card.
    CreditCard,
    /// Check.
    Check,
    /// Anything else.
    Other,
}

/// A payment against an invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    /// Unique identifier.
    pub id: PaymentId,
    /// Settled invoice.
    #[serde(default)]
    pub invoice_id: Option<InvoiceId>,
    /// Paying partner.
    pub partner_id: PartnerId,
    /// Paying partner name.
    #[serde(default)]
    pub partner_name: Option<String>,
    /// Payment date.
    pub payment_date: NaiveDate,
    /// Amount paid.
    pub amount: Decimal,
    /// Method.
    pub payment_method: PaymentMethod,
    /// Notes.
    #[serde(default)]
    pub notes: Option<String>,
}

/// Body of payment create/update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    /// Settled invoice.
    pub invoice_id: Option<InvoiceId>,
    /// Paying partner.
    pub partner_id: PartnerId,
    /// Payment date.
    pub payment_date: NaiveDate,
    /// Amount paid.
    pub amount: Decimal,
    /// Method.
    pub payment_method: PaymentMethod,
    /// Notes.
    pub notes: Option<String>,
}

impl Resource for Payment {
    const COLLECTION: &'static str = "payments";
    type Id = PaymentId;
    type Request = PaymentRequest;

    fn id(&self) -> PaymentId {
        self.id
    }
}
