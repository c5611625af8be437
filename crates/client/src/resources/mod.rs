//! Backend entities and their request bodies.
//!
//! Accounts, journals and fiscal periods are defined in `ledgerly-core`
//! because the domain logic works on them; they get their [`crate::Resource`]
//! impls here.

pub mod master;
pub mod settings;
pub mod transactions;

pub use master::{
    Item, ItemRequest, Partner, PartnerRequest, PartnerType, SubAccount, SubAccountRequest,
    TaxType, TaxTypeRequest, sub_account_owner,
};
pub use settings::{Company, CompanyRequest};
pub use transactions::{
    Invoice, InvoiceDetail, InvoiceDetailRequest, InvoiceRequest, InvoiceStatus, Payment,
    PaymentMethod, PaymentRequest,
};
