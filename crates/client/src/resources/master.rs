//! Master data: accounts, sub-accounts, tax types, partners and items.

use chrono::NaiveDate;
use ledgerly_core::ledger::{Account, AccountRequest};
use ledgerly_shared::types::{AccountId, ItemId, PartnerId, SubAccountId, TaxTypeId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::resource::Resource;

impl Resource for Account {
    const COLLECTION: &'static str = "accounts";
    type Id = AccountId;
    type Request = AccountRequest;

    fn id(&self) -> AccountId {
        self.id
    }
}

/// A sub-account, always attached to one account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubAccount {
    /// Unique identifier.
    pub id: SubAccountId,
    /// Code.
    pub code: String,
    /// Name.
    pub name: String,
    /// Owning account.
    pub account_id: AccountId,
    /// Owning account code.
    #[serde(default)]
    pub account_code: Option<String>,
    /// Owning account name.
    #[serde(default)]
    pub account_name: Option<String>,
}

/// Body of sub-account create/update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubAccountRequest {
    /// Code.
    pub code: String,
    /// Name.
    pub name: String,
    /// Owning account.
    pub account_id: AccountId,
}

impl Resource for SubAccount {
    const COLLECTION: &'static str = "sub-accounts";
    type Id = SubAccountId;
    type Request = SubAccountRequest;

    fn id(&self) -> SubAccountId {
        self.id
    }
}

/// Returns a lookup from sub-account to owning account.
///
/// Suitable as the `sub_account_owner` argument of
/// [`ledgerly_core::form::JournalForm::to_request`].
pub fn sub_account_owner(
    sub_accounts: &[SubAccount],
) -> impl Fn(SubAccountId) -> Option<AccountId> + '_ {
    move |id| {
        sub_accounts
            .iter()
            .find(|s| s.id == id)
            .map(|s| s.account_id)
    }
}

/// A tax type with its validity window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxType {
    /// Unique identifier.
    pub id: TaxTypeId,
    /// Code.
    pub code: String,
    /// Name.
    pub name: String,
    /// Rate as a fraction or percentage, as configured.
    pub tax_rate: Decimal,
    /// First day the rate applies.
    pub effective_from: NaiveDate,
    /// Last day the rate applies, open-ended when absent.
    #[serde(default)]
    pub effective_to: Option<NaiveDate>,
}

/// Body of tax type create/update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxTypeRequest {
    /// Code.
    pub code: String,
    /// Name.
    pub name: String,
    /// Rate.
    pub tax_rate: Decimal,
    /// First day the rate applies.
    pub effective_from: NaiveDate,
    /// Last day the rate applies.
    pub effective_to: Option<NaiveDate>,
}

impl Resource for TaxType {
    const COLLECTION: &'static str = "tax-types";
    type Id = TaxTypeId;
    type Request = TaxTypeRequest;

    fn id(&self) -> TaxTypeId {
        self.id
    }
}

/// Role of a business partner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PartnerType {
    /// Buys from the company.
    Customer,
    /// Sells to the company.
    Vendor,
    /// Both customer and vendor.
    Both,
}

/// A customer or vendor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Partner {
    /// Unique identifier.
    pub id: PartnerId,
    /// Code.
    pub code: String,
    /// Name.
    pub name: String,
    /// Postal code.
    #[serde(default)]
    pub postal_code: Option<String>,
    /// Address.
    #[serde(default)]
    pub address: Option<String>,
    /// Phone.
    #[serde(default)]
    pub phone: Option<String>,
    /// Email.
    #[serde(default)]
    pub email: Option<String>,
    /// Role.
    pub partner_type: PartnerType,
}

/// Body of partner create/update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerRequest {
    /// Code.
    pub code: String,
    /// Name.
    pub name: String,
    /// Postal code.
    pub postal_code: Option<String>,
    /// Address.
    pub address: Option<String>,
    /// Phone.
    pub phone: Option<String>,
    /// Email.
    pub email: Option<String>,
    /// Role.
    pub partner_type: PartnerType,
}

impl Resource for Partner {
    const COLLECTION: &'static str = "partners";
    type Id = PartnerId;
    type Request = PartnerRequest;

    fn id(&self) -> PartnerId {
        self.id
    }
}

/// A sellable item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Unique identifier.
    pub id: ItemId,
    /// Code.
    pub code: String,
    /// Name.
    pub name: String,
    /// Description.
    #[serde(default)]
    pub description: Option<String>,
    /// Unit price.
    #[serde(default)]
    pub unit_price: Option<Decimal>,
    /// Unit of measure.
    #[serde(default)]
    pub unit: Option<String>,
}

/// Body of item create/update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemRequest {
    /// Code.
    pub code: String,
    /// Name.
    pub name: String,
    /// Description.
    pub description: Option<String>,
    /// Unit price.
    pub unit_price: Option<Decimal>,
    /// Unit of measure.
    pub unit: Option<String>,
}

impl Resource for Item {
    const COLLECTION: &'static str = "items";
    type Id = ItemId;
    type Request = ItemRequest;

    fn id(&self) -> ItemId {
        self.id
    }
}
