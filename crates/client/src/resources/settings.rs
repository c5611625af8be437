//! Settings: companies and fiscal periods.

use ledgerly_core::fiscal::{FiscalPeriod, FiscalPeriodRequest};
use ledgerly_shared::types::{CompanyId, FiscalPeriodId};
use serde::{Deserialize, Serialize};

use crate::resource::Resource;

impl Resource for FiscalPeriod {
    const COLLECTION: &'static str = "fiscal-periods";
    type Id = FiscalPeriodId;
    type Request = FiscalPeriodRequest;

    fn id(&self) -> FiscalPeriodId {
        self.id
    }
}

/// A company, the tenant of all other records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    /// Unique identifier.
    pub id: CompanyId,
    /// Name.
    pub name: String,
    /// Address.
    #[serde(default)]
    pub address: Option<String>,
    /// Phone.
    #[serde(default)]
    pub phone: Option<String>,
    /// Email.
    #[serde(default)]
    pub email: Option<String>,
    /// Tax registration number.
    #[serde(default)]
    pub tax_id: Option<String>,
}

/// Body of company create/update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyRequest {
    /// Name.
    pub name: String,
    /// Address.
    pub address: Option<String>,
    /// Phone.
    pub phone: Option<String>,
    /// Email.
    pub email: Option<String>,
    /// Tax registration number.
    pub tax_id: Option<String>,
}

impl Resource for Company {
    const COLLECTION: &'static str = "companies";
    const COMPANY_SCOPED: bool = false;
    type Id = CompanyId;
    type Request = CompanyRequest;

    fn id(&self) -> CompanyId {
        self.id
    }
}
