//! Company scope of every API call.
//!
//! Almost every backend route is nested under `/companies/{companyId}`. The
//! company is taken from the signed-in session and passed explicitly to each
//! client, never read from a global.

use ledgerly_shared::types::{CompanyId, UserId};
use ledgerly_shared::AppError;
use serde::{Deserialize, Serialize};

/// What the client knows about the signed-in user.
///
/// Token storage and renewal are handled by the transport.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// The signed-in user, `None` when signed out.
    pub user_id: Option<UserId>,
    /// Companies the user may access.
    #[serde(default)]
    pub companies: Vec<CompanyId>,
    /// The company currently selected.
    pub selected_company: Option<CompanyId>,
}

impl Session {
    /// A session for `user_id` with the given companies and none selected.
    #[must_use]
    pub fn new(user_id: UserId, companies: Vec<CompanyId>) -> Self {
        Self {
            user_id: Some(user_id),
            companies,
            selected_company: None,
        }
    }

    /// Selects a company.
    #[must_use]
    pub fn select(mut self, company_id: CompanyId) -> Self {
        self.selected_company = Some(company_id);
        self
    }
}

/// The company all requests are scoped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CompanyContext {
    company_id: CompanyId,
}

impl CompanyContext {
    /// Scopes requests to `company_id` without session checks.
    #[must_use]
    pub const fn new(company_id: CompanyId) -> Self {
        Self { company_id }
    }

    /// Scopes requests to the session's selected company.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Unauthorized` if nobody is signed in, no company is
    /// selected, or the user has no access to the selected company.
    pub fn from_session(session: &Session) -> Result<Self, AppError> {
        let user_id = session
            .user_id
            .ok_or_else(|| AppError::Unauthorized("Not signed in".to_string()))?;
        let company_id = session
            .selected_company
            .ok_or_else(|| AppError::Unauthorized("No company selected".to_string()))?;

        if !session.companies.contains(&company_id) {
            return Err(AppError::Unauthorized(format!(
                "User {user_id} has no access to company {company_id}"
            )));
        }

        Ok(Self::new(company_id))
    }

    /// The scoped company.
    #[must_use]
    pub const fn company_id(&self) -> CompanyId {
        self.company_id
    }

    /// `/companies/{companyId}`
    #[must_use]
    pub fn base_path(&self) -> String {
        format!("/companies/{}", self.company_id)
    }

    /// `/companies/{companyId}/{segment}`
    #[must_use]
    pub fn path(&self, segment: &str) -> String {
        format!("{}/{}", self.base_path(), segment.trim_matches('/'))
    }
}
