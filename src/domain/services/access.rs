use std::sync::Arc;
use crate::domain::ports::CompanyRepository;
use crate::error::AppError;

/// Decides whether a user may act on a company's ledger. Every check hits
/// the store; results are never cached, so a membership revoked between two
/// requests takes effect on the next call.
pub struct AccessGuard {
    companies: Arc<dyn CompanyRepository>,
}

impl AccessGuard {
    pub fn new(companies: Arc<dyn CompanyRepository>) -> Self {
        Self { companies }
    }

    /// True iff the company exists and the user is its owner or holds a
    /// membership. A missing company is a plain denial.
    pub async fn has_access(&self, company_id: &str, user_id: &str) -> Result<bool, AppError> {
        let company = match self.companies.find_by_id(company_id).await? {
            Some(company) => company,
            None => return Ok(false),
        };

        if company.owner_id == user_id {
            return Ok(true);
        }

        Ok(self.companies.find_member(company_id, user_id).await?.is_some())
    }

    /// Guard combinator called at the top of every scoped operation:
    /// short-circuits with Unauthorized before anything touches the ledger.
    pub async fn require_access(&self, company_id: &str, user_id: &str) -> Result<(), AppError> {
        if self.has_access(company_id, user_id).await? {
            Ok(())
        } else {
            Err(AppError::Unauthorized)
        }
    }
}
