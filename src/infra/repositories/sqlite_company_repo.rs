use crate::domain::{
    models::{category::Category, company::{Company, CompanyMember}},
    ports::CompanyRepository,
};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteCompanyRepo {
    pool: SqlitePool,
}

impl SqliteCompanyRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CompanyRepository for SqliteCompanyRepo {
    async fn create_with_categories(&self, company: &Company, categories: &[Category]) -> Result<Company, AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        let created = sqlx::query_as::<_, Company>(
            "INSERT INTO companies (id, name, currency, tax_rate, address, phone, email, website, owner_id, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING *"
        )
            .bind(&company.id).bind(&company.name).bind(&company.currency).bind(company.tax_rate)
            .bind(&company.address).bind(&company.phone).bind(&company.email).bind(&company.website)
            .bind(&company.owner_id).bind(company.created_at).bind(company.updated_at)
            .fetch_one(&mut *tx).await.map_err(AppError::Database)?;

        for category in categories {
            sqlx::query(
                "INSERT INTO categories (id, company_id, name, kind, description, created_at) VALUES (?, ?, ?, ?, ?, ?)"
            )
                .bind(&category.id).bind(&category.company_id).bind(&category.name)
                .bind(&category.kind).bind(&category.description).bind(category.created_at)
                .execute(&mut *tx).await.map_err(AppError::Database)?;
        }

        tx.commit().await.map_err(AppError::Database)?;
        Ok(created)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Company>, AppError> {
        sqlx::query_as::<_, Company>("SELECT * FROM companies WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_for_user(&self, user_id: &str) -> Result<Vec<Company>, AppError> {
        sqlx::query_as::<_, Company>(
            "SELECT DISTINCT c.* FROM companies c
             LEFT JOIN company_members m ON m.company_id = c.id
             WHERE c.owner_id = ? OR m.user_id = ?
             ORDER BY c.created_at ASC"
        )
            .bind(user_id)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn add_member(&self, member: &CompanyMember) -> Result<CompanyMember, AppError> {
        sqlx::query_as::<_, CompanyMember>(
            "INSERT INTO company_members (id, company_id, user_id, created_at) VALUES (?, ?, ?, ?) RETURNING *"
        )
            .bind(&member.id)
            .bind(&member.company_id)
            .bind(&member.user_id)
            .bind(member.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_member(&self, company_id: &str, user_id: &str) -> Result<Option<CompanyMember>, AppError> {
        sqlx::query_as::<_, CompanyMember>(
            "SELECT * FROM company_members WHERE company_id = ? AND user_id = ?"
        )
            .bind(company_id)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_members(&self, company_id: &str) -> Result<Vec<CompanyMember>, AppError> {
        sqlx::query_as::<_, CompanyMember>(
            "SELECT * FROM company_members WHERE company_id = ? ORDER BY created_at ASC"
        )
            .bind(company_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn remove_member(&self, company_id: &str, user_id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM company_members WHERE company_id = ? AND user_id = ?")
            .bind(company_id)
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Member not found".into()));
        }
        Ok(())
    }
}
