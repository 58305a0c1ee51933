use crate::domain::{
    models::transaction::{CategoryTotal, Transaction, TransactionWithRefs},
    ports::TransactionRepository,
};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;

const SELECT_WITH_REFS: &str =
    "SELECT t.id, t.company_id, t.kind, t.amount, t.description, t.date,
            t.category_id, t.client_id, t.attachment_url, t.created_at,
            c.name AS category_name, cl.name AS client_name
     FROM transactions t
     LEFT JOIN categories c ON c.id = t.category_id
     LEFT JOIN clients cl ON cl.id = t.client_id";

pub struct PostgresTransactionRepo {
    pool: PgPool,
}

impl PostgresTransactionRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TransactionRepository for PostgresTransactionRepo {
    async fn create(&self, transaction: &Transaction) -> Result<Transaction, AppError> {
        sqlx::query_as::<_, Transaction>(
            "INSERT INTO transactions (id, company_id, kind, amount, description, date, category_id, client_id, attachment_url, created_by, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
             RETURNING *"
        )
            .bind(&transaction.id).bind(&transaction.company_id).bind(&transaction.kind)
            .bind(transaction.amount).bind(&transaction.description).bind(transaction.date)
            .bind(&transaction.category_id).bind(&transaction.client_id).bind(&transaction.attachment_url)
            .bind(&transaction.created_by).bind(transaction.created_at).bind(transaction.updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Transaction>, AppError> {
        sqlx::query_as::<_, Transaction>("SELECT * FROM transactions WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, transaction: &Transaction) -> Result<Transaction, AppError> {
        sqlx::query_as::<_, Transaction>(
            "UPDATE transactions
             SET kind=$1, amount=$2, description=$3, date=$4, category_id=$5, client_id=$6, attachment_url=$7, updated_at=$8
             WHERE id=$9 AND company_id=$10
             RETURNING *"
        )
            .bind(&transaction.kind).bind(transaction.amount).bind(&transaction.description)
            .bind(transaction.date).bind(&transaction.category_id).bind(&transaction.client_id)
            .bind(&transaction.attachment_url).bind(transaction.updated_at)
            .bind(&transaction.id).bind(&transaction.company_id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM transactions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Transaction not found".into()));
        }
        Ok(())
    }

    async fn list_page(&self, company_id: &str, limit: i64, offset: i64) -> Result<Vec<TransactionWithRefs>, AppError> {
        let sql = format!(
            "{SELECT_WITH_REFS}
             WHERE t.company_id = $1
             ORDER BY t.created_at DESC, t.id DESC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, TransactionWithRefs>(&sql)
            .bind(company_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn count_by_company(&self, company_id: &str) -> Result<i64, AppError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM transactions WHERE company_id = $1")
            .bind(company_id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_in_range(&self, company_id: &str, start: NaiveDate, end: NaiveDate) -> Result<Vec<TransactionWithRefs>, AppError> {
        let sql = format!(
            "{SELECT_WITH_REFS}
             WHERE t.company_id = $1 AND t.date >= $2 AND t.date <= $3
             ORDER BY t.date ASC, t.id ASC"
        );
        sqlx::query_as::<_, TransactionWithRefs>(&sql)
            .bind(company_id)
            .bind(start)
            .bind(end)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_from_date(&self, company_id: &str, start: NaiveDate) -> Result<Vec<Transaction>, AppError> {
        sqlx::query_as::<_, Transaction>(
            "SELECT * FROM transactions WHERE company_id = $1 AND date >= $2 ORDER BY date ASC, id ASC"
        )
            .bind(company_id)
            .bind(start)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn sum_in_range(&self, company_id: &str, kind: &str, start: NaiveDate, end: NaiveDate) -> Result<f64, AppError> {
        sqlx::query_scalar::<_, f64>(
            "SELECT COALESCE(SUM(amount), 0.0) FROM transactions
             WHERE company_id = $1 AND kind = $2 AND date >= $3 AND date <= $4"
        )
            .bind(company_id)
            .bind(kind)
            .bind(start)
            .bind(end)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn sum_by_category(&self, company_id: &str, kind: &str, start: NaiveDate, end: NaiveDate) -> Result<Vec<CategoryTotal>, AppError> {
        sqlx::query_as::<_, CategoryTotal>(
            "SELECT c.name AS category_name, SUM(t.amount) AS total
             FROM transactions t
             LEFT JOIN categories c ON c.id = t.category_id
             WHERE t.company_id = $1 AND t.kind = $2 AND t.date >= $3 AND t.date <= $4
             GROUP BY c.name
             ORDER BY c.name ASC"
        )
            .bind(company_id)
            .bind(kind)
            .bind(start)
            .bind(end)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
