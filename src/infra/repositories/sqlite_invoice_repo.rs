use crate::domain::{
    models::invoice::{Invoice, InvoiceItem, InvoiceWithClient, INVOICE_STATUS_SENT},
    ports::InvoiceRepository,
};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

const SELECT_WITH_CLIENT: &str =
    "SELECT i.id, i.company_id, i.invoice_number, i.status, i.client_id,
            i.issue_date, i.due_date, i.subtotal, i.tax_amount, i.total,
            i.notes, i.created_at,
            cl.name AS client_name, cl.email AS client_email,
            cl.phone AS client_phone, cl.address AS client_address
     FROM invoices i
     LEFT JOIN clients cl ON cl.id = i.client_id";

pub struct SqliteInvoiceRepo {
    pool: SqlitePool,
}

impl SqliteInvoiceRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InvoiceRepository for SqliteInvoiceRepo {
    async fn create_with_items(&self, invoice: &Invoice, items: &[InvoiceItem]) -> Result<Invoice, AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        let created = sqlx::query_as::<_, Invoice>(
            "INSERT INTO invoices (id, company_id, invoice_number, status, client_id, issue_date, due_date, subtotal, tax_amount, total, notes, created_by, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING *"
        )
            .bind(&invoice.id).bind(&invoice.company_id).bind(&invoice.invoice_number)
            .bind(&invoice.status).bind(&invoice.client_id).bind(invoice.issue_date)
            .bind(invoice.due_date).bind(invoice.subtotal).bind(invoice.tax_amount)
            .bind(invoice.total).bind(&invoice.notes).bind(&invoice.created_by)
            .bind(invoice.created_at)
            .fetch_one(&mut *tx).await.map_err(AppError::Database)?;

        for item in items {
            sqlx::query(
                "INSERT INTO invoice_items (id, invoice_id, description, quantity, unit_price, total) VALUES (?, ?, ?, ?, ?, ?)"
            )
                .bind(&item.id).bind(&item.invoice_id).bind(&item.description)
                .bind(item.quantity).bind(item.unit_price).bind(item.total)
                .execute(&mut *tx).await.map_err(AppError::Database)?;
        }

        tx.commit().await.map_err(AppError::Database)?;
        Ok(created)
    }

    async fn find_with_client(&self, id: &str) -> Result<Option<InvoiceWithClient>, AppError> {
        let sql = format!("{SELECT_WITH_CLIENT} WHERE i.id = ?");
        sqlx::query_as::<_, InvoiceWithClient>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_company(&self, company_id: &str) -> Result<Vec<InvoiceWithClient>, AppError> {
        let sql = format!(
            "{SELECT_WITH_CLIENT}
             WHERE i.company_id = ?
             ORDER BY i.created_at DESC, i.id DESC"
        );
        sqlx::query_as::<_, InvoiceWithClient>(&sql)
            .bind(company_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_items(&self, invoice_id: &str) -> Result<Vec<InvoiceItem>, AppError> {
        sqlx::query_as::<_, InvoiceItem>(
            "SELECT * FROM invoice_items WHERE invoice_id = ?"
        )
            .bind(invoice_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn sum_outstanding(&self, company_id: &str) -> Result<f64, AppError> {
        sqlx::query_scalar::<_, f64>(
            "SELECT COALESCE(SUM(total), 0.0) FROM invoices WHERE company_id = ? AND status = ?"
        )
            .bind(company_id)
            .bind(INVOICE_STATUS_SENT)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
