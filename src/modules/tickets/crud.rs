use async_trait::async_trait;
use chrono::Utc;
use sqlx::{MySql, Pool};

use super::interface::{Result, TicketRepository};
use super::model::{NewTicket, Ticket, TicketChanges};

const SELECT_TICKET: &str =
    "SELECT id, title, description, status, created_at, updated_at FROM tickets";

pub struct TicketCrud {
    pool: Pool<MySql>,
}

impl TicketCrud {
    pub fn new(pool: Pool<MySql>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TicketRepository for TicketCrud {
    async fn list(&self) -> Result<Vec<Ticket>> {
        let tickets = sqlx::query_as::<_, Ticket>(&format!("{} ORDER BY id", SELECT_TICKET))
            .fetch_all(&self.pool)
            .await?;

        Ok(tickets)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Ticket>> {
        let ticket = sqlx::query_as::<_, Ticket>(&format!("{} WHERE id = ?", SELECT_TICKET))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(ticket)
    }

    async fn create(&self, ticket: &NewTicket) -> Result<Ticket> {
        let now = Utc::now();

        let result = sqlx::query(
            r#"
            INSERT INTO tickets (title, description, status, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&ticket.title)
        .bind(&ticket.description)
        .bind(ticket.status.as_str())
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_id() as i64;

        // Read back so the returned row carries the stored timestamp precision
        let created = self.find_by_id(id).await?.ok_or(sqlx::Error::RowNotFound)?;
        Ok(created)
    }

    async fn update(&self, id: i64, changes: &TicketChanges) -> Result<Option<Ticket>> {
        sqlx::query(
            r#"
            UPDATE tickets
            SET title = COALESCE(?, title),
                description = COALESCE(?, description),
                status = COALESCE(?, status),
                updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&changes.title)
        .bind(&changes.description)
        .bind(changes.status.map(|s| s.as_str()))
        .bind(Utc::now())
        .bind(id)
        .execute(&self.pool)
        .await?;

        self.find_by_id(id).await
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM tickets WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
