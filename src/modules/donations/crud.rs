use async_trait::async_trait;
use sqlx::{MySql, Pool};

use super::interface::{DonationRepository, Result};
use super::model::DonationBucket;

pub struct DonationCrud {
    pool: Pool<MySql>,
}

impl DonationCrud {
    pub fn new(pool: Pool<MySql>) -> Self {
        Self { pool }
    }

    async fn buckets(&self, sql: &str) -> Result<Vec<DonationBucket>> {
        let buckets = sqlx::query_as::<_, DonationBucket>(sql)
            .fetch_all(&self.pool)
            .await?;

        Ok(buckets)
    }
}

#[async_trait]
impl DonationRepository for DonationCrud {
    async fn daily_totals(&self) -> Result<Vec<DonationBucket>> {
        self.buckets(
            r#"
            SELECT DATE(created_at) AS period, CAST(SUM(donation) AS SIGNED) AS total_donation
            FROM transactions
            WHERE created_at >= CURRENT_DATE - INTERVAL 7 DAY AND status = TRUE
            GROUP BY period
            ORDER BY period
            "#,
        )
        .await
    }

    async fn weekly_totals(&self) -> Result<Vec<DonationBucket>> {
        self.buckets(
            r#"
            SELECT DATE(DATE_SUB(created_at, INTERVAL WEEKDAY(created_at) DAY)) AS period,
                   CAST(SUM(donation) AS SIGNED) AS total_donation
            FROM transactions
            WHERE created_at >= CURRENT_DATE - INTERVAL 30 DAY AND status = TRUE
            GROUP BY period
            ORDER BY period
            "#,
        )
        .await
    }

    async fn monthly_totals(&self) -> Result<Vec<DonationBucket>> {
        self.buckets(
            r#"
            SELECT CAST(DATE_FORMAT(created_at, '%Y-%m-01') AS DATE) AS period,
                   CAST(SUM(donation) AS SIGNED) AS total_donation
            FROM transactions
            WHERE created_at >= CAST(DATE_FORMAT(CURRENT_DATE, '%Y-%m-01') AS DATE) AND status = TRUE
            GROUP BY period
            ORDER BY period
            "#,
        )
        .await
    }
}
