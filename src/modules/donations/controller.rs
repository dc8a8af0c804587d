use axum::{extract::State, Json};
use std::sync::Arc;

use crate::modules::common::ApiResponse;
use crate::AppState;
use super::interface::DonationError;
use super::schema::DonationStats;

// =============================================================================
// GET /api/v1/donation
// =============================================================================

pub async fn get_donation_stats(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<DonationStats>>, DonationError> {
    let (daily, weekly, monthly) = tokio::try_join!(
        state.donations.daily_totals(),
        state.donations.weekly_totals(),
        state.donations.monthly_totals(),
    )?;

    let stats = DonationStats {
        daily_donations: daily.into_iter().map(Into::into).collect(),
        weekly_donations: weekly.into_iter().map(Into::into).collect(),
        monthly_donations: monthly.into_iter().map(Into::into).collect(),
    };

    Ok(Json(ApiResponse::success("success", Some(stats))))
}
