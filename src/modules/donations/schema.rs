use chrono::NaiveDate;
use serde::Serialize;

use super::model::DonationBucket;

#[derive(Debug, Serialize)]
pub struct DailyDonation {
    pub day: NaiveDate,
    pub total_donation: String,
}

#[derive(Debug, Serialize)]
pub struct WeeklyDonation {
    pub week: NaiveDate,
    pub total_donation: String,
}

#[derive(Debug, Serialize)]
pub struct MonthlyDonation {
    pub month: NaiveDate,
    pub total_donation: String,
}

impl From<DonationBucket> for DailyDonation {
    fn from(b: DonationBucket) -> Self {
        Self {
            day: b.period,
            total_donation: b.total_donation.to_string(),
        }
    }
}

impl From<DonationBucket> for WeeklyDonation {
    fn from(b: DonationBucket) -> Self {
        Self {
            week: b.period,
            total_donation: b.total_donation.to_string(),
        }
    }
}

impl From<DonationBucket> for MonthlyDonation {
    fn from(b: DonationBucket) -> Self {
        Self {
            month: b.period,
            total_donation: b.total_donation.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DonationStats {
    pub daily_donations: Vec<DailyDonation>,
    pub weekly_donations: Vec<WeeklyDonation>,
    pub monthly_donations: Vec<MonthlyDonation>,
}
