use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Partner onboarding status as submitted from the field form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OnboardingStatus {
    Yes,
    #[default]
    No,
}

impl OnboardingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OnboardingStatus::Yes => "yes",
            OnboardingStatus::No => "no",
        }
    }
}

/// Incoming partner-visit submission. Timestamps arrive as ISO-8601
/// strings and deserialize straight into absolute instants.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerSubmission {
    pub employee_name: String,
    pub partner_name: String,
    pub partner_contact_number: String,
    pub partner_email: String,
    pub shop_name: String,
    pub city_village: String,
    #[serde(default)]
    pub tehsil: Option<String>,
    pub district: String,
    pub state: String,
    #[serde(default)]
    pub visiting_date_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub onboarding_status: OnboardingStatus,
    #[serde(default)]
    pub retailer_image: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

/// Stored partner-visit record. Append-only: written once at ingestion,
/// never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerVisit {
    pub id: Uuid,
    pub employee_name: String,
    pub partner_name: String,
    pub partner_contact_number: String,
    pub partner_email: String,
    pub shop_name: String,
    pub city_village: String,
    pub tehsil: Option<String>,
    pub district: String,
    pub state: String,
    pub visiting_date_time: DateTime<Utc>,
    pub onboarding_status: OnboardingStatus,
    pub retailer_image: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PartnerVisit {
    /// Materialize a stored record from a submission, assigning identity
    /// and system timestamps. A missing visiting time defaults to "now".
    pub fn from_submission(sub: PartnerSubmission, now: DateTime<Utc>) -> Self {
        PartnerVisit {
            id: Uuid::new_v4(),
            employee_name: sub.employee_name,
            partner_name: sub.partner_name,
            partner_contact_number: sub.partner_contact_number,
            partner_email: sub.partner_email,
            shop_name: sub.shop_name,
            city_village: sub.city_village,
            tehsil: sub.tehsil,
            district: sub.district,
            state: sub.state,
            visiting_date_time: sub.visiting_date_time.unwrap_or(now),
            onboarding_status: sub.onboarding_status,
            retailer_image: sub.retailer_image,
            latitude: sub.latitude,
            longitude: sub.longitude,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Incoming agency-channel submission. Every counter/premium field
/// defaults to 0 when the form leaves it blank.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgencySubmission {
    pub employee_name: String,
    pub designation: String,
    #[serde(default)]
    pub date_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub number_of_partner_meet: f64,
    #[serde(default)]
    pub motor_login_premium: f64,
    #[serde(default)]
    pub health_login_premium: f64,
    #[serde(default)]
    pub li_login_premium: f64,
    #[serde(default)]
    pub number_of_fsc_onboarding: f64,
    #[serde(default)]
    pub number_of_file_login: f64,
    #[serde(default)]
    pub mutual_fund: f64,
    #[serde(default)]
    pub number_of_sip: f64,
    #[serde(default)]
    pub insurance_premium: f64,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

/// Stored agency-channel visit record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgencyChannelVisit {
    pub id: Uuid,
    pub employee_name: String,
    pub designation: String,
    pub date_time: DateTime<Utc>,
    pub number_of_partner_meet: f64,
    pub motor_login_premium: f64,
    pub health_login_premium: f64,
    pub li_login_premium: f64,
    pub number_of_fsc_onboarding: f64,
    pub number_of_file_login: f64,
    pub mutual_fund: f64,
    pub number_of_sip: f64,
    pub insurance_premium: f64,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl AgencyChannelVisit {
    pub fn from_submission(sub: AgencySubmission, now: DateTime<Utc>) -> Self {
        AgencyChannelVisit {
            id: Uuid::new_v4(),
            employee_name: sub.employee_name,
            designation: sub.designation,
            date_time: sub.date_time.unwrap_or(now),
            number_of_partner_meet: sub.number_of_partner_meet,
            motor_login_premium: sub.motor_login_premium,
            health_login_premium: sub.health_login_premium,
            li_login_premium: sub.li_login_premium,
            number_of_fsc_onboarding: sub.number_of_fsc_onboarding,
            number_of_file_login: sub.number_of_file_login,
            mutual_fund: sub.mutual_fund,
            number_of_sip: sub.number_of_sip,
            insurance_premium: sub.insurance_premium,
            latitude: sub.latitude,
            longitude: sub.longitude,
            created_at: now,
            updated_at: now,
        }
    }
}
