//! Row projection: maps stored records to display-ready column values.
//!
//! Column order and label text are an external contract; spreadsheet
//! consumers depend on them staying stable.

use chrono::{DateTime, Utc};

use super::range::display_zone;
use crate::storage::models::{AgencyChannelVisit, PartnerVisit};

/// Timestamp display format: day-month-year, 12-hour clock with AM/PM.
const DATE_TIME_FORMAT: &str = "%d-%m-%Y %I:%M %p";

pub const PARTNER_SHEET_NAME: &str = "Partners";
pub const AGENCY_SHEET_NAME: &str = "AgencyChannel";

pub const PARTNER_COLUMNS: &[&str] = &[
    "Employee Name",
    "Date & Time",
    "Partner Name",
    "Partner Contact",
    "Partner Email",
    "Shop Name",
    "City/Village",
    "Tehsil",
    "District",
    "State",
    "Onboarding Status",
    "Partner Image",
    "Latitude",
    "Longitude",
];

pub const AGENCY_COLUMNS: &[&str] = &[
    "Employee Name",
    "Designation",
    "Date & Time",
    "Number of Partner Meet",
    "Motor Login Premium",
    "Health Login Premium",
    "LI Login Premium",
    "Number of FSC Onboarding",
    "Number of File Login",
    "Mutual Fund",
    "Number of SIP",
    "Insurance Premium",
    "Latitude",
    "Longitude",
];

/// A single spreadsheet cell value. Absent optional fields project to
/// `Empty`, which renders as an empty string rather than a null marker.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
    Empty,
}

impl Cell {
    pub fn opt_text(value: &Option<String>) -> Cell {
        match value {
            Some(s) => Cell::Text(s.clone()),
            None => Cell::Empty,
        }
    }

    pub fn opt_number(value: Option<f64>) -> Cell {
        match value {
            Some(n) => Cell::Number(n),
            None => Cell::Empty,
        }
    }

    /// The cell as the reader sees it, used for column sizing. Integral
    /// numbers render without a trailing `.0`.
    pub fn rendered(&self) -> String {
        match self {
            Cell::Text(s) => s.clone(),
            Cell::Number(n) => render_number(*n),
            Cell::Empty => String::new(),
        }
    }
}

fn render_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

fn format_instant(instant: DateTime<Utc>) -> String {
    instant
        .with_timezone(&display_zone())
        .format(DATE_TIME_FORMAT)
        .to_string()
}

/// One sheet's worth of projected data: a name, a fixed column order and
/// the rows beneath it. Every row holds exactly `columns.len()` cells.
#[derive(Debug, Clone)]
pub struct Sheet {
    pub name: &'static str,
    pub columns: &'static [&'static str],
    pub rows: Vec<Vec<Cell>>,
}

pub fn partner_sheet(records: &[PartnerVisit]) -> Sheet {
    let rows = records
        .iter()
        .map(|p| {
            vec![
                Cell::Text(p.employee_name.clone()),
                Cell::Text(format_instant(p.visiting_date_time)),
                Cell::Text(p.partner_name.clone()),
                Cell::Text(p.partner_contact_number.clone()),
                Cell::Text(p.partner_email.clone()),
                Cell::Text(p.shop_name.clone()),
                Cell::Text(p.city_village.clone()),
                Cell::opt_text(&p.tehsil),
                Cell::Text(p.district.clone()),
                Cell::Text(p.state.clone()),
                Cell::Text(p.onboarding_status.as_str().to_string()),
                Cell::opt_text(&p.retailer_image),
                Cell::opt_number(p.latitude),
                Cell::opt_number(p.longitude),
            ]
        })
        .collect();

    Sheet {
        name: PARTNER_SHEET_NAME,
        columns: PARTNER_COLUMNS,
        rows,
    }
}

pub fn agency_sheet(records: &[AgencyChannelVisit]) -> Sheet {
    let rows = records
        .iter()
        .map(|a| {
            vec![
                Cell::Text(a.employee_name.clone()),
                Cell::Text(a.designation.clone()),
                Cell::Text(format_instant(a.date_time)),
                Cell::Number(a.number_of_partner_meet),
                Cell::Number(a.motor_login_premium),
                Cell::Number(a.health_login_premium),
                Cell::Number(a.li_login_premium),
                Cell::Number(a.number_of_fsc_onboarding),
                Cell::Number(a.number_of_file_login),
                Cell::Number(a.mutual_fund),
                Cell::Number(a.number_of_sip),
                Cell::Number(a.insurance_premium),
                Cell::opt_number(a.latitude),
                Cell::opt_number(a.longitude),
            ]
        })
        .collect();

    Sheet {
        name: AGENCY_SHEET_NAME,
        columns: AGENCY_COLUMNS,
        rows,
    }
}
