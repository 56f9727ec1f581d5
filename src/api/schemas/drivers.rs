use crate::domain::driver::{Driver, DriverProfile, DriverStatus};
use crate::roster::DriverRoster;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDriver {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub license_number: Option<String>,
    pub photo: Option<String>,
}

impl From<NewDriver> for Driver {
    fn from(d: NewDriver) -> Self {
        Self {
            id: d.id,
            profile: DriverProfile {
                name: d.name,
                email: d.email,
                phone: d.phone,
                license_number: d.license_number,
                photo: d.photo,
            },
            status: DriverStatus::Pending,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub license_number: Option<String>,
    pub photo: Option<String>,
    pub status: String,
}

impl From<&Driver> for DriverResponse {
    fn from(d: &Driver) -> Self {
        Self {
            id: d.id,
            name: d.profile.name.clone(),
            email: d.profile.email.clone(),
            phone: d.profile.phone.clone(),
            license_number: d.profile.license_number.clone(),
            photo: d.profile.photo.clone(),
            status: d.status.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RosterResponse {
    pub pending: Vec<DriverResponse>,
    pub approved: Vec<DriverResponse>,
}

impl From<&DriverRoster> for RosterResponse {
    fn from(roster: &DriverRoster) -> Self {
        Self {
            pending: roster.pending.iter().map(Into::into).collect(),
            approved: roster.approved.iter().map(Into::into).collect(),
        }
    }
}
