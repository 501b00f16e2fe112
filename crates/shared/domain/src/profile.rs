//! Profile domain entity and related types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Personal details owned by exactly one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: i32,
    pub sex: String,
    pub dob: NaiveDate,
    pub tel: String,
    pub address: String,
    pub city: String,
}

/// Profile that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProfile {
    pub sex: String,
    pub dob: NaiveDate,
    pub tel: String,
    pub address: String,
    pub city: String,
}

impl NewProfile {
    pub fn new(
        sex: impl Into<String>,
        dob: NaiveDate,
        tel: impl Into<String>,
        address: impl Into<String>,
        city: impl Into<String>,
    ) -> Self {
        Self {
            sex: sex.into(),
            dob,
            tel: tel.into(),
            address: address.into(),
            city: city.into(),
        }
    }
}

/// Profile creation data transfer object
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProfile {
    pub sex: String,
    /// Date of birth (`YYYY-MM-DD`)
    pub dob: NaiveDate,
    pub tel: String,
    pub address: String,
    pub city: String,
}

impl From<CreateProfile> for NewProfile {
    fn from(dto: CreateProfile) -> Self {
        NewProfile::new(dto.sex, dto.dob, dto.tel, dto.address, dto.city)
    }
}
