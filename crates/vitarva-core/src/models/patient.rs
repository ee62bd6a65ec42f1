// ABOUTME: Versioned patient record schema validated at the REST boundary
// ABOUTME: PatientRecord, PatientReport, PatientNote, and from_api_value for untrusted payloads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitarva

use serde::{Deserialize, Serialize};

use super::dosha::ConstitutionScore;
use crate::constants::patients::{MAX_AGE_YEARS, MAX_COMPLIANCE, SCHEMA_V1};
use crate::errors::{AppError, AppResult};

/// Schema tag carried by every stored patient record.
///
/// Payloads without a tag predate versioning and are read as v1.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PatientSchema {
    /// First tagged revision
    #[default]
    #[serde(rename = "patient.v1")]
    V1,
}

impl PatientSchema {
    /// Wire tag
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::V1 => SCHEMA_V1,
        }
    }
}

/// Uploaded report attachment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientReport {
    /// File name
    pub name: String,
    /// Encoded file contents
    pub data: String,
}

/// Patient record as exchanged with the patient-record service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientRecord {
    /// Schema revision
    #[serde(default)]
    pub schema: PatientSchema,
    /// Server-assigned identifier, absent for new records
    #[serde(rename = "_id", alias = "id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Full name
    pub name: String,
    /// Age in years
    pub age: u32,
    /// Gender as entered
    #[serde(default)]
    pub gender: String,
    /// Contact phone
    #[serde(default)]
    pub phone: String,
    /// Contact email
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Postal address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Photo URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    /// Assessed constitution
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dosha: Option<ConstitutionScore>,
    /// Current conditions
    #[serde(default)]
    pub conditions: Vec<String>,
    /// Current medications
    #[serde(default)]
    pub medications: Vec<String>,
    /// Last visit date as entered
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_visit: Option<String>,
    /// Next appointment date as entered
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_appointment: Option<String>,
    /// Diet compliance percentage
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compliance: Option<u8>,
    /// Free-text notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Report attachments
    #[serde(default)]
    pub reports: Vec<PatientReport>,
    /// Past illnesses
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub past_diseases: Option<String>,
    /// Current diet description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_diet: Option<String>,
}

impl PatientRecord {
    /// Minimal new record
    #[must_use]
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            schema: PatientSchema::V1,
            id: None,
            name: name.into(),
            age,
            gender: String::new(),
            phone: String::new(),
            email: None,
            address: None,
            photo: None,
            dosha: None,
            conditions: Vec::new(),
            medications: Vec::new(),
            last_visit: None,
            next_appointment: None,
            compliance: None,
            notes: None,
            reports: Vec::new(),
            past_diseases: None,
            current_diet: None,
        }
    }

    /// Parse and validate an untrusted payload from the patient-record service
    ///
    /// # Errors
    ///
    /// Returns `INVALID_FORMAT` if the payload does not match the schema, or
    /// the error from [`PatientRecord::validate`]
    pub fn from_api_value(value: serde_json::Value) -> AppResult<Self> {
        let record: Self = serde_json::from_value(value).map_err(|e| {
            AppError::invalid_format(format!("Patient record rejected: {e}")).with_source(e)
        })?;
        record.validate()?;
        Ok(record)
    }

    /// Check record invariants
    ///
    /// # Errors
    ///
    /// Returns `INVALID_INPUT` for a blank name and `VALUE_OUT_OF_RANGE` for an
    /// implausible age or compliance
    pub fn validate(&self) -> AppResult<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::invalid_input("Patient name must not be empty"));
        }
        if self.age > MAX_AGE_YEARS {
            return Err(AppError::value_out_of_range(format!(
                "Patient age {} exceeds {MAX_AGE_YEARS}",
                self.age
            )));
        }
        if let Some(compliance) = self.compliance {
            if compliance > MAX_COMPLIANCE {
                return Err(AppError::value_out_of_range(format!(
                    "Compliance {compliance} exceeds {MAX_COMPLIANCE}"
                )));
            }
        }
        Ok(())
    }
}

/// Practitioner note attached to a patient
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientNote {
    /// Note text
    #[serde(alias = "text")]
    pub note: String,
    /// Author, when recorded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Creation timestamp as sent by the service
    #[serde(default, alias = "date", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl PatientNote {
    /// New note to be posted
    #[must_use]
    pub fn new(note: impl Into<String>, author: Option<String>) -> Self {
        Self {
            note: note.into(),
            author,
            created_at: None,
        }
    }
}
