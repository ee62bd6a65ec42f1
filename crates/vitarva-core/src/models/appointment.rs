// ABOUTME: Appointment records kept in the practice key-value store
// ABOUTME: Appointment, NewAppointment, and AppointmentPatch with date/time validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitarva

use std::cmp::Ordering;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{AppError, AppResult};

const TIME_FORMAT: &str = "%H:%M";

/// Scheduled patient appointment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    /// Unique identifier
    pub id: Uuid,
    /// Patient display name
    pub patient_name: String,
    /// Calendar date
    pub date: NaiveDate,
    /// Start time, `HH:MM`
    pub time: String,
    /// Appointment type, e.g. "Consultation"
    #[serde(rename = "type")]
    pub kind: String,
    /// Optional free-text notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Appointment {
    /// Order by date, then time
    #[must_use]
    pub fn schedule_order(&self, other: &Self) -> Ordering {
        self.date
            .cmp(&other.date)
            .then_with(|| self.time.cmp(&other.time))
    }
}

/// Appointment fields supplied on creation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAppointment {
    /// Patient display name
    pub patient_name: String,
    /// Calendar date
    pub date: NaiveDate,
    /// Start time, `HH:MM`
    pub time: String,
    /// Appointment type
    #[serde(rename = "type")]
    pub kind: String,
    /// Optional free-text notes
    #[serde(default)]
    pub notes: Option<String>,
}

impl NewAppointment {
    /// Validate and assign a fresh identifier
    ///
    /// # Errors
    ///
    /// Returns `INVALID_INPUT` for a blank patient name or type, or a time not
    /// in `HH:MM` form
    pub fn into_appointment(self) -> AppResult<Appointment> {
        if self.patient_name.trim().is_empty() {
            return Err(AppError::invalid_input("Patient name must not be empty"));
        }
        if self.kind.trim().is_empty() {
            return Err(AppError::invalid_input("Appointment type must not be empty"));
        }
        let time = normalize_time(&self.time)?;

        Ok(Appointment {
            id: Uuid::new_v4(),
            patient_name: self.patient_name.trim().to_owned(),
            date: self.date,
            time,
            kind: self.kind.trim().to_owned(),
            notes: self.notes,
        })
    }
}

/// Partial update; `None` leaves a field unchanged
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentPatch {
    /// New patient name
    #[serde(default)]
    pub patient_name: Option<String>,
    /// New date
    #[serde(default)]
    pub date: Option<NaiveDate>,
    /// New time, `HH:MM`
    #[serde(default)]
    pub time: Option<String>,
    /// New type
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    /// New notes
    #[serde(default)]
    pub notes: Option<String>,
}

impl AppointmentPatch {
    /// Apply the patch in place
    ///
    /// # Errors
    ///
    /// Returns `INVALID_INPUT` if a patched value is blank or malformed; the
    /// appointment is left untouched in that case
    pub fn apply(self, appointment: &mut Appointment) -> AppResult<()> {
        let time = self.time.as_deref().map(normalize_time).transpose()?;
        if self
            .patient_name
            .as_deref()
            .is_some_and(|n| n.trim().is_empty())
        {
            return Err(AppError::invalid_input("Patient name must not be empty"));
        }

        if let Some(name) = self.patient_name {
            appointment.patient_name = name.trim().to_owned();
        }
        if let Some(date) = self.date {
            appointment.date = date;
        }
        if let Some(time) = time {
            appointment.time = time;
        }
        if let Some(kind) = self.kind {
            appointment.kind = kind;
        }
        if let Some(notes) = self.notes {
            appointment.notes = Some(notes);
        }
        Ok(())
    }
}

/// Parse `H:MM` or `HH:MM` and return the zero-padded form
fn normalize_time(raw: &str) -> AppResult<String> {
    NaiveTime::parse_from_str(raw.trim(), TIME_FORMAT)
        .map(|t| t.format(TIME_FORMAT).to_string())
        .map_err(|e| {
            AppError::invalid_input(format!("Invalid appointment time '{raw}', expected HH:MM"))
                .with_source(e)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_is_zero_padded() {
        assert_eq!(normalize_time("9:05").unwrap(), "09:05");
        assert!(normalize_time("25:00").is_err());
        assert!(normalize_time("noon").is_err());
    }

    #[test]
    fn test_wire_field_names() {
        let json = r#"{"patientName":"Asha","date":"2025-03-01","time":"10:30","type":"Consultation"}"#;
        let new: NewAppointment = serde_json::from_str(json).unwrap();
        let appt = new.into_appointment().unwrap();
        let value = serde_json::to_value(&appt).unwrap();

        assert_eq!(value["type"], "Consultation");
        assert_eq!(value["patientName"], "Asha");
        assert!(value.get("notes").is_none());
    }
}
