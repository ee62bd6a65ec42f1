// ABOUTME: Integration tests for the core data models
// ABOUTME: Validates boundary parsing of patient records, food rows, scores, and appointments
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitarva

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::NaiveDate;
use serde_json::json;
use vitarva_core::errors::ErrorCode;
use vitarva_core::models::{
    AppointmentPatch, ConstitutionScore, Dosha, FoodCategory, FoodItem, MacroRange,
    NewAppointment, PatientRecord, PatientSchema,
};

fn food_row(vata: f64) -> serde_json::Value {
    json!({
        "id": 7,
        "name": "Basmati Rice",
        "category": "grains",
        "doshaEffects": { "vata": vata, "pitta": 0.9, "kapha": 0.4 },
        "rasa": ["Sweet"],
        "virya": "Cooling",
        "vipaka": "Sweet",
        "gunas": ["Light", "Soft"],
        "nutritionalValues": { "calories": 130, "protein": 2.7, "carbs": 28, "fiber": 0.4 },
        "ayurvedicBenefits": "Easy to digest, nourishing",
        "contraindications": [],
        "preparationTips": "Rinse well and cook with a pinch of cumin"
    })
}

#[test]
fn test_legacy_patient_payload_is_read_as_v1() {
    let payload = json!({
        "_id": "65f0c1",
        "name": "Meera Iyer",
        "age": 42,
        "gender": "Female",
        "phone": "+91 98450 00000",
        "dosha": { "vata": 25, "pitta": 50, "kapha": 25 },
        "conditions": ["Acidity"],
        "compliance": 80,
        "reports": [{ "name": "cbc.pdf", "data": "base64" }]
    });

    let record = PatientRecord::from_api_value(payload).unwrap();

    assert_eq!(record.schema, PatientSchema::V1);
    assert_eq!(record.id.as_deref(), Some("65f0c1"));
    assert_eq!(record.dosha.unwrap().dominant(), Dosha::Pitta);
    assert_eq!(record.reports.len(), 1);
}

#[test]
fn test_patient_serializes_schema_tag() {
    let value = serde_json::to_value(PatientRecord::new("Ravi", 30)).unwrap();
    assert_eq!(value["schema"], PatientSchema::V1.as_str());
    assert!(value.get("_id").is_none());
}

#[test]
fn test_unknown_patient_schema_rejected() {
    let err = PatientRecord::from_api_value(json!({
        "schema": "patient.v9",
        "name": "Ravi",
        "age": 30
    }))
    .unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidFormat);
}

#[test]
fn test_patient_with_malformed_dosha_rejected() {
    let err = PatientRecord::from_api_value(json!({
        "name": "Ravi",
        "age": 30,
        "dosha": { "vata": 80, "pitta": 80, "kapha": 80 }
    }))
    .unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidFormat);
}

#[test]
fn test_patient_invariants() {
    let mut record = PatientRecord::new("  ", 30);
    assert_eq!(record.validate().unwrap_err().code, ErrorCode::InvalidInput);

    record.name = "Ravi".to_owned();
    record.age = 200;
    assert_eq!(
        record.validate().unwrap_err().code,
        ErrorCode::ValueOutOfRange
    );

    record.age = 30;
    record.compliance = Some(101);
    assert_eq!(
        record.validate().unwrap_err().code,
        ErrorCode::ValueOutOfRange
    );
}

#[test]
fn test_food_row_parses_and_validates() {
    let item: FoodItem = serde_json::from_value(food_row(0.8)).unwrap();
    assert_eq!(item.category, FoodCategory::Grains);
    assert!((item.compatibility(Dosha::Vata) - 0.8).abs() < f64::EPSILON);
    item.validate().unwrap();
}

#[test]
fn test_food_row_out_of_range_compatibility() {
    let item: FoodItem = serde_json::from_value(food_row(1.4)).unwrap();
    assert_eq!(item.validate().unwrap_err().code, ErrorCode::InvalidFormat);
}

#[test]
fn test_legacy_category_labels() {
    let dairy: FoodCategory = serde_json::from_value(json!("Dairy Products")).unwrap();
    let nuts: FoodCategory = serde_json::from_value(json!("Nuts & Seeds")).unwrap();
    assert_eq!(dairy, FoodCategory::Dairy);
    assert_eq!(nuts, FoodCategory::Nuts);
}

#[test]
fn test_score_error_carries_details() {
    let err = ConstitutionScore::new(50, 50, 50).unwrap_err();
    assert_eq!(err.code, ErrorCode::ValueOutOfRange);
    assert_eq!(err.details["total"], 150);
}

#[test]
fn test_appointment_patch_rejects_bad_time_without_mutating() {
    let mut appt = NewAppointment {
        patient_name: "Asha".to_owned(),
        date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
        time: "10:30".to_owned(),
        kind: "Follow-up".to_owned(),
        notes: None,
    }
    .into_appointment()
    .unwrap();

    let patch = AppointmentPatch {
        patient_name: Some("Asha Rao".to_owned()),
        time: Some("99:99".to_owned()),
        ..AppointmentPatch::default()
    };
    assert!(patch.apply(&mut appt).is_err());
    assert_eq!(appt.patient_name, "Asha");
    assert_eq!(appt.time, "10:30");
}

#[test]
fn test_macro_range_orders_bounds() {
    let range = MacroRange::new(80, 60);
    assert_eq!(range.min, 60);
    assert!(range.contains(70));
    assert_eq!(range.to_string(), "60-80");
}
