// ABOUTME: Subject (user profile) model tracked by the progress engine
// ABOUTME: Profile identity plus optional age, height, and weight measurements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{validate_name, validate_positive, MAX_USERNAME_LEN};
use crate::errors::AppResult;

/// A tracked user profile
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Subject {
    /// Unique identifier
    pub id: Uuid,
    /// Unique username
    pub username: String,
    /// Age in years
    pub age: Option<u32>,
    /// Height in centimeters
    pub height_cm: Option<f64>,
    /// Body weight in kilograms
    pub weight_kg: Option<f64>,
    /// When the profile was created
    pub created_at: DateTime<Utc>,
}

/// Body for creating or replacing a subject
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SubjectRequest {
    /// Unique username
    pub username: String,
    /// Age in years
    #[serde(default)]
    pub age: Option<u32>,
    /// Height in centimeters
    #[serde(default)]
    pub height_cm: Option<f64>,
    /// Body weight in kilograms
    #[serde(default)]
    pub weight_kg: Option<f64>,
}

impl SubjectRequest {
    /// Check the profile invariants: non-blank username, positive measurements
    pub fn validate(&self) -> AppResult<()> {
        validate_name("username", &self.username, MAX_USERNAME_LEN)?;
        validate_positive("height_cm", self.height_cm)?;
        validate_positive("weight_kg", self.weight_kg)
    }
}

impl Subject {
    /// Build a new subject from a validated request
    pub fn from_request(request: SubjectRequest) -> AppResult<Self> {
        request.validate()?;
        Ok(Self {
            id: Uuid::new_v4(),
            username: request.username.trim().to_owned(),
            age: request.age,
            height_cm: request.height_cm,
            weight_kg: request.weight_kg,
            created_at: Utc::now(),
        })
    }

    /// Replace the mutable profile fields from a validated request
    pub fn apply(&mut self, request: SubjectRequest) -> AppResult<()> {
        request.validate()?;
        self.username = request.username.trim().to_owned();
        self.age = request.age;
        self.height_cm = request.height_cm;
        self.weight_kg = request.weight_kg;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    fn request(weight_kg: Option<f64>) -> SubjectRequest {
        SubjectRequest {
            username: "alice".to_owned(),
            age: Some(31),
            height_cm: Some(168.0),
            weight_kg,
        }
    }

    #[test]
    fn test_from_request_trims_username() {
        let mut req = request(Some(62.5));
        req.username = "  alice ".to_owned();

        let subject = Subject::from_request(req).unwrap();
        assert_eq!(subject.username, "alice");
        assert_eq!(subject.weight_kg, Some(62.5));
    }

    #[test]
    fn test_rejects_non_positive_weight() {
        let err = Subject::from_request(request(Some(0.0))).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);

        let err = Subject::from_request(request(Some(-3.0))).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
    }

    #[test]
    fn test_absent_measurements_are_allowed() {
        let subject = Subject::from_request(SubjectRequest {
            username: "bob".to_owned(),
            ..SubjectRequest::default()
        })
        .unwrap();
        assert!(subject.weight_kg.is_none());
        assert!(subject.height_cm.is_none());
    }

    #[test]
    fn test_blank_username_is_missing() {
        let err = Subject::from_request(SubjectRequest::default()).unwrap_err();
        assert_eq!(err.code, ErrorCode::MissingRequiredField);
    }
}
