//! The logbook document tree.
//!
//! Every field is a `String` that defaults to empty, and every struct is
//! deserialized with `#[serde(default)]`, so a record written by an older or
//! partial editor still yields a complete tree.
//!
//! JSON keys match the storage record of the browser edition of the logbook,
//! which keeps exported files interchangeable between the two.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::session::ActivitySession;

/// The full student logbook.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct LogbookDocument {
    #[serde(rename = "nom")]
    pub last_name: String,

    #[serde(rename = "prenom")]
    pub first_name: String,

    #[serde(rename = "classe")]
    pub class_name: String,

    /// Health habits.
    #[serde(rename = "sante")]
    pub health: HealthHabits,

    /// What the student considers the minimum weekly practice.
    #[serde(rename = "minimumPratique")]
    pub minimum_practice: String,

    #[serde(rename = "rapportPratique")]
    pub practice_relationship: PracticeRelationship,

    /// Injuries and medical notes.
    #[serde(rename = "problemes")]
    pub issues: String,

    /// Conclusions drawn from the fitness tests.
    #[serde(rename = "testsBilan")]
    pub tests_summary: TestsSummary,

    pub collaboration: String,

    /// Logged sessions in display order.
    #[serde(rename = "apsaSessions")]
    pub activity_sessions: Vec<ActivitySession>,

    #[serde(rename = "preferencesApsa")]
    pub activity_preferences: String,

    #[serde(rename = "bilans")]
    pub semester_reviews: SemesterReviews,
}

/// Daily health habits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct HealthHabits {
    #[serde(rename = "alimentation")]
    pub diet: String,

    #[serde(rename = "sommeil")]
    pub sleep: String,

    #[serde(rename = "activitePhysique")]
    pub physical_activity: String,

    #[serde(rename = "stress")]
    pub stress_management: String,
}

/// The student's relationship with physical practice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct PracticeRelationship {
    #[serde(rename = "interet")]
    pub interest: String,

    #[serde(rename = "quantite")]
    pub frequency: String,

    #[serde(rename = "sports")]
    pub favorite_sports: String,

    #[serde(rename = "club")]
    pub club_experience: String,
}

/// Self-assessment drawn from the fitness tests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct TestsSummary {
    #[serde(rename = "pointsFaibles")]
    pub weaknesses: String,

    #[serde(rename = "pointsForts")]
    pub strengths: String,

    #[serde(rename = "objectifs")]
    pub goals: String,

    #[serde(rename = "moyens")]
    pub means: String,
}

/// One review per semester plus the final one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct SemesterReviews {
    #[serde(rename = "s1")]
    pub semester1: String,

    #[serde(rename = "s2")]
    pub semester2: String,

    #[serde(rename = "s3")]
    pub semester3: String,

    #[serde(rename = "s4")]
    pub semester4: String,

    #[serde(rename = "final")]
    pub final_review: String,
}

impl LogbookDocument {
    /// Find a session by id.
    pub fn session(&self, id: super::SessionId) -> Option<&ActivitySession> {
        self.activity_sessions.iter().find(|s| s.id == id)
    }

    /// Whether every field still holds its default value.
    pub fn is_blank(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_document_serializes_every_key() {
        let value = serde_json::to_value(LogbookDocument::default()).unwrap();
        let obj = value.as_object().unwrap();

        for key in [
            "nom",
            "prenom",
            "classe",
            "sante",
            "minimumPratique",
            "rapportPratique",
            "problemes",
            "testsBilan",
            "collaboration",
            "apsaSessions",
            "preferencesApsa",
            "bilans",
        ] {
            assert!(obj.contains_key(key), "missing key {}", key);
        }
        assert_eq!(value["sante"]["activitePhysique"], "");
        assert_eq!(value["bilans"]["final"], "");
        assert_eq!(value["apsaSessions"], serde_json::json!([]));
    }

    #[test]
    fn missing_keys_fall_back_to_empty() {
        let doc: LogbookDocument =
            serde_json::from_str(r#"{"nom": "Martin", "sante": {"sommeil": "8h"}}"#).unwrap();

        assert_eq!(doc.last_name, "Martin");
        assert_eq!(doc.health.sleep, "8h");
        assert_eq!(doc.health.diet, "");
        assert_eq!(doc.first_name, "");
        assert!(doc.activity_sessions.is_empty());
        assert_eq!(doc.semester_reviews, SemesterReviews::default());
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let doc: LogbookDocument =
            serde_json::from_str(r#"{"prenom": "Léa", "couleur": "bleu"}"#).unwrap();
        assert_eq!(doc.first_name, "Léa");
    }

    #[test]
    fn blank_document() {
        let mut doc = LogbookDocument::default();
        assert!(doc.is_blank());
        doc.collaboration = "binôme".to_string();
        assert!(!doc.is_blank());
    }
}
