//! Logged activity sessions.

use chrono::Utc;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CarnetError;

/// Identifier of an [`ActivitySession`].
///
/// Stored as a plain JSON number (milliseconds since the epoch at creation
/// time, bumped when needed so ids stay unique).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct SessionId(u64);

impl SessionId {
    /// Wrap a raw id.
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw numeric value.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SessionId {
    type Err = CarnetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(Self)
            .map_err(|_| CarnetError::InvalidSessionId {
                value: s.to_string(),
            })
    }
}

/// Hands out session ids that are never reused within a process.
///
/// A new id is the current time in milliseconds, unless that would not be
/// strictly greater than every id already issued or already present in the
/// document, in which case it is one past the largest.
#[derive(Debug, Clone, Default)]
pub struct SessionIdMinter {
    last_issued: u64,
}

impl SessionIdMinter {
    /// Create a minter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mint an id not present in `existing`.
    pub fn mint<'a>(
        &mut self,
        existing: impl IntoIterator<Item = &'a ActivitySession>,
    ) -> SessionId {
        let now = u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0);
        let floor = existing
            .into_iter()
            .map(|s| s.id.0)
            .chain(std::iter::once(self.last_issued))
            .max()
            .unwrap_or(0);

        let id = now.max(floor.saturating_add(1));
        self.last_issued = id;
        SessionId(id)
    }
}

/// One logged physical-activity session with its before/after self-assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ActivitySession {
    pub id: SessionId,

    #[serde(default)]
    pub date: String,

    #[serde(default, rename = "apsa")]
    pub activity_name: String,

    #[serde(default, rename = "actions")]
    pub actions_taken: String,

    #[serde(default, rename = "apprentissages")]
    pub lessons_learned: String,

    #[serde(default, rename = "bilan")]
    pub outcome_summary: String,

    #[serde(default, rename = "etatPhysiqueAvant")]
    pub physical_state_before: String,

    #[serde(default, rename = "etatPhysiqueApres")]
    pub physical_state_after: String,

    #[serde(default, rename = "etatPsychologiqueAvant")]
    pub psychological_state_before: String,

    #[serde(default, rename = "etatPsychologiqueApres")]
    pub psychological_state_after: String,

    /// Borg scale, 1 to 10. Not enforced.
    #[serde(default, rename = "effortAvant")]
    pub perceived_effort_before: String,

    #[serde(default, rename = "effortApres")]
    pub perceived_effort_after: String,

    #[serde(default, rename = "commentaire")]
    pub comment: String,
}

impl ActivitySession {
    /// Create a session with every field empty.
    pub fn new(id: SessionId) -> Self {
        Self {
            id,
            date: String::new(),
            activity_name: String::new(),
            actions_taken: String::new(),
            lessons_learned: String::new(),
            outcome_summary: String::new(),
            physical_state_before: String::new(),
            physical_state_after: String::new(),
            psychological_state_before: String::new(),
            psychological_state_after: String::new(),
            perceived_effort_before: String::new(),
            perceived_effort_after: String::new(),
            comment: String::new(),
        }
    }

    /// Read a field.
    pub fn get(&self, field: SessionField) -> &str {
        match field {
            SessionField::Date => &self.date,
            SessionField::ActivityName => &self.activity_name,
            SessionField::ActionsTaken => &self.actions_taken,
            SessionField::LessonsLearned => &self.lessons_learned,
            SessionField::OutcomeSummary => &self.outcome_summary,
            SessionField::PhysicalStateBefore => &self.physical_state_before,
            SessionField::PhysicalStateAfter => &self.physical_state_after,
            SessionField::PsychologicalStateBefore => &self.psychological_state_before,
            SessionField::PsychologicalStateAfter => &self.psychological_state_after,
            SessionField::PerceivedEffortBefore => &self.perceived_effort_before,
            SessionField::PerceivedEffortAfter => &self.perceived_effort_after,
            SessionField::Comment => &self.comment,
        }
    }

    /// Overwrite a field.
    pub fn set(&mut self, field: SessionField, value: impl Into<String>) {
        let slot = match field {
            SessionField::Date => &mut self.date,
            SessionField::ActivityName => &mut self.activity_name,
            SessionField::ActionsTaken => &mut self.actions_taken,
            SessionField::LessonsLearned => &mut self.lessons_learned,
            SessionField::OutcomeSummary => &mut self.outcome_summary,
            SessionField::PhysicalStateBefore => &mut self.physical_state_before,
            SessionField::PhysicalStateAfter => &mut self.physical_state_after,
            SessionField::PsychologicalStateBefore => &mut self.psychological_state_before,
            SessionField::PsychologicalStateAfter => &mut self.psychological_state_after,
            SessionField::PerceivedEffortBefore => &mut self.perceived_effort_before,
            SessionField::PerceivedEffortAfter => &mut self.perceived_effort_after,
            SessionField::Comment => &mut self.comment,
        };
        *slot = value.into();
    }
}

/// The editable fields of an [`ActivitySession`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionField {
    Date,
    ActivityName,
    ActionsTaken,
    LessonsLearned,
    OutcomeSummary,
    PhysicalStateBefore,
    PhysicalStateAfter,
    PsychologicalStateBefore,
    PsychologicalStateAfter,
    PerceivedEffortBefore,
    PerceivedEffortAfter,
    Comment,
}

impl SessionField {
    /// All fields in form order.
    pub const ALL: [SessionField; 12] = [
        Self::Date,
        Self::ActivityName,
        Self::ActionsTaken,
        Self::LessonsLearned,
        Self::OutcomeSummary,
        Self::PhysicalStateBefore,
        Self::PhysicalStateAfter,
        Self::PsychologicalStateBefore,
        Self::PsychologicalStateAfter,
        Self::PerceivedEffortBefore,
        Self::PerceivedEffortAfter,
        Self::Comment,
    ];

    /// The JSON key of the field, also accepted on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::ActivityName => "apsa",
            Self::ActionsTaken => "actions",
            Self::LessonsLearned => "apprentissages",
            Self::OutcomeSummary => "bilan",
            Self::PhysicalStateBefore => "etatPhysiqueAvant",
            Self::PhysicalStateAfter => "etatPhysiqueApres",
            Self::PsychologicalStateBefore => "etatPsychologiqueAvant",
            Self::PsychologicalStateAfter => "etatPsychologiqueApres",
            Self::PerceivedEffortBefore => "effortAvant",
            Self::PerceivedEffortAfter => "effortApres",
            Self::Comment => "commentaire",
        }
    }

    /// Form label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Date => "Date",
            Self::ActivityName => "APSA pratiquée",
            Self::ActionsTaken => "Actions mises en œuvre",
            Self::LessonsLearned => "Ce que j'ai appris",
            Self::OutcomeSummary => "Bilan de la séance",
            Self::PhysicalStateBefore => "État physique avant",
            Self::PhysicalStateAfter => "État physique après",
            Self::PsychologicalStateBefore => "État psychologique avant",
            Self::PsychologicalStateAfter => "État psychologique après",
            Self::PerceivedEffortBefore => "Effort perçu avant (1-10)",
            Self::PerceivedEffortAfter => "Effort perçu après (1-10)",
            Self::Comment => "Commentaire",
        }
    }
}

impl fmt::Display for SessionField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SessionField {
    type Err = CarnetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|f| f.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CarnetError::UnknownSessionField {
                name: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_is_empty() {
        let session = ActivitySession::new(SessionId::from_raw(7));
        assert_eq!(session.id.get(), 7);
        for field in SessionField::ALL {
            assert_eq!(session.get(field), "");
        }
    }

    #[test]
    fn set_changes_only_that_field() {
        let mut session = ActivitySession::new(SessionId::from_raw(1));
        session.set(SessionField::PerceivedEffortAfter, "8");

        assert_eq!(session.perceived_effort_after, "8");
        for field in SessionField::ALL {
            if field != SessionField::PerceivedEffortAfter {
                assert_eq!(session.get(field), "");
            }
        }
    }

    #[test]
    fn session_field_round_trips_through_str() {
        for field in SessionField::ALL {
            assert_eq!(field.as_str().parse::<SessionField>().unwrap(), field);
        }
    }

    #[test]
    fn session_field_parse_is_case_insensitive() {
        assert_eq!(
            "EFFORTAVANT".parse::<SessionField>().unwrap(),
            SessionField::PerceivedEffortBefore
        );
    }

    #[test]
    fn unknown_session_field_is_rejected() {
        let err = "humeur".parse::<SessionField>().unwrap_err();
        assert!(matches!(err, CarnetError::UnknownSessionField { .. }));
    }

    #[test]
    fn session_id_parses_numbers_only() {
        assert_eq!("42".parse::<SessionId>().unwrap(), SessionId::from_raw(42));
        assert!("abc".parse::<SessionId>().is_err());
    }

    #[test]
    fn session_id_serializes_as_number() {
        let json = serde_json::to_string(&SessionId::from_raw(1700000000000)).unwrap();
        assert_eq!(json, "1700000000000");
    }

    #[test]
    fn minted_ids_increase() {
        let none: Vec<ActivitySession> = Vec::new();
        let mut minter = SessionIdMinter::new();
        let a = minter.mint(&none);
        let b = minter.mint(&none);
        let c = minter.mint(&none);
        assert!(a < b && b < c);
    }

    #[test]
    fn minted_id_is_above_existing_ids() {
        let far_future = SessionId::from_raw(u64::MAX / 2);
        let existing = vec![ActivitySession::new(far_future)];
        let mut minter = SessionIdMinter::new();

        let id = minter.mint(&existing);
        assert!(id > far_future);
    }

    #[test]
    fn session_with_missing_fields_deserializes() {
        let session: ActivitySession =
            serde_json::from_str(r#"{"id": 5, "apsa": "Escalade"}"#).unwrap();
        assert_eq!(session.activity_name, "Escalade");
        assert_eq!(session.comment, "");
    }
}
