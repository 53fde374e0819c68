//! Which parts of the logbook are expanded on screen.
//!
//! This state lives only as long as the process. Every start uses the same
//! defaults regardless of what was toggled last time.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::document::{FieldPath, HealthField, PracticeField, ReviewField, TestsField};
use crate::error::CarnetError;

/// A collapsible part of the logbook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Section {
    Intro,
    Health,
    PracticeKnowledge,
    Collaboration,
    Activities,
    Reviews,
}

impl Section {
    /// All sections in display order.
    pub const ALL: [Section; 6] = [
        Section::Intro,
        Section::Health,
        Section::PracticeKnowledge,
        Section::Collaboration,
        Section::Activities,
        Section::Reviews,
    ];

    /// Identifier accepted on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Intro => "intro",
            Section::Health => "sante",
            Section::PracticeKnowledge => "connaissances",
            Section::Collaboration => "collaboration",
            Section::Activities => "apsas",
            Section::Reviews => "bilans",
        }
    }

    /// Heading shown above the section.
    pub fn title(&self) -> &'static str {
        match self {
            Section::Intro => "Présentation",
            Section::Health => "Santé et hygiène de vie",
            Section::PracticeKnowledge => "Connaissance de soi et de sa pratique",
            Section::Collaboration => "Travail en collaboration",
            Section::Activities => "Séances d'APSA",
            Section::Reviews => "Bilans",
        }
    }

    /// Whether the section starts expanded.
    pub fn expanded_by_default(&self) -> bool {
        !matches!(self, Section::Collaboration | Section::Reviews)
    }

    /// Scalar fields shown in this section, in display order.
    ///
    /// The session list itself belongs to [`Section::Activities`] and is not
    /// a scalar field.
    pub fn fields(&self) -> Vec<FieldPath> {
        match self {
            Section::Intro => vec![FieldPath::LastName, FieldPath::FirstName, FieldPath::ClassName],
            Section::Health => {
                let mut fields: Vec<FieldPath> = [
                    HealthField::Diet,
                    HealthField::Sleep,
                    HealthField::PhysicalActivity,
                    HealthField::StressManagement,
                ]
                .into_iter()
                .map(FieldPath::Health)
                .collect();
                fields.push(FieldPath::MinimumPractice);
                fields
            }
            Section::PracticeKnowledge => {
                let mut fields: Vec<FieldPath> = [
                    PracticeField::Interest,
                    PracticeField::Frequency,
                    PracticeField::FavoriteSports,
                    PracticeField::ClubExperience,
                ]
                .into_iter()
                .map(FieldPath::PracticeRelationship)
                .collect();
                fields.push(FieldPath::Issues);
                fields.extend(
                    [
                        TestsField::Weaknesses,
                        TestsField::Strengths,
                        TestsField::Goals,
                        TestsField::Means,
                    ]
                    .into_iter()
                    .map(FieldPath::TestsSummary),
                );
                fields
            }
            Section::Collaboration => vec![FieldPath::Collaboration],
            Section::Activities => vec![FieldPath::ActivityPreferences],
            Section::Reviews => [
                ReviewField::Semester1,
                ReviewField::Semester2,
                ReviewField::Semester3,
                ReviewField::Semester4,
                ReviewField::Final,
            ]
            .into_iter()
            .map(FieldPath::SemesterReviews)
            .collect(),
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Section {
    type Err = CarnetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Section::ALL
            .into_iter()
            .find(|section| section.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CarnetError::UnknownSection {
                name: s.to_string(),
            })
    }
}

/// Expanded/collapsed flag per section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibilityState {
    expanded: BTreeMap<Section, bool>,
}

impl Default for VisibilityState {
    fn default() -> Self {
        Self {
            expanded: Section::ALL
                .into_iter()
                .map(|s| (s, s.expanded_by_default()))
                .collect(),
        }
    }
}

impl VisibilityState {
    /// Flip one section and return its new state.
    pub fn toggle(&mut self, section: Section) -> bool {
        let flag = self
            .expanded
            .entry(section)
            .or_insert_with(|| section.expanded_by_default());
        *flag = !*flag;
        *flag
    }

    pub fn is_expanded(&self, section: Section) -> bool {
        self.expanded.get(&section).copied().unwrap_or(false)
    }

    pub fn expand_all(&mut self) {
        for flag in self.expanded.values_mut() {
            *flag = true;
        }
    }

    pub fn collapse_all(&mut self) {
        for flag in self.expanded.values_mut() {
            *flag = false;
        }
    }

    /// Sections currently expanded, in display order.
    pub fn expanded_sections(&self) -> Vec<Section> {
        Section::ALL
            .into_iter()
            .filter(|s| self.is_expanded(*s))
            .collect()
    }
}
