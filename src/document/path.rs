//! Addressing scalar fields of the logbook.
//!
//! A [`FieldPath`] names exactly one `String` in a [`LogbookDocument`]
//! outside the session list. Its textual form is the dotted JSON key path
//! (`nom`, `sante.sommeil`, `bilans.final`), which is what the command line
//! accepts.

use std::fmt;
use std::str::FromStr;

use crate::error::CarnetError;

use super::LogbookDocument;

/// Fields of [`super::HealthHabits`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HealthField {
    Diet,
    Sleep,
    PhysicalActivity,
    StressManagement,
}

/// Fields of [`super::PracticeRelationship`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PracticeField {
    Interest,
    Frequency,
    FavoriteSports,
    ClubExperience,
}

/// Fields of [`super::TestsSummary`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TestsField {
    Weaknesses,
    Strengths,
    Goals,
    Means,
}

/// Fields of [`super::SemesterReviews`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReviewField {
    Semester1,
    Semester2,
    Semester3,
    Semester4,
    Final,
}

/// Path to one scalar field of the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldPath {
    LastName,
    FirstName,
    ClassName,
    Health(HealthField),
    MinimumPractice,
    PracticeRelationship(PracticeField),
    Issues,
    TestsSummary(TestsField),
    Collaboration,
    ActivityPreferences,
    SemesterReviews(ReviewField),
}

impl FieldPath {
    /// Every scalar field, in form order.
    pub const ALL: [FieldPath; 24] = [
        Self::LastName,
        Self::FirstName,
        Self::ClassName,
        Self::Health(HealthField::Diet),
        Self::Health(HealthField::Sleep),
        Self::Health(HealthField::PhysicalActivity),
        Self::Health(HealthField::StressManagement),
        Self::MinimumPractice,
        Self::PracticeRelationship(PracticeField::Interest),
        Self::PracticeRelationship(PracticeField::Frequency),
        Self::PracticeRelationship(PracticeField::FavoriteSports),
        Self::PracticeRelationship(PracticeField::ClubExperience),
        Self::Issues,
        Self::TestsSummary(TestsField::Weaknesses),
        Self::TestsSummary(TestsField::Strengths),
        Self::TestsSummary(TestsField::Goals),
        Self::TestsSummary(TestsField::Means),
        Self::Collaboration,
        Self::ActivityPreferences,
        Self::SemesterReviews(ReviewField::Semester1),
        Self::SemesterReviews(ReviewField::Semester2),
        Self::SemesterReviews(ReviewField::Semester3),
        Self::SemesterReviews(ReviewField::Semester4),
        Self::SemesterReviews(ReviewField::Final),
    ];

    /// Dotted JSON key path.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LastName => "nom",
            Self::FirstName => "prenom",
            Self::ClassName => "classe",
            Self::Health(f) => match f {
                HealthField::Diet => "sante.alimentation",
                HealthField::Sleep => "sante.sommeil",
                HealthField::PhysicalActivity => "sante.activitePhysique",
                HealthField::StressManagement => "sante.stress",
            },
            Self::MinimumPractice => "minimumPratique",
            Self::PracticeRelationship(f) => match f {
                PracticeField::Interest => "rapportPratique.interet",
                PracticeField::Frequency => "rapportPratique.quantite",
                PracticeField::FavoriteSports => "rapportPratique.sports",
                PracticeField::ClubExperience => "rapportPratique.club",
            },
            Self::Issues => "problemes",
            Self::TestsSummary(f) => match f {
                TestsField::Weaknesses => "testsBilan.pointsFaibles",
                TestsField::Strengths => "testsBilan.pointsForts",
                TestsField::Goals => "testsBilan.objectifs",
                TestsField::Means => "testsBilan.moyens",
            },
            Self::Collaboration => "collaboration",
            Self::ActivityPreferences => "preferencesApsa",
            Self::SemesterReviews(f) => match f {
                ReviewField::Semester1 => "bilans.s1",
                ReviewField::Semester2 => "bilans.s2",
                ReviewField::Semester3 => "bilans.s3",
                ReviewField::Semester4 => "bilans.s4",
                ReviewField::Final => "bilans.final",
            },
        }
    }

    /// Form label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::LastName => "Nom",
            Self::FirstName => "Prénom",
            Self::ClassName => "Classe",
            Self::Health(f) => match f {
                HealthField::Diet => "Alimentation",
                HealthField::Sleep => "Sommeil",
                HealthField::PhysicalActivity => "Activité physique",
                HealthField::StressManagement => "Gestion du stress",
            },
            Self::MinimumPractice => "Minimum de pratique",
            Self::PracticeRelationship(f) => match f {
                PracticeField::Interest => "Intérêt pour la pratique",
                PracticeField::Frequency => "Quantité de pratique",
                PracticeField::FavoriteSports => "Sports préférés",
                PracticeField::ClubExperience => "Expérience en club",
            },
            Self::Issues => "Problèmes (blessures, santé)",
            Self::TestsSummary(f) => match f {
                TestsField::Weaknesses => "Points faibles",
                TestsField::Strengths => "Points forts",
                TestsField::Goals => "Objectifs",
                TestsField::Means => "Moyens",
            },
            Self::Collaboration => "Collaboration",
            Self::ActivityPreferences => "Préférences d'APSA",
            Self::SemesterReviews(f) => match f {
                ReviewField::Semester1 => "Bilan semestre 1",
                ReviewField::Semester2 => "Bilan semestre 2",
                ReviewField::Semester3 => "Bilan semestre 3",
                ReviewField::Semester4 => "Bilan semestre 4",
                ReviewField::Final => "Bilan final",
            },
        }
    }

    /// Read the field.
    pub fn get<'a>(&self, doc: &'a LogbookDocument) -> &'a str {
        match self {
            Self::LastName => &doc.last_name,
            Self::FirstName => &doc.first_name,
            Self::ClassName => &doc.class_name,
            Self::Health(f) => match f {
                HealthField::Diet => &doc.health.diet,
                HealthField::Sleep => &doc.health.sleep,
                HealthField::PhysicalActivity => &doc.health.physical_activity,
                HealthField::StressManagement => &doc.health.stress_management,
            },
            Self::MinimumPractice => &doc.minimum_practice,
            Self::PracticeRelationship(f) => match f {
                PracticeField::Interest => &doc.practice_relationship.interest,
                PracticeField::Frequency => &doc.practice_relationship.frequency,
                PracticeField::FavoriteSports => &doc.practice_relationship.favorite_sports,
                PracticeField::ClubExperience => &doc.practice_relationship.club_experience,
            },
            Self::Issues => &doc.issues,
            Self::TestsSummary(f) => match f {
                TestsField::Weaknesses => &doc.tests_summary.weaknesses,
                TestsField::Strengths => &doc.tests_summary.strengths,
                TestsField::Goals => &doc.tests_summary.goals,
                TestsField::Means => &doc.tests_summary.means,
            },
            Self::Collaboration => &doc.collaboration,
            Self::ActivityPreferences => &doc.activity_preferences,
            Self::SemesterReviews(f) => match f {
                ReviewField::Semester1 => &doc.semester_reviews.semester1,
                ReviewField::Semester2 => &doc.semester_reviews.semester2,
                ReviewField::Semester3 => &doc.semester_reviews.semester3,
                ReviewField::Semester4 => &doc.semester_reviews.semester4,
                ReviewField::Final => &doc.semester_reviews.final_review,
            },
        }
    }

    /// Mutable access to the field.
    pub fn slot<'a>(&self, doc: &'a mut LogbookDocument) -> &'a mut String {
        match self {
            Self::LastName => &mut doc.last_name,
            Self::FirstName => &mut doc.first_name,
            Self::ClassName => &mut doc.class_name,
            Self::Health(f) => match f {
                HealthField::Diet => &mut doc.health.diet,
                HealthField::Sleep => &mut doc.health.sleep,
                HealthField::PhysicalActivity => &mut doc.health.physical_activity,
                HealthField::StressManagement => &mut doc.health.stress_management,
            },
            Self::MinimumPractice => &mut doc.minimum_practice,
            Self::PracticeRelationship(f) => match f {
                PracticeField::Interest => &mut doc.practice_relationship.interest,
                PracticeField::Frequency => &mut doc.practice_relationship.frequency,
                PracticeField::FavoriteSports => &mut doc.practice_relationship.favorite_sports,
                PracticeField::ClubExperience => &mut doc.practice_relationship.club_experience,
            },
            Self::Issues => &mut doc.issues,
            Self::TestsSummary(f) => match f {
                TestsField::Weaknesses => &mut doc.tests_summary.weaknesses,
                TestsField::Strengths => &mut doc.tests_summary.strengths,
                TestsField::Goals => &mut doc.tests_summary.goals,
                TestsField::Means => &mut doc.tests_summary.means,
            },
            Self::Collaboration => &mut doc.collaboration,
            Self::ActivityPreferences => &mut doc.activity_preferences,
            Self::SemesterReviews(f) => match f {
                ReviewField::Semester1 => &mut doc.semester_reviews.semester1,
                ReviewField::Semester2 => &mut doc.semester_reviews.semester2,
                ReviewField::Semester3 => &mut doc.semester_reviews.semester3,
                ReviewField::Semester4 => &mut doc.semester_reviews.semester4,
                ReviewField::Final => &mut doc.semester_reviews.final_review,
            },
        }
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldPath {
    type Err = CarnetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|p| p.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CarnetError::UnknownField {
                path: s.to_string(),
            })
    }
}
