//! Report evaluation: totals, percentage, grade and pass/fail for one set of subject marks.

use std::collections::HashMap;

use serde::Serialize;
use thiserror::Error;

pub(crate) const MAX_SUBJECTS: usize = 10;
pub(crate) const MAX_MARKS: u8 = 100;
pub(crate) const PASS_PERCENTAGE: f64 = 50.0;

const DEFAULT_SUBJECT_NAMES: [&str; 5] =
    ["Mathematics", "Data Science", "English", "Python Programming", "Artificial Intelligence"];
const DEFAULT_MARKS: u8 = 75;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum ValidationError {
    #[error("at least one subject is required")]
    NoSubjects,
    #[error("{count} subjects given, at most {max} are allowed")]
    TooManySubjects { count: usize, max: usize },
    #[error("marks for '{subject}' must be between 0 and 100, got {marks}")]
    MarksOutOfRange { subject: String, marks: i64 },
    #[error("subject name must not be blank")]
    BlankSubjectName,
    #[error("subject '{subject}' appears more than once")]
    DuplicateSubject { subject: String },
    #[error("subject '{subject}' clashes with the default name given to unnamed subject {position}")]
    DefaultNameClash { subject: String, position: usize },
}

/// Letter grade buckets, highest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub(crate) enum Grade {
    #[serde(rename = "O (Outstanding)")]
    Outstanding,
    #[serde(rename = "A+ (Excellent)")]
    Excellent,
    #[serde(rename = "A (Very Good)")]
    VeryGood,
    #[serde(rename = "B (Good)")]
    Good,
    #[serde(rename = "C (Pass)")]
    Pass,
    #[serde(rename = "F (Fail)")]
    Fail,
}

impl Grade {
    const THRESHOLDS: [(f64, Grade); 5] = [
        (90.0, Grade::Outstanding),
        (80.0, Grade::Excellent),
        (70.0, Grade::VeryGood),
        (60.0, Grade::Good),
        (PASS_PERCENTAGE, Grade::Pass),
    ];

    /// Lower bounds are inclusive: exactly 90.0 is `Outstanding`, 89.99 is `Excellent`.
    pub(crate) fn from_percentage(percentage: f64) -> Self {
        Self::THRESHOLDS
            .iter()
            .find(|(lower, _)| percentage >= *lower)
            .map(|(_, grade)| *grade)
            .unwrap_or(Grade::Fail)
    }

    pub(crate) fn label(self) -> &'static str {
        match self {
            Self::Outstanding => "O (Outstanding)",
            Self::Excellent => "A+ (Excellent)",
            Self::VeryGood => "A (Very Good)",
            Self::Good => "B (Good)",
            Self::Pass => "C (Pass)",
            Self::Fail => "F (Fail)",
        }
    }

    pub(crate) fn letter(self) -> &'static str {
        match self {
            Self::Outstanding => "O",
            Self::Excellent => "A+",
            Self::VeryGood => "A",
            Self::Good => "B",
            Self::Pass => "C",
            Self::Fail => "F",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct SubjectScore {
    subject_name: String,
    marks: u8,
}

impl SubjectScore {
    pub(crate) fn new(
        subject_name: impl Into<String>,
        marks: i64,
    ) -> Result<Self, ValidationError> {
        let subject_name = subject_name.into().trim().to_string();
        if subject_name.is_empty() {
            return Err(ValidationError::BlankSubjectName);
        }

        let Some(marks) = u8::try_from(marks).ok().filter(|value| *value <= MAX_MARKS) else {
            return Err(ValidationError::MarksOutOfRange { subject: subject_name, marks });
        };

        Ok(Self { subject_name, marks })
    }

    pub(crate) fn subject_name(&self) -> &str {
        &self.subject_name
    }

    pub(crate) fn marks(&self) -> u8 {
        self.marks
    }
}

/// One subject as submitted; a missing or blank name takes the positional default.
#[derive(Debug, Clone)]
pub(crate) struct SubjectEntry {
    pub(crate) name: Option<String>,
    pub(crate) marks: i64,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct ReportInput {
    pub(crate) student_name: String,
    pub(crate) roll_number: String,
    pub(crate) subjects: Vec<SubjectEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct StudentReport {
    pub(crate) student_name: String,
    pub(crate) roll_number: String,
    pub(crate) scores: Vec<SubjectScore>,
    pub(crate) total_obtained: u32,
    pub(crate) max_possible: u32,
    pub(crate) percentage: f64,
    pub(crate) grade: Grade,
    pub(crate) passed: bool,
}

impl StudentReport {
    pub(crate) fn percentage_display(&self) -> String {
        format!("{:.2}%", self.percentage)
    }

    pub(crate) fn total_display(&self) -> String {
        format!("{}/{}", self.total_obtained, self.max_possible)
    }
}

pub(crate) fn default_subject_name(position: usize) -> String {
    DEFAULT_SUBJECT_NAMES
        .get(position)
        .map(|name| name.to_string())
        .unwrap_or_else(|| format!("Subject {}", position + 1))
}

pub(crate) fn default_marks(position: usize) -> u8 {
    if position < DEFAULT_SUBJECT_NAMES.len() {
        DEFAULT_MARKS
    } else {
        0
    }
}

pub(crate) fn check_subject_count(count: usize, max: usize) -> Result<(), ValidationError> {
    if count == 0 {
        return Err(ValidationError::NoSubjects);
    }
    if count > max {
        return Err(ValidationError::TooManySubjects { count, max });
    }
    Ok(())
}

/// Pre-filled form rows for `count` subjects.
pub(crate) fn subject_template(count: usize) -> Result<Vec<SubjectScore>, ValidationError> {
    check_subject_count(count, MAX_SUBJECTS)?;

    (0..count)
        .map(|position| {
            SubjectScore::new(default_subject_name(position), i64::from(default_marks(position)))
        })
        .collect()
}

/// Validates the submitted subjects and derives the full report.
///
/// Subject names are matched case-insensitively after trimming; a repeated name is rejected
/// instead of silently replacing the earlier row.
pub(crate) fn compute_report(input: ReportInput) -> Result<StudentReport, ValidationError> {
    check_subject_count(input.subjects.len(), MAX_SUBJECTS)?;

    // lowercase name -> position of the unnamed entry it was defaulted for
    let mut seen: HashMap<String, Option<usize>> = HashMap::with_capacity(input.subjects.len());
    let mut scores = Vec::with_capacity(input.subjects.len());
    for (position, entry) in input.subjects.into_iter().enumerate() {
        let (name, defaulted) = match entry.name.filter(|name| !name.trim().is_empty()) {
            Some(name) => (name, None),
            None => (default_subject_name(position), Some(position + 1)),
        };
        let score = SubjectScore::new(name, entry.marks)?;

        if let Some(earlier) = seen.insert(score.subject_name.to_lowercase(), defaulted) {
            return Err(match earlier.or(defaulted) {
                Some(unnamed) => ValidationError::DefaultNameClash {
                    subject: score.subject_name,
                    position: unnamed,
                },
                None => ValidationError::DuplicateSubject { subject: score.subject_name },
            });
        }
        scores.push(score);
    }

    Ok(evaluate(input.student_name, input.roll_number, scores))
}

fn evaluate(
    student_name: String,
    roll_number: String,
    scores: Vec<SubjectScore>,
) -> StudentReport {
    let total_obtained: u32 = scores.iter().map(|score| u32::from(score.marks)).sum();
    let max_possible = u32::from(MAX_MARKS) * scores.len() as u32;
    let percentage = 100.0 * f64::from(total_obtained) / f64::from(max_possible);
    let grade = Grade::from_percentage(percentage);

    StudentReport {
        student_name,
        roll_number,
        scores,
        total_obtained,
        max_possible,
        percentage,
        grade,
        passed: percentage >= PASS_PERCENTAGE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, marks: i64) -> SubjectEntry {
        SubjectEntry { name: Some(name.to_string()), marks }
    }

    fn input(subjects: Vec<SubjectEntry>) -> ReportInput {
        ReportInput {
            student_name: "Asha Verma".to_string(),
            roll_number: "CS-042".to_string(),
            subjects,
        }
    }

    fn uniform(count: usize, marks: i64) -> ReportInput {
        input((0..count).map(|_| SubjectEntry { name: None, marks }).collect())
    }

    fn scenario() -> Vec<SubjectEntry> {
        vec![
            entry("Mathematics", 75),
            entry("Data Science", 80),
            entry("English", 65),
            entry("Python", 90),
            entry("AI", 85),
        ]
    }

    #[test]
    fn five_subject_scenario() {
        let report = compute_report(input(scenario())).expect("report");
        assert_eq!(report.total_obtained, 395);
        assert_eq!(report.max_possible, 500);
        assert_eq!(report.percentage, 79.0);
        assert_eq!(report.percentage_display(), "79.00%");
        assert_eq!(report.total_display(), "395/500");
        assert_eq!(report.grade, Grade::VeryGood);
        assert_eq!(report.grade.label(), "A (Very Good)");
        assert!(report.passed);
        assert_eq!(report.student_name, "Asha Verma");
        assert_eq!(report.roll_number, "CS-042");
    }

    #[test]
    fn single_failing_subject() {
        let report = compute_report(input(vec![entry("Physics", 40)])).expect("report");
        assert_eq!(report.total_obtained, 40);
        assert_eq!(report.max_possible, 100);
        assert_eq!(report.percentage_display(), "40.00%");
        assert_eq!(report.grade, Grade::Fail);
        assert!(!report.passed);
    }

    #[test]
    fn uniform_marks_give_same_percentage() {
        for count in 1..=MAX_SUBJECTS {
            for marks in [0, 1, 33, 49, 50, 67, 89, 90, 99, 100] {
                let report = compute_report(uniform(count, marks)).expect("report");
                assert_eq!(report.percentage, marks as f64, "count={count} marks={marks}");
                assert_eq!(report.max_possible, 100 * count as u32);
                assert_eq!(report.total_obtained, marks as u32 * count as u32);
            }
        }
    }

    #[test]
    fn all_zero_fails() {
        let report = compute_report(uniform(5, 0)).expect("report");
        assert_eq!(report.percentage, 0.0);
        assert_eq!(report.grade.label(), "F (Fail)");
        assert!(!report.passed);
    }

    #[test]
    fn all_full_marks_is_outstanding() {
        let report = compute_report(uniform(7, 100)).expect("report");
        assert_eq!(report.percentage, 100.0);
        assert_eq!(report.grade.label(), "O (Outstanding)");
        assert!(report.passed);
    }

    #[test]
    fn grade_boundaries() {
        assert_eq!(Grade::from_percentage(100.0), Grade::Outstanding);
        assert_eq!(Grade::from_percentage(90.0), Grade::Outstanding);
        assert_eq!(Grade::from_percentage(89.99), Grade::Excellent);
        assert_eq!(Grade::from_percentage(80.0), Grade::Excellent);
        assert_eq!(Grade::from_percentage(79.99), Grade::VeryGood);
        assert_eq!(Grade::from_percentage(70.0), Grade::VeryGood);
        assert_eq!(Grade::from_percentage(69.99), Grade::Good);
        assert_eq!(Grade::from_percentage(60.0), Grade::Good);
        assert_eq!(Grade::from_percentage(59.99), Grade::Pass);
        assert_eq!(Grade::from_percentage(50.0), Grade::Pass);
        assert_eq!(Grade::from_percentage(49.99), Grade::Fail);
        assert_eq!(Grade::from_percentage(0.0), Grade::Fail);
    }

    #[test]
    fn pass_boundary_follows_percentage() {
        let exactly_half = compute_report(input(vec![entry("Art", 50)])).expect("report");
        assert_eq!(exactly_half.grade, Grade::Pass);
        assert!(exactly_half.passed);

        let just_below = compute_report(input(vec![entry("Art", 49), entry("Music", 50)]))
            .expect("report");
        assert_eq!(just_below.percentage, 49.5);
        assert_eq!(just_below.grade, Grade::Fail);
        assert!(!just_below.passed);
    }

    #[test]
    fn reordering_keeps_totals_and_changes_display_order() {
        let forward = compute_report(input(scenario())).expect("forward");
        let mut reversed_entries = scenario();
        reversed_entries.reverse();
        let reversed = compute_report(input(reversed_entries)).expect("reversed");

        assert_eq!(forward.total_obtained, reversed.total_obtained);
        assert_eq!(forward.percentage, reversed.percentage);
        assert_eq!(forward.grade, reversed.grade);
        assert_eq!(forward.scores.first().map(SubjectScore::subject_name), Some("Mathematics"));
        assert_eq!(reversed.scores.first().map(SubjectScore::subject_name), Some("AI"));
    }

    #[test]
    fn same_input_same_report() {
        let first = compute_report(input(scenario())).expect("first");
        let second = compute_report(input(scenario())).expect("second");
        assert_eq!(first, second);
    }

    #[test]
    fn missing_names_take_positional_defaults() {
        let report = compute_report(uniform(7, 60)).expect("report");
        let names: Vec<&str> = report.scores.iter().map(SubjectScore::subject_name).collect();
        assert_eq!(
            names,
            vec![
                "Mathematics",
                "Data Science",
                "English",
                "Python Programming",
                "Artificial Intelligence",
                "Subject 6",
                "Subject 7",
            ]
        );
    }

    #[test]
    fn blank_name_is_defaulted_and_trimmed_name_kept() {
        let report =
            compute_report(input(vec![entry("   ", 70), entry("  Chemistry ", 80)])).expect("report");
        assert_eq!(report.scores[0].subject_name(), "Mathematics");
        assert_eq!(report.scores[1].subject_name(), "Chemistry");
    }

    #[test]
    fn empty_subjects_rejected() {
        assert_eq!(compute_report(input(Vec::new())).unwrap_err(), ValidationError::NoSubjects);
    }

    #[test]
    fn more_than_ten_subjects_rejected() {
        let err = compute_report(uniform(11, 50)).unwrap_err();
        assert_eq!(err, ValidationError::TooManySubjects { count: 11, max: MAX_SUBJECTS });
    }

    #[test]
    fn marks_outside_range_rejected() {
        let err = compute_report(input(vec![entry("Mathematics", 101)])).unwrap_err();
        assert_eq!(
            err,
            ValidationError::MarksOutOfRange { subject: "Mathematics".to_string(), marks: 101 }
        );

        let err = compute_report(input(vec![entry("English", -1)])).unwrap_err();
        assert_eq!(err.to_string(), "marks for 'English' must be between 0 and 100, got -1");
    }

    #[test]
    fn duplicate_subjects_rejected_case_insensitively() {
        let err = compute_report(input(vec![entry("Mathematics", 70), entry(" mathematics", 90)]))
            .unwrap_err();
        assert_eq!(err, ValidationError::DuplicateSubject { subject: "mathematics".to_string() });
    }

    #[test]
    fn typed_name_clashing_with_default_names_the_unnamed_entry() {
        let unnamed = SubjectEntry { name: None, marks: 50 };
        let err = compute_report(input(vec![unnamed, entry("Mathematics", 60)])).unwrap_err();
        assert_eq!(
            err,
            ValidationError::DefaultNameClash { subject: "Mathematics".to_string(), position: 1 }
        );
        assert_eq!(
            err.to_string(),
            "subject 'Mathematics' clashes with the default name given to unnamed subject 1"
        );

        let unnamed = SubjectEntry { name: Some("  ".to_string()), marks: 50 };
        let err = compute_report(input(vec![entry("English", 60), entry("x", 1), unnamed]))
            .unwrap_err();
        assert_eq!(
            err,
            ValidationError::DefaultNameClash { subject: "English".to_string(), position: 3 }
        );
    }

    #[test]
    fn subject_score_rejects_blank_name() {
        assert_eq!(SubjectScore::new(" ", 10).unwrap_err(), ValidationError::BlankSubjectName);
    }

    #[test]
    fn template_matches_form_defaults() {
        let template = subject_template(6).expect("template");
        assert_eq!(template.len(), 6);
        assert_eq!(template[0].subject_name(), "Mathematics");
        assert_eq!(template[0].marks(), 75);
        assert_eq!(template[4].subject_name(), "Artificial Intelligence");
        assert_eq!(template[4].marks(), 75);
        assert_eq!(template[5].subject_name(), "Subject 6");
        assert_eq!(template[5].marks(), 0);
    }

    #[test]
    fn template_count_is_bounded() {
        assert_eq!(subject_template(0).unwrap_err(), ValidationError::NoSubjects);
        assert!(matches!(
            subject_template(11).unwrap_err(),
            ValidationError::TooManySubjects { count: 11, .. }
        ));
    }

    #[test]
    fn grade_serializes_as_label() {
        let json = serde_json::to_value(Grade::Excellent).expect("serialize");
        assert_eq!(json, serde_json::json!("A+ (Excellent)"));
    }
}
