use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::services::grading::{ReportInput, StudentReport, SubjectEntry, SubjectScore};
use crate::services::report_view::ReportView;

#[derive(Debug, Serialize, Deserialize, Validate)]
pub(crate) struct SubjectMarksRequest {
    #[serde(default)]
    #[validate(length(max = 120, message = "subject name must be at most 120 characters"))]
    pub(crate) name: Option<String>,
    #[validate(range(min = 0, max = 100, message = "marks must be in range 0..100"))]
    pub(crate) marks: i64,
}

#[derive(Debug, Deserialize, Validate)]
pub(crate) struct ReportRequest {
    #[serde(default)]
    #[serde(alias = "studentName")]
    pub(crate) student_name: String,
    #[serde(default)]
    #[serde(alias = "rollNumber")]
    pub(crate) roll_number: String,
    // Bounds mirror grading::MAX_SUBJECTS.
    #[validate(length(min = 1, max = 10, message = "subjects must contain 1..10 items"), nested)]
    pub(crate) subjects: Vec<SubjectMarksRequest>,
}

impl ReportRequest {
    pub(crate) fn into_input(self) -> ReportInput {
        ReportInput {
            student_name: self.student_name,
            roll_number: self.roll_number,
            subjects: self
                .subjects
                .into_iter()
                .map(|subject| SubjectEntry { name: subject.name, marks: subject.marks })
                .collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct TemplateQuery {
    #[serde(default)]
    #[serde(alias = "subjectCount")]
    pub(crate) subject_count: Option<usize>,
}

#[derive(Debug, Serialize)]
pub(crate) struct TemplateSubjectResponse {
    pub(crate) name: String,
    pub(crate) marks: u8,
}

#[derive(Debug, Serialize)]
pub(crate) struct TemplateResponse {
    pub(crate) subject_count: usize,
    pub(crate) max_subjects: usize,
    pub(crate) subjects: Vec<TemplateSubjectResponse>,
}

impl TemplateResponse {
    pub(crate) fn from_scores(scores: Vec<SubjectScore>, max_subjects: usize) -> Self {
        Self {
            subject_count: scores.len(),
            max_subjects,
            subjects: scores
                .iter()
                .map(|score| TemplateSubjectResponse {
                    name: score.subject_name().to_string(),
                    marks: score.marks(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct ReportResponse {
    pub(crate) generated_at: String,
    pub(crate) report: StudentReport,
    pub(crate) view: ReportView,
}
