use crate::api::errors::ApiError;
use crate::services::grading::check_subject_count;

/// Applies the configured subject limit, which may be tighter than the evaluator's own.
pub(crate) fn validate_subject_count(count: usize, max_subjects: usize) -> Result<(), ApiError> {
    check_subject_count(count, max_subjects).map_err(ApiError::from)
}
