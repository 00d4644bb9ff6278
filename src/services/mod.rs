pub(crate) mod grading;
pub(crate) mod report_view;
