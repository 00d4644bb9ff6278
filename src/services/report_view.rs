use std::fmt;

use serde::Serialize;

use crate::services::grading::{StudentReport, MAX_MARKS};

const CHART_TITLE: &str = "Subject-wise Performance";
const CHART_Y_LABEL: &str = "Marks";
const TEXT_BAR_WIDTH: usize = 40;

/// Display model for a generated report: what the form page shows after "Generate Report".
#[derive(Debug, Serialize)]
pub(crate) struct ReportView {
    pub(crate) identity: IdentityView,
    pub(crate) summary: SummaryView,
    pub(crate) table: Vec<TableRow>,
    pub(crate) chart: BarChart,
    pub(crate) result: ResultBanner,
}

#[derive(Debug, Serialize)]
pub(crate) struct IdentityView {
    pub(crate) name: String,
    pub(crate) roll_number: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct SummaryView {
    pub(crate) total: String,
    pub(crate) percentage: String,
    pub(crate) grade: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct TableRow {
    pub(crate) subject: String,
    pub(crate) marks_obtained: u8,
}

#[derive(Debug, Serialize)]
pub(crate) struct BarChart {
    pub(crate) title: &'static str,
    pub(crate) y_label: &'static str,
    pub(crate) y_min: u8,
    pub(crate) y_max: u8,
    pub(crate) bars: Vec<Bar>,
}

#[derive(Debug, Serialize)]
pub(crate) struct Bar {
    pub(crate) label: String,
    pub(crate) value: u8,
    pub(crate) value_label: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct ResultBanner {
    pub(crate) passed: bool,
    pub(crate) message: &'static str,
}

impl ReportView {
    pub(crate) fn from_report(report: &StudentReport) -> Self {
        let table = report
            .scores
            .iter()
            .map(|score| TableRow {
                subject: score.subject_name().to_string(),
                marks_obtained: score.marks(),
            })
            .collect();

        let bars = report
            .scores
            .iter()
            .map(|score| Bar {
                label: score.subject_name().to_string(),
                value: score.marks(),
                value_label: score.marks().to_string(),
            })
            .collect();

        Self {
            identity: IdentityView {
                name: report.student_name.clone(),
                roll_number: report.roll_number.clone(),
            },
            summary: SummaryView {
                total: report.total_display(),
                percentage: report.percentage_display(),
                grade: report.grade.label().to_string(),
            },
            table,
            chart: BarChart {
                title: CHART_TITLE,
                y_label: CHART_Y_LABEL,
                y_min: 0,
                y_max: MAX_MARKS,
                bars,
            },
            result: ResultBanner {
                passed: report.passed,
                message: if report.passed { "PASSED" } else { "FAILED" },
            },
        }
    }

    /// Plain-text rendering used by the `report_card` binary.
    pub(crate) fn render_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ReportView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let subject_width =
            self.table.iter().map(|row| row.subject.chars().count()).max().unwrap_or(0).max(7);

        writeln!(f, "Student Information")?;
        writeln!(f, "  Name:        {}", self.identity.name)?;
        writeln!(f, "  Roll Number: {}", self.identity.roll_number)?;
        writeln!(f)?;
        writeln!(f, "Total Marks: {}", self.summary.total)?;
        writeln!(f, "Percentage:  {}", self.summary.percentage)?;
        writeln!(f, "Grade:       {}", self.summary.grade)?;
        writeln!(f)?;
        writeln!(f, "Report Card")?;
        writeln!(f, "  {:<subject_width$}  Marks Obtained", "Subject")?;
        for row in &self.table {
            writeln!(f, "  {:<subject_width$}  {}", row.subject, row.marks_obtained)?;
        }
        writeln!(f)?;
        writeln!(f, "{}", self.chart.title)?;
        for bar in &self.chart.bars {
            let filled = usize::from(bar.value) * TEXT_BAR_WIDTH / usize::from(self.chart.y_max);
            writeln!(
                f,
                "  {:<subject_width$} |{} {}",
                bar.label,
                "#".repeat(filled),
                bar.value_label
            )?;
        }
        writeln!(f)?;
        write!(f, "Result: {}", self.result.message)
    }
}
