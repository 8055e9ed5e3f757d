use crate::attendance::{Standing, Threshold, percentage_u64};
use crate::models::{CategoryCount, Report, ReportRow, Subject};
use chrono::{Local, NaiveDate};

pub const CSV_FILE_NAME: &str = "attendance_report.csv";

const CSV_HEADER: [&str; 4] = [
    "Subject",
    "Total Classes",
    "Attended Classes",
    "Attendance Percentage",
];

pub fn build_report(subjects: &[Subject], threshold: Threshold) -> Report {
    build_report_at(Local::now().date_naive(), subjects, threshold)
}

pub fn build_report_at(today: NaiveDate, subjects: &[Subject], threshold: Threshold) -> Report {
    let target = threshold.as_percent();
    let rows: Vec<ReportRow> = subjects
        .iter()
        .map(|subject| {
            let percentage = subject.percentage();
            ReportRow {
                name: subject.name.clone(),
                total_classes: subject.total_classes,
                attended_classes: subject.attended_classes,
                percentage,
                standing: Standing::from_percentage(percentage),
            }
        })
        .collect();

    let categories = Standing::ALL
        .into_iter()
        .map(|standing| CategoryCount {
            standing,
            label: standing.label(),
            count: rows.iter().filter(|row| row.standing == standing).count(),
        })
        .filter(|category| category.count > 0)
        .collect();

    Report {
        generated_on: today.to_string(),
        target: threshold.to_string(),
        overall_percentage: overall_percentage(subjects),
        total_subjects: rows.len(),
        below_target: rows.iter().filter(|row| row.percentage < target).count(),
        excellent: rows
            .iter()
            .filter(|row| row.standing == Standing::Excellent)
            .count(),
        categories,
        subjects: rows,
    }
}

/// Percentage over the summed counts of every subject.
pub fn overall_percentage(subjects: &[Subject]) -> u32 {
    let (attended, total) = subjects.iter().fold((0u64, 0u64), |(attended, total), subject| {
        (
            attended + u64::from(subject.attended_classes),
            total + u64::from(subject.total_classes),
        )
    });
    percentage_u64(attended, total)
}

/// Renders one row per subject followed by an `Overall` row.
pub fn export_csv(subjects: &[Subject]) -> Result<String, csv::Error> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(CSV_HEADER)?;

    for subject in subjects {
        writer.write_record([
            subject.name.clone(),
            subject.total_classes.to_string(),
            subject.attended_classes.to_string(),
            format!("{}%", subject.percentage()),
        ])?;
    }

    let overall = format!("{}%", overall_percentage(subjects));
    writer.write_record(["Overall", "", "", overall.as_str()])?;

    let bytes = writer
        .into_inner()
        .map_err(|err| csv::Error::from(err.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
