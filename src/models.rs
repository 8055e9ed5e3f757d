use crate::attendance::{AttendanceRecord, Standing, Threshold};
use crate::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, de};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub id: Uuid,
    pub name: String,
    pub total_classes: u32,
    pub attended_classes: u32,
}

impl Subject {
    pub fn record(&self) -> AttendanceRecord {
        AttendanceRecord::new(self.attended_classes, self.total_classes)
    }

    pub fn percentage(&self) -> u32 {
        self.record().percentage()
    }
}

/// Everything persisted to disk.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppData {
    pub subjects: Vec<Subject>,
}

/// Subject fields as submitted by the JSON API or the dashboard form.
#[derive(Debug, Clone, Deserialize)]
pub struct SubjectInput {
    pub name: String,
    #[serde(default, deserialize_with = "blank_as_zero")]
    pub total_classes: u32,
    #[serde(default, deserialize_with = "blank_as_zero")]
    pub attended_classes: u32,
}

/// Accepts a JSON number or a form string; an empty field counts as zero.
fn blank_as_zero<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Count {
        Number(u32),
        Text(String),
    }

    match Option::<Count>::deserialize(deserializer)? {
        None => Ok(0),
        Some(Count::Number(count)) => Ok(count),
        Some(Count::Text(text)) => {
            let text = text.trim();
            if text.is_empty() {
                return Ok(0);
            }
            text.parse::<u32>()
                .map_err(|_| de::Error::custom(format!("invalid class count {text:?}")))
        }
    }
}

impl SubjectInput {
    pub fn validate(self) -> Result<ValidatedSubject, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingName);
        }
        if self.attended_classes > self.total_classes {
            return Err(ValidationError::AttendedExceedsTotal);
        }
        Ok(ValidatedSubject {
            name: name.to_string(),
            total_classes: self.total_classes,
            attended_classes: self.attended_classes,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedSubject {
    pub name: String,
    pub total_classes: u32,
    pub attended_classes: u32,
}

impl ValidatedSubject {
    pub fn into_subject(self, id: Uuid) -> Subject {
        Subject {
            id,
            name: self.name,
            total_classes: self.total_classes,
            attended_classes: self.attended_classes,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SubjectView {
    pub id: Uuid,
    pub name: String,
    pub total_classes: u32,
    pub attended_classes: u32,
    pub percentage: u32,
    pub standing: Standing,
    pub can_miss: u32,
    pub need_to_attend: u32,
}

impl SubjectView {
    pub fn new(subject: &Subject, threshold: Threshold) -> Self {
        let record = subject.record();
        let percentage = record.percentage();
        Self {
            id: subject.id,
            name: subject.name.clone(),
            total_classes: subject.total_classes,
            attended_classes: subject.attended_classes,
            percentage,
            standing: Standing::from_percentage(percentage),
            can_miss: record.missable(threshold),
            need_to_attend: record.to_recover(threshold),
        }
    }
}

/// Checks counts submitted to the quick calculator, which unlike stored
/// subjects needs at least one class.
pub fn validate_record(record: AttendanceRecord) -> Result<AttendanceRecord, ValidationError> {
    if record.attended > record.total {
        return Err(ValidationError::AttendedExceedsTotal);
    }
    if record.total == 0 {
        return Err(ValidationError::NoClassesHeld);
    }
    Ok(record)
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CalculationResponse {
    pub attended: u32,
    pub total: u32,
    pub percentage: u32,
    pub standing: Standing,
    pub meets_target: bool,
    pub can_miss: u32,
    pub need_to_attend: u32,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct CategoryCount {
    pub standing: Standing,
    pub label: &'static str,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct ReportRow {
    pub name: String,
    pub total_classes: u32,
    pub attended_classes: u32,
    pub percentage: u32,
    pub standing: Standing,
}

#[derive(Debug, Serialize)]
pub struct Report {
    pub generated_on: String,
    pub target: String,
    pub overall_percentage: u32,
    pub total_subjects: usize,
    pub below_target: usize,
    pub excellent: usize,
    pub categories: Vec<CategoryCount>,
    pub subjects: Vec<ReportRow>,
}
