//! Preview rendering: every form field as a bilingual row.
//!
//! Absent or blank values render as an em dash.

use serde::Serialize;

use crate::i18n::{Lang, DOCUMENTS_LABEL, FIELD_LABELS};
use crate::models::{ApplicationStatus, FormValues, RecordSource, ResolvedRecord};

/// Placeholder for missing values.
pub const EMPTY_GLYPH: &str = "\u{2014}";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewRow {
    pub field: &'static str,
    pub label_en: &'static str,
    pub label_hi: &'static str,
    pub value: String,
}

/// A resolved record laid out for display.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Preview {
    pub source: RecordSource,
    pub source_description: &'static str,
    pub status: ApplicationStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    pub employee_mismatch: bool,
    pub rows: Vec<PreviewRow>,
}

impl Preview {
    pub fn value_of(&self, field: &str) -> Option<&str> {
        self.rows
            .iter()
            .find(|row| row.field == field)
            .map(|row| row.value.as_str())
    }
}

/// Lay out `record` for the preview screen.
pub fn render_preview(record: &ResolvedRecord, lang: Lang) -> Preview {
    let mut rows: Vec<PreviewRow> = FIELD_LABELS
        .iter()
        .map(|label| PreviewRow {
            field: label.field,
            label_en: label.en,
            label_hi: label.hi,
            value: display(field_value(&record.form_data, label.field)),
        })
        .collect();

    let documents = record
        .form_data
        .documents
        .iter()
        .map(|doc| doc.name.trim())
        .filter(|name| !name.is_empty())
        .collect::<Vec<_>>()
        .join(", ");
    rows.push(PreviewRow {
        field: DOCUMENTS_LABEL.field,
        label_en: DOCUMENTS_LABEL.en,
        label_hi: DOCUMENTS_LABEL.hi,
        value: display(Some(documents.as_str())),
    });

    Preview {
        source: record.source,
        source_description: describe_source(record.source, lang),
        status: record.status,
        timestamp: record.timestamp.clone(),
        employee_mismatch: record.employee_mismatch,
        rows,
    }
}

fn describe_source(source: RecordSource, lang: Lang) -> &'static str {
    match source {
        RecordSource::PerEmployee => {
            lang.pick("Your saved application", "आपका सहेजा गया आवेदन")
        }
        RecordSource::Draft => lang.pick("Your unsubmitted draft", "आपका असबमिट ड्राफ़्ट"),
        RecordSource::LastSubmitted => {
            lang.pick("Last submitted application", "अंतिम जमा किया गया आवेदन")
        }
        RecordSource::ExampleFallback => {
            lang.pick("Example application", "उदाहरण आवेदन")
        }
    }
}

fn display(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => EMPTY_GLYPH.to_string(),
    }
}

fn field_value<'a>(values: &'a FormValues, field: &str) -> Option<&'a str> {
    let value = match field {
        "employeeNameEn" => &values.employee_name_en,
        "employeeNameHi" => &values.employee_name_hi,
        "employeeNo" => &values.employee_no,
        "designationEn" => &values.designation_en,
        "designationHi" => &values.designation_hi,
        "department" => &values.department,
        "unit" => &values.unit,
        "mobileNumber" => &values.mobile_number,
        "dateOfAppointment" => &values.date_of_appointment,
        "dateOfBirth" => &values.date_of_birth,
        "residentialAddress" => &values.residential_address,
        "officeLocation" => &values.office_location,
        "manager" => &values.manager,
        "employeeType" => &values.employee_type,
        "gender" => &values.gender,
        "maritalStatus" => &values.marital_status,
        "bloodGroup" => &values.blood_group,
        "emergencyContact" => &values.emergency_contact,
        "photo" => &values.photo,
        "notes" => &values.notes,
        _ => return None,
    };
    value.as_deref()
}
