//! Inline validation run before a form may move to submitting.

use chrono::{NaiveDate, Utc};

use crate::errors::{AppError, FieldError};
use crate::i18n::{field_message, Lang, Message};
use crate::models::FormValues;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Check the form; returns every field problem, empty when valid.
pub fn validate_form(values: &FormValues, lang: Lang) -> Vec<FieldError> {
    let mut errors = Vec::new();

    for (field, value) in [
        ("employeeNameEn", &values.employee_name_en),
        ("designationEn", &values.designation_en),
        ("department", &values.department),
    ] {
        if is_blank(value) {
            errors.push(error(field, Message::Required, lang));
        }
    }

    match present(&values.mobile_number) {
        None => errors.push(error("mobileNumber", Message::Required, lang)),
        Some(mobile) if !is_mobile(mobile) => {
            errors.push(error("mobileNumber", Message::InvalidMobile, lang))
        }
        Some(_) => {}
    }

    if let Some(contact) = present(&values.emergency_contact) {
        if !is_mobile(contact) {
            errors.push(error("emergencyContact", Message::InvalidMobile, lang));
        }
    }

    let today = Utc::now().date_naive();
    let birth = match present(&values.date_of_birth) {
        None => {
            errors.push(error("dateOfBirth", Message::Required, lang));
            None
        }
        Some(raw) => check_date("dateOfBirth", raw, today, lang, &mut errors),
    };

    if let Some(raw) = present(&values.date_of_appointment) {
        let appointed = check_date("dateOfAppointment", raw, today, lang, &mut errors);
        if let (Some(birth), Some(appointed)) = (birth, appointed) {
            if appointed < birth {
                errors.push(error(
                    "dateOfAppointment",
                    Message::AppointmentBeforeBirth,
                    lang,
                ));
            }
        }
    }

    errors
}

/// Validation as an `AppError`, ready to block the submit transition.
pub fn ensure_valid(values: &FormValues, lang: Lang) -> Result<(), AppError> {
    let fields = validate_form(values, lang);
    if fields.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation {
            message: Message::FixHighlightedFields.text(lang).to_string(),
            fields,
        })
    }
}

fn check_date(
    field: &str,
    raw: &str,
    today: NaiveDate,
    lang: Lang,
    errors: &mut Vec<FieldError>,
) -> Option<NaiveDate> {
    match NaiveDate::parse_from_str(raw, DATE_FORMAT) {
        Ok(date) if date > today => {
            errors.push(error(field, Message::DateInFuture, lang));
            None
        }
        Ok(date) => Some(date),
        Err(_) => {
            errors.push(error(field, Message::InvalidDate, lang));
            None
        }
    }
}

fn error(field: &str, message: Message, lang: Lang) -> FieldError {
    FieldError::new(field, field_message(field, message, lang))
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn is_blank(value: &Option<String>) -> bool {
    present(value).is_none()
}

fn is_mobile(value: &str) -> bool {
    value.len() == 10 && value.chars().all(|c| c.is_ascii_digit())
}
