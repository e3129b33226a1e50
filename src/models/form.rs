//! Application form payload edited by the user.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A reference to an uploaded supporting document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// The mutable, user-edited ID-card application payload.
///
/// Every field is optional; a completely empty form is valid. Keys the form
/// does not know about are kept in `extra` and written back unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormValues {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_name_en: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_name_hi: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_no: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub designation_en: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub designation_hi: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_appointment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub residential_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub office_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manager: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marital_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blood_group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emergency_contact: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub documents: Vec<Document>,
    /// Forward-compatible custom fields
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl FormValues {
    /// The employee number, if one is present and not blank.
    pub fn employee_no(&self) -> Option<&str> {
        non_blank(self.employee_no.as_deref())
    }

    /// The English employee name, if present and not blank.
    pub fn display_name(&self) -> Option<&str> {
        non_blank(self.employee_name_en.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
