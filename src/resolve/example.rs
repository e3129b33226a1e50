//! Built-in example record shown when nothing has been stored yet.

use crate::models::{ApplicationStatus, Document, FormValues, RecordSource, ResolvedRecord};
use crate::store::EmployeeNo;

pub const EXAMPLE_NAME: &str = "John Doe";
pub const EXAMPLE_EMPLOYEE_NO: &str = "EMP001";

/// The example fixture, carrying the requested employee number when given.
pub fn example_record(employee_no: Option<&EmployeeNo>) -> ResolvedRecord {
    let employee_no = employee_no
        .map(|no| no.to_string())
        .unwrap_or_else(|| EXAMPLE_EMPLOYEE_NO.to_string());

    let form_data = FormValues {
        employee_name_en: Some(EXAMPLE_NAME.to_string()),
        employee_name_hi: Some("जॉन डो".to_string()),
        employee_no: Some(employee_no.clone()),
        designation_en: Some("Senior Section Engineer".to_string()),
        designation_hi: Some("वरिष्ठ अनुभाग अभियंता".to_string()),
        department: Some("Engineering".to_string()),
        unit: Some("Divisional Office".to_string()),
        mobile_number: Some("9876543210".to_string()),
        date_of_appointment: Some("2012-06-01".to_string()),
        date_of_birth: Some("1985-04-15".to_string()),
        residential_address: Some("Railway Colony, Quarter 12-B".to_string()),
        office_location: Some("DRM Office, Block A".to_string()),
        manager: Some("A. Sharma".to_string()),
        employee_type: Some("Permanent".to_string()),
        gender: Some("Male".to_string()),
        marital_status: Some("Married".to_string()),
        blood_group: Some("B+".to_string()),
        emergency_contact: Some("9123456780".to_string()),
        photo: None,
        notes: None,
        documents: vec![Document {
            name: "appointment-letter.pdf".to_string(),
            url: None,
        }],
        extra: Default::default(),
    };

    ResolvedRecord {
        source: RecordSource::ExampleFallback,
        id: employee_no,
        form_data,
        status: ApplicationStatus::Submitted,
        timestamp: None,
        employee_mismatch: false,
    }
}
