//! English/Hindi message catalogue for user-visible text.

use serde::{Deserialize, Serialize};

/// Display language requested by the portal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    En,
    Hi,
}

impl Lang {
    /// Unknown or missing codes fall back to English.
    pub fn from_code(code: Option<&str>) -> Self {
        match code.map(|c| c.trim().to_ascii_lowercase()) {
            Some(c) if c == "hi" || c == "hi-in" => Lang::Hi,
            _ => Lang::En,
        }
    }

    pub fn pick(self, en: &'static str, hi: &'static str) -> &'static str {
        match self {
            Lang::En => en,
            Lang::Hi => hi,
        }
    }
}

/// Form field with its wire name and bilingual label.
#[derive(Debug, Clone, Copy)]
pub struct FieldLabel {
    pub field: &'static str,
    pub en: &'static str,
    pub hi: &'static str,
}

impl FieldLabel {
    pub fn text(&self, lang: Lang) -> &'static str {
        lang.pick(self.en, self.hi)
    }
}

/// Labels in the order the preview shows them.
pub const FIELD_LABELS: &[FieldLabel] = &[
    FieldLabel { field: "employeeNameEn", en: "Employee Name (English)", hi: "कर्मचारी का नाम (अंग्रेज़ी)" },
    FieldLabel { field: "employeeNameHi", en: "Employee Name (Hindi)", hi: "कर्मचारी का नाम (हिंदी)" },
    FieldLabel { field: "employeeNo", en: "Employee Number", hi: "कर्मचारी संख्या" },
    FieldLabel { field: "designationEn", en: "Designation (English)", hi: "पदनाम (अंग्रेज़ी)" },
    FieldLabel { field: "designationHi", en: "Designation (Hindi)", hi: "पदनाम (हिंदी)" },
    FieldLabel { field: "department", en: "Department", hi: "विभाग" },
    FieldLabel { field: "unit", en: "Unit", hi: "इकाई" },
    FieldLabel { field: "mobileNumber", en: "Mobile Number", hi: "मोबाइल नंबर" },
    FieldLabel { field: "dateOfAppointment", en: "Date of Appointment", hi: "नियुक्ति की तिथि" },
    FieldLabel { field: "dateOfBirth", en: "Date of Birth", hi: "जन्म तिथि" },
    FieldLabel { field: "residentialAddress", en: "Residential Address", hi: "आवासीय पता" },
    FieldLabel { field: "officeLocation", en: "Office Location", hi: "कार्यालय स्थान" },
    FieldLabel { field: "manager", en: "Reporting Officer", hi: "रिपोर्टिंग अधिकारी" },
    FieldLabel { field: "employeeType", en: "Employee Type", hi: "कर्मचारी प्रकार" },
    FieldLabel { field: "gender", en: "Gender", hi: "लिंग" },
    FieldLabel { field: "maritalStatus", en: "Marital Status", hi: "वैवाहिक स्थिति" },
    FieldLabel { field: "bloodGroup", en: "Blood Group", hi: "रक्त समूह" },
    FieldLabel { field: "emergencyContact", en: "Emergency Contact", hi: "आपातकालीन संपर्क" },
    FieldLabel { field: "photo", en: "Photograph", hi: "फ़ोटो" },
    FieldLabel { field: "notes", en: "Remarks", hi: "टिप्पणी" },
];

pub const DOCUMENTS_LABEL: FieldLabel = FieldLabel {
    field: "documents",
    en: "Uploaded Documents",
    hi: "अपलोड किए गए दस्तावेज़",
};

/// Look up the label of a form field by wire name.
pub fn field_label(field: &str) -> Option<&'static FieldLabel> {
    FIELD_LABELS.iter().find(|label| label.field == field)
}

/// User-visible messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    FixHighlightedFields,
    Required,
    InvalidMobile,
    InvalidDate,
    DateInFuture,
    AppointmentBeforeBirth,
    SubmissionFailed,
    SubmissionInProgress,
    PasswordChangeFailed,
}

impl Message {
    pub fn text(self, lang: Lang) -> &'static str {
        match self {
            Message::FixHighlightedFields => lang.pick(
                "Please correct the highlighted fields",
                "कृपया चिह्नित फ़ील्ड ठीक करें",
            ),
            Message::Required => lang.pick("is required", "आवश्यक है"),
            Message::InvalidMobile => lang.pick(
                "must be a 10-digit mobile number",
                "10 अंकों का मोबाइल नंबर होना चाहिए",
            ),
            Message::InvalidDate => lang.pick(
                "must be a valid date (YYYY-MM-DD)",
                "मान्य तिथि (YYYY-MM-DD) होनी चाहिए",
            ),
            Message::DateInFuture => lang.pick(
                "cannot be in the future",
                "भविष्य की तिथि नहीं हो सकती",
            ),
            Message::AppointmentBeforeBirth => lang.pick(
                "cannot be before the date of birth",
                "जन्म तिथि से पहले नहीं हो सकती",
            ),
            Message::SubmissionFailed => lang.pick(
                "Submission failed. Please try again.",
                "आवेदन जमा नहीं हो सका। कृपया पुनः प्रयास करें।",
            ),
            Message::SubmissionInProgress => lang.pick(
                "Submitting… please wait",
                "जमा किया जा रहा है… कृपया प्रतीक्षा करें",
            ),
            Message::PasswordChangeFailed => lang.pick(
                "Unable to change password. Please try again.",
                "पासवर्ड बदला नहीं जा सका। कृपया पुनः प्रयास करें।",
            ),
        }
    }
}

/// "<label> <message>", e.g. "Department is required".
pub fn field_message(field: &str, message: Message, lang: Lang) -> String {
    let label = field_label(field).map(|l| l.text(lang)).unwrap_or(field);
    format!("{} {}", label, message.text(lang))
}
