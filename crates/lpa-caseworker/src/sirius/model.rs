use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Lifecycle status of an attorney as recorded in the LPA store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AttorneyStatus {
    Active,
    Inactive,
    Removed,
    Other(String),
}

impl AttorneyStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Removed => "removed",
            Self::Other(value) => value,
        }
    }
}

impl Default for AttorneyStatus {
    fn default() -> Self {
        Self::Other(String::new())
    }
}

impl From<String> for AttorneyStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "active" => Self::Active,
            "inactive" => Self::Inactive,
            "removed" => Self::Removed,
            _ => Self::Other(value),
        }
    }
}

impl From<AttorneyStatus> for String {
    fn from(value: AttorneyStatus) -> Self {
        match value {
            AttorneyStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

/// Whether the attorney was named as a primary appointee or a replacement.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AppointmentType {
    Original,
    Replacement,
    Other(String),
}

impl AppointmentType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Original => "original",
            Self::Replacement => "replacement",
            Self::Other(value) => value,
        }
    }
}

impl Default for AppointmentType {
    fn default() -> Self {
        Self::Other(String::new())
    }
}

impl From<String> for AppointmentType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "original" => Self::Original,
            "replacement" => Self::Replacement,
            _ => Self::Other(value),
        }
    }
}

impl From<AppointmentType> for String {
    fn from(value: AppointmentType) -> Self {
        match value {
            AppointmentType::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

/// How a group of attorneys must agree when acting under the LPA.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DecisionMode {
    #[default]
    Unspecified,
    Jointly,
    JointlyAndSeverally,
    JointlyForSomeSeverallyForOthers,
    Other(String),
}

impl DecisionMode {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Unspecified => "",
            Self::Jointly => "jointly",
            Self::JointlyAndSeverally => "jointly-and-severally",
            Self::JointlyForSomeSeverallyForOthers => "jointly-for-some-severally-for-others",
            Self::Other(value) => value,
        }
    }

    /// The mode in which each attorney is individually flagged for joint decisions.
    pub fn requires_per_attorney_decisions(&self) -> bool {
        matches!(self, Self::JointlyForSomeSeverallyForOthers)
    }

    pub fn is_unspecified(&self) -> bool {
        matches!(self, Self::Unspecified)
    }
}

impl From<String> for DecisionMode {
    fn from(value: String) -> Self {
        match value.as_str() {
            "" => Self::Unspecified,
            "jointly" => Self::Jointly,
            "jointly-and-severally" => Self::JointlyAndSeverally,
            "jointly-for-some-severally-for-others" => Self::JointlyForSomeSeverallyForOthers,
            _ => Self::Other(value),
        }
    }
}

impl From<DecisionMode> for String {
    fn from(value: DecisionMode) -> Self {
        match value {
            DecisionMode::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LpaStoreAddress {
    pub line1: String,
    pub line2: String,
    pub line3: String,
    pub town: String,
    pub postcode: String,
    pub country: String,
}

/// One appointee on a digital LPA.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LpaStoreAttorney {
    pub uid: String,
    #[serde(default)]
    pub first_names: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub address: LpaStoreAddress,
    #[serde(default)]
    pub date_of_birth: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub mobile: String,
    #[serde(default)]
    pub signed_at: String,
    #[serde(default)]
    pub status: AttorneyStatus,
    #[serde(default)]
    pub appointment_type: AppointmentType,
    #[serde(default)]
    pub cannot_make_joint_decisions: bool,
}

impl LpaStoreAttorney {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_names, self.last_name)
            .trim()
            .to_string()
    }

    /// Date of birth as caseworkers read it (`DD/MM/YYYY`); unparseable values pass through.
    pub fn date_of_birth_display(&self) -> String {
        NaiveDate::parse_from_str(self.date_of_birth.trim(), "%Y-%m-%d")
            .map(|date| date.format("%d/%m/%Y").to_string())
            .unwrap_or_else(|_| self.date_of_birth.clone())
    }

    /// A replacement attorney who has not yet stepped in.
    pub fn is_dormant_replacement(&self) -> bool {
        self.status == AttorneyStatus::Inactive
            && self.appointment_type == AppointmentType::Replacement
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LpaStoreData {
    pub attorneys: Vec<LpaStoreAttorney>,
    pub how_attorneys_make_decisions: DecisionMode,
    pub how_replacement_attorneys_make_decisions: DecisionMode,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiriusData {
    pub id: i64,
    #[serde(rename = "uId")]
    pub uid: String,
    #[serde(rename = "caseSubtype")]
    pub subtype: String,
    pub status: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DigitalLpa {
    #[serde(rename = "uId")]
    pub uid: String,
    #[serde(rename = "opg.poas.sirius", default)]
    pub sirius_data: SiriusData,
    #[serde(rename = "opg.poas.lpastore", default)]
    pub lpa_store_data: LpaStoreData,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Task {
    pub id: i64,
    pub name: String,
    pub status: String,
    pub due_date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Warning {
    pub id: i64,
    pub warning_type: String,
    pub warning_text: String,
    pub date_added: String,
}

/// Snapshot backing the case summary panel and every attorney workflow.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseSummary {
    pub digital_lpa: DigitalLpa,
    pub task_list: Vec<Task>,
    pub warning_list: Vec<Warning>,
}

impl CaseSummary {
    pub fn attorneys(&self) -> &[LpaStoreAttorney] {
        &self.digital_lpa.lpa_store_data.attorneys
    }

    pub fn subtype(&self) -> &str {
        &self.digital_lpa.sirius_data.subtype
    }

    pub fn decisions(&self) -> &DecisionMode {
        &self.digital_lpa.lpa_store_data.how_attorneys_make_decisions
    }

    pub fn replacement_decisions(&self) -> &DecisionMode {
        &self
            .digital_lpa
            .lpa_store_data
            .how_replacement_attorneys_make_decisions
    }
}

/// Reference data option, e.g. a reason for removing an attorney.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RefDataItem {
    pub handle: String,
    pub label: String,
    pub valid_sub_types: Vec<String>,
}

impl RefDataItem {
    /// Items without a subtype restriction apply to every case.
    pub fn is_valid_for(&self, subtype: &str) -> bool {
        self.valid_sub_types.is_empty() || self.valid_sub_types.iter().any(|s| s == subtype)
    }
}

/// One entry of a batched attorney status change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttorneyUpdatedStatus {
    pub uid: String,
    pub status: AttorneyStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub removed_reason: Option<String>,
}

/// One entry of a batched joint-decision flag change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttorneyDecision {
    pub uid: String,
    pub cannot_make_joint_decisions: bool,
}
