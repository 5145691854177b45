use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use super::{
    patch::{double_option, lenient_id, lenient_id_patch},
    qualification::QualificationInput,
    salary::SalaryInput,
};

/// Shift picked during onboarding
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ShiftSelection {
    pub shift_id: i32,
}

/// Full onboarding payload: the employee plus everything attached at hire time
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateEmployeeInput {
    pub unique_id: Option<String>,
    pub name: Option<String>,
    pub email_id: Option<String>,
    pub contact_number: Option<String>,
    #[serde(default, deserialize_with = "lenient_id")]
    pub department_id: Option<i32>,
    #[serde(default)]
    pub roles: Vec<i32>,
    pub qualification: Option<QualificationInput>,
    pub salary: Option<SalaryInput>,
    pub shift: Option<ShiftSelection>,
}

/// Partial employee update. Nullable fields accept an explicit `null`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateEmployeeInput {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub contact_number: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub email_id: Option<Option<String>>,
    #[serde(default, deserialize_with = "lenient_id_patch")]
    #[schema(value_type = Option<i32>)]
    pub department_id: Option<Option<i32>>,
    pub is_on_duty: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArchiveEmployeeInput {
    pub reason_for_leaving: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EmployeeCreatedResponse {
    pub message: String,
    pub unique_id: String,
}

/// Role ids to assign, replacing the current set
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct AssignRolesInput {
    #[schema(value_type = Option<Vec<i32>>)]
    pub roles: Option<Value>,
}

impl AssignRolesInput {
    /// The role ids, or `None` if `roles` is missing or not an array of ids.
    pub fn role_ids(&self) -> Option<Vec<i32>> {
        self.roles
            .as_ref()?
            .as_array()?
            .iter()
            .map(|id| {
                id.as_i64()
                    .or_else(|| id.as_str()?.trim().parse().ok())
                    .and_then(|n| i32::try_from(n).ok())
            })
            .collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AssignShiftInput {
    #[serde(default, deserialize_with = "lenient_id")]
    pub shift_id: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roles(json: &str) -> AssignRolesInput {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_role_ids_keeps_given_order() {
        assert_eq!(roles(r#"{"roles": [3, 1, 2]}"#).role_ids(), Some(vec![3, 1, 2]));
        assert_eq!(roles(r#"{"roles": []}"#).role_ids(), Some(vec![]));
    }

    #[test]
    fn test_role_ids_rejects_missing_or_malformed() {
        assert_eq!(roles("{}").role_ids(), None);
        assert_eq!(roles(r#"{"roles": 4}"#).role_ids(), None);
        assert_eq!(roles(r#"{"roles": [1, "two"]}"#).role_ids(), None);
        assert_eq!(roles(r#"{"roles": [1, "2"]}"#).role_ids(), Some(vec![1, 2]));
    }

    #[test]
    fn test_update_distinguishes_unassign_from_absent() {
        let unassign: UpdateEmployeeInput =
            serde_json::from_str(r#"{"department_id": null}"#).unwrap();
        assert_eq!(unassign.department_id, Some(None));
        assert_eq!(unassign.email_id, None);

        let onboarding: CreateEmployeeInput = serde_json::from_str(
            r#"{"unique_id": "E1", "name": "Ann", "shift": {"shift_id": 2}}"#,
        )
        .unwrap();
        assert!(onboarding.roles.is_empty());
        assert_eq!(onboarding.department_id, None);

        let from_form: CreateEmployeeInput = serde_json::from_str(
            r#"{"unique_id": "E2", "name": "Ben", "department_id": "3"}"#,
        )
        .unwrap();
        assert_eq!(from_form.department_id, Some(3));

        let legacy_shift: AssignShiftInput = serde_json::from_str(r#"{"shift_id": "2"}"#).unwrap();
        assert_eq!(legacy_shift.shift_id, Some(2));
        assert_eq!(onboarding.shift.map(|s| s.shift_id), Some(2));
    }
}
