use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

pub const PIE_SELECTION_JSON_SCHEMA_V1: u32 = 1;

/// Persisted pie UI state.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PieSelectionState {
    pub selected_category: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieSelectionJsonContractV1 {
    pub schema_version: u32,
    pub state: PieSelectionState,
}

impl PieSelectionState {
    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = PieSelectionJsonContractV1 {
            schema_version: PIE_SELECTION_JSON_SCHEMA_V1,
            state: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidPayload(format!("failed to serialize selection contract v1: {e}"))
        })
    }

    /// Accepts both the versioned contract and a bare state object.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(payload) = serde_json::from_str::<PieSelectionJsonContractV1>(input) {
            if payload.schema_version != PIE_SELECTION_JSON_SCHEMA_V1 {
                return Err(ChartError::InvalidPayload(format!(
                    "unsupported selection schema version: {}",
                    payload.schema_version
                )));
            }
            return Ok(payload.state);
        }
        serde_json::from_str::<Self>(input).map_err(|e| {
            ChartError::InvalidPayload(format!("failed to parse selection json payload: {e}"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::PieSelectionState;

    #[test]
    fn contract_round_trips_selection() {
        let state = PieSelectionState {
            selected_category: Some("Food".to_owned()),
        };
        let json = state.to_json_contract_v1_pretty().expect("serialize");
        assert!(json.contains("\"schema_version\": 1"));
        assert_eq!(
            PieSelectionState::from_json_compat_str(&json).expect("parse"),
            state
        );
    }

    #[test]
    fn bare_state_is_accepted() {
        let state =
            PieSelectionState::from_json_compat_str(r#"{"selected_category":null}"#).expect("parse");
        assert_eq!(state, PieSelectionState::default());
    }

    #[test]
    fn unknown_schema_version_is_rejected() {
        let input = r#"{"schema_version":2,"state":{"selected_category":"Food"}}"#;
        assert!(PieSelectionState::from_json_compat_str(input).is_err());
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(PieSelectionState::from_json_compat_str("[1, 2]").is_err());
    }
}
