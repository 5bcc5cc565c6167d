use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::contexts::{Condition, EnabledFields, Persona};

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct EvaluateRequest {
    /// Persona id; omitted means nothing is selected.
    pub persona: Option<String>,
    #[serde(default)]
    pub enabled_fields: EnabledFields,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ConditionView {
    pub index: usize,
    pub label: String,
    pub condition: Condition,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ConditionResult {
    pub index: usize,
    pub label: String,
    pub condition: Condition,
    pub satisfied: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct Evaluation {
    pub persona: Option<Persona>,
    /// Multi-context document with disabled fields omitted.
    #[schema(value_type = Option<Object>)]
    pub context: Option<serde_json::Value>,
    pub satisfied: usize,
    pub results: Vec<ConditionResult>,
}
