use crate::{
    contexts::{self, Persona},
    dto::contexts::{ConditionResult, ConditionView, EvaluateRequest, Evaluation},
    error::{AppError, AppResult},
};

pub fn list_personas() -> Vec<Persona> {
    contexts::personas()
}

pub fn list_conditions() -> Vec<ConditionView> {
    contexts::condition_matrix()
        .into_iter()
        .enumerate()
        .map(|(index, condition)| ConditionView {
            index,
            label: condition.label(),
            condition,
        })
        .collect()
}

pub fn evaluate(payload: EvaluateRequest) -> AppResult<Evaluation> {
    let persona = match payload.persona.as_deref().filter(|id| !id.trim().is_empty()) {
        Some(id) => Some(
            contexts::find_persona(id)
                .ok_or_else(|| AppError::NotFound("Persona not found".into()))?,
        ),
        None => None,
    };

    let enabled = payload.enabled_fields;
    let conditions = contexts::condition_matrix();
    let outcome = contexts::evaluate(persona.as_ref(), &enabled, &conditions);

    let results: Vec<ConditionResult> = conditions
        .into_iter()
        .zip(outcome)
        .enumerate()
        .map(|(index, (condition, satisfied))| ConditionResult {
            index,
            label: condition.label(),
            condition,
            satisfied,
        })
        .collect();
    let satisfied = results.iter().filter(|r| r.satisfied).count();

    Ok(Evaluation {
        context: persona.as_ref().map(|p| p.multi_context(&enabled)),
        persona,
        satisfied,
        results,
    })
}
