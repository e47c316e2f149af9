//! Walk a manifest store and flatten the fields we report on

use serde_json::Value;
use tracing::debug;
use veracity_domain::{ProvenanceRecord, SoftwareAgent, AI_SOURCE_TYPE_TEXT, UNKNOWN};

const INGREDIENT_ASSERTION: &str = "c2pa.ingredient.v3";
const ACTIONS_ASSERTION: &str = "c2pa.actions.v2";
const ACTION_PREFIX: &str = "c2pa.";
const TRAINED_ALGORITHMIC_MEDIA: &str = "trainedAlgorithmicMedia";

/// Flatten a parsed manifest store into a record
///
/// Never fails. Missing keys, wrong types and dangling manifest references
/// all degrade to [`UNKNOWN`], `None` or an empty agent list.
pub fn extract_record(store: &Value) -> ProvenanceRecord {
    let active = store
        .get("active_manifest")
        .and_then(Value::as_str)
        .and_then(|id| manifest_by_id(store, id));

    let Some(active) = active else {
        debug!("No active manifest in store");
        return ProvenanceRecord::unknown();
    };

    let claim = active.get("claim");
    let mut record = ProvenanceRecord {
        instance_id: string_or_unknown(claim.and_then(|c| c.get("instanceID"))),
        title: string_or_unknown(claim.and_then(|c| c.get("dc:title"))),
        issuer: string_or_unknown(active.get("signature").and_then(|s| s.get("issuer"))),
        generator_name: string_or_unknown(
            claim
                .and_then(|c| c.get("claim_generator_info"))
                .and_then(|info| info.get("name")),
        ),
        digital_source_type: None,
        software_agents: Vec::new(),
    };

    if let Some(ingredient) = ingredient_manifest(store, active) {
        collect_actions(ingredient, &mut record);
    }

    record
}

/// Look up a manifest body by id, treating empty bodies as missing
fn manifest_by_id<'a>(store: &'a Value, id: &str) -> Option<&'a Value> {
    store
        .get("manifests")
        .and_then(|manifests| manifests.get(id))
        .filter(|body| body.as_object().is_some_and(|fields| !fields.is_empty()))
}

/// Follow the ingredient assertion's URL to the manifest it points at
fn ingredient_manifest<'a>(store: &'a Value, active: &Value) -> Option<&'a Value> {
    let url = active
        .get("assertion_store")?
        .get(INGREDIENT_ASSERTION)?
        .get("activeManifest")?
        .get("url")?
        .as_str()?;

    let id = url.rsplit('/').next().unwrap_or_default();
    if id.is_empty() {
        return None;
    }

    manifest_by_id(store, id)
}

/// Gather unique software agents and the digital source type
fn collect_actions(ingredient: &Value, record: &mut ProvenanceRecord) {
    let actions = ingredient
        .get("assertion_store")
        .and_then(|store| store.get(ACTIONS_ASSERTION))
        .and_then(|assertion| assertion.get("actions"))
        .and_then(Value::as_array);

    let Some(actions) = actions else {
        return;
    };

    for action in actions {
        if let Some(name) = agent_name(action) {
            if !record.software_agents.iter().any(|agent| agent.name == name) {
                let tag = action
                    .get("action")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .replace(ACTION_PREFIX, "");
                record.software_agents.push(SoftwareAgent::new(name, tag));
            }
        }

        if let Some(source_type) = action.get("digitalSourceType").and_then(Value::as_str) {
            record.digital_source_type = Some(describe_source_type(source_type));
        }
    }
}

/// Agent name from either `{"softwareAgent": {"name": ..}}` or `{"softwareAgent": ".."}`
fn agent_name(action: &Value) -> Option<&str> {
    let agent = action.get("softwareAgent")?;
    let name = match agent {
        Value::String(name) => name.as_str(),
        other => other.get("name")?.as_str()?,
    };
    (!name.is_empty()).then_some(name)
}

fn describe_source_type(source_type: &str) -> String {
    if source_type.contains(TRAINED_ALGORITHMIC_MEDIA) {
        AI_SOURCE_TYPE_TEXT.to_string()
    } else {
        source_type.to_string()
    }
}

fn string_or_unknown(value: Option<&Value>) -> String {
    value
        .and_then(Value::as_str)
        .unwrap_or(UNKNOWN)
        .to_string()
}
