//! Provenance record extracted from a C2PA-style manifest

/// Placeholder for manifest fields that are missing
pub const UNKNOWN: &str = "Unknown";

/// Human-readable replacement for a `trainedAlgorithmicMedia` source type
pub const AI_SOURCE_TYPE_TEXT: &str = "This content was generated with an AI tool";

/// Generator names that attribute the asset to an AI image tool
const AI_GENERATORS: [&str; 4] = ["ChatGPT", "DALL·E", "Dall-E", "OpenAI"];

/// Software agent names that attribute an action to an AI image tool
const AI_AGENTS: [&str; 4] = ["GPT-4o", "DALL-E", "DALL·E", "OpenAI API"];

/// Marker that a rewritten digital source type carries
const AI_SOURCE_MARKER: &str = "AI tool";

/// A software agent that performed an action on the asset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoftwareAgent {
    /// Agent name as recorded in the manifest (e.g., "GPT-4o")
    pub name: String,

    /// Action tag with the `c2pa.` prefix removed (e.g., "created")
    pub action: String,
}

impl SoftwareAgent {
    /// Create a new software agent
    pub fn new(name: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            action: action.into(),
        }
    }

    /// Sentence fragment describing the action, to be followed by the agent name
    pub fn describe_action(&self) -> String {
        match self.action.as_str() {
            "created" => "The asset was created by".to_string(),
            "converted" => "The asset format was converted by".to_string(),
            other => format!("{} by", other),
        }
    }
}

/// Flattened view of a provenance manifest
///
/// Built once per manifest and never mutated afterwards. String fields that
/// are absent from the manifest hold [`UNKNOWN`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvenanceRecord {
    /// Claim instance identifier
    pub instance_id: String,

    /// Asset title (`dc:title`)
    pub title: String,

    /// Issuer of the signing certificate
    pub issuer: String,

    /// Name of the claim generator
    pub generator_name: String,

    /// How the content originated, if the ingredient manifest says so
    pub digital_source_type: Option<String>,

    /// Unique software agents in the order they first appear
    pub software_agents: Vec<SoftwareAgent>,
}

impl ProvenanceRecord {
    /// Record with every field at its default
    pub fn unknown() -> Self {
        Self {
            instance_id: UNKNOWN.to_string(),
            title: UNKNOWN.to_string(),
            issuer: UNKNOWN.to_string(),
            generator_name: UNKNOWN.to_string(),
            digital_source_type: None,
            software_agents: Vec::new(),
        }
    }
}

/// Decide whether a record attributes the asset to an AI tool
///
/// Checks run in order and stop at the first hit: the generator name, then
/// each software agent name, then the digital source type.
pub fn is_ai_generated(record: &ProvenanceRecord) -> bool {
    if AI_GENERATORS
        .iter()
        .any(|tool| record.generator_name.contains(tool))
    {
        return true;
    }

    if record
        .software_agents
        .iter()
        .any(|agent| AI_AGENTS.iter().any(|tool| agent.name.contains(tool)))
    {
        return true;
    }

    record
        .digital_source_type
        .as_deref()
        .is_some_and(|source| source.contains(AI_SOURCE_MARKER))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_with_generator(generator: &str) -> ProvenanceRecord {
        ProvenanceRecord {
            generator_name: generator.to_string(),
            ..ProvenanceRecord::unknown()
        }
    }

    #[test]
    fn test_describe_known_actions() {
        assert_eq!(
            SoftwareAgent::new("GPT-4o", "created").describe_action(),
            "The asset was created by"
        );
        assert_eq!(
            SoftwareAgent::new("OpenAI API", "converted").describe_action(),
            "The asset format was converted by"
        );
        assert_eq!(
            SoftwareAgent::new("Photoshop", "edited").describe_action(),
            "edited by"
        );
    }

    #[test]
    fn test_generator_attribution() {
        assert!(is_ai_generated(&record_with_generator("DALL·E 3")));
        assert!(is_ai_generated(&record_with_generator("ChatGPT")));
        assert!(is_ai_generated(&record_with_generator("OpenAI-API")));
        assert!(!is_ai_generated(&record_with_generator("Adobe Photoshop")));
    }

    #[test]
    fn test_generator_match_is_case_sensitive() {
        assert!(!is_ai_generated(&record_with_generator("openai")));
    }

    #[test]
    fn test_agent_attribution() {
        let mut record = record_with_generator("Adobe Firefly");
        record.software_agents = vec![
            SoftwareAgent::new("Lightroom", "edited"),
            SoftwareAgent::new("GPT-4o", "created"),
        ];
        assert!(is_ai_generated(&record));
    }

    #[test]
    fn test_agent_list_differs_from_generator_list() {
        // "ChatGPT" only counts as a generator name
        let mut record = ProvenanceRecord::unknown();
        record.software_agents = vec![SoftwareAgent::new("ChatGPT", "created")];
        assert!(!is_ai_generated(&record));
    }

    #[test]
    fn test_source_type_attribution() {
        let mut record = ProvenanceRecord::unknown();
        record.digital_source_type = Some(AI_SOURCE_TYPE_TEXT.to_string());
        assert!(is_ai_generated(&record));

        record.digital_source_type =
            Some("http://cv.iptc.org/newscodes/digitalsourcetype/digitalCapture".to_string());
        assert!(!is_ai_generated(&record));
    }

    #[test]
    fn test_unknown_record_is_not_generated() {
        assert!(!is_ai_generated(&ProvenanceRecord::unknown()));
    }
}
