//! Request body construction for both endpoint families

use serde::Serialize;

/// Sampling parameters for the completion endpoint. Not caller-configurable.
const TEMPERATURE: f32 = 0.0;
const MAX_TOKENS: u32 = 512;

const MODEL_URL_PREFIX: &str = "https://ai2-reviz--";
const MODEL_URL_SUFFIX: &str = "-combo.modal.run/completion";

/// Request body for the multimodal endpoint
#[derive(Debug, Clone, Serialize)]
pub struct MultimodalPayload {
    pub input_text: Vec<String>,
    pub input_image: Vec<String>,
}

impl MultimodalPayload {
    /// Build a payload from an instruction and resolved image data
    pub fn new(instruction: impl Into<String>, image_data: impl Into<String>) -> Self {
        Self {
            input_text: vec![instruction.into()],
            input_image: vec![image_data.into()],
        }
    }
}

/// Request body for the text-only completion endpoint
#[derive(Debug, Clone, Serialize)]
pub struct CompletionPayload {
    pub input: CompletionInput,
    pub model_version_id: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CompletionInput {
    pub messages: Vec<Message>,
    pub opts: SamplingOpts,
}

#[derive(Debug, Clone, Serialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SamplingOpts {
    pub temperature: f32,
    pub max_tokens: u32,
}

impl CompletionPayload {
    /// Build a payload for the given endpoint, deriving the model id
    /// from the endpoint URL
    pub fn new(api_url: &str, instruction: impl Into<String>) -> Self {
        Self {
            input: CompletionInput {
                messages: vec![Message {
                    role: "user".to_string(),
                    content: instruction.into(),
                }],
                opts: SamplingOpts {
                    temperature: TEMPERATURE,
                    max_tokens: MAX_TOKENS,
                },
            },
            model_version_id: model_version_id(api_url),
        }
    }
}

/// Derive the model identifier from a completion endpoint URL.
///
/// Endpoints are deployed as `https://ai2-reviz--<id>-combo.modal.run/completion`;
/// the id is what remains after removing that wrapper. Pieces that do not
/// occur are left alone, so unrecognized URLs pass through intact.
pub fn model_version_id(api_url: &str) -> String {
    api_url
        .replace(MODEL_URL_PREFIX, "")
        .replace(MODEL_URL_SUFFIX, "")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_multimodal_payload_shape() {
        let payload = MultimodalPayload::new("point to the trees", "https://example.com/t.jpg");
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "input_text": ["point to the trees"],
                "input_image": ["https://example.com/t.jpg"],
            })
        );
    }

    #[test]
    fn test_completion_payload_shape() {
        let payload = CompletionPayload::new(
            "https://ai2-reviz--olmoe-1b-7b-0125-instruct-combo.modal.run/completion",
            "tell me a joke",
        );
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "input": {
                    "messages": [{"role": "user", "content": "tell me a joke"}],
                    "opts": {"temperature": 0.0, "max_tokens": 512},
                },
                "model_version_id": "olmoe-1b-7b-0125-instruct",
            })
        );
    }

    #[test]
    fn test_model_version_id_strips_wrapper() {
        for id in [
            "olmoe-1b-7b-0125-instruct",
            "olmo-2-0325-32b-instruct",
            "olmo-2-1124-13b-instruct",
        ] {
            let url = format!("https://ai2-reviz--{id}-combo.modal.run/completion");
            assert_eq!(model_version_id(&url), id);
        }
    }

    #[test]
    fn test_model_version_id_leaves_unrecognized_urls() {
        assert_eq!(
            model_version_id("http://127.0.0.1:9000/completion"),
            "http://127.0.0.1:9000/completion"
        );
    }
}
