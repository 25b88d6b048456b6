use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";
pub const JSON_MIME_TYPE: &str = "application/json";

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum SchemaType {
    Object,
    Array,
    String,
    Number,
}

/// Output-schema descriptor sent alongside a generation request.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct JsonSchema {
    #[serde(rename = "type")]
    pub schema_type: SchemaType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<BTreeMap<String, JsonSchema>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<JsonSchema>>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub required: Vec<String>,
    #[serde(rename = "propertyOrdering", skip_serializing_if = "Vec::is_empty", default)]
    pub property_ordering: Vec<String>,
}

impl JsonSchema {
    fn scalar(schema_type: SchemaType) -> Self {
        Self {
            schema_type,
            description: None,
            properties: None,
            items: None,
            required: Vec::new(),
            property_ordering: Vec::new(),
        }
    }

    pub fn string() -> Self {
        Self::scalar(SchemaType::String)
    }

    pub fn number() -> Self {
        Self::scalar(SchemaType::Number)
    }

    pub fn array_of(items: JsonSchema) -> Self {
        Self {
            items: Some(Box::new(items)),
            ..Self::scalar(SchemaType::Array)
        }
    }

    /// Object whose properties are all required, emitted in the given order.
    pub fn object(fields: Vec<(&str, JsonSchema)>) -> Self {
        let property_ordering: Vec<String> = fields.iter().map(|(name, _)| name.to_string()).collect();
        let properties = fields
            .into_iter()
            .map(|(name, schema)| (name.to_string(), schema))
            .collect();
        Self {
            properties: Some(properties),
            required: property_ordering.clone(),
            property_ordering,
            ..Self::scalar(SchemaType::Object)
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Part {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub text: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Content {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Content {
    fn with_role(role: Option<&str>, text: &str) -> Self {
        Self {
            role: role.map(str::to_string),
            parts: vec![Part {
                text: Some(text.to_string()),
            }],
        }
    }

    pub fn user(text: &str) -> Self {
        Self::with_role(Some("user"), text)
    }

    pub fn model(text: &str) -> Self {
        Self::with_role(Some("model"), text)
    }

    /// System instructions carry no role.
    pub fn system(text: &str) -> Self {
        Self::with_role(None, text)
    }

    /// Concatenated text of all parts, `None` when no part carries text.
    pub fn text(&self) -> Option<String> {
        let texts: Vec<&str> = self
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        if texts.is_empty() {
            None
        } else {
            Some(texts.concat())
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub response_mime_type: String,
    pub response_schema: JsonSchema,
}

impl GenerationConfig {
    pub fn json(response_schema: JsonSchema) -> Self {
        Self {
            response_mime_type: JSON_MIME_TYPE.to_string(),
            response_schema,
        }
    }
}

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    #[serde(default)]
    pub block_reason: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    #[serde(default)]
    pub prompt_token_count: u64,
    #[serde(default)]
    pub candidates_token_count: u64,
    #[serde(default)]
    pub total_token_count: u64,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Option<Vec<Candidate>>,
    #[serde(default)]
    pub prompt_feedback: Option<PromptFeedback>,
    #[serde(default)]
    pub usage_metadata: Option<UsageMetadata>,
    #[serde(default)]
    pub model_version: Option<String>,
}

impl GenerateContentResponse {
    /// Text of the first candidate; whitespace-only output counts as no text.
    pub fn text(&self) -> Option<String> {
        self.candidates
            .as_ref()?
            .first()?
            .content
            .as_ref()?
            .text()
            .filter(|t| !t.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_schema_marks_every_field_required() {
        let schema = JsonSchema::object(vec![
            ("title", JsonSchema::string()),
            ("steps", JsonSchema::array_of(JsonSchema::string())),
        ]);
        let value = serde_json::to_value(&schema).unwrap();
        assert_eq!(value["type"], "OBJECT");
        assert_eq!(value["required"], serde_json::json!(["title", "steps"]));
        assert_eq!(value["propertyOrdering"], serde_json::json!(["title", "steps"]));
        assert_eq!(value["properties"]["steps"]["items"]["type"], "STRING");
    }

    #[test]
    fn test_request_uses_camel_case_keys() {
        let request = GenerateContentRequest {
            contents: vec![Content::user("Hello")],
            system_instruction: Some(Content::system("Be brief")),
            generation_config: Some(GenerationConfig::json(JsonSchema::string())),
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"systemInstruction\""));
        assert!(json.contains("\"generationConfig\""));
        assert!(json.contains("\"responseMimeType\":\"application/json\""));
        assert!(json.contains("\"role\":\"user\""));
        // System content has no role key at all.
        assert!(!json.contains("\"role\":null"));
    }

    #[test]
    fn test_response_text_joins_parts() {
        let body = r#"{"candidates":[{"content":{"role":"model","parts":[{"text":"{\"a\":"},{"text":"1}"}]},"finishReason":"STOP"}]}"#;
        let response: GenerateContentResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.text().as_deref(), Some("{\"a\":1}"));
    }

    #[test]
    fn test_response_without_text() {
        let blocked = r#"{"promptFeedback":{"blockReason":"SAFETY"}}"#;
        let response: GenerateContentResponse = serde_json::from_str(blocked).unwrap();
        assert!(response.text().is_none());

        let blank = r#"{"candidates":[{"content":{"parts":[{"text":"  \n"}]}}]}"#;
        let response: GenerateContentResponse = serde_json::from_str(blank).unwrap();
        assert!(response.text().is_none());
    }
}
