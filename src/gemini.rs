// src/gemini.rs
// Generative Language API client: model listing plus the analysis call with
// local resolution of tool calls

use base64::{engine::general_purpose, Engine as _};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::CoachConfig;
use crate::error::{CoachError, Result};
use crate::model_select::select_model;
use crate::tools;

/// Upper bound on request/tool-response rounds within one analysis. The
/// coach declares a single tool, so one round is the norm.
const MAX_TOOL_ROUNDS: usize = 4;

#[derive(Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tools: Vec<tools::Tool>,
}

#[derive(Serialize, Clone)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Serialize, Clone)]
#[serde(untagged)]
enum Part {
    Text { text: String },
    InlineData { inline_data: InlineData },
    FunctionCall { function_call: FunctionCall },
    FunctionResponse { function_response: FunctionResponse },
}

#[derive(Serialize, Clone)]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct FunctionCall {
    pub name: String,
    #[serde(default)]
    pub args: Value,
}

#[derive(Serialize, Clone)]
struct FunctionResponse {
    name: String,
    response: Value,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: ResponseContent,
}

#[derive(Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

/// One part of a model turn. The tool-invocation record is an explicit
/// optional field, checked with ordinary conditional access.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResponsePart {
    text: Option<String>,
    function_call: Option<FunctionCall>,
}

#[derive(Deserialize)]
struct ModelList {
    #[serde(default)]
    models: Vec<ModelEntry>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ModelEntry {
    name: String,
    #[serde(default)]
    supported_generation_methods: Vec<String>,
}

/// Record of one tool call the model made, surfaced in the calculation log.
#[derive(Debug, Clone, Serialize)]
pub struct ToolInvocation {
    pub name: String,
    pub args: Value,
}

/// Final reply for one analysis request.
#[derive(Debug)]
pub struct CoachReply {
    pub text: String,
    pub tool_calls: Vec<ToolInvocation>,
}

pub struct GeminiClient {
    http: reqwest::Client,
    config: CoachConfig,
}

impl GeminiClient {
    pub fn new(config: CoachConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Names of the models that support generateContent, in listing order.
    pub async fn list_model_names(&self) -> Result<Vec<String>> {
        let url = format!(
            "{}/models?key={}&pageSize=200",
            self.config.base_url, self.config.api_key
        );
        let response = self.http.get(&url).send().await?;
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(CoachError::ApiStatus { status, body });
        }

        let list: ModelList = response.json().await?;
        Ok(list
            .models
            .into_iter()
            .filter(|m| {
                m.supported_generation_methods
                    .iter()
                    .any(|method| method == "generateContent")
            })
            .map(|m| m.name)
            .collect())
    }

    /// Best available model per the selection policy. A failed listing is
    /// logged and degrades to the hardcoded fallback, never an error.
    pub async fn resolve_model(&self) -> String {
        match self.list_model_names().await {
            Ok(names) => select_model(&names),
            Err(e) => {
                let e = CoachError::CatalogUnavailable(e.to_string());
                tracing::warn!("{}", e);
                select_model(&[])
            }
        }
    }

    /// Send the prompt (and optional PNG screenshot) to `model`, answering
    /// tool calls locally until the model settles on a text reply.
    pub async fn analyze(
        &self,
        model: &str,
        prompt: &str,
        screenshot_png: Option<&[u8]>,
    ) -> Result<CoachReply> {
        let mut parts = vec![Part::Text {
            text: prompt.to_string(),
        }];
        if let Some(bytes) = screenshot_png {
            parts.push(Part::InlineData {
                inline_data: InlineData {
                    mime_type: "image/png".to_string(),
                    data: general_purpose::STANDARD.encode(bytes),
                },
            });
        }

        let mut contents = vec![Content {
            role: "user".to_string(),
            parts,
        }];
        let mut tool_calls = Vec::new();

        for _ in 0..MAX_TOOL_ROUNDS {
            let response = self.generate(model, &contents).await?;
            let candidate = response
                .candidates
                .into_iter()
                .next()
                .ok_or(CoachError::EmptyReply)?;

            let requested = candidate
                .content
                .parts
                .iter()
                .find_map(|p| p.function_call.clone());

            let Some(call) = requested else {
                let text: String = candidate
                    .content
                    .parts
                    .iter()
                    .filter_map(|p| p.text.as_deref())
                    .collect::<Vec<_>>()
                    .join("");
                if text.is_empty() {
                    return Err(CoachError::EmptyReply);
                }
                return Ok(CoachReply { text, tool_calls });
            };

            tracing::debug!(tool = %call.name, "model requested a tool call");
            tool_calls.push(ToolInvocation {
                name: call.name.clone(),
                args: call.args.clone(),
            });

            let payload = tools::dispatch(&call.name, &call.args)?;

            // Echo the model turn, then answer it with the tool output
            contents.push(Content {
                role: "model".to_string(),
                parts: vec![Part::FunctionCall {
                    function_call: call.clone(),
                }],
            });
            contents.push(Content {
                role: "function".to_string(),
                parts: vec![Part::FunctionResponse {
                    function_response: FunctionResponse {
                        name: call.name,
                        response: payload,
                    },
                }],
            });
        }

        Err(CoachError::ToolLoopExceeded(MAX_TOOL_ROUNDS))
    }

    async fn generate(&self, model: &str, contents: &[Content]) -> Result<GenerateResponse> {
        // Catalog entries come prefixed with "models/", the fallback does not
        let model_path = if model.starts_with("models/") {
            model.to_string()
        } else {
            format!("models/{}", model)
        };
        let url = format!(
            "{}/{}:generateContent?key={}",
            self.config.base_url, model_path, self.config.api_key
        );

        let request = GenerateRequest {
            contents: contents.to_vec(),
            tools: tools::declarations(),
        };

        let response = self.http.post(&url).json(&request).send().await?;
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(CoachError::ApiStatus { status, body });
        }

        Ok(response.json().await?)
    }
}
