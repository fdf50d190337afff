// Resume tailoring: improvement against a job description, company-name
// extraction, and instruction-driven edits.
// All LLM calls go through llm_client — no direct API calls here.

pub mod handlers;
pub mod prompts;

use serde_json::Value;

use crate::llm_client::{
    extract_json_from_response, ChatMessage, LlmClient, LlmError, EDIT_MODEL, IMPROVE_MODEL,
};
use crate::tailoring::prompts::{
    AI_EDIT_PROMPT_TEMPLATE, AI_EDIT_SYSTEM, COMPANY_NAME_PROMPT_TEMPLATE, DEFAULT_POST_PROMPT,
    DEFAULT_PRE_PROMPT,
};

/// Optional per-request prompt overrides for [`improve_resume`].
#[derive(Debug, Default)]
pub struct PromptOverrides {
    pub pre_prompt: Option<String>,
    pub post_prompt: Option<String>,
    pub additional_context: Option<String>,
}

/// Builds the improvement user message: job description, the pretty-printed
/// resume JSON, the trailing constraints, and any extra context.
fn build_improve_message(
    job_description: &str,
    resume: &Value,
    post_prompt: &str,
    additional_context: Option<&str>,
) -> String {
    let resume_json = serde_json::to_string_pretty(resume).unwrap_or_else(|_| "{}".to_string());

    let mut content = format!(
        "\nTarget Job Description\n{job_description}\n\nResume in JSON format\n{resume_json}\n\n{post_prompt}"
    );

    if let Some(extra) = additional_context {
        content.push_str(&format!(
            "\n\n**Additional Context/Instructions:**\n{extra}"
        ));
    }

    content
}

/// Asks the LLM to tailor `resume` to `job_description` and parses the reply
/// back into JSON. Parse failures propagate; nothing is retried.
pub async fn improve_resume(
    llm: &LlmClient,
    job_description: &str,
    resume: &Value,
    overrides: &PromptOverrides,
) -> Result<Value, LlmError> {
    let pre_prompt = overrides.pre_prompt.as_deref().unwrap_or(DEFAULT_PRE_PROMPT);
    let post_prompt = overrides
        .post_prompt
        .as_deref()
        .unwrap_or(DEFAULT_POST_PROMPT);

    let user_content = build_improve_message(
        job_description,
        resume,
        post_prompt,
        overrides.additional_context.as_deref(),
    );

    let messages = [
        ChatMessage::system(pre_prompt),
        ChatMessage::user(user_content),
    ];

    llm.chat_json(IMPROVE_MODEL, &messages).await
}

/// Extracts the company name from a job description. Free-text reply,
/// trimmed; multi-word names come back joined with `_`.
pub async fn extract_company_name(
    llm: &LlmClient,
    job_description: &str,
) -> Result<String, LlmError> {
    let prompt = COMPANY_NAME_PROMPT_TEMPLATE.replace("{jd_text}", job_description);
    let messages = [ChatMessage::user(prompt)];

    let reply = llm.chat(EDIT_MODEL, &messages).await?;
    Ok(reply.trim().to_string())
}

/// Applies a natural-language instruction to the given resume JSON.
pub async fn ai_edit(
    llm: &LlmClient,
    instruction: &str,
    current_data: &Value,
) -> Result<Value, LlmError> {
    let current_json =
        serde_json::to_string_pretty(current_data).unwrap_or_else(|_| "{}".to_string());

    let prompt = AI_EDIT_PROMPT_TEMPLATE
        .replace("{current_json}", &current_json)
        .replace("{instruction}", instruction);

    let messages = [ChatMessage::system(AI_EDIT_SYSTEM), ChatMessage::user(prompt)];

    let reply = llm.chat(EDIT_MODEL, &messages).await?;
    extract_json_from_response(&reply)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_improve_message_contains_jd_and_resume() {
        let resume = json!({"work": [{"company": "X"}]});
        let message = build_improve_message("Rust engineer at Acme", &resume, "constraints", None);

        assert!(message.contains("Target Job Description\nRust engineer at Acme"));
        assert!(message.contains("Resume in JSON format"));
        assert!(message.contains(r#""company": "X""#));
        assert!(message.ends_with("constraints"));
        assert!(!message.contains("Additional Context"));
    }

    #[test]
    fn test_improve_message_appends_additional_context() {
        let message =
            build_improve_message("jd", &json!({}), "post", Some("emphasize leadership"));
        assert!(message.contains("**Additional Context/Instructions:**\nemphasize leadership"));
    }

    #[test]
    fn test_company_prompt_embeds_jd() {
        let prompt = COMPANY_NAME_PROMPT_TEMPLATE.replace("{jd_text}", "Work at Initech.");
        assert!(prompt.contains("Work at Initech."));
        assert!(prompt.contains("append using _"));
    }
}
