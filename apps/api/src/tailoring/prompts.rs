// All LLM prompt constants for the Tailoring module.
// Callers may override the pre/post prompts per request; these are the fixed
// defaults the legacy API ships with.

/// Default system prompt for resume improvement.
pub const DEFAULT_PRE_PROMPT: &str = "Act as a JSON Data Processor and ATS Optimization Specialist\n\
    I am going to provide you with a **Resume in JSON format** and a **Target Job Description**.\n\
    Your task is to update the values inside the `work`, `professional_summary`, and `skills` arrays within the JSON to better match the Job Description.";

/// Default trailing constraints appended to the improvement user message.
pub const DEFAULT_POST_PROMPT: &str = "**Strict Technical Constraints:**\n\
    1.  **Output Format:** You must return **ONLY** valid, raw JSON. Do not include markdown formatting (like ```json), conversational filler, or explanations. Just the JSON object.\n\
    2.  **Structure Integrity:** Do not change keys, variable names, or the overall structure of the JSON object.\n\
    3.  **Minimal Edits:** You are allowed to change or insert a maximum of **3-4 specific keywords** to match the Job Description if necessary.\n\
    4.  **Preserve Context:** Do not rewrite the sentences. Keep the original sentence structure and meaning, only swapping in technical terms or hard skills where they fit naturally.\n";

/// System prompt for instruction-driven edits.
pub const AI_EDIT_SYSTEM: &str = "Act as a JSON Data Processor. Your task is to update the provided Resume JSON data based on the user's natural language instruction.";

/// Instruction-edit prompt template.
/// Replace `{current_json}` and `{instruction}` before sending.
pub const AI_EDIT_PROMPT_TEMPLATE: &str = r#"
Current Resume JSON:
{current_json}

Instruction:
{instruction}

**Strict Rules:**
1. Return ONLY the updated JSON object. No markdown, no explanations.
2. Maintain the exact same structure as the input JSON.
3. Only modify fields relevant to the instruction.
4. If the instruction implies adding a new item (like a job or skill), generate a reasonable structure for it matching existing items.
"#;

/// Company-name extraction prompt template. Replace `{jd_text}` before
/// sending. Free-text reply, not JSON-parsed.
pub const COMPANY_NAME_PROMPT_TEMPLATE: &str = "\nJob Description\n{jd_text}\nJust give me name of the company and nothing \
    else based of job description. Nothing else. If \
    the company has two words append using _ ";
