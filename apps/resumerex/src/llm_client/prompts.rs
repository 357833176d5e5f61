// Prompt templates for the resume analysis calls.
// Placeholders are substituted with `str::replace` before sending.

/// Keyword extraction prompt. Replace `{count}` and `{resume_text}`.
pub const KEYWORD_PROMPT_TEMPLATE: &str = r#"Given this resume text, extract the top {count} job-related keywords that best describe the candidate for a job search.

Cover, where present:
- programming languages
- frameworks and libraries
- tools and platforms
- job roles and domains
- certifications

Each keyword must be a short noun phrase of one to three words.
Return them as a single comma-separated list and NOTHING else: no numbering, no bullets, no full sentences, no explanations.

Resume:
{resume_text}"#;

/// Resume feedback prompt. Replace `{resume_text}`.
pub const FEEDBACK_PROMPT_TEMPLATE: &str = r#"This is a resume. Analyze it and give structured feedback under exactly these headings:
- Strengths
- Weaknesses
- Skills Detected
- Suggestions for Improvement
- Overall Score (out of 10)

Keep each section brief; do not make it too detailed.

Resume:
{resume_text}"#;

pub fn keyword_prompt(resume_text: &str, count: usize) -> String {
    KEYWORD_PROMPT_TEMPLATE
        .replace("{count}", &count.to_string())
        .replace("{resume_text}", resume_text)
}

pub fn feedback_prompt(resume_text: &str) -> String {
    FEEDBACK_PROMPT_TEMPLATE.replace("{resume_text}", resume_text)
}
