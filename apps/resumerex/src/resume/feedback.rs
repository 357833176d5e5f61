use tracing::warn;

use crate::llm_client::prompts::feedback_prompt;
use crate::llm_client::TextCompletion;

/// Requests qualitative resume feedback and returns it verbatim.
///
/// Always returns something renderable: a service failure becomes a message.
pub async fn generate_feedback(llm: &dyn TextCompletion, text: &str) -> String {
    match llm.complete(&feedback_prompt(text)).await {
        Ok(feedback) => feedback,
        Err(e) => {
            warn!("Feedback generation failed: {e}");
            format!("Unable to generate resume feedback: {e}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::CannedCompletion;

    #[tokio::test]
    async fn test_feedback_is_passed_through_unmodified() {
        let reply = "**Strengths**\n- Clear impact\n\n**Overall Score**: 7/10\n";
        let llm = CannedCompletion::replying(reply);
        assert_eq!(generate_feedback(&llm, "resume").await, reply);
    }

    #[tokio::test]
    async fn test_feedback_failure_becomes_message() {
        let llm = CannedCompletion::failing();
        let feedback = generate_feedback(&llm, "resume").await;
        assert!(feedback.starts_with("Unable to generate resume feedback:"));
        assert!(feedback.contains("canned failure"));
    }
}
