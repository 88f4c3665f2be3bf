use liquid::{
    model::{Object, Value as LiquidValue},
    ParserBuilder, Template,
};

use crate::{error::Result, pipelines::Task};

/// Default instruction for sentiment classification
pub static SENTIMENT_PROMPT: &str =
    "Classify this review as positive, negative, or neutral: {{ text }}";

/// Default instruction for noun density estimation
pub static NOUN_DENSITY_PROMPT: &str =
    "Count the nouns in this review and return only High (>15), Medium (6-15), or Low (<6). {{ text }}";

/// Compiled prompt templates, one per task. The review is bound to `text`.
pub struct Prompts {
    sentiment: Template,
    noun_density: Template,
}

impl Prompts {
    /// Compile the given template sources
    pub fn new(sentiment: &str, noun_density: &str) -> Result<Self> {
        let parser = ParserBuilder::with_stdlib().build()?;

        Ok(Self {
            sentiment: parser.parse(sentiment)?,
            noun_density: parser.parse(noun_density)?,
        })
    }

    /// Render the prompt for a task around the review text
    pub fn render(&self, task: Task, text: &str) -> Result<String> {
        let template = match task {
            Task::Sentiment => &self.sentiment,
            Task::NounDensity => &self.noun_density,
        };

        let mut globals = Object::new();
        globals.insert("text".into(), LiquidValue::scalar(text.to_string()));

        Ok(template.render(&globals)?)
    }
}

impl std::fmt::Debug for Prompts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Prompts").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn defaults() -> Prompts {
        Prompts::new(SENTIMENT_PROMPT, NOUN_DENSITY_PROMPT).unwrap()
    }

    #[test]
    fn test_sentiment_prompt() {
        let prompt = defaults().render(Task::Sentiment, "Loved it.").unwrap();

        assert_eq!(
            prompt,
            "Classify this review as positive, negative, or neutral: Loved it."
        );
    }

    #[test]
    fn test_noun_density_prompt() {
        let prompt = defaults().render(Task::NounDensity, "Loved it.").unwrap();

        assert_eq!(
            prompt,
            "Count the nouns in this review and return only High (>15), Medium (6-15), or Low (<6). Loved it."
        );
    }

    #[test]
    fn test_review_text_is_not_interpreted() {
        let prompt = defaults()
            .render(Task::Sentiment, "{{ not a tag }} <b>bold</b>")
            .unwrap();

        assert!(prompt.ends_with(": {{ not a tag }} <b>bold</b>"));
    }

    #[test]
    fn test_custom_template() {
        let prompts = Prompts::new("Review: {{ text | upcase }}", NOUN_DENSITY_PROMPT).unwrap();

        assert_eq!(prompts.render(Task::Sentiment, "ok").unwrap(), "Review: OK");
    }

    #[test]
    fn test_invalid_template() {
        assert!(Prompts::new("{% if %}", NOUN_DENSITY_PROMPT).is_err());
    }
}
