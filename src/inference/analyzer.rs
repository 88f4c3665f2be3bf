use log::info;

use crate::{
    config::Config,
    error::{Error, Result},
    pipelines::{
        text_classification,
        text_generation::{self, Prompts},
        Outcome, Pipeline, Task,
    },
};

use super::{client::Client, transport::Transport};

/// Sends a review to the endpoint for a pipeline and interprets the response
#[derive(Debug)]
pub struct Analyzer<T> {
    client: Client<T>,
    pipeline: Pipeline,
    endpoint: String,
    prompts: Prompts,
}

impl<T: Transport> Analyzer<T> {
    /// Create an analyzer for a pipeline and endpoint
    pub fn new(client: Client<T>, pipeline: Pipeline, endpoint: String, prompts: Prompts) -> Self {
        Self {
            client,
            pipeline,
            endpoint,
            prompts,
        }
    }

    /// Create an analyzer for the configured pipeline
    pub fn from_config(client: Client<T>, config: &Config) -> Result<Self> {
        let prompts = Prompts::new(&config.prompts.sentiment, &config.prompts.noun_density)?;

        Ok(Self::new(
            client,
            config.pipeline,
            config.endpoint(config.pipeline),
            prompts,
        ))
    }

    /// The active pipeline
    pub fn pipeline(&self) -> Pipeline {
        self.pipeline
    }

    /// The model endpoint requests are sent to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// The underlying client
    pub fn client(&self) -> &Client<T> {
        &self.client
    }

    /// Run a task against the review text
    pub async fn analyze(&self, text: &str, task: Task, token: Option<&str>) -> Result<Outcome> {
        if !self.pipeline.supports(task) {
            return Err(Error::UnsupportedTask {
                task: task.to_string(),
                pipeline: self.pipeline.to_string(),
            });
        }

        info!("Running {} analysis with the {} pipeline", task, self.pipeline);

        match self.pipeline {
            Pipeline::TextClassification => {
                let data = self.client.infer(&self.endpoint, text, token).await?;

                Ok(Outcome::Sentiment(text_classification::interpret(&data)?))
            }
            Pipeline::TextGeneration => {
                let prompt = self.prompts.render(task, text)?;
                let data = self.client.infer(&self.endpoint, &prompt, token).await?;
                let line = text_generation::first_line(text_generation::generated_text(&data));

                Ok(match task {
                    Task::Sentiment => Outcome::Sentiment(text_generation::sentiment(&line)),
                    Task::NounDensity => Outcome::NounDensity(text_generation::noun_density(&line)),
                })
            }
        }
    }
}
