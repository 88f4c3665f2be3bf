use std::{collections::VecDeque, io, sync::Mutex};

use async_trait::async_trait;
use review_inference::{
    config::Config,
    inference::{Analyzer, Client, HttpResponse, InferenceRequest, Transport},
    pipelines::Pipeline,
    session::View,
    utils::renderer::Renderer,
    Result,
};

/// Serves one corpus for GETs and queued responses for POSTs
pub struct FakeHub {
    corpus: HttpResponse,
    responses: Mutex<VecDeque<HttpResponse>>,
    pub requests: Mutex<Vec<InferenceRequest>>,
}

impl FakeHub {
    pub fn new(corpus: &str) -> Self {
        Self {
            corpus: ok(corpus),
            responses: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn missing_corpus() -> Self {
        Self {
            corpus: HttpResponse::new(404, "Not Found".to_string(), String::new()),
            ..Self::new("")
        }
    }

    pub fn respond(self, response: HttpResponse) -> Self {
        self.responses.lock().unwrap().push_back(response);
        self
    }
}

#[async_trait]
impl Transport for FakeHub {
    async fn get(&self, _url: &str) -> Result<HttpResponse> {
        Ok(self.corpus.clone())
    }

    async fn post(&self, request: &InferenceRequest) -> Result<HttpResponse> {
        self.requests.lock().unwrap().push(request.clone());

        let response = self.responses.lock().unwrap().pop_front();
        Ok(response.unwrap_or_else(|| {
            HttpResponse::new(500, "Internal Server Error".to_string(), String::new())
        }))
    }
}

/// Keeps a copy of every rendered view
#[derive(Default)]
pub struct Recorder {
    pub frames: Vec<View>,
}

impl Renderer for Recorder {
    fn render(&mut self, view: &View) -> io::Result<()> {
        self.frames.push(view.clone());
        Ok(())
    }
}

pub fn ok(body: &str) -> HttpResponse {
    HttpResponse::new(200, "OK".to_string(), body.to_string())
}

pub fn status(code: u16, text: &str) -> HttpResponse {
    HttpResponse::new(code, text.to_string(), String::new())
}

pub fn analyzer(pipeline: Pipeline, hub: FakeHub) -> Analyzer<FakeHub> {
    let config = Config {
        pipeline,
        ..Config::default()
    };

    Analyzer::from_config(Client::new(hub), &config).unwrap()
}
