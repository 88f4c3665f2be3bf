/// The hosted Inference API root
pub static INFERENCE_API_URL: &str = "https://api-inference.huggingface.co/models";

/// Build the endpoint URL for a model on the hosted Inference API
pub fn inference_endpoint(base_url: &str, model_name: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        model_name.trim_start_matches('/')
    )
}
