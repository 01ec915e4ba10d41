use std::time::Duration;

use reqwest::Client;
use serde_json::Value;

use crate::{Error, Result};
use trove_config::Embeddings;

/// Cheap liveness probe against the local embedding service. Bounded by
/// `probe_timeout_ms`; any transport failure or non-200 status reads as
/// "not available" rather than an error.
pub async fn is_available(cfg: &Embeddings) -> bool {
	let Ok(client) =
		Client::builder().timeout(Duration::from_millis(cfg.probe_timeout_ms)).build()
	else {
		return false;
	};

	match client.get(&cfg.api_base).send().await {
		Ok(res) => res.status() == reqwest::StatusCode::OK,
		Err(_) => false,
	}
}

/// Generates an embedding for `text` via the service's embed endpoint.
pub async fn embed(cfg: &Embeddings, text: &str) -> Result<Vec<f64>> {
	if text.trim().is_empty() {
		return Err(Error::EmptyInput);
	}

	let client = Client::builder().timeout(Duration::from_millis(cfg.timeout_ms)).build()?;
	let url = format!("{}/api/embed", cfg.api_base);
	let body = serde_json::json!({
		"model": cfg.model,
		"input": text,
	});
	let res = client.post(url).json(&body).send().await?;
	let json: Value = res.error_for_status()?.json().await?;

	parse_embed_response(json)
}

/// Checks that the configured model is present on the service.
pub async fn check_model(cfg: &Embeddings) -> Result<()> {
	let client = Client::builder().timeout(Duration::from_millis(cfg.timeout_ms)).build()?;
	let url = format!("{}/api/tags", cfg.api_base);
	let res = client.get(url).send().await?;
	let json: Value = res.error_for_status()?.json().await?;

	if !model_listed(&json, &cfg.model)? {
		return Err(Error::ModelNotFound { model: cfg.model.clone() });
	}

	Ok(())
}

fn model_listed(json: &Value, model: &str) -> Result<bool> {
	let models = json.get("models").and_then(|v| v.as_array()).ok_or_else(|| {
		Error::InvalidResponse { message: "Model list response is missing models array.".to_string() }
	})?;

	Ok(models
		.iter()
		.filter_map(|item| item.get("name").and_then(|v| v.as_str()))
		.any(|name| name == model))
}

fn parse_embed_response(json: Value) -> Result<Vec<f64>> {
	let rows = json.get("embeddings").and_then(|v| v.as_array()).ok_or_else(|| {
		Error::InvalidResponse { message: "Embed response is missing embeddings array.".to_string() }
	})?;
	let Some(first) = rows.first() else {
		return Err(Error::EmptyResponse);
	};
	let values = first.as_array().ok_or_else(|| Error::InvalidResponse {
		message: "Embedding row must be an array.".to_string(),
	})?;
	let mut out = Vec::with_capacity(values.len());

	for value in values {
		let number = value.as_f64().ok_or_else(|| Error::InvalidResponse {
			message: "Embedding value must be numeric.".to_string(),
		})?;

		out.push(number);
	}

	if out.is_empty() {
		return Err(Error::EmptyResponse);
	}

	Ok(out)
}
