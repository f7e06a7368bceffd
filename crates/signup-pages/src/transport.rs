//! Form submission transport
//!
//! The controller never talks to the network directly. It builds a
//! [`SubmitRequest`] and hands it to a [`SubmitTransport`], which returns the
//! raw status and body. Deciding what counts as success (2xx plus a JSON
//! body) stays in the controller so every transport behaves the same.
//!
//! [`HttpTransport`] is the production implementation. It sends the fields as
//! `multipart/form-data` with `Accept: application/json`, through the browser's
//! fetch API on wasm32 and through hyper elsewhere.

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::multipart::Form;
use thiserror::Error;

/// Ordered `(name, value)` pairs collected from the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields(Vec<(String, String)>);

impl FormFields {
	/// Creates an empty field set.
	pub fn new() -> Self {
		Self::default()
	}

	/// Appends a field. Repeated names are kept, as `FormData` does.
	pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
		self.0.push((name.into(), value.into()));
	}

	/// First value for `name`.
	pub fn get(&self, name: &str) -> Option<&str> {
		self.0
			.iter()
			.find(|(key, _)| key == name)
			.map(|(_, value)| value.as_str())
	}

	/// Iterates over the fields in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
	}

	/// Number of fields.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Whether there are no fields.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Builds the multipart body for these fields.
	pub fn to_multipart(&self) -> Form {
		self.0.iter().fold(Form::new(), |form, (name, value)| {
			form.text(name.clone(), value.clone())
		})
	}
}

impl<K, V> FromIterator<(K, V)> for FormFields
where
	K: Into<String>,
	V: Into<String>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Self(
			iter.into_iter()
				.map(|(k, v)| (k.into(), v.into()))
				.collect(),
		)
	}
}

/// A single signup POST.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitRequest {
	/// The form's action URL
	pub action: String,
	/// The form's fields
	pub fields: FormFields,
}

/// Raw response handed back by a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
	/// HTTP status code
	pub status: u16,
	/// Response body as text
	pub body: String,
}

impl TransportResponse {
	/// Creates a response.
	pub fn new(status: u16, body: impl Into<String>) -> Self {
		Self {
			status,
			body: body.into(),
		}
	}

	/// Whether the status is in the 2xx range (`Response.ok`).
	pub fn is_ok(&self) -> bool {
		(200..300).contains(&self.status)
	}
}

/// Why a submission failed.
///
/// Every variant produces the same user-facing message; the distinction is
/// kept for logging.
#[derive(Debug, Error)]
pub enum SubmitError {
	/// The server answered with a non-2xx status.
	#[error("Submit failed with status: {0}")]
	Status(u16),

	/// The request could not be sent or the body could not be read.
	#[error("Transport error: {0}")]
	Transport(String),

	/// The server answered 2xx but the body was not JSON.
	#[error("Invalid JSON response: {0}")]
	Parse(#[source] serde_json::Error),

	/// The form's fields could not be collected.
	#[error("Failed to read form data: {0}")]
	FormData(String),
}

impl From<reqwest::Error> for SubmitError {
	fn from(err: reqwest::Error) -> Self {
		Self::Transport(err.to_string())
	}
}

/// Sends a [`SubmitRequest`] and returns the raw response.
///
/// Futures are not required to be `Send`: the controller runs on the
/// browser's single-threaded event loop.
#[async_trait(?Send)]
pub trait SubmitTransport {
	/// Performs the POST. Only transport-level failures are errors; any
	/// HTTP status is returned as a [`TransportResponse`].
	async fn post(&self, request: &SubmitRequest) -> Result<TransportResponse, SubmitError>;
}

/// reqwest-backed [`SubmitTransport`]
#[derive(Clone)]
pub struct HttpTransport {
	client: reqwest::Client,
}

impl Default for HttpTransport {
	fn default() -> Self {
		Self::new()
	}
}

impl std::fmt::Debug for HttpTransport {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("HttpTransport").finish_non_exhaustive()
	}
}

impl HttpTransport {
	/// Creates a transport with a default client.
	pub fn new() -> Self {
		Self {
			client: reqwest::Client::new(),
		}
	}

	/// Creates a transport around an existing client.
	pub fn with_client(client: reqwest::Client) -> Self {
		Self { client }
	}
}

#[async_trait(?Send)]
impl SubmitTransport for HttpTransport {
	async fn post(&self, request: &SubmitRequest) -> Result<TransportResponse, SubmitError> {
		let response = self
			.client
			.post(&request.action)
			.header(ACCEPT, "application/json")
			.multipart(request.fields.to_multipart())
			.send()
			.await?;

		let status = response.status().as_u16();
		let body = response.text().await?;

		Ok(TransportResponse { status, body })
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(200, true)]
	#[case(201, true)]
	#[case(204, true)]
	#[case(299, true)]
	#[case(199, false)]
	#[case(301, false)]
	#[case(404, false)]
	#[case(500, false)]
	fn test_response_is_ok(#[case] status: u16, #[case] ok: bool) {
		assert_eq!(TransportResponse::new(status, "").is_ok(), ok);
	}

	#[rstest]
	fn test_form_fields_keep_order_and_duplicates() {
		let mut fields = FormFields::new();
		fields.push("email", "user@example.com");
		fields.push("tag", "a");
		fields.push("tag", "b");

		assert_eq!(fields.len(), 3);
		assert_eq!(fields.get("tag"), Some("a"));
		assert_eq!(fields.get("missing"), None);
		assert_eq!(
			fields.iter().collect::<Vec<_>>(),
			vec![("email", "user@example.com"), ("tag", "a"), ("tag", "b")]
		);
	}

	#[rstest]
	fn test_form_fields_from_iter() {
		let fields: FormFields = [("email", "user@example.com")].into_iter().collect();
		assert!(!fields.is_empty());
		assert_eq!(fields.get("email"), Some("user@example.com"));
	}

	#[rstest]
	fn test_submit_error_messages() {
		assert_eq!(
			SubmitError::Status(500).to_string(),
			"Submit failed with status: 500"
		);
		let parse = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
		assert!(
			SubmitError::Parse(parse)
				.to_string()
				.starts_with("Invalid JSON response")
		);
	}
}
