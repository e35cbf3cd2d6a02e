use gloo_net::http::Request;
use log::info;
use serde::Serialize;
use serde_json::Value;
use wasm_bindgen::JsValue;
use web_sys::FormData;

use super::error::ContactError;
use super::form::ContactPayload;
use crate::config;

/// Flattens a struct of string fields into (name, value) pairs for a
/// multipart body.
pub fn encode_form_fields<T: Serialize>(payload: &T) -> Result<Vec<(String, String)>, ContactError> {
    let value = serde_json::to_value(payload).map_err(|e| ContactError::Encoding(e.to_string()))?;
    let Value::Object(map) = value else {
        return Err(ContactError::Encoding("payload is not a struct".to_string()));
    };
    map.into_iter()
        .map(|(name, value)| match value {
            Value::String(s) => Ok((name, s)),
            other => Err(ContactError::Encoding(format!("field '{}' is not text: {}", name, other))),
        })
        .collect()
}

fn js_error(err: JsValue) -> ContactError {
    ContactError::Encoding(format!("{:?}", err))
}

fn to_form_data(payload: &ContactPayload) -> Result<FormData, ContactError> {
    let form = FormData::new().map_err(js_error)?;
    for (name, value) in encode_form_fields(payload)? {
        form.append_with_str(&name, &value).map_err(js_error)?;
    }
    Ok(form)
}

/// Posts contact submissions to the Basin form endpoint. One call, no retries.
#[derive(Debug, Clone, PartialEq)]
pub struct BasinClient {
    endpoint: String,
}

impl Default for BasinClient {
    fn default() -> Self {
        Self::new(config::basin_endpoint())
    }
}

impl BasinClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    pub async fn submit(&self, payload: &ContactPayload) -> Result<(), ContactError> {
        let body = to_form_data(payload)?;
        info!("Sending contact form for {} to {}", payload.name, self.endpoint);

        let response = Request::post(&self.endpoint)
            .body(body)
            .send()
            .await
            .map_err(|e| ContactError::Transport(e.to_string()))?;

        if !response.ok() {
            return Err(ContactError::Rejected {
                status: response.status(),
                reason: response.status_text(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> ContactPayload {
        ContactPayload {
            name: "Jane Doe".to_string(),
            email: "jane@x.com".to_string(),
            company: String::new(),
            phone: "+1 5551234".to_string(),
            message: "Hello".to_string(),
        }
    }

    #[test]
    fn encodes_every_payload_field() {
        let mut fields = encode_form_fields(&payload()).unwrap();
        fields.sort();
        assert_eq!(
            fields,
            vec![
                ("company".to_string(), String::new()),
                ("email".to_string(), "jane@x.com".to_string()),
                ("message".to_string(), "Hello".to_string()),
                ("name".to_string(), "Jane Doe".to_string()),
                ("phone".to_string(), "+1 5551234".to_string()),
            ]
        );
    }

    #[test]
    fn country_code_is_not_sent_separately() {
        let fields = encode_form_fields(&payload()).unwrap();
        assert!(fields.iter().all(|(name, _)| name != "country_code"));
    }

    #[test]
    fn non_text_fields_are_refused() {
        #[derive(Serialize)]
        struct Odd {
            count: u32,
        }
        assert!(matches!(
            encode_form_fields(&Odd { count: 3 }),
            Err(ContactError::Encoding(_))
        ));
    }
}
