//! Multipart encoding of a bundle.
//!
//! The whole body is assembled in memory; no temp files are staged on any
//! path. Parts: `metadata`, `metrics` and `tests` as JSON text, then one
//! `attachment` part per file carrying its original filename.

use reqwest::multipart::{Form, Part};
use serde::Serialize;

use relay_core::Bundle;

use crate::error::{SubmitError, SubmitResult};

const JSON_MIME: &str = "application/json";

fn json_part(name: &'static str, value: &impl Serialize) -> SubmitResult<Part> {
    let text = serde_json::to_string(value).map_err(|e| SubmitError::Encode {
        message: format!("failed to encode {} part: {}", name, e),
    })?;
    Part::text(text)
        .mime_str(JSON_MIME)
        .map_err(|e| SubmitError::Encode {
            message: format!("failed to build {} part: {}", name, e),
        })
}

/// Serialize a bundle into a multipart form.
pub(crate) fn bundle_form(bundle: &Bundle) -> SubmitResult<Form> {
    let mut payload = Form::new()
        .part("metadata", json_part("metadata", &bundle.metadata)?)
        .part("metrics", json_part("metrics", &bundle.metrics)?)
        .part("tests", json_part("tests", &bundle.tests)?);

    for attachment in &bundle.attachments {
        payload = payload.part(
            "attachment",
            Part::bytes(attachment.data.clone()).file_name(attachment.filename.clone()),
        );
    }

    Ok(payload)
}
