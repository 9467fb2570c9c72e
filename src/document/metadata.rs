use serde::{Deserialize, Deserializer, Serialize};

use crate::types::BundleError;

/// Schema version written by this crate.
pub const CURRENT_VERSION: u32 = 2;

/// Type identifiers with a known meaning.
///
/// `Metadata` stores the type as free text so that bundles written by newer
/// tools still read; this enum is only a lookup over the identifiers we know.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WellKnownType {
    Markdown,
    Html,
    PlainText,
    Package,
}

impl WellKnownType {
    pub fn as_str(&self) -> &'static str {
        match self {
            WellKnownType::Markdown => "net.daringfireball.markdown",
            WellKnownType::Html => "public.html",
            WellKnownType::PlainText => "public.plain-text",
            WellKnownType::Package => "org.textbundle.package",
        }
    }

    pub fn from_identifier(identifier: &str) -> Option<Self> {
        [
            WellKnownType::Markdown,
            WellKnownType::Html,
            WellKnownType::PlainText,
            WellKnownType::Package,
        ]
        .into_iter()
        .find(|t| t.as_str() == identifier)
    }
}

/// The `info.json` record.
///
/// Field order here is the serialized key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(rename = "type", default = "default_type")]
    pub bundle_type: String,

    #[serde(default, deserialize_with = "null_as_false")]
    pub transient: bool,

    #[serde(rename = "creatorURL", default, skip_serializing_if = "Option::is_none")]
    pub creator_url: Option<String>,

    #[serde(rename = "creatorIdentifier", default, skip_serializing_if = "Option::is_none")]
    pub creator_identifier: Option<String>,

    #[serde(rename = "sourceURL", default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
}

fn default_version() -> u32 {
    CURRENT_VERSION
}

fn default_type() -> String {
    WellKnownType::Markdown.as_str().to_string()
}

fn null_as_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

impl Default for Metadata {
    fn default() -> Self {
        Metadata {
            version: CURRENT_VERSION,
            bundle_type: default_type(),
            transient: false,
            creator_url: None,
            creator_identifier: None,
            source_url: None,
        }
    }
}

impl Metadata {
    pub fn new(bundle_type: impl Into<String>) -> Self {
        Metadata {
            bundle_type: bundle_type.into(),
            ..Metadata::default()
        }
    }

    pub fn with_transient(mut self, transient: bool) -> Self {
        self.transient = transient;
        self
    }

    pub fn with_creator(mut self, identifier: impl Into<String>, url: Option<String>) -> Self {
        self.creator_identifier = Some(identifier.into());
        self.creator_url = url;
        self
    }

    pub fn with_source_url(mut self, url: impl Into<String>) -> Self {
        self.source_url = Some(url.into());
        self
    }

    pub fn well_known_type(&self) -> Option<WellKnownType> {
        WellKnownType::from_identifier(&self.bundle_type)
    }

    /// Serialize to compact JSON, as stored in `info.json`.
    pub fn encode(&self) -> Result<Vec<u8>, BundleError> {
        serde_json::to_vec(self)
            .map_err(|e| BundleError::invalid_format(format!("cannot encode metadata: {e}")))
    }

    /// Parse an `info.json` payload. Unknown keys are ignored.
    pub fn decode(bytes: &[u8]) -> Result<Self, BundleError> {
        serde_json::from_slice(bytes)
            .map_err(|e| BundleError::invalid_format(format!("malformed info.json: {e}")))
    }
}
