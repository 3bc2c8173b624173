//! Template identity, placeholder detection, and the fixed data catalog.
//!
//! A template is identified by its path alone. The identifier set is closed:
//! the two paths below are the only ones the batch recognizes, and each maps
//! to one hardcoded [`TemplateData`] set. Template *content* is read at
//! render time and never cached.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use serde::Serialize;

/// Opening placeholder marker recognized in template text.
pub const MARKER_OPEN: &str = "{{";
/// Closing placeholder marker recognized in template text.
pub const MARKER_CLOSE: &str = "}}";

/// Heuristic placeholder presence check.
///
/// Passes only when both literal marker substrings occur somewhere in the
/// text. This is intentionally not a parse: matching and nesting are the
/// rendering engine's concern.
pub fn has_placeholders(text: &str) -> bool {
    text.contains(MARKER_OPEN) && text.contains(MARKER_CLOSE)
}

// ── Template identity ─────────────────────────────────────────────────────────

/// The closed set of known templates.
///
/// Selection is a verbatim string match on the template path; anything else
/// is an unknown template and is skipped before any file I/O.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateKind {
    Service,
    Deployment,
}

impl TemplateKind {
    /// Identifier for the service manifest template.
    pub const SERVICE_PATH: &'static str = "templates/service.j2";
    /// Identifier for the deployment manifest template.
    pub const DEPLOYMENT_PATH: &'static str = "templates/deployment.j2";

    /// Match a path verbatim against the known identifiers.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.to_str() {
            Some(Self::SERVICE_PATH) => Some(Self::Service),
            Some(Self::DEPLOYMENT_PATH) => Some(Self::Deployment),
            _ => None,
        }
    }

    /// The canonical path string this kind was matched from.
    pub fn identifier(&self) -> &'static str {
        match self {
            Self::Service => Self::SERVICE_PATH,
            Self::Deployment => Self::DEPLOYMENT_PATH,
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Service => write!(f, "service"),
            Self::Deployment => write!(f, "deployment"),
        }
    }
}

// ── Substitution values ───────────────────────────────────────────────────────

/// A single substitution value.
///
/// Serializes untagged so the rendering engine sees plain scalars
/// (`Null` becomes the engine's `none`).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ScalarValue {
    Str(String),
    Int(i64),
    Bool(bool),
    Null,
}

impl From<&str> for ScalarValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<i64> for ScalarValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<bool> for ScalarValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// A fixed mapping from variable name to scalar value.
///
/// Ordered so report and render behavior is deterministic. An *empty*
/// mapping is valid input to the renderer; only an absent mapping (no
/// catalog entry) is the "missing data" condition.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TemplateData {
    values: BTreeMap<String, ScalarValue>,
}

impl TemplateData {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<ScalarValue>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    /// Look up a value by variable name.
    pub fn get(&self, name: &str) -> Option<&ScalarValue> {
        self.values.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }
}

// ── Fixed data sets ───────────────────────────────────────────────────────────

/// Substitution data for the service manifest.
pub fn service_data() -> TemplateData {
    TemplateData::new()
        .with("service_apiVersion", "v1")
        .with("service_kind", "Service")
        .with("service_name", "my-service")
        .with("service_selector_name", "MyApp")
        .with("service_port_name", "http")
        .with("service_protocol", "TCP")
        .with("service_port", 80)
        .with("service_targetPort", 9376)
        .with("service_type", "ClusterIP")
}

/// Substitution data for the deployment manifest.
pub fn deployment_data() -> TemplateData {
    TemplateData::new()
        .with("deployment_apiversion", "BBSI-PROD")
        .with("deployment_kind", "deployment")
        .with("deployment_name", "nginx-deployment")
        .with("deployment_app_name_label", "nginx")
        .with("deployment_metadata", ScalarValue::Null)
        .with("deployment_annotations", ScalarValue::Null)
        .with("deployment_spec", false)
        .with("deployment_spec_replicas", 3)
        .with("deployment_spec_selector", ScalarValue::Null)
        .with("deployment_image_name", "nginx:1.14.2")
        .with("deployment_container_name", "nginx")
        .with("deployment_port", 80)
        .with("readiness_probe_path", "ref-data/management/health/readiness")
        .with("readiness_probe_type", "httpGet")
        .with("readiness_probe_port", 80)
        .with("readiness_probe_initialDelaySeconds", 100)
        .with("readiness_probe_periodSeconds", 20)
        .with("readiness_probe_timeoutSeconds", 10)
        .with("readiness_probe_failureThreshold", ScalarValue::Null)
        .with("liveness_probe_path", "ref-data/management/health/liveness")
        .with("liveness_probe_type", "httpGet")
        .with("liveness_probe_port", 80)
}

// ── Data catalog ──────────────────────────────────────────────────────────────

/// The `TemplateKind → TemplateData` table for one batch run.
///
/// Constructed once at the start of the run and passed by reference into the
/// render step — no ambient global state. [`DataCatalog::standard`] carries
/// the two fixed data sets; tests build sparse catalogs to exercise the
/// missing-data path.
#[derive(Debug, Clone)]
pub struct DataCatalog {
    entries: BTreeMap<TemplateKind, TemplateData>,
}

impl DataCatalog {
    /// Catalog with the fixed service and deployment data sets.
    pub fn standard() -> Self {
        let mut entries = BTreeMap::new();
        entries.insert(TemplateKind::Service, service_data());
        entries.insert(TemplateKind::Deployment, deployment_data());
        Self { entries }
    }

    /// Catalog with no entries; every lookup reports missing data.
    pub fn empty() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Register (or replace) the data set for a kind.
    pub fn insert(&mut self, kind: TemplateKind, data: TemplateData) {
        self.entries.insert(kind, data);
    }

    /// The data set for a kind, or `None` when the mapping is absent.
    pub fn get(&self, kind: TemplateKind) -> Option<&TemplateData> {
        self.entries.get(&kind)
    }
}

impl Default for DataCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
