use std::collections::HashSet;

use serde::Serialize;
use serde_json::{json, Map, Value};
use thiserror::Error;

use super::{ParamSpec, ParamType};

/// HTTP methods a tool may use.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }

    /// Whether requests with this method carry a JSON body.
    pub fn has_body(&self) -> bool {
        matches!(self, Self::Post | Self::Put)
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// How the credential is attached to an outbound request.
///
/// - `Cookie`: `Cookie: MOBI2GO_ADMIN=<secret>`
/// - `Bearer`: `Authorization: Bearer <secret>`
/// - `None`: no auth header (public endpoints)
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AuthScheme {
    Cookie,
    Bearer,
    None,
}

/// How arguments map onto the JSON request body.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BodyShape {
    /// No request body.
    None,
    /// One argument is sent verbatim as the body. `fallback` is sent when the
    /// argument is absent.
    Argument {
        name: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        fallback: Option<Value>,
    },
    /// The named arguments are collected into a JSON object, keyed by name.
    Fields { names: Vec<String> },
}

impl BodyShape {
    pub fn argument(name: impl Into<String>) -> Self {
        Self::Argument {
            name: name.into(),
            fallback: None,
        }
    }

    pub fn fields(names: &[&str]) -> Self {
        Self::Fields {
            names: names.iter().map(|n| n.to_string()).collect(),
        }
    }

    /// Parameter names consumed by this shape.
    pub fn parameter_names(&self) -> Vec<&str> {
        match self {
            Self::None => vec![],
            Self::Argument { name, .. } => vec![name.as_str()],
            Self::Fields { names } => names.iter().map(String::as_str).collect(),
        }
    }
}

/// How a successful response body is decoded.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "kind", content = "message", rename_all = "snake_case")]
pub enum ResponseMode {
    /// Parse the body as JSON.
    Json,
    /// Return the body as raw text (HTML receipts, reports, CSV).
    Text,
    /// Ignore the body and report `{"status": <code>, "message": <message>}`.
    Acknowledge(String),
}

/// A segment of a parsed path template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment<'a> {
    Literal(&'a str),
    Placeholder(&'a str),
}

/// Descriptor construction errors, reported at registration time.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DescriptorError {
    #[error("tool name must not be empty")]
    EmptyName,

    #[error("parameter '{0}' is declared more than once")]
    DuplicateParameter(String),

    #[error("malformed path segment '{0}'")]
    MalformedTemplate(String),

    #[error("parameter '{0}' restricts values but is not a string")]
    NonStringEnum(String),

    #[error("path placeholder '{{{0}}}' has no matching parameter")]
    UnresolvedPlaceholder(String),

    #[error("path parameter '{0}' must be a required scalar")]
    InvalidPathParameter(String),

    #[error("query parameter '{0}' is not a declared scalar parameter")]
    InvalidQueryParameter(String),

    #[error("body parameter '{0}' is not declared")]
    UnknownBodyParameter(String),

    #[error("{0} requests cannot carry a body")]
    BodyNotAllowed(&'static str),
}

/// Declarative description of one remote operation exposed as a tool.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ToolDescriptor {
    /// Dispatch key; unique within a registry.
    pub name: String,
    pub description: String,
    pub parameters: Vec<ParamSpec>,
    pub method: HttpMethod,
    /// Path relative to the API base URL, with `{name}` placeholders.
    pub path_template: String,
    /// Parameters serialized into the query string.
    pub query_params: Vec<String>,
    pub body: BodyShape,
    pub auth: AuthScheme,
    pub response: ResponseMode,
}

impl ToolDescriptor {
    pub fn new(name: impl Into<String>, method: HttpMethod, path_template: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            parameters: Vec::new(),
            method,
            path_template: path_template.into(),
            query_params: Vec::new(),
            body: BodyShape::None,
            auth: AuthScheme::Cookie,
            response: ResponseMode::Json,
        }
    }

    pub fn get(name: impl Into<String>, path_template: impl Into<String>) -> Self {
        Self::new(name, HttpMethod::Get, path_template)
    }

    pub fn post(name: impl Into<String>, path_template: impl Into<String>) -> Self {
        Self::new(name, HttpMethod::Post, path_template)
    }

    pub fn put(name: impl Into<String>, path_template: impl Into<String>) -> Self {
        Self::new(name, HttpMethod::Put, path_template)
    }

    pub fn delete(name: impl Into<String>, path_template: impl Into<String>) -> Self {
        Self::new(name, HttpMethod::Delete, path_template)
    }

    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Declare a parameter consumed by the path template or the body.
    pub fn param(mut self, spec: ParamSpec) -> Self {
        self.parameters.push(spec);
        self
    }

    /// Declare a parameter sent in the query string.
    pub fn query(mut self, spec: ParamSpec) -> Self {
        self.query_params.push(spec.name.clone());
        self.parameters.push(spec);
        self
    }

    pub fn body(mut self, body: BodyShape) -> Self {
        self.body = body;
        self
    }

    pub fn auth(mut self, auth: AuthScheme) -> Self {
        self.auth = auth;
        self
    }

    pub fn response(mut self, response: ResponseMode) -> Self {
        self.response = response;
        self
    }

    /// Look up a declared parameter by name.
    pub fn parameter(&self, name: &str) -> Option<&ParamSpec> {
        self.parameters.iter().find(|p| p.name == name)
    }

    /// Split the path template into literal and placeholder segments.
    ///
    /// Empty segments (leading, trailing or doubled slashes) are skipped.
    pub fn segments(&self) -> Result<Vec<PathSegment<'_>>, DescriptorError> {
        self.path_template
            .split('/')
            .filter(|s| !s.is_empty())
            .map(|segment| {
                let opens = segment.matches('{').count();
                let closes = segment.matches('}').count();
                match (opens, closes) {
                    (0, 0) => Ok(PathSegment::Literal(segment)),
                    (1, 1) if segment.starts_with('{') && segment.ends_with('}') => {
                        let name = &segment[1..segment.len() - 1];
                        if name.is_empty() {
                            Err(DescriptorError::MalformedTemplate(segment.to_string()))
                        } else {
                            Ok(PathSegment::Placeholder(name))
                        }
                    }
                    _ => Err(DescriptorError::MalformedTemplate(segment.to_string())),
                }
            })
            .collect()
    }

    /// Names of the placeholders in the path template.
    pub fn placeholders(&self) -> Result<Vec<&str>, DescriptorError> {
        Ok(self
            .segments()?
            .into_iter()
            .filter_map(|s| match s {
                PathSegment::Placeholder(name) => Some(name),
                PathSegment::Literal(_) => None,
            })
            .collect())
    }

    /// Verify the descriptor is internally consistent.
    ///
    /// Allowed value sets apply to string parameters only. Every placeholder
    /// must name a required scalar parameter, every query parameter must be a
    /// declared scalar, and body shapes may only reference declared parameters
    /// on methods that carry a body.
    pub fn check(&self) -> Result<(), DescriptorError> {
        if self.name.trim().is_empty() {
            return Err(DescriptorError::EmptyName);
        }

        let mut seen = HashSet::new();
        for param in &self.parameters {
            if !seen.insert(param.name.as_str()) {
                return Err(DescriptorError::DuplicateParameter(param.name.clone()));
            }
            if !param.allowed.is_empty() && param.kind != ParamType::String {
                return Err(DescriptorError::NonStringEnum(param.name.clone()));
            }
        }

        for placeholder in self.placeholders()? {
            let param = self
                .parameter(placeholder)
                .ok_or_else(|| DescriptorError::UnresolvedPlaceholder(placeholder.to_string()))?;
            if !(param.required || param.default.is_some()) || !param.kind.is_scalar() {
                return Err(DescriptorError::InvalidPathParameter(param.name.clone()));
            }
        }

        for name in &self.query_params {
            match self.parameter(name) {
                Some(param) if param.kind.is_scalar() => {}
                _ => return Err(DescriptorError::InvalidQueryParameter(name.clone())),
            }
        }

        if self.body != BodyShape::None && !self.method.has_body() {
            return Err(DescriptorError::BodyNotAllowed(self.method.as_str()));
        }
        for name in self.body.parameter_names() {
            if self.parameter(name).is_none() {
                return Err(DescriptorError::UnknownBodyParameter(name.to_string()));
            }
        }

        Ok(())
    }

    /// MCP input schema for this tool.
    pub fn input_schema(&self) -> Map<String, Value> {
        let properties: Map<String, Value> = self
            .parameters
            .iter()
            .map(|p| (p.name.clone(), p.schema()))
            .collect();
        let required: Vec<&str> = self
            .parameters
            .iter()
            .filter(|p| p.required)
            .map(|p| p.name.as_str())
            .collect();

        let mut schema = Map::new();
        schema.insert("type".into(), json!("object"));
        schema.insert("properties".into(), Value::Object(properties));
        schema.insert("required".into(), json!(required));
        schema
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order_tool() -> ToolDescriptor {
        ToolDescriptor::get("read_order", "/headoffice/{headoffice}/orders/{id}")
            .param(ParamSpec::string("headoffice", "HeadOffice").required())
            .param(ParamSpec::string("id", "Order ID").required())
    }

    #[test]
    fn test_segments_split_literals_and_placeholders() {
        let tool = order_tool();
        assert_eq!(
            tool.segments().unwrap(),
            vec![
                PathSegment::Literal("headoffice"),
                PathSegment::Placeholder("headoffice"),
                PathSegment::Literal("orders"),
                PathSegment::Placeholder("id"),
            ]
        );
    }

    #[test]
    fn test_check_accepts_consistent_descriptor() {
        assert_eq!(order_tool().check(), Ok(()));
    }

    #[test]
    fn test_check_rejects_unresolved_placeholder() {
        let tool = ToolDescriptor::get("broken", "/headoffice/{headoffice}");
        assert_eq!(
            tool.check(),
            Err(DescriptorError::UnresolvedPlaceholder("headoffice".into()))
        );
    }

    #[test]
    fn test_check_rejects_optional_path_parameter() {
        let tool = ToolDescriptor::get("broken", "/headoffice/{headoffice}")
            .param(ParamSpec::string("headoffice", "HeadOffice"));
        assert_eq!(
            tool.check(),
            Err(DescriptorError::InvalidPathParameter("headoffice".into()))
        );
    }

    #[test]
    fn test_check_rejects_partial_placeholder() {
        let tool = ToolDescriptor::get("broken", "/report/{kind}.html")
            .param(ParamSpec::string("kind", "Kind").required());
        assert_eq!(
            tool.check(),
            Err(DescriptorError::MalformedTemplate("{kind}.html".into()))
        );
    }

    #[test]
    fn test_check_rejects_body_on_get() {
        let tool = ToolDescriptor::get("broken", "/things")
            .param(ParamSpec::object("attributes", "Attributes"))
            .body(BodyShape::fields(&["attributes"]));
        assert_eq!(tool.check(), Err(DescriptorError::BodyNotAllowed("GET")));
    }

    #[test]
    fn test_check_rejects_undeclared_body_parameter() {
        let tool = ToolDescriptor::post("broken", "/things").body(BodyShape::argument("data"));
        assert_eq!(
            tool.check(),
            Err(DescriptorError::UnknownBodyParameter("data".into()))
        );
    }

    #[test]
    fn test_check_rejects_object_query_parameter() {
        let tool = ToolDescriptor::get("broken", "/things")
            .query(ParamSpec::object("filter", "Filter"));
        assert_eq!(
            tool.check(),
            Err(DescriptorError::InvalidQueryParameter("filter".into()))
        );
    }

    #[test]
    fn test_check_rejects_allowed_values_on_non_string() {
        let tool = ToolDescriptor::get("broken", "/things")
            .query(ParamSpec::integer("limit", "Limit").one_of(&["10", "20"]));
        assert_eq!(
            tool.check(),
            Err(DescriptorError::NonStringEnum("limit".into()))
        );
    }

    #[test]
    fn test_check_rejects_duplicate_parameter() {
        let tool = order_tool().param(ParamSpec::string("id", "Again"));
        assert_eq!(
            tool.check(),
            Err(DescriptorError::DuplicateParameter("id".into()))
        );
    }

    #[test]
    fn test_input_schema_lists_required_parameters() {
        let schema = order_tool()
            .query(ParamSpec::string("fields", "Fields"))
            .input_schema();

        assert_eq!(schema["type"], json!("object"));
        assert_eq!(schema["required"], json!(["headoffice", "id"]));
        assert!(schema["properties"].get("fields").is_some());
    }
}
