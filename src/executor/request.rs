//! Argument validation and request construction.
//!
//! Everything here is pure: no I/O happens until the executor sends the
//! request built from these pieces.

use reqwest::Url;
use serde_json::{Map, Value};

use crate::models::{Arguments, BodyShape, ParamSpec, PathSegment, ToolDescriptor, ToolError};

/// Look up an argument, treating JSON `null` as absent.
fn argument<'a>(arguments: &'a Arguments, name: &str) -> Option<&'a Value> {
    arguments.get(name).filter(|v| !v.is_null())
}

/// Argument value, falling back to the parameter default.
fn effective<'a>(arguments: &'a Arguments, spec: &'a ParamSpec) -> Option<&'a Value> {
    argument(arguments, &spec.name).or(spec.default.as_ref())
}

/// Check presence, type and enum membership of every declared parameter.
///
/// Undeclared arguments are ignored; they are never forwarded.
pub fn validate(descriptor: &ToolDescriptor, arguments: &Arguments) -> Result<(), ToolError> {
    for spec in &descriptor.parameters {
        let Some(value) = argument(arguments, &spec.name) else {
            if spec.required {
                return Err(ToolError::Validation(format!(
                    "missing required parameter '{}'",
                    spec.name
                )));
            }
            continue;
        };

        if !spec.kind.accepts(value) {
            return Err(ToolError::Validation(format!(
                "parameter '{}' must be of type {}, got {}",
                spec.name,
                spec.kind.as_str(),
                json_type(value)
            )));
        }

        if !spec.allowed.is_empty() {
            let allowed = value
                .as_str()
                .map(|s| spec.allowed.iter().any(|a| a == s))
                .unwrap_or(false);
            if !allowed {
                return Err(ToolError::Validation(format!(
                    "parameter '{}' must be one of: {}",
                    spec.name,
                    spec.allowed.join(", ")
                )));
            }
        }
    }

    let placeholders = descriptor
        .placeholders()
        .map_err(|e| ToolError::Validation(e.to_string()))?;
    for name in placeholders {
        if let Some(value) = descriptor
            .parameter(name)
            .and_then(|spec| effective(arguments, spec))
        {
            path_value(name, value)?;
        }
    }
    Ok(())
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Render a scalar for a URL. Strings are used as-is; booleans become
/// `true`/`false`; numbers keep their JSON form.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Render a path placeholder value.
///
/// `url` drops `.` and `..` segments on push and an empty string leaves a
/// bare slash, so all three are rejected here.
fn path_value(name: &str, value: &Value) -> Result<String, ToolError> {
    let text = scalar_text(value)
        .ok_or_else(|| ToolError::Validation(format!("missing path parameter '{}'", name)))?;
    match text.as_str() {
        "" => Err(ToolError::Validation(format!(
            "missing required parameter '{}'",
            name
        ))),
        "." | ".." => Err(ToolError::Validation(format!(
            "path parameter '{}' must not be '{}'",
            name, text
        ))),
        _ => Ok(text),
    }
}

/// Build the full request URL: base, substituted path, query string.
///
/// Path values are percent-encoded as single segments. Absent optional query
/// parameters are omitted entirely.
pub fn build_url(
    base_url: &Url,
    descriptor: &ToolDescriptor,
    arguments: &Arguments,
) -> Result<Url, ToolError> {
    let segments = descriptor
        .segments()
        .map_err(|e| ToolError::Validation(e.to_string()))?;

    let mut url = base_url.clone();
    {
        let mut path = url
            .path_segments_mut()
            .map_err(|_| ToolError::Validation("base URL cannot carry a path".into()))?;
        path.pop_if_empty();
        for segment in segments {
            match segment {
                PathSegment::Literal(literal) => {
                    path.push(literal);
                }
                PathSegment::Placeholder(name) => {
                    let value = descriptor
                        .parameter(name)
                        .and_then(|spec| effective(arguments, spec))
                        .ok_or_else(|| {
                            ToolError::Validation(format!("missing path parameter '{}'", name))
                        })?;
                    path.push(&path_value(name, value)?);
                }
            }
        }
    }

    let pairs: Vec<(&str, String)> = descriptor
        .query_params
        .iter()
        .filter_map(|name| {
            let spec = descriptor.parameter(name)?;
            let value = effective(arguments, spec)?;
            Some((name.as_str(), scalar_text(value)?))
        })
        .collect();

    if !pairs.is_empty() {
        url.query_pairs_mut().extend_pairs(pairs);
    }

    Ok(url)
}

/// JSON body for the request, if the descriptor's method and shape call for one.
pub fn build_body(descriptor: &ToolDescriptor, arguments: &Arguments) -> Option<Value> {
    if !descriptor.method.has_body() {
        return None;
    }

    match &descriptor.body {
        BodyShape::None => None,
        BodyShape::Argument { name, fallback } => descriptor
            .parameter(name)
            .and_then(|spec| effective(arguments, spec))
            .or(fallback.as_ref())
            .cloned(),
        BodyShape::Fields { names } => {
            let fields: Map<String, Value> = names
                .iter()
                .filter_map(|name| {
                    let spec = descriptor.parameter(name)?;
                    effective(arguments, spec).map(|v| (name.clone(), v.clone()))
                })
                .collect();
            Some(Value::Object(fields))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ParamSpec, ToolDescriptor};
    use serde_json::json;

    fn args(value: Value) -> Arguments {
        match value {
            Value::Object(map) => map,
            _ => panic!("arguments must be an object"),
        }
    }

    fn base() -> Url {
        Url::parse("https://www.mobi2go.com/api/1").unwrap()
    }

    fn customers_tool() -> ToolDescriptor {
        ToolDescriptor::get("search_customers", "/headoffice/{headoffice}/customers")
            .param(ParamSpec::string("headoffice", "HeadOffice").required())
            .query(ParamSpec::string("name", "Name"))
            .query(ParamSpec::boolean("is_subscriber", "Subscriber"))
            .query(ParamSpec::integer("limit", "Limit").default_value(20))
    }

    #[test]
    fn test_missing_required_parameter() {
        let err = validate(&customers_tool(), &args(json!({}))).unwrap_err();
        assert_eq!(
            err,
            ToolError::Validation("missing required parameter 'headoffice'".into())
        );
    }

    #[test]
    fn test_null_counts_as_missing() {
        let err = validate(&customers_tool(), &args(json!({ "headoffice": null })));
        assert!(matches!(err, Err(ToolError::Validation(_))));
    }

    #[test]
    fn test_type_mismatch() {
        let err = validate(
            &customers_tool(),
            &args(json!({ "headoffice": "ho", "limit": "ten" })),
        )
        .unwrap_err();
        assert_eq!(
            err,
            ToolError::Validation("parameter 'limit' must be of type integer, got string".into())
        );
    }

    #[test]
    fn test_enum_membership() {
        let tool = ToolDescriptor::get("report", "/report/{report_type}").param(
            ParamSpec::string("report_type", "Type")
                .one_of(&["weekly", "monthly"])
                .required(),
        );

        assert!(validate(&tool, &args(json!({ "report_type": "weekly" }))).is_ok());
        assert!(validate(&tool, &args(json!({ "report_type": "daily" }))).is_err());
    }

    #[test]
    fn test_undeclared_arguments_are_ignored() {
        let tool = customers_tool();
        let arguments = args(json!({ "headoffice": "ho", "bogus": { "x": 1 } }));

        assert!(validate(&tool, &arguments).is_ok());
        let url = build_url(&base(), &tool, &arguments).unwrap();
        assert!(!url.as_str().contains("bogus"));
    }

    #[test]
    fn test_url_applies_defaults_and_omits_absent_params() {
        let url = build_url(&base(), &customers_tool(), &args(json!({ "headoffice": "42" }))).unwrap();
        assert_eq!(
            url.as_str(),
            "https://www.mobi2go.com/api/1/headoffice/42/customers?limit=20"
        );
    }

    #[test]
    fn test_url_encodes_query_values_and_booleans() {
        let url = build_url(
            &base(),
            &customers_tool(),
            &args(json!({ "headoffice": "42", "name": "Jane Doe&Co", "is_subscriber": false, "limit": 5 })),
        )
        .unwrap();

        let query: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(
            query,
            vec![
                ("name".to_string(), "Jane Doe&Co".to_string()),
                ("is_subscriber".to_string(), "false".to_string()),
                ("limit".to_string(), "5".to_string()),
            ]
        );
        assert!(!url.as_str().contains(' '));
    }

    #[test]
    fn test_path_values_are_single_encoded_segments() {
        let tool = ToolDescriptor::get("orders", "/headoffice/{headoffice}/customers/{customer}/orders")
            .param(ParamSpec::string("headoffice", "HeadOffice").required())
            .param(ParamSpec::string("customer", "Customer").required());

        let url = build_url(
            &base(),
            &tool,
            &args(json!({ "headoffice": "Pizza Place", "customer": "a/b@example.com" })),
        )
        .unwrap();

        assert_eq!(
            url.path(),
            "/api/1/headoffice/Pizza%20Place/customers/a%2Fb@example.com/orders"
        );
    }

    fn delete_customer_tool() -> ToolDescriptor {
        ToolDescriptor::delete("delete_customer", "/headoffice/{headoffice}/customers/{customer}")
            .param(ParamSpec::string("headoffice", "HeadOffice").required())
            .param(ParamSpec::string("customer", "Customer").required())
    }

    #[test]
    fn test_dot_segments_are_rejected() {
        for dots in [".", ".."] {
            let arguments = args(json!({ "headoffice": "7", "customer": dots }));
            assert_eq!(
                validate(&delete_customer_tool(), &arguments),
                Err(ToolError::Validation(format!(
                    "path parameter 'customer' must not be '{}'",
                    dots
                )))
            );
            assert!(build_url(&base(), &delete_customer_tool(), &arguments).is_err());
        }
    }

    #[test]
    fn test_empty_path_value_counts_as_missing() {
        let arguments = args(json!({ "headoffice": "7", "customer": "" }));
        assert_eq!(
            validate(&delete_customer_tool(), &arguments),
            Err(ToolError::Validation("missing required parameter 'customer'".into()))
        );
        assert!(build_url(&base(), &delete_customer_tool(), &arguments).is_err());
    }

    #[test]
    fn test_dots_inside_path_value_are_kept() {
        let arguments = args(json!({ "headoffice": "7", "customer": "a..b@example.com" }));
        assert!(validate(&delete_customer_tool(), &arguments).is_ok());
        let url = build_url(&base(), &delete_customer_tool(), &arguments).unwrap();
        assert_eq!(url.path(), "/api/1/headoffice/7/customers/a..b@example.com");
    }

    #[test]
    fn test_base_url_trailing_slash_is_tolerated() {
        let base = Url::parse("http://localhost:8080/api/1/").unwrap();
        let url = build_url(&base, &customers_tool(), &args(json!({ "headoffice": "1" }))).unwrap();
        assert_eq!(url.path(), "/api/1/headoffice/1/customers");
    }

    #[test]
    fn test_fields_body_collects_present_arguments() {
        let tool = ToolDescriptor::put("update_menu", "/menus/{id}")
            .param(ParamSpec::string("id", "ID").required())
            .param(ParamSpec::object("attributes", "Attributes").required())
            .body(crate::models::BodyShape::fields(&["attributes"]));

        let body = build_body(&tool, &args(json!({ "id": "7", "attributes": { "name": "Lunch" } })));
        assert_eq!(body, Some(json!({ "attributes": { "name": "Lunch" } })));
    }

    #[test]
    fn test_argument_body_uses_fallback() {
        let tool = ToolDescriptor::put("reward", "/rewards")
            .param(ParamSpec::object("data", "Data"))
            .body(crate::models::BodyShape::Argument {
                name: "data".into(),
                fallback: Some(json!({ "attributes": "RewardRequest" })),
            });

        assert_eq!(
            build_body(&tool, &args(json!({}))),
            Some(json!({ "attributes": "RewardRequest" }))
        );
        assert_eq!(
            build_body(&tool, &args(json!({ "data": { "points": 10 } }))),
            Some(json!({ "points": 10 }))
        );
    }

    #[test]
    fn test_get_never_has_body() {
        assert_eq!(build_body(&customers_tool(), &args(json!({ "headoffice": "1" }))), None);
    }
}
