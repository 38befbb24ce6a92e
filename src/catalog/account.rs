use crate::models::{BodyShape, ParamSpec, ToolDescriptor};

pub(super) fn tools() -> Vec<ToolDescriptor> {
    vec![
        ToolDescriptor::post("create_api_key", "/account/keys")
            .describe("Create a new API key for accessing the account.")
            .param(
                ParamSpec::integer("ttl", "The time-to-live for the API key in seconds.")
                    .required(),
            )
            .body(BodyShape::fields(&["ttl"])),
        ToolDescriptor::get("get_headoffices_permissions", "/account/headoffices")
            .describe("Get headoffices that the account has permissions for."),
        ToolDescriptor::get("get_locations_permissions", "/account/locations")
            .describe("Get locations permissions for the account."),
        ToolDescriptor::get("get_headoffice", "/headoffice/{headofficeId}")
            .describe("Get information about a headoffice.")
            .param(ParamSpec::string("headofficeId", "The ID of the headoffice.").required()),
    ]
}
