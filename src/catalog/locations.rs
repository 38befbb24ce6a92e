use crate::models::{AuthScheme, ParamSpec, ToolDescriptor};

pub(super) fn tools() -> Vec<ToolDescriptor> {
    vec![
        ToolDescriptor::get("get_locations_for_headoffice", "/headoffice/{headofficeId}/locations")
            .describe("Get all locations for a headoffice.")
            .param(ParamSpec::string("headofficeId", "The ID of the headoffice.").required()),
        ToolDescriptor::get("get_location", "/headoffice/{headofficeId}/locations/{locationId}")
            .describe("Get information about a specific location.")
            .param(ParamSpec::string("headofficeId", "The ID of the headoffice.").required())
            .param(ParamSpec::string("locationId", "The ID of the location.").required()),
        // Public storefront data.
        ToolDescriptor::get("read_locations_for_headoffice", "/headoffice/{headoffice}/locations")
            .describe("Read locations for a specified headoffice.")
            .auth(AuthScheme::None)
            .param(ParamSpec::string("headoffice", "The ID or name of the headoffice.").required())
            .query(ParamSpec::string(
                "fields",
                "Comma-separated fields to return (e.g., opening_hours,address).",
            )),
        ToolDescriptor::get(
            "read_out_of_stock_products",
            "/headoffice/{headoffice}/locations/{location}/out_of_stocks/products",
        )
        .describe("Read out of stock products for a specific location.")
        .param(ParamSpec::string("headoffice", "The HeadOffice ID or name.").required())
        .param(ParamSpec::string("location", "The ID or name of the location.").required()),
        ToolDescriptor::get(
            "get_sales_metrics",
            "/headoffice/{headoffice}/locations/{location}/orders/metrics",
        )
        .describe("Get sales metrics for a specific location.")
        .param(ParamSpec::string("headoffice", "The ID or name of the head office.").required())
        .param(ParamSpec::string("location", "The ID or name of the location.").required()),
    ]
}
