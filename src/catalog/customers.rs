use serde_json::json;

use crate::models::{AuthScheme, BodyShape, ParamSpec, ResponseMode, ToolDescriptor};

pub(super) fn tools() -> Vec<ToolDescriptor> {
    vec![
        ToolDescriptor::get("search_customers", "/headoffice/{headoffice}/customers")
            .describe("Search for customers at a specific headoffice.")
            .param(
                ParamSpec::string("headoffice", "The ID of the headoffice to search customers for.")
                    .required(),
            )
            .query(ParamSpec::string("name", "Search by first or last name (optional)."))
            .query(ParamSpec::boolean(
                "is_subscriber",
                "Filter by promotional email opt-in (optional).",
            ))
            .query(ParamSpec::string(
                "created_at",
                "Search by creation period e.g., '2015-10-01,2015-10-02' (optional).",
            ))
            .query(ParamSpec::string("order_by", "Order ascending or descending (optional)."))
            .query(ParamSpec::integer("offset", "Offset for pagination (optional)."))
            .query(
                ParamSpec::integer(
                    "limit",
                    "Max customers returned (Max: 10000, Default: 20, optional).",
                )
                .default_value(20),
            )
            .query(ParamSpec::boolean("export", "Async CSV export (optional)."))
            .query(ParamSpec::boolean(
                "export_v2",
                "Async CSV export with different columns (optional).",
            )),
        ToolDescriptor::post("create_customer", "/headoffice/{headoffice}/customers")
            .describe("Create a new customer for the headoffice.")
            .param(ParamSpec::string("headoffice", "The ID of the headoffice.").required())
            .param(ParamSpec::object("customerData", "The data for the new customer.").required())
            .body(BodyShape::argument("customerData")),
        ToolDescriptor::delete("delete_customer", "/headoffice/{headoffice}/customers/{customer}")
            .describe("Delete a customer from the Mobi2Go API.")
            .param(ParamSpec::string("headoffice", "The ID or name of the head office.").required())
            .param(
                ParamSpec::string("customer", "The ID or email of the customer to delete.")
                    .required(),
            )
            .response(ResponseMode::Acknowledge("Customer deleted successfully.".into())),
        // Ends the customer's own session; no admin credentials involved.
        ToolDescriptor::delete("delete_customer_session", "/headoffice/{headoffice}/customers/session")
            .describe("Delete a customer session (logout) from Mobi2Go API.")
            .auth(AuthScheme::None)
            .param(
                ParamSpec::string(
                    "headoffice",
                    "The ID of the head office for which to log out the customer.",
                )
                .required(),
            ),
        ToolDescriptor::get(
            "search_customer_orders",
            "/headoffice/{headoffice}/customers/{customer}/orders",
        )
        .describe("Search for customer orders based on HeadOffice and Customer ID.")
        .param(ParamSpec::string("headoffice", "The HeadOffice ID or name.").required())
        .param(ParamSpec::string("customer", "The Customer ID or email address.").required()),
        ToolDescriptor::post(
            "create_customer_address",
            "/headoffice/{headoffice}/customers/{customer}/addresses",
        )
        .describe("Create a new delivery address for a customer.")
        .param(ParamSpec::string("headoffice", "The HeadOffice ID or name.").required())
        .param(ParamSpec::string("customer", "The ID or email of the customer.").required())
        .param(ParamSpec::object("attributes", "The attributes for the address.").required())
        .body(BodyShape::fields(&["attributes"])),
        ToolDescriptor::get(
            "read_customer_address",
            "/headoffice/{headoffice}/customers/{customer}/addresses/{id}",
        )
        .describe("Read a specific customer address.")
        .param(ParamSpec::string("headoffice", "The ID or name of the head office.").required())
        .param(ParamSpec::string("customer", "The ID or email of the customer.").required())
        .param(ParamSpec::string("id", "The ID of the address to retrieve.").required()),
        ToolDescriptor::delete(
            "delete_customer_address",
            "/headoffice/{headoffice}/customers/{customer}/addresses/{id}",
        )
        .describe("Delete a specific customer address.")
        .auth(AuthScheme::Bearer)
        .param(ParamSpec::string("headoffice", "The ID or name of the head office.").required())
        .param(ParamSpec::string("customer", "The ID or email of the customer.").required())
        .param(ParamSpec::string("id", "The ID of the address to be deleted.").required())
        .response(ResponseMode::Acknowledge("Address deleted successfully.".into())),
        ToolDescriptor::put(
            "update_or_redeem_customer_reward",
            "/headoffice/{headoffice}/customers/{customer_id}/rewards",
        )
        .describe("Update or redeem a customer reward.")
        .param(ParamSpec::string("headoffice", "The ID or name of the head office.").required())
        .param(
            ParamSpec::string("customer_id", "The ID or email address of the customer.")
                .required(),
        )
        .param(ParamSpec::object("data", "The data to be sent in the request body."))
        .body(BodyShape::Argument {
            name: "data".into(),
            fallback: Some(json!({ "attributes": "RewardRequest" })),
        }),
    ]
}
