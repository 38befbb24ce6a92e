use crate::models::{BodyShape, ParamSpec, ResponseMode, ToolDescriptor};

fn headoffice() -> ParamSpec {
    ParamSpec::string("headoffice", "The HeadOffice ID or name.").required()
}

fn location() -> ParamSpec {
    ParamSpec::string("location", "The Location ID or name.").required()
}

fn group_tab() -> ParamSpec {
    ParamSpec::string("group_tab", "The ID of the group tab.").required()
}

pub(super) fn tools() -> Vec<ToolDescriptor> {
    vec![
        // Orders
        ToolDescriptor::get("search_orders_for_location", "/headoffice/{headoffice}/locations/{location}/orders")
            .describe("Search for orders for a specific location at a head office.")
            .param(headoffice())
            .param(location()),
        ToolDescriptor::get(
            "read_specific_order",
            "/headoffice/{headoffice}/locations/{location}/orders/{id}",
        )
        .describe("Read a specific order for a location.")
        .param(headoffice())
        .param(location())
        .param(ParamSpec::string("id", "The order ID.").required()),
        ToolDescriptor::put("update_order", "/headoffice/{headoffice}/locations/{location}/orders/{id}")
            .describe("Update a specific order for a location in the Mobi2Go API.")
            .param(headoffice())
            .param(location())
            .param(ParamSpec::string("id", "The Order ID.").required())
            .param(
                ParamSpec::object("attributes", "The attributes to update for the order.")
                    .required(),
            )
            .body(BodyShape::fields(&["attributes"])),
        // Group tabs
        ToolDescriptor::get(
            "list_group_tabs_report",
            "/headoffice/{headoffice}/locations/{location}/group_tabs/report",
        )
        .describe("List all group tabs report for a specific location.")
        .param(headoffice())
        .param(location()),
        ToolDescriptor::get(
            "get_receipt_for_group_tab",
            "/headoffice/{headoffice}/locations/{location}/group_tabs/{group_tab}/receipt",
        )
        .describe("Get HTML receipt for a group tab at a specific location.")
        .param(headoffice())
        .param(location())
        .param(group_tab())
        .response(ResponseMode::Text),
        ToolDescriptor::get(
            "get_card_hold_details",
            "/headoffice/{headoffice}/locations/{location}/group_tabs/{group_tab}/card_holds/{card_hold}",
        )
        .describe("Get details of a specific card hold for a group tab (location).")
        .param(headoffice())
        .param(location())
        .param(group_tab())
        .param(ParamSpec::string("card_hold", "The ID of the card hold.").required()),
        // Payments and reports
        ToolDescriptor::get("get_payment_events_summary", "/headoffice/{headofficeId}/payments/events")
            .describe("Get payment events summary for a headoffice.")
            .param(ParamSpec::string("headofficeId", "The ID of the headoffice.").required())
            .query(
                ParamSpec::integer("offset", "The offset for pagination (default: 0).")
                    .default_value(0),
            )
            .query(
                ParamSpec::integer("limit", "The limit for pagination (default: 100).")
                    .default_value(100),
            ),
        ToolDescriptor::get("get_html_sales_report", "/headoffice/{headoffice}/report/{report_type}")
            .describe("Get the HTML sales report from Mobi2Go.")
            .param(headoffice())
            .param(
                ParamSpec::string("report_type", "The type of report to retrieve.")
                    .one_of(&["weekly", "monthly"])
                    .required(),
            )
            .response(ResponseMode::Text),
    ]
}
