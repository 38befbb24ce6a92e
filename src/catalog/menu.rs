use crate::models::{AuthScheme, BodyShape, ParamSpec, ResponseMode, ToolDescriptor};

fn headoffice() -> ParamSpec {
    ParamSpec::string("headoffice", "The HeadOffice ID or name.").required()
}

fn category_id() -> ParamSpec {
    ParamSpec::number("id", "The ID of the menu category.").required()
}

pub(super) fn tools() -> Vec<ToolDescriptor> {
    vec![
        // Menus
        ToolDescriptor::get("read_menus", "/headoffice/{headoffice}/menu/menus")
            .describe("Read all menus from the Mobi2Go API.")
            .param(headoffice()),
        ToolDescriptor::post("create_menu", "/headoffice/{headoffice}/menu/menus")
            .describe("Create a new menu in the Mobi2Go API.")
            .param(headoffice())
            .param(ParamSpec::string("attributes", "The attributes for the menu.").required())
            .body(BodyShape::fields(&["attributes"])),
        ToolDescriptor::put("update_menu", "/headoffice/{headoffice}/menu/menus/{id}")
            .describe("Update a specific menu.")
            .param(headoffice())
            .param(ParamSpec::string("id", "The ID of the Menu to update.").required())
            .param(
                ParamSpec::object("attributes", "The attributes to update for the Menu.")
                    .required(),
            )
            .body(BodyShape::fields(&["attributes"])),
        // Products
        ToolDescriptor::get("read_menu_products", "/headoffice/{headoffice}/menu/products")
            .describe("Read all menu products from a specified head office.")
            .param(headoffice()),
        ToolDescriptor::put("update_menu_product", "/headoffice/{headoffice}/menu/products/{id}")
            .describe("Update a specific menu product.")
            .param(headoffice())
            .param(ParamSpec::string("id", "The ID of the Product to update.").required())
            .param(
                ParamSpec::object("attributes", "The attributes to update for the menu product.")
                    .required(),
            )
            .body(BodyShape::fields(&["attributes"])),
        // Modifiers
        ToolDescriptor::get("read_specific_modifier", "/headoffice/{headoffice}/menu/modifiers/{id}")
            .describe("Read a specific modifier by ID.")
            .param(headoffice())
            .param(ParamSpec::string("id", "The ID of the Modifier.").required()),
        // Public storefront data.
        ToolDescriptor::get("read_modifier_group", "/headoffice/{headoffice}/menu/modifier_groups/{id}")
            .describe("Read a specific modifier group by ID.")
            .auth(AuthScheme::None)
            .param(headoffice())
            .param(ParamSpec::string("id", "The ID of the ModifierGroup.").required()),
        ToolDescriptor::put("update_modifier_group", "/headoffice/{headoffice}/menu/modifier_groups/{id}")
            .describe("Update a specific modifier group in the Mobi2Go API.")
            .param(headoffice())
            .param(ParamSpec::string("id", "The ID of the ModifierGroup.").required())
            .param(
                ParamSpec::object("attributes", "The attributes to update for the ModifierGroup.")
                    .required(),
            )
            .body(BodyShape::fields(&["attributes"])),
        // Categories
        ToolDescriptor::get("get_menu_categories", "/headoffice/{headoffice}/menu/categories")
            .describe("Get all menu categories for a specific HeadOffice.")
            .param(headoffice()),
        ToolDescriptor::get("get_menu_category", "/headoffice/{headoffice}/menu/categories/{id}")
            .describe("Get a specific menu category by ID.")
            .param(headoffice())
            .param(category_id()),
        ToolDescriptor::post("create_menu_category", "/headoffice/{headoffice}/menu/categories")
            .describe("Create a new menu category for a specific HeadOffice.")
            .param(headoffice())
            .param(ParamSpec::object("body", "The menu category to create.").required())
            .body(BodyShape::argument("body")),
        ToolDescriptor::put("update_menu_category", "/headoffice/{headoffice}/menu/categories/{id}")
            .describe("Update a menu category by ID.")
            .param(headoffice())
            .param(category_id())
            .param(ParamSpec::object("body", "The menu category fields to update.").required())
            .body(BodyShape::argument("body")),
        ToolDescriptor::delete("delete_menu_category", "/headoffice/{headoffice}/menu/categories/{id}")
            .describe("Delete a menu category by ID.")
            .param(headoffice())
            .param(category_id())
            .response(ResponseMode::Acknowledge("Menu category deleted successfully.".into())),
    ]
}
