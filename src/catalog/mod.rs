//! Built-in Mobi2Go tool catalog.
//!
//! Every operation is plain data. Paths are relative to the API base URL
//! (`https://www.mobi2go.com/api/1` by default).
//!
//! Auth defaults to the admin session cookie. The exceptions are public
//! storefront reads and the customer logout endpoint, which go out without
//! credentials, and address deletion, which uses a bearer token.

mod account;
mod customers;
mod locations;
mod menu;
mod orders;

use crate::models::ToolDescriptor;

/// Every Mobi2Go tool, grouped by API area.
pub fn all() -> Vec<ToolDescriptor> {
    let mut tools = Vec::new();
    tools.extend(account::tools());
    tools.extend(locations::tools());
    tools.extend(customers::tools());
    tools.extend(menu::tools());
    tools.extend(orders::tools());
    tools
}
