//! Tool implementations for the lookup system.
//!
//! Each resolver lives in its own module with a definition function and an
//! execute function over the relevant store snapshot:
//!
//! - `products`: fuzzy product search
//! - `orders`: order status lookup
//! - `policies`: FAQ/policy answers
//!
//! [`LookupToolProvider`] wraps the three as a [`ToolProvider`] over a
//! [`DataStores`](crate::stores::DataStores) snapshot; [`ToolRegistry`]
//! aggregates providers and implements the application's executor port.

pub mod orders;
pub mod policies;
pub mod products;
pub mod provider;

mod registry;
mod schema;

pub use provider::LookupToolProvider;
pub use registry::{RegistryStats, ToolRegistry};
pub use schema::FunctionDeclarationConverter;

use clerk_domain::tool::entities::ToolSpec;

/// Create the tool specification with all three lookup tools
pub fn default_tool_spec() -> ToolSpec {
    ToolSpec::new()
        .register(products::search_products_definition())
        .register(orders::check_order_definition())
        .register(policies::get_policy_answer_definition())
}
