//! The connector tasks.
//!
//! Each task performs one Admin REST call and follows the same steps:
//!
//! 1. Validate the [`Connection`](crate::config::Connection) and the input.
//!    Nothing touches the network if this fails.
//! 2. Create a transport scoped to this call, unless one was injected
//!    through the `*_with` variant.
//! 3. Send the request, racing it against the cancellation token.
//! 4. Hand the outcome to the task's [`ErrorPolicy`].
//!
//! | Task               | Input                  | Options                   | Payload              |
//! |--------------------|------------------------|---------------------------|----------------------|
//! | [`create_product`] | [`CreateProductInput`] | [`ErrorPolicy`]           | `Option<Value>`      |
//! | [`get_product`]    | [`ProductIdInput`]     | [`SingleResourceOptions`] | `Option<Value>`      |
//! | [`update_product`] | [`UpdateProductInput`] | [`ErrorPolicy`]           | `Option<Value>`      |
//! | [`delete_product`] | [`ProductIdInput`]     | [`ErrorPolicy`]           | `()`                 |
//! | [`get_customer`]   | [`CustomerIdInput`]    | [`SingleResourceOptions`] | `Option<Value>`      |
//! | [`get_customers`]  | [`CustomersInput`]     | [`ListOptions`]           | [`Page<Value>`](crate::rest::Page) |
//! | [`get_orders`]     | [`OrdersInput`]        | [`ListOptions`]           | [`Page<Value>`](crate::rest::Page) |
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_tasks::config::Connection;
//! use shopify_tasks::tasks::{get_orders, ListOptions, OrdersInput};
//! use tokio_util::sync::CancellationToken;
//!
//! let connection = Connection::from_env();
//! let result = get_orders(
//!     &OrdersInput::default(),
//!     &connection,
//!     &ListOptions::default(),
//!     &CancellationToken::new(),
//! )
//! .await?;
//!
//! if let Some(page) = result.data() {
//!     println!("{} orders, next cursor: {:?}", page.len(), page.page_info.next_page);
//! }
//! ```

mod customers;
mod options;
mod orders;
mod policy;
mod products;
mod result;
mod timestamp;
mod transport;
mod validate;

pub use customers::{
    get_customer, get_customer_with, get_customers, get_customers_with, CustomerIdInput,
    CustomersInput,
};
pub use options::{ListOptions, SingleResourceOptions};
pub use orders::{get_orders, get_orders_with, OrdersInput};
pub use policy::{ErrorPolicy, TaskFailure};
pub use products::{
    create_product, create_product_with, delete_product, delete_product_with, get_product,
    get_product_with, update_product, update_product_with, CreateProductInput, ProductIdInput,
    UpdateProductInput,
};
pub use result::{ErrorInfo, TaskResult};
