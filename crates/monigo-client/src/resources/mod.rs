//! Resource facades.
//!
//! Each facade borrows the [`MonigoClient`](crate::MonigoClient) and maps one
//! group of endpoints onto typed calls. Facades are cheap to create; obtain
//! them from the client as needed:
//!
//! ```no_run
//! # async fn example(client: &monigo_client::MonigoClient) -> Result<(), monigo_client::ClientError> {
//! let customers = client.customers().list().await?;
//! println!("{} customers", customers.count);
//! # Ok(())
//! # }
//! ```

mod customers;
mod events;
mod invoices;
mod metrics;
mod payout_accounts;
mod plans;
mod portal_tokens;
mod subscriptions;
mod usage;

pub use customers::Customers;
pub use events::Events;
pub use invoices::Invoices;
pub use metrics::Metrics;
pub use payout_accounts::PayoutAccounts;
pub use plans::Plans;
pub use portal_tokens::PortalTokens;
pub use subscriptions::Subscriptions;
pub use usage::Usage;

use crate::error::ClientError;

/// Require a response body for endpoints that always return one.
fn required<T>(body: Option<T>, path: &str) -> Result<T, ClientError> {
    body.ok_or_else(|| ClientError::UnexpectedResponse(format!("empty response body from {path}")))
}
