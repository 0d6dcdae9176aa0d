//! End-to-end integration walkthrough:
//!
//! 1. Create a customer
//! 2. Create an `api_call` metric
//! 3. Create a plan charging a flat 2.00 per call
//! 4. Subscribe the customer
//! 5. Ingest a batch of usage events
//!
//! ```bash
//! MONIGO_API_KEY=sk_test_... cargo run -p monigo-client --example quickstart
//! ```

use monigo_client::{
    is_conflict, Aggregation, BillingPeriod, ClientError, CreateCustomerRequest,
    CreateMetricRequest, CreatePlanRequest, CreatePriceRequest, CreateSubscriptionRequest,
    Decimal, IngestEvent, IngestRequest, MonigoClient, PlanType,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), ClientError> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,monigo_client=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let client = MonigoClient::from_env()?;

    let customer = client
        .customers()
        .create(
            &CreateCustomerRequest::new("acme-corp-001", "Acme Corporation")
                .with_email("billing@acme.example"),
        )
        .await?;
    println!("customer created: {} ({})", customer.name, customer.id);

    let metric = client
        .metrics()
        .create(
            &CreateMetricRequest::new("API Calls", "api_call", Aggregation::Count)
                .with_description("Counts every API call made by a customer"),
        )
        .await?;
    println!("metric created: {} ({})", metric.name, metric.id);

    let plan = client
        .plans()
        .create(
            &CreatePlanRequest::new("API Pro")
                .with_currency("NGN")
                .with_plan_type(PlanType::Collection)
                .with_billing_period(BillingPeriod::Monthly)
                .with_price(CreatePriceRequest::flat(metric.id.clone(), Decimal::new(2_000_000, 6))),
        )
        .await?;
    println!("plan created: {} ({})", plan.name, plan.id);

    let subscription = client
        .subscriptions()
        .create(&CreateSubscriptionRequest {
            customer_id: customer.id.clone(),
            plan_id: plan.id.clone(),
        })
        .await;
    match subscription {
        Ok(subscription) => println!("subscription active: {}", subscription.id),
        Err(err) if is_conflict(&err) => println!("customer is already subscribed"),
        Err(err) => return Err(err),
    }

    let events: Vec<IngestEvent> = ["/v1/users", "/v1/orders", "/v1/users"]
        .into_iter()
        .map(|endpoint| {
            IngestEvent::new("api_call", customer.id.clone()).with_property("endpoint", endpoint)
        })
        .collect();
    let response = client.events().ingest(&IngestRequest::from(events)).await?;
    println!(
        "ingested {} events ({} duplicates)",
        response.ingested.len(),
        response.duplicates.len()
    );

    Ok(())
}
