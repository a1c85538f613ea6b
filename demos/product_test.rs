//! Product lifecycle walkthrough against a real FUGA account.
//!
//! Run with:
//! ```
//! FUGA_USERNAME=you FUGA_PASSWORD=secret cargo run --example product_test
//! ```

use fugapi::{
    Create, Delete, FugaClient, Get, Product, ProductCreateParams, ProductUpdateParams, Update,
};

#[tokio::main]
async fn main() -> fugapi::Result<()> {
    // Initialize tracing for debugging (optional)
    tracing_subscriber::fmt::init();

    // Create client from environment variables and log in
    println!("Creating FUGA client...");
    let client = FugaClient::from_env()?;
    println!("Connected to: {}", client.base_url());
    client.login().await?;
    println!("Logged in.");

    // Create a new product
    println!("\n--- Creating Product ---");
    let params = ProductCreateParams {
        name: "New Album".to_string(),
        consumer_release_date: Some(chrono::NaiveDate::from_ymd_opt(2026, 12, 31).unwrap()),
        ..Default::default()
    };
    let created = Product::create(&client, params).await?;
    println!("Created product {} ({})", created.name, created.id);

    // Fetch product details
    println!("\n--- Fetching Product Details ---");
    let product = Product::get(&client, created.id).await?;
    println!("Product: {}", product.name);
    println!("  State: {}", product.state.as_deref().unwrap_or("unknown"));
    println!("  UPC: {}", product.upc.as_deref().unwrap_or("none"));

    // Update product details
    println!("\n--- Updating Product ---");
    let updated = Product::update(
        &client,
        product.id,
        ProductUpdateParams {
            name: Some("Updated Album Name".to_string()),
            ..Default::default()
        },
    )
    .await?;
    println!("Renamed to: {}", updated.name);

    // Update territories
    println!("\n--- Updating Territories ---");
    let territories = vec!["US".to_string(), "CA".to_string(), "GB".to_string()];
    let confirmed = updated.update_territories(&client, &territories).await?;
    println!("Delivery territories: {}", confirmed.join(", "));

    // Assign barcode
    println!("\n--- Assigning Barcode ---");
    let with_barcode = updated.assign_barcode(&client).await?;
    println!("UPC: {}", with_barcode.upc.as_deref().unwrap_or("none"));

    // Delete the product
    println!("\n--- Deleting Product ---");
    Product::delete(&client, with_barcode.id).await?;
    println!("Deleted product {}", with_barcode.id);

    Ok(())
}
