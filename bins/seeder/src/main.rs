//! Database seeder for Aliada development and testing.
//!
//! Seeds a couple of demo companies so the report form has something to
//! show on a fresh database.
//!
//! Usage: cargo run --bin seeder

use aliada_db::CompanyRepository;

const DEMO_COMPANIES: [(&str, &str, &str); 2] = [
    ("cli_001", "Empresa A", "12314567890"),
    ("cli_002", "Empresa B", "09876543210"),
];

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let database_url = std::env::var("ALIADA__DATABASE__URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .expect("ALIADA__DATABASE__URL must be set in environment");

    println!("Connecting to database...");
    let db = aliada_db::connect(&database_url)
        .await
        .expect("Failed to connect to database");

    let companies = CompanyRepository::new(db);

    for (id, name, realm_id) in DEMO_COMPANIES {
        println!("Seeding company {id} ({name})...");
        companies
            .upsert(id, name, realm_id)
            .await
            .expect("Failed to seed company");
    }

    println!("Seeding complete!");
}
