use service::{spawn_service, ServiceConfig};

#[tokio::main]
async fn main() {
    println!("Starting mock accounts server on the default port...");

    let config = ServiceConfig::default();

    if let Err(e) = spawn_service(&config).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
