#[tokio::main]
async fn main() {
    if let Err(err) = feelbook_cli::run().await {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
