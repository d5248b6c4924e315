#[tokio::main]
async fn main() {
    if let Err(e) = party_booking::run().await {
        eprintln!("party-booking failed to start: {}", e);
        std::process::exit(1);
    }
}
