#[tokio::main]
async fn main() {
    ledger_backend::run().await;
}
