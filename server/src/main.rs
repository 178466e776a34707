#[tokio::main]
async fn main() {
    animals_server::start_server().await;
}
