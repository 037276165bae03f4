#[tokio::main]
async fn main() -> anyhow::Result<()> {
    simple_bank::cli::run().await
}
