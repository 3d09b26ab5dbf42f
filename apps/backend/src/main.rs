#[tokio::main]
async fn main() -> anyhow::Result<()> {
    gems_grading_backend::run().await
}
