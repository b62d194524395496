#[tokio::main]
async fn main() {
    if let Err(err) = tagsift::app::run().await {
        tracing::error!(error = %err, "Run aborted");
        std::process::exit(1);
    }
}
