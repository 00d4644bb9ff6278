#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = gradecard::run().await {
        eprintln!("gradecard fatal: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}
