use anyhow::Context as _;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let path = calm_card::create_calm_card()
        .with_context(|| format!("rendering {}", calm_card::OUTPUT_PATH))?;
    println!("Created: {}", path.display());

    Ok(())
}
