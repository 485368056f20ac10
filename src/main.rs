use anyhow::{Context, bail};
use plagcheck::{Matcher, compare_files};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: plagcheck <file1> <file2>";

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args_os().skip(1);
    let (Some(path1), Some(path2)) = (args.next(), args.next()) else {
        bail!(USAGE);
    };
    if args.next().is_some() {
        bail!(USAGE);
    }

    let matcher = Matcher::default();
    let result = compare_files(&matcher, &path1, &path2).context("comparison failed")?;

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
