use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use tree_find::cli::Cli;
use tree_find::finder::search;
use tree_find::tree::{Directory, File, Node};

/// Build the sample two-level tree the demo queries:
///
/// dir_l0/
///   file_l0_f1.txt (5)
///   dir_l1_d1/
///     file_l1_f1.txt (3)
fn sample_tree() -> Result<Node> {
    let mut root = Directory::new("dir_l0")?;
    root.add_child(File::new("file_l0_f1.txt", 5)?);

    let mut sub = Directory::new("dir_l1_d1")?;
    sub.add_child(File::new("file_l1_f1.txt", 3)?);
    root.add_child(sub);

    Ok(root.into())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(if cli.debug {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .init();

    cli.validate().context("invalid arguments")?;

    let tree = sample_tree().context("failed to build sample tree")?;
    let criteria = cli.build_criteria().context("failed to build criteria")?;

    info!("Searching sample tree with criteria: {}", criteria.description());

    for file in search(&tree, criteria.as_ref()) {
        println!("{}", file.name());
    }

    Ok(())
}
