// Copyright (c) 2021 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use store_zip::{build_archive, ArchiveEntry};

use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Result};

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        eprintln!("Usage: cli_pack <input file or directory> <output ZIP file name>");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let mut args = std::env::args().skip(1);

    let input_str = args.next().ok_or(anyhow!("No input file or directory specified."))?;
    let input_path = Path::new(&input_str);

    let output_str = args.next().ok_or(anyhow!("No output file specified."))?;
    let output_path = Path::new(&output_str);

    if output_path.exists() {
        bail!("The output file specified already exists.");
    }
    if !input_path.exists() {
        bail!("The input file or directory specified doesn't exist.");
    }

    let input_pathbuf = input_path.canonicalize().map_err(|_| anyhow!("Unable to canonicalise input path."))?;
    let input_path = input_pathbuf.as_path();

    let entries = if input_path.is_dir() { handle_directory(input_path).await? } else { handle_singular(input_path).await? };

    let bytes = build_archive(&entries)?;
    tokio::fs::write(output_path, &bytes).await?;
    println!("Successfully written {} entries to ZIP file '{}'.", entries.len(), output_path.display());

    Ok(())
}

async fn handle_singular(input_path: &Path) -> Result<Vec<ArchiveEntry>> {
    let filename = input_path.file_name().ok_or(anyhow!("Input path terminates in '...'."))?;
    let filename = filename.to_str().ok_or(anyhow!("Input path not valid UTF-8."))?;

    Ok(vec![read_entry(filename.to_string(), input_path).await?])
}

async fn handle_directory(input_path: &Path) -> Result<Vec<ArchiveEntry>> {
    let mut files = walk_dir(input_path.into()).await?;
    files.sort();

    let mut entries = Vec::with_capacity(files.len());

    for entry_path_buf in files {
        let relative = entry_path_buf
            .strip_prefix(input_path)
            .map_err(|_| anyhow!("Directory file path does not start with base input directory path."))?;

        let mut components = Vec::new();
        for component in relative.components() {
            let component = component.as_os_str().to_str().ok_or(anyhow!("Directory file path not valid UTF-8."))?;
            components.push(component);
        }

        entries.push(read_entry(components.join("/"), &entry_path_buf).await?);
    }

    Ok(entries)
}

async fn read_entry(name: String, input_path: &Path) -> Result<ArchiveEntry> {
    let content = tokio::fs::read_to_string(input_path)
        .await
        .map_err(|err| anyhow!("Unable to read '{}' as UTF-8 text: {}", input_path.display(), err))?;

    Ok(ArchiveEntry::new(name, content))
}

async fn walk_dir(dir: PathBuf) -> Result<Vec<PathBuf>> {
    let mut dirs = vec![dir];
    let mut files = vec![];

    while !dirs.is_empty() {
        let mut dir_iter = tokio::fs::read_dir(dirs.remove(0)).await?;

        while let Some(entry) = dir_iter.next_entry().await? {
            let entry_path_buf = entry.path();

            if entry_path_buf.is_dir() {
                dirs.push(entry_path_buf);
            } else {
                files.push(entry_path_buf);
            }
        }
    }

    Ok(files)
}
