use crate::errors::AppResult;
use std::fs;
use std::io::{Write, stdin, stdout};
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the roster document to `dest_file`. With `compress`, document
    /// and audit database land together in a single zip archive instead.
    pub fn backup(doc_path: &Path, db_path: &Path, dest_file: &str, compress: bool) -> AppResult<()> {
        if !doc_path.exists() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Roster document not found: {}", doc_path.display()),
            )
            .into());
        }

        let dest = Path::new(dest_file);

        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }

        // Existing destination needs an explicit go-ahead.
        if dest.exists() && !confirm_overwrite(dest)? {
            println!("❌ Backup cancelled by user.");
            return Ok(());
        }

        if compress {
            let archive = compress_backup(doc_path, db_path, dest)?;
            println!("📦 Backup archive: {}", archive.display());
        } else {
            fs::copy(doc_path, dest)?;
            println!("✅ Backup created: {}", dest.display());
        }

        Ok(())
    }
}

fn confirm_overwrite(dest: &Path) -> AppResult<bool> {
    println!(
        "⚠️  The file '{}' already exists.\nDo you want to overwrite it? [y/N]: ",
        dest.display()
    );

    let mut answer = String::new();
    print!("> ");
    stdout().flush().ok();
    stdin().read_line(&mut answer)?;

    let answer = answer.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}

/// Zip the document and, when present, the audit database.
fn compress_backup(doc: &Path, db: &Path, dest: &Path) -> AppResult<PathBuf> {
    let zip_path = dest.with_extension("zip");
    let file = fs::File::create(&zip_path)?;
    let mut zip = ZipWriter::new(file);

    for src in [doc, db] {
        if !src.exists() {
            continue;
        }
        let name = src
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "backup".to_string());

        let options: FileOptions<'_, ()> =
            FileOptions::default().compression_method(zip::CompressionMethod::Deflated);
        zip.start_file(name, options)
            .map_err(std::io::Error::other)?;
        let mut f = fs::File::open(src)?;
        std::io::copy(&mut f, &mut zip)?;
    }

    zip.finish().map_err(std::io::Error::other)?;

    Ok(zip_path)
}
