use crate::errors::AppResult;
use crate::store::RecordStore;
use crate::ui::messages::{info, success, warning};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the data file to `dest`, or zip it when `compress` is set.
    ///
    /// A compressed backup is written to `dest` with a `.zip` extension.
    /// Returns the path of the backup actually written, or `None` when the
    /// user declined to overwrite an existing file.
    pub fn backup(
        store: &RecordStore,
        dest: &Path,
        compress: bool,
        force: bool,
    ) -> AppResult<Option<PathBuf>> {
        let src = store.path();

        // 1️⃣ Check data file exists
        if !src.exists() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("Data file not found: {}", src.display()),
            )
            .into());
        }

        let target = if compress { zip_path_for(dest) } else { dest.to_path_buf() };
        if target.as_path() == src {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Backup would overwrite the data file: {}", src.display()),
            )
            .into());
        }

        // 2️⃣ Ensure destination folder exists
        if let Some(parent) = target.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        // 3️⃣ Existing destination → ask confirmation
        if target.exists() && !force && !confirm_overwrite(&target)? {
            info("Backup cancelled by user.");
            return Ok(None);
        }

        // 4️⃣ Copy or compress, with no append in flight
        {
            let _lock = store.lock()?;
            if compress {
                compress_backup(src, &target)?;
            } else {
                fs::copy(src, &target)?;
            }
        }
        success(format!("Backup created: {}", target.display()));

        // 5️⃣ Journal
        let message = if compress {
            "Backup created and compressed"
        } else {
            "Backup created"
        };
        if let Err(e) = store
            .journal()
            .write("backup", &target.to_string_lossy(), message)
        {
            warning(format!("Failed to write internal journal: {e}"));
        }

        Ok(Some(target))
    }
}

/// `dest` itself when it already names a zip, otherwise `dest` with `.zip`.
fn zip_path_for(dest: &Path) -> PathBuf {
    let is_zip = dest
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("zip"));
    if is_zip {
        dest.to_path_buf()
    } else {
        dest.with_extension("zip")
    }
}

fn confirm_overwrite(dest: &Path) -> AppResult<bool> {
    warning(format!("The file '{}' already exists.", dest.display()));
    print!("Overwrite? [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}

/// Write `src` as the single entry of a new zip archive at `zip_path`.
fn compress_backup(src: &Path, zip_path: &Path) -> AppResult<()> {
    let mut f = fs::File::open(src)?;
    let file = fs::File::create(zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let entry_name = src
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "maintenance_log.csv".to_string());

    zip.start_file(entry_name, options)
        .map_err(io::Error::other)?;

    io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(io::Error::other)?;

    info(format!("Compressed: {}", zip_path.display()));

    Ok(())
}
