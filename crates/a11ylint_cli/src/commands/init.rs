//! Init command implementation

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use a11ylint_core::Configuration;
use miette::{IntoDiagnostic, Result, miette};
use tracing::info;

/// Writes the default configuration, every rule enabled.
///
/// The file goes to `target` when given, otherwise to the first discovery
/// name in the working directory. An existing file is only replaced with
/// `force`.
pub fn run_init(target: Option<&Path>, force: bool) -> Result<()> {
    let path = target.map_or_else(
        || PathBuf::from(Configuration::CONFIG_FILES[0]),
        Path::to_path_buf,
    );

    let mut contents = Configuration::defaults()
        .to_json_pretty()
        .into_diagnostic()?;
    contents.push('\n');

    if !create_exclusive(&path, &contents).into_diagnostic()? {
        if !force {
            return Err(miette!(
                "Config file {} already exists. Use --force to overwrite.",
                path.display()
            ));
        }
        remove_if_present(&path).into_diagnostic()?;
        if !create_exclusive(&path, &contents).into_diagnostic()? {
            return Err(miette!(
                "Config file {} was recreated while being replaced",
                path.display()
            ));
        }
    }

    info!("Created {}", path.display());
    Ok(())
}

/// Creates `path` holding `contents`. Returns `false` without touching
/// anything when an entry already exists there. Symlinks are not followed
/// on unix.
fn create_exclusive(path: &Path, contents: &str) -> io::Result<bool> {
    let mut options = OpenOptions::new();
    options.write(true).create_new(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.custom_flags(libc::O_NOFOLLOW);
    }

    match options.open(path) {
        Ok(mut file) => {
            file.write_all(contents.as_bytes())?;
            Ok(true)
        }
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => Ok(false),
        Err(e) => Err(e),
    }
}

fn remove_if_present(path: &Path) -> io::Result<()> {
    match fs::remove_file(path) {
        Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e),
        _ => Ok(()),
    }
}
