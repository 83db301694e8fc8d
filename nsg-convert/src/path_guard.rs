//! Keeps `convert --output` from clobbering the rule set it reads.

use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};

use anyhow::{bail, Context, Result};

pub fn ensure_output_not_input(output: &Path, input: &Path) -> Result<()> {
    let output_key = comparable_path(output)
        .with_context(|| format!("failed to resolve output path {}", output.display()))?;
    let input_key = comparable_path(input)
        .with_context(|| format!("failed to resolve rule set path {}", input.display()))?;

    if output_key == input_key {
        bail!(
            "refusing to overwrite source file: output {} is the rule set {}",
            output.display(),
            input.display()
        );
    }
    Ok(())
}

/// Absolute form of `path` with symlinks and `..` resolved.
///
/// The output usually does not exist yet, so only its longest existing
/// ancestor is canonicalized; the remaining components are applied lexically.
fn comparable_path(path: &Path) -> Result<PathBuf> {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .context("current_dir")?
            .join(path)
    };

    let mut existing = absolute.as_path();
    let mut missing: Vec<&OsStr> = Vec::new();
    while !existing.exists() {
        let (Some(parent), Some(last)) = (existing.parent(), existing.components().next_back())
        else {
            break;
        };
        missing.push(last.as_os_str());
        existing = parent;
    }

    let mut resolved = existing
        .canonicalize()
        .with_context(|| format!("canonicalize {}", existing.display()))?;
    for part in missing.iter().rev() {
        match Path::new(part).components().next() {
            Some(Component::ParentDir) => {
                resolved.pop();
            }
            Some(Component::CurDir) | None => {}
            Some(_) => resolved.push(part),
        }
    }
    Ok(resolved)
}
