//! Init command implementation.

use anyhow::{bail, Result};
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# folder-lint configuration
#
# Each key under [rules] is a path pattern matched against paths relative to
# the working directory. `*` stays within a segment, `**` crosses `/`.
# Matching is unanchored: a pattern may hit anywhere in the path.
#
#   allowed    - file globs permitted under the path (empty = anything goes).
#                Globs containing `**` match the path, others the file name.
#   disallowed - file name globs forbidden under the path.
#
# Directories that no pattern reaches are never entered.

[analyzer]
# Directory to scan (default: current directory)
# root = "."

[rules."app/**"]
allowed = ["layout.tsx", "page.tsx", "loading.tsx", "error.tsx", "not-found.tsx", "route.ts", "template.tsx", "default.tsx"]
disallowed = ["*.js", "*.jsx"]

[rules."src/components/ui/**"]
allowed = ["*.tsx", "*.ts"]

[rules."src/components/common/**"]
allowed = ["*.tsx", "*.ts"]

[rules."src/components/layout/**"]
allowed = ["*.tsx", "*.ts"]

[rules."src/features/**"]
allowed = ["components/**", "pages/**", "hooks/**", "types/**", "utils/**", "index.ts"]

[rules."src/types/**"]
allowed = ["*.ts"]

[rules."src/hooks/**"]
allowed = ["*.ts", "*.tsx"]

[rules."src/redux/**"]
allowed = ["hooks/**", "providers/**", "store/**", "index.ts"]

[rules."src/lib/**"]
allowed = ["api/**", "validation/**", "utils/**"]
"#;

/// Runs the init command, writing `folder-lint.toml` into `dir`.
pub fn run(dir: &Path, force: bool) -> Result<()> {
    let config_path = dir.join("folder-lint.toml");

    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(&config_path, DEFAULT_CONFIG)?;

    println!("Created folder-lint.toml");
    println!("\nNext steps:");
    println!("  1. Edit folder-lint.toml to describe your layout");
    println!("  2. Run: folder-lint");

    Ok(())
}
