use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

use redstone8::ProgramConfig;

/// Reads a program source file. `-` reads stdin.
pub fn load_source(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        std::io::Read::read_to_string(&mut std::io::stdin(), &mut text)
            .context("reading program from stdin")?;
        return Ok(text);
    }
    std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}

/// Loads a JSON `ProgramConfig`; missing keys take their defaults.
pub fn load_config(path: Option<&Path>) -> Result<ProgramConfig> {
    let Some(path) = path else {
        return Ok(ProgramConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let cfg: ProgramConfig = serde_json::from_str(&text)
        .with_context(|| format!("parsing config {}", path.display()))?;
    anyhow::ensure!(cfg.section_words > 0, "section_words must be at least 1");
    Ok(cfg)
}

/// Writes to `out`, or stdout when no file is given.
pub fn write_output(out: Option<&Path>, bytes: &[u8]) -> Result<()> {
    match out {
        Some(path) => {
            std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(bytes)?;
            stdout.flush()?;
            Ok(())
        }
    }
}
