use std::path::PathBuf;

use anyhow::{Context, Result, anyhow, bail};

/// Studio options, read from the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct StudioConfig {
    /// Where the splash mask PNG is written.
    pub output: PathBuf,
    pub width: u32,
    pub height: u32,
    /// Anti-aliasing band in pixels; 0 disables it.
    pub aa_width: f32,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from("splash.png"),
            width: 512,
            height: 512,
            aa_width: 1.0,
        }
    }
}

impl StudioConfig {
    /// Parses `--out <path>`, `--size <w>x<h>` and `--aa <px>`.
    ///
    /// `args` excludes the program name.
    pub fn from_args(args: impl IntoIterator<Item = String>) -> Result<Self> {
        let mut config = Self::default();
        let mut args = args.into_iter();

        while let Some(flag) = args.next() {
            let mut value = || args.next().ok_or_else(|| anyhow!("{flag} needs a value"));
            match flag.as_str() {
                "--out" => config.output = PathBuf::from(value()?),
                "--size" => {
                    let size = value()?;
                    let (w, h) = size
                        .split_once('x')
                        .ok_or_else(|| anyhow!("--size expects <width>x<height>, got {size:?}"))?;
                    config.width = w.parse().with_context(|| format!("bad width in {size:?}"))?;
                    config.height = h.parse().with_context(|| format!("bad height in {size:?}"))?;
                }
                "--aa" => {
                    let aa = value()?;
                    config.aa_width = aa.parse().with_context(|| format!("bad --aa value {aa:?}"))?;
                    if !config.aa_width.is_finite() {
                        bail!("--aa must be finite, got {aa:?}");
                    }
                }
                other => bail!("unknown argument {other:?}"),
            }
        }

        Ok(config)
    }
}
