//! Paths and port resolved from the environment.
//!
//! - `FOLIO_CONTENT` - content file (default: `content.toml`)
//! - `FOLIO_PUBLIC` - static asset directory (default: `public`)
//! - `FOLIO_OUT` - build output directory (default: `dist`)
//! - `FOLIO_PORT` - preview server port (default: `3000`)
//!
//! Command-line flags take precedence over these.

use std::path::PathBuf;

const DEFAULT_CONTENT: &str = "content.toml";
const DEFAULT_PUBLIC: &str = "public";
const DEFAULT_OUT: &str = "dist";
const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolioConfig {
    pub content: PathBuf,
    pub public_dir: PathBuf,
    pub out_dir: PathBuf,
    pub port: u16,
}

impl FolioConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = match lookup("FOLIO_PORT") {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!("Ignoring invalid FOLIO_PORT {:?}", raw);
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };

        Self {
            content: lookup("FOLIO_CONTENT")
                .unwrap_or_else(|| DEFAULT_CONTENT.into())
                .into(),
            public_dir: lookup("FOLIO_PUBLIC")
                .unwrap_or_else(|| DEFAULT_PUBLIC.into())
                .into(),
            out_dir: lookup("FOLIO_OUT")
                .unwrap_or_else(|| DEFAULT_OUT.into())
                .into(),
            port,
        }
    }

    /// Apply command-line overrides.
    pub fn with_overrides(
        mut self,
        content: Option<PathBuf>,
        public_dir: Option<PathBuf>,
        out_dir: Option<PathBuf>,
        port: Option<u16>,
    ) -> Self {
        if let Some(content) = content {
            self.content = content;
        }
        if let Some(public_dir) = public_dir {
            self.public_dir = public_dir;
        }
        if let Some(out_dir) = out_dir {
            self.out_dir = out_dir;
        }
        if let Some(port) = port {
            self.port = port;
        }
        self
    }
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
