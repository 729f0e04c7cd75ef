//! Test-only helpers: throwaway site directories and a known-good showcase site.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tempfile::TempDir;

/// Stylesheet satisfying every built-in table.
pub const STYLES_CSS: &str = r#"h1 {
    background: linear-gradient(90deg, #4285F4, #DB4437, #F4B400, #0F9D58);
    background: linear-gradient(90deg, #4285F4, #6A5ACD, #9370DB, #BA55D3, #9932CC);
    -webkit-background-clip: text;
    background-clip: text;
    color: transparent;
    display: inline-block;
}

.dark-theme h1 {
    background: linear-gradient(90deg, #8ab4f8, #DDA0DD);
}

.font-category {
    display: inline-block;
    background-color: #e8f0fe;
    color: #4285F4;
    border-radius: 15px;
    font-size: 12px;
    padding: 4px 12px;
}

.dark-theme .font-category {
    background-color: #3c4043;
}

.footer-disclaimer {
    padding: 24px;
}

.dark-theme .footer-disclaimer {
    background: #202124;
}

.footer-link {
    color: #4285F4;
}

.disclaimer-text {
    font-size: 12px;
}

@media (max-width: 768px) {
    .footer-disclaimer {
        padding: 16px;
    }
}
"#;

/// Markup satisfying every built-in table.
pub const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <title>Google Fonts Showcase</title>
    <!-- Gradient Favicon -->
    <link rel="icon" href="data:image/svg+xml,<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 100 100'><defs><linearGradient id='gradient'><stop offset='0%' stop-color='%234285F4'/><stop offset='50%' stop-color='%239370DB'/><stop offset='100%' stop-color='%239932CC'/></linearGradient></defs><text y='.9em' font-size='90' fill='url(%23gradient)'>G</text></svg>" type="image/svg+xml">
    <link rel="stylesheet" href="styles.css">
</head>
<body>
    <div class="font-card" data-font-category="serif">
        <span class="font-category">Serif</span>
    </div>
    <footer class="footer-disclaimer">
        <p class="disclaimer-text">Google Fonts Showcase is an independent project built with Mistral Vibe AI.</p>
        <p class="disclaimer-text">Last updated: January 3, 2026</p>
        <a class="footer-link" href="#about">About</a>
        <a class="footer-link" href="https://github.com">GitHub</a>
        <a class="footer-link" href="#contact">Contact</a>
    </footer>
</body>
</html>
"##;

/// A temporary site root, removed on drop.
pub struct TestSite {
    temp: TempDir,
}

impl TestSite {
    pub fn new() -> Result<Self> {
        let temp = tempfile::tempdir().context("create temp site")?;
        Ok(Self { temp })
    }

    /// Site containing the known-good `index.html` and `styles.css`.
    pub fn showcase() -> Result<Self> {
        let site = Self::new()?;
        site.write("index.html", INDEX_HTML)?;
        site.write("styles.css", STYLES_CSS)?;
        Ok(site)
    }

    pub fn root(&self) -> &Path {
        self.temp.path()
    }

    pub fn write(&self, name: &str, contents: impl AsRef<str>) -> Result<()> {
        let path = self.root().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create {}", parent.display()))?;
        }
        fs::write(&path, contents.as_ref()).with_context(|| format!("write {}", path.display()))
    }

    pub fn read(&self, name: &str) -> Result<String> {
        let path = self.root().join(name);
        fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))
    }
}
