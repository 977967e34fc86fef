use std::cell::Cell;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::app::infrastructure::error::Result;

const PREVIEW_DIR_NAME: &str = "quickcode-preview";
const ENTRY_FILE: &str = "index.html";
const PAGE_FILE: &str = "page.html";
const VERSION_FILE: &str = "version.js";

/// Loads `page.html` in a sandboxed frame and reloads it whenever
/// `version.js` changes.
const ENTRY_HTML: &str = include_str!("../../../assets/preview/index.html");

/// Live on-disk copy of the composed document for the system browser.
///
/// The directory holds the composed page, a version stamp bumped on every
/// write, and an entry page that polls the stamp and reloads the page. The
/// browser tab opened once keeps following the editors.
pub struct PreviewFile {
    dir: PathBuf,
    version: Cell<u128>,
    entry_written: Cell<bool>,
}

impl PreviewFile {
    pub fn in_temp_dir() -> Self {
        Self::at(std::env::temp_dir().join(PREVIEW_DIR_NAME))
    }

    pub fn at(dir: PathBuf) -> Self {
        // Start from the clock so a tab left open from an earlier run still
        // sees the stamp move.
        let start = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or(0);
        Self {
            dir,
            version: Cell::new(start),
            entry_written: Cell::new(false),
        }
    }

    pub fn path(&self) -> &Path {
        &self.dir
    }

    /// The page to open in the browser.
    pub fn entry_path(&self) -> PathBuf {
        self.dir.join(ENTRY_FILE)
    }

    /// The composed document as last written.
    pub fn page_path(&self) -> PathBuf {
        self.dir.join(PAGE_FILE)
    }

    pub fn version(&self) -> u128 {
        self.version.get()
    }

    /// Replace the page, then bump the stamp so open tabs reload it.
    pub fn write(&self, html: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        if !self.entry_written.get() {
            fs::write(self.entry_path(), ENTRY_HTML)?;
            self.entry_written.set(true);
        }
        fs::write(self.page_path(), html)?;

        let next = self.version.get() + 1;
        fs::write(
            self.dir.join(VERSION_FILE),
            format!("window.quickcodeVersion = {};\n", next),
        )?;
        self.version.set(next);
        Ok(())
    }

    /// Hand the entry page to the default browser. The page runs there,
    /// outside this process.
    pub fn open_in_browser(&self) -> Result<()> {
        open::that(self.entry_path())?;
        Ok(())
    }

    /// Remove the directory if it exists.
    pub fn cleanup(&self) {
        let _ = fs::remove_dir_all(&self.dir);
        self.entry_written.set(false);
    }
}
