// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Catalog document location.

use crate::env;
use crate::error::ParrotError;
use std::path::{Path, PathBuf};

/// File name looked up next to the executable when no override is set
pub const DEFAULT_CATALOG_FILE_NAME: &str = "parrot_behaviors";

/// Decides which catalog document an invocation loads.
#[derive(Clone, Debug)]
pub struct CatalogLocator {
    override_path: Option<PathBuf>,
    install_dir: PathBuf,
    default_file_name: String,
}

impl CatalogLocator {
    pub fn new(override_path: Option<PathBuf>, install_dir: impl Into<PathBuf>) -> Self {
        Self {
            override_path,
            install_dir: install_dir.into(),
            default_file_name: DEFAULT_CATALOG_FILE_NAME.to_string(),
        }
    }

    pub fn with_default_file_name(mut self, name: impl Into<String>) -> Self {
        self.default_file_name = name.into();
        self
    }

    /// Locator for the running process: `PARROT_BEHAVIORS_FILE`, else the
    /// directory holding the executable.
    pub fn from_env() -> Result<Self, ParrotError> {
        let override_path = env::behaviors_file();
        let install_dir = match override_path {
            // Never consulted once the override is set.
            Some(_) => PathBuf::new(),
            None => install_dir()?,
        };
        Ok(Self::new(override_path, install_dir))
    }

    /// Path of the catalog to load.
    ///
    /// When an override is configured it is the only candidate: a missing
    /// override never falls back to the default location.
    pub fn locate(&self) -> Result<PathBuf, ParrotError> {
        let path = match &self.override_path {
            Some(path) => path.clone(),
            None => self.default_path(),
        };
        if !path.exists() {
            return Err(ParrotError::MissingCatalog { path, source: None });
        }
        Ok(path)
    }

    /// `<install dir>/<default file name>`
    pub fn default_path(&self) -> PathBuf {
        self.install_dir.join(&self.default_file_name)
    }

    pub fn override_path(&self) -> Option<&Path> {
        self.override_path.as_deref()
    }
}

fn install_dir() -> Result<PathBuf, ParrotError> {
    let exe = std::env::current_exe().map_err(|source| ParrotError::MissingCatalog {
        path: PathBuf::from(DEFAULT_CATALOG_FILE_NAME),
        source: Some(source),
    })?;
    Ok(exe
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(".")))
}

#[cfg(test)]
#[path = "locator_tests.rs"]
mod tests;
