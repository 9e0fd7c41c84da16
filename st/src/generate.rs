//! File generation
//!
//! Ties the pipeline together: validate the name, refuse to overwrite,
//! resolve the template, render it, write the result.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use log::info;

use crate::error::GenerateError;
use crate::templates::{SubstitutionContext, TemplateLoader, TemplateKind, render};
use crate::validate::NameValidator;

/// Inputs for one create or preview call
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    /// Template kind to instantiate
    pub kind: TemplateKind,
    /// Type name, also the output file stem
    pub name: String,
    /// Description placed in the file header
    pub description: String,
    /// Author placed in the file header
    pub author: String,
    /// Namespace the generated type lives in
    pub namespace: String,
    /// External link placed in the file header
    pub link: String,
    /// Directory the file is written into
    pub out_dir: PathBuf,
    /// Output file extension, without the dot
    pub extension: String,
}

impl GenerateRequest {
    /// Output file name, `<name>.<extension>`
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.name, self.extension)
    }
}

/// Runs preview and create operations over a template loader and a name
/// validator
pub struct Generator {
    loader: TemplateLoader,
    validator: NameValidator,
}

impl Generator {
    /// Create a generator from its two collaborators
    pub fn new(loader: TemplateLoader, validator: NameValidator) -> Self {
        Self { loader, validator }
    }

    /// Render the template for a request without touching the filesystem
    ///
    /// The bare output file name stands in for the final path, as the
    /// original preview did; the name is not validated here.
    pub fn preview(&self, req: &GenerateRequest, now: DateTime<Local>) -> String {
        let template = self.loader.resolve(req.kind);
        let file_name = req.file_name();
        let ctx = SubstitutionContext::new(
            &req.author,
            &req.namespace,
            &req.name,
            &req.description,
            &req.link,
            Path::new(&file_name),
            now,
        );
        render(&template, &ctx)
    }

    /// Generate the output file for a request
    ///
    /// Fails if the name is invalid or a file already exists at the target
    /// path; an existing file is never overwritten. Missing parent
    /// directories are created.
    pub fn create(&self, req: &GenerateRequest, now: DateTime<Local>) -> Result<PathBuf, GenerateError> {
        if !self.validator.is_valid(&req.name) {
            return Err(GenerateError::InvalidName { name: req.name.clone() });
        }

        let path = req.out_dir.join(req.file_name());
        // The existence check and the write are separate steps; concurrent
        // callers can still race between them.
        if path.exists() {
            return Err(GenerateError::AlreadyExists { path });
        }

        let template = self.loader.resolve(req.kind);
        let ctx = SubstitutionContext::new(
            &req.author,
            &req.namespace,
            &req.name,
            &req.description,
            &req.link,
            &path,
            now,
        );
        let rendered = render(&template, &ctx);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| GenerateError::Write {
                path: path.clone(),
                source: e,
            })?;
        }
        fs::write(&path, &rendered).map_err(|e| GenerateError::Write {
            path: path.clone(),
            source: e,
        })?;

        info!("Created {}", path.display());
        Ok(path)
    }
}
