use log::{debug, info};
use std::path::PathBuf;

use crate::app_config::Config;
use crate::errors::AppError;
use crate::file_utils::FileManager;
use crate::script_discovery::ScriptDiscovery;
use crate::script_metadata::ScriptMetadata;

// @module: Rendering and writing of the aggregated document

/// Builds the aggregated listing document for a script collection.
///
/// The builder performs one linear pass: discover eligible scripts,
/// extract metadata from each, render the per-script fragments and write
/// the assembled document in a single aggregate write. Any failure along
/// the way aborts the run before the output file is touched, so the
/// previous document is either fully replaced or left unchanged.
pub struct DocumentBuilder {
    // @field: App configuration
    config: Config,
}

impl DocumentBuilder {
    /// Create a builder with the given configuration
    pub fn with_config(config: Config) -> Self {
        DocumentBuilder { config }
    }

    /// Run the full generate-and-write pass
    pub fn generate(&self) -> Result<(), AppError> {
        let content = self.prepare_content()?;
        let document = self.render_document(&content);

        FileManager::write_to_file(&self.config.output_path, &document)
            .map_err(|e| AppError::File(e.to_string()))?;
        info!("Wrote {:?}", self.config.output_path);

        Ok(())
    }

    /// Discover scripts and render their fragments in lexicographic order
    fn prepare_content(&self) -> Result<String, AppError> {
        let discovery = ScriptDiscovery::from_config(&self.config);
        let found = discovery.find()?;

        let mut names: Vec<String> = found.into_iter().collect();
        names.sort();
        info!("Documenting {} scripts from {:?}", names.len(), self.config.scripts_dir);

        let mut content = String::new();
        for name in &names {
            debug!("Extracting metadata from {}", name);
            let fragment = self.render_fragment(name)?;
            content.push_str(&fragment);
            content.push_str("\n\n\n");
        }

        Ok(content)
    }

    /// Render the metadata block for one script
    fn render_fragment(&self, name: &str) -> Result<String, AppError> {
        let path: PathBuf = self.config.scripts_dir.join(name);
        let source =
            FileManager::read_to_string(&path).map_err(|e| AppError::File(e.to_string()))?;

        let meta = ScriptMetadata::extract(name, &source)?;

        Ok(format!(
            "### {link}\n\n+ Author: {author}\n\n+ Created at: {date}\n\n#### Description: {description}",
            link = self.script_link(name),
            author = meta.author,
            date = meta.date,
            description = meta.description,
        ))
    }

    /// Markdown link labeled with the script name
    fn script_link(&self, name: &str) -> String {
        format!("[{name}]({base}{name})", base = self.config.link_base_url())
    }

    /// Substitute the content region into the fixed document template
    fn render_document(&self, content: &str) -> String {
        let mut document = String::new();

        if let Some(header) = &self.config.header {
            document.push_str(header);
            document.push_str("\n\n");
        }

        document.push_str(&self.config.intro);
        document.push_str("\n\n");
        document.push_str(content);

        document
    }
}
