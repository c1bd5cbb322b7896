use colored::Colorize;

use crate::domain::{AppError, ComposerManifest};
use crate::ports::ProjectStore;

const ARTISAN_FILE: &str = "artisan";
const APP_DIR: &str = "app";
const HTTP_DIR: &str = "app/Http";
const MANIFEST_FILE: &str = "composer.json";

/// Framework details gathered while validating the project.
#[derive(Debug, Clone)]
pub struct ProjectInfo {
    pub version: Option<String>,
}

fn read_manifest<P: ProjectStore>(project: &P) -> Option<ComposerManifest> {
    if !project.exists(MANIFEST_FILE) {
        return None;
    }
    project.read(MANIFEST_FILE).ok().and_then(|raw| ComposerManifest::parse(&raw))
}

/// Whether the project root looks like a Laravel application: the artisan
/// marker plus the app/Http tree, or a manifest that declares the framework.
fn is_laravel_project<P: ProjectStore>(project: &P, manifest: Option<&ComposerManifest>) -> bool {
    let has_artisan = project.exists(ARTISAN_FILE);
    let has_app_dir = project.exists(APP_DIR) && project.exists(HTTP_DIR);
    let declares_laravel = manifest
        .map(|manifest| manifest.depends_on_framework() || manifest.is_starter_package())
        .unwrap_or(false);

    (has_artisan && has_app_dir) || declares_laravel
}

/// Validate the working directory and report the detected framework.
///
/// Version detection is best-effort: an unparseable requirement prints
/// nothing and is not an error.
pub fn execute<P: ProjectStore>(project: &P) -> Result<ProjectInfo, AppError> {
    let manifest = read_manifest(project);

    if !is_laravel_project(project, manifest.as_ref()) {
        return Err(AppError::ProjectInvalid);
    }

    println!("{}", "✅ Proyecto Laravel detectado".green());

    let version = manifest.as_ref().and_then(|manifest| manifest.framework_version());
    if let Some(version) = &version {
        println!("{}", format!("ℹ️ Versión de Laravel detectada: {version}").blue());
    }

    Ok(ProjectInfo { version })
}
