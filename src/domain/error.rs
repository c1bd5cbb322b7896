use std::io;

use thiserror::Error;

/// Library-wide error type for laravel-init operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// The working directory is not a Laravel project.
    #[error(
        "El directorio actual no parece ser un proyecto Laravel.\nAsegúrate de estar en la raíz del proyecto Laravel."
    )]
    ProjectInvalid,

    /// One or more required external tools are missing from the PATH.
    #[error("Por favor, instala todas las dependencias requeridas antes de continuar.")]
    MissingDependencies,

    /// A critical external command failed; the pipeline cannot continue.
    #[error("{label}")]
    CommandFailed { label: String },

    /// An interactive prompt could not be completed.
    #[error("No se pudo leer la respuesta: {0}")]
    PromptFailed(String),
}

impl AppError {
    /// True for faults outside the wizard's expected failure modes.
    pub fn is_unexpected(&self) -> bool {
        matches!(self, AppError::Io(_))
    }
}
