//! The two interactive question sequences of the wizard.
//!
//! Conditional visibility and computed defaults are plain control flow over
//! the `Prompter` port: an answer given earlier in a sequence gates whether
//! a later question is asked at all.

use crate::domain::{AdditionalOptions, AppError, DatabaseConfig, DbDriver, Platform};
use crate::ports::Prompter;

/// Ask for database connection values, pre-seeded from `current`.
///
/// Returns `None` when the operator declines to configure the database; no
/// further question is asked in that case. A file-based driver skips the
/// host, port, username, and password questions and leaves those fields
/// unset.
pub fn prompt_database_config<U: Prompter>(
    prompter: &U,
    current: &DatabaseConfig,
) -> Result<Option<DatabaseConfig>, AppError> {
    let configure = prompter.confirm("¿Deseas configurar la base de datos ahora?", true)?;
    if !configure {
        return Ok(None);
    }

    let labels: Vec<&str> = DbDriver::ALL.iter().map(|driver| driver.name()).collect();
    let default_driver = current
        .connection
        .as_deref()
        .and_then(DbDriver::from_name)
        .and_then(|driver| DbDriver::ALL.iter().position(|candidate| *candidate == driver))
        .unwrap_or(0);
    let selection =
        prompter.select("Selecciona el tipo de base de datos:", &labels, default_driver)?;
    let driver = DbDriver::ALL[selection];

    let mut config =
        DatabaseConfig { connection: Some(driver.name().to_string()), ..Default::default() };

    if !driver.is_file_based() {
        let host_default = current.host.clone().unwrap_or_else(|| "127.0.0.1".to_string());
        config.host = Some(prompter.input("Host de la base de datos:", &host_default)?);

        // A port already present in .env wins over the driver convention.
        let port_default = current
            .port
            .clone()
            .or_else(|| driver.default_port().map(str::to_string))
            .unwrap_or_default();
        config.port = Some(prompter.input("Puerto de la base de datos:", &port_default)?);
    }

    let database_default = current.database.clone().unwrap_or_else(|| "laravel".to_string());
    config.database = Some(prompter.input("Nombre de la base de datos:", &database_default)?);

    if !driver.is_file_based() {
        let username_default = current.username.clone().unwrap_or_else(|| "root".to_string());
        config.username = Some(prompter.input("Usuario de la base de datos:", &username_default)?);
        config.password = Some(prompter.password("Contraseña de la base de datos:")?);
    }

    Ok(Some(config))
}

/// Ask for the post-setup options.
///
/// The Valet question leads the sequence on non-Windows platforms and is
/// omitted entirely on Windows.
pub fn prompt_additional_options<U: Prompter>(
    prompter: &U,
    platform: Platform,
) -> Result<AdditionalOptions, AppError> {
    let link_valet = if platform.is_windows() {
        false
    } else {
        prompter.confirm("¿Deseas enlazar este proyecto con Valet?", true)?
    };

    let run_migrations =
        prompter.confirm("¿Deseas ejecutar las migraciones de la base de datos?", true)?;
    let run_seeders = prompter.confirm("¿Deseas ejecutar los seeders?", false)?;
    let run_tests =
        prompter.confirm("¿Deseas ejecutar los tests para verificar que todo funciona?", false)?;

    Ok(AdditionalOptions { link_valet, run_migrations, run_seeders, run_tests })
}
