//! The fixed setup pipeline: validate, probe tools, configure `.env`,
//! install dependencies, then the optional post-setup commands.

pub mod doctor;
pub mod env;
pub mod questions;
pub mod validate;

use colored::Colorize;

use crate::app::AppContext;
use crate::app::steps::{RunStep, StepOptions, run_step};
use crate::domain::{AppError, DatabaseConfig};
use crate::ports::{CommandRunner, ProjectStore, Prompter};

use self::env::EnvFileOutcome;

fn print_banner() {
    println!();
    println!("{}", "🚀 Laravel Project Initializer".blue().bold());
    println!("{}", "=====================================".blue());
    println!();
}

fn print_doctor_report(report: &doctor::DoctorReport) {
    for check in &report.checks {
        if check.installed {
            println!("{} {} instalado correctamente", "✓".green(), check.name);
        } else if check.required {
            eprintln!("{} {} no está instalado o no está en el PATH", "✗".red(), check.name);
        } else {
            println!(
                "{} {} no está instalado. El proyecto se preparará pero no se enlazará automáticamente.",
                "!".yellow(),
                check.name
            );
        }
    }
}

fn print_env_outcome(result: Result<EnvFileOutcome, AppError>) {
    match result {
        Ok(EnvFileOutcome::AlreadyExists) => {
            println!("{}", "⚠️ El archivo .env ya existe, se omitió la configuración".yellow());
        }
        Ok(EnvFileOutcome::CreatedConfigured) => {
            println!("{}", "Creando archivo .env a partir de .env.example...".blue());
            println!("{}", "✅ Archivo .env configurado con datos de la base de datos".green());
        }
        Ok(EnvFileOutcome::CreatedDefault) => {
            println!("{}", "Creando archivo .env a partir de .env.example...".blue());
            println!("{}", "✅ Archivo .env creado (usando valores por defecto)".green());
        }
        Ok(EnvFileOutcome::TemplateMissing) => {
            eprintln!("{}", "❌ No se encontró el archivo .env.example".red());
        }
        // A filesystem fault here is recoverable: report it and keep going.
        Err(err) => {
            eprintln!("{}", format!("❌ Error al configurar el archivo .env: {err}").red());
        }
    }
}

fn critical<C: CommandRunner>(runner: &C, step: RunStep<'_>) -> Result<(), AppError> {
    if run_step(runner, &step, &StepOptions::default()) {
        Ok(())
    } else {
        Err(AppError::CommandFailed { label: step.error_label.to_string() })
    }
}

/// Execute the full setup pipeline against the context's project.
pub fn execute<P, C, U>(ctx: &AppContext<P, C, U>) -> Result<(), AppError>
where
    P: ProjectStore,
    C: CommandRunner,
    U: Prompter,
{
    print_banner();

    // Step 1: refuse to touch anything that is not a Laravel checkout.
    validate::execute(ctx.project())?;
    println!();

    // Step 2: external tools.
    println!("{}", "📋 Verificando dependencias necesarias...".bold());
    let report = doctor::execute(ctx.runner(), ctx.platform());
    print_doctor_report(&report);
    if !report.all_required_installed() {
        return Err(AppError::MissingDependencies);
    }
    println!();

    // Step 3: .env file, pre-seeding the prompts from any existing one.
    println!("{}", "📝 Configuración del archivo .env".bold());
    let current = env::current_db_config(ctx.project()).unwrap_or_else(DatabaseConfig::default);
    let db_config = questions::prompt_database_config(ctx.prompter(), &current)?;
    print_env_outcome(env::setup_env_file(ctx.project(), db_config.as_ref()));
    println!();

    // Steps 4-5: without vendor/ and an app key nothing else works.
    println!("{}", "📦 Instalando dependencias...".bold());
    critical(
        ctx.runner(),
        RunStep {
            command: "composer install",
            loading: "Instalando dependencias de Composer",
            error_label: "Error al instalar las dependencias de Composer",
        },
    )?;
    critical(
        ctx.runner(),
        RunStep {
            command: "php artisan key:generate",
            loading: "Generando clave de aplicación",
            error_label: "Error al generar la clave de aplicación",
        },
    )?;

    // Steps 6-7: front-end tooling is best-effort; skip the build when the
    // install already failed.
    let npm_ok = run_step(
        ctx.runner(),
        &RunStep {
            command: "npm install",
            loading: "Instalando dependencias de Node.js",
            error_label: "Error al instalar las dependencias de Node.js",
        },
        &StepOptions::default(),
    );
    if npm_ok {
        run_step(
            ctx.runner(),
            &RunStep {
                command: "npm run build",
                loading: "Compilando assets",
                error_label: "Error al compilar los assets",
            },
            &StepOptions::default(),
        );
    }
    println!();

    // Step 8: optional follow-ups.
    println!("{}", "🔍 Opciones adicionales".bold());
    let options = questions::prompt_additional_options(ctx.prompter(), ctx.platform())?;

    let site_name = ctx.project().dir_name();
    let linked = !ctx.platform().is_windows() && options.link_valet;
    if linked {
        let link_command = format!("valet link {site_name}");
        run_step(
            ctx.runner(),
            &RunStep {
                command: &link_command,
                loading: "Enlazando con Laravel Valet",
                error_label: "Error al enlazar con Valet",
            },
            &StepOptions {
                success_message: Some(format!(
                    "Proyecto enlazado con Valet. Accesible en http://{site_name}.test"
                )),
                ..Default::default()
            },
        );
    }

    if options.run_migrations {
        run_step(
            ctx.runner(),
            &RunStep {
                command: "php artisan migrate",
                loading: "Ejecutando migraciones de la base de datos",
                error_label: "Error al ejecutar las migraciones",
            },
            &StepOptions::default(),
        );
    }

    if options.run_seeders {
        run_step(
            ctx.runner(),
            &RunStep {
                command: "php artisan db:seed",
                loading: "Ejecutando seeders",
                error_label: "Error al ejecutar los seeders",
            },
            &StepOptions::default(),
        );
    }

    if options.run_tests {
        run_step(
            ctx.runner(),
            &RunStep {
                command: "php artisan test",
                loading: "Ejecutando tests",
                error_label: "Algunos tests han fallado",
            },
            &StepOptions { show_output: true, ..Default::default() },
        );
    }

    println!();
    println!("{}", "🎉 ¡Proyecto Laravel inicializado correctamente!".green().bold());
    println!("{}", "Puedes comenzar a trabajar en tu proyecto ahora.".green());
    if linked {
        println!("{}", format!("🌐 URL del proyecto: http://{site_name}.test").blue());
    }

    Ok(())
}
