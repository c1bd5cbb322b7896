use clap::Parser;
use colored::Colorize;
use laravel_init::AppError;

const ISSUES_URL: &str = "https://github.com/elmersh/laravel-init/issues";

#[derive(Parser)]
#[command(name = "laravel-init")]
#[command(disable_version_flag = true)]
#[command(
    about = "Inicializa proyectos Laravel descargados de GitHub",
    long_about = "Esta herramienta inicializa proyectos Laravel descargados de GitHub,\n\
                  automatizando tareas comunes como la creación del archivo .env,\n\
                  instalación de dependencias, generación de claves, etc."
)]
#[command(after_help = "Ejemplos:\n  \
    laravel-init                   Inicializa el proyecto en el directorio actual\n  \
    laravel-init --version         Muestra la versión\n  \
    laravel-init --help            Muestra esta ayuda")]
struct Cli {
    /// Muestra la versión
    #[arg(short = 'v', long = "version")]
    version: bool,
}

fn display_version() {
    println!("laravel-init v{}", env!("CARGO_PKG_VERSION"));
    println!("Autor: {}", env!("CARGO_PKG_AUTHORS"));
}

fn main() {
    let cli = Cli::parse();

    if cli.version {
        display_version();
        return;
    }

    if let Err(err) = laravel_init::initialize() {
        match &err {
            // The failing step already reported itself on the spinner line.
            AppError::CommandFailed { .. } => {}
            err if err.is_unexpected() => {
                eprintln!("\n❌ Error inesperado:");
                eprintln!("{err}");
                eprintln!("\nPor favor, reporta este error en: {ISSUES_URL}");
            }
            _ => eprintln!("{}", format!("❌ {err}").red()),
        }
        std::process::exit(1);
    }
}
