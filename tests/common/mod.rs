//! Shared testing utilities for the laravel-init CLI tests.

use assert_cmd::Command;
use assert_fs::TempDir;
use assert_fs::fixture::ChildPath;
use assert_fs::prelude::*;
use std::path::Path;

/// Isolated project directory for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated project directory.
    pub fn new() -> Self {
        Self { root: TempDir::new().expect("failed to create temp directory for tests") }
    }

    /// Absolute path to the project directory.
    pub fn path(&self) -> &Path {
        self.root.path()
    }

    /// A path under the project directory, for fixture setup and asserts.
    pub fn child(&self, relative: &str) -> ChildPath {
        self.root.child(relative)
    }

    /// Build a command for the compiled `laravel-init` binary, run inside
    /// the project directory.
    pub fn cli(&self) -> Command {
        let mut cmd =
            Command::cargo_bin("laravel-init").expect("failed to locate laravel-init binary");
        cmd.current_dir(self.root.path());
        cmd
    }

    /// Lay down the minimal marker files of a Laravel checkout.
    pub fn scaffold_laravel_project(&self) {
        self.child("artisan")
            .write_str("#!/usr/bin/env php\n")
            .expect("failed to write artisan");
        self.child("app/Http").create_dir_all().expect("failed to create app/Http");
        self.child("composer.json")
            .write_str(r#"{"name":"acme/shop","require":{"laravel/framework":"^10.0"}}"#)
            .expect("failed to write composer.json");
        self.child(".env.example")
            .write_str(
                "DB_CONNECTION=mysql\nDB_HOST=127.0.0.1\nDB_PORT=3306\n\
                 DB_DATABASE=laravel\nDB_USERNAME=root\nDB_PASSWORD=\n",
            )
            .expect("failed to write .env.example");
    }
}
