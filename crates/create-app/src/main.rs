//! create-app - Project scaffolding for React applications and TypeScript libraries

use anyhow::{Context, Result};
use clap::{CommandFactory, FromArgMatches, Parser};
use scaffolder_core::tui::CreateArgs;
use scaffolder_core::{ProductConfig, Template, TemplateKind};
use std::path::PathBuf;

/// Templates shipped with the CLI, in selection order
const TEMPLATES: &[Template] = &[
    Template {
        id: "react-app",
        label: "react-app",
        kind: TemplateKind::Application,
    },
    Template {
        id: "react-app-ts",
        label: "react-app-ts",
        kind: TemplateKind::Application,
    },
    Template {
        id: "ts-library",
        label: "ts-lib",
        kind: TemplateKind::Library,
    },
    Template {
        id: "react-lib",
        label: "react-lib",
        kind: TemplateKind::Library,
    },
];

/// create-app product configuration
#[derive(Clone)]
pub struct CreateAppConfig;

impl ProductConfig for CreateAppConfig {
    fn display_name(&self) -> &'static str {
        "create-app"
    }

    fn cli_description(&self) -> &'static str {
        "Scaffold a React application or TypeScript library from a template"
    }

    fn templates(&self) -> &'static [Template] {
        TEMPLATES
    }

    fn template_dir_env(&self) -> &'static str {
        "CREATE_APP_TEMPLATE_DIR"
    }

    fn default_template_dir(&self) -> PathBuf {
        // Installed layout: templates/ next to the executable
        let installed = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("templates")))
            .filter(|dir| dir.is_dir());

        installed.unwrap_or_else(|| {
            PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/../../templates"))
        })
    }

    fn next_steps(&self, app_name: &str) -> Vec<String> {
        vec![
            format!("cd {}", app_name),
            "npm install".to_string(),
            "npm run dev".to_string(),
        ]
    }
}

#[derive(Parser, Debug)]
#[command(name = "create-app")]
#[command(version)]
#[command(
    after_help = "Templates are read from CREATE_APP_TEMPLATE_DIR when it is set, otherwise from \
                  templates/ next to the executable or the source checkout it was built from."
)]
pub struct Args {
    /// Project directory to create
    #[arg(value_name = "project-directory")]
    pub project_directory: String,
}

fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Ctrl+C outside a prompt; prompts handle it themselves as a cancellation
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .context("Failed to install Ctrl+C handler")?;

    let config = CreateAppConfig;
    let matches = Args::command()
        .about(config.cli_description())
        .get_matches();
    let args = Args::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let result = scaffolder_core::run(
        &config,
        CreateArgs {
            project_dir: args.project_directory,
        },
    );

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    if let Err(err) = result {
        std::process::exit(err.exit_code());
    }

    Ok(())
}
