//! Charm-style CLI prompts using cliclack

use crate::conflict::DirectoryConflictReport;
use crate::error::{Result, ScaffoldError};
use crate::name::NameReport;
use crate::product::ProductConfig;
use crate::scaffold::{scaffold, ProjectRequest, Prompter, Scaffolded};
use crate::templates::{Template, TemplateCatalog};
use colored::Colorize;
use std::io;

/// CLI arguments for the create command
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// Project directory to create, as typed
    pub project_dir: String,
}

/// [`Prompter`] backed by the terminal
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn show_conflicts(
        &mut self,
        project_dir: &str,
        report: &DirectoryConflictReport,
    ) -> Result<()> {
        let listing: Vec<String> = report
            .entries
            .iter()
            .map(|entry| {
                if entry.is_dir {
                    format!("  {}", entry.display_name().blue())
                } else {
                    format!("  {}", entry.display_name())
                }
            })
            .collect();

        cliclack::log::warning(format!(
            "The directory {} contains files that could conflict:\n\n{}",
            project_dir.green(),
            listing.join("\n")
        ))
        .map_err(terminal_error)?;
        cliclack::log::remark(
            "Either try using a new directory name, or remove the files listed above.",
        )
        .map_err(terminal_error)
    }

    fn confirm(&mut self, message: &str, default: bool) -> Result<bool> {
        cliclack::confirm(message)
            .initial_value(default)
            .interact()
            .map_err(prompt_error)
    }

    fn select_template(&mut self, message: &str, templates: &[Template]) -> Result<usize> {
        if templates.is_empty() {
            return Err(ScaffoldError::NoTemplates);
        }

        let mut select = cliclack::select(message);
        for (idx, template) in templates.iter().enumerate() {
            select = select.item(idx, template.styled_label(), "");
        }
        select.interact().map_err(prompt_error)
    }

    fn warn(&mut self, message: &str) -> Result<()> {
        cliclack::log::warning(message).map_err(terminal_error)
    }
}

/// Prompt failures: Esc / Ctrl+C surface as `Interrupted`
fn prompt_error(err: io::Error) -> ScaffoldError {
    if err.kind() == io::ErrorKind::Interrupted {
        ScaffoldError::Cancelled
    } else {
        terminal_error(err)
    }
}

fn terminal_error(err: io::Error) -> ScaffoldError {
    ScaffoldError::io("write to", "terminal", err)
}

/// Run the CLI with interactive prompts
///
/// Cancellation is reported and returns `Ok`; every other failure is
/// reported and returned so the caller can pick the exit code.
pub fn run<C: ProductConfig>(config: &C, args: CreateArgs) -> Result<()> {
    cliclack::intro(config.display_name()).map_err(terminal_error)?;

    let catalog = TemplateCatalog::from_config(config);
    let mut prompter = TerminalPrompter;

    let result = ProjectRequest::from_arg(&args.project_dir).and_then(|request| {
        let done = scaffold(&request, &catalog, &mut prompter)?;
        print_next_steps(config, &request, &done)
    });

    match result {
        Ok(()) => Ok(()),
        Err(ScaffoldError::Cancelled) => {
            cliclack::outro_cancel(format!("{} Operation cancelled", "✖".red()))
                .map_err(terminal_error)?;
            Ok(())
        }
        Err(err) => {
            // Rendering failures are secondary to the error being reported
            let _ = report_failure(&err, config.template_dir_env());
            Err(err)
        }
    }
}

fn report_failure(err: &ScaffoldError, template_dir_env: &str) -> io::Result<()> {
    match err {
        ScaffoldError::InvalidName { name, report } => {
            cliclack::log::error(invalid_name_message(name, report))?;
            cliclack::outro_cancel("Please choose a different project name.")
        }
        other => {
            cliclack::log::error(other.to_string())?;
            if let Some(hint) = template_dir_hint(other, template_dir_env) {
                cliclack::log::remark(hint)?;
            }
            cliclack::outro_cancel("Project was not created.")
        }
    }
}

/// Point at the override variable when the template files cannot be found
fn template_dir_hint(err: &ScaffoldError, template_dir_env: &str) -> Option<String> {
    match err {
        ScaffoldError::MissingTemplate { .. } | ScaffoldError::NoTemplates => Some(format!(
            "Set {} to the directory that contains the templates.",
            template_dir_env.cyan()
        )),
        _ => None,
    }
}

fn invalid_name_message(name: &str, report: &NameReport) -> String {
    let mut message = format!(
        "Cannot create a project named {} because of npm naming restrictions:\n",
        format!("\"{}\"", name).green()
    );
    for violation in report.messages() {
        message.push_str(&format!("\n  {}", format!("* {}", violation).red()));
    }
    message
}

fn print_next_steps<C: ProductConfig>(
    config: &C,
    request: &ProjectRequest,
    done: &Scaffolded,
) -> Result<()> {
    cliclack::log::success(format!(
        "Created {} files from {} in {}",
        done.materialized.files.len() + 1,
        done.template.id,
        request.destination().display()
    ))
    .map_err(terminal_error)?;

    let steps = config.next_steps(request.input());

    println!();
    println!("  Success! Now run:");
    println!();

    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }
    println!();

    cliclack::outro("Happy coding!").map_err(terminal_error)?;

    Ok(())
}
