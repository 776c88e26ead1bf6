//! CLI Adapter.

mod input;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::app::api::{self, DockerCiOptions, DockerfileOptions, RunOptions, TerraformCiOptions};
use crate::app::commands::{DEFAULT_BRANCH, DEFAULT_DIR};
use crate::domain::{AppError, GeneratedArtifact};

#[derive(Parser)]
#[command(name = "infragen")]
#[command(version)]
#[command(
    about = "Generate commit messages, Dockerfiles and CI workflows with an LLM provider",
    long_about = None
)]
struct Cli {
    /// Provider: bedrock, azure-openai, azure-ai, ollama, gemini
    #[arg(long, global = true)]
    provider: Option<String>,
    /// Request timeout in seconds
    #[arg(long, global = true)]
    timeout: Option<u64>,
    /// Path to an infragen.toml config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug, Default)]
struct SaveArgs {
    /// Save without asking
    #[arg(long)]
    save: bool,
    /// Directory to save into (implies --save)
    #[arg(long)]
    output_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Suggest a commit message for the last commit
    #[clap(visible_alias = "c")]
    Commit,
    /// Generate a Dockerfile
    #[clap(visible_alias = "d")]
    Dockerfile {
        /// Application language (e.g. python, node, go)
        #[arg(short, long)]
        language: Option<String>,
        /// Project directory inspected for dependency manifests
        #[arg(long, default_value = DEFAULT_DIR)]
        dir: PathBuf,
        #[command(flatten)]
        save: SaveArgs,
    },
    /// Generate a GitHub Actions workflow that builds and pushes a Docker image
    #[clap(visible_alias = "dc")]
    DockerCi {
        /// Branches that trigger the workflow
        #[arg(short, long)]
        branch: Option<String>,
        /// Directory containing the Dockerfile
        #[arg(long)]
        app_dir: Option<String>,
        /// Docker Hub username
        #[arg(long)]
        dockerhub_user: Option<String>,
        /// Image name
        #[arg(long)]
        image: Option<String>,
        #[command(flatten)]
        save: SaveArgs,
    },
    /// Generate a GitHub Actions workflow for Terraform
    #[clap(visible_alias = "tf")]
    TerraformCi {
        /// Cloud provider: aws, azure, google
        #[arg(long)]
        cloud: Option<String>,
        /// Branches that trigger the workflow
        #[arg(short, long)]
        branch: Option<String>,
        /// Terraform working directory
        #[arg(long)]
        tf_dir: Option<String>,
        #[command(flatten)]
        save: SaveArgs,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    let options =
        RunOptions { provider: cli.provider, timeout_secs: cli.timeout, config: cli.config };

    let result: Result<(), AppError> = match cli.command {
        Commands::Commit => run_commit(&options),
        Commands::Dockerfile { language, dir, save } => {
            run_dockerfile(&options, language, dir, save)
        }
        Commands::DockerCi { branch, app_dir, dockerhub_user, image, save } => {
            run_docker_ci(&options, branch, app_dir, dockerhub_user, image, save)
        }
        Commands::TerraformCi { cloud, branch, tf_dir, save } => {
            run_terraform_ci(&options, cloud, branch, tf_dir, save)
        }
    };

    match result {
        Ok(()) => {}
        Err(e) if e.is_empty_input() => println!("{}", e),
        Err(e) => {
            eprintln!("Error [{}]: {}", e.class(), e);
            std::process::exit(1);
        }
    }
}

fn run_commit(options: &RunOptions) -> Result<(), AppError> {
    let generated = api::commit(options)?;
    println!("Suggested commit message:\n");
    println!("{}", generated.content);
    Ok(())
}

fn run_dockerfile(
    options: &RunOptions,
    language: Option<String>,
    dir: PathBuf,
    save: SaveArgs,
) -> Result<(), AppError> {
    let Some(language) = input::required_or_prompt(language, "Application language")? else {
        return Ok(());
    };

    let generated =
        api::dockerfile(options, &DockerfileOptions { language, project_dir: dir })?;
    present(&generated, save)
}

fn run_docker_ci(
    options: &RunOptions,
    branch: Option<String>,
    app_dir: Option<String>,
    dockerhub_user: Option<String>,
    image: Option<String>,
    save: SaveArgs,
) -> Result<(), AppError> {
    let Some(branch) = input::or_prompt(branch, "Branches", DEFAULT_BRANCH)? else {
        return Ok(());
    };
    let Some(app_dir) = input::or_prompt(app_dir, "Application directory", DEFAULT_DIR)? else {
        return Ok(());
    };
    let Some(dockerhub_username) =
        input::required_or_prompt(dockerhub_user, "Docker Hub username")?
    else {
        return Ok(());
    };
    let Some(image_name) = input::required_or_prompt(image, "Image name")? else {
        return Ok(());
    };

    let generated = api::docker_ci(
        options,
        &DockerCiOptions { branch, app_dir, dockerhub_username, image_name },
    )?;
    present(&generated, save)
}

fn run_terraform_ci(
    options: &RunOptions,
    cloud: Option<String>,
    branch: Option<String>,
    tf_dir: Option<String>,
    save: SaveArgs,
) -> Result<(), AppError> {
    let Some(cloud) = input::required_or_prompt(cloud, "Cloud provider (aws, azure, google)")?
    else {
        return Ok(());
    };
    // Reject unknown clouds before asking anything else.
    cloud.parse::<crate::domain::CloudProvider>()?;

    let Some(branch) = input::or_prompt(branch, "Branches", DEFAULT_BRANCH)? else {
        return Ok(());
    };
    let Some(tf_dir) = input::or_prompt(tf_dir, "Terraform directory", DEFAULT_DIR)? else {
        return Ok(());
    };

    let generated =
        api::terraform_ci(options, &TerraformCiOptions { cloud, branch, tf_dir })?;
    present(&generated, save)
}

/// Print the generated text, then save it when asked to.
fn present(generated: &GeneratedArtifact, save: SaveArgs) -> Result<(), AppError> {
    println!("Generated {}:\n", generated.artifact);
    println!("{}", generated.content);

    let dir = match (save.output_dir, save.save) {
        (Some(dir), _) => dir,
        (None, true) => PathBuf::from(DEFAULT_DIR),
        (None, false) => {
            if !input::interactive() || !input::confirm_save(generated)? {
                return Ok(());
            }
            match input::or_prompt(None, "Save directory", DEFAULT_DIR)? {
                Some(dir) => PathBuf::from(dir),
                None => return Ok(()),
            }
        }
    };

    let path = api::save(generated, &dir)?;
    println!("✅ Saved {} to {}", generated.artifact, path.display());
    Ok(())
}
