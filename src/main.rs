use anyhow::Result;
use clap::{Parser, Subcommand};
use gitviz::areas::repository::Repository;

#[derive(Parser)]
#[command(
    name = "gitviz",
    version = "0.1.0",
    about = "Render a git object store as a DOT graph",
    long_about = "This tool reads the loose object store of a git repository and renders \
    its structure as DOT graph text for visualization: either the full \
    commit/tree/blob graph reachable from HEAD, or the linear commit history chain.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "graph",
        about = "Render the commit/tree graph reachable from HEAD",
        long_about = "This command resolves HEAD, walks the commit's tree and nested subtrees \
        through the object store and writes the resulting graph to 'git_graph.dot' \
        in the repository root."
    )]
    Graph {
        #[arg(index = 1, help = "The path to the repository")]
        path: Option<String>,
    },
    #[command(
        name = "history",
        about = "Render the linear commit history chain",
        long_about = "This command lists the full commit history of the current branch and \
        writes a chain graph connecting consecutive commits to \
        'git_graph_all_commits.dot' in the repository root."
    )]
    History {
        #[arg(index = 1, help = "The path to the repository")]
        path: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Graph { path } => repository_at(path.as_deref())?.graph()?,
        Commands::History { path } => repository_at(path.as_deref())?.history_graph()?,
    }

    Ok(())
}

fn repository_at(path: Option<&str>) -> Result<Repository> {
    match path {
        Some(path) => Repository::new(path, Box::new(std::io::stdout())),
        None => {
            let pwd = std::env::current_dir()?;
            Repository::new(&pwd.to_string_lossy(), Box::new(std::io::stdout()))
        }
    }
}
