use anyhow::Result;
use clap::{ArgGroup, Parser, Subcommand};
use is_terminal::IsTerminal;
use kit::areas::repository::Repository;
use kit::commands::porcelain::commit::TreeSource;
use kit::commands::porcelain::log::LogOptions;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "kit",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "A minimal content-addressed version-control engine",
    long_about = "kit stores file contents as content-addressed objects, links \
    snapshots into a commit history and lets you inspect that history. \
    It keeps the on-disk layout of a git repository's object store and refs.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(
        short = 'C',
        global = true,
        value_name = "PATH",
        help = "Run as if started in PATH instead of the current directory"
    )]
    directory: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "init",
        about = "Initialize a new repository",
        long_about = "This command initializes a new repository in the current directory or at the specified path."
    )]
    Init {
        #[arg(index = 1, help = "The path to the repository")]
        path: Option<PathBuf>,
    },
    #[command(
        name = "hash-object",
        about = "Compute the object ID of a file and optionally store it",
        long_about = "This command hashes the raw bytes of a file and can write them to the object store."
    )]
    HashObject {
        #[arg(short, long, help = "Write the object to the object store")]
        write: bool,
        #[arg(index = 1)]
        file: PathBuf,
    },
    #[command(
        name = "cat-file",
        about = "Print the raw content of an object",
        long_about = "This command prints the stored bytes of an object. \
        The object may be named by ID, abbreviated ID or revision."
    )]
    CatFile {
        #[arg(index = 1, help = "The object to print")]
        object: String,
    },
    #[command(
        name = "add",
        about = "Store file contents as objects",
        long_about = "This command writes the bytes of each file to the object store and prints their IDs."
    )]
    Add {
        #[arg(required = true, num_args = 1..)]
        paths: Vec<PathBuf>,
    },
    #[command(
        name = "commit",
        about = "Record a new commit on the current branch",
        long_about = "This command stores a snapshot (a file, or an existing object given with --tree) \
        and records it as a commit whose parent is the current HEAD.",
        group(ArgGroup::new("snapshot").required(true).args(["file", "tree"]))
    )]
    Commit {
        #[arg(short, long, help = "The commit message")]
        message: String,
        #[arg(long, help = "Use an already stored object as the snapshot")]
        tree: Option<String>,
        #[arg(index = 1, help = "The file to record as the snapshot")]
        file: Option<PathBuf>,
    },
    #[command(
        name = "log",
        about = "Show commit history",
        long_about = "This command walks the commit history backwards from a revision (HEAD by default)."
    )]
    Log {
        #[arg(index = 1)]
        revision: Option<String>,
        #[arg(short = 'n', long = "max-count", help = "Limit the number of commits shown")]
        max_count: Option<usize>,
        #[arg(long, help = "Show each commit on a single line")]
        oneline: bool,
        #[arg(long, help = "Show the refs pointing at each commit")]
        decorate: bool,
    },
    #[command(name = "rev-parse", about = "Resolve a revision to an object ID")]
    RevParse {
        #[arg(index = 1)]
        revision: String,
    },
    #[command(name = "show-ref", about = "List refs and the objects they point to")]
    ShowRef,
    #[command(
        name = "tag",
        about = "List or create lightweight tags",
        long_about = "Without arguments this command lists tags. \
        With a name it creates a tag pointing at the given revision (HEAD by default)."
    )]
    Tag {
        #[arg(index = 1)]
        name: Option<String>,
        #[arg(index = 2)]
        revision: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    if !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    let pwd = match cli.directory {
        Some(directory) => std::path::absolute(directory)?,
        None => std::env::current_dir()?,
    };
    let mut stdout = std::io::stdout().lock();

    match cli.command {
        Commands::Init { path } => {
            let path = path.map_or_else(|| pwd.clone(), |path| pwd.join(path));
            Repository::init(&path, &mut stdout)?;
        }
        Commands::HashObject { write, file } => {
            let repository = Repository::find(&pwd)?;
            repository.hash_object(&pwd.join(file), write, &mut stdout)?
        }
        Commands::CatFile { object } => {
            let repository = Repository::find(&pwd)?;
            repository.cat_file(&object, &mut stdout)?
        }
        Commands::Add { paths } => {
            let repository = Repository::find(&pwd)?;
            repository.add(&absolute_paths(&pwd, paths), &mut stdout)?
        }
        Commands::Commit {
            message,
            tree,
            file,
        } => {
            let repository = Repository::find(&pwd)?;
            let tree_source = match (tree, file) {
                (Some(tree), _) => TreeSource::Object(tree),
                (None, Some(file)) => TreeSource::File(pwd.join(file)),
                (None, None) => anyhow::bail!("either a file or --tree is required"),
            };

            repository.commit(&tree_source, &message, &mut stdout)?
        }
        Commands::Log {
            revision,
            max_count,
            oneline,
            decorate,
        } => {
            let repository = Repository::find(&pwd)?;
            let opts = LogOptions {
                oneline,
                max_count,
                decorate,
            };

            repository.log(revision.as_deref(), &opts, &mut stdout)?
        }
        Commands::RevParse { revision } => {
            let repository = Repository::find(&pwd)?;
            repository.rev_parse(&revision, &mut stdout)?
        }
        Commands::ShowRef => {
            let repository = Repository::find(&pwd)?;
            repository.show_ref(&mut stdout)?
        }
        Commands::Tag { name, revision } => {
            let repository = Repository::find(&pwd)?;
            repository.tag(name.as_deref(), revision.as_deref(), &mut stdout)?
        }
    }

    Ok(())
}

fn absolute_paths(pwd: &Path, paths: Vec<PathBuf>) -> Vec<PathBuf> {
    paths.into_iter().map(|path| pwd.join(path)).collect()
}
