// Allow panic/unwrap/expect in tests (denied globally via Cargo.toml lints)
#![cfg_attr(
    test,
    allow(clippy::panic, clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing)
)]

use clap::{Parser, Subcommand};
use color_eyre::eyre::{bail, Result, WrapErr};
use std::path::{Path, PathBuf};
use taggart::logging::{init_logging, parse_level, parse_rotation, LogConfig};
use taggart::user_config::{load_user_config, UserConfig};
use taggart::{
    AssociationFailure, AssociationStore, Format, LoadOptions, Orientation, SaveOptions,
};
use tracing::{debug, warn, Level};

/// Taggart - tag files and find them by tag
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Tag database (default: `database` from ~/.taggart/config.toml, else ./tags.txt)
    #[arg(long, env = "TAGGART_DB")]
    db: Option<PathBuf>,

    /// In-memory orientation: tag-->file or file-->tag
    #[arg(long, env = "TAGGART_ORIENTATION")]
    orientation: Option<Orientation>,

    /// Format of the tag database: text, json or yaml (default: from extension)
    #[arg(long, env = "TAGGART_FORMAT")]
    format: Option<Format>,

    /// Enable JSON log format
    #[arg(long, env = "TAGGART_LOG_JSON", default_value = "false")]
    log_json: bool,

    /// Also write logs to a rolling file in this directory
    #[arg(long, env = "TAGGART_LOG_DIR")]
    log_dir: Option<PathBuf>,

    /// Log rotation period: daily, hourly, or never
    #[arg(long, env = "TAGGART_LOG_ROTATION")]
    log_rotation: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Tag every FILE with every TAG
    Tag {
        #[arg(required = true)]
        files: Vec<String>,
        #[arg(short, long = "tag", required = true, num_args = 1..)]
        tags: Vec<String>,
        /// Refuse to tag files that do not exist
        #[arg(long)]
        assert_exists: bool,
    },
    /// Remove every TAG from every FILE
    Untag {
        #[arg(required = true)]
        files: Vec<String>,
        #[arg(short, long = "tag", required = true, num_args = 1..)]
        tags: Vec<String>,
    },
    /// Rename a tag, merging into NEW if it already exists
    RenameTag { old: String, new: String },
    /// Rename a file, merging into NEW if it already exists
    RenameFile { old: String, new: String },
    /// Print the files tagged with TAG
    Files { tag: String },
    /// Print the tags attached to FILE
    Tags { file: String },
    /// Print every tag
    ListTags,
    /// Print every tagged file
    ListFiles,
    /// Flip the orientation, or switch to TARGET (e.g. file-->tag).
    /// Only text databases can be remapped in place.
    Remap { target: Option<String> },
    /// Write the associations to PATH
    Export {
        path: PathBuf,
        #[arg(long)]
        format: Option<Format>,
        /// Fail if PATH already exists
        #[arg(long)]
        no_overwrite: bool,
    },
    /// Merge associations from PATH
    Import {
        path: PathBuf,
        #[arg(long)]
        format: Option<Format>,
        /// Discard current associations first
        #[arg(long)]
        replace: bool,
        /// Skip associations whose file does not exist
        #[arg(long)]
        assert_exists: bool,
    },
}

impl Command {
    /// Whether the database must be written back after this command.
    fn mutates(&self) -> bool {
        !matches!(
            self,
            Self::Files { .. }
                | Self::Tags { .. }
                | Self::ListTags
                | Self::ListFiles
                | Self::Export { .. }
        )
    }
}

/// JSON and YAML keys are stored verbatim and the orientation is not saved,
/// so writing a remapped store back to them would swap tags and files for
/// every later run.
fn check_db_format(command: &Command, db: &Path, db_format: Option<Format>) -> Result<()> {
    let format = Format::resolve(db_format, db);
    if matches!(command, Command::Remap { .. }) && format != Format::Text {
        bail!(
            "Cannot remap a {format} database ({}); use --orientation instead, or export to text",
            db.display()
        );
    }
    Ok(())
}

fn print_names(names: &[String]) {
    for name in names {
        println!("{name}");
    }
}

fn execute(
    store: &mut AssociationStore,
    command: Command,
    assert_exists: bool,
) -> Result<Vec<AssociationFailure>> {
    match command {
        Command::Tag { files, tags, assert_exists: flag } => {
            return Ok(store.add_associations(files, tags, flag || assert_exists));
        }
        Command::Untag { files, tags } => store.remove_associations(files, tags),
        Command::RenameTag { old, new } => store.rename_tag(&old, &new),
        Command::RenameFile { old, new } => store.rename_file(&old, &new),
        Command::Files { tag } => print_names(&store.list_files_by_tag(&tag)),
        Command::Tags { file } => print_names(&store.list_tags_by_file(&file)),
        Command::ListTags => print_names(&store.list_tags()),
        Command::ListFiles => print_names(&store.list_files()),
        Command::Remap { target } => {
            let changed = match target {
                Some(token) => store.remap_token(&token)?,
                None => store.remap().map(|()| true)?,
            };
            if changed {
                println!("{}", store.orientation());
            }
        }
        Command::Export { path, format, no_overwrite } => {
            store.save(&path, SaveOptions { overwrite: !no_overwrite, format })?;
        }
        Command::Import { path, format, replace, assert_exists: flag } => {
            return Ok(store.load(
                &path,
                LoadOptions { overwrite: replace, format, assert_exists: flag || assert_exists },
            )?);
        }
    }
    Ok(Vec::new())
}

fn main() -> Result<()> {
    // Install color-eyre error hooks for colored error output
    color_eyre::install()?;

    let args = Args::parse();

    // Logging settings live in the user config, so read it before logging is up
    // and report a broken file once the subscriber exists.
    let loaded = load_user_config();
    let logging_cfg = loaded
        .as_ref()
        .map(|cfg| cfg.logging.clone())
        .unwrap_or_default();

    let log_level = parse_level(&logging_cfg.level);
    let log_config = LogConfig {
        log_dir: args.log_dir.or(logging_cfg.dir),
        log_level: log_level.unwrap_or(Level::WARN),
        json_format: args.log_json || logging_cfg.json,
        rotation: parse_rotation(args.log_rotation.as_deref().unwrap_or(&logging_cfg.rotation)),
    };
    if let Err(e) = init_logging(log_config) {
        eprintln!("Error: Failed to initialize logging: {e}");
        return Err(e);
    }

    if log_level.is_none() {
        warn!(level = %logging_cfg.level, "Unknown log level in user config, using warn");
    }

    let user_cfg = loaded.unwrap_or_else(|e| {
        warn!("Failed to load user config, using defaults: {e}");
        UserConfig::default()
    });

    let db = args.db.unwrap_or(user_cfg.store.database);
    let orientation = args.orientation.unwrap_or(user_cfg.store.orientation);
    let db_format = args.format.or(user_cfg.store.format);

    check_db_format(&args.command, &db, db_format)?;

    let mut store = AssociationStore::new(orientation);
    if db.exists() {
        store
            .load(&db, LoadOptions { overwrite: true, format: db_format, assert_exists: false })
            .wrap_err_with(|| format!("Failed to read tag database {}", db.display()))?;
    } else {
        debug!("No tag database at {}; starting empty", db.display());
    }

    let mutates = args.command.mutates();
    let failures = execute(&mut store, args.command, user_cfg.store.assert_exists)?;

    if mutates {
        store
            .save(&db, SaveOptions { overwrite: true, format: db_format })
            .wrap_err_with(|| format!("Failed to write tag database {}", db.display()))?;
    }

    if !failures.is_empty() {
        for failure in &failures {
            eprintln!("{} <== {}: {}", failure.tag, failure.file, failure.error);
        }
        bail!("{} association(s) could not be added", failures.len());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_tag_command() {
        let args = Args::try_parse_from([
            "taggart", "--db", "db.json", "tag", "a.txt", "b.txt", "--tag", "red", "blue",
        ])
        .unwrap();
        assert_eq!(args.db, Some(PathBuf::from("db.json")));
        match args.command {
            Command::Tag { files, tags, assert_exists } => {
                assert_eq!(files, vec!["a.txt", "b.txt"]);
                assert_eq!(tags, vec!["red", "blue"]);
                assert!(!assert_exists);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_orientation_and_format_flags() {
        let args = Args::try_parse_from([
            "taggart", "--orientation", "file-->tag", "--format", "yml", "list-tags",
        ])
        .unwrap();
        assert_eq!(args.orientation, Some(Orientation::FileToTag));
        assert_eq!(args.format, Some(Format::Yaml));
    }

    #[test]
    fn test_bad_orientation_is_rejected() {
        assert!(Args::try_parse_from(["taggart", "--orientation", "up", "list-tags"]).is_err());
    }

    #[test]
    fn test_mutating_commands() {
        let parse = |argv: &[&str]| Args::try_parse_from(argv).unwrap().command;
        assert!(parse(&["taggart", "untag", "a", "--tag", "t"]).mutates());
        assert!(parse(&["taggart", "remap"]).mutates());
        assert!(parse(&["taggart", "import", "x.json"]).mutates());
        assert!(!parse(&["taggart", "files", "t"]).mutates());
        assert!(!parse(&["taggart", "export", "x.json"]).mutates());
    }

    #[test]
    fn test_remap_refused_for_structured_databases() {
        let remap = Command::Remap { target: None };
        assert!(check_db_format(&remap, Path::new("tags.json"), None).is_err());
        assert!(check_db_format(&remap, Path::new("tags.yml"), None).is_err());
        assert!(check_db_format(&remap, Path::new("tags.txt"), Some(Format::Json)).is_err());
        assert!(check_db_format(&remap, Path::new("tags.json"), Some(Format::Text)).is_ok());
        assert!(check_db_format(&remap, Path::new("tags.txt"), None).is_ok());
        assert!(check_db_format(&Command::ListTags, Path::new("tags.json"), None).is_ok());
    }

    #[test]
    fn test_remapped_json_database_reads_back_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let db = dir.path().join("tags.json");
        let mut store = AssociationStore::new(Orientation::TagToFile);
        store.add_associations(vec!["file_1", "file_2"], "Tag C", false);
        store.save(&db, SaveOptions::default()).unwrap();

        // The CLI stops before loading, running or saving anything
        let remap = Command::Remap { target: None };
        assert!(check_db_format(&remap, &db, None).is_err());

        let mut reloaded = AssociationStore::new(Orientation::TagToFile);
        reloaded.load(&db, LoadOptions::default()).unwrap();
        assert_eq!(reloaded.list_files_by_tag("Tag C"), vec!["file_1", "file_2"]);
        assert_eq!(reloaded.list_tags(), vec!["Tag C"]);
    }

    #[test]
    fn test_remap_of_text_database_survives_a_reload() {
        let dir = tempfile::tempdir().unwrap();
        let db = dir.path().join("tags.txt");
        let mut store = AssociationStore::new(Orientation::TagToFile);
        store.add_associations(vec!["file_1", "file_2"], "Tag C", false);

        check_db_format(&Command::Remap { target: None }, &db, None).unwrap();
        execute(&mut store, Command::Remap { target: None }, false).unwrap();
        store.save(&db, SaveOptions::default()).unwrap();

        let mut reloaded = AssociationStore::new(Orientation::TagToFile);
        reloaded.load(&db, LoadOptions::default()).unwrap();
        assert_eq!(reloaded.list_files_by_tag("Tag C"), vec!["file_1", "file_2"]);
        assert_eq!(reloaded.list_tags(), vec!["Tag C"]);
    }

    #[test]
    fn test_execute_tag_then_query() {
        let mut store = AssociationStore::new(Orientation::TagToFile);
        let failures = execute(
            &mut store,
            Command::Tag {
                files: vec!["a".to_string()],
                tags: vec!["t".to_string(), "u".to_string()],
                assert_exists: false,
            },
            false,
        )
        .unwrap();
        assert!(failures.is_empty());
        assert_eq!(store.list_tags_by_file("a"), vec!["t", "u"]);
    }

    #[test]
    fn test_execute_tag_reports_missing_files() {
        let mut store = AssociationStore::new(Orientation::TagToFile);
        let failures = execute(
            &mut store,
            Command::Tag {
                files: vec!["/definitely/not/here".to_string()],
                tags: vec!["t".to_string()],
                assert_exists: false,
            },
            true,
        )
        .unwrap();
        assert_eq!(failures.len(), 1);
        assert!(failures[0].error.is_not_found());
        assert!(store.is_empty());
    }
}
