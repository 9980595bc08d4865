use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use libsubschema::Diagnostic;
use std::collections::HashSet;
use std::error::Error;
use std::path::PathBuf;
use walkdir::WalkDir;

#[derive(Debug, clap::Args)]
pub(crate) struct ValidateCmd {
    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "graphqls".to_string(),
        ],
        help="Set of file extensions to filter to when searching for schema \
             files within a directory.",
        long,
        value_delimiter = ',',
    )]
    schema_file_exts: Vec<String>,

    #[arg(
        help="Paths to one or more schema files or directories containing \
             schema files which need to be validated.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}

#[inherent::inherent]
impl RunnableCommand for ValidateCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let mut errors: Vec<Box<dyn Error>> = vec![];

        // Normalize the set of file extensions to filter with
        let schema_file_exts: HashSet<String> =
            self.schema_file_exts.iter()
                .map(|ext| {
                    if !ext.starts_with('.') {
                        format!(".{ext}")
                    } else {
                        ext.to_owned()
                    }
                })
                .collect();

        // Find all schema files recursively located at or under each path
        // passed as an arg.
        log::debug!(
            "Scanning {} input paths...",
            self.file_or_dir_paths.len(),
        );
        let mut num_skipped_files = 0;
        let mut file_paths = vec![];
        for path in &self.file_or_dir_paths {
            for entry in WalkDir::new(path.as_path()).follow_links(true) {
                match entry {
                    Ok(entry) => {
                        let path = entry.path();
                        let file_type = entry.file_type();
                        if file_type.is_file() {
                            log::trace!("Found file at {path:#?}.");
                            if let Some(ext) = path.extension().map(|s| s.to_string_lossy())
                                && schema_file_exts.contains::<String>(&format!(".{ext}")) {
                                file_paths.push(std::fs::canonicalize(path).unwrap().to_owned());
                            } else {
                                num_skipped_files += 1;
                            }
                        } else {
                            log::trace!("Skipping non-file: {path:#?}.");
                        }
                    },

                    Err(e) => {
                        log::trace!(
                            "Encountered an error while iterating recursive \
                            filesystem entities at/under {path:#?}."
                        );
                        errors.push(Box::new(e));
                        continue
                    },
                }
            }
        }

        // If the user specifies a single file path as an argument, presume
        // the user explicitly wants that file loaded and validated as a
        // schema file -- even if its file extension doesn't match one of the
        // file extensions specified in `schema_file_exts`.
        if file_paths.is_empty()
            && self.file_or_dir_paths.len() == 1
            && let Some(first_arg_path) = self.file_or_dir_paths.first()
            && first_arg_path.is_file() {
            let canonicalized_first_arg_path =
                std::fs::canonicalize(first_arg_path)
                    .unwrap()
                    .to_owned();
            log::warn!(
                "Proceeding to validate {canonicalized_first_arg_path:#?} even \
                though it doesn't match any of the --schema-file-exts \
                ({}).",
                schema_file_exts.iter()
                    .map(|ext| format!("`{ext}`"))
                    .collect::<Vec<_>>()
                    .join(", "),
            );
            file_paths.push(canonicalized_first_arg_path);
        }

        log::debug!(
            "Found {} schema files to be validated.",
            file_paths.len(),
        );

        // Validate each schema file on its own; load and parse failures are
        // fatal for that file, rule findings accumulate as diagnostics.
        let mut diagnostics: Vec<Diagnostic> = vec![];
        for file_path in &file_paths {
            match libsubschema::validate_schema_file(file_path) {
                Ok(file_diagnostics) =>
                    diagnostics.extend(file_diagnostics),
                Err(e) => errors.push(Box::new(e)),
            }
        }

        if !errors.is_empty() {
            return CommandResult::stderr(format_args!(
                "{} Failed to load or parse {} schema file(s):\n{}",
                output_utils::RED_X,
                errors.len(),
                errors.iter()
                    .map(|e| format!("  * {e}"))
                    .collect::<Vec<_>>()
                    .join("\n"),
            ));
        }

        if diagnostics.is_empty() {
            CommandResult::stdout(format_args!(
                concat!(
                    "{} All schemas validated successfully:\n",
                    "  * Analyzed {} files.\n",
                    "  * Skipped {} non-schema files.",
                ),
                output_utils::GREEN_CHECK,
                file_paths.len(),
                num_skipped_files,
            ))
        } else {
            CommandResult::stderr(format_args!(
                "{} Found {} schema validation error(s):\n{}",
                output_utils::RED_X,
                diagnostics.len(),
                diagnostics.iter()
                    .map(render_diagnostic)
                    .collect::<Vec<_>>()
                    .join("\n"),
            ))
        }
    }
}

fn render_diagnostic(diagnostic: &Diagnostic) -> String {
    let file =
        diagnostic.location.file.as_ref()
            .map(|path| path.display().to_string())
            .unwrap_or_else(|| "<schema>".to_string());
    format!(
        "  * {file}:{}:{} `{}`: {}",
        diagnostic.location.line,
        diagnostic.location.col,
        diagnostic.entity,
        diagnostic.message.replace('\n', "\n    "),
    )
}
