//! foldergen's main application entry point.
//! Handles command-line argument parsing and drives
//! configuration loading, structure generation and output.

use foldergen::{
    builder::StructureBuilder,
    catalog::TemplateCatalog,
    cli::{get_args, render, Args},
    config::{get_config, Configuration},
    error::{default_error_handler, Result},
    logger::init_logger,
};

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Loads the configuration file, if one was given
/// 2. Applies command-line overrides
/// 3. Replaces a framework the project type does not allow
/// 4. Builds the folder structure
/// 5. Prints it or writes it to the output file
fn run(args: Args) -> Result<()> {
    let base = match &args.config {
        Some(path) => get_config(path)?,
        None => Configuration::default(),
    };
    let config = args.apply_to(base).normalize();

    let builder = StructureBuilder::new(TemplateCatalog::builtin());
    let tree = builder.build(&config);
    let output = render(&tree, args.format, &args.base_path)?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, format!("{}\n", output))?;
            println!("Folder structure written to {}.", path.display());
        }
        None => println!("{}", output),
    }
    Ok(())
}
