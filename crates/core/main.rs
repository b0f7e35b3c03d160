#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::perf,
    clippy::style,
    clippy::missing_safety_doc,
    clippy::missing_const_for_fn
)]
#![allow(clippy::as_conversions, clippy::mod_module_files)]

use std::{error, io, process};

mod display;
mod interact;

use bookfind as lib;

use lib::ErrorKind;

use clap::Parser;
use log::{error, trace};

fn main() {
    if let Err(err) = try_main() {
        error!("{:#}", err);
        process::exit(2);
    }
}

fn try_main() -> Result<(), Box<dyn error::Error>> {
    let cli = Cli::parse();

    // if quiet then ignore verbosity but still show errors
    let verbosity = if cli.quiet {
        1
    } else {
        cli.verbosity as usize + 1
    };

    stderrlog::new().verbosity(verbosity).init()?;

    let title = if let Some(title) = cli.title {
        trace!("'title' argument used with value of '{}'", title);
        title
    } else {
        trace!("'title' argument not used - prompting for one");
        interact::user_input("Enter the book title".to_owned())?
    };

    let language = if let Some(language) = cli.language {
        trace!("'language' option used with value of '{}'", language);
        language
    } else {
        interact::user_language_input()?
    };

    let volumes = match lib::volumes_by_title(&title, &language) {
        Ok(volumes) => volumes,
        Err(err) => match err.kind() {
            ErrorKind::NoValue => {
                println!("No book found with this title.");
                Vec::new()
            }
            ErrorKind::Status(code) => {
                println!("Error: {code}. Failed to retrieve book information.");
                Vec::new()
            }
            _ => return Err(err.into()),
        },
    };

    display::write_volumes(&mut io::stdout(), &volumes)?;

    Ok(())
}

#[derive(Parser)]
#[clap(name = "bookfind")]
#[clap(about = "Search for books by title on the Google Books API and print their details")]
#[clap(version, author)]
struct Cli {
    /// The title to search for
    ///
    /// When no title is given the program will prompt for one.
    title: Option<String>,

    /// The language to restrict the search to, e.g. "en" or "fr"
    ///
    /// When no language is given the program will prompt for one, an empty
    /// answer defaults to English.
    #[clap(short, long)]
    language: Option<String>,

    /// How chatty the program is when performing commands
    ///
    /// The number of times this flag is used will increase how chatty
    /// the program is.
    #[clap(short, long, parse(from_occurrences))]
    verbosity: u8,

    /// Silences all logging except errors, which are still printed to stderr.
    #[clap(short, long)]
    quiet: bool,
}
