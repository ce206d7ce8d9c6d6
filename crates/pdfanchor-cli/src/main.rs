mod cli;
mod extract_cmd;
mod lines_cmd;
mod page_range;
mod paragraphs_cmd;
mod region_cmd;
mod shared;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();
    shared::init_logging(cli.verbose);

    let result = match cli.command {
        cli::Commands::Lines {
            ref file,
            ref pages,
            ref format,
        } => lines_cmd::run(file, pages.as_deref(), format),
        cli::Commands::Paragraphs {
            ref file,
            ref pages,
            ref anchors,
            ref format,
        } => paragraphs_cmd::run(file, pages.as_deref(), anchors, format),
        cli::Commands::Extract {
            ref template,
            ref files,
            ref format,
        } => extract_cmd::run(template, files, format),
        cli::Commands::Region {
            ref file,
            ref bbox,
            page,
            center,
            tolerance,
            ref label,
        } => region_cmd::run(file, bbox, page, center, tolerance, label.as_deref()),
    };

    if let Err(code) = result {
        std::process::exit(code);
    }
}
