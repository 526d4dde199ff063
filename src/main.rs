mod archive;
mod args;
mod context;
mod error;
mod result;
mod utils;
mod walk;

use args::Args;
use context::Context;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> result::Result<()> {
    // Parse command-line arguments
    let Args { src, out, verbose } = Args::parse();

    // Resolve paths and validate the source before touching the output
    let ctx = Context::resolve(&src, &out, verbose)?;

    cliclack::intro("vsixpack")?;

    if ctx.verbose {
        println!("Source: {}", ctx.source_dir.display());
        println!("Output: {}", ctx.output_path.display());
    }

    let spinner = cliclack::spinner();
    spinner.start("Packaging...");
    let summary = match archive::create(&ctx) {
        Ok(summary) => {
            spinner.stop(format!(
                "Packed {} files ({})",
                summary.entries,
                utils::human_size(summary.input_bytes)
            ));
            if ctx.verbose {
                for name in &summary.names {
                    cliclack::log::remark(format!("added {}", name))?;
                }
            }
            summary
        }
        Err(e) => {
            spinner.error("Failed to create archive");
            return Err(e);
        }
    };

    cliclack::outro(format!(
        "Archive created: {} ({})",
        summary.output_path.display(),
        utils::human_size(summary.archive_bytes)
    ))?;
    Ok(())
}
