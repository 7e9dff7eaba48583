use anyhow::Result;
use clap::Parser;

use release_cycle::config;
use release_cycle::git::Git2Repository;
use release_cycle::plugins;
use release_cycle::prompt::{Prompter, StdinPrompter};
use release_cycle::runner::TaskRunner;
use release_cycle::shell::{ShellExecutor, SystemRunner};
use release_cycle::ui::Console;

#[derive(clap::Parser)]
#[command(
    name = "release-cycle",
    about = "Drive a project through a fixed release lifecycle with pluggable publish targets"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, help = "Version increment: patch, minor, or major")]
    increment: Option<String>,

    #[arg(long, help = "Non-interactive mode: no prompts, default answers")]
    ci: bool,

    #[arg(long, help = "Preview what would happen without running commands")]
    dry_run: bool,

    #[arg(short, long, help = "Echo every command as it runs")]
    verbose: bool,

    #[arg(long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("release-cycle {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // Load configuration
    let mut config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            std::process::exit(1);
        }
    };

    // CLI flags override the configuration file
    if args.ci {
        config.ci = true;
    }
    if let Some(increment) = args.increment {
        config.increment = increment;
    }

    let console = Console::new(args.verbose);

    let repository = match Git2Repository::discover() {
        Ok(repository) => repository,
        Err(e) => {
            console.error(&format!("Git repository error: {}", e));
            std::process::exit(1);
        }
    };

    let plugins = match plugins::default_plugins(&config, Box::new(repository)) {
        Ok(plugins) => plugins,
        Err(e) => {
            console.error(&e.to_string());
            std::process::exit(1);
        }
    };

    let shell = ShellExecutor::new(Box::new(SystemRunner::new()), console, args.dry_run);
    let prompter: Box<dyn Prompter> = Box::new(StdinPrompter::new());

    let mut runner = match TaskRunner::new(config, plugins, shell, prompter, console) {
        Ok(runner) => runner,
        Err(e) => {
            console.error(&e.to_string());
            std::process::exit(1);
        }
    };

    match runner.run() {
        Ok(summary) => {
            println!(
                "\n\x1b[32m✓\x1b[0m Released {} {}\n",
                summary.name, summary.version
            );
            Ok(())
        }
        Err(e) => {
            console.error(&e.to_string());
            std::process::exit(1);
        }
    }
}
