use clap::Parser;
use miette::IntoDiagnostic;
use semantics_playground::{
    config::{Cli, Commands, Settings},
    demos::{print_demo_list, run_selected, select_demos},
};

fn main() -> miette::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::List => print_demo_list().into_diagnostic()?,
        Commands::Run { demos, seed, quiet } => {
            let settings = Settings::new(demos, seed, quiet);
            let selected = select_demos(&settings.filters)?;
            log::info!("running {} demo(s)", selected.len());
            let mut ctx = settings.context();
            run_selected(&selected, &mut ctx)?;
        }
    }
    Ok(())
}
