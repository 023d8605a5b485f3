use anyhow::Result;
use clap::Parser;
use gaia_lib::app::App;
use gaia_tui::Tui;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Mode to run the console in
    #[arg(short, long, value_enum, default_value = "standard")]
    mode: Mode,

    /// Custom config file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Session seed override for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Tick budget for headless mode
    #[arg(long, default_value_t = 200)]
    ticks: u64,
}

#[derive(clap::ValueEnum, Clone, Debug)]
enum Mode {
    Standard,
    Headless,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    match args.mode {
        Mode::Headless => {
            gaia_core::init_logging();
            let mut app = App::new(&args.config, args.seed)?;
            app.run_headless(args.ticks)?;
        }
        Mode::Standard => {
            let mut tui = Tui::new()?;
            tui.init()?;

            let mut app = App::new(&args.config, args.seed)?;
            let res = app.run(&mut tui).await;

            tui.exit()?;

            if let Err(e) = res {
                eprintln!("Application error: {e}");
            } else {
                println!("Exited clean.");
            }
        }
    }

    Ok(())
}
