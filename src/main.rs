use anyhow::Result;
use clap::{Parser, Subcommand};

use budgetscope::cli::{
    handle_analyze, handle_expense_command, handle_income_command, handle_invest, handle_predict,
    ExpenseCommands, IncomeCommands, InvestArgs,
};
use budgetscope::config::{paths::BudgetPaths, settings::Settings};
use budgetscope::storage::FileStore;
use budgetscope::tui::run_tui;

#[derive(Parser)]
#[command(
    name = "budgetscope",
    version,
    about = "Terminal personal budget analyzer, savings predictor, and investment planner",
    long_about = "budgetscope helps you analyze your monthly expenses, predict \
                  future savings, and plan your investments from the terminal. \
                  Run without a subcommand to open the interactive dashboard."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive dashboard
    #[command(alias = "ui")]
    Tui,

    /// Save or show monthly income
    #[command(subcommand)]
    Income(IncomeCommands),

    /// Save or show monthly expenses
    #[command(subcommand)]
    Expenses(ExpenseCommands),

    /// Analyze spending and show savings potential
    Analyze,

    /// Predict savings from the toy regression model
    Predict,

    /// Show investment suggestions and simulate growth
    Invest(InvestArgs),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = BudgetPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let store = FileStore::new(paths.clone())?;

    match cli.command {
        Some(Commands::Income(cmd)) => handle_income_command(&store, cmd)?,
        Some(Commands::Expenses(cmd)) => handle_expense_command(&store, cmd)?,
        Some(Commands::Analyze) => handle_analyze(&store)?,
        Some(Commands::Predict) => handle_predict(&store, &mut rand::thread_rng())?,
        Some(Commands::Invest(args)) => {
            handle_invest(&settings, args, &mut rand::thread_rng())?;
        }
        Some(Commands::Config) => {
            println!("budgetscope Configuration");
            println!("=========================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Income file:    {}", paths.income_file().display());
            println!("Expenses file:  {}", paths.expenses_file().display());
            println!();
            println!("Settings:");
            println!("  Default risk tier:  {}", settings.default_risk_tier);
            println!("  Default horizon:    {} years", settings.default_horizon_years);
        }
        Some(Commands::Tui) | None => {
            run_tui(&store, &settings)?;
        }
    }

    Ok(())
}
