use clap::Parser;
use invoice_gen::adapters::jira::JiraClient;
use invoice_gen::config::JiraSettings;
use invoice_gen::utils::logger;
use invoice_gen::{InvoiceError, Period};

#[derive(Parser)]
#[command(name = "worklog-report")]
#[command(about = "Prints the tickets worked in a month, as they will appear on the invoice")]
struct Args {
    /// Month of the reporting period (1-12)
    month: u32,

    /// Year of the reporting period, e.g. 2023
    #[arg(allow_negative_numbers = true)]
    year: i32,

    /// Enable verbose output
    #[arg(long)]
    verbose: bool,
}

fn exit_with_error(e: &InvoiceError) -> ! {
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
    std::process::exit(1);
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env before anything reads the environment
    dotenvy::dotenv().ok();

    let args = Args::parse();

    logger::init_cli_logger(args.verbose);

    let period = match Period::new(args.month, args.year) {
        Ok(period) => period,
        Err(e) => exit_with_error(&e),
    };

    let JiraSettings {
        url,
        username,
        password,
        project_key,
    } = match JiraSettings::from_env() {
        Ok(settings) => settings,
        Err(e) => exit_with_error(&e),
    };

    tracing::info!("Fetching worked tickets for {}", period);

    let client = JiraClient::new(url, username, password);
    let tickets = match client.worked_tickets(&project_key, period).await {
        Ok(tickets) => tickets,
        Err(e) => exit_with_error(&e),
    };

    if tickets.is_empty() {
        println!("No logged work found in {}", period);
        return Ok(());
    }

    // Keep stdout to just the joined keys so it can be pasted into the invoice.
    tracing::info!("Found {} tickets worked in {}", tickets.len(), period);
    let keys: Vec<&str> = tickets.iter().map(|ticket| ticket.key.as_str()).collect();
    println!("{}", keys.join(",\n"));

    Ok(())
}
