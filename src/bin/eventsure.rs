// Терминальный фронтенд EventSure: список событий, бронирование, сброс данных.

use clap::{Parser, Subcommand};

use event_booking::client::{render, ApiClient, BookingForm};

#[derive(Parser)]
#[command(name = "eventsure")]
#[command(about = "EventSure - browse events and book tickets")]
#[command(version)]
struct Cli {
    /// API base URL
    #[arg(long, env = "EVENTSURE_API_URL", default_value = "http://localhost:3001")]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List upcoming events
    Events,

    /// Book a seat for an event
    Book {
        /// Event ID
        #[arg(long)]
        event_id: i64,

        /// Full name
        #[arg(long)]
        name: String,

        /// Email address
        #[arg(long)]
        email: String,
    },

    /// Restore seed seat counts and clear all bookings
    Reset,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let client = ApiClient::new(&cli.api_url);

    match cli.command {
        Commands::Events => {
            let events = client.list_events().await?;
            println!("{}", render::event_list(&events));
        }
        Commands::Book { event_id, name, email } => {
            let form = BookingForm::new(name, email);
            if let Err(messages) = form.check() {
                for message in &messages {
                    eprintln!("error: {message}");
                }
                std::process::exit(2);
            }

            match client.book(event_id, &form).await {
                Ok(response) => {
                    println!("{}", response.message);
                    println!("Ticket: {}", response.booking.ticket_id);
                }
                Err(err) => {
                    eprintln!("error: {err}");
                    std::process::exit(1);
                }
            }

            // после бронирования список перечитывается с сервера
            let events = client.list_events().await?;
            println!();
            println!("{}", render::event_list(&events));
        }
        Commands::Reset => {
            let response = client.reset().await?;
            println!("{}", response.message);
        }
    }

    Ok(())
}
