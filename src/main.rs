mod api;
mod config;
mod error;
mod models;
mod search;
mod session;

use std::io::{self, Write};

use anyhow::{bail, Result};
use clap::{Args, Parser, Subcommand};
use tracing::{info, warn, Level};

use api::{AuthClient, ListingClient, ListingSource};
use config::Config;
use error::ApiError;
use models::{Agent, House, HouseDraft};
use search::{FilterSelection, PRICE_BUCKETS};
use session::{GateDecision, Session, SessionGate, SessionStore};

#[derive(Parser, Debug)]
#[command(name = "nyumba", version, about = "Nyumba - Nairobi rental listings from the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Search listings with optional filters
    Search {
        /// Neighbourhood (e.g. Westlands, Karen)
        #[arg(long)]
        location: Option<String>,
        /// Property type (e.g. Apartment, Villa)
        #[arg(long = "type")]
        property_type: Option<String>,
        /// Price bucket label (see --buckets)
        #[arg(long)]
        price: Option<String>,
        /// Print the known price buckets and exit
        #[arg(long)]
        buckets: bool,
    },
    /// Show full details for one listing (sign-in required)
    Show {
        /// Listing id
        id: u32,
    },
    /// Sign in to an existing account
    Login {
        /// Account email
        email: String,
    },
    /// Create an account
    Signup {
        /// Account email
        email: String,
    },
    /// Sign out and forget the saved session
    Logout {
        /// Skip the confirmation question
        #[arg(long)]
        yes: bool,
    },
    /// Show the signed-in account
    Whoami,
    /// Manage the listing portfolio (sign-in required)
    Admin {
        #[command(subcommand)]
        command: AdminCommands,
    },
}

#[derive(Subcommand, Debug)]
enum AdminCommands {
    /// List every listing with portfolio stats
    List,
    /// Add a new listing
    Add(HouseArgs),
    /// Merge changed fields into a listing
    Update {
        /// Listing id
        id: u32,
        #[command(flatten)]
        house: HouseArgs,
    },
    /// Delete a listing
    Remove {
        /// Listing id
        id: u32,
        /// Skip the confirmation question
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Args, Debug, Default)]
struct HouseArgs {
    /// Neighbourhood (e.g. Westlands)
    #[arg(long)]
    location: Option<String>,
    /// Property type (Apartment, Townhouse, Bungalow, Villa)
    #[arg(long = "type")]
    property_type: Option<String>,
    /// Monthly rent in Ksh
    #[arg(long)]
    price: Option<i64>,
    #[arg(long)]
    bedrooms: Option<u32>,
    #[arg(long)]
    bathrooms: Option<u32>,
    /// Size description (e.g. 4200sqft)
    #[arg(long)]
    surface: Option<String>,
    #[arg(long)]
    description: Option<String>,
    /// Main image URL
    #[arg(long)]
    image: Option<String>,
    /// Large banner image URL
    #[arg(long)]
    image_lg: Option<String>,
    /// Comma separated gallery image URLs
    #[arg(long)]
    gallery: Option<String>,
    #[arg(long)]
    agent_name: Option<String>,
    #[arg(long)]
    agent_phone: Option<String>,
    #[arg(long)]
    agent_image: Option<String>,
}

impl HouseArgs {
    fn into_draft(self) -> HouseDraft {
        let agent = if self.agent_name.is_some()
            || self.agent_phone.is_some()
            || self.agent_image.is_some()
        {
            Some(Agent {
                name: self.agent_name.unwrap_or_default(),
                image: self.agent_image.unwrap_or_default(),
                phone: self.agent_phone.unwrap_or_default(),
            })
        } else {
            None
        };

        HouseDraft {
            kind: self.property_type,
            location: self.location,
            bedrooms: self.bedrooms,
            bathrooms: self.bathrooms,
            surface: self.surface,
            price: self.price,
            description: self.description,
            image: self.image,
            image_lg: self.image_lg,
            gallery: self
                .gallery
                .map(|g| g.split(',').map(|url| url.trim().to_string()).collect()),
            agent,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    let cli = Cli::parse();
    let config = Config::load();
    let store = SessionStore::new(config.session_file.clone());

    match cli.command {
        Commands::Search {
            location,
            property_type,
            price,
            buckets,
        } => {
            if buckets {
                print_buckets();
                return Ok(());
            }
            run_search(&config, FilterSelection::new(location, property_type, price)).await
        }
        Commands::Show { id } => run_show(&config, &store, id).await,
        Commands::Login { email } => run_login(&config, &store, &email).await,
        Commands::Signup { email } => run_signup(&config, &store, &email).await,
        Commands::Logout { yes } => run_logout(&store, yes),
        Commands::Whoami => run_whoami(&store),
        Commands::Admin { command } => run_admin(&config, &store, command).await,
    }
}

async fn run_search(config: &Config, filters: FilterSelection) -> Result<()> {
    let client = ListingClient::new(config.listings_url.clone())?;

    info!("🏠 Searching {} listings...", client.source_name());
    let houses = client.search(&filters).await?;

    if houses.is_empty() {
        println!("No match found.");
        println!("Try expanding your search area or price range.");
        return Ok(());
    }

    println!("Found {} properties matching your criteria\n", houses.len());
    for (i, house) in houses.iter().enumerate() {
        print_card(i + 1, house);
    }
    Ok(())
}

async fn run_show(config: &Config, store: &SessionStore, id: u32) -> Result<()> {
    let Some(_session) = ensure_session(config, store).await? else {
        // call-to-action already on screen
        return Ok(());
    };

    let client = ListingClient::new(config.listings_url.clone())?;
    match client.get(id).await {
        Ok(house) => {
            print_details(&house);
            Ok(())
        }
        Err(ApiError::NotFound) => {
            println!("Property not found");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

async fn run_login(config: &Config, store: &SessionStore, email: &str) -> Result<()> {
    let password = prompt_line("Password: ")?;
    let auth = AuthClient::new(config.auth_url.clone())?;

    match auth.login(email, &password).await {
        Ok(identifier) => {
            let session = Session::new(identifier);
            store.save(&session)?;
            info!("✅ Signed in as {}", session.email);
            Ok(())
        }
        Err(e) => {
            print_auth_failure(e);
            Ok(())
        }
    }
}

async fn run_signup(config: &Config, store: &SessionStore, email: &str) -> Result<()> {
    let password = prompt_line("Password: ")?;
    let confirm = prompt_line("Confirm password: ")?;
    if password != confirm {
        println!("Passwords do not match.");
        return Ok(());
    }

    let auth = AuthClient::new(config.auth_url.clone())?;
    match auth.signup(email, &password).await {
        Ok(identifier) => {
            let session = Session::new(identifier);
            store.save(&session)?;
            info!("✅ Account created, signed in as {}", session.email);
            Ok(())
        }
        Err(e) => {
            print_auth_failure(e);
            Ok(())
        }
    }
}

fn run_logout(store: &SessionStore, yes: bool) -> Result<()> {
    let Some(session) = store.load() else {
        println!("Not signed in.");
        return Ok(());
    };

    if !yes {
        println!("You will need to sign in again to view property details.");
        let answer = prompt_line("Log out? [y/N]: ")?;
        if !answer.eq_ignore_ascii_case("y") {
            println!("Cancelled.");
            return Ok(());
        }
    }

    store.clear()?;
    info!("Signed out {}", session.email);
    Ok(())
}

fn run_whoami(store: &SessionStore) -> Result<()> {
    match store.load() {
        Some(session) => {
            println!("{}", session.email);
            println!("signed in since {}", session.logged_in_at.format("%Y-%m-%d %H:%M UTC"));
        }
        None => println!("Not signed in."),
    }
    Ok(())
}

async fn run_admin(config: &Config, store: &SessionStore, command: AdminCommands) -> Result<()> {
    let Some(_session) = ensure_session(config, store).await? else {
        return Ok(());
    };

    let client = ListingClient::new(config.listings_url.clone())?;
    match command {
        AdminCommands::List => {
            let houses = client.search(&FilterSelection::default()).await?;
            println!(
                "Portfolio: {} listings, average price Ksh {}\n",
                houses.len(),
                average_price(&houses)
            );
            for (i, house) in houses.iter().enumerate() {
                print_card(i + 1, house);
            }
        }
        AdminCommands::Add(args) => {
            let mut draft = args.into_draft();
            if draft.location.is_none() || draft.price.is_none() {
                bail!("--location and --price are required to add a listing");
            }
            if draft.kind.is_none() {
                draft.kind = Some("Apartment".to_string());
            }
            let house = client.create(&draft).await?;
            info!("✅ Added listing {} in {}", house.id, house.location);
        }
        AdminCommands::Update { id, house } => {
            let updated = client.update(id, &house.into_draft()).await?;
            info!("✅ Updated listing {} in {}", updated.id, updated.location);
        }
        AdminCommands::Remove { id, yes } => {
            if !yes {
                let answer =
                    prompt_line("Are you sure you want to delete this listing? [y/N]: ")?;
                if !answer.eq_ignore_ascii_case("y") {
                    println!("Cancelled.");
                    return Ok(());
                }
            }
            client.remove(id).await?;
            info!("✅ Deleted listing {}", id);
        }
    }
    Ok(())
}

/// Run the session gate for a protected view.
///
/// On the first unauthenticated arrival the sign-in prompt opens once;
/// declining or failing it leaves the call-to-action on screen and
/// returns `None`.
async fn ensure_session(config: &Config, store: &SessionStore) -> Result<Option<Session>> {
    let mut gate = SessionGate::new();
    let mut session = store.load();

    loop {
        match gate.check(session.as_ref().map(|s| s.email.as_str())) {
            GateDecision::Granted => return Ok(session),
            GateDecision::Denied { open_prompt: true } => {
                println!("Unlock Details: sign in to view full property details.");
                session = sign_in_prompt(config, store).await?;
            }
            GateDecision::Denied { open_prompt: false } => {
                print_call_to_action();
                return Ok(None);
            }
        }
    }
}

/// Interactive sign-in. An empty email declines the prompt.
async fn sign_in_prompt(config: &Config, store: &SessionStore) -> Result<Option<Session>> {
    let email = prompt_line("Email (leave empty to skip): ")?;
    if email.is_empty() {
        return Ok(None);
    }
    let password = prompt_line("Password: ")?;

    let auth = AuthClient::new(config.auth_url.clone())?;
    match auth.login(&email, &password).await {
        Ok(identifier) => {
            let session = Session::new(identifier);
            store.save(&session)?;
            println!("Signed in as {}.\n", session.email);
            Ok(Some(session))
        }
        Err(e) => {
            print_auth_failure(e);
            Ok(None)
        }
    }
}

/// Inline auth error in the register of the sign-in form.
/// Session state is left untouched.
fn print_auth_failure(e: ApiError) {
    match e {
        ApiError::Rejected(msg) => println!("{msg}"),
        other => {
            warn!("Auth request failed: {}", other);
            println!("Connection to server failed.");
        }
    }
}

fn print_call_to_action() {
    println!();
    println!("Join Nyumba to view full property details, interior galleries,");
    println!("and contact agents.");
    println!();
    println!("  nyumba signup <email>    Create an account");
    println!("  nyumba login <email>     Sign in to existing account");
}

fn print_buckets() {
    println!("Price buckets:");
    for bucket in PRICE_BUCKETS {
        println!("  {:<18} Ksh {} - {}", bucket.label, bucket.min, bucket.max);
    }
}

fn print_card(n: usize, house: &House) {
    println!("{}. {} - Ksh {} ({})", n, house.location, house.price, house.kind);
    println!(
        "   {} beds, {} baths, {}",
        house.bedrooms, house.bathrooms, house.surface
    );
    println!("   ID: {}", house.id);
    println!();
}

fn print_details(house: &House) {
    println!("{} in {}, Nairobi, Kenya", house.kind, house.location);
    println!("Ksh {} per month", house.price);
    println!(
        "{} beds, {} baths, {}",
        house.bedrooms, house.bathrooms, house.surface
    );
    println!();
    if !house.description.is_empty() {
        println!("{}", house.description);
        println!();
    }
    if !house.gallery.is_empty() {
        println!("Gallery ({} images):", house.gallery.len());
        for url in &house.gallery {
            println!("  {}", url);
        }
        println!();
    }
    if !house.agent.name.is_empty() {
        println!("Agent: {}", house.agent.name);
        if !house.agent.phone.is_empty() {
            println!("Phone: {}", house.agent.phone);
        }
    }
}

fn average_price(houses: &[House]) -> i64 {
    if houses.is_empty() {
        return 0;
    }
    let total: i64 = houses.iter().map(|h| h.price).sum();
    total / houses.len() as i64
}

fn prompt_line(label: &str) -> Result<String> {
    print!("{label}");
    io::stdout().flush()?;
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}
