//! Attest CLI - command-line access to the Attest advisory backend.
//!
//! A thin front end over `attest-core`: it logs in, lists resources, and
//! watches the unread-notification count. All request semantics live in the
//! library; this binary only formats output.

use std::io::{self, Write};

use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use attest_core::api::ApiClient;
use attest_core::models::{InterviewFilter, SearchRequest, TaskFilter};
use attest_core::poller::{UnreadPoller, DEFAULT_POLL_INTERVAL};
use attest_core::Config;

/// Initialize the tracing subscriber for logging.
/// Use the RUST_LOG env var to control the level (e.g. RUST_LOG=debug).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn print_usage() {
    eprintln!("Usage: attest <command>");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  login                     authenticate and store the token");
    eprintln!("  logout                    forget the stored token");
    eprintln!("  whoami                    show the current identity");
    eprintln!("  projects                  list projects");
    eprintln!("  tasks [PROJECT_ID]        list tasks, optionally for one project");
    eprintln!("  interviews [PROJECT_ID]   list interviews, optionally for one project");
    eprintln!("  reports                   list reports");
    eprintln!("  models                    list available LLM backends");
    eprintln!("  search QUERY              search the knowledge base");
    eprintln!("  notifications [--watch]   show notifications; --watch polls the unread count");
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    init_tracing();

    let config = Config::load().unwrap_or_default();
    let client = ApiClient::new(&config.resolve_base_url())?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = args.first().map(String::as_str).unwrap_or("help");

    match command {
        "login" => login(&client, config).await,
        "logout" => {
            client.auth().logout()?;
            println!("Logged out.");
            Ok(())
        }
        "whoami" => whoami(&client).await,
        "projects" => projects(&client).await,
        "tasks" => tasks(&client, args.get(1).map(String::as_str)).await,
        "interviews" => interviews(&client, args.get(1).map(String::as_str)).await,
        "reports" => reports(&client).await,
        "models" => models(&client).await,
        "search" => {
            let query = args.get(1).map(String::as_str).unwrap_or("");
            if query.is_empty() {
                anyhow::bail!("Usage: attest search QUERY");
            }
            search(&client, query).await
        }
        "notifications" => {
            let watch = args.iter().any(|a| a == "--watch");
            notifications(&client, watch).await
        }
        _ => {
            print_usage();
            Ok(())
        }
    }
}

async fn login(client: &ApiClient, mut config: Config) -> Result<()> {
    let prompt = match &config.last_email {
        Some(last) => format!("Email [{last}]: "),
        None => "Email: ".to_string(),
    };
    print!("{prompt}");
    io::stdout().flush()?;

    let mut email = String::new();
    io::stdin()
        .read_line(&mut email)
        .context("Failed to read email")?;
    let mut email = email.trim().to_string();
    if email.is_empty() {
        email = config.last_email.clone().unwrap_or_default();
    }
    if email.is_empty() {
        anyhow::bail!("No email given");
    }

    let password = rpassword::prompt_password("Password: ").context("Failed to read password")?;

    client.auth().login(&email, &password).await?;
    info!(email = %email, "login succeeded");

    config.last_email = Some(email.clone());
    if let Err(e) = config.save() {
        warn!(error = %e, "failed to save config");
    }

    println!("Logged in as {email}.");
    Ok(())
}

async fn whoami(client: &ApiClient) -> Result<()> {
    let user = client.auth().me().await?;
    println!("{} <{}>", user.full_name.as_deref().unwrap_or("(no name)"), user.email);
    if let Some(role) = user.role {
        println!("Role: {role}");
    }
    Ok(())
}

async fn projects(client: &ApiClient) -> Result<()> {
    let projects = client.projects().list(None).await?;
    for project in &projects {
        println!("{:<38} {:<12} {}", project.id, project.status, project.name);
    }
    println!("{} project(s)", projects.len());
    Ok(())
}

async fn tasks(client: &ApiClient, project_id: Option<&str>) -> Result<()> {
    let filter = TaskFilter {
        project_id: project_id.map(str::to_string),
        status: None,
    };
    let tasks = client.tasks().list(Some(&filter)).await?;
    for task in &tasks {
        println!("{:<38} {:<12} {}", task.id, task.status, task.title);
    }
    println!("{} task(s)", tasks.len());
    Ok(())
}

async fn interviews(client: &ApiClient, project_id: Option<&str>) -> Result<()> {
    let filter = InterviewFilter {
        project_id: project_id.map(str::to_string),
        status: None,
    };
    let interviews = client.interviews().list(Some(&filter)).await?;
    for interview in &interviews {
        println!(
            "{:<38} {:<12} {}",
            interview.id, interview.status, interview.title
        );
    }
    println!("{} interview(s)", interviews.len());
    Ok(())
}

async fn reports(client: &ApiClient) -> Result<()> {
    let reports = client.reports().list().await?;
    for report in &reports {
        println!("{:<38} {:<12} {}", report.id, report.status, report.title);
    }
    println!("{} report(s)", reports.len());
    Ok(())
}

async fn models(client: &ApiClient) -> Result<()> {
    let models = client.models().list().await?;
    for model in &models {
        let marker = if model.is_default { "*" } else { " " };
        println!("{marker} {:<28} {:<12} {}", model.id, model.provider, model.name);
    }
    Ok(())
}

async fn search(client: &ApiClient, query: &str) -> Result<()> {
    let results = client.knowledge().search(&SearchRequest::new(query)).await?;
    for hit in &results.results {
        println!("{:.3}  {}", hit.score, hit.title);
        println!("       {}", hit.excerpt);
    }
    println!("{} result(s)", results.results.len());
    Ok(())
}

async fn notifications(client: &ApiClient, watch: bool) -> Result<()> {
    let unread = client.notifications().unread_count().await?;
    println!("Unread: {unread}");

    let notifications = client.notifications().list(Some(10)).await?;
    for notification in &notifications {
        let marker = if notification.read { " " } else { "*" };
        println!("{marker} {:<38} {}", notification.id, notification.title);
    }

    if watch {
        watch_unread(client).await?;
    }
    Ok(())
}

async fn watch_unread(client: &ApiClient) -> Result<()> {
    println!("Watching unread count (ctrl-c to stop)...");
    let poller = UnreadPoller::spawn(client.clone(), DEFAULT_POLL_INTERVAL);
    let mut rx = poller.subscribe();
    loop {
        if rx.changed().await.is_err() {
            break;
        }
        println!("Unread: {}", *rx.borrow());
    }
    Ok(())
}
