//! apex-core Client Entry Point
//!
//! A small CLI over the session container:
//!
//! ```text
//! apex-client register <email> <password> [name]
//! apex-client login <email> <password>
//! apex-client whoami
//! apex-client logout
//! ```
//!
//! `whoami` runs the session bootstrap: it revalidates the persisted token
//! against the server and reports the resulting state. The server URL comes
//! from `CLIENT_API_URL` (default `http://127.0.0.1:4000`).

use apex_core::client::{ApiClient, ClientConfig, Session, SessionState, TokenStore};

const USAGE: &str =
    "usage: apex-client <register <email> <password> [name] | login <email> <password> | whoami | logout>";

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    if let Err(e) = run().await {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let config = ClientConfig::new();
    let api = ApiClient::new(config);
    let session = Session::new(api.clone(), TokenStore::new());

    match args.as_slice() {
        [cmd, email, password] if cmd == "register" => {
            let auth = api
                .register(email.clone(), password.clone(), None)
                .await?;
            session.login(&auth.token, auth.user.clone());
            println!("Registered and logged in as {}", auth.user.email);
        }
        [cmd, email, password, name] if cmd == "register" => {
            let auth = api
                .register(email.clone(), password.clone(), Some(name.clone()))
                .await?;
            session.login(&auth.token, auth.user.clone());
            println!("Registered and logged in as {}", auth.user.email);
        }
        [cmd, email, password] if cmd == "login" => {
            let auth = api.login(email.clone(), password.clone()).await?;
            session.login(&auth.token, auth.user.clone());
            println!("Logged in as {}", auth.user.email);
        }
        [cmd] if cmd == "whoami" => {
            session.bootstrap().await;
            match session.state() {
                SessionState::Authenticated(user) => {
                    let name = user.name.as_deref().unwrap_or("-");
                    println!("{} (name: {}, role: {:?})", user.email, name, user.role);
                }
                _ => println!("Not logged in"),
            }
        }
        [cmd] if cmd == "logout" => {
            session.logout();
            println!("Logged out");
        }
        _ => {
            eprintln!("{}", USAGE);
            std::process::exit(2);
        }
    }

    Ok(())
}
