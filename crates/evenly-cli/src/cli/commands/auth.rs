//! Login, logout, register and whoami.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use evenly_core::api::ApiClient;
use evenly_core::auth::{Session, TokenStore};
use evenly_core::config::Config;
use evenly_types::RegisterRequest;

use super::fail;

pub async fn login(config: &Config, email: &str, password: Option<&str>) -> Result<()> {
    let password = match password {
        Some(password) => password.to_string(),
        None => prompt_password()?,
    };

    let client = ApiClient::from_config(config)?;
    let token = client
        .login(email, &password)
        .await
        .map_err(anyhow::Error::new)
        .context("login failed")?;

    let mut session = Session::anonymous(TokenStore::new());
    session.set_token(Some(token.access_token))?;

    // Confirm the token by fetching the profile; a failure here leaves the
    // token in place (the server accepted the credentials).
    let client = client.with_token(session.token().map(str::to_string));
    match client.me().await {
        Ok(user) => println!("Logged in as {} ({})", user.email, user.full_name),
        Err(err) => {
            tracing::warn!("profile fetch after login failed: {err}");
            println!("Logged in.");
        }
    }
    Ok(())
}

pub fn logout() -> Result<()> {
    let mut session = Session::restore(TokenStore::new());
    if !session.is_authenticated() {
        println!("Not logged in.");
        return Ok(());
    }
    session.logout()?;
    println!("Logged out.");
    Ok(())
}

pub async fn register(
    config: &Config,
    email: String,
    password: String,
    full_name: String,
    phone: Option<String>,
) -> Result<()> {
    if password.len() < 8 {
        anyhow::bail!("Password must be at least 8 characters");
    }

    let client = ApiClient::from_config(config)?;
    let user = client
        .register(&RegisterRequest {
            email,
            password,
            full_name,
            phone,
        })
        .await
        .map_err(anyhow::Error::new)
        .context("registration failed")?;

    println!("Account created for {}. Log in with `evenly login`.", user.email);
    Ok(())
}

pub async fn whoami(config: &Config) -> Result<()> {
    let client = super::authed_client(config)?;
    let user = client.me().await.map_err(fail)?;

    println!("{} ({})", user.email, user.full_name);
    if let Some(phone) = &user.phone {
        println!("Phone: {phone}");
    }
    println!("Active: {}", user.is_active);
    println!("Member since: {}", user.created_at.format("%Y-%m-%d"));
    Ok(())
}

fn prompt_password() -> Result<String> {
    print!("Password: ");
    std::io::stdout().flush().context("flush stdout")?;
    let mut line = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut line)
        .context("read password from stdin")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
