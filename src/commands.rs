//! CLI command handlers (print to stdout)

use anyhow::{Context, Result};
use slack_users::config::Settings;
use slack_users::models::{BillableInfo, User};
use slack_users::SlackClient;

/// Build a client from the environment and stored settings.
fn client(debug: bool) -> Result<SlackClient> {
    let settings = Settings::load()?;
    let config = settings.client_config(debug)?;
    SlackClient::new(config).context("Failed to create Slack client")
}

pub fn login(token: String, base_url: Option<String>) -> Result<()> {
    let mut settings = Settings::load()?;
    settings.token = Some(token);
    if base_url.is_some() {
        settings.base_url = base_url;
    }
    settings.save()?;
    println!("Token saved to {}", Settings::default_path()?.display());
    Ok(())
}

pub fn logout() -> Result<()> {
    let mut settings = Settings::load()?;
    settings.clear_token();
    settings.save()?;
    println!("Stored token cleared.");
    Ok(())
}

pub async fn whoami(debug: bool) -> Result<()> {
    let identity = client(debug)?
        .get_user_identity()
        .await
        .context("users.identity failed")?;

    println!();
    println!("User: {} ({})", identity.user.name, identity.user.id);
    println!("Mail: {}", or_none(&identity.user.email));
    println!(
        "Team: {} ({}, {})",
        identity.team.name, identity.team.id, identity.team.domain
    );

    Ok(())
}

pub async fn user_info(user: &str, debug: bool) -> Result<()> {
    let user = client(debug)?
        .get_user_info(user)
        .await
        .with_context(|| format!("users.info failed for {}", user))?;

    println!();
    println!("ID:        {}", user.id);
    println!("Name:      {}", user.name);
    println!("Real name: {}", or_none(&user.real_name));
    println!("Title:     {}", or_none(&user.profile.title));
    println!("Mail:      {}", or_none(&user.profile.email));
    println!(
        "Time zone: {}",
        user.tz.as_deref().unwrap_or(&user.tz_label)
    );
    println!("Roles:     {}", roles(&user));

    Ok(())
}

pub async fn get_presence(user: &str, debug: bool) -> Result<()> {
    let presence = client(debug)?
        .get_user_presence(user)
        .await
        .with_context(|| format!("users.getPresence failed for {}", user))?;

    println!("\nPresence of {}:", user);
    println!("  Status: {}", or_none(&presence.presence));
    if presence.online || presence.connection_count > 0 {
        println!("  Online: {}", presence.online);
        println!("  Connections: {}", presence.connection_count);
    }
    // Only reported for the authenticated user
    if presence.last_activity.as_secs() > 0 {
        if let Some(last) = presence.last_activity.to_datetime() {
            println!("  Last activity: {}", last.to_rfc3339());
        }
    }

    Ok(())
}

pub async fn set_presence(presence: &str, debug: bool) -> Result<()> {
    client(debug)?
        .set_user_presence(presence)
        .await
        .context("users.setPresence failed")?;
    println!("Presence set to: {}", presence);
    Ok(())
}

pub async fn set_active(debug: bool) -> Result<()> {
    client(debug)?
        .set_user_active()
        .await
        .context("users.setActive failed")?;
    println!("Marked as active.");
    Ok(())
}

pub async fn list_users(mut offset: String, all: bool, debug: bool) -> Result<()> {
    let client = client(debug)?;
    let mut users = Vec::new();

    loop {
        let page = client
            .get_users(&offset)
            .await
            .context("users.list failed")?;
        tracing::debug!("Fetched {} users", page.members.len());
        users.extend(page.members);
        offset = page.offset;
        if !all || offset.is_empty() {
            break;
        }
    }

    println!("\nUsers:");
    println!("{:-<60}", "");

    if users.is_empty() {
        println!("  (no users found)");
    }
    for user in &users {
        println!("{}", user_row(user));
    }

    if !offset.is_empty() {
        println!("\nMore users available: --offset {}", offset);
    }

    Ok(())
}

pub async fn billing(user: Option<&str>, debug: bool) -> Result<()> {
    let client = client(debug)?;
    let info = match user {
        Some(u) => client.get_billable_info(u).await,
        None => client.get_billable_info_for_team().await,
    }
    .context("team.billableInfo failed")?;

    println!("\nBilling status:");
    for line in billing_lines(&info) {
        println!("  {}", line);
    }
    println!("{} of {} active", info.active_count(), info.billable_info.len());

    Ok(())
}

pub async fn team_info(debug: bool) -> Result<()> {
    let team = client(debug)?
        .get_team_info()
        .await
        .context("team.info failed")?;

    println!();
    println!("Team:   {} ({})", team.name, team.id);
    println!("Domain: {}.slack.com", team.domain);
    println!("Mail:   {}", or_none(&team.email_domain));

    Ok(())
}

fn or_none(s: &str) -> &str {
    if s.is_empty() {
        "(none)"
    } else {
        s
    }
}

fn roles(user: &User) -> String {
    let flags = [
        (user.is_primary_owner, "primary owner"),
        (user.is_owner && !user.is_primary_owner, "owner"),
        (user.is_admin, "admin"),
        (user.is_restricted && !user.is_ultra_restricted, "guest"),
        (user.is_ultra_restricted, "single-channel guest"),
        (user.is_bot, "bot"),
        (user.deleted, "deactivated"),
    ];
    let names: Vec<&str> = flags
        .iter()
        .filter(|(set, _)| *set)
        .map(|(_, name)| *name)
        .collect();
    if names.is_empty() {
        "member".to_string()
    } else {
        names.join(", ")
    }
}

fn user_row(user: &User) -> String {
    let display = if user.real_name.is_empty() {
        &user.name
    } else {
        &user.real_name
    };
    format!("{:<12} {:<20} {}", user.id, user.name, display)
}

/// Sorted by user ID so output is stable.
fn billing_lines(info: &BillableInfo) -> Vec<String> {
    let mut entries: Vec<_> = info.billable_info.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));
    entries
        .into_iter()
        .map(|(id, b)| {
            let state = if b.billing_active { "active" } else { "inactive" };
            format!("{:<12} {}", id, state)
        })
        .collect()
}
