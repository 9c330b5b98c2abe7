//! Imprint CLI - binary entry point.
//!
//! Renders the built-in sample directory the way a list and detail view
//! consume it, then walks the session state through a scripted
//! subscribe/mutate/unsubscribe pass so every observable field is
//! exercised. Watcher output appears inline with the step that caused it;
//! that ordering is the synchronous-notification contract, not a logging
//! artifact.

use std::io::{Write, stdout};

use anyhow::Result;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use imprint_session::{DEFAULT_TOKEN_BALANCE, UserState};
use imprint_types::{ContactRecord, SubscriptionPlan, sample_contacts};

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::try_new("warn").expect("warn filter is valid"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(env_filter)
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let stdout = stdout();
    let mut out = stdout.lock();
    render_directory(&mut out)?;
    drop(out);

    run_session_demo();
    Ok(())
}

fn render_directory(out: &mut impl Write) -> Result<()> {
    let directory = sample_contacts();
    tracing::debug!(contacts = directory.len(), "sample directory loaded");

    writeln!(out, "Contacts ({})", directory.len())?;
    for record in directory.records() {
        writeln!(
            out,
            "  {} {} - {}, {} (met at {})",
            record.avatar(),
            record.name(),
            record.title(),
            record.company(),
            record.event(),
        )?;
    }

    if let Some(first) = directory.records().first() {
        writeln!(out)?;
        render_detail(out, first)?;
    }
    Ok(())
}

fn render_detail(out: &mut impl Write, record: &ContactRecord) -> Result<()> {
    writeln!(out, "{} {}", record.avatar(), record.name())?;
    if let Some(localized) = record.localized_name() {
        writeln!(out, "  ({localized})")?;
    }
    writeln!(out, "  {} at {}", record.title(), record.company())?;
    writeln!(out, "  \"{}\"", record.tagline())?;
    writeln!(out, "  {}", record.headline())?;
    writeln!(out, "  {}", record.bio())?;
    writeln!(out, "  phone: {}", record.phone())?;
    writeln!(out, "  email: {}", record.email())?;
    if let Some(address) = record.address() {
        writeln!(out, "  address: {address}")?;
    }
    if let Some(url) = record.profile_url() {
        writeln!(out, "  profile: {url}")?;
    }
    if let Some(url) = record.website() {
        writeln!(out, "  website: {url}")?;
    }
    if let Some(interests) = record.interests() {
        writeln!(out, "  interests: {}", interests.join(", "))?;
    }
    if let Some(hobbies) = record.hobbies() {
        writeln!(out, "  hobbies: {}", hobbies.join(", "))?;
    }
    writeln!(out, "  met at {} ({})", record.event(), record.venue())?;
    Ok(())
}

fn run_session_demo() {
    let mut state = UserState::new();
    println!();
    println!(
        "Session starts with card_created={}, tokens={}, plan={}",
        state.card_created(),
        state.token_balance(),
        state.plan(),
    );

    let card_watch = state.subscribe_card_created(|created| {
        println!("  -> card_created is now {created}");
    });
    let token_watch = state.subscribe_token_balance(|tokens| {
        println!("  -> token balance is now {tokens}");
    });
    let plan_watch = state.subscribe_plan(|plan| {
        println!("  -> plan is now {}", plan.display_name());
    });

    println!("Creating the user's card...");
    state.set_card_created(true);

    println!("Spending 150 tokens on a premium theme...");
    state.set_token_balance(state.token_balance() - 150);

    println!("Upgrading to Pro, then Enterprise...");
    state.set_plan(SubscriptionPlan::Pro);
    state.set_plan(SubscriptionPlan::Enterprise);

    state.unsubscribe(card_watch);
    state.unsubscribe(token_watch);
    state.unsubscribe(plan_watch);

    println!("Watchers released; the next write is silent.");
    state.set_token_balance(DEFAULT_TOKEN_BALANCE);

    println!(
        "Session ends with card_created={}, tokens={}, plan={}",
        state.card_created(),
        state.token_balance(),
        state.plan(),
    );
}
