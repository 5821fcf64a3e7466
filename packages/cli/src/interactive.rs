//! Interactive menu for the companion CLI.
//!
//! Menu-driven flows over the same library calls the subcommands use,
//! built with `dialoguer` prompts. One action is run per invocation,
//! except the chat which loops until the user leaves.

use dialoguer::{Confirm, Input, Select};
use sakhi_alert::{dial_url, maps_link, sos_message, whatsapp_send_url};
use sakhi_assistant::{ChatSession, DEFAULT_WARN_RADIUS_KM, ProximityWatch, ResponseMatcher};
use sakhi_contacts::ContactRegistry;
use sakhi_forum::{ComplaintCategory, ComplaintLog, ComplaintStatus, ForumBoard, PostCategory};
use sakhi_geo::distance_km;
use sakhi_settings::AppSettings;
use sakhi_store::{DEFAULT_STORE_PATH, JsonFileStore, KeyValueStore};
use sakhi_tips::TipCategory;
use sakhi_zones::ZoneIndex;

use crate::render;

/// Top-level actions in the companion menu.
enum Action {
    Chat,
    Nearest,
    Zones,
    Tips,
    Places,
    Contacts,
    Forum,
    Sos,
    Settings,
}

impl Action {
    const ALL: &[Self] = &[
        Self::Chat,
        Self::Nearest,
        Self::Zones,
        Self::Tips,
        Self::Places,
        Self::Contacts,
        Self::Forum,
        Self::Sos,
        Self::Settings,
    ];

    #[must_use]
    const fn label(&self) -> &'static str {
        match self {
            Self::Chat => "Chat with the safety assistant",
            Self::Nearest => "Find the nearest safety zone",
            Self::Zones => "Browse safety zones",
            Self::Tips => "Safety tips",
            Self::Places => "Hostels & hospitals",
            Self::Contacts => "Emergency contacts",
            Self::Forum => "Community forum & complaints",
            Self::Sos => "Preview an SOS alert",
            Self::Settings => "Settings",
        }
    }
}

/// Runs the interactive companion menu.
///
/// Opens the data store and presents a menu covering the chat assistant,
/// zone queries, tips, the places directory, contacts, the forum, SOS
/// preview, and settings.
///
/// # Errors
///
/// Returns an error if the store, user prompts, or any operation fails.
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let store = JsonFileStore::open(DEFAULT_STORE_PATH)?;

    println!("Sakhi Safety Companion");
    println!();

    let labels: Vec<&str> = Action::ALL.iter().map(Action::label).collect();

    let idx = Select::new()
        .with_prompt("What would you like to do?")
        .items(&labels)
        .default(0)
        .interact()?;

    match Action::ALL[idx] {
        Action::Chat => chat(None, DEFAULT_WARN_RADIUS_KM)?,
        Action::Nearest => handle_nearest()?,
        Action::Zones => handle_zones()?,
        Action::Tips => handle_tips()?,
        Action::Places => handle_places()?,
        Action::Contacts => handle_contacts(&store).await?,
        Action::Forum => handle_forum(&store).await?,
        Action::Sos => handle_sos(&store).await?,
        Action::Settings => handle_settings(&store).await?,
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Chat
// ---------------------------------------------------------------------------

/// Runs a chat session with the assistant, optionally reporting a
/// starting position first. `warn_radius_km` sets how close an unsafe
/// zone must be before the session warns.
///
/// `/location <latitude> <longitude>` reports a position mid-chat and
/// `/quit` leaves. Blank lines are ignored.
///
/// # Errors
///
/// Returns an error if reading input fails.
pub fn chat(
    start: Option<(f64, f64)>,
    warn_radius_km: f64,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = ChatSession::new(
        ResponseMatcher::bundled(),
        ZoneIndex::bundled(),
        ProximityWatch::new(warn_radius_km),
    );

    println!("Type /location <latitude> <longitude> to report a position, /quit to leave.");
    render::print_entry(&session.transcript()[0]);

    if let Some((latitude, longitude)) = start {
        report_location(&mut session, latitude, longitude);
    }

    loop {
        println!();
        let line: String = Input::new().with_prompt("You").allow_empty(true).interact_text()?;
        let line = line.trim();

        if line.eq_ignore_ascii_case("/quit") || line.eq_ignore_ascii_case("/exit") {
            return Ok(());
        }
        if let Some(rest) = line.strip_prefix("/location") {
            match parse_coordinates(rest) {
                Some((latitude, longitude)) => report_location(&mut session, latitude, longitude),
                None => println!("Usage: /location <latitude> <longitude>"),
            }
            continue;
        }

        if let Some(reply) = session.submit(line) {
            render::print_entry(reply);
        }
    }
}

fn report_location(session: &mut ChatSession<'_>, latitude: f64, longitude: f64) {
    if let Some(warning) = session.update_location(latitude, longitude) {
        render::print_entry(warning);
    } else if let Some(zone) = session.nearest_zone() {
        println!(
            "Location noted. Nearest zone: {}, {} ({}).",
            zone.area, zone.city, zone.safety_label
        );
    }
}

fn parse_coordinates(args: &str) -> Option<(f64, f64)> {
    let mut parts = args.split_whitespace();
    let latitude = parts.next()?.parse().ok()?;
    let longitude = parts.next()?.parse().ok()?;
    parts.next().is_none().then_some((latitude, longitude))
}

// ---------------------------------------------------------------------------
// Zones, tips, places
// ---------------------------------------------------------------------------

fn handle_nearest() -> Result<(), Box<dyn std::error::Error>> {
    let latitude: f64 = Input::new().with_prompt("Latitude").interact_text()?;
    let longitude: f64 = Input::new().with_prompt("Longitude").interact_text()?;

    let index = ZoneIndex::bundled();
    if let Some(zone) = index.nearest_zone(latitude, longitude) {
        let away = distance_km(latitude, longitude, zone.latitude, zone.longitude);
        println!();
        render::print_zone(zone, Some(away));
    }
    Ok(())
}

fn handle_zones() -> Result<(), Box<dyn std::error::Error>> {
    let index = ZoneIndex::bundled();
    let mut labels = vec!["All cities".to_string()];
    labels.extend(index.cities().iter().map(ToString::to_string));

    let idx = Select::new()
        .with_prompt("City")
        .items(&labels)
        .default(0)
        .interact()?;

    println!();
    if idx == 0 {
        let zones: Vec<_> = index.zones().iter().collect();
        render::print_zone_table(&zones);
    } else {
        render::print_zone_table(&index.zones_by_city(&labels[idx]));
    }
    Ok(())
}

fn handle_tips() -> Result<(), Box<dyn std::error::Error>> {
    let mut labels = vec!["Tip of the day".to_string(), "All tips".to_string()];
    labels.extend(TipCategory::all().iter().map(ToString::to_string));

    let idx = Select::new()
        .with_prompt("Tips")
        .items(&labels)
        .default(0)
        .interact()?;

    println!();
    match idx {
        0 => {
            let tip = sakhi_tips::tip_of_the_day(chrono::Local::now().date_naive());
            render::print_tip(tip);
        }
        1 => {
            for tip in sakhi_tips::all_tips() {
                render::print_tip(tip);
                println!();
            }
        }
        _ => {
            for tip in sakhi_tips::tips_by_category(TipCategory::all()[idx - 2]) {
                render::print_tip(tip);
                println!();
            }
        }
    }
    Ok(())
}

fn handle_places() -> Result<(), Box<dyn std::error::Error>> {
    let labels = [
        "Everything",
        "Hostels",
        "Hospitals",
        "Hostels with beds available",
    ];
    let idx = Select::new()
        .with_prompt("Places")
        .items(&labels)
        .default(0)
        .interact()?;

    let places = match idx {
        0 => sakhi_places::directory().iter().collect::<Vec<_>>(),
        1 => sakhi_places::hostels(),
        2 => sakhi_places::hospitals(),
        _ => sakhi_places::available_hostels(),
    };

    println!();
    for place in places {
        render::print_place(place);
        println!();
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Contacts
// ---------------------------------------------------------------------------

async fn handle_contacts(store: &dyn KeyValueStore) -> Result<(), Box<dyn std::error::Error>> {
    let labels = [
        "List contacts & helplines",
        "Add a contact",
        "Remove a contact",
    ];
    let idx = Select::new()
        .with_prompt("Emergency contacts")
        .items(&labels)
        .default(0)
        .interact()?;

    let registry = ContactRegistry::new(store);
    match idx {
        0 => {
            let contacts = registry.list().await?;
            println!();
            if contacts.is_empty() {
                println!("No emergency contacts saved.");
            } else {
                render::print_contacts(&contacts);
            }
            println!();
            render::print_helplines();
        }
        1 => {
            let name: String = Input::new().with_prompt("Name").interact_text()?;
            let phone: String = Input::new().with_prompt("Phone").interact_text()?;
            let relationship: String = Input::new()
                .with_prompt("Relationship")
                .allow_empty(true)
                .interact_text()?;

            let contact = registry.add(&name, &phone, &relationship).await?;
            println!("Saved {} ({}).", contact.name, contact.relationship);
        }
        _ => {
            let contacts = registry.list().await?;
            if contacts.is_empty() {
                println!("No emergency contacts saved.");
                return Ok(());
            }

            let labels: Vec<String> = contacts
                .iter()
                .map(|c| format!("{} ({}, {})", c.name, c.relationship, c.phone))
                .collect();
            let idx = Select::new()
                .with_prompt("Remove which contact?")
                .items(&labels)
                .default(0)
                .interact()?;

            let confirmed = Confirm::new()
                .with_prompt(format!("Remove {}?", contacts[idx].name))
                .default(false)
                .interact()?;
            if confirmed {
                registry.remove(&contacts[idx].id).await?;
                println!("Removed.");
            } else {
                println!("Cancelled.");
            }
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Forum & complaints
// ---------------------------------------------------------------------------

async fn handle_forum(store: &dyn KeyValueStore) -> Result<(), Box<dyn std::error::Error>> {
    let labels = [
        "Browse posts",
        "Write a post",
        "File a complaint",
        "Review complaints",
    ];
    let idx = Select::new()
        .with_prompt("Community forum")
        .items(&labels)
        .default(0)
        .interact()?;

    match idx {
        0 => browse_posts()?,
        1 => write_post(store).await?,
        2 => file_complaint(store).await?,
        _ => review_complaints(store).await?,
    }
    Ok(())
}

fn browse_posts() -> Result<(), Box<dyn std::error::Error>> {
    let board = ForumBoard::seeded();
    let mut labels = vec!["All posts".to_string()];
    labels.extend(PostCategory::all().iter().map(ToString::to_string));

    let idx = Select::new()
        .with_prompt("Category")
        .items(&labels)
        .default(0)
        .interact()?;

    println!();
    let posts = if idx == 0 {
        board.posts().iter().collect::<Vec<_>>()
    } else {
        board.posts_in_category(PostCategory::all()[idx - 1])
    };
    if posts.is_empty() {
        println!("No posts in this category yet.");
        return Ok(());
    }
    for post in posts {
        render::print_post(post);
        println!();
    }
    Ok(())
}

async fn write_post(store: &dyn KeyValueStore) -> Result<(), Box<dyn std::error::Error>> {
    let settings = sakhi_settings::load(store).await?;

    let title: String = Input::new().with_prompt("Title").interact_text()?;
    let content: String = Input::new().with_prompt("What's on your mind?").interact_text()?;

    let labels: Vec<String> = PostCategory::all().iter().map(ToString::to_string).collect();
    let idx = Select::new()
        .with_prompt("Category")
        .items(&labels)
        .default(0)
        .interact()?;

    let anonymous = Confirm::new()
        .with_prompt("Post anonymously?")
        .default(settings.anonymous_mode)
        .interact()?;

    let mut board = ForumBoard::seeded();
    let post = board.post(&title, &content, PostCategory::all()[idx], "You", anonymous)?;
    println!();
    render::print_post(post);
    Ok(())
}

async fn file_complaint(store: &dyn KeyValueStore) -> Result<(), Box<dyn std::error::Error>> {
    let title: String = Input::new().with_prompt("Title").interact_text()?;
    let description: String = Input::new().with_prompt("Describe what happened").interact_text()?;

    let labels: Vec<String> = ComplaintCategory::all().iter().map(ToString::to_string).collect();
    let idx = Select::new()
        .with_prompt("Category")
        .items(&labels)
        .default(0)
        .interact()?;

    let anonymous = Confirm::new().with_prompt("File anonymously?").default(false).interact()?;

    let log = ComplaintLog::new(store);
    let complaint = log
        .file(
            &title,
            &description,
            ComplaintCategory::all()[idx],
            anonymous,
        )
        .await?;
    println!(
        "Filed complaint {} with status {}.",
        render::short_id(&complaint.id), complaint.status
    );
    Ok(())
}

async fn review_complaints(store: &dyn KeyValueStore) -> Result<(), Box<dyn std::error::Error>> {
    let log = ComplaintLog::new(store);
    let complaints = log.list().await?;
    if complaints.is_empty() {
        println!("No complaints filed.");
        return Ok(());
    }

    println!();
    println!(
        "{:<10} {:<14} {:<12} {:<12} TITLE",
        "ID", "STATUS", "CATEGORY", "FILED"
    );
    println!("{}", "-".repeat(80));
    for complaint in &complaints {
        println!(
            "{:<10} {:<14} {:<12} {:<12} {}",
            render::short_id(&complaint.id),
            complaint.status.as_ref(),
            complaint.category.as_ref(),
            complaint.filed,
            complaint.title
        );
    }
    println!("\n{} complaint(s)", complaints.len());

    let update = Confirm::new().with_prompt("Update a status?").default(false).interact()?;
    if !update {
        return Ok(());
    }

    let labels: Vec<String> = complaints
        .iter()
        .map(|c| format!("{} {} ({})", render::short_id(&c.id), c.title, c.status))
        .collect();
    let idx = Select::new()
        .with_prompt("Which complaint?")
        .items(&labels)
        .default(0)
        .interact()?;

    let status_labels: Vec<String> = ComplaintStatus::all()
        .iter()
        .map(ToString::to_string)
        .collect();
    let status_idx = Select::new()
        .with_prompt("New status")
        .items(&status_labels)
        .default(0)
        .interact()?;

    log.set_status(&complaints[idx].id, ComplaintStatus::all()[status_idx])
        .await?;
    println!("Updated.");
    Ok(())
}

// ---------------------------------------------------------------------------
// SOS preview & settings
// ---------------------------------------------------------------------------

async fn handle_sos(store: &dyn KeyValueStore) -> Result<(), Box<dyn std::error::Error>> {
    let latitude: f64 = Input::new().with_prompt("Latitude").interact_text()?;
    let longitude: f64 = Input::new().with_prompt("Longitude").interact_text()?;
    let address: String = Input::new()
        .with_prompt("Address")
        .default("Address unavailable".to_string())
        .interact_text()?;

    println!();
    sos_preview(store, latitude, longitude, &address, None).await
}

/// Prints the SOS alert body and the URIs an external launcher would
/// open, addressed to the given number or the first saved contact.
///
/// # Errors
///
/// Returns an error if the contact store fails.
pub async fn sos_preview(
    store: &dyn KeyValueStore,
    latitude: f64,
    longitude: f64,
    address: &str,
    phone: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let message = sos_message(address, latitude, longitude);
    println!("{message}");
    println!();

    let registry = ContactRegistry::new(store);
    let recipient = match phone {
        Some(number) => Some(number.to_string()),
        None => registry
            .list()
            .await?
            .first()
            .map(|contact| contact.phone.clone()),
    };

    println!("Share links:");
    println!("  Map: {}", maps_link(latitude, longitude));
    match recipient {
        Some(number) => {
            println!("  WhatsApp: {}", whatsapp_send_url(&number, &message));
            println!("  Call: {}", dial_url(&number));
        }
        None => println!("  No emergency contacts saved. Add one with `sakhi add-contact`."),
    }
    Ok(())
}

async fn handle_settings(store: &dyn KeyValueStore) -> Result<(), Box<dyn std::error::Error>> {
    let mut settings = sakhi_settings::load(store).await?;
    print_settings(&settings);
    println!();

    let labels = [
        "Toggle push notifications",
        "Toggle location sharing",
        "Toggle emergency alerts",
        "Toggle anonymous mode",
        "Toggle biometric login",
        "Change language",
        "Clear all data",
    ];
    let idx = Select::new()
        .with_prompt("Settings")
        .items(&labels)
        .default(0)
        .interact()?;

    match idx {
        0 => settings.notifications = !settings.notifications,
        1 => settings.location_sharing = !settings.location_sharing,
        2 => settings.emergency_alerts = !settings.emergency_alerts,
        3 => settings.anonymous_mode = !settings.anonymous_mode,
        4 => settings.biometric_login = !settings.biometric_login,
        5 => {
            settings.language = Input::new()
                .with_prompt("Language")
                .default(settings.language.clone())
                .interact_text()?;
        }
        _ => {
            let confirmed = Confirm::new()
                .with_prompt("Permanently delete all contacts, complaints, and settings?")
                .default(false)
                .interact()?;
            if confirmed {
                sakhi_settings::clear_all_data(store).await?;
                println!("All app data has been cleared.");
            } else {
                println!("Cancelled.");
            }
            return Ok(());
        }
    }

    sakhi_settings::save(store, &settings).await?;
    println!();
    print_settings(&settings);
    Ok(())
}

fn print_settings(settings: &AppSettings) {
    println!("Current settings:");
    println!("  Push notifications: {}", on_off(settings.notifications));
    println!("  Location sharing:   {}", on_off(settings.location_sharing));
    println!("  Emergency alerts:   {}", on_off(settings.emergency_alerts));
    println!("  Anonymous mode:     {}", on_off(settings.anonymous_mode));
    println!("  Biometric login:    {}", on_off(settings.biometric_login));
    println!("  Language:           {}", settings.language);
}

const fn on_off(value: bool) -> &'static str {
    if value { "on" } else { "off" }
}
