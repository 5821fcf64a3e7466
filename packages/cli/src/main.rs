#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Companion CLI for the Sakhi safety toolkit.
//!
//! ```text
//! sakhi chat [--lat 28.63 --lon 77.21] [--warn-radius-km 0.5]
//! sakhi nearest <LATITUDE> <LONGITUDE>
//! sakhi zones [CITY]
//! sakhi tips [--category travel] [--today]
//! sakhi places [--kind hostel] [--available]
//! sakhi contacts
//! sakhi add-contact <NAME> <PHONE> [--relationship Sister]
//! sakhi remove-contact <ID>
//! sakhi sos <LATITUDE> <LONGITUDE> [--address <TEXT>] [--phone <NUMBER>]
//! ```
//!
//! Running `sakhi` with no subcommand enters the interactive menu. Saved
//! data (contacts, complaints, settings) lives in a JSON file under
//! `data/`.

mod interactive;
mod render;

use clap::{Parser, Subcommand};
use sakhi_contacts::ContactRegistry;
use sakhi_geo::distance_km;
use sakhi_places::PlaceKind;
use sakhi_store::{DEFAULT_STORE_PATH, JsonFileStore, KeyValueStore};
use sakhi_tips::TipCategory;
use sakhi_zones::ZoneIndex;

#[derive(Parser)]
#[command(name = "sakhi", about = "Women's safety companion toolkit")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Chat with the safety assistant
    Chat {
        /// Starting latitude to report before the first message
        #[arg(long, requires = "lon")]
        lat: Option<f64>,
        /// Starting longitude to report before the first message
        #[arg(long, requires = "lat")]
        lon: Option<f64>,
        /// Unsafe-zone warning radius in kilometres
        #[arg(long, default_value_t = sakhi_assistant::DEFAULT_WARN_RADIUS_KM)]
        warn_radius_km: f64,
    },
    /// Find the safety zone nearest to a position
    #[command(allow_negative_numbers = true)]
    Nearest { latitude: f64, longitude: f64 },
    /// List safety zones, optionally for one city
    Zones {
        /// City name, case-insensitive
        city: Option<String>,
    },
    /// Browse safety tips
    Tips {
        /// Only tips in this category (travel, digital, personal, emergency, general)
        #[arg(long)]
        category: Option<TipCategory>,
        /// Show today's tip instead of the list
        #[arg(long)]
        today: bool,
    },
    /// Browse the hostel and hospital directory
    Places {
        /// Only places of this kind (hostel, hospital)
        #[arg(long)]
        kind: Option<PlaceKind>,
        /// Only hostels with beds available, nearest first
        #[arg(long)]
        available: bool,
    },
    /// List saved emergency contacts and national helplines
    Contacts,
    /// Save an emergency contact
    AddContact {
        name: String,
        phone: String,
        /// Relationship shown next to the name
        #[arg(long)]
        relationship: Option<String>,
    },
    /// Remove an emergency contact by id
    RemoveContact { id: String },
    /// Preview the SOS alert for a position
    #[command(allow_negative_numbers = true)]
    Sos {
        latitude: f64,
        longitude: f64,
        /// Street address included in the message
        #[arg(long, default_value = "Address unavailable")]
        address: String,
        /// Number the alert is addressed to; defaults to the first saved contact
        #[arg(long)]
        phone: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        return interactive::run().await;
    };

    match command {
        Commands::Chat {
            lat,
            lon,
            warn_radius_km,
        } => interactive::chat(lat.zip(lon), warn_radius_km)?,
        Commands::Nearest {
            latitude,
            longitude,
        } => nearest(latitude, longitude),
        Commands::Zones { city } => zones(city.as_deref()),
        Commands::Tips { category, today } => tips(category, today),
        Commands::Places { kind, available } => places(kind, available),
        Commands::Contacts => {
            let store = JsonFileStore::open(DEFAULT_STORE_PATH)?;
            contacts(&store).await?;
        }
        Commands::AddContact {
            name,
            phone,
            relationship,
        } => {
            let store = JsonFileStore::open(DEFAULT_STORE_PATH)?;
            let registry = ContactRegistry::new(&store);
            let contact = registry
                .add(&name, &phone, relationship.as_deref().unwrap_or(""))
                .await?;
            println!(
                "Saved {} ({}) as {}.",
                contact.name, contact.relationship, contact.id
            );
        }
        Commands::RemoveContact { id } => {
            let store = JsonFileStore::open(DEFAULT_STORE_PATH)?;
            let registry = ContactRegistry::new(&store);
            if registry.remove(&id).await? {
                println!("Removed contact {id}.");
            } else {
                eprintln!("No contact with id {id}.");
                std::process::exit(1);
            }
        }
        Commands::Sos {
            latitude,
            longitude,
            address,
            phone,
        } => {
            let store = JsonFileStore::open(DEFAULT_STORE_PATH)?;
            interactive::sos_preview(&store, latitude, longitude, &address, phone.as_deref())
                .await?;
        }
    }

    Ok(())
}

fn nearest(latitude: f64, longitude: f64) {
    let index = ZoneIndex::bundled();
    if let Some(zone) = index.nearest_zone(latitude, longitude) {
        let away = distance_km(latitude, longitude, zone.latitude, zone.longitude);
        render::print_zone(zone, Some(away));
    } else {
        println!("No zones in the catalog.");
    }
}

fn zones(city: Option<&str>) {
    let index = ZoneIndex::bundled();
    match city {
        Some(city) => {
            let zones = index.zones_by_city(city);
            if zones.is_empty() {
                let cities = index.cities().join(", ");
                eprintln!("No zones found for {city}. Known cities: {cities}.");
                std::process::exit(1);
            }
            render::print_zone_table(&zones);
        }
        None => {
            let zones: Vec<_> = index.zones().iter().collect();
            render::print_zone_table(&zones);
        }
    }
}

fn tips(category: Option<TipCategory>, today: bool) {
    if today {
        let tip = sakhi_tips::tip_of_the_day(chrono::Local::now().date_naive());
        println!("Tip of the day:");
        println!();
        render::print_tip(tip);
        return;
    }

    let tips: Vec<_> = match category {
        Some(category) => sakhi_tips::tips_by_category(category),
        None => sakhi_tips::all_tips().iter().collect(),
    };
    for tip in tips {
        render::print_tip(tip);
        println!();
    }
}

fn places(kind: Option<PlaceKind>, available: bool) {
    let places: Vec<_> = if available {
        sakhi_places::available_hostels()
    } else {
        match kind {
            Some(PlaceKind::Hostel) => sakhi_places::hostels(),
            Some(PlaceKind::Hospital) => sakhi_places::hospitals(),
            None => sakhi_places::directory().iter().collect(),
        }
    };

    if places.is_empty() {
        println!("No places matched.");
        return;
    }
    for place in places {
        render::print_place(place);
        println!();
    }
}

async fn contacts(store: &dyn KeyValueStore) -> Result<(), Box<dyn std::error::Error>> {
    let registry = ContactRegistry::new(store);
    let contacts = registry.list().await?;

    if contacts.is_empty() {
        println!("No emergency contacts saved. Add one with `sakhi add-contact`.");
    } else {
        render::print_contacts(&contacts);
    }

    println!();
    render::print_helplines();
    Ok(())
}
