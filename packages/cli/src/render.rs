//! Terminal output helpers shared by the subcommands and the menu.

use sakhi_alert::dial_url;
use sakhi_assistant::{Speaker, TranscriptEntry};
use sakhi_contacts::{EmergencyContact, HELPLINES};
use sakhi_forum::ForumPost;
use sakhi_geo::format_dms;
use sakhi_places::{Place, PlaceKind};
use sakhi_tips::SafetyTip;
use sakhi_zones::SafetyZone;

/// Prints one zone in full detail, with the distance from the query
/// position when known.
pub fn print_zone(zone: &SafetyZone, away_km: Option<f64>) {
    match away_km {
        Some(km) => println!("{}, {} ({km:.2} km away)", zone.area, zone.city),
        None => println!("{}, {}", zone.area, zone.city),
    }
    println!("  Safety: {} ({}/10)", zone.safety_label, zone.safety_score);
    println!(
        "  Lighting: {}/10, foot traffic: {}/10, crime rate: {}",
        zone.lighting_score, zone.foot_traffic_score, zone.crime_rate
    );
    println!(
        "  Coordinates: {}",
        format_dms(zone.latitude, zone.longitude)
    );
    println!(
        "  Police: {} ({}km)",
        zone.nearest_police_station, zone.police_station_distance
    );
    if let Some(date) = zone.last_incident_date {
        println!("  Last reported incident: {date}");
    }
    println!("  Advice: {}", zone.advice);
}

/// Prints zones as a table, one row each.
pub fn print_zone_table(zones: &[&SafetyZone]) {
    println!(
        "{:<12} {:<32} {:<10} {:>5}  POLICE STATION",
        "CITY", "AREA", "LABEL", "SCORE"
    );
    println!("{}", "-".repeat(100));
    for zone in zones {
        println!(
            "{:<12} {:<32} {:<10} {:>5}  {} ({}km)",
            zone.city,
            zone.area,
            zone.safety_label.as_ref(),
            zone.safety_score,
            zone.nearest_police_station,
            zone.police_station_distance
        );
    }
    println!("\n{} zone(s)", zones.len());
}

/// Prints one tip as a bullet with its body indented under it.
pub fn print_tip(tip: &SafetyTip) {
    println!(
        "• {} [{} | {} priority]",
        tip.title, tip.category.as_ref(), tip.priority.as_ref()
    );
    println!("  {}", tip.content);
}

/// Prints one directory entry as a card.
pub fn print_place(place: &Place) {
    let badge = match place.kind {
        PlaceKind::Hospital => "Hospital".to_string(),
        PlaceKind::Hostel => place
            .availability
            .map_or_else(|| "Hostel".to_string(), |a| a.to_string()),
    };
    println!("{} [{badge}]", place.name);

    print!("  Rating: {}/5", place.rating);
    if let Some(safety) = place.safety_rating {
        print!(", safety {safety}/5");
    }
    println!(", {} km away", place.distance_km);

    println!("  {}", place.address);
    let amenities_label = match place.kind {
        PlaceKind::Hostel => "Amenities",
        PlaceKind::Hospital => "Services",
    };
    println!("  {}: {}", amenities_label, place.amenities.join(", "));
    if let Some(price) = place.price_per_day {
        println!("  ₹{price}/day");
    }
    println!("  Call: {}", dial_url(&place.phone));
}

/// Prints one forum post with its byline and reply counts.
pub fn print_post(post: &ForumPost) {
    println!("{} [{}]", post.title, post.category.as_ref());
    println!("  by {}, {}", post.author, post.posted);
    println!("  {} replies, {} likes", post.replies, post.likes);
    println!("  {}", post.content);
}

/// Prints saved emergency contacts as a table.
pub fn print_contacts(contacts: &[EmergencyContact]) {
    println!("{:<38} {:<20} {:<16} RELATIONSHIP", "ID", "NAME", "PHONE");
    println!("{}", "-".repeat(90));
    for contact in contacts {
        println!(
            "{:<38} {:<20} {:<16} {}",
            contact.id, contact.name, contact.phone, contact.relationship
        );
    }
}

/// Prints the built-in national helpline numbers.
pub fn print_helplines() {
    println!("National helplines:");
    for helpline in HELPLINES {
        println!("  {:<20} {}", helpline.name, helpline.number);
    }
}

/// Prints a transcript entry with its speaker, body indented.
pub fn print_entry(entry: &TranscriptEntry) {
    let speaker = match entry.speaker {
        Speaker::User => "You",
        Speaker::Assistant => "Sakhi",
    };
    println!();
    println!("{speaker}:");
    for line in entry.text.lines() {
        println!("  {line}");
    }
}

/// First eight characters of an id, enough to tell records apart on screen.
#[must_use]
pub fn short_id(id: &str) -> &str {
    if id.len() >= 8 { &id[..8] } else { id }
}
