use std::fmt::Write;

use wayfarer_core::{Itinerary, UserPreferences};

pub fn format_currency(amount: f64, currency: &str) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let value = amount.abs();
    match currency.to_ascii_uppercase().as_str() {
        "USD" => format!("{sign}${}", group_thousands(value, 2)),
        "EUR" => format!("{sign}€{}", group_thousands(value, 2)),
        "GBP" => format!("{sign}£{}", group_thousands(value, 2)),
        "JPY" => format!("{sign}¥{}", group_thousands(value, 0)),
        other => format!("{sign}{} {other}", group_thousands(value, 2)),
    }
}

fn group_thousands(value: f64, decimals: usize) -> String {
    let formatted = format!("{value:.decimals$}");
    let (whole, fraction) = match formatted.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (idx, digit) in whole.chars().enumerate() {
        if idx > 0 && (whole.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    match fraction {
        Some(fraction) => format!("{grouped}.{fraction}"),
        None => grouped,
    }
}

pub fn trip_duration_text(days: usize) -> &'static str {
    match days {
        0..=3 => "short getaway",
        4..=7 => "week-long trip",
        8..=14 => "two-week vacation",
        _ => "extended journey",
    }
}

pub fn itinerary_report(prefs: &UserPreferences, itinerary: &Itinerary, currency: &str) -> String {
    let money = |amount: f64| format_currency(amount, currency);
    let days = itinerary.duration();
    let destination = &itinerary.destination;
    let transport = &itinerary.transportation;
    let stay = &itinerary.accommodation;

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} ({}-day {})",
        destination.name,
        days,
        trip_duration_text(days)
    );
    let _ = writeln!(
        out,
        "{} to {}",
        prefs.start_date.format("%B %d, %Y"),
        prefs.end_date.format("%B %d, %Y")
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", itinerary.overview);

    let _ = writeln!(out, "\nTrip details");
    let _ = writeln!(
        out,
        "  Transportation: {} ({} km, {:.1} h, {})",
        transport.mode,
        transport.distance_km,
        transport.travel_time_hours,
        money(transport.cost)
    );
    let _ = writeln!(
        out,
        "  Accommodation:  {} [{}] {}/night, rating {:.1}, total {}{}",
        stay.accommodation.name,
        stay.accommodation.kind,
        money(stay.accommodation.cost_per_night),
        stay.accommodation.rating,
        money(stay.total_cost),
        if stay.within_budget { "" } else { " (over nightly allowance)" }
    );
    let _ = writeln!(
        out,
        "  Local currency: {}  Languages: {}",
        destination.currency,
        destination.languages.join(", ")
    );
    if !destination.local_transportation.is_empty() {
        let _ = writeln!(
            out,
            "  Getting around: {}",
            destination.local_transportation.join(", ")
        );
    }

    for plan in &itinerary.daily_plans {
        let _ = writeln!(out, "\nDay {}: {}", plan.day, plan.title);
        for (period, slot) in plan.slots() {
            let _ = writeln!(
                out,
                "  {:<10} {} ({})",
                period.as_str(),
                slot.description,
                money(slot.cost)
            );
        }
        let _ = writeln!(out, "  Day total: {}", money(plan.total_cost));
    }

    let breakdown = &itinerary.budget_breakdown;
    let _ = writeln!(out, "\nBudget");
    for (label, amount) in breakdown.categories() {
        let _ = writeln!(out, "  {:<16}{:>14}", label, money(amount));
    }
    let _ = writeln!(out, "  {:<16}{:>14}", "Total", money(breakdown.total()));
    let _ = writeln!(out, "  {:<16}{:>14}", "Budget", money(itinerary.budget));

    let remaining = itinerary.remaining_budget();
    if itinerary.is_over_budget() {
        let _ = writeln!(out, "  {:<16}{:>14}", "Overspend", money(-remaining));
    } else {
        let _ = writeln!(out, "  {:<16}{:>14}", "Remaining", money(remaining));
    }
    if itinerary.budget_floor_applied {
        let _ = writeln!(
            out,
            "  Transportation and lodging exceed the budget; activities use a reserved minimum."
        );
    }

    out
}
