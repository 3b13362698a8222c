use colored::Colorize;
use meals::api::{CmdMessage, MessageLevel};
use meals::config::MealsConfig;
use meals::index::DisplayMeal;
use meals::model::Meal;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 72;
const MIN_NAME_WIDTH: usize = 20;
/// Widest scale drawn as stars; larger scales print as `rating/max`.
const MAX_STARS: i32 = 10;
const PHOTO_MARKER: &str = "▣";
const STAR_FULL: &str = "★";
const STAR_EMPTY: &str = "☆";

pub(crate) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => eprintln!("{}", message.content.yellow()),
        }
    }
}

pub(crate) fn print_meals(meals: &[DisplayMeal], max_rating: i32) {
    if meals.is_empty() {
        println!("No meals yet.");
        return;
    }

    let rating_width = meals
        .iter()
        .map(|dm| rating_cell(dm.meal.rating(), max_rating).width())
        .max()
        .unwrap_or(0);
    for dm in meals {
        println!("{}", format_row(dm, max_rating, rating_width));
    }
}

fn format_row(dm: &DisplayMeal, max_rating: i32, rating_width: usize) -> String {
    let idx_str = format!("{:>3}. ", dm.index.get());
    let marker = if dm.meal.has_photo() { PHOTO_MARKER } else { " " };
    let fixed = idx_str.width() + rating_width + marker.width() + 2;
    let available = LINE_WIDTH.saturating_sub(fixed).max(MIN_NAME_WIDTH);

    let name = truncate_to_width(dm.meal.name(), available);
    let padding = available.saturating_sub(name.width());
    let rating = rating_cell(dm.meal.rating(), max_rating);
    let rating_pad = rating_width.saturating_sub(rating.width());

    format!(
        "{}{}{} {}{} {}",
        idx_str.yellow(),
        name,
        " ".repeat(padding),
        " ".repeat(rating_pad),
        rating.yellow(),
        marker.cyan()
    )
}

pub(crate) fn print_full_meals(meals: &[DisplayMeal], max_rating: i32) {
    for (i, dm) in meals.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{} {}", dm.index.to_string().yellow(), dm.meal.name().bold());
        let rating = rating_cell(dm.meal.rating(), max_rating);
        println!("  rating: {} ({})", rating.yellow(), dm.meal.rating());
        println!("  photo:  {}", photo_summary(&dm.meal));
    }
}

pub(crate) fn print_config(config: &MealsConfig) {
    println!("data-file = {}", config.data_file);
    println!("max-rating = {}", config.max_rating);
    println!("seed-on-first-run = {}", config.seed_on_first_run);
}

fn photo_summary(meal: &Meal) -> String {
    match meal.photo() {
        Some(photo) => format!("{}, {} bytes", photo.format(), photo.len()),
        None => "none".dimmed().to_string(),
    }
}

/// Renders `rating` on a scale of `max`: stars for small scales, where
/// ratings above the scale show as full, and `rating/max` otherwise.
fn rating_cell(rating: i32, max: i32) -> String {
    if max > MAX_STARS {
        return format!("{}/{}", rating, max);
    }
    let max = max.max(0) as usize;
    let full = (rating.max(0) as usize).min(max);
    format!("{}{}", STAR_FULL.repeat(full), STAR_EMPTY.repeat(max - full))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}
