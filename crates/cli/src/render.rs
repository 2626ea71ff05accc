//! Terminal and JSON output for search results.

use anyhow::Result;
use catalog::{
    Course, CourseLength, DeadlineItem, DistanceBand, FoundationProgram, LoanOffer, PhdProgram,
    PostgraduateProgram, Property, RankingSystem, RankingYear, Scholarship, UndergraduateProgram,
    University,
};
use chrono::NaiveDate;
use colored::Colorize;
use listings::deadlines::status_of;
use listings::enquiry::Receipt;
use listings::format::{gbp, per_week, plural};
use listings::{FormErrors, ListingSearch, Preview};
use pipeline::{DeadlineStatus, StatusCounts};
use serde::Serialize;

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Search, then print either JSON or one card per result.
pub fn run_page<S>(
    page: &S,
    criteria: &S::Criteria,
    json: bool,
    noun: &str,
    print: fn(&S::Record),
) -> Result<()>
where
    S: ListingSearch,
    S::Record: Serialize,
{
    let results = page.search(criteria);
    if json {
        return print_json(&results);
    }
    print_count(results.len(), noun);
    for record in &results {
        print(record);
    }
    print_empty(page, results.is_empty());
    Ok(())
}

pub fn print_count(count: usize, noun: &str) {
    println!("{}", format!("Showing {}", plural(noun, count)).bold().blue());
}

/// For nouns without a regular plural.
pub fn print_count_with(count: usize, singular: &str, plural: &str) {
    let noun = if count == 1 { singular } else { plural };
    println!("{}", format!("Showing {count} {noun}").bold().blue());
}

pub fn print_empty<S: ListingSearch>(page: &S, empty: bool) {
    if empty {
        let state = page.empty_state();
        println!("{}", state.title.bold());
        println!("{}", state.hint.dimmed());
    }
}

fn rating(value: f64) -> String {
    format!("★ {value:.1}")
}

fn verified(flag: bool) -> String {
    if flag {
        "✓ Verified".green().to_string()
    } else {
        "Unverified".dimmed().to_string()
    }
}

fn chips(preview: Preview<'_>) {
    if !preview.shown.is_empty() {
        println!("   {}", preview.to_string().cyan());
    }
}

pub fn print_property(property: &Property, band: DistanceBand) {
    println!(
        "{} {} ({})",
        "•".green(),
        property.name.bold(),
        property.room_type
    );
    println!("   {} · near {}", property.city, property.university_nearby);
    println!(
        "   {} · {} km ({}) · move-in {} · {} · {}",
        per_week(property.price_per_week).bold(),
        property.distance_km,
        band,
        property.move_in,
        rating(property.rating),
        verified(property.verified)
    );
    chips(Preview::of(&property.perks));
}

pub fn print_course(course: &Course, band: CourseLength) {
    println!("{} {}", "•".green(), course.title.bold());
    println!("   {} · {}", course.university, course.city);
    println!(
        "   {} · {} · {} · {} months ({}) · starts {} · {} · {}",
        course.level,
        course.mode,
        gbp(course.fee_gbp).bold(),
        course.duration_months,
        band,
        course.start_date,
        rating(course.rating),
        verified(course.verified)
    );
    chips(Preview::of(&course.tags));
}

pub fn print_scholarship(scholarship: &Scholarship) {
    println!("{} {}", "•".green(), scholarship.name.bold());
    println!(
        "   {} · {} · {}",
        scholarship.provider, scholarship.country, scholarship.level
    );
    println!(
        "   {} · {} · {} ({})",
        scholarship.funding,
        scholarship.amount_text.bold(),
        scholarship.deadline_text,
        scholarship.deadline_window
    );
    chips(Preview::of(&scholarship.tags));
    if !scholarship.note.is_empty() {
        println!("   {}", scholarship.note.dimmed());
    }
}

pub fn print_loan(offer: &LoanOffer) {
    println!("{} {} ({})", "•".green(), offer.lender.bold(), offer.loan_type);
    println!(
        "   up to {} · APR from {:.1}% · up to {} years",
        gbp(offer.max_amount_gbp).bold(),
        offer.apr_from,
        offer.tenure_years
    );
    println!(
        "   Processing fee: {} · Moratorium: {}",
        offer.processing_fee, offer.moratorium
    );
    let countries = Preview::new(
        offer.countries.iter().map(|c| c.label()),
        Preview::COUNTRY_LIMIT,
    );
    println!("   Countries: {countries}");
    chips(Preview::of(&offer.highlights));
}

fn intakes(list: &[catalog::Intake]) -> String {
    list.iter().map(|i| i.label()).collect::<Vec<_>>().join(", ")
}

pub fn print_foundation(program: &FoundationProgram) {
    println!("{} {}", "•".green(), program.title.bold());
    println!(
        "   {} · {}, {}",
        program.provider, program.city, program.country
    );
    println!(
        "   {} · intakes {} · {} · {}",
        program.stream,
        intakes(&program.intakes),
        program.duration,
        program.budget.to_string().bold()
    );
    chips(Preview::of(&program.requirements));
    chips(Preview::of(&program.benefits));
}

pub fn print_phd(program: &PhdProgram) {
    println!("{} {}", "•".green(), program.title.bold());
    println!(
        "   {} · {}, {}",
        program.university, program.city, program.country
    );
    println!(
        "   {} · {} · {} · intakes {} · {} ({})",
        program.field,
        program.funding.to_string().bold(),
        program.mode,
        intakes(&program.intakes),
        program.deadline_text,
        program.deadline_window
    );
    chips(Preview::of(&program.requirements));
    chips(Preview::of(&program.highlights));
}

pub fn print_postgraduate(program: &PostgraduateProgram) {
    println!("{} {} ({})", "•".green(), program.program.bold(), program.degree);
    println!(
        "   {} · {}, {}",
        program.university, program.city, program.country
    );
    println!(
        "   {} · intakes {} · {} · {}",
        program.stream,
        intakes(&program.intakes),
        program.duration,
        program.tuition.to_string().bold()
    );
    chips(Preview::of(&program.requirements));
    chips(Preview::of(&program.highlights));
}

pub fn print_undergraduate(program: &UndergraduateProgram) {
    println!("{} {}", "•".green(), program.program.bold());
    println!(
        "   {} · {}, {}",
        program.university, program.city, program.country
    );
    println!(
        "   {} · intakes {} · {} · {}",
        program.stream,
        intakes(&program.intakes),
        program.duration,
        program.tuition.to_string().bold()
    );
    chips(Preview::of(&program.requirements));
    chips(Preview::of(&program.highlights));
}

pub fn print_status_counts(counts: &StatusCounts, today: NaiveDate) {
    println!(
        "{} {} · {} {} · {} {} · {} {}   (as of {})",
        "Open".green(),
        counts.open,
        "Due soon".yellow(),
        counts.due_soon,
        "Closing today".red(),
        counts.closing_today,
        "Closed".dimmed(),
        counts.closed,
        today
    );
}

fn status_badge(status: DeadlineStatus) -> String {
    let label = format!("[{status}]");
    match status {
        DeadlineStatus::Open => label.green().to_string(),
        DeadlineStatus::DueSoon => label.yellow().to_string(),
        DeadlineStatus::ClosingToday => label.red().bold().to_string(),
        DeadlineStatus::Closed => label.dimmed().to_string(),
    }
}

pub fn print_deadline(item: &DeadlineItem, today: NaiveDate) {
    let info = status_of(item, today);
    println!("{} {}", status_badge(info.status), item.title.bold());
    println!(
        "   {} · {} · {}",
        item.category, item.country, item.provider
    );
    println!("   {} · {}", item.date, info.day_text().bold());

    let badges = Preview::new(
        item.level
            .iter()
            .map(|level| level.label())
            .chain(item.tags.iter().map(String::as_str)),
        Preview::DEFAULT_LIMIT + usize::from(item.level.is_some()),
    );
    chips(badges);
    if !item.note.is_empty() {
        println!("   {}", item.note.dimmed());
    }
}

pub fn print_deadlines_json(items: &[&DeadlineItem], today: NaiveDate) -> Result<()> {
    let mut rows = Vec::with_capacity(items.len());
    for item in items {
        let info = status_of(item, today);
        let mut row = serde_json::to_value(item)?;
        row["status"] = serde_json::json!(info.status.label());
        row["days"] = serde_json::json!(info.days);
        rows.push(row);
    }
    print_json(&rows)
}

pub fn print_university(university: &University, system: RankingSystem, year: RankingYear) {
    let rank = university
        .rank(system, year)
        .map(|r| format!("#{r}"))
        .unwrap_or_else(|| "—".to_string());
    let place = match &university.city {
        Some(city) => format!("{}, {}", city, university.country),
        None => university.country.to_string(),
    };
    println!(
        "{} {} ({})",
        format!("{rank:>6}").green().bold(),
        university.name.bold(),
        place
    );
    if !university.highlight.is_empty() {
        println!("       {}", university.highlight.dimmed());
    }
}

pub fn print_rankings_json(
    universities: &[&University],
    system: RankingSystem,
    year: RankingYear,
) -> Result<()> {
    let mut rows = Vec::with_capacity(universities.len());
    for university in universities {
        let mut row = serde_json::to_value(university)?;
        row["rank"] = serde_json::json!(university.rank(system, year));
        rows.push(row);
    }
    print_json(&rows)
}

pub fn print_receipt(receipt: &Receipt) {
    println!("{} {}", "✓".green(), "Submitted".bold());
    println!("   {}", receipt.confirmation);
    println!("   Service: {}", receipt.service);
    println!("   Country: {}", receipt.study_country);
    println!("   {}", receipt.note.dimmed());
}

pub fn print_form_errors(errors: &FormErrors) {
    for (field, message) in errors.iter() {
        println!("{} {}: {}", "✗".red(), field, message);
    }
}
