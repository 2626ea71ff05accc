use anyhow::{bail, Result};
use catalog::{
    parse_date, parse_yes_no, AttendanceMode, CatalogError, Country, CourseLength, CourseLevel,
    DeadlineCategory, DeadlineWindow, DegreeLevel, DistanceBand, FoundationDuration,
    FoundationStream, FundingType, Intake, LoanType, MastersDegree, PhdFunding,
    PostgraduateDuration, PostgraduateStream, RankingSystem, RankingYear, ResearchField, RoomType,
    ServiceType, StudyMode, TuitionBand, UndergraduateDuration, UndergraduateStream,
};
use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use listings::accommodation::AccommodationCriteria;
use listings::courses::CourseCriteria;
use listings::deadlines::{DeadlineCriteria, DeadlineSort};
use listings::foundation::FoundationCriteria;
use listings::loans::LoanCriteria;
use listings::phd::{PhdCriteria, PhdSort};
use listings::postgraduate::PostgraduateCriteria;
use listings::rankings::{RankingCriteria, RankingSort};
use listings::scholarships::ScholarshipCriteria;
use listings::slider::{ACCOMMODATION_BUDGET, COURSE_BUDGET, LOAN_AMOUNT, LOAN_TENURE};
use listings::undergraduate::UndergraduateCriteria;
use listings::{EnquiryForm, FormErrors, ListingSearch, MatchSort, Slider, Storefront, UiOnlySink};
use pipeline::DeadlineStatus;
use std::path::PathBuf;
use tracing::warn;

mod render;

/// Jawily - study-abroad catalog search
#[derive(Parser)]
#[command(name = "jawily")]
#[command(about = "Search accommodation, courses, funding, and programmes", long_about = None)]
struct Cli {
    /// JSON catalog file to search instead of the built-in data
    #[arg(long, env = "JAWILY_CATALOG", global = true)]
    catalog: Option<PathBuf>,

    /// Day deadline statuses are computed against (YYYY-MM-DD, default: local date)
    #[arg(long, env = "JAWILY_TODAY", value_parser = parse_date, global = true)]
    today: Option<NaiveDate>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Student rooms near a city or university
    Accommodation(AccommodationArgs),
    /// University and short courses
    Courses(CourseArgs),
    /// Scholarships and tuition waivers
    Scholarships(ScholarshipArgs),
    /// Compare education loan offers
    Loans(LoanArgs),
    /// Foundation year programmes
    Foundation(FoundationArgs),
    /// PhD and research programmes
    Phd(PhdArgs),
    /// Taught master's programmes
    Postgraduate(PostgraduateArgs),
    /// Bachelor's programmes
    Undergraduate(UndergraduateArgs),
    /// Application, funding, and visa deadlines
    Deadlines(DeadlineArgs),
    /// University ranking tables
    Rankings(RankingArgs),
    /// Send a free-service enquiry
    Enquiry(EnquiryArgs),
    /// Print the active catalog as JSON
    Export,
}

#[derive(Args)]
struct AccommodationArgs {
    /// City, university, or property name
    #[arg(long, default_value = "")]
    query: String,
    #[arg(long)]
    room_type: Option<RoomType>,
    /// Distance band, e.g. "0-2 km"
    #[arg(long)]
    distance: Option<DistanceBand>,
    /// Available on or before this date
    #[arg(long, value_parser = parse_date)]
    move_in_by: Option<NaiveDate>,
    /// Maximum weekly rent in pounds
    #[arg(long, default_value_t = ACCOMMODATION_BUDGET.default)]
    budget: u32,
}

#[derive(Args)]
struct CourseArgs {
    #[arg(long, default_value = "")]
    query: String,
    #[arg(long)]
    level: Option<CourseLevel>,
    #[arg(long)]
    mode: Option<StudyMode>,
    /// Duration band, e.g. "6-12 months"
    #[arg(long)]
    duration: Option<CourseLength>,
    /// Starting on or before this date
    #[arg(long, value_parser = parse_date)]
    start_by: Option<NaiveDate>,
    /// Maximum total fee in pounds
    #[arg(long, default_value_t = COURSE_BUDGET.default)]
    budget: u32,
}

#[derive(Args)]
struct ScholarshipArgs {
    #[arg(long, default_value = "")]
    query: String,
    #[arg(long)]
    country: Option<Country>,
    #[arg(long)]
    level: Option<DegreeLevel>,
    #[arg(long)]
    funding: Option<FundingType>,
    #[arg(long)]
    deadline: Option<DeadlineWindow>,
    #[arg(long, default_value_t = MatchSort::BestMatch)]
    sort: MatchSort,
}

#[derive(Args)]
struct LoanArgs {
    #[arg(long)]
    loan_type: Option<LoanType>,
    #[arg(long)]
    country: Option<Country>,
    /// Amount needed in pounds
    #[arg(long, default_value_t = LOAN_AMOUNT.default)]
    amount: u32,
    /// Repayment tenure needed in years
    #[arg(long, default_value_t = LOAN_TENURE.default)]
    tenure: u32,
    /// Can you offer collateral? (yes/no)
    #[arg(long, value_parser = parse_answer)]
    collateral: Option<bool>,
    /// Do you have a co-applicant? (yes/no)
    #[arg(long, value_parser = parse_answer)]
    co_applicant: Option<bool>,
}

#[derive(Args)]
struct FoundationArgs {
    #[arg(long, default_value = "")]
    query: String,
    #[arg(long)]
    country: Option<Country>,
    #[arg(long)]
    intake: Option<Intake>,
    #[arg(long)]
    stream: Option<FoundationStream>,
    #[arg(long)]
    duration: Option<FoundationDuration>,
    #[arg(long)]
    budget: Option<TuitionBand>,
    #[arg(long, default_value_t = MatchSort::BestMatch)]
    sort: MatchSort,
}

#[derive(Args)]
struct PhdArgs {
    #[arg(long, default_value = "")]
    query: String,
    #[arg(long)]
    country: Option<Country>,
    #[arg(long)]
    intake: Option<Intake>,
    #[arg(long)]
    field: Option<ResearchField>,
    #[arg(long)]
    funding: Option<PhdFunding>,
    #[arg(long)]
    mode: Option<AttendanceMode>,
    #[arg(long)]
    deadline: Option<DeadlineWindow>,
    #[arg(long, default_value_t = PhdSort::BestMatch)]
    sort: PhdSort,
}

#[derive(Args)]
struct PostgraduateArgs {
    #[arg(long, default_value = "")]
    query: String,
    #[arg(long)]
    country: Option<Country>,
    #[arg(long)]
    intake: Option<Intake>,
    #[arg(long)]
    degree: Option<MastersDegree>,
    #[arg(long)]
    stream: Option<PostgraduateStream>,
    #[arg(long)]
    duration: Option<PostgraduateDuration>,
    #[arg(long)]
    budget: Option<TuitionBand>,
    #[arg(long, default_value_t = MatchSort::BestMatch)]
    sort: MatchSort,
}

#[derive(Args)]
struct UndergraduateArgs {
    #[arg(long, default_value = "")]
    query: String,
    #[arg(long)]
    country: Option<Country>,
    #[arg(long)]
    intake: Option<Intake>,
    #[arg(long)]
    stream: Option<UndergraduateStream>,
    #[arg(long)]
    duration: Option<UndergraduateDuration>,
    #[arg(long)]
    budget: Option<TuitionBand>,
    #[arg(long, default_value_t = MatchSort::BestMatch)]
    sort: MatchSort,
}

#[derive(Args)]
struct DeadlineArgs {
    #[arg(long, default_value = "")]
    query: String,
    #[arg(long)]
    country: Option<Country>,
    /// Also matches deadlines that apply to every level
    #[arg(long)]
    level: Option<DegreeLevel>,
    #[arg(long)]
    category: Option<DeadlineCategory>,
    /// Open, "Due soon", "Closing today", Closed, or All
    #[arg(long, value_parser = parse_status)]
    status: Option<StatusArg>,
    #[arg(long, default_value_t = DeadlineSort::Soonest)]
    sort: DeadlineSort,
}

#[derive(Args)]
struct RankingArgs {
    #[arg(long, default_value_t = RankingSystem::Qs)]
    system: RankingSystem,
    #[arg(long, default_value_t = 2026)]
    year: RankingYear,
    #[arg(long)]
    country: Option<Country>,
    /// Name, country, city, or tag
    #[arg(long, default_value = "")]
    query: String,
    #[arg(long, default_value_t = RankingSort::RankAscending)]
    sort: RankingSort,
    /// Also list universities without a rank in the selected table
    #[arg(long)]
    include_unranked: bool,
}

#[derive(Args)]
struct EnquiryArgs {
    #[arg(long, default_value = "")]
    name: String,
    #[arg(long, default_value = "")]
    phone: String,
    #[arg(long, default_value = "")]
    email: String,
    #[arg(long, default_value_t = ServiceType::AccommodationShortlist)]
    service: ServiceType,
    #[arg(long, default_value_t = Country::Uk)]
    study_country: Country,
    /// e.g. "Sep 2026"
    #[arg(long, default_value = "")]
    intake: String,
    /// e.g. "£150-£250/wk"
    #[arg(long, default_value = "")]
    budget: String,
    #[arg(long, default_value = "")]
    message: String,
    /// Do not consent to being contacted
    #[arg(long)]
    no_consent: bool,
}

/// A status selection; "All" is no constraint.
#[derive(Clone, Copy)]
struct StatusArg(Option<DeadlineStatus>);

fn parse_status(value: &str) -> std::result::Result<StatusArg, String> {
    if value.trim().eq_ignore_ascii_case("all") {
        return Ok(StatusArg(None));
    }
    DeadlineStatus::from_label(value)
        .map(|status| StatusArg(Some(status)))
        .ok_or_else(|| format!("unknown status '{value}'"))
}

fn parse_answer(value: &str) -> std::result::Result<bool, CatalogError> {
    parse_yes_no("answer", value)
}

/// Warn when a slider value will be moved into range or onto a step.
fn check_slider(name: &'static str, slider: Slider, value: u32) {
    if !slider.is_settled(value) {
        warn!(
            name,
            value,
            used = slider.clamp(value),
            min = slider.min,
            max = slider.max,
            step = slider.step,
            "Value not on slider, adjusting"
        );
    }
}

fn main() -> Result<()> {
    // Logs go to stderr so --json output stays machine-readable
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let storefront = match &cli.catalog {
        Some(path) => Storefront::from_file(path)?,
        None => Storefront::builtin()?,
    };
    let today = cli.today.unwrap_or_else(|| Local::now().date_naive());
    let json = cli.json;

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Accommodation(args) => handle_accommodation(&storefront, args, json)?,
        Commands::Courses(args) => handle_courses(&storefront, args, json)?,
        Commands::Scholarships(args) => handle_scholarships(&storefront, args, json)?,
        Commands::Loans(args) => handle_loans(&storefront, args, json)?,
        Commands::Foundation(args) => handle_foundation(&storefront, args, json)?,
        Commands::Phd(args) => handle_phd(&storefront, args, json)?,
        Commands::Postgraduate(args) => handle_postgraduate(&storefront, args, json)?,
        Commands::Undergraduate(args) => handle_undergraduate(&storefront, args, json)?,
        Commands::Deadlines(args) => handle_deadlines(&storefront, args, today, json)?,
        Commands::Rankings(args) => handle_rankings(&storefront, args, json)?,
        Commands::Enquiry(args) => handle_enquiry(args, json)?,
        Commands::Export => println!("{}", storefront.catalogs().to_json_pretty()?),
    }

    Ok(())
}

fn handle_accommodation(storefront: &Storefront, args: AccommodationArgs, json: bool) -> Result<()> {
    check_slider("budget", ACCOMMODATION_BUDGET, args.budget);
    let criteria = AccommodationCriteria {
        query: args.query,
        room_type: args.room_type,
        distance: args.distance,
        move_in_by: args.move_in_by,
        budget: args.budget,
    };
    let page = &storefront.accommodation;
    let results = page.search(&criteria);
    if json {
        return render::print_json(&results);
    }
    render::print_count(results.len(), "option");
    for property in &results {
        render::print_property(property, page.distance_band(property));
    }
    render::print_empty(page, results.is_empty());
    Ok(())
}

fn handle_courses(storefront: &Storefront, args: CourseArgs, json: bool) -> Result<()> {
    check_slider("budget", COURSE_BUDGET, args.budget);
    let criteria = CourseCriteria {
        query: args.query,
        level: args.level,
        mode: args.mode,
        duration: args.duration,
        start_by: args.start_by,
        budget: args.budget,
    };
    let page = &storefront.courses;
    let results = page.search(&criteria);
    if json {
        return render::print_json(&results);
    }
    render::print_count(results.len(), "course");
    for course in &results {
        render::print_course(course, page.duration_band(course));
    }
    render::print_empty(page, results.is_empty());
    Ok(())
}

fn handle_scholarships(storefront: &Storefront, args: ScholarshipArgs, json: bool) -> Result<()> {
    let criteria = ScholarshipCriteria {
        query: args.query,
        country: args.country,
        level: args.level,
        funding: args.funding,
        deadline: args.deadline,
        sort: args.sort,
    };
    render::run_page(&storefront.scholarships, &criteria, json, "scholarship", render::print_scholarship)
}

fn handle_loans(storefront: &Storefront, args: LoanArgs, json: bool) -> Result<()> {
    check_slider("amount", LOAN_AMOUNT, args.amount);
    check_slider("tenure", LOAN_TENURE, args.tenure);
    let criteria = LoanCriteria {
        loan_type: args.loan_type,
        country: args.country,
        amount: args.amount,
        tenure_years: args.tenure,
        collateral: args.collateral,
        co_applicant: args.co_applicant,
    };
    render::run_page(&storefront.loans, &criteria, json, "offer", render::print_loan)
}

fn handle_foundation(storefront: &Storefront, args: FoundationArgs, json: bool) -> Result<()> {
    let criteria = FoundationCriteria {
        query: args.query,
        country: args.country,
        intake: args.intake,
        stream: args.stream,
        duration: args.duration,
        budget: args.budget,
        sort: args.sort,
    };
    render::run_page(&storefront.foundation, &criteria, json, "programme", render::print_foundation)
}

fn handle_phd(storefront: &Storefront, args: PhdArgs, json: bool) -> Result<()> {
    let criteria = PhdCriteria {
        query: args.query,
        country: args.country,
        intake: args.intake,
        field: args.field,
        funding: args.funding,
        mode: args.mode,
        deadline: args.deadline,
        sort: args.sort,
    };
    render::run_page(&storefront.phd, &criteria, json, "programme", render::print_phd)
}

fn handle_postgraduate(storefront: &Storefront, args: PostgraduateArgs, json: bool) -> Result<()> {
    let criteria = PostgraduateCriteria {
        query: args.query,
        country: args.country,
        intake: args.intake,
        degree: args.degree,
        stream: args.stream,
        duration: args.duration,
        budget: args.budget,
        sort: args.sort,
    };
    render::run_page(&storefront.postgraduate, &criteria, json, "programme", render::print_postgraduate)
}

fn handle_undergraduate(storefront: &Storefront, args: UndergraduateArgs, json: bool) -> Result<()> {
    let criteria = UndergraduateCriteria {
        query: args.query,
        country: args.country,
        intake: args.intake,
        stream: args.stream,
        duration: args.duration,
        budget: args.budget,
        sort: args.sort,
    };
    render::run_page(&storefront.undergraduate, &criteria, json, "programme", render::print_undergraduate)
}

fn handle_deadlines(storefront: &Storefront, args: DeadlineArgs, today: NaiveDate, json: bool) -> Result<()> {
    let criteria = DeadlineCriteria {
        query: args.query,
        country: args.country,
        level: args.level,
        category: args.category,
        status: args.status.and_then(|selection| selection.0),
        sort: args.sort,
        ..DeadlineCriteria::as_of(today)
    };
    let page = &storefront.deadlines;
    let results = page.search(&criteria);
    if json {
        return render::print_deadlines_json(&results, today);
    }
    render::print_status_counts(&page.counts(today), today);
    render::print_count(results.len(), "deadline");
    for item in &results {
        render::print_deadline(item, today);
    }
    render::print_empty(page, results.is_empty());
    Ok(())
}

fn handle_rankings(storefront: &Storefront, args: RankingArgs, json: bool) -> Result<()> {
    let criteria = RankingCriteria {
        system: args.system,
        year: args.year,
        country: args.country,
        query: args.query,
        sort: args.sort,
        only_ranked: !args.include_unranked,
    };
    let page = &storefront.rankings;
    let results = page.search(&criteria);
    if json {
        return render::print_rankings_json(&results, criteria.system, criteria.year);
    }
    render::print_count_with(results.len(), "university", "universities");
    for university in &results {
        render::print_university(university, criteria.system, criteria.year);
    }
    render::print_empty(page, results.is_empty());
    Ok(())
}

fn handle_enquiry(args: EnquiryArgs, json: bool) -> Result<()> {
    let form = EnquiryForm {
        full_name: args.name,
        phone: args.phone,
        email: args.email,
        service: args.service,
        study_country: args.study_country,
        intake: args.intake,
        budget: args.budget,
        message: args.message,
        consent: !args.no_consent,
    };

    match form.submit(&UiOnlySink) {
        Ok(receipt) => {
            if json {
                return render::print_json(&receipt);
            }
            render::print_receipt(&receipt);
            Ok(())
        }
        Err(err) => match err.downcast::<FormErrors>() {
            Ok(errors) => {
                if json {
                    render::print_json(&errors)?;
                } else {
                    render::print_form_errors(&errors);
                }
                bail!("Enquiry not submitted")
            }
            Err(err) => Err(err),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_argument() {
        assert!(matches!(parse_status("All"), Ok(StatusArg(None))));
        assert!(matches!(
            parse_status("due soon"),
            Ok(StatusArg(Some(DeadlineStatus::DueSoon)))
        ));
        assert!(parse_status("soonish").is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "jawily",
            "deadlines",
            "--status",
            "closed",
            "--today",
            "2026-02-20",
            "--json",
        ])
        .unwrap();

        assert!(cli.json);
        assert_eq!(cli.today, NaiveDate::from_ymd_opt(2026, 2, 20));
        match cli.command {
            Commands::Deadlines(args) => {
                assert!(matches!(args.status, Some(StatusArg(Some(DeadlineStatus::Closed)))));
                assert_eq!(args.sort, DeadlineSort::Soonest);
            }
            _ => panic!("expected deadlines command"),
        }
    }

    #[test]
    fn test_loan_answers() {
        assert!(parse_answer("Yes").unwrap());
        assert!(!parse_answer("no").unwrap());
        assert!(parse_answer("maybe").is_err());
        assert!(Cli::try_parse_from(["jawily", "loans", "--collateral", "maybe"]).is_err());
    }
}
