//! kundli: command-line front end for the chart engine.

mod cli;

use anyhow::{Context, Result, bail};
use chrono::NaiveDateTime;
use clap::Parser;
use kundli_chart::{
    BhuktiList, ChartConfig, ChartRequest, ChartResponse, CurrentDasha, DashaPeriodView,
    MatchSubject, bhuktis, current_dasha, generate_chart, mahadasha_sequence, match_charts,
};
use kundli_core::{KeplerianProvider, PlaceholderProvider, PositionProvider, UnavailableProvider};
use kundli_time::{BirthMoment, TimeValue};
use kundli_vedic::{CompatibilityResult, navamsa_position};
use log::debug;
use serde::Serialize;

use cli::{Backend, BirthArgs, Cli, Commands};

fn init_logger(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .try_init();
}

fn provider_for(backend: Backend) -> Box<dyn PositionProvider> {
    match backend {
        Backend::Keplerian => Box::new(KeplerianProvider),
        Backend::Placeholder => Box::new(PlaceholderProvider),
        Backend::Offline => Box::new(UnavailableProvider::new("no ephemeris backend configured")),
    }
}

fn load_config(cli: &Cli) -> Result<ChartConfig> {
    match &cli.config {
        Some(path) => ChartConfig::from_json_file(path)
            .with_context(|| format!("loading config {}", path.display())),
        None => Ok(ChartConfig::default()),
    }
}

fn parse_local(s: &str) -> Result<NaiveDateTime> {
    let s = s.trim_end_matches('Z');
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M"))
        .with_context(|| format!("expected YYYY-MM-DDThh:mm[:ss], got {s}"))
}

fn parse_utc(s: &str) -> Result<TimeValue> {
    Ok(TimeValue::from_datetime_utc(parse_local(s)?.and_utc()))
}

fn birth_moment(date: &str, tz: f64, lat: f64, lon: f64) -> Result<BirthMoment> {
    use chrono::{Datelike, Timelike};

    let dt = parse_local(date)?;
    let second = f64::from(dt.second()) + f64::from(dt.nanosecond()) / 1e9;
    Ok(
        BirthMoment::new(dt.year(), dt.month(), dt.day(), dt.hour(), dt.minute(), tz)
            .with_location(lat, lon)
            .with_second(second),
    )
}

fn birth_from(args: &BirthArgs) -> Result<BirthMoment> {
    birth_moment(&args.date, args.tz, args.lat, args.lon)
}

fn emit_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn period_dates(period: &DashaPeriodView) -> (String, String) {
    let show = |utc: Option<chrono::DateTime<chrono::Utc>>, jd: f64| match utc {
        Some(t) => t.format("%Y-%m-%d").to_string(),
        None => format!("JD {jd:.2}"),
    };
    (
        show(period.start, period.start_jd),
        show(period.end, period.end_jd),
    )
}

fn print_periods(periods: &[DashaPeriodView], indent: usize) {
    for p in periods {
        let (start, end) = period_dates(p);
        println!(
            "{:indent$}{:>2}. {:<8} {} .. {}  ({:.3} y)",
            "",
            p.order,
            p.lord.name(),
            start,
            end,
            p.duration_years,
        );
        print_periods(&p.children, indent + 4);
    }
}

fn print_placeholder_note(placeholder_data: bool) {
    if placeholder_data {
        println!("NOTE: placeholder positions, not an ephemeris");
    }
}

fn print_bhuktis(list: &BhuktiList) {
    for b in &list.bhuktis {
        let (start, end) = period_dates(&b.period);
        println!(
            "{:>2}. {:<8}/ {:<8} {} .. {}  ({:.3} y)",
            b.period.order,
            b.maha_lord.name(),
            b.period.lord.name(),
            start,
            end,
            b.period.duration_years,
        );
        print_periods(&b.period.children, 4);
    }
}

fn print_chart(chart: &ChartResponse) {
    print_placeholder_note(chart.placeholder_data);
    println!(
        "Lagna {} ({:.4} deg), MC {:.4} deg",
        chart.houses.lagna.name(),
        chart.houses.ascendant_deg,
        chart.houses.mc_deg
    );
    println!();
    println!(
        "{:<8} {:>10} {:<12} {:<18} {:>5} {:<12}",
        "Graha", "Lon", "Rashi", "Nakshatra", "House", "Navamsa"
    );
    for ((p, r), d9) in chart.planets.iter().zip(&chart.rasi).zip(&chart.navamsa) {
        println!(
            "{:<8} {:>10.4} {:<12} {:<18} {:>5} {:<12}{}",
            p.graha.name(),
            p.longitude_deg,
            r.sign_name,
            format!("{} {}", p.nakshatra.name(), p.pada),
            p.house,
            d9.position.navamsa_sign.name(),
            if p.retrograde { " R" } else { "" }
        );
    }
    println!();
    print_panchang(chart);
    println!();
    println!("Vimshottari dasha:");
    let top: Vec<DashaPeriodView> = chart
        .dasha
        .sequence
        .iter()
        .map(|p| DashaPeriodView {
            children: Vec::new(),
            ..p.clone()
        })
        .collect();
    print_periods(&top, 2);
    if let Some(current) = &chart.dasha.current {
        print_current(current);
    }
}

fn print_panchang(chart: &ChartResponse) {
    let p = &chart.panchangam.panchangam;
    println!(
        "Tithi: {} {} ({}), Nakshatra: {} pada {}, Yoga: {}, Karana: {}, Vaar: {}",
        p.tithi.paksha.name(),
        p.tithi.tithi.name(),
        p.tithi.tithi_index + 1,
        p.nakshatra.nakshatra.name(),
        p.nakshatra.pada,
        p.yoga.yoga.name(),
        p.karana.karana.name(),
        chart.panchangam.vaar.name()
    );
}

fn print_current(current: &CurrentDasha) {
    match current {
        CurrentDasha::Active {
            query,
            mahadasha,
            bhukti,
            pratyantar,
        } => {
            let chain: Vec<&str> = [Some(mahadasha), bhukti.as_ref(), pratyantar.as_ref()]
                .into_iter()
                .flatten()
                .map(|p| p.lord.name())
                .collect();
            println!("Current at JD {:.4}: {}", query.jd, chain.join(" / "));
        }
        CurrentDasha::OutOfRange {
            query,
            horizon_start,
            horizon_end,
        } => {
            println!(
                "JD {:.4} is outside the dasha horizon [{:.4}, {:.4})",
                query.jd, horizon_start.jd, horizon_end.jd
            );
        }
    }
}

fn print_match(result: &CompatibilityResult) {
    println!(
        "{} ({}) with {} ({})",
        result.nakshatra_a.name(),
        result.rashi_a.name(),
        result.nakshatra_b.name(),
        result.rashi_b.name()
    );
    for c in &result.checks {
        println!(
            "  {:<16} {}",
            c.porutham.name(),
            if c.passed { "pass" } else { "-" }
        );
    }
    println!(
        "Score {}/{}: {}",
        result.score,
        result.max_score,
        result.verdict.label()
    );
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let config = load_config(&cli)?;
    let provider = provider_for(cli.backend);
    let provider: &dyn PositionProvider = provider.as_ref();
    debug!("using {} backend", provider.name());

    match &cli.command {
        Commands::Chart(args) => {
            let moment = birth_from(&args.birth)?;
            let mut request = match &args.place {
                Some(place) => ChartRequest::place(place.as_str(), moment),
                None => ChartRequest::birth(moment),
            };
            if let Some(at) = &args.as_of {
                request = request.with_as_of(parse_utc(at)?);
            }
            let chart = generate_chart(provider, &request, &config)?;
            if cli.json {
                emit_json(&chart)?;
            } else {
                print_chart(&chart);
            }
        }

        Commands::Mahadashas(args) => {
            let sequence = mahadasha_sequence(provider, &birth_from(args)?, &config)?;
            if cli.json {
                emit_json(&sequence)?;
            } else {
                print_placeholder_note(sequence.placeholder_data);
                print_periods(&sequence.mahadashas, 0);
            }
        }

        Commands::Bhuktis(args) => {
            let list = bhuktis(provider, &birth_from(&args.birth)?, args.index, &config)?;
            if cli.json {
                emit_json(&list)?;
            } else {
                print_placeholder_note(list.placeholder_data);
                print_bhuktis(&list);
            }
        }

        Commands::Current(args) => {
            let target = args.at.as_deref().map(parse_utc).transpose()?;
            let current = current_dasha(provider, &birth_from(&args.birth)?, target, &config)?;
            if cli.json {
                emit_json(&current)?;
            } else {
                print_placeholder_note(current.placeholder_data);
                print_current(&current.current);
            }
        }

        Commands::Match(args) => {
            let a = MatchSubject::Birth(birth_moment(&args.date_a, args.tz_a, 0.0, 0.0)?);
            let b = MatchSubject::Birth(birth_moment(&args.date_b, args.tz_b, 0.0, 0.0)?);
            let response = match_charts(provider, &a, &b, &config)?;
            if cli.json {
                emit_json(&response)?;
            } else {
                print_placeholder_note(response.placeholder_data);
                print_match(&response.result);
            }
        }

        Commands::Navamsa { lon } => {
            if !lon.is_finite() {
                bail!("longitude must be finite");
            }
            let d9 = navamsa_position(*lon)?;
            if cli.json {
                emit_json(&d9)?;
            } else {
                println!(
                    "{} -> {} (navamsa {} of 9, {:.4} deg)",
                    d9.source_sign.name(),
                    d9.navamsa_sign.name(),
                    d9.navamsa_index + 1,
                    d9.navamsa_degree
                );
            }
        }

        Commands::Panchang(args) => {
            let request = ChartRequest::birth(birth_from(args)?);
            let chart = generate_chart(provider, &request, &config)?;
            if cli.json {
                emit_json(&chart.panchangam)?;
            } else {
                print_placeholder_note(chart.placeholder_data);
                print_panchang(&chart);
            }
        }
    }

    Ok(())
}
