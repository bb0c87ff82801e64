//! Parser console demo binary.
//!
//! Seeds the engine with sample data, prints statistics, a filtered view and
//! export previews, then runs the simulated parsing loop for a few seconds.

use std::error::Error;
use std::time::Duration;

use log::warn;
use parser_console::app::App;
use parser_console::logging;
use parser_console::managers::dns_manager::DnsManagerTrait;
use parser_console::managers::record_store::RecordStoreTrait;
use parser_console::services::aggregator::summarize;
use parser_console::services::query_engine;
use parser_console::services::settings_engine::SettingsEngineTrait;
use parser_console::types::export::ExportFormat;
use parser_console::types::query::Query;
use parser_console::types::record::Category;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let settings_path = std::env::temp_dir().join("parser_console_demo.json");
    if let Err(e) = logging::init_logger() {
        eprintln!("Logger not installed: {}", e);
    }
    let mut app = App::new(Some(settings_path.to_string_lossy().to_string()))?;
    logging::apply_level(&app.settings_engine.get_settings().logging.level);

    println!();
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║              Parser Console v{} - Demo Mode              ║", env!("CARGO_PKG_VERSION"));
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();

    app.seed_sample_data()?;

    demo_dashboard(&app);
    demo_summaries(&mut app);
    demo_filter(&app);
    demo_export(&app)?;
    demo_parsing(&mut app).await?;

    app.shutdown();
    if let Err(e) = std::fs::remove_file(&settings_path) {
        warn!("Could not remove demo settings {}: {}", settings_path.display(), e);
    }

    println!();
    println!("═══════════════════════════════════════════════════════════════");
    println!("  ✅ Demo finished");
    println!("═══════════════════════════════════════════════════════════════");
    Ok(())
}

fn section(name: &str) {
    println!("───────────────────────────────────────────────────────────────");
    println!("  📦 {}", name);
    println!("───────────────────────────────────────────────────────────────");
}

fn demo_dashboard(app: &App) {
    section("Dashboard");

    let stats = app.dashboard_stats();
    for share in &stats.shares {
        println!("  {:<16} {:>4}  {:>6.1}%", share.category.as_str(), share.count, share.percentage);
    }
    println!("  Total: {}", stats.total);
    println!();
}

fn demo_summaries(app: &mut App) {
    section("Category summaries");

    let emails = summarize(app.emails.list());
    println!(
        "  Emails: {} total, {} valid, {} verified, {} domains",
        emails.total, emails.valid_count, emails.verified_count, emails.unique_domains
    );

    let working = app.check_proxies();
    let proxies = summarize(app.proxy_manager.store().list());
    println!(
        "  Proxies: {} total, {} working ({} reported by check), avg {:.0} ms",
        proxies.total, proxies.working_count, working, proxies.avg_response_time_ms
    );

    let ids: Vec<String> = app.dns_manager.store().list().iter().map(|d| d.id.clone()).collect();
    for id in &ids {
        if let Err(e) = app.dns_manager.check_dns(id, &mut app.validator) {
            warn!("DNS check failed for {}: {}", id, e);
        }
    }
    let dns = summarize(app.dns_manager.store().list());
    println!(
        "  DNS: {} total, {} active, avg {:.0} ms, {:.1}% reliable",
        dns.total, dns.active_count, dns.avg_response_time_ms, dns.avg_reliability
    );
    println!();
}

fn demo_filter(app: &App) {
    section("Filter");

    let query = Query::new().search("example");
    let hits = query_engine::filter(app.emails.list(), &query);
    println!("  Emails matching \"example\": {}", hits.len());
    for email in &hits {
        println!("    • {} ({})", email.address, email.source);
    }

    let domains = query_engine::distinct_values(app.emails.list(), "domain");
    println!("  Domain filter options: {}", domains.join(", "));
    println!();
}

fn demo_export(app: &App) -> Result<(), Box<dyn Error>> {
    section("Export");

    for format in [ExportFormat::Json, ExportFormat::Delimited, ExportFormat::Markup] {
        let payload = app.export_category(Category::Email, format)?;
        println!("  {} ({}, {} bytes)", payload.filename, payload.mime_type, payload.content.len());
        for line in payload.content.lines().take(4) {
            println!("    {}", line);
        }
    }
    println!();
    Ok(())
}

async fn demo_parsing(app: &mut App) -> Result<(), Box<dyn Error>> {
    section("Parsing loop");

    app.settings_engine
        .set_value("generator.interval_secs", serde_json::json!(1))?;
    app.start_parsing()?;
    println!("  Running: {}", app.is_parsing());

    tokio::time::sleep(Duration::from_millis(3500)).await;
    app.stop_parsing();

    let parsing = app.parsing_stats();
    let database = app.database_stats();
    println!(
        "  Sites: {}/{} active, {} successful, {} failed",
        parsing.active_sites, parsing.total_sites, parsing.successful_parsing, parsing.failed_parsing
    );
    println!(
        "  Parsed records: {}, storage used: {} bytes",
        database.total_records, database.storage_used
    );
    for (field, count) in &database.records_by_type {
        println!("    {}: {}", field, count);
    }
    println!("  Running: {}", app.is_parsing());
    println!();
    Ok(())
}
