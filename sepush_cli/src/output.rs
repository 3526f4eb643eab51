use anyhow::Result;
use sepush_api::types::{AllowanceResponse, AreaInformation, AreaSummary, StatusResponse, Topic};
use serde::Serialize;
use tabled::{Table, Tabled};

#[derive(Clone, Debug, PartialEq)]
pub enum OutputFormat {
    Table,
    Json,
}

impl OutputFormat {
    /// Anything other than `json` renders a table.
    pub fn from_arg(value: &str) -> Self {
        match value {
            "json" => OutputFormat::Json,
            _ => OutputFormat::Table,
        }
    }
}

#[derive(Tabled)]
struct AllowanceRow {
    #[tabled(rename = "Used")]
    count: i64,
    #[tabled(rename = "Limit")]
    limit: i64,
    #[tabled(rename = "Remaining")]
    remaining: i64,
    #[tabled(rename = "Window")]
    window: String,
}

#[derive(Tabled)]
struct ProviderRow {
    #[tabled(rename = "Provider")]
    name: String,
    #[tabled(rename = "Stage")]
    stage: String,
    #[tabled(rename = "Updated")]
    updated: String,
    #[tabled(rename = "Next")]
    next: String,
}

#[derive(Tabled)]
struct AreaRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Region")]
    region: String,
}

#[derive(Tabled)]
struct EventRow {
    #[tabled(rename = "Start")]
    start: String,
    #[tabled(rename = "End")]
    end: String,
    #[tabled(rename = "Note")]
    note: String,
}

#[derive(Tabled)]
struct TopicRow {
    #[tabled(rename = "Posted")]
    timestamp: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Km")]
    distance: String,
    #[tabled(rename = "Followers")]
    followers: i64,
    #[tabled(rename = "Post")]
    body: String,
}

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

fn build_allowance_rows(resp: &AllowanceResponse) -> Vec<AllowanceRow> {
    vec![AllowanceRow {
        count: resp.allowance.count,
        limit: resp.allowance.limit,
        remaining: resp.allowance.remaining(),
        window: resp.allowance.allowance_type.clone(),
    }]
}

fn build_provider_rows(resp: &StatusResponse) -> Vec<ProviderRow> {
    resp.status
        .values()
        .map(|p| ProviderRow {
            name: p.name.clone(),
            stage: p.stage.clone(),
            updated: p
                .stage_updated
                .map(|t| t.format(TIME_FORMAT).to_string())
                .unwrap_or_default(),
            next: p
                .next_stages
                .first()
                .map(|n| {
                    format!(
                        "stage {} at {}",
                        n.stage,
                        n.stage_start_timestamp.format(TIME_FORMAT)
                    )
                })
                .unwrap_or_else(|| "-".to_string()),
        })
        .collect()
}

fn build_area_rows(areas: &[AreaSummary]) -> Vec<AreaRow> {
    areas
        .iter()
        .map(|a| AreaRow {
            id: a.id.clone(),
            name: a.name.clone(),
            region: a.region.clone().unwrap_or_default(),
        })
        .collect()
}

fn build_event_rows(info: &AreaInformation) -> Vec<EventRow> {
    info.events
        .iter()
        .map(|e| EventRow {
            start: e.start.format(TIME_FORMAT).to_string(),
            end: e.end.format(TIME_FORMAT).to_string(),
            note: e.note.clone(),
        })
        .collect()
}

fn build_topic_rows(topics: &[Topic]) -> Vec<TopicRow> {
    topics
        .iter()
        .map(|t| TopicRow {
            timestamp: t.timestamp.format(TIME_FORMAT).to_string(),
            category: t.category.clone(),
            distance: format!("{:.1}", t.distance),
            followers: t.followers,
            body: truncate(&t.body, 60),
        })
        .collect()
}

pub fn print_allowance_table(resp: &AllowanceResponse) {
    println!("{}", Table::new(build_allowance_rows(resp)));
}

pub fn print_status_table(resp: &StatusResponse) {
    println!("{}", Table::new(build_provider_rows(resp)));
}

pub fn print_areas_table(areas: &[AreaSummary]) {
    println!("{}", Table::new(build_area_rows(areas)));
}

pub fn print_area_table(info: &AreaInformation) {
    println!("{} ({})", info.info.name, info.info.region);
    if info.events.is_empty() {
        println!("No upcoming events");
    } else {
        println!("{}", Table::new(build_event_rows(info)));
    }
}

pub fn print_topics_table(topics: &[Topic]) {
    println!("{}", Table::new(build_topic_rows(topics)));
}

pub fn print_json<T: Serialize>(data: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(data)?);
    Ok(())
}

fn truncate(text: &str, max_chars: usize) -> String {
    let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= max_chars {
        flat
    } else {
        let cut: String = flat.chars().take(max_chars).collect();
        format!("{}...", cut)
    }
}
