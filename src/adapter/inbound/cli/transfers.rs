//! Handler for the `transfers` command.

use std::sync::Arc;

use serde_json::json;
use tabled::{Table, Tabled};

use crate::domain::transfer::{ReportStatus, TransferReport, UnavailableReason};
use crate::error::Result;
use crate::infrastructure::bootstrap;
use crate::infrastructure::config::settings::Config;

#[derive(Tabled)]
struct TransferRow {
    #[tabled(rename = "Wallet")]
    wallet: String,
    #[tabled(rename = "Dir")]
    direction: &'static str,
    #[tabled(rename = "ETH")]
    value: String,
    #[tabled(rename = "Counterparty")]
    counterparty: String,
    #[tabled(rename = "Tx")]
    tx: String,
}

/// Run one aggregation round and print the result.
pub async fn execute(config: &Config, json_output: bool) -> Result<()> {
    let catalog = Arc::new(config.catalog()?);
    let aggregator = bootstrap::build_aggregator(config, catalog)?;
    let report = aggregator.recent_transfers().await;
    let limit = aggregator.config().max_display;

    if json_output {
        println!("{}", report_json(&report, limit));
    } else {
        println!("{}", report_text(&report, limit));
    }
    Ok(())
}

fn status_line(report: &TransferReport) -> String {
    match report.status {
        ReportStatus::Complete => format!("{} wallets queried", report.sampled),
        ReportStatus::Partial { failed } => {
            format!("{failed} of {} wallets failed, results are partial", report.sampled)
        }
        ReportStatus::Unavailable(UnavailableReason::ConfigurationMissing) => {
            "ETHERSCAN_API_KEY is not set".to_string()
        }
        ReportStatus::Unavailable(UnavailableReason::NoData) => {
            format!("all {} wallet queries failed", report.sampled)
        }
    }
}

fn report_text(report: &TransferReport, limit: usize) -> String {
    if report.events.is_empty() {
        return format!("No transfers to show ({})", status_line(report));
    }
    let rows: Vec<TransferRow> = report
        .events
        .iter()
        .take(limit)
        .map(|event| TransferRow {
            wallet: event.wallet_label.clone(),
            direction: event.direction.as_str(),
            value: format!("{:.2}", event.value_eth.round_dp(2)),
            counterparty: event.counterparty.clone(),
            tx: event.tx_hash_prefix.clone(),
        })
        .collect();
    let hidden = report.events.len().saturating_sub(limit);
    if hidden > 0 {
        format!(
            "{}\n{}, {hidden} more not shown",
            Table::new(rows),
            status_line(report)
        )
    } else {
        format!("{}\n{}", Table::new(rows), status_line(report))
    }
}

fn report_json(report: &TransferReport, limit: usize) -> serde_json::Value {
    let (status, failed) = match report.status {
        ReportStatus::Complete => ("complete", 0),
        ReportStatus::Partial { failed } => ("partial", failed),
        ReportStatus::Unavailable(UnavailableReason::ConfigurationMissing) => {
            ("configuration_missing", 0)
        }
        ReportStatus::Unavailable(UnavailableReason::NoData) => ("no_data", report.sampled),
    };
    let events: Vec<_> = report
        .events
        .iter()
        .take(limit)
        .map(|event| {
            json!({
                "wallet": event.wallet_label,
                "direction": event.direction.as_str(),
                "value_eth": event.value_eth.to_string(),
                "counterparty": event.counterparty,
                "tx": event.tx_hash_prefix,
            })
        })
        .collect();
    json!({
        "command": "transfers",
        "status": status,
        "sampled": report.sampled,
        "failed": failed,
        "fetched_at": report.fetched_at.to_rfc3339(),
        "total_events": report.events.len(),
        "events": events,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::transfer::{Direction, TransferEvent};
    use rust_decimal_macros::dec;

    fn partial_report() -> TransferReport {
        TransferReport {
            status: ReportStatus::Partial { failed: 1 },
            events: vec![TransferEvent {
                wallet_label: "Kraken".to_string(),
                tx_hash_prefix: "0xfeed0000…".to_string(),
                value_eth: dec!(1234.5),
                counterparty: "0x12345678…".to_string(),
                direction: Direction::In,
            }],
            sampled: 5,
            fetched_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn text_report_shows_rows_and_status() {
        let text = report_text(&partial_report(), 8);
        assert!(text.contains("Kraken"));
        assert!(text.contains("1234.50"));
        assert!(text.contains("1 of 5 wallets failed"));
    }

    #[test]
    fn unavailable_report_explains_why() {
        let report = TransferReport::unavailable(UnavailableReason::ConfigurationMissing, 5);
        assert!(report_text(&report, 8).contains("ETHERSCAN_API_KEY"));
        assert_eq!(report_json(&report, 8)["status"], "configuration_missing");
    }

    #[test]
    fn output_is_capped_to_display_limit() {
        let mut report = partial_report();
        let event = report.events[0].clone();
        report.events = vec![event; 3];

        let text = report_text(&report, 2);
        assert_eq!(text.matches("Kraken").count(), 2);
        assert!(text.contains("1 more not shown"));

        let json = report_json(&report, 2);
        assert_eq!(json["events"].as_array().map(Vec::len), Some(2));
        assert_eq!(json["total_events"], 3);
    }
}
