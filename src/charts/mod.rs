//! Figure builders for the two dashboard charts.
//!
//! Both builders are stateless pure functions of the record table and the
//! current control values, producing Plotly figure JSON
//! (`{"data": [...], "layout": {...}}`) the page hands straight to
//! `Plotly.react`. They are re-invoked on every control change; there is no
//! history and no memoization.

use serde_json::{json, Value};

use crate::models::{LaunchRecord, ALL_SITES};

/// Mean outcome per launch site, in first-seen site order.
pub fn site_success_rates(records: &[LaunchRecord]) -> Vec<(String, f64)> {
    // (site, successes, total); the site list is small, linear scan is fine
    let mut groups: Vec<(String, u32, u32)> = Vec::new();
    for record in records {
        match groups
            .iter_mut()
            .find(|(site, _, _)| *site == record.launch_site)
        {
            Some((_, successes, total)) => {
                *successes += u32::from(record.outcome);
                *total += 1;
            }
            None => groups.push((record.launch_site.clone(), u32::from(record.outcome), 1)),
        }
    }

    groups
        .into_iter()
        .map(|(site, successes, total)| (site, f64::from(successes) / f64::from(total)))
        .collect()
}

/// Outcome counts for a single site, failure (0) before success (1).
/// Zero-count outcomes are omitted, so an unknown site yields no rows.
pub fn outcome_counts(records: &[LaunchRecord], site: &str) -> Vec<(u8, usize)> {
    let mut failures = 0;
    let mut successes = 0;
    for record in records.iter().filter(|r| r.launch_site == site) {
        if record.outcome == 0 {
            failures += 1;
        } else {
            successes += 1;
        }
    }

    [(0, failures), (1, successes)]
        .into_iter()
        .filter(|(_, count)| *count > 0)
        .collect()
}

/// Records within the inclusive payload range, further restricted to `site`
/// unless it is the [`ALL_SITES`] sentinel.
pub fn filter_by_payload<'a>(
    records: &'a [LaunchRecord],
    site: &str,
    low: f64,
    high: f64,
) -> Vec<&'a LaunchRecord> {
    records
        .iter()
        .filter(|r| r.payload_mass >= low && r.payload_mass <= high)
        .filter(|r| site == ALL_SITES || r.launch_site == site)
        .collect()
}

/// Build the success-rate pie figure for the selected site.
///
/// For `"All"` the slices are per-site success rates; for a specific site
/// they are raw outcome counts. The asymmetry matches the original dashboard
/// behavior.
pub fn pie_figure(records: &[LaunchRecord], site: &str) -> Value {
    let (labels, values, title): (Vec<String>, Vec<f64>, String) = if site == ALL_SITES {
        let rates = site_success_rates(records);
        (
            rates.iter().map(|(s, _)| s.clone()).collect(),
            rates.iter().map(|(_, rate)| *rate).collect(),
            "Success Rate for Different Sites".to_string(),
        )
    } else {
        let counts = outcome_counts(records, site);
        (
            counts.iter().map(|(outcome, _)| outcome.to_string()).collect(),
            counts.iter().map(|(_, count)| *count as f64).collect(),
            format!("Success Rate for {site}"),
        )
    };

    json!({
        "data": [{
            "type": "pie",
            "labels": labels,
            "values": values,
        }],
        "layout": {
            "title": { "text": title },
        },
    })
}

/// Build the payload/outcome scatter figure, one marker trace per booster
/// version category in first-seen order.
pub fn scatter_figure(records: &[LaunchRecord], site: &str, low: f64, high: f64) -> Value {
    let filtered = filter_by_payload(records, site, low, high);

    let mut categories: Vec<&str> = Vec::new();
    for record in &filtered {
        if !categories.contains(&record.booster_version_category.as_str()) {
            categories.push(&record.booster_version_category);
        }
    }

    let traces: Vec<Value> = categories
        .iter()
        .map(|category| {
            let points: Vec<_> = filtered
                .iter()
                .filter(|r| r.booster_version_category == *category)
                .collect();
            json!({
                "type": "scatter",
                "mode": "markers",
                "name": category,
                "x": points.iter().map(|r| r.payload_mass).collect::<Vec<f64>>(),
                "y": points.iter().map(|r| r.outcome).collect::<Vec<u8>>(),
            })
        })
        .collect();

    let title = if site == ALL_SITES {
        "Success Rate for Different Booster".to_string()
    } else {
        format!("Success Rate for Different Booster between {low} and {high} kg")
    };

    json!({
        "data": traces,
        "layout": {
            "title": { "text": title },
            "xaxis": { "title": { "text": "Payload Mass (kg)" } },
            "yaxis": { "title": { "text": "class" } },
        },
    })
}
