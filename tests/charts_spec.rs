use launch_dash::charts::{
    filter_by_payload, outcome_counts, pie_figure, scatter_figure, site_success_rates,
};
use launch_dash::models::LaunchRecord;

// The worked scenario: two launches from A (one success, one failure), one
// success from B.
fn scenario_records() -> Vec<LaunchRecord> {
    vec![
        LaunchRecord::new("A", 100.0, "v1", 1),
        LaunchRecord::new("A", 200.0, "v1", 0),
        LaunchRecord::new("B", 100.0, "v2", 1),
    ]
}

fn labels(figure: &serde_json::Value) -> Vec<String> {
    figure["data"][0]["labels"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap().to_string())
        .collect()
}

fn values(figure: &serde_json::Value) -> Vec<f64> {
    figure["data"][0]["values"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_f64().unwrap())
        .collect()
}

mod pie {
    use super::*;

    #[test]
    fn all_sites_shows_success_rate_per_site() {
        let figure = pie_figure(&scenario_records(), "All");

        assert_eq!(labels(&figure), vec!["A", "B"]);
        assert_eq!(values(&figure), vec![0.5, 1.0]);
        assert_eq!(
            figure["layout"]["title"]["text"],
            "Success Rate for Different Sites"
        );
    }

    #[test]
    fn single_site_shows_outcome_counts() {
        let figure = pie_figure(&scenario_records(), "A");

        assert_eq!(labels(&figure), vec!["0", "1"]);
        assert_eq!(values(&figure), vec![1.0, 1.0]);
        assert_eq!(figure["layout"]["title"]["text"], "Success Rate for A");
    }

    #[test]
    fn zero_count_outcomes_produce_no_slice() {
        // B has one success and no failures
        let figure = pie_figure(&scenario_records(), "B");

        assert_eq!(labels(&figure), vec!["1"]);
        assert_eq!(values(&figure), vec![1.0]);
    }

    #[test]
    fn unknown_site_yields_an_empty_chart() {
        let figure = pie_figure(&scenario_records(), "no-such-site");

        assert!(labels(&figure).is_empty());
        assert!(values(&figure).is_empty());
    }

    #[test]
    fn site_slice_counts_sum_to_site_record_count() {
        let records = scenario_records();

        for site in ["A", "B"] {
            let total: usize = outcome_counts(&records, site)
                .iter()
                .map(|(_, count)| count)
                .sum();
            let expected = records.iter().filter(|r| r.launch_site == site).count();
            assert_eq!(total, expected);
        }
    }

    #[test]
    fn all_sites_rates_cover_every_record() {
        let records = scenario_records();

        // Each site's rate is computed over that site's full record count;
        // together the groups partition the table.
        let rates = site_success_rates(&records);
        let grouped: usize = rates
            .iter()
            .map(|(site, _)| records.iter().filter(|r| &r.launch_site == site).count())
            .sum();
        assert_eq!(grouped, records.len());
    }
}

mod scatter {
    use super::*;

    #[test]
    fn full_range_and_all_sites_keeps_every_record_once() {
        let records = scenario_records();

        let kept = filter_by_payload(&records, "All", 100.0, 200.0);
        assert_eq!(kept.len(), records.len());
    }

    #[test]
    fn narrowing_the_range_never_adds_points() {
        let records = scenario_records();

        let full = filter_by_payload(&records, "All", 100.0, 200.0).len();
        let narrower = filter_by_payload(&records, "All", 120.0, 200.0).len();
        let narrowest = filter_by_payload(&records, "All", 120.0, 180.0).len();

        assert!(narrower <= full);
        assert!(narrowest <= narrower);
    }

    #[test]
    fn range_endpoints_are_inclusive() {
        let records = scenario_records();

        let kept = filter_by_payload(&records, "All", 100.0, 100.0);
        assert_eq!(kept.len(), 2);
        assert!(kept.iter().all(|r| r.payload_mass == 100.0));
    }

    #[test]
    fn scenario_range_selects_the_single_matching_record() {
        let figure = scatter_figure(&scenario_records(), "All", 150.0, 200.0);

        let traces = figure["data"].as_array().unwrap();
        assert_eq!(traces.len(), 1);
        assert_eq!(traces[0]["name"], "v1");
        assert_eq!(traces[0]["x"], serde_json::json!([200.0]));
        assert_eq!(traces[0]["y"], serde_json::json!([0]));
    }

    #[test]
    fn one_trace_per_booster_category() {
        let figure = scatter_figure(&scenario_records(), "All", 100.0, 200.0);

        let names: Vec<&str> = figure["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["v1", "v2"]);
    }

    #[test]
    fn site_filter_restricts_points() {
        let figure = scatter_figure(&scenario_records(), "B", 100.0, 200.0);

        let traces = figure["data"].as_array().unwrap();
        assert_eq!(traces.len(), 1);
        assert_eq!(traces[0]["name"], "v2");
        assert_eq!(traces[0]["x"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn empty_filter_result_is_an_empty_plot() {
        let figure = scatter_figure(&scenario_records(), "All", 300.0, 400.0);

        assert!(figure["data"].as_array().unwrap().is_empty());
    }

    #[test]
    fn titles_follow_the_selected_site() {
        let all = scatter_figure(&scenario_records(), "All", 100.0, 200.0);
        assert_eq!(
            all["layout"]["title"]["text"],
            "Success Rate for Different Booster"
        );

        let single = scatter_figure(&scenario_records(), "A", 150.0, 200.0);
        assert_eq!(
            single["layout"]["title"]["text"],
            "Success Rate for Different Booster between 150 and 200 kg"
        );
    }
}
