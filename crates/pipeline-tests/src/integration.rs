#[cfg(test)]
mod tests {
    use crate::{
        TREES_INDEX, WEATHER_INDEX,
        utils::{MemoryStore, Request, numbers, strings, tree_docs, weather_docs},
    };
    use chrono::{TimeZone, Utc};
    use connectors::{
        error::{Operation, TransportError},
        search::{ScrollOptions, SearchSource, Session},
    };
    use model::{core::value::Value, error::ConfigurationError};
    use processing::{
        normalize::normalize,
        schema::{Schema, presets::Preset},
        summary,
    };
    use tracing_test::traced_test;

    // Scenario: 250 weather observations scrolled with pages of 100.
    // Expected Outcome:
    // - One opening search plus three continuations, the last one empty.
    // - Each continuation carries the handle of the page before it.
    // - Every document arrives exactly once, in store order.
    #[traced_test]
    #[test]
    fn tc01_scroll_whole_index() {
        let store = MemoryStore::new(WEATHER_INDEX, weather_docs(250));
        let source = SearchSource::new(&store, WEATHER_INDEX).unwrap();

        let result = source
            .fetch_all(ScrollOptions::with_page_size(100))
            .unwrap();

        assert!(result.is_complete());
        assert_eq!(result.row_count, 250);
        assert_eq!(result.requests, 4);
        assert_eq!(
            store.requests(),
            vec![
                Request::OpenScroll {
                    index: WEATHER_INDEX.into(),
                    size: 100
                },
                Request::Scroll {
                    token: "FGluY2x1ZGVfY29udGV4dF91dWlk0000".into()
                },
                Request::Scroll {
                    token: "FGluY2x1ZGVfY29udGV4dF91dWlk0001".into()
                },
                Request::Scroll {
                    token: "FGluY2x1ZGVfY29udGV4dF91dWlk0002".into()
                },
            ]
        );

        let times: Vec<String> = result
            .rows
            .iter()
            .take(3)
            .map(|row| row.get("current_date_time").unwrap().to_string())
            .collect();
        assert_eq!(
            times,
            vec![
                "\"2024-05-01T00:00:00Z\"",
                "\"2024-05-01T00:30:00Z\"",
                "\"2024-05-01T01:00:00Z\""
            ]
        );
        assert!(logs_contain("Fetched 250 documents"));
    }

    // Scenario: a 1000-document page size over 250 documents.
    // Expected Outcome: the opening page holds everything; the first
    // continuation comes back empty and ends the walk after 2 requests.
    #[test]
    fn tc02_single_page_scroll() {
        let store = MemoryStore::new(WEATHER_INDEX, weather_docs(250));
        let source = SearchSource::new(&store, WEATHER_INDEX).unwrap();

        let result = source.fetch_all(ScrollOptions::default()).unwrap();
        assert_eq!(result.row_count, 250);
        assert_eq!(result.requests, 2);
    }

    // Scenario: the store becomes unreachable after 2 of 5 pages.
    // Expected Outcome:
    // - The 200 documents already received are returned.
    // - The failure names the scroll continuation and is not raised.
    #[traced_test]
    #[test]
    fn tc03_store_lost_mid_scroll() {
        let store = MemoryStore::new(WEATHER_INDEX, weather_docs(500)).failing_from(3);
        let source = SearchSource::new(&store, WEATHER_INDEX).unwrap();

        let result = source
            .fetch_all(ScrollOptions::with_page_size(100))
            .unwrap();

        assert!(!result.is_complete());
        assert_eq!(result.row_count, 200);
        assert_eq!(result.requests, 3);
        let failure = result.failure.unwrap();
        assert_eq!(failure.operation(), &Operation::Scroll);
        assert!(matches!(failure, TransportError::Network { .. }));
        assert!(logs_contain("after 200 documents"));
    }

    // Scenario: the index does not exist.
    // Expected Outcome: an empty result carrying the HTTP 404, one request.
    #[test]
    fn tc04_unknown_index() {
        let store = MemoryStore::new(WEATHER_INDEX, weather_docs(10));
        let source = SearchSource::new(&store, "melbourne_weather_v2").unwrap();

        let result = source.fetch_all(ScrollOptions::default()).unwrap();
        assert!(result.is_empty());
        assert_eq!(result.requests, 1);
        assert_eq!(result.failure.unwrap().status(), Some(404));

        let page = source.fetch_page(10, 0).unwrap();
        assert!(page.is_empty());
        assert_eq!(page.failure.unwrap().status(), Some(404));
    }

    // Scenario: page size zero for either access path.
    // Expected Outcome: a configuration error before any request is made.
    #[test]
    fn tc05_zero_page_size() {
        let store = MemoryStore::new(WEATHER_INDEX, weather_docs(10));
        let source = SearchSource::new(&store, WEATHER_INDEX).unwrap();

        assert_eq!(
            source.fetch_page(0, 0).unwrap_err(),
            ConfigurationError::InvalidPageSize(0)
        );
        assert_eq!(
            source
                .fetch_all(ScrollOptions::with_page_size(0))
                .unwrap_err(),
            ConfigurationError::InvalidPageSize(0)
        );
        assert_eq!(store.request_count(), 0);
    }

    // Scenario: a session pages through 250 documents 100 at a time.
    // Expected Outcome:
    // - Offsets advance 0, 100, 200; the short third page marks the end.
    // - A further step past the end returns nothing and changes nothing.
    #[test]
    fn tc06_session_paging() {
        let store = MemoryStore::new(WEATHER_INDEX, weather_docs(250));
        let source = SearchSource::new(&store, WEATHER_INDEX).unwrap();
        let mut session = Session::new();

        let returned: Vec<(usize, bool)> = (0..3)
            .map(|_| {
                let outcome = session.fetch_next(&source, 100).unwrap();
                assert!(outcome.failure.is_none());
                (outcome.returned, outcome.reached_end)
            })
            .collect();
        assert_eq!(returned, vec![(100, false), (100, false), (50, true)]);
        assert_eq!(session.offset(), 250);
        assert_eq!(session.records().len(), 250);

        let past_end = session.fetch_next(&source, 100).unwrap();
        assert_eq!(past_end.returned, 0);
        assert!(past_end.reached_end);
        assert_eq!(session.offset(), 250);

        let offsets: Vec<usize> = store
            .requests()
            .into_iter()
            .filter_map(|r| match r {
                Request::Page { from, .. } => Some(from),
                _ => None,
            })
            .collect();
        assert_eq!(offsets, vec![0, 100, 200, 250]);
    }

    // Scenario: the store goes away on the second session step.
    // Expected Outcome: the failed step leaves offset and records untouched.
    #[test]
    fn tc07_session_step_failure_keeps_state() {
        let store = MemoryStore::new(WEATHER_INDEX, weather_docs(250)).failing_from(2);
        let source = SearchSource::new(&store, WEATHER_INDEX).unwrap();
        let mut session = Session::new();

        session.fetch_next(&source, 100).unwrap();
        let outcome = session.fetch_next(&source, 100).unwrap();

        assert!(outcome.failure.is_some());
        assert_eq!(outcome.returned, 0);
        assert_eq!(session.offset(), 100);
        assert_eq!(session.records().len(), 100);
    }

    // Scenario: weather observations scrolled, normalized with the weather
    // preset, then summarized.
    // Expected Outcome:
    // - Rows without a station (every fifth) are dropped: 200 remain.
    // - Interpolation closes the interior temperature and rain gaps.
    // - Columns absent from every document stay missing; strings become "nan".
    // - Group means cover the three stations in name order.
    #[traced_test]
    #[test]
    fn tc08_weather_pipeline() {
        let store = MemoryStore::new(WEATHER_INDEX, weather_docs(250));
        let source = SearchSource::new(&store, WEATHER_INDEX).unwrap();
        let mut session = Session::new();
        session
            .load_all(&source, ScrollOptions::with_page_size(100))
            .unwrap();

        let schema = Preset::Weather.schema().unwrap();
        let table = normalize(session.records(), &schema);

        assert_eq!(table.row_count(), 200);
        assert_eq!(
            table.column("current_date_time").unwrap().values[0],
            Value::Timestamp(Utc.with_ymd_and_hms(2024, 5, 1, 0, 30, 0).unwrap())
        );
        assert!(!strings(&table, "station").contains(&"nan".to_string()));
        assert!(numbers(&table, "temp").iter().all(Option::is_some));
        assert!(numbers(&table, "rain").iter().all(Option::is_some));
        assert!(numbers(&table, "app_temp").iter().all(Option::is_none));
        assert!(strings(&table, "high_wind_gust_dir").iter().all(|s| s == "nan"));
        assert!(logs_contain("Dropped 50 rows where 'station' is 'nan'"));

        let description = summary::describe(&table, &["temp", "wind_spd"]).unwrap();
        assert_eq!(description.0[0].count, 200);
        assert_eq!(description.0[1].min, Some(5.0));
        assert_eq!(description.0[1].max, Some(8.0));

        let groups = summary::group_mean(&table, "station", "rain").unwrap();
        let keys: Vec<&str> = groups.iter().map(|g| g.key.as_str()).collect();
        assert_eq!(keys, vec!["Essendon Airport", "Moorabbin", "Olympic Park"]);
        assert_eq!(groups.iter().map(|g| g.count).sum::<usize>(), 200);

        let info = summary::info(&table);
        assert_eq!(info.rows, 200);
        assert_eq!(info.columns.len(), 18);
    }

    // Scenario: tree inventory normalized with the tree preset.
    // Expected Outcome:
    // - String-typed numbers are parsed; "n/a" becomes missing.
    // - dbh is back-filled, northing mean-filled, height left with gaps.
    // - Fields outside the schema are not carried over.
    #[test]
    fn tc09_tree_pipeline() {
        let store = MemoryStore::new(TREES_INDEX, tree_docs());
        let source = SearchSource::new(&store, Preset::Tree.default_index()).unwrap();

        let result = source.fetch_page(100, 0).unwrap();
        assert_eq!(result.row_count, 3);

        let table = normalize(&result.rows, &Preset::Tree.schema().unwrap());
        assert_eq!(table.row_count(), 3);
        assert_eq!(
            numbers(&table, "latitude"),
            vec![Some(-37.8101), Some(-37.815), None]
        );
        assert_eq!(
            numbers(&table, "dbh"),
            vec![Some(85.0), Some(85.0), Some(120.0)]
        );
        assert_eq!(
            numbers(&table, "northing"),
            vec![Some(5810200.5), Some(5810250.5), Some(5810300.5)]
        );
        assert_eq!(numbers(&table, "height"), vec![Some(18.0), None, None]);
        assert_eq!(strings(&table, "status"), vec!["Active", "Active", "nan"]);
        assert!(table.column("geo.lat").is_none());
    }

    // Scenario: a JSON schema file replacing a preset, with a custom row
    // filter on the genus column.
    // Expected Outcome: rows whose genus is missing are dropped.
    #[test]
    fn tc10_schema_from_json() {
        let raw = r#"{
            "name": "trees",
            "columns": [
                { "name": "genus_spec", "type": "string" },
                { "name": "dbh", "type": "numeric", "fill": "ffill" }
            ],
            "drop_rows": { "column": "genus_spec" }
        }"#;
        let schema = Schema::from_json(raw).unwrap();

        let mut docs = tree_docs();
        docs.push(serde_json::json!({ "dbh": 10 }));
        let store = MemoryStore::new(TREES_INDEX, docs);
        let source = SearchSource::new(&store, TREES_INDEX).unwrap();
        let result = source.fetch_all(ScrollOptions::default()).unwrap();

        let table = normalize(&result.rows, &schema);
        assert_eq!(table.row_count(), 3);
        assert_eq!(numbers(&table, "dbh"), vec![None, Some(85.0), Some(120.0)]);
    }

    // Scenario: a partial scroll still feeds normalization.
    // Expected Outcome: the session keeps the partial rows and a later
    // load_all does not refetch.
    #[test]
    fn tc11_partial_load_is_kept() {
        let store = MemoryStore::new(WEATHER_INDEX, weather_docs(300)).failing_from(2);
        let source = SearchSource::new(&store, WEATHER_INDEX).unwrap();
        let mut session = Session::new();

        let outcome = session
            .load_all(&source, ScrollOptions::with_page_size(100))
            .unwrap();
        assert_eq!(outcome.returned, 100);
        assert!(outcome.failure.is_some());

        let again = session
            .load_all(&source, ScrollOptions::with_page_size(100))
            .unwrap();
        assert_eq!(again.returned, 0);
        assert_eq!(store.request_count(), 2);

        let table = normalize(session.records(), &Preset::Weather.schema().unwrap());
        assert_eq!(table.row_count(), 80);
    }
}
