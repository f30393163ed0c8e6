use anyhow::Result;
use devteam_defaults::utils::error::exit_status;
use devteam_defaults::{AppError, DefaultStrategy, InMemorySource, Showcase};
use mongodb::bson::{doc, Bson};

const RECORD_ID: &str = "663c385af3dad2d0510a7216";

async fn run_to_lines(showcase: &Showcase<InMemorySource>) -> Result<Vec<String>> {
    let mut out = Vec::<u8>::new();
    showcase.run(&mut out).await?;
    let text = String::from_utf8(out)?;
    Ok(text.lines().map(str::to_string).collect())
}

#[tokio::test]
async fn test_missing_dev_team_prints_empty_list_three_times() -> Result<()> {
    let source = InMemorySource::new().with_document(doc! { "_id": RECORD_ID })?;
    let showcase = Showcase::new(source, RECORD_ID);

    let lines = run_to_lines(&showcase).await?;

    assert_eq!(lines.len(), 3);
    for line in &lines {
        assert_eq!(line, r#"{"_id":"663c385af3dad2d0510a7216","devTeam":[]}"#);
    }
    Ok(())
}

#[tokio::test]
async fn test_null_dev_team_prints_empty_list() -> Result<()> {
    let source = InMemorySource::new()
        .with_document(doc! { "_id": RECORD_ID, "devTeam": Bson::Null })?;
    let showcase = Showcase::new(source, RECORD_ID);

    for line in run_to_lines(&showcase).await? {
        let value: serde_json::Value = serde_json::from_str(&line)?;
        assert_eq!(value["devTeam"], serde_json::json!([]));
    }
    Ok(())
}

#[tokio::test]
async fn test_populated_dev_team_is_preserved() -> Result<()> {
    let source = InMemorySource::new().with_document(doc! {
        "_id": RECORD_ID,
        "devTeam": ["devTeam1", "devTeam3", "devTeam2"],
        "budget": 1200,
    })?;
    let showcase = Showcase::new(source, RECORD_ID);

    let lines = run_to_lines(&showcase).await?;

    assert_eq!(lines.len(), 3);
    for line in &lines {
        assert_eq!(
            line,
            r#"{"_id":"663c385af3dad2d0510a7216","devTeam":["devTeam1","devTeam3","devTeam2"]}"#
        );
    }
    Ok(())
}

#[tokio::test]
async fn test_identifier_round_trips() -> Result<()> {
    let id = "team/ünïcode \"quoted\"";
    let source = InMemorySource::new().with_document(doc! { "_id": id, "devTeam": ["a"] })?;
    let showcase = Showcase::new(source, id);

    for line in run_to_lines(&showcase).await? {
        let value: serde_json::Value = serde_json::from_str(&line)?;
        assert_eq!(value["_id"], id);
    }
    Ok(())
}

#[tokio::test]
async fn test_each_strategy_queries_once() -> Result<()> {
    let source = InMemorySource::new().with_document(doc! { "_id": RECORD_ID })?;
    let showcase = Showcase::new(source, RECORD_ID);

    let written = showcase.run(&mut Vec::<u8>::new()).await?;

    assert_eq!(written, 3);
    assert_eq!(showcase.source().queries(), 3);
    Ok(())
}

#[tokio::test]
async fn test_no_matching_document_returns_early() -> Result<()> {
    let source = InMemorySource::new().with_document(doc! { "_id": "someone-else" })?;
    let showcase = Showcase::new(source, RECORD_ID);

    let mut out = Vec::<u8>::new();
    let err = showcase.run(&mut out).await.unwrap_err();

    assert!(err.is_not_found());
    assert!(matches!(err, AppError::NotFound { ref id } if id == RECORD_ID));
    assert!(out.is_empty());
    assert_eq!(showcase.source().queries(), 1);
    Ok(())
}

#[tokio::test]
async fn test_decode_error_is_fatal_not_not_found() -> Result<()> {
    let source =
        InMemorySource::new().with_document(doc! { "_id": RECORD_ID, "devTeam": 42 })?;
    let showcase = Showcase::new(source, RECORD_ID);

    let err = showcase.run(&mut Vec::<u8>::new()).await.unwrap_err();

    assert!(!err.is_not_found());
    assert!(matches!(err, AppError::DecodeError(_)));
    assert_eq!(err.exit_code(), 1);
    Ok(())
}

#[tokio::test]
async fn test_selected_strategies_run_in_given_order() -> Result<()> {
    let source = InMemorySource::new().with_document(doc! { "_id": RECORD_ID })?;
    let showcase = Showcase::new(source, RECORD_ID)
        .with_strategies(vec![DefaultStrategy::PostDecode]);

    assert_eq!(showcase.strategies(), &[DefaultStrategy::PostDecode]);
    assert_eq!(run_to_lines(&showcase).await?.len(), 1);

    let source = InMemorySource::new().with_document(doc! { "_id": RECORD_ID })?;
    let showcase = Showcase::new(source, RECORD_ID).with_strategies(Vec::new());
    assert_eq!(showcase.strategies(), &DefaultStrategy::ALL);
    Ok(())
}

#[test]
fn test_fixture_without_string_id_is_rejected() {
    let err = InMemorySource::new()
        .with_document(doc! { "_id": 7 })
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidDocument { .. }));
    assert!(!err.is_config_error());
    assert_eq!(err.exit_code(), 1);
}

#[tokio::test]
async fn test_execute_prints_all_lines_and_disconnects() -> Result<()> {
    let source = InMemorySource::new()
        .with_document(doc! { "_id": RECORD_ID, "devTeam": ["devTeam1"] })?;
    let showcase = Showcase::new(source, RECORD_ID);

    let mut out = Vec::<u8>::new();
    let result = showcase.execute(&mut out).await;

    assert_eq!(exit_status(&result), 0);
    assert_eq!(result?, 3);
    assert_eq!(String::from_utf8(out)?.lines().count(), 3);
    assert!(showcase.source().is_disconnected());
    Ok(())
}

#[tokio::test]
async fn test_execute_not_found_exits_zero_with_no_output() -> Result<()> {
    let source = InMemorySource::new().with_document(doc! { "_id": "someone-else" })?;
    let showcase = Showcase::new(source, RECORD_ID);

    let mut out = Vec::<u8>::new();
    let result = showcase.execute(&mut out).await;

    assert!(matches!(result, Err(ref e) if e.is_not_found()));
    assert_eq!(exit_status(&result), 0);
    assert!(out.is_empty());
    assert!(showcase.source().is_disconnected());
    Ok(())
}

#[tokio::test]
async fn test_execute_decode_error_exits_one_and_still_disconnects() -> Result<()> {
    let source =
        InMemorySource::new().with_document(doc! { "_id": RECORD_ID, "devTeam": "ana" })?;
    let showcase = Showcase::new(source, RECORD_ID);

    let mut out = Vec::<u8>::new();
    let result = showcase.execute(&mut out).await;

    assert!(matches!(result, Err(AppError::DecodeError(_))));
    assert_eq!(exit_status(&result), 1);
    assert!(out.is_empty());
    assert!(showcase.source().is_disconnected());
    Ok(())
}

#[tokio::test]
async fn test_run_alone_leaves_source_connected() -> Result<()> {
    let source = InMemorySource::new().with_document(doc! { "_id": RECORD_ID })?;
    let showcase = Showcase::new(source, RECORD_ID);

    showcase.run(&mut Vec::<u8>::new()).await?;

    assert!(!showcase.source().is_disconnected());
    Ok(())
}
