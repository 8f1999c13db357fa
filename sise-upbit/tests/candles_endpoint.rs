use chrono::{NaiveDate, TimeZone, Utc};
use httpmock::prelude::*;
use rust_decimal::Decimal;
use sise_core::connector::{CandleProvider, PriceProvider, SiseConnector, TickerProvider};
use sise_core::{Interval, SiseError};
use sise_upbit::UpbitConnector;
use url::Url;

fn connector_for(server: &MockServer) -> UpbitConnector {
    UpbitConnector::builder()
        .base_url(Url::parse(&server.base_url()).unwrap())
        .build()
}

const CANDLES_BODY: &str = r#"[
  {
    "market": "KRW-BTC",
    "candle_date_time_utc": "2025-03-02T09:00:00",
    "candle_date_time_kst": "2025-03-02T18:00:00",
    "opening_price": 100.5,
    "high_price": 101.0,
    "low_price": 99.5,
    "trade_price": 100.75,
    "candle_acc_trade_price": 5000.0,
    "candle_acc_trade_volume": 49.5,
    "unit": 5
  },
  {
    "market": "KRW-BTC",
    "candle_date_time_utc": "2025-03-02T08:55:00",
    "candle_date_time_kst": "2025-03-02T17:55:00",
    "opening_price": 99.0,
    "high_price": 100.5,
    "low_price": 98.5,
    "trade_price": 100.5,
    "candle_acc_trade_price": 4000.0,
    "candle_acc_trade_volume": 40.0,
    "unit": 5
  }
]"#;

#[tokio::test]
async fn maps_and_sorts_candles_ascending() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v1/candles/minutes/5")
            .query_param("market", "KRW-BTC")
            .query_param("count", "2")
            // Wire anchor is shifted one interval past the requested `to`
            // because the venue treats it as exclusive.
            .query_param("to", "2025-03-02T09:05:00Z");
        then.status(200)
            .header("content-type", "application/json")
            .body(CANDLES_BODY);
    });

    let connector = connector_for(&server);
    let to = Utc.with_ymd_and_hms(2025, 3, 2, 9, 0, 0).unwrap();
    let candles = connector
        .candles("KRW-BTC", Interval::M5, 2, to)
        .await
        .unwrap();

    mock.assert();
    assert_eq!(candles.len(), 2);
    // Newest-first wire order arrives ascending.
    assert_eq!(
        candles[0].ts,
        NaiveDate::from_ymd_opt(2025, 3, 2)
            .unwrap()
            .and_hms_opt(17, 55, 0)
            .unwrap()
    );
    assert_eq!(candles[1].open, Decimal::new(1005, 1));
    assert_eq!(candles[1].close, Decimal::new(10075, 2));
    assert_eq!(candles[1].volume, Decimal::new(495, 1));
    assert_eq!(candles[1].value, Some(Decimal::from(5000)));
}

#[tokio::test]
async fn empty_page_is_ok_not_an_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/v1/candles/minutes/1");
        then.status(200)
            .header("content-type", "application/json")
            .body("[]");
    });

    let connector = connector_for(&server);
    let to = Utc.with_ymd_and_hms(2025, 3, 2, 9, 0, 0).unwrap();
    let candles = connector
        .candles("KRW-NOPE", Interval::M1, 10, to)
        .await
        .unwrap();
    assert!(candles.is_empty());
}

#[tokio::test]
async fn not_found_status_maps_to_typed_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/v1/candles/minutes/5");
        then.status(404);
    });

    let connector = connector_for(&server);
    let to = Utc.with_ymd_and_hms(2025, 3, 2, 9, 0, 0).unwrap();
    let err = connector
        .candles("KRW-BTC", Interval::M5, 1, to)
        .await
        .unwrap_err();
    assert!(matches!(err, SiseError::NotFound { .. }), "got {err:?}");
}

#[tokio::test]
async fn server_error_is_tagged_with_connector_name() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/v1/candles/minutes/5");
        then.status(500);
    });

    let connector = connector_for(&server);
    let to = Utc.with_ymd_and_hms(2025, 3, 2, 9, 0, 0).unwrap();
    let err = connector
        .candles("KRW-BTC", Interval::M5, 1, to)
        .await
        .unwrap_err();
    match err {
        SiseError::Connector { connector, .. } => assert_eq!(connector, "sise-upbit"),
        other => panic!("expected Connector error, got {other:?}"),
    }
}

#[tokio::test]
async fn current_price_reads_ticker_snapshot() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET)
            .path("/v1/ticker")
            .query_param("markets", "KRW-BTC");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"[{"market":"KRW-BTC","trade_price":137000000.0}]"#);
    });

    let connector = connector_for(&server);
    let price = connector.current_price("KRW-BTC").await.unwrap();
    assert_eq!(price, Decimal::from(137_000_000));
}

#[tokio::test]
async fn tickers_filters_by_quote_currency() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/v1/market/all");
        then.status(200)
            .header("content-type", "application/json")
            .body(
                r#"[{"market":"KRW-BTC"},{"market":"BTC-ETH"},{"market":"KRW-ETH"},{"market":"USDT-XRP"}]"#,
            );
    });

    let connector = connector_for(&server);
    let tickers = connector.tickers("KRW").await.unwrap();
    assert_eq!(tickers, vec!["KRW-BTC".to_string(), "KRW-ETH".to_string()]);
}

#[test]
fn advertises_expected_capabilities() {
    let connector = UpbitConnector::new_default();
    assert_eq!(connector.name(), "sise-upbit");
    assert!(connector.as_candle_provider().is_some());
    assert!(connector.as_price_provider().is_some());
    assert!(connector.as_ticker_provider().is_some());
    assert_eq!(
        connector.as_candle_provider().unwrap().max_page_size(),
        200
    );
}
