use aws_sdk_costexplorer::types::{
    DateInterval, Dimension, DimensionValues, Expression, Granularity, Metric,
};
use chrono::{Datelike, Duration, Local, NaiveDate};

use crate::config::ReportConfig;
use crate::session::AwsClients;

/// Days of daily usage forecast requested
const FORECAST_DAYS: i64 = 10;

/// Previous calendar month as a half-open [start, end) window.
pub fn previous_month_window(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let end = today.with_day(1).unwrap();
    let start = (end - Duration::days(1)).with_day(1).unwrap();
    (start, end)
}

/// Forecast window: tomorrow through ten days out.
pub fn forecast_window(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let start = today + Duration::days(1);
    let end = start + Duration::days(FORECAST_DAYS);
    (start, end)
}

fn date_interval(start: NaiveDate, end: NaiveDate) -> Result<DateInterval, Box<dyn std::error::Error>> {
    Ok(DateInterval::builder()
        .start(start.format("%Y-%m-%d").to_string())
        .end(end.format("%Y-%m-%d").to_string())
        .build()?)
}

/// Billing view parameter for the forecast call. An empty configured ARN is
/// omitted so the service falls back to the account's default view.
fn forecast_billing_view(arn: &str) -> Option<String> {
    (!arn.is_empty()).then(|| arn.to_string())
}

fn dimension_filter(key: Dimension, value: &str) -> Expression {
    Expression::builder()
        .dimensions(DimensionValues::builder().key(key).values(value).build())
        .build()
}

/// Print last month's unblended cost for the configured service and region,
/// one line pair per time bucket.
pub async fn report_cost_and_usage(
    clients: &AwsClients,
    report: &ReportConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let (start, end) = previous_month_window(Local::now().date_naive());

    let filter = Expression::builder()
        .and(dimension_filter(Dimension::Service, &report.service))
        .and(dimension_filter(Dimension::Region, &report.region))
        .build();

    let response = clients
        .cost_explorer
        .get_cost_and_usage()
        .time_period(date_interval(start, end)?)
        .granularity(Granularity::Monthly)
        .metrics("UnblendedCost")
        .filter(filter)
        .send()
        .await?;

    for result in response.results_by_time() {
        if let Some(period) = result.time_period() {
            println!("Time Period: {} to {}", period.start(), period.end());
        }
        if let Some(metric) = result.total().and_then(|total| total.get("UnblendedCost")) {
            println!(
                "Unblended Cost: {} {}",
                metric.amount().unwrap_or("0"),
                metric.unit().unwrap_or("")
            );
        }
    }

    Ok(())
}

/// Print the next ten days of forecast usage quantity for the configured
/// service and usage type.
pub async fn report_usage_forecast(
    clients: &AwsClients,
    report: &ReportConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let (start, end) = forecast_window(Local::now().date_naive());

    let filter = Expression::builder()
        .and(dimension_filter(Dimension::Service, &report.service))
        .and(dimension_filter(Dimension::UsageType, &report.usage_type))
        .build();

    let billing_view = forecast_billing_view(&report.billing_view_arn);
    if billing_view.is_none() {
        eprintln!("No billing view ARN configured; forecasting against the account default view.");
    }

    let response = clients
        .cost_explorer
        .get_usage_forecast()
        .time_period(date_interval(start, end)?)
        .granularity(Granularity::Daily)
        .metric(Metric::UsageQuantity)
        .filter(filter)
        .set_billing_view_arn(billing_view)
        .send()
        .await?;

    for result in response.forecast_results_by_time() {
        if let Some(period) = result.time_period() {
            println!("Time Period: {} to {}", period.start(), period.end());
        }
        println!("Mean value: {}", result.mean_value().unwrap_or("0"));
    }

    Ok(())
}
