use aws_sdk_pricing::error::BuildError;
use aws_sdk_pricing::types::{Filter, FilterType};
use serde_json::Value;

use crate::billing::rate_code::find_rate_code;
use crate::billing::types::{OutputRow, UsageLine};
use crate::session::AwsClients;
use crate::store::RateCodeStore;

/// Page cap for catalog queries; pricing documents are large
const PRODUCT_PAGE_SIZE: i32 = 5;

/// Term-match filters for one usage line.
///
/// The usage type is always matched. An empty operation means the usage type
/// has no operation qualifier, so the filter is omitted to match any
/// operation.
pub fn build_term_filters(usage_type: &str, operation: &str) -> Result<Vec<Filter>, BuildError> {
    let mut filters = vec![Filter::builder()
        .r#type(FilterType::TermMatch)
        .field("usageType")
        .value(usage_type)
        .build()?];

    if !operation.is_empty() {
        filters.push(
            Filter::builder()
                .r#type(FilterType::TermMatch)
                .field("operation")
                .value(operation)
                .build()?,
        );
    }

    Ok(filters)
}

/// Query the pricing catalog for one usage line and append a row per pricing
/// document whose `terms.OnDemand` subtree carries a rate code.
///
/// Returns the number of rows appended so the caller can see usage lines that
/// produced nothing.
pub async fn extract_rate_codes(
    clients: &AwsClients,
    store: &RateCodeStore,
    line: &UsageLine,
) -> Result<usize, Box<dyn std::error::Error>> {
    let filters = build_term_filters(&line.usage_type, &line.operation)?;
    let mut next_token: Option<String> = None;
    let mut rows_appended = 0;

    loop {
        let response = clients
            .pricing
            .get_products()
            .service_code(&line.service_code)
            .set_filters(Some(filters.clone()))
            .format_version("aws_v1")
            .max_results(PRODUCT_PAGE_SIZE)
            .set_next_token(next_token.clone())
            .send()
            .await?;

        for pricing_line in response.price_list() {
            let document: Value = serde_json::from_str(pricing_line)?;
            let on_demand = document
                .get("terms")
                .and_then(|terms| terms.get("OnDemand"))
                .ok_or("pricing document has no terms.OnDemand section")?;

            println!(
                "Service Code: {}, UsageType: {}, Operation: {}",
                line.service_code, line.usage_type, line.operation
            );

            if let Some(hit) = find_rate_code(on_demand) {
                println!("{}", hit.rate_code);
                store.append(&OutputRow::new(line, &hit))?;
                rows_appended += 1;
            }
        }

        next_token = response.next_token().map(str::to_string);
        if next_token.is_none() {
            break;
        }
    }

    Ok(rows_appended)
}
