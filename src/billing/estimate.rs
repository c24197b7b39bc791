use aws_sdk_bcmpricingcalculator::operation::list_workload_estimate_usage::ListWorkloadEstimateUsageError;

use crate::billing::pricing;
use crate::billing::types::UsageLine;
use crate::session::AwsClients;
use crate::store::RateCodeStore;

/// Bounded page size for usage line pagination
const USAGE_PAGE_SIZE: i32 = 100;

/// User-visible outcomes when a workload estimate cannot be read.
///
/// These are printed and swallowed rather than propagated; there is no retry.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum EstimateAccessError {
    #[error("Workload estimate id is invalid.")]
    NotFound,
    #[error("You do not have access to the workload estimate.")]
    AccessDenied,
    #[error("Workload estimate is unavailable.")]
    DataUnavailable,
}

fn classify(err: &ListWorkloadEstimateUsageError) -> Option<EstimateAccessError> {
    if err.is_resource_not_found_exception() {
        Some(EstimateAccessError::NotFound)
    } else if err.is_access_denied_exception() {
        Some(EstimateAccessError::AccessDenied)
    } else if err.is_data_unavailable_exception() {
        Some(EstimateAccessError::DataUnavailable)
    } else {
        None
    }
}

/// Paginate the workload estimate's usage lines and run the pricing lookup
/// for each one.
///
/// Stops when no continuation token is returned. The three named access
/// errors are printed and end the run cleanly; anything else propagates.
pub async fn run_extraction(
    clients: &AwsClients,
    store: &RateCodeStore,
    estimate_id: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut next_token: Option<String> = None;

    loop {
        let result = clients
            .pricing_calculator
            .list_workload_estimate_usage()
            .workload_estimate_id(estimate_id)
            .max_results(USAGE_PAGE_SIZE)
            .set_next_token(next_token.clone())
            .send()
            .await;

        let response = match result {
            Ok(response) => response,
            Err(err) => {
                let service_err = err.into_service_error();
                if let Some(outcome) = classify(&service_err) {
                    println!("{}", outcome);
                    return Ok(());
                }
                return Err(service_err.into());
            }
        };

        for item in response.items() {
            // operation may still be the empty string, which the pricing
            // lookup treats as "match any operation"
            let line = UsageLine {
                service_code: item.service_code().to_string(),
                usage_type: item.usage_type().to_string(),
                operation: item.operation().to_string(),
            };

            let rows_appended = pricing::extract_rate_codes(clients, store, &line).await?;
            if rows_appended == 0 {
                eprintln!(
                    "No rate code found for {} / {} / {}",
                    line.service_code, line.usage_type, line.operation
                );
            }
        }

        next_token = response.next_token().map(str::to_string);
        if next_token.is_none() {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_error_messages() {
        assert_eq!(
            EstimateAccessError::NotFound.to_string(),
            "Workload estimate id is invalid."
        );
        assert_eq!(
            EstimateAccessError::AccessDenied.to_string(),
            "You do not have access to the workload estimate."
        );
        assert_eq!(
            EstimateAccessError::DataUnavailable.to_string(),
            "Workload estimate is unavailable."
        );
    }
}
